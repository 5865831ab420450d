//! Generated ad copy and saved creatives.

use crate::model::{AdFormat, Keyed, Platform};
use serde::{Deserialize, Serialize};

/// Ad copy as produced by the gateway's creative generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headline: String,
    pub body: String,
    pub call_to_action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Data URL or remote URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdReviewStatus {
    Draft,
    Review,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAd {
    pub id: String,
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub created_at: String,
    pub platform: Platform,
    pub format: AdFormat,
    pub product_name: String,
    pub status: AdReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Keyed for SavedAd {
    fn id(&self) -> &str {
        &self.id
    }
}
