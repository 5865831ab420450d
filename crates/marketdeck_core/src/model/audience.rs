//! Targeting audience record.

use crate::model::{merge, merge_opt, Keyed, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudienceType {
    Lookalike,
    Custom,
    Saved,
}

impl AudienceType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lookalike => "Lookalike",
            Self::Custom => "Custom",
            Self::Saved => "Saved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audience {
    pub id: String,
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: AudienceType,
    #[serde(rename = "platform")]
    pub platforms: Vec<Platform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_rate: Option<f64>,
    pub last_updated: String,
    /// Set for AI-generated segments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
}

impl Keyed for Audience {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudiencePatch {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub kind: Option<AudienceType>,
    pub platforms: Option<Vec<Platform>>,
    pub match_rate: Option<f64>,
    pub last_updated: Option<String>,
    pub description: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl AudiencePatch {
    pub fn apply(self, audience: &mut Audience) {
        merge(&mut audience.name, self.name);
        merge(&mut audience.size, self.size);
        merge(&mut audience.kind, self.kind);
        merge(&mut audience.platforms, self.platforms);
        merge_opt(&mut audience.match_rate, self.match_rate);
        merge(&mut audience.last_updated, self.last_updated);
        merge_opt(&mut audience.description, self.description);
        merge_opt(&mut audience.interests, self.interests);
    }
}
