//! CRM lead record.

use crate::model::{merge, merge_opt, Keyed, Platform};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const MAX_QUALITY_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Converted,
    Lost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 5] = [
        Self::New,
        Self::Contacted,
        Self::Qualified,
        Self::Converted,
        Self::Lost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Contacted => "Contacted",
            Self::Qualified => "Qualified",
            Self::Converted => "Converted",
            Self::Lost => "Lost",
        }
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Capture point, e.g. a lead form name.
    pub source: String,
    pub platform: Platform,
    pub status: LeadStatus,
    /// 0..=100.
    pub quality_score: u8,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Keyed for Lead {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub platform: Option<Platform>,
    pub status: Option<LeadStatus>,
    pub quality_score: Option<u8>,
    pub notes: Option<String>,
}

impl LeadPatch {
    pub fn apply(self, lead: &mut Lead) {
        merge(&mut lead.name, self.name);
        merge(&mut lead.email, self.email);
        merge_opt(&mut lead.phone, self.phone);
        merge(&mut lead.source, self.source);
        merge(&mut lead.platform, self.platform);
        merge(&mut lead.status, self.status);
        merge(
            &mut lead.quality_score,
            self.quality_score.map(|score| score.min(MAX_QUALITY_SCORE)),
        );
        merge_opt(&mut lead.notes, self.notes);
    }
}
