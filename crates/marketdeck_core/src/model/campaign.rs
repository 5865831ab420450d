//! Ad campaign record.
//!
//! # Invariants
//! - `start_date <= end_date` is expected but not enforced; calendar lookups
//!   simply never match an inverted range.

use crate::model::{merge, Keyed, Platform};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Active,
    Paused,
    Review,
    Draft,
}

impl CampaignStatus {
    pub const ALL: [CampaignStatus; 4] = [Self::Active, Self::Paused, Self::Review, Self::Draft];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Review => "Review",
            Self::Draft => "Draft",
        }
    }
}

impl Display for CampaignStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub status: CampaignStatus,
    pub spend: f64,
    pub reach: u64,
    /// Return on ad spend.
    pub roas: f64,
    pub platform: Platform,
    pub ctr: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Campaign {
    /// Creates a draft campaign with zeroed delivery metrics.
    pub fn draft(
        id: impl Into<String>,
        name: impl Into<String>,
        platform: Platform,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: CampaignStatus::Draft,
            spend: 0.0,
            reach: 0,
            roas: 0.0,
            platform,
            ctr: 0.0,
            start_date,
            end_date,
        }
    }

    /// Inclusive date-range check used by the calendar view.
    pub fn runs_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

impl Keyed for Campaign {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Partial update for [`Campaign`]. The id is never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignPatch {
    pub name: Option<String>,
    pub status: Option<CampaignStatus>,
    pub spend: Option<f64>,
    pub reach: Option<u64>,
    pub roas: Option<f64>,
    pub platform: Option<Platform>,
    pub ctr: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CampaignPatch {
    pub fn status(status: CampaignStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, campaign: &mut Campaign) {
        merge(&mut campaign.name, self.name);
        merge(&mut campaign.status, self.status);
        merge(&mut campaign.spend, self.spend);
        merge(&mut campaign.reach, self.reach);
        merge(&mut campaign.roas, self.roas);
        merge(&mut campaign.platform, self.platform);
        merge(&mut campaign.ctr, self.ctr);
        merge(&mut campaign.start_date, self.start_date);
        merge(&mut campaign.end_date, self.end_date);
    }
}
