//! Read-only views over store collections.
//!
//! # Responsibility
//! - Filter and aggregate the slices returned by `AppStore` accessors.
//!
//! # Invariants
//! - Pure functions; nothing here mutates or logs.
//! - Text search is case-insensitive substring match; a blank needle matches all.

use crate::model::asset::{Asset, AssetKind};
use crate::model::audience::Audience;
use crate::model::business::TeamMember;
use crate::model::campaign::{Campaign, CampaignStatus};
use crate::model::lead::{Lead, LeadStatus};
use crate::model::Platform;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

fn contains_folded(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    pub status: Option<CampaignStatus>,
    pub platform: Option<Platform>,
}

impl CampaignFilter {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        contains_folded(&campaign.name, &self.search)
            && self.status.map_or(true, |status| campaign.status == status)
            && self
                .platform
                .map_or(true, |platform| campaign.platform == platform)
    }

    pub fn apply<'a>(&self, campaigns: &'a [Campaign]) -> Vec<&'a Campaign> {
        campaigns.iter().filter(|c| self.matches(c)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignSummary {
    pub total_spend: f64,
    pub average_roas: f64,
    pub active_count: usize,
    pub total_reach: u64,
    /// Keyed by status label, e.g. `Active`.
    pub spend_by_status: BTreeMap<String, f64>,
}

impl CampaignSummary {
    pub fn from_campaigns<'a, I>(campaigns: I) -> Self
    where
        I: IntoIterator<Item = &'a Campaign>,
    {
        let mut summary = Self::default();
        let mut roas_total = 0.0;
        let mut count = 0usize;
        for campaign in campaigns {
            count += 1;
            roas_total += campaign.roas;
            summary.total_spend += campaign.spend;
            summary.total_reach = summary.total_reach.saturating_add(campaign.reach);
            if campaign.status == CampaignStatus::Active {
                summary.active_count += 1;
            }
            *summary
                .spend_by_status
                .entry(campaign.status.as_str().to_string())
                .or_insert(0.0) += campaign.spend;
        }
        if count > 0 {
            summary.average_roas = roas_total / count as f64;
        }
        summary
    }
}

/// Campaigns whose inclusive date range covers `date`.
pub fn campaigns_active_on(campaigns: &[Campaign], date: NaiveDate) -> Vec<&Campaign> {
    campaigns.iter().filter(|c| c.runs_on(date)).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub status: Option<LeadStatus>,
    pub search: String,
}

impl LeadFilter {
    pub fn matches(&self, lead: &Lead) -> bool {
        self.status.map_or(true, |status| lead.status == status)
            && (contains_folded(&lead.name, &self.search)
                || contains_folded(&lead.email, &self.search))
    }

    pub fn apply<'a>(&self, leads: &'a [Lead]) -> Vec<&'a Lead> {
        leads.iter().filter(|lead| self.matches(lead)).collect()
    }
}

/// Counts per status, in pipeline order, including zero counts.
pub fn count_leads_by_status(leads: &[Lead]) -> Vec<(LeadStatus, usize)> {
    LeadStatus::ALL
        .iter()
        .map(|status| {
            let count = leads.iter().filter(|lead| lead.status == *status).count();
            (*status, count)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AssetKindFilter {
    #[default]
    All,
    Images,
    Videos,
}

impl AssetKindFilter {
    pub fn matches(self, asset: &Asset) -> bool {
        match self {
            Self::All => true,
            Self::Images => asset.kind == AssetKind::Image,
            Self::Videos => asset.kind == AssetKind::Video,
        }
    }

    pub fn apply(self, assets: &[Asset]) -> Vec<&Asset> {
        assets.iter().filter(|asset| self.matches(asset)).collect()
    }
}

/// Audiences whose name or type label contains `search`.
pub fn audiences_matching<'a>(audiences: &'a [Audience], search: &str) -> Vec<&'a Audience> {
    audiences
        .iter()
        .filter(|a| contains_folded(&a.name, search) || contains_folded(a.kind.as_str(), search))
        .collect()
}

pub fn team_matching<'a>(members: &'a [TeamMember], search: &str) -> Vec<&'a TeamMember> {
    members
        .iter()
        .filter(|m| contains_folded(&m.name, search) || contains_folded(&m.email, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::SeedData;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    #[test]
    fn empty_summary_has_zero_roas() {
        let none: [Campaign; 0] = [];
        let summary = CampaignSummary::from_campaigns(&none);
        assert_eq!(summary.average_roas, 0.0);
        assert_eq!(summary.active_count, 0);
        assert!(summary.spend_by_status.is_empty());
    }

    #[test]
    fn blank_search_matches_everything() {
        let seed = SeedData::relative_to(today());
        let filter = CampaignFilter::default();
        assert_eq!(filter.apply(&seed.campaigns).len(), seed.campaigns.len());
    }

    #[test]
    fn lead_counts_cover_every_status() {
        let counts = count_leads_by_status(&[]);
        assert_eq!(counts.len(), LeadStatus::ALL.len());
        assert!(counts.iter().all(|(_, n)| *n == 0));
    }
}
