//! Typed request parameters and response shapes for gateway operations.

use crate::model::profile::BrandProfile;
use crate::model::rule::{AutomationRule, RuleAction, RuleStatus, TriggerMetric, TriggerOperator};
use crate::model::{AdFormat, Platform};
use serde::{Deserialize, Serialize};

/// Inputs for ad copy generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdCreativeRequest {
    pub product_name: String,
    pub target_audience: String,
    pub platform: Platform,
    pub format: AdFormat,
    /// Brand identity the copy must adhere to.
    pub brand: Option<BrandProfile>,
    /// Trust signal to highlight, e.g. `Free returns`.
    pub trust_signal: Option<String>,
}

impl AdCreativeRequest {
    pub fn new(
        product_name: impl Into<String>,
        target_audience: impl Into<String>,
        platform: Platform,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            target_audience: target_audience.into(),
            platform,
            format: AdFormat::Feed,
            brand: None,
            trust_signal: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Portrait,
    #[serde(rename = "16:9")]
    Landscape,
}

impl AspectRatio {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "9:16",
            Self::Landscape => "16:9",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub summary: String,
    pub wins: Vec<String>,
    pub improvements: Vec<String>,
}

/// AI-suggested audience segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceSegment {
    pub name: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorInsight {
    pub name: String,
    /// Estimated share, 0..=100.
    pub market_share: f64,
    pub strength: String,
    pub weakness: String,
    pub ad_strategy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceOverlap {
    /// Estimated overlap, 0..=100.
    pub percentage: f64,
    pub insight: String,
}

/// Rule fields proposed by the model; becomes a rule once given an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleDraft {
    pub name: String,
    pub trigger_metric: TriggerMetric,
    pub trigger_operator: TriggerOperator,
    pub trigger_value: f64,
    pub timeframe: String,
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_value: Option<f64>,
}

impl RuleDraft {
    /// Builds an active, never-run rule.
    pub fn into_rule(self, id: impl Into<String>) -> AutomationRule {
        AutomationRule {
            id: id.into(),
            name: self.name,
            status: RuleStatus::Active,
            trigger_metric: self.trigger_metric,
            trigger_operator: self.trigger_operator,
            trigger_value: self.trigger_value,
            timeframe: self.timeframe,
            action: self.action,
            action_value: self.action_value,
            last_run: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScore {
    /// Model-assigned score; nominally 0..=100 but not trusted.
    pub score: f64,
    pub reason: String,
}
