//! Automation rule record.
//!
//! Rules are stored and toggled only; nothing in core evaluates them against
//! live campaign metrics.

use crate::model::{merge, merge_opt, Keyed};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleStatus {
    Active,
    Paused,
}

impl Display for RuleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerMetric {
    #[serde(rename = "ROAS")]
    Roas,
    Spend,
    #[serde(rename = "CTR")]
    Ctr,
    #[serde(rename = "CPM")]
    Cpm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerOperator {
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = ">=")]
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleAction {
    #[serde(rename = "Pause Campaign")]
    PauseCampaign,
    #[serde(rename = "Increase Budget")]
    IncreaseBudget,
    #[serde(rename = "Decrease Budget")]
    DecreaseBudget,
    Notify,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRule {
    pub id: String,
    pub name: String,
    pub status: RuleStatus,
    pub trigger_metric: TriggerMetric,
    pub trigger_operator: TriggerOperator,
    pub trigger_value: f64,
    /// Free-form window label, e.g. `Last 3 Days`.
    pub timeframe: String,
    pub action: RuleAction,
    /// Percentage or amount, depending on `action`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_run: Option<String>,
}

impl Keyed for AutomationRule {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulePatch {
    pub name: Option<String>,
    pub status: Option<RuleStatus>,
    pub trigger_metric: Option<TriggerMetric>,
    pub trigger_operator: Option<TriggerOperator>,
    pub trigger_value: Option<f64>,
    pub timeframe: Option<String>,
    pub action: Option<RuleAction>,
    pub action_value: Option<f64>,
    pub last_run: Option<String>,
}

impl RulePatch {
    pub fn status(status: RuleStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply(self, rule: &mut AutomationRule) {
        merge(&mut rule.name, self.name);
        merge(&mut rule.status, self.status);
        merge(&mut rule.trigger_metric, self.trigger_metric);
        merge(&mut rule.trigger_operator, self.trigger_operator);
        merge(&mut rule.trigger_value, self.trigger_value);
        merge(&mut rule.timeframe, self.timeframe);
        merge(&mut rule.action, self.action);
        merge_opt(&mut rule.action_value, self.action_value);
        merge_opt(&mut rule.last_run, self.last_run);
    }
}
