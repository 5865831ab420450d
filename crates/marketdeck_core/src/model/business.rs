//! Business portfolio and team member records.

use crate::model::{merge, merge_opt, Keyed, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessStatus {
    Active,
    Pending,
    Restricted,
}

/// Social page owned by a business portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub category: String,
    pub platform: Platform,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessEntity {
    pub id: String,
    pub name: String,
    pub verified: bool,
    pub ad_accounts: u32,
    /// Display count; may differ from `page_entities.len()`.
    pub pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_entities: Option<Vec<Page>>,
    /// Local assignments, copied by value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_members: Option<Vec<TeamMember>>,
    pub status: BusinessStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_limit: Option<f64>,
}

impl Keyed for BusinessEntity {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub verified: Option<bool>,
    pub ad_accounts: Option<u32>,
    pub pages: Option<u32>,
    pub page_entities: Option<Vec<Page>>,
    pub assigned_members: Option<Vec<TeamMember>>,
    pub status: Option<BusinessStatus>,
    pub pixel_id: Option<String>,
    pub domain: Option<String>,
    pub spending_limit: Option<f64>,
}

impl BusinessPatch {
    pub fn apply(self, business: &mut BusinessEntity) {
        merge(&mut business.name, self.name);
        merge(&mut business.verified, self.verified);
        merge(&mut business.ad_accounts, self.ad_accounts);
        merge(&mut business.pages, self.pages);
        merge_opt(&mut business.page_entities, self.page_entities);
        merge_opt(&mut business.assigned_members, self.assigned_members);
        merge(&mut business.status, self.status);
        merge_opt(&mut business.pixel_id, self.pixel_id);
        merge_opt(&mut business.domain, self.domain);
        merge_opt(&mut business.spending_limit, self.spending_limit);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamRole {
    Admin,
    Editor,
    Analyst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: TeamRole,
    pub status: MemberStatus,
    pub last_active: String,
}

impl Keyed for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<TeamRole>,
    pub status: Option<MemberStatus>,
    pub last_active: Option<String>,
}

impl TeamMemberPatch {
    pub fn apply(self, member: &mut TeamMember) {
        merge(&mut member.name, self.name);
        merge(&mut member.email, self.email);
        merge(&mut member.role, self.role);
        merge(&mut member.status, self.status);
        merge(&mut member.last_active, self.last_active);
    }
}
