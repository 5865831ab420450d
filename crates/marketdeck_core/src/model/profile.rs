//! Singleton user and brand profiles.
//!
//! Both are replaced by shallow merge: top-level fields present in a patch
//! overwrite, nested records (`social_links`, `preferences`) are replaced whole.

use crate::model::{merge, merge_opt};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub theme: Theme,
    pub compact_mode: bool,
    pub reduce_motion: bool,
    pub high_contrast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Away,
    Busy,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Presence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl UserProfile {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub status: Option<Presence>,
    pub social_links: Option<SocialLinks>,
    pub preferences: Option<UserPreferences>,
}

impl UserProfilePatch {
    pub fn apply(self, profile: &mut UserProfile) {
        merge(&mut profile.first_name, self.first_name);
        merge(&mut profile.last_name, self.last_name);
        merge(&mut profile.email, self.email);
        merge(&mut profile.role, self.role);
        merge_opt(&mut profile.job_title, self.job_title);
        merge_opt(&mut profile.department, self.department);
        merge_opt(&mut profile.location, self.location);
        merge_opt(&mut profile.bio, self.bio);
        merge_opt(&mut profile.phone, self.phone);
        merge_opt(&mut profile.language, self.language);
        merge_opt(&mut profile.timezone, self.timezone);
        merge_opt(&mut profile.avatar, self.avatar);
        merge_opt(&mut profile.cover_image, self.cover_image);
        merge_opt(&mut profile.status, self.status);
        merge_opt(&mut profile.social_links, self.social_links);
        merge_opt(&mut profile.preferences, self.preferences);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Tone of voice, e.g. `Witty` or `Professional`.
    pub voice: String,
    pub keywords: Vec<String>,
    /// CSS hex color.
    pub primary_color: String,
    pub target_audience: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandProfilePatch {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub voice: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub primary_color: Option<String>,
    pub target_audience: Option<String>,
}

impl BrandProfilePatch {
    pub fn apply(self, profile: &mut BrandProfile) {
        merge(&mut profile.name, self.name);
        merge(&mut profile.tagline, self.tagline);
        merge(&mut profile.description, self.description);
        merge(&mut profile.voice, self.voice);
        merge(&mut profile.keywords, self.keywords);
        merge(&mut profile.primary_color, self.primary_color);
        merge(&mut profile.target_audience, self.target_audience);
    }
}
