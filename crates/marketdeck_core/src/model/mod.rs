//! Domain records held by the application store.
//!
//! # Responsibility
//! - Define the flat value records for every entity collection.
//! - Define partial-update patches with shallow-merge semantics.
//!
//! # Invariants
//! - Every collection record is identified by a caller-supplied id string.
//! - No record references another by foreign key; relations are by id match only.
//! - Serialized field names are camelCase to match seed and gateway JSON.

pub mod asset;
pub mod audience;
pub mod business;
pub mod campaign;
pub mod lead;
pub mod notification;
pub mod profile;
pub mod rule;
pub mod saved_ad;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Contract for records stored in an [`EntityCollection`](crate::repo::EntityCollection).
pub trait Keyed {
    /// Stable id used for update/delete lookups.
    fn id(&self) -> &str;
}

/// Ad delivery platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    WhatsApp,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Instagram => "Instagram",
            Self::WhatsApp => "WhatsApp",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creative placement format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdFormat {
    #[default]
    Feed,
    Story,
    Reel,
}

impl AdFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Story => "Story",
            Self::Reel => "Reel",
        }
    }

    /// Story and Reel placements render the headline as a short overlay.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Story | Self::Reel)
    }
}

impl Display for AdFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Overwrites `target` only when the patch field carries a value.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Same as [`merge`] for optional record fields.
pub(crate) fn merge_opt<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
