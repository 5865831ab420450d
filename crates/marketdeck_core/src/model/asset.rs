//! Creative asset library record.

use crate::model::{merge, merge_opt, Keyed};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub url: String,
    /// Human-readable size label, e.g. `2.4 MB`.
    pub size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
}

impl Keyed for Asset {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub size: Option<String>,
    pub dimensions: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl AssetPatch {
    pub fn apply(self, asset: &mut Asset) {
        merge(&mut asset.name, self.name);
        merge(&mut asset.url, self.url);
        merge(&mut asset.size, self.size);
        merge_opt(&mut asset.dimensions, self.dimensions);
        merge(&mut asset.tags, self.tags);
    }
}
