use serde::{Serialize, Deserialize};

/// Value of the platform name which means every platform
pub const ALL_PLATFORMS: &str = "All";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    pub title: Option<String>,
    pub detail: Option<String>,

    /// Duration in minutes, can be fractional
    pub downtime: Option<serde_json::Number>,

    /// Unix timestamp of the maintenance start
    pub timestamp: Option<serde_json::Number>,

    /// ISO 8601 representation of the timestamp
    pub date: Option<String>,

    pub patch_notes: Option<String>,

    #[serde(default)]
    pub platforms: Vec<PlatformName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformName {
    #[serde(rename = "Name")]
    pub name: String
}

impl PlatformName {
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into()
        }
    }
}
