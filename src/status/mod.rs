use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::consts::{OUTAGE, UNKNOWN};
use crate::platform::Platform;

pub mod schema;

/// Monitored service capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Feature {
    Authentication,
    Matchmaking,
    Purchase
}

impl Feature {
    /// List of features in their detection order
    #[inline]
    pub fn list() -> &'static [Feature] {
        &[Self::Authentication, Self::Matchmaking, Self::Purchase]
    }

    #[inline]
    pub fn to_name(&self) -> &str {
        match self {
            Self::Authentication => "Authentication",
            Self::Matchmaking    => "Matchmaking",
            Self::Purchase       => "Purchase"
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_name())
    }
}

/// Server status of a single platform
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    platform: Platform,
    connectivity: String,
    authentication: String,
    matchmaking: String,
    purchase: String,
    maintenance: bool,
    updated_at: Option<DateTime<Utc>>,
    raw: serde_json::Value
}

impl Status {
    /// Build status from the raw API response fragment
    ///
    /// Missing or null fields are replaced by `"Unknown"` or `false`. Fails only
    /// when a present field has a wrong type
    pub fn from_raw(platform: Platform, raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let response = schema::Response::deserialize(&raw)?;

        Ok(Self::from_schema(platform, response, raw))
    }

    pub(crate) fn from_schema(platform: Platform, response: schema::Response, raw: serde_json::Value) -> Self {
        let status = response.status.unwrap_or_default();
        let features = status.features.unwrap_or_default();
        let unknown = || String::from(UNKNOWN);

        Self {
            platform,
            connectivity: status.connectivity.unwrap_or_else(unknown),
            authentication: features.authentication.unwrap_or_else(unknown),
            matchmaking: features.matchmaking.unwrap_or_else(unknown),
            purchase: features.purchase.unwrap_or_else(unknown),
            maintenance: status.maintenance.unwrap_or(false),

            // Out of range timestamps are treated as absent
            updated_at: response.updated_at.and_then(|timestamp| {
                DateTime::from_timestamp_millis((timestamp * 1000.0) as i64)
            }),

            raw
        }
    }

    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[inline]
    pub fn connectivity(&self) -> &str {
        &self.connectivity
    }

    #[inline]
    pub fn authentication(&self) -> &str {
        &self.authentication
    }

    #[inline]
    pub fn matchmaking(&self) -> &str {
        &self.matchmaking
    }

    #[inline]
    pub fn purchase(&self) -> &str {
        &self.purchase
    }

    #[inline]
    pub fn maintenance(&self) -> bool {
        self.maintenance
    }

    /// Time of the last server-side update, if the API provided it
    #[inline]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Raw JSON fragment this status was built from
    #[inline]
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    #[inline]
    pub fn feature(&self, feature: Feature) -> &str {
        match feature {
            Feature::Authentication => &self.authentication,
            Feature::Matchmaking    => &self.matchmaking,
            Feature::Purchase       => &self.purchase
        }
    }

    /// Statuses of all the features in their detection order
    pub fn features(&self) -> Vec<(Feature, &str)> {
        Feature::list()
            .iter()
            .map(|feature| (*feature, self.feature(*feature)))
            .collect()
    }

    /// Features which are currently in outage, in detection order
    pub fn impacted_features(&self) -> Vec<Feature> {
        Feature::list()
            .iter()
            .copied()
            .filter(|feature| self.feature(*feature) == OUTAGE)
            .collect()
    }

    /// All the statuses joined into a single string
    ///
    /// `connectivity;authentication;purchase;matchmaking;maintenance`
    pub fn text(&self) -> String {
        format!(
            "{};{};{};{};{}",
            self.connectivity,
            self.authentication,
            self.purchase,
            self.matchmaking,
            self.maintenance
        )
    }
}
