use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, Timelike, Utc};
use serde::Deserialize;

use crate::consts::{SCHEDULE_END_PAD_MINUTES, SCHEDULE_START_PAD_MINUTES, UNKNOWN};
use crate::diagnostics::Diagnostics;
use crate::platform::Platform;

pub mod schema;

use schema::{PlatformName, ALL_PLATFORMS};

/// Announced or in-progress maintenance window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    title: String,
    detail: String,
    patch_notes_url: String,
    downtime_minutes: i64,
    scheduled_at: DateTime<Utc>,
    platforms: BTreeSet<Platform>
}

impl Default for MaintenanceSchedule {
    fn default() -> Self {
        Self {
            title: String::new(),
            detail: String::new(),
            patch_notes_url: String::new(),
            downtime_minutes: 0,
            scheduled_at: DateTime::UNIX_EPOCH,
            platforms: BTreeSet::new()
        }
    }
}

impl MaintenanceSchedule {
    /// Sub-second precision of `scheduled_at` is dropped
    pub fn new(
        title: impl Into<String>,
        detail: impl Into<String>,
        patch_notes_url: impl Into<String>,
        downtime_minutes: i64,
        scheduled_at: DateTime<Utc>,
        platforms: impl IntoIterator<Item = Platform>
    ) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            patch_notes_url: patch_notes_url.into(),
            downtime_minutes,
            scheduled_at: scheduled_at.with_nanosecond(0).unwrap_or(scheduled_at),
            platforms: platforms.into_iter().collect()
        }
    }

    /// Build schedule from the raw API response fragment
    ///
    /// Missing strings are replaced by `"Unknown"`, missing downtime by `0`.
    /// `Timestamp` is preferred over `Date`. Unparsable dates and unknown
    /// platform names are reported to `diagnostics` and ignored
    pub fn from_raw(raw: &serde_json::Value, diagnostics: impl Diagnostics) -> Result<Self, serde_json::Error> {
        let schedule = schema::Schedule::deserialize(raw)?;

        Ok(Self::from_schema(schedule, diagnostics))
    }

    /// Alias of `from_raw` for reading back `to_json` output
    #[inline]
    pub fn from_json(json: &serde_json::Value, diagnostics: impl Diagnostics) -> Result<Self, serde_json::Error> {
        Self::from_raw(json, diagnostics)
    }

    pub fn from_schema(schedule: schema::Schedule, diagnostics: impl Diagnostics) -> Self {
        let unknown = || String::from(UNKNOWN);

        let timestamp = schedule.timestamp.as_ref().and_then(parse_timestamp);

        if let (None, Some(raw)) = (timestamp, &schedule.timestamp) {
            diagnostics.warn(&format!("Invalid maintenance schedule timestamp: {raw}"));
        }

        let scheduled_at = timestamp.or_else(|| match &schedule.date {
            Some(date) => {
                let parsed = parse_date(date);

                if parsed.is_none() {
                    diagnostics.warn(&format!("Invalid maintenance schedule date: {date}"));
                }

                parsed
            }

            None => {
                if schedule.timestamp.is_none() {
                    diagnostics.warn("Maintenance schedule has no date");
                }

                None
            }
        });

        Self {
            title: schedule.title.unwrap_or_else(unknown),
            detail: schedule.detail.unwrap_or_else(unknown),
            patch_notes_url: schedule.patch_notes.unwrap_or_else(unknown),
            downtime_minutes: schedule.downtime.as_ref().map(parse_minutes).unwrap_or(0),
            scheduled_at: scheduled_at.unwrap_or(DateTime::UNIX_EPOCH),
            platforms: decode_platforms(&schedule.platforms, diagnostics)
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    #[inline]
    pub fn patch_notes_url(&self) -> &str {
        &self.patch_notes_url
    }

    #[inline]
    pub fn downtime_minutes(&self) -> i64 {
        self.downtime_minutes
    }

    #[inline]
    pub fn scheduled_at(&self) -> DateTime<Utc> {
        self.scheduled_at
    }

    /// ISO 8601 representation of `scheduled_at`
    ///
    /// `2024-03-05T13:00:00Z`
    #[inline]
    pub fn date(&self) -> String {
        self.scheduled_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    #[inline]
    pub fn platforms(&self) -> &BTreeSet<Platform> {
        &self.platforms
    }

    /// Check whether given time belongs to this maintenance window
    ///
    /// The window is padded by 10 minutes before the start
    /// and 30 minutes after the end. Windows which don't fit
    /// into the supported dates range are never active
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        let start = Duration::try_minutes(SCHEDULE_START_PAD_MINUTES)
            .and_then(|pad| self.scheduled_at.checked_sub_signed(pad));

        let end = Duration::try_minutes(self.downtime_minutes)
            .zip(Duration::try_minutes(SCHEDULE_END_PAD_MINUTES))
            .and_then(|(downtime, pad)| downtime.checked_add(&pad))
            .and_then(|length| self.scheduled_at.checked_add_signed(length));

        match (start, end) {
            (Some(start), Some(end)) => start <= now && now <= end,

            _ => false
        }
    }

    /// Serialize schedule to the same format the API uses
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "Title": self.title,
            "Detail": self.detail,
            "Downtime": self.downtime_minutes,
            "Timestamp": self.scheduled_at.timestamp(),
            "Date": self.date(),
            "PatchNotes": self.patch_notes_url,
            "Platforms": encode_platforms(&self.platforms),
            "Result": true
        })
    }
}

/// Convert platforms set to the API's platforms list
///
/// Full set is encoded as a single `All` entry
pub fn encode_platforms(platforms: &BTreeSet<Platform>) -> Vec<PlatformName> {
    if Platform::list().iter().all(|platform| platforms.contains(platform)) {
        return vec![PlatformName::new(ALL_PLATFORMS)];
    }

    platforms.iter()
        .map(|platform| PlatformName::new(platform.to_value()))
        .collect()
}

/// Convert the API's platforms list to the platforms set
///
/// `All` entry is expanded to every platform
pub fn decode_platforms(names: &[PlatformName], diagnostics: impl Diagnostics) -> BTreeSet<Platform> {
    let mut platforms = BTreeSet::new();

    for PlatformName { name } in names {
        if name == ALL_PLATFORMS {
            platforms.extend(Platform::list());
        }

        else if let Some(platform) = Platform::from_str(name) {
            platforms.insert(platform);
        }

        else {
            diagnostics.warn(&format!("Unknown maintenance schedule platform: {name}"));
        }
    }

    platforms
}

fn parse_timestamp(timestamp: &serde_json::Number) -> Option<DateTime<Utc>> {
    match timestamp.as_i64() {
        Some(timestamp) => DateTime::from_timestamp(timestamp, 0),
        None => timestamp.as_f64().and_then(|timestamp| DateTime::from_timestamp(timestamp.trunc() as i64, 0))
    }
}

/// Fractional minutes are truncated, out of range values are saturated
fn parse_minutes(minutes: &serde_json::Number) -> i64 {
    match minutes.as_i64() {
        Some(minutes) => minutes,
        None => minutes.as_f64().map(|minutes| minutes.trunc() as i64).unwrap_or(0)
    }
}

fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    let date = match DateTime::parse_from_rfc3339(date) {
        Ok(date) => date.with_timezone(&Utc),

        // Dates without timezone are UTC
        Err(_) => NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f").ok()?.and_utc()
    };

    Some(date.with_nanosecond(0).unwrap_or(date))
}
