use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::consts::MAX_IMPACT;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::platform::Platform;
use crate::schedule::MaintenanceSchedule;
use crate::status::{Feature, Status};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Every current status must have a previous status of the same platform
    #[error("Platform {0} is missing from the previous statuses")]
    MissingPlatform(Platform)
}

/// Kind of the change between two statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComparisonDetail {
    /// Every feature went down
    AllFeaturesOutage,

    /// No features are in outage anymore
    AllFeaturesOutageResolved,

    /// Some features went down while others still work
    SomeFeaturesOutage,

    /// Set of features in outage has changed
    SomeFeaturesOutageResolved,

    /// Maintenance started without a matching schedule
    StartMaintenance,

    /// Maintenance ended without a matching schedule
    EndMaintenance,

    /// Maintenance started within the announced schedule
    ScheduledMaintenanceStart,

    /// Maintenance ended within the announced schedule
    ScheduledMaintenanceEnd
}

/// Change shared by one or more platforms
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub detail: ComparisonDetail,

    /// Platforms which had this exact change, in order of the current statuses
    pub platforms: Vec<Platform>,

    /// Features which went down since the previous status
    pub impacted_features: Vec<Feature>,

    /// Features which were down in the previous status but work now
    pub resolved_impacted_features: Vec<Feature>
}

/// Fields of a status which take part in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusKey<'a> {
    pub connectivity: &'a str,
    pub authentication: &'a str,
    pub matchmaking: &'a str,
    pub purchase: &'a str,
    pub maintenance: bool
}

impl<'a> From<&'a Status> for StatusKey<'a> {
    fn from(status: &'a Status) -> Self {
        Self {
            connectivity: status.connectivity(),
            authentication: status.authentication(),
            matchmaking: status.matchmaking(),
            purchase: status.purchase(),
            maintenance: status.maintenance()
        }
    }
}

/// Platforms with equal transition keys changed in the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionKey<'a> {
    pub previous: StatusKey<'a>,
    pub current: StatusKey<'a>
}

impl<'a> TransitionKey<'a> {
    #[inline]
    pub fn new(previous: &'a Status, current: &'a Status) -> Self {
        Self {
            previous: previous.into(),
            current: current.into()
        }
    }
}

struct Bucket<'a> {
    previous: &'a Status,
    current: &'a Status,
    platforms: Vec<Platform>
}

/// Compare two server statuses lists at the current time
///
/// See `compare_at`
#[inline]
pub fn compare(
    previous: &[Status],
    current: &[Status],
    schedule: Option<&MaintenanceSchedule>
) -> Result<Vec<ComparisonResult>, Error> {
    compare_at(previous, current, schedule, Utc::now(), TracingDiagnostics)
}

/// Compare two server statuses lists and classify their changes
///
/// Platforms with identical transitions are reported by a single result.
/// Results follow the order of the first appearance of their platforms in `current`.
///
/// `now` is used to check whether a maintenance start or end
/// belongs to the `schedule` window.
///
/// Fails if a platform from `current` is missing in `previous`.
/// Empty `previous` or `current` lists produce no results
pub fn compare_at(
    previous: &[Status],
    current: &[Status],
    schedule: Option<&MaintenanceSchedule>,
    now: DateTime<Utc>,
    diagnostics: impl Diagnostics
) -> Result<Vec<ComparisonResult>, Error> {
    if previous.is_empty() || current.is_empty() {
        return Ok(Vec::new());
    }

    let mut buckets: Vec<Bucket> = Vec::new();
    let mut indices: HashMap<TransitionKey, usize> = HashMap::new();

    for status in current {
        let Some(previous_status) = previous.iter().find(|previous| previous.platform() == status.platform()) else {
            return Err(Error::MissingPlatform(status.platform()));
        };

        let key = TransitionKey::new(previous_status, status);

        match indices.get(&key) {
            Some(index) => buckets[*index].platforms.push(status.platform()),

            None => {
                indices.insert(key, buckets.len());

                buckets.push(Bucket {
                    previous: previous_status,
                    current: status,
                    platforms: vec![status.platform()]
                });
            }
        }
    }

    let scheduled = schedule.is_some_and(|schedule| schedule.is_active_at(now));

    let mut results = Vec::new();

    for bucket in buckets {
        results.extend(classify(&bucket, scheduled, &diagnostics));
    }

    Ok(results)
}

fn classify(bucket: &Bucket, scheduled: bool, diagnostics: &impl Diagnostics) -> Vec<ComparisonResult> {
    let Bucket { previous, current, platforms } = bucket;

    let impacted = current.impacted_features();
    let previous_impacted = previous.impacted_features();

    let resolved = previous_impacted.iter()
        .copied()
        .filter(|feature| !impacted.contains(feature))
        .collect::<Vec<_>>();

    let newly_impacted = impacted.iter()
        .copied()
        .filter(|feature| !previous_impacted.contains(feature))
        .collect::<Vec<_>>();

    diagnostics.debug(&format!(
        "{platforms:?}: {} -> {}, impacted {previous_impacted:?} -> {impacted:?}, new {newly_impacted:?}, resolved {resolved:?}",
        previous.text(),
        current.text()
    ));

    let result = |detail: ComparisonDetail| ComparisonResult {
        detail,
        platforms: platforms.clone(),
        impacted_features: newly_impacted.clone(),
        resolved_impacted_features: resolved.clone()
    };

    if current.maintenance() {
        // Ongoing maintenance is not a change
        if previous.maintenance() {
            return Vec::new();
        }

        return vec![result(if scheduled {
            ComparisonDetail::ScheduledMaintenanceStart
        } else {
            ComparisonDetail::StartMaintenance
        })];
    }

    let mut results = Vec::with_capacity(2);

    if previous.maintenance() {
        results.push(result(if scheduled {
            ComparisonDetail::ScheduledMaintenanceEnd
        } else {
            ComparisonDetail::EndMaintenance
        }));
    }

    if impacted.is_empty() {
        if !previous_impacted.is_empty() {
            results.push(result(ComparisonDetail::AllFeaturesOutageResolved));
        }
    }

    else if impacted.len() >= MAX_IMPACT {
        if previous_impacted.len() < impacted.len() {
            results.push(result(ComparisonDetail::AllFeaturesOutage));
        }
    }

    else if !same_features(&impacted, &previous_impacted) {
        if previous_impacted.is_empty() {
            results.push(result(ComparisonDetail::SomeFeaturesOutage));
        } else {
            results.push(result(ComparisonDetail::SomeFeaturesOutageResolved));
        }
    }

    results
}

/// Order-insensitive features lists comparison
#[inline]
fn same_features(a: &[Feature], b: &[Feature]) -> bool {
    a.iter().collect::<BTreeSet<_>>() == b.iter().collect::<BTreeSet<_>>()
}
