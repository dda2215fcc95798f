use crate::consts::{API_URI, REQUESTS_TIMEOUT};
use crate::diagnostics::TracingDiagnostics;
use crate::platform::Platform;
use crate::schedule::MaintenanceSchedule;
use crate::status::Status;

pub mod schema;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to send request: {0}")]
    Request(#[from] minreq::Error),

    /// API responded with non-200 status code
    #[error("API responded with status {code}: {}", .detail.as_deref().unwrap_or("no details"))]
    Status {
        code: i32,
        detail: Option<String>
    },

    #[error("Failed to decode API response: {0}")]
    Json(#[from] serde_json::Error)
}

/// Fetch server statuses of the given platforms, or of all of them if `None`
///
/// Returns empty vector if the API has no data
#[tracing::instrument(level = "trace")]
pub fn get_server_status(platforms: Option<&[Platform]>) -> Result<Vec<Status>, Error> {
    tracing::trace!("Fetching server status");

    let mut request = minreq::get(format!("{}/status", *API_URI))
        .with_timeout(*REQUESTS_TIMEOUT);

    for platform in platforms.unwrap_or_default() {
        request = request.with_param("platform", platform.to_value());
    }

    let response = request.send()?;

    parse_status_response(response.status_code, response.as_bytes())
}

/// Fetch the latest maintenance schedule
///
/// Returns `None` if there's no announced schedule.
/// Successful results are cached for a minute
#[cached::proc_macro::cached(time = 60, result)]
#[tracing::instrument(level = "trace")]
pub fn get_maintenance_schedule() -> Result<Option<MaintenanceSchedule>, Error> {
    tracing::trace!("Fetching maintenance schedule");

    let response = minreq::get(format!("{}/schedule/latest", *API_URI))
        .with_timeout(*REQUESTS_TIMEOUT)
        .send()?;

    parse_schedule_response(response.status_code, response.as_bytes())
}

/// Check response status code and turn it into an error if it's not 200
fn check_status(code: i32, body: &[u8]) -> Result<(), Error> {
    if code == 200 {
        return Ok(());
    }

    let detail = serde_json::from_slice::<schema::ErrorResponse>(body)
        .ok()
        .and_then(|response| response.detail());

    tracing::error!(?detail, "Status API responded with code {code}");

    Err(Error::Status {
        code,
        detail
    })
}

/// Parse `/status` endpoint response
pub fn parse_status_response(code: i32, body: &[u8]) -> Result<Vec<Status>, Error> {
    check_status(code, body)?;

    let response = serde_json::from_slice::<schema::Response<serde_json::Map<String, serde_json::Value>>>(body)?;

    let Some(data) = response.data.filter(|data| !data.is_empty()) else {
        tracing::warn!("Status API returned no data");

        return Ok(Vec::new());
    };

    let mut statuses = Vec::with_capacity(data.len());

    for (name, raw) in data {
        let Some(platform) = Platform::from_str(&name) else {
            tracing::warn!("Skipping unknown platform: {name}");

            continue;
        };

        statuses.push(Status::from_raw(platform, raw)?);
    }

    Ok(statuses)
}

/// Parse `/schedule/latest` endpoint response
pub fn parse_schedule_response(code: i32, body: &[u8]) -> Result<Option<MaintenanceSchedule>, Error> {
    check_status(code, body)?;

    let response = serde_json::from_slice::<schema::Response<serde_json::Value>>(body)?;

    match response.data {
        Some(data) if !data.is_null() => Ok(Some(MaintenanceSchedule::from_raw(&data, TracingDiagnostics)?)),

        _ => {
            tracing::warn!("Status API returned no maintenance schedule");

            Ok(None)
        }
    }
}
