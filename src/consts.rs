pub const DEFAULT_API_URI: &str = "https://api-r6sss.milkeyyy.com/v2";

/// Default HTTP requests timeout, in seconds
pub const DEFAULT_REQUESTS_TIMEOUT: u64 = 7;

/// Amount of minutes before the announced maintenance start
/// which is still attributed to the schedule
pub const SCHEDULE_START_PAD_MINUTES: i64 = 10;

/// Amount of minutes after the announced maintenance end
/// which is still attributed to the schedule
pub const SCHEDULE_END_PAD_MINUTES: i64 = 30;

/// Number of tracked features. When this many are in outage
/// the servers are considered fully down
pub const MAX_IMPACT: usize = 3;

/// Status value of a feature which is not working
pub const OUTAGE: &str = "Outage";

/// Status value used when the API omits a field
pub const UNKNOWN: &str = "Unknown";

lazy_static::lazy_static! {
    /// Status API base URI
    ///
    /// Can be overridden with `R6SSS_API_URI` env variable
    pub static ref API_URI: String = std::env::var("R6SSS_API_URI")
        .map(|uri| uri.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| String::from(DEFAULT_API_URI));

    /// HTTP requests timeout, in seconds
    ///
    /// Can be overridden with `R6SSS_REQUESTS_TIMEOUT` env variable
    pub static ref REQUESTS_TIMEOUT: u64 = std::env::var("R6SSS_REQUESTS_TIMEOUT")
        .ok()
        .and_then(|timeout| timeout.parse().ok())
        .unwrap_or(DEFAULT_REQUESTS_TIMEOUT);
}
