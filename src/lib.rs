pub mod consts;
pub mod platform;
pub mod status;
pub mod schedule;
pub mod comparison;
pub mod diagnostics;

#[cfg(feature = "fetch")]
pub mod api;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::consts::*;
    pub use super::platform::Platform;
    pub use super::status::{Feature, Status};
    pub use super::schedule::MaintenanceSchedule;
    pub use super::diagnostics::{Diagnostics, TracingDiagnostics};

    pub use super::comparison::{
        compare,
        compare_at,
        ComparisonDetail,
        ComparisonResult
    };

    #[cfg(feature = "fetch")]
    pub use super::api::{get_server_status, get_maintenance_schedule};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
