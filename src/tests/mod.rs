use std::cell::RefCell;

use chrono::{DateTime, Utc};

use crate::prelude::*;

mod platform;
mod status;


/// Stores all the reported messages
#[derive(Debug, Default)]
pub struct Recorder {
    pub debug: RefCell<Vec<String>>,
    pub warn: RefCell<Vec<String>>
}

impl Diagnostics for Recorder {
    fn debug(&self, message: &str) {
        self.debug.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warn.borrow_mut().push(message.to_string());
    }
}

/// 2023-11-14T22:13:20Z
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp")
}

pub fn status(platform: Platform, authentication: &str, matchmaking: &str, purchase: &str, maintenance: bool) -> Status {
    Status::from_raw(platform, serde_json::json!({
        "Status": {
            "Connectivity": "Operational",
            "Maintenance": maintenance,
            "Features": {
                "Authentication": authentication,
                "Matchmaking": matchmaking,
                "Purchase": purchase
            }
        },
        "UpdatedAt": 1_700_000_000
    })).expect("valid status")
}

#[inline]
pub fn operational(platform: Platform) -> Status {
    status(platform, "Operational", "Operational", "Operational", false)
}

#[inline]
pub fn maintenance(platform: Platform) -> Status {
    status(platform, "Operational", "Operational", "Operational", true)
}

#[test]
fn test_version() {
    assert_eq!(crate::VERSION, env!("CARGO_PKG_VERSION"));
}
