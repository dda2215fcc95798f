use serde_json::json;

use crate::prelude::*;

#[test]
fn test_full_status() {
    let status = Status::from_raw(Platform::PC, json!({
        "Status": {
            "Connectivity": "Operational",
            "Maintenance": false,
            "Features": {
                "Authentication": "Outage",
                "Matchmaking": "Operational",
                "Purchase": "Degraded"
            }
        },
        "UpdatedAt": 1_700_000_000.5
    })).expect("valid status");

    assert_eq!(status.platform(), Platform::PC);
    assert_eq!(status.connectivity(), "Operational");
    assert_eq!(status.authentication(), "Outage");
    assert_eq!(status.matchmaking(), "Operational");
    assert_eq!(status.purchase(), "Degraded");
    assert!(!status.maintenance());

    let updated_at = status.updated_at().expect("updated_at is set");

    assert_eq!(updated_at.timestamp(), 1_700_000_000);
    assert_eq!(updated_at.timestamp_subsec_millis(), 500);

    assert_eq!(status.text(), "Operational;Outage;Degraded;Operational;false");
    assert_eq!(status.impacted_features(), vec![Feature::Authentication]);

    assert_eq!(status.features(), vec![
        (Feature::Authentication, "Outage"),
        (Feature::Matchmaking, "Operational"),
        (Feature::Purchase, "Degraded")
    ]);

    assert_eq!(status.raw()["Status"]["Connectivity"], "Operational");
}

#[test]
fn test_missing_fields() {
    let status = Status::from_raw(Platform::PS4, json!({
        "Status": {
            "Features": {
                "Matchmaking": "Outage"
            }
        }
    })).expect("valid status");

    assert_eq!(status.connectivity(), "Unknown");
    assert_eq!(status.authentication(), "Unknown");
    assert_eq!(status.matchmaking(), "Outage");
    assert_eq!(status.purchase(), "Unknown");
    assert!(!status.maintenance());
    assert_eq!(status.updated_at(), None);

    assert_eq!(status.text(), "Unknown;Unknown;Unknown;Outage;false");

    let status = Status::from_raw(Platform::PS5, json!({})).expect("valid status");

    assert_eq!(status.text(), "Unknown;Unknown;Unknown;Unknown;false");
    assert!(status.impacted_features().is_empty());
}

#[test]
fn test_null_fields() {
    let status = Status::from_raw(Platform::XB1, json!({
        "Status": {
            "Connectivity": null,
            "Maintenance": null,
            "Features": {}
        },
        "UpdatedAt": null
    })).expect("valid status");

    assert_eq!(status.connectivity(), "Unknown");
    assert!(!status.maintenance());
    assert_eq!(status.updated_at(), None);
}

#[test]
fn test_maintenance() {
    let status = super::maintenance(Platform::XBSX);

    assert!(status.maintenance());
    assert_eq!(status.text(), "Operational;Operational;Operational;Operational;true");
}

#[test]
fn test_impacted_features_order() {
    let status = super::status(Platform::PC, "Outage", "Outage", "Outage", false);

    assert_eq!(status.impacted_features(), vec![
        Feature::Authentication,
        Feature::Matchmaking,
        Feature::Purchase
    ]);

    let status = super::status(Platform::PC, "Operational", "Outage", "Outage", false);

    assert_eq!(status.impacted_features(), vec![Feature::Matchmaking, Feature::Purchase]);
}

#[test]
fn test_wrong_types() {
    assert!(Status::from_raw(Platform::PC, json!({ "Status": { "Maintenance": "yes" } })).is_err());
    assert!(Status::from_raw(Platform::PC, json!({ "Status": { "Connectivity": 1 } })).is_err());
    assert!(Status::from_raw(Platform::PC, json!("Operational")).is_err());
}

#[test]
fn test_null_objects() {
    let status = Status::from_raw(Platform::PC, json!({
        "Status": {
            "Connectivity": "Operational",
            "Maintenance": true,
            "Features": null
        }
    })).expect("valid status");

    assert_eq!(status.connectivity(), "Operational");
    assert!(status.maintenance());
    assert_eq!(status.text(), "Operational;Unknown;Unknown;Unknown;true");

    let status = Status::from_raw(Platform::PS4, json!({ "Status": null })).expect("valid status");

    assert_eq!(status.text(), "Unknown;Unknown;Unknown;Unknown;false");
}
