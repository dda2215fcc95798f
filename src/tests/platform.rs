use crate::prelude::*;

#[test]
fn test_platform_names() {
    assert_eq!(Platform::list().len(), 5);

    assert_eq!(Platform::XBSX.to_name(), "XBSX");
    assert_eq!(Platform::XBSX.to_value(), "XBSX/S");
    assert_eq!(Platform::PS5.to_value(), "PS5");
    assert_eq!(Platform::XB1.to_string(), "XB1");
}

#[test]
fn test_platform_from_str() {
    for platform in Platform::list() {
        assert_eq!(Platform::from_str(platform.to_name()), Some(*platform));
        assert_eq!(Platform::from_str(platform.to_value()), Some(*platform));
    }

    assert_eq!(Platform::from_str("All"), None);
    assert_eq!(Platform::from_str("pc"), None);
    assert_eq!(Platform::from_str(""), None);
}
