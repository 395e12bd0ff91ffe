use super::*;
use crate::net::types::ModelStatus;

#[test]
fn display_date_formats_iso_timestamps() {
    assert_eq!(display_date("2024-05-01T10:00:00"), "May 1, 2024");
    assert_eq!(display_date("2023-12-31T23:59:59.123Z"), "Dec 31, 2023");
    assert_eq!(display_date("2024-01-09"), "Jan 9, 2024");
}

#[test]
fn display_date_passes_through_unknown_input() {
    assert_eq!(display_date(""), "");
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date("2024-13-01T00:00:00"), "2024-13-01T00:00:00");
}

#[test]
fn status_chip_class_by_status() {
    assert!(status_chip_class(&ModelStatus::Completed).ends_with("--success"));
    assert!(status_chip_class(&ModelStatus::Processing).ends_with("--warning"));
    assert!(status_chip_class(&ModelStatus::Pending).ends_with("--info"));
    assert!(status_chip_class(&ModelStatus::Failed).ends_with("--error"));
    assert!(status_chip_class(&ModelStatus::Other("queued".to_owned())).ends_with("--error"));
}
