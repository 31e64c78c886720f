//! Serde representation tests for JobId (requires the `serde` feature).

use jobcast::JobId;

#[test]
fn test_job_id_serializes_transparently() {
    let json = serde_json::to_string(&JobId::new(42)).unwrap();
    assert_eq!(json, "42");
}

#[test]
fn test_sentinel_roundtrips() {
    let json = serde_json::to_string(&JobId::INVALID).unwrap();
    let back: JobId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, JobId::INVALID);
    assert!(!back.is_valid());
}

#[test]
fn test_job_id_deserializes_from_a_bare_number() {
    let id: JobId = serde_json::from_str("7").unwrap();
    assert_eq!(id, JobId::new(7));
}
