//! Tests for error types

use corewise::core::{Policy, SchedulerError};

#[test]
fn test_invalid_core_count_error() {
    let err = SchedulerError::InvalidCoreCount(0);
    assert_eq!(format!("{}", err), "invalid core count: 0");
}

#[test]
fn test_unknown_policy_error() {
    let err = SchedulerError::UnknownPolicy("edf".to_string());
    assert_eq!(format!("{}", err), "unknown policy: edf");
}

#[test]
fn test_core_out_of_range_error() {
    let err = SchedulerError::CoreOutOfRange { core: 4, cores: 2 };
    assert_eq!(format!("{}", err), "core 4 out of range (cores: 2)");
}

#[test]
fn test_not_round_robin_error() {
    let err = SchedulerError::NotRoundRobin(Policy::Sjf);
    assert_eq!(
        format!("{}", err),
        "quantum expiration under non-round-robin policy sjf"
    );
}

#[test]
fn test_missing_timing_error() {
    let err = SchedulerError::MissingTiming(7);
    assert_eq!(format!("{}", err), "job 7 finished without timing data");
}
