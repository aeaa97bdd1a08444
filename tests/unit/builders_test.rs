//! Tests for builder modules

use corewise::builders::{build_engine, EngineBuilder};
use corewise::config::EngineConfig;
use corewise::core::{AuditAction, Policy, SchedulerError};

#[test]
fn test_build_engine_from_config() {
    let engine = build_engine(&EngineConfig::new(3, Policy::Pri)).unwrap();
    assert_eq!(engine.cores(), 3);
    assert_eq!(engine.policy(), Policy::Pri);
    assert!(engine.audit().is_none());
}

#[test]
fn test_build_engine_rejects_invalid_config() {
    let result = build_engine(&EngineConfig::new(0, Policy::Fcfs));
    assert!(matches!(result, Err(SchedulerError::Config(_))));
}

#[test]
fn test_builder_with_audit_records_decisions() {
    let builder = EngineBuilder::new(EngineConfig::new(1, Policy::Ppri)).with_audit_capacity(16);
    assert_eq!(builder.config().cores, 1);

    let mut engine = builder.build().unwrap();
    engine.new_job(1, 0, 10, 5).unwrap();
    engine.new_job(2, 1, 2, 1).unwrap();
    engine.job_finished(0, 2, 3).unwrap();

    let actions: Vec<(u32, AuditAction)> = engine
        .audit()
        .unwrap()
        .events()
        .iter()
        .map(|e| (e.job_id, e.action))
        .collect();
    assert_eq!(
        actions,
        vec![
            (1, AuditAction::Arrive),
            (1, AuditAction::Dispatch),
            (2, AuditAction::Arrive),
            (1, AuditAction::Preempt),
            (2, AuditAction::Dispatch),
            (2, AuditAction::Finish),
            (1, AuditAction::Dispatch),
        ]
    );
}
