//! Tests for configuration validation

use corewise::config::EngineConfig;
use corewise::core::{Policy, SchedulerError};

#[test]
fn test_engine_config_validation() {
    assert!(EngineConfig::new(4, Policy::Sjf).validate().is_ok());
    assert!(EngineConfig::new(1, Policy::Rr).with_quantum(2).validate().is_ok());
}

#[test]
fn test_engine_config_invalid_cores() {
    assert!(EngineConfig::new(0, Policy::Fcfs).validate().is_err());
}

#[test]
fn test_engine_config_rr_needs_quantum() {
    assert!(EngineConfig::new(2, Policy::Rr).validate().is_err());
    assert!(EngineConfig::new(2, Policy::Rr).with_quantum(0).validate().is_err());
}

#[test]
fn test_engine_config_quantum_only_for_rr() {
    let err = EngineConfig::new(2, Policy::Ppri)
        .with_quantum(3)
        .validate()
        .unwrap_err();
    assert!(err.contains("ppri"));
}

#[test]
fn test_engine_config_from_json() {
    let json = r#"{
        "cores": 2,
        "policy": "rr",
        "quantum": 4
    }"#;

    let config = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(config, EngineConfig::new(2, Policy::Rr).with_quantum(4));
}

#[test]
fn test_engine_config_from_json_defaults_cores() {
    let config = EngineConfig::from_json_str(r#"{ "policy": "psjf" }"#).unwrap();
    assert!(config.cores >= 1);
    assert_eq!(config.policy, Policy::Psjf);
    assert_eq!(config.quantum, None);
}

#[test]
fn test_engine_config_from_json_unknown_policy() {
    let result = EngineConfig::from_json_str(r#"{ "cores": 1, "policy": "lottery" }"#);
    assert!(matches!(result, Err(SchedulerError::Config(_))));
}

#[test]
fn test_engine_config_serializes_policy_lowercase() {
    let json = serde_json::to_string(&EngineConfig::new(1, Policy::Fcfs)).unwrap();
    assert!(json.contains(r#""policy":"fcfs""#));
}

#[test]
fn test_engine_config_from_env() {
    use corewise::config::engine::{ENV_CORES, ENV_POLICY, ENV_QUANTUM};

    std::env::set_var(ENV_POLICY, "RR");
    std::env::set_var(ENV_CORES, "3");
    std::env::set_var(ENV_QUANTUM, "5");
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::new(3, Policy::Rr).with_quantum(5));

    std::env::set_var(ENV_POLICY, "lottery");
    assert!(EngineConfig::from_env().is_err());

    std::env::set_var(ENV_POLICY, "sjf");
    assert!(EngineConfig::from_env().is_err(), "quantum set for sjf");

    std::env::remove_var(ENV_QUANTUM);
    std::env::remove_var(ENV_CORES);
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config.policy, Policy::Sjf);
    assert!(config.cores >= 1);

    std::env::remove_var(ENV_POLICY);
    assert!(EngineConfig::from_env().is_err());
}
