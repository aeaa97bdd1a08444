//! Build scheduling engines from configuration.

use crate::config::EngineConfig;
use crate::core::{AuditSink, InMemoryAuditSink, Scheduler, SchedulerError};

/// Validate `cfg` and start up an engine from it.
pub fn build_engine(cfg: &EngineConfig) -> Result<Scheduler, SchedulerError> {
    cfg.validate().map_err(SchedulerError::Config)?;
    Scheduler::new(cfg.cores, cfg.policy)
}

/// Fluent construction of an engine with optional auditing.
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    config: EngineConfig,
    audit_capacity: Option<usize>,
}

impl EngineBuilder {
    /// Start from a configuration.
    pub const fn new(config: EngineConfig) -> Self {
        Self {
            config,
            audit_capacity: None,
        }
    }

    /// Record scheduling decisions into a bounded in-memory audit log.
    #[must_use]
    pub const fn with_audit_capacity(mut self, max_events: usize) -> Self {
        self.audit_capacity = Some(max_events);
        self
    }

    /// Configuration the engine will be built from.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and build.
    pub fn build(self) -> Result<Scheduler, SchedulerError> {
        let engine = build_engine(&self.config)?;
        Ok(match self.audit_capacity {
            Some(max_events) => {
                let sink: Box<dyn AuditSink> = Box::new(InMemoryAuditSink::new(max_events));
                engine.with_audit(sink)
            }
            None => engine,
        })
    }
}
