//! Engine configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

use crate::core::{AppResult, Policy, SchedulerError};

/// Environment variable holding the core count.
pub const ENV_CORES: &str = "COREWISE_CORES";
/// Environment variable holding the policy name.
pub const ENV_POLICY: &str = "COREWISE_POLICY";
/// Environment variable holding the round-robin quantum.
pub const ENV_QUANTUM: &str = "COREWISE_QUANTUM";

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of simulated cores.
    #[serde(default = "default_cores")]
    pub cores: usize,
    /// Scheduling policy.
    pub policy: Policy,
    /// Round-robin time slice handed to the driver. Only valid for `rr`.
    #[serde(default)]
    pub quantum: Option<u64>,
}

fn default_cores() -> usize {
    num_cpus::get()
}

impl EngineConfig {
    /// Config for `policy` on `cores` cores without a quantum.
    pub const fn new(cores: usize, policy: Policy) -> Self {
        Self {
            cores,
            policy,
            quantum: None,
        }
    }

    /// Set the round-robin quantum.
    #[must_use]
    pub const fn with_quantum(mut self, quantum: u64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.cores == 0 {
            return Err("cores must be greater than 0".into());
        }
        match (self.policy, self.quantum) {
            (Policy::Rr, None) => Err("rr requires a quantum".into()),
            (Policy::Rr, Some(0)) => Err("quantum must be greater than 0".into()),
            (Policy::Rr, Some(_)) | (_, None) => Ok(()),
            (policy, Some(_)) => Err(format!("quantum is only valid for rr, not {policy}")),
        }
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| SchedulerError::Config(format!("parse error: {e}")))?;
        cfg.validate().map_err(SchedulerError::Config)?;
        Ok(cfg)
    }

    /// Read configuration from the process environment, loading a `.env`
    /// file first when one exists. Cores default to the host CPU count.
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is fine; the variables may come from the shell.
        let _ = dotenvy::dotenv();

        let policy: Policy = env::var(ENV_POLICY)
            .map_err(|_| anyhow::anyhow!("{ENV_POLICY} is not set"))?
            .parse()?;
        let cores = match env::var(ENV_CORES) {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| anyhow::anyhow!("{ENV_CORES}={raw}: {e}"))?,
            Err(_) => default_cores(),
        };
        let quantum = match env::var(ENV_QUANTUM) {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("{ENV_QUANTUM}={raw}: {e}"))?,
            ),
            Err(_) => None,
        };

        let cfg = Self {
            cores,
            policy,
            quantum,
        };
        cfg.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(cfg)
    }
}
