//! Configuration models for engine runs.

pub mod engine;

pub use engine::EngineConfig;
