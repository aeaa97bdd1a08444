//! Builders to construct scheduling engines from configuration.

pub mod engine_builder;

pub use engine_builder::{build_engine, EngineBuilder};
