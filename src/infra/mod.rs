//! Infrastructure adapters: the ordered job queue backing the engine.

pub mod queue;
pub use queue::{Comparator, OrderedQueue};
