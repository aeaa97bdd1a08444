//! Queue backends.

pub mod ordered;

pub use ordered::{Comparator, OrderedQueue};
