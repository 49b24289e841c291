//! Labeled point storage and deterministic cluster generation.
//!
//! The point set is the single mutable source of truth for a session. All
//! population changes go through [`LabeledPointSet::resize_class_population`],
//! which is also the initial-generation path, so there is no separate
//! "regenerate" entry point.

pub mod rng;
pub mod set;

pub use rng::SeededRng;
pub use set::{ClassId, LabeledPoint, LabeledPointSet, MAX_CLASSES};
