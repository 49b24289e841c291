//! Brute-force nearest-neighbor query and plurality vote.
//!
//! Both halves are pure reads over a [`crate::points::LabeledPointSet`]: the
//! query ranks candidates by Euclidean distance, the vote resolves the ranked
//! labels into a single class. Neither retains state between calls.

pub mod neighbors;
pub mod vote;

pub use neighbors::{euclidean_distance, k_nearest};
pub use vote::resolve;
