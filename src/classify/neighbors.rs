//! K-nearest retrieval over the labeled point set.

use crate::points::{LabeledPoint, LabeledPointSet};

/// Euclidean distance between two plane coordinates.
#[inline]
pub fn euclidean_distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = ax - bx;
    let dy = ay - by;
    (dx * dx + dy * dy).sqrt()
}

/// Return up to `k` stored points nearest to `(qx, qy)`, nearest first.
///
/// Candidates whose coordinates are exactly equal to the query coordinate are
/// excluded. Note that this excludes *any* coincident stored point, not just
/// "the point being queried" - distinct points sitting on the query
/// coordinate never vote. Changing that would change classification results
/// at overlapping coordinates.
///
/// The sort is stable and ascending by distance, so distance ties keep the
/// candidates' insertion order. Returns fewer than `k` entries (possibly
/// none) when the set is small; never an error.
pub fn k_nearest(qx: f32, qy: f32, set: &LabeledPointSet, k: usize) -> Vec<LabeledPoint> {
    if set.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(f32, LabeledPoint)> = set
        .points()
        .iter()
        .filter(|p| !(p.x == qx && p.y == qy))
        .map(|p| (euclidean_distance(qx, qy, p.x, p.y), *p))
        .collect();

    // stable sort keeps insertion order among equal distances
    ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

    ranked.into_iter().take(k).map(|(_, p)| p).collect()
}
