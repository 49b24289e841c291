//! Mutable labeled point set grouped by class.

use serde::Serialize;

use crate::grid::Region;
use crate::points::rng::SeededRng;

/// Upper bound on simultaneously active classes (size of the UI palette).
pub const MAX_CLASSES: usize = 5;

/// Index into the ordered class set. Order matters: it drives cluster
/// placement on growth and palette indexing in the renderer.
pub type ClassId = usize;

/// Half-width of the square scatter window around a cluster center.
const CLUSTER_RADIUS: f32 = 20.0;

/// Cluster centers keep this distance from the region edge, so scattered
/// points land inside the region without clamping.
const CENTER_MARGIN: f32 = CLUSTER_RADIUS;

/// One classified point on the plane. Position is mutable (drag); the label
/// is fixed for the lifetime of the point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub x: f32,
    pub y: f32,
    pub label: ClassId,
}

/// Ordered collection of labeled points.
///
/// Insertion order is significant: the nearest-neighbor query breaks distance
/// ties by it, and shrinking a class removes the earliest members first.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LabeledPointSet {
    points: Vec<LabeledPoint>,
}

impl LabeledPointSet {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Append a point. Coincident points are legal; no uniqueness is enforced.
    pub fn add_point(&mut self, x: f32, y: f32, label: ClassId) {
        self.points.push(LabeledPoint { x, y, label });
    }

    /// Remove the point at `index`. Silently does nothing when the index is
    /// out of range.
    pub fn remove_point(&mut self, index: usize) {
        if index < self.points.len() {
            self.points.remove(index);
        }
    }

    /// Move the point at `index` in place. The caller clamps `(x, y)` into
    /// the visible region before calling; out-of-range indices are ignored.
    pub fn move_point(&mut self, index: usize, x: f32, y: f32) {
        if let Some(point) = self.points.get_mut(index) {
            point.x = x;
            point.y = y;
        }
    }

    /// Grow or shrink one class to exactly `target` members.
    ///
    /// Growth scatters new points around a single freshly drawn cluster
    /// center inside `region`; shrinking removes the first members of the
    /// class in iteration order. Points of other classes are untouched, and
    /// surviving members keep their positions. This is the only generation
    /// path, used for initial population as well.
    pub fn resize_class_population(
        &mut self,
        label: ClassId,
        target: usize,
        region: Region,
        rng: &mut SeededRng,
    ) {
        if label >= MAX_CLASSES {
            return;
        }

        let mut current = self.class_population(label);

        if current < target {
            let cx = rng.range(region.x + CENTER_MARGIN, region.x + region.width - CENTER_MARGIN);
            let cy = rng.range(region.y + CENTER_MARGIN, region.y + region.height - CENTER_MARGIN);
            while current < target {
                let x = cx + rng.range(-CLUSTER_RADIUS, CLUSTER_RADIUS);
                let y = cy + rng.range(-CLUSTER_RADIUS, CLUSTER_RADIUS);
                self.add_point(x, y, label);
                current += 1;
            }
        }

        while current > target {
            if let Some(index) = self.points.iter().position(|p| p.label == label) {
                self.points.remove(index);
                current -= 1;
            } else {
                break;
            }
        }
    }

    /// Set the number of active classes.
    ///
    /// Labels at or above `count` are dropped from the set; every remaining
    /// active class is brought to `points_per_class` members (a no-op for
    /// classes already at target, so existing points keep their positions).
    /// Counts outside `1..=MAX_CLASSES` are ignored.
    pub fn set_active_class_count(
        &mut self,
        count: usize,
        points_per_class: usize,
        region: Region,
        rng: &mut SeededRng,
    ) {
        if count == 0 || count > MAX_CLASSES {
            return;
        }

        self.points.retain(|p| p.label < count);
        for label in 0..count {
            self.resize_class_population(label, points_per_class, region, rng);
        }
    }

    /// Number of points carrying `label`.
    pub fn class_population(&self, label: ClassId) -> usize {
        self.points.iter().filter(|p| p.label == label).count()
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
