//! Interaction session: the explicit context object behind the UI.
//!
//! Owns the point set, the deterministic generator, and the active
//! parameters. UI gestures map 1:1 onto methods here; the core components
//! below this layer are pure and never see an out-of-bounds parameter.
//!
//! Everything is single-threaded and frame-driven: one `render_frame` call
//! runs a full sampling pass to completion before the next input is applied.
//! Wrapping a session in shared-mutability across threads requires adding
//! synchronization around the point set first.

use crate::config::SessionConfig;
use crate::grid::{sample, GridSample, Region};
use crate::logging::FrameRecord;
use crate::points::{LabeledPoint, LabeledPointSet, SeededRng, MAX_CLASSES};

/// Hit-test radius for picking a point under the pointer.
const PICK_RADIUS: f32 = 10.0;

/// One interactive classification session.
pub struct Session {
    set: LabeledPointSet,
    rng: SeededRng,
    region: Region,
    k: usize,
    num_classes: usize,
    points_per_class: usize,
    fine_cell_size: u32,
    coarse_cell_size: u32,
    dragged: Option<usize>,
    frame: u64,
}

impl Session {
    /// Build a session and populate every active class to its target size.
    pub fn new(config: SessionConfig) -> Self {
        let region = Region::new(0.0, 0.0, config.width.max(1) as f32, config.height.max(1) as f32);
        let mut rng = SeededRng::new(config.seed);
        let num_classes = config.num_classes.clamp(1, MAX_CLASSES);
        let points_per_class = config.points_per_class.max(1);

        let mut set = LabeledPointSet::new();
        set.set_active_class_count(num_classes, points_per_class, region, &mut rng);

        Self {
            set,
            rng,
            region,
            k: config.k.max(1),
            num_classes,
            points_per_class,
            fine_cell_size: config.fine_cell_size.max(1),
            coarse_cell_size: config.coarse_cell_size.max(1),
            dragged: None,
            frame: 0,
        }
    }

    pub fn points(&self) -> &[LabeledPoint] {
        self.set.points()
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn points_per_class(&self) -> usize {
        self.points_per_class
    }

    /// Index of the first point within pick radius of `(x, y)`, if any.
    pub fn pick_point(&self, x: f32, y: f32) -> Option<usize> {
        self.set.points().iter().position(|p| {
            let dx = p.x - x;
            let dy = p.y - y;
            (dx * dx + dy * dy).sqrt() < PICK_RADIUS
        })
    }

    /// Open a drag on the point at `index`. Returns false (and does nothing)
    /// for an out-of-range index.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index < self.set.len() {
            self.dragged = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the dragged point, clamping the target into the region. No-op
    /// when no drag is open.
    pub fn drag_to(&mut self, x: f32, y: f32) {
        if let Some(index) = self.dragged {
            let (cx, cy) = self.region.clamp(x, y);
            self.set.move_point(index, cx, cy);
        }
    }

    pub fn end_drag(&mut self) {
        self.dragged = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn increase_k(&mut self) {
        self.k += 1;
    }

    /// Lower K, stopping at 1.
    pub fn decrease_k(&mut self) {
        if self.k > 1 {
            self.k -= 1;
        }
    }

    /// Activate one more class and populate it. Saturates at `MAX_CLASSES`.
    pub fn increase_class_count(&mut self) {
        self.set_class_count(self.num_classes + 1);
    }

    /// Drop the highest active class and all of its points. Stops at 1.
    pub fn decrease_class_count(&mut self) {
        if self.num_classes > 1 {
            self.set_class_count(self.num_classes - 1);
        }
    }

    fn set_class_count(&mut self, count: usize) {
        if count == 0 || count > MAX_CLASSES {
            return;
        }
        self.set
            .set_active_class_count(count, self.points_per_class, self.region, &mut self.rng);
        self.num_classes = count;
    }

    pub fn increase_points_per_class(&mut self) {
        self.set_points_per_class(self.points_per_class + 1);
    }

    pub fn decrease_points_per_class(&mut self) {
        if self.points_per_class > 1 {
            self.set_points_per_class(self.points_per_class - 1);
        }
    }

    /// Re-target every active class to `target` members. Values below 1 are
    /// ignored at this boundary.
    pub fn set_points_per_class(&mut self, target: usize) {
        if target == 0 {
            return;
        }
        for label in 0..self.num_classes {
            self.set
                .resize_class_population(label, target, self.region, &mut self.rng);
        }
        self.points_per_class = target;
    }

    /// Run one full sampling pass over the region.
    ///
    /// Uses the coarse cell size while a drag is open, the fine one at rest;
    /// the raster is rebuilt from scratch either way.
    pub fn render_frame(&mut self) -> GridSample {
        self.frame += 1;
        let cell_size = if self.is_dragging() {
            self.coarse_cell_size
        } else {
            self.fine_cell_size
        };
        sample(self.region, cell_size, &self.set, self.k)
    }

    /// Snapshot of the latest frame for the JSON log.
    pub fn frame_record(&self, raster: &GridSample) -> FrameRecord {
        FrameRecord {
            frame: self.frame,
            k: self.k,
            num_classes: self.num_classes,
            point_count: self.set.len(),
            cell_size: raster.cell_size,
            painted_cells: raster.len(),
        }
    }
}
