//! Grid sampling of the classification decision boundary.
//!
//! Every call partitions the region into square cells, classifies each cell's
//! top-left corner, and returns the resulting raster. Nothing is cached: a
//! single point mutation can flip arbitrary cells, so the whole grid is
//! recomputed per frame. Cost is O(N log N) per cell, paid synchronously on
//! the calling thread.

use serde::Serialize;

use crate::classify::{k_nearest, resolve};
use crate::points::{ClassId, LabeledPointSet};

/// Rectangular sampling region in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp a coordinate into the region. Used by the drag path before any
    /// `move_point` call.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(self.x, self.x + self.width),
            y.clamp(self.y, self.y + self.height),
        )
    }
}

/// One resolved raster cell: origin of the square plus the winning label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell {
    pub x: f32,
    pub y: f32,
    pub label: ClassId,
}

/// A single frame's raster. Cells with no resolvable label are absent.
///
/// Lifecycle is one frame: the renderer consumes it and the next `sample`
/// call rebuilds it from scratch.
#[derive(Debug, Clone, Serialize)]
pub struct GridSample {
    pub cell_size: u32,
    pub cells: Vec<GridCell>,
}

impl GridSample {
    /// Label at the cell whose origin is `(x, y)`, if that cell was painted.
    pub fn label_at(&self, x: f32, y: f32) -> Option<ClassId> {
        self.cells
            .iter()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.label)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Sample the full region at `cell_size` resolution.
///
/// Each cell's top-left corner is the query coordinate. The sampler is
/// resolution-agnostic; the caller decides between the fine and coarse sizes
/// based on whether a drag is in progress.
pub fn sample(region: Region, cell_size: u32, set: &LabeledPointSet, k: usize) -> GridSample {
    let mut cells = Vec::new();
    if cell_size == 0 {
        return GridSample { cell_size, cells };
    }

    let step = cell_size as f32;
    let cols = (region.width / step).ceil() as usize;
    let rows = (region.height / step).ceil() as usize;
    cells.reserve(cols * rows);

    for row in 0..rows {
        let y = region.y + row as f32 * step;
        for col in 0..cols {
            let x = region.x + col as f32 * step;
            let neighbors = k_nearest(x, y, set, k);
            if let Some(label) = resolve(&neighbors) {
                cells.push(GridCell { x, y, label });
            }
        }
    }

    GridSample { cell_size, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_set() -> LabeledPointSet {
        let mut set = LabeledPointSet::new();
        set.add_point(10.0, 10.0, 0);
        set.add_point(90.0, 90.0, 1);
        set
    }

    #[test]
    fn test_region_clamp() {
        let region = Region::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(region.clamp(-5.0, 700.0), (0.0, 600.0));
        assert_eq!(region.clamp(400.0, 300.0), (400.0, 300.0));
    }

    #[test]
    fn test_full_region_is_painted() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let raster = sample(region, 10, &two_class_set(), 1);

        // 10x10 grid, every cell resolvable with two points present
        assert_eq!(raster.len(), 100);
        assert_eq!(raster.cell_size, 10);
    }

    #[test]
    fn test_labels_split_by_proximity() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let raster = sample(region, 10, &two_class_set(), 1);

        assert_eq!(raster.label_at(0.0, 0.0), Some(0));
        assert_eq!(raster.label_at(80.0, 80.0), Some(1));
    }

    #[test]
    fn test_empty_set_paints_nothing() {
        let region = Region::new(0.0, 0.0, 50.0, 50.0);
        let raster = sample(region, 5, &LabeledPointSet::new(), 3);
        assert!(raster.is_empty());
    }

    #[test]
    fn test_lone_point_leaves_its_own_cell_unpainted() {
        // A single point sitting exactly on a cell origin excludes itself
        // there, so that one cell has no voters.
        let mut set = LabeledPointSet::new();
        set.add_point(10.0, 10.0, 0);

        let region = Region::new(0.0, 0.0, 30.0, 30.0);
        let raster = sample(region, 10, &set, 3);

        assert_eq!(raster.label_at(10.0, 10.0), None);
        assert_eq!(raster.len(), 8);
    }

    #[test]
    fn test_resolution_changes_density_not_labels() {
        let set = two_class_set();
        let region = Region::new(0.0, 0.0, 90.0, 90.0);
        let fine = sample(region, 5, &set, 1);
        let coarse = sample(region, 9, &set, 1);

        // 45 is an origin in both grids (9*5 and 5*9); so is 0.
        for &(x, y) in &[(0.0, 0.0), (45.0, 45.0), (45.0, 0.0), (0.0, 45.0)] {
            assert_eq!(fine.label_at(x, y), coarse.label_at(x, y));
        }
    }

    #[test]
    fn test_zero_cell_size_is_empty() {
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let raster = sample(region, 0, &two_class_set(), 1);
        assert!(raster.is_empty());
    }
}
