//! # KNN Canvas Core
//!
//! A deterministic k-nearest-neighbors grid classification engine for an
//! interactive 2D visualizer. A session owns a mutable set of labeled points;
//! every frame the engine re-samples a rectangular region cell by cell and
//! reports, for each cell, which label a KNN plurality vote would assign.
//!
//! ## Quick Start
//!
//! ```rust
//! use knn_canvas_core::{Session, SessionConfig};
//!
//! // Build a session from defaults (800x600 region, k=3, 2 classes)
//! let config = SessionConfig::default();
//! let mut session = Session::new(config);
//!
//! // Sample the decision raster for one frame
//! let raster = session.render_frame();
//! println!("painted {} cells at size {}", raster.cells.len(), raster.cell_size);
//!
//! // Drag the first point somewhere else and re-sample
//! session.begin_drag(0);
//! session.drag_to(400.0, 300.0);
//! session.end_drag();
//! let raster = session.render_frame();
//! # let _ = raster;
//! ```
//!
//! ## Core Modules
//!
//! - [`config`] - Session configuration via TOML
//! - [`points`] - Mutable labeled point set and deterministic generation
//! - [`classify`] - Brute-force k-nearest query and plurality vote
//! - [`grid`] - Grid sampling of the classification decision boundary
//! - [`session`] - Interaction boundary: drags, K/class/population actions
//! - [`logging`] - JSON line-delimited frame logging

pub mod classify;
pub mod config;
pub mod grid;
pub mod logging;
pub mod points;
pub mod session;

pub use classify::{k_nearest, resolve};
pub use config::SessionConfig;
pub use grid::{sample, GridCell, GridSample, Region};
pub use logging::{FrameRecord, JsonLogger};
pub use points::{ClassId, LabeledPoint, LabeledPointSet, SeededRng, MAX_CLASSES};
pub use session::Session;
