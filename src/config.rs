//! Session configuration management via TOML files.
//!
//! Bounds are enforced here, at the boundary: out-of-range values are clamped
//! or replaced with defaults so the core operations never see an invalid
//! parameter and never need to report one.

use std::fs;
use std::path::Path;

use serde::Serialize;
use toml::Value;

use crate::points::MAX_CLASSES;

/// Session configuration loaded from a TOML `[session]` table.
///
/// # Examples
///
/// ```
/// use knn_canvas_core::SessionConfig;
///
/// let config = SessionConfig::from_str("[session]\nk = 5\nnum_classes = 3").unwrap();
/// assert_eq!(config.k, 5);
/// assert_eq!(config.num_classes, 3);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct SessionConfig {
    /// Width of the sampling region in screen units
    pub width: u32,
    /// Height of the sampling region in screen units
    pub height: u32,
    /// Number of neighbors consulted per query
    pub k: usize,
    /// Number of active classes, capped at `MAX_CLASSES`
    pub num_classes: usize,
    /// Target population of every active class
    pub points_per_class: usize,
    /// Cell side length used while at rest
    pub fine_cell_size: u32,
    /// Cell side length used while a drag is in progress
    pub coarse_cell_size: u32,
    /// Seed for deterministic point generation
    pub seed: u64,
}

impl SessionConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let value: Value =
            toml::from_str(toml_str).map_err(|err| ConfigError::Parse(err.to_string()))?;
        let table = value
            .get("session")
            .and_then(|v| v.as_table())
            .cloned()
            .unwrap_or_default();

        let defaults = Self::default();

        let width = table
            .get("width")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as u32)
            .unwrap_or(defaults.width);

        let height = table
            .get("height")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as u32)
            .unwrap_or(defaults.height);

        let k = table
            .get("k")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(defaults.k);

        let num_classes = table
            .get("num_classes")
            .and_then(|v| v.as_integer())
            .map(|v| (v.max(1) as usize).min(MAX_CLASSES))
            .unwrap_or(defaults.num_classes);

        let points_per_class = table
            .get("points_per_class")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as usize)
            .unwrap_or(defaults.points_per_class);

        let fine_cell_size = table
            .get("fine_cell_size")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as u32)
            .unwrap_or(defaults.fine_cell_size);

        let coarse_cell_size = table
            .get("coarse_cell_size")
            .and_then(|v| v.as_integer())
            .map(|v| v.max(1) as u32)
            .unwrap_or(defaults.coarse_cell_size);

        let seed = table
            .get("seed")
            .and_then(|v| v.as_integer())
            .map(|v| v as u64)
            .unwrap_or(defaults.seed);

        Ok(Self {
            width,
            height,
            k,
            num_classes,
            points_per_class,
            fine_cell_size,
            coarse_cell_size,
            seed,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            k: 3,
            num_classes: 2,
            points_per_class: 2,
            fine_cell_size: 5,
            coarse_cell_size: 9,
            seed: 42,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "IO error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_when_section_missing() {
        let config = SessionConfig::from_str("[other]\nfoo = 1").unwrap();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.k, 3);
        assert_eq!(config.fine_cell_size, 5);
        assert_eq!(config.coarse_cell_size, 9);
    }

    #[test]
    fn config_parses_custom_values() {
        let toml = "[session]\nwidth = 400\nheight = 300\nk = 7\nnum_classes = 4\npoints_per_class = 6\nfine_cell_size = 4\ncoarse_cell_size = 12\nseed = 99";
        let config = SessionConfig::from_str(toml).unwrap();
        assert_eq!(config.width, 400);
        assert_eq!(config.height, 300);
        assert_eq!(config.k, 7);
        assert_eq!(config.num_classes, 4);
        assert_eq!(config.points_per_class, 6);
        assert_eq!(config.fine_cell_size, 4);
        assert_eq!(config.coarse_cell_size, 12);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn config_clamps_out_of_range_values() {
        let toml = "[session]\nk = 0\nnum_classes = 99\npoints_per_class = -3";
        let config = SessionConfig::from_str(toml).unwrap();
        assert_eq!(config.k, 1);
        assert_eq!(config.num_classes, MAX_CLASSES);
        assert_eq!(config.points_per_class, 1);
    }

    #[test]
    fn config_rejects_malformed_toml() {
        assert!(SessionConfig::from_str("not = = toml").is_err());
    }
}
