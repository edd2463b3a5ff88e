/// ==============================================================================================
/// ======================================= Configuration =========================================
/// ==============================================================================================
///
/// Typed input surface for the simulator, independent of any host pipeline framework.
/// Mirrors the filter-parameter set of the original processing step (dimensions, voxel size,
/// origin, nucleation rate, neighborhood choice) so a host can bind these fields to its own
/// parameter widgets without this crate knowing about them.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidField, Result, SimError};

/// Lattice extents, in voxels. All three must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Dimensions {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn num_voxels(&self) -> usize {
        self.x * self.y * self.z
    }
}

/// Physical voxel size (Δx, Δy, Δz). All three must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Resolution {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn voxel_volume(&self) -> f64 {
        self.x * self.y * self.z
    }
}

/// Physical origin of the volume; preserved to output geometry only, never read by the
/// core algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Origin {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }
}

/// Which neighbor template the kernel grows with. Discriminants match the host's
/// choice-parameter encoding exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum NeighborhoodKind {
    VonNeumann = 0,
    EightCell = 1,
    FourteenCell = 2,
    EighteenCell = 3,
    TwentyCell = 4,
    Moore = 5,
}

/// Full parameter bundle for one simulation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    pub dimensions: Dimensions,
    pub resolution: Resolution,
    #[serde(default)]
    pub origin: Origin,
    pub nucleation_rate: f64,
    pub neighborhood: NeighborhoodKind,
    /// Overrides the wall-clock component of per-tile RNG seeding. Leave `None` in
    /// production; set for reproducible tests.
    #[serde(default)]
    pub deterministic_seed: Option<u64>,
}

impl SimConfig {
    /// Runs the pre-run field validation, returning the first field that fails in
    /// declaration order (Dimensions.x, .y, .z, then Resolution.x, .y, .z).
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.x == 0 {
            return Err(SimError::ParameterInvalid { field: InvalidField::DimensionsX });
        }
        if self.dimensions.y == 0 {
            return Err(SimError::ParameterInvalid { field: InvalidField::DimensionsY });
        }
        if self.dimensions.z == 0 {
            return Err(SimError::ParameterInvalid { field: InvalidField::DimensionsZ });
        }
        if !(self.resolution.x > 0.0) {
            return Err(SimError::ParameterInvalid { field: InvalidField::ResolutionX });
        }
        if !(self.resolution.y > 0.0) {
            return Err(SimError::ParameterInvalid { field: InvalidField::ResolutionY });
        }
        if !(self.resolution.z > 0.0) {
            return Err(SimError::ParameterInvalid { field: InvalidField::ResolutionZ });
        }
        Ok(())
    }

    /// Probability of spontaneous nucleation per voxel per time step.
    #[inline]
    pub fn nucleation_probability_per_voxel(&self) -> f64 {
        self.nucleation_rate * self.resolution.voxel_volume()
    }

    /// Load a config from a JSON file, mirroring this crate's JSON save-file convention
    /// for reads.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("SimConfig::from_json_file: open {}: {e}", path.display()))?;
        let cfg = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| anyhow::anyhow!("SimConfig::from_json_file: parse {}: {e}", path.display()))?;
        Ok(cfg)
    }

    /// Save a config to a JSON file, pretty-printed.
    pub fn to_json_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| anyhow::anyhow!("SimConfig::to_json_file: create dir {}: {e}", parent.display()))?;
        }
        let file = File::create(path)
            .map_err(|e| anyhow::anyhow!("SimConfig::to_json_file: create {}: {e}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(|e| anyhow::anyhow!("SimConfig::to_json_file: write {}: {e}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_failing_field_in_order() {
        let base = SimConfig {
            dimensions: Dimensions::new(4, 4, 4),
            resolution: Resolution::new(1.0, 1.0, 1.0),
            origin: Origin::default(),
            nucleation_rate: 0.0,
            neighborhood: NeighborhoodKind::Moore,
            deterministic_seed: None,
        };
        assert!(base.validate().is_ok());

        let mut bad = base;
        bad.dimensions.x = 0;
        match bad.validate() {
            Err(SimError::ParameterInvalid { field }) => {
                assert_eq!(field, InvalidField::DimensionsX);
                assert_eq!(field.code(), -5000);
            }
            other => panic!("expected ParameterInvalid, got {other:?}"),
        }

        let mut bad = base;
        bad.resolution.z = -1.0;
        match bad.validate() {
            Err(SimError::ParameterInvalid { field }) => assert_eq!(field, InvalidField::ResolutionZ),
            other => panic!("expected ParameterInvalid, got {other:?}"),
        }
    }

    #[test]
    fn json_round_trip_preserves_fields() {
        let cfg = SimConfig {
            dimensions: Dimensions::new(8, 16, 24),
            resolution: Resolution::new(0.25, 0.25, 0.5),
            origin: Origin::new(1.0, 2.0, 3.0),
            nucleation_rate: 1e-4,
            neighborhood: NeighborhoodKind::FourteenCell,
            deterministic_seed: Some(42),
        };

        let dir = std::env::temp_dir().join(format!("recrystallize-ca-test-{}", std::process::id()));
        let path = dir.join("config.json");
        cfg.to_json_file(&path).expect("save");
        let loaded = SimConfig::from_json_file(&path).expect("load");

        assert_eq!(loaded.dimensions, cfg.dimensions);
        assert_eq!(loaded.resolution, cfg.resolution);
        assert_eq!(loaded.origin, cfg.origin);
        assert_eq!(loaded.nucleation_rate, cfg.nucleation_rate);
        assert_eq!(loaded.neighborhood, cfg.neighborhood);
        assert_eq!(loaded.deterministic_seed, cfg.deterministic_seed);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
