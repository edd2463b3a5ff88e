/// ==============================================================================================
/// ============================== 3D Recrystallization Simulator =================================
/// ==============================================================================================
///
/// A cellular-automaton model of grain nucleation and growth on a periodic cubic lattice.
/// Every voxel starts unrecrystallized (grain ID 0); each time step it either joins an
/// already-recrystallized neighbor or spontaneously nucleates a new grain, subject to an
/// anti-clumping check against a wider shell. The simulation runs to completion (every voxel
/// assigned) and reports, per voxel, its grain ID and the step at which it recrystallized,
/// plus the recrystallized-fraction history and the Avrami kinetic parameters fitted to it.
///
/// Grain IDs are handed out by an atomically-incremented counter in whatever order workers
/// reach nucleation sites; runs seeded from wall-clock time are therefore not bitwise
/// reproducible between invocations even on the same input, though the statistical partition
/// of voxels into grains is. Pass `SimConfig::deterministic_seed` for reproducible runs.

pub mod avrami;
pub mod config;
pub mod error;
pub mod grain;
pub mod kernel;
pub mod lattice;
pub mod logging;
pub mod progress;
pub mod rng;
pub mod solvers;

pub mod examples;
pub mod tasks;

#[cfg(test)]
mod tests;

pub use config::{Dimensions, NeighborhoodKind, Origin, Resolution, SimConfig};
pub use error::{SimError, Result};
pub use solvers::{Simulation, SimulationResult};
