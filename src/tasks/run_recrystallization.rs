use std::path::Path;

/// ==============================================================================================
/// ===================================== Experiment Runner ======================================
/// ==============================================================================================

use anyhow::{Context, Result};

use crate::config::SimConfig;
use crate::progress::IndicatifProgressSink;
use crate::solvers::{Simulation, SimulationResult};

/// Run one simulation to completion, optionally pre-seeding nuclei before the step loop
/// starts, and persist the config alongside the result for reproducibility.
///     Inputs:
///         - `config`: lattice geometry, nucleation rate, neighborhood kind
///         - `pre_seeded_nuclei`: voxel coordinates forced to nucleate before step 1
///         - `output_path`: directory the run's config is saved into
pub fn run(
    config: SimConfig,
    pre_seeded_nuclei: &[(usize, usize, usize)],
    output_path: &Path,
) -> Result<SimulationResult> {
    config
        .to_json_file(&output_path.join("config.json"))
        .context("run_recrystallization: saving config")?;

    let mut sim = Simulation::new(config).context("run_recrystallization: constructing simulation")?;
    for &(x, y, z) in pre_seeded_nuclei {
        sim.seed_nucleus(x, y, z);
    }

    let sink = IndicatifProgressSink::new(config.dimensions.num_voxels() as u64);
    Ok(sim.run(&sink))
}
