/// ==============================================================================================
/// ==================================== Simulation Driver =========================================
/// ==============================================================================================
///
/// Owns the two per-voxel buffers and the per-grain bookkeeping, and runs the synchronous
/// step loop described in the update-kernel design: partition the volume into tiles, run the
/// kernel over each tile with its own RNG, swap buffers, record the step's fraction, repeat
/// until nothing is left unrecrystallized. An owned scratch struct, a `std::mem::swap` between
/// steps, and a periodic progress callback, with per-step parallelism over voxel tiles.

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::Array3;
use rayon::prelude::*;

use crate::avrami::{self, AvramiParams};
use crate::config::SimConfig;
use crate::error::Result;
use crate::grain::{build_active_flags, GrainCounter};
use crate::kernel::update_voxel;
use crate::lattice::Lattice;
use crate::progress::ProgressSink;
use crate::rng::rng_for_tile;

/// Everything the driver produces, ready for a host to publish into its own container
/// hierarchy. `feature_ids` and `recrystallization_time` are `(Nx, Ny, Nz)`-shaped so a host
/// can index them the same way it indexes the input volume.
#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub feature_ids: Array3<i32>,
    pub recrystallization_time: Array3<u32>,
    pub active: Vec<bool>,
    pub history: Vec<f32>,
    pub avrami: Option<AvramiParams>,
}

/// One simulation run. Construct with [`Simulation::new`], optionally pre-seed nuclei with
/// [`Simulation::seed_nucleus`], then consume with [`Simulation::run`].
pub struct Simulation {
    lattice: Lattice,
    config: SimConfig,
    current_id: Vec<i32>,
    working_id: Vec<i32>,
    recryst_time: Vec<u32>,
    grain_counter: GrainCounter,
    time_step: u32,
    history: Vec<f32>,
}

impl Simulation {
    /// Validates `config` and allocates the working buffers, all zeroed.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let lattice = Lattice::new(config.dimensions);
        let n = lattice.num_voxels();
        Ok(Self {
            lattice,
            config,
            current_id: vec![0; n],
            working_id: vec![0; n],
            recryst_time: vec![0; n],
            grain_counter: GrainCounter::new(),
            time_step: 1,
            history: vec![0.0],
        })
    }

    /// Pre-seed voxel `(x, y, z)` as the first voxel of a new grain, before the step loop
    /// starts. Its `recrystallization_time` stays 0 — it was never assigned during a step,
    /// it's the initial condition. Returns the grain ID assigned.
    pub fn seed_nucleus(&mut self, x: usize, y: usize, z: usize) -> i32 {
        let i = self.lattice.index(x, y, z);
        let id = self.grain_counter.next_id();
        self.current_id[i] = id;
        id
    }

    /// Run the step loop to completion and return the finalized result. Consumes `self`
    /// since the buffers have no further use once every voxel has recrystallized.
    pub fn run(mut self, progress: &dyn ProgressSink) -> SimulationResult {
        let n = self.lattice.num_voxels();
        let p_nuc = self.config.nucleation_probability_per_voxel();
        let tile_size = (n / rayon::current_num_threads().max(1)).max(1);

        loop {
            let unrecrystallized_count = AtomicUsize::new(0);
            let neighborhood = self.config.neighborhood;
            let current_id = &self.current_id;
            let lattice = &self.lattice;
            let grain_counter = &self.grain_counter;
            let time_step = self.time_step;
            let deterministic_seed = self.config.deterministic_seed;

            self.working_id
                .par_chunks_mut(tile_size)
                .zip(self.recryst_time.par_chunks_mut(tile_size))
                .enumerate()
                .for_each(|(tile_idx, (working_chunk, time_chunk))| {
                    let start = tile_idx * tile_size;
                    let end = start + working_chunk.len();
                    let mut rng = rng_for_tile(start, end, deterministic_seed);
                    for (offset, (working, recryst_time)) in
                        working_chunk.iter_mut().zip(time_chunk.iter_mut()).enumerate()
                    {
                        let i = start + offset;
                        update_voxel(
                            i,
                            lattice,
                            neighborhood,
                            current_id,
                            working,
                            recryst_time,
                            grain_counter,
                            &unrecrystallized_count,
                            p_nuc,
                            time_step,
                            &mut rng,
                        );
                    }
                });

            std::mem::swap(&mut self.current_id, &mut self.working_id);

            let unrecrystallized = unrecrystallized_count.load(Ordering::Relaxed);
            let fraction = 1.0 - unrecrystallized as f64 / n as f64;
            progress.on_step(self.time_step, fraction);

            if fraction > 0.0 {
                self.history.push(fraction as f32);
                self.time_step += 1;
            }

            if unrecrystallized == 0 {
                break;
            }
        }

        self.finalize(progress)
    }

    fn finalize(self, progress: &dyn ProgressSink) -> SimulationResult {
        let dims = self.lattice.dimensions();
        let shape = (dims.x, dims.y, dims.z);

        let feature_ids = Array3::from_shape_fn(shape, |(x, y, z)| {
            self.current_id[self.lattice.index(x, y, z)]
        });
        let recrystallization_time = Array3::from_shape_fn(shape, |(x, y, z)| {
            self.recryst_time[self.lattice.index(x, y, z)]
        });

        let active = build_active_flags(self.grain_counter.count());

        let avrami = avrami::fit(&self.history);
        if avrami.is_none() {
            progress.on_warning("Avrami regression degenerate; (k, n) left unset");
        }

        SimulationResult {
            feature_ids,
            recrystallization_time,
            active,
            history: self.history,
            avrami,
        }
    }
}
