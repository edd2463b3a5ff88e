/// ==============================================================================================
/// ======================================= Update Kernel ==========================================
/// ==============================================================================================
///
/// The per-voxel decision rule: propagate, nucleate, or remain unrecrystallized. Reads only
/// `current_id` (shared, read-only for the whole step) and writes only the caller's `working_id`
/// and `recryst_time` slots — never anything else — so the driver can hand disjoint tile slices
/// to parallel workers without locks (invariant I5).

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;

use crate::config::NeighborhoodKind;
use crate::grain::GrainCounter;
use crate::lattice::Lattice;

/// Decide the next state of voxel `i` and write it into `working_id`/`recryst_time`.
/// `current_id` must be the full, read-only snapshot from the start of this step.
#[allow(clippy::too_many_arguments)]
pub fn update_voxel(
    i: usize,
    lattice: &Lattice,
    neighborhood: NeighborhoodKind,
    current_id: &[i32],
    working_id: &mut i32,
    recryst_time: &mut u32,
    grain_counter: &GrainCounter,
    unrecrystallized_count: &AtomicUsize,
    nucleation_probability: f64,
    time_step: u32,
    rng: &mut impl Rng,
) {
    if current_id[i] != 0 {
        *working_id = current_id[i];
        return;
    }

    let variant = if Lattice::variant_count(neighborhood) > 1 {
        rng.random_range(0..Lattice::variant_count(neighborhood))
    } else {
        0
    };

    let mut neighbor_buf = [0usize; 26];
    let n = lattice.neighbors_into(i, neighborhood, variant, &mut neighbor_buf);
    let neighbors = &neighbor_buf[..n];

    let mut good_neighbors = [0usize; 26];
    let mut num_good = 0;
    for &j in neighbors {
        if current_id[j] != 0 {
            good_neighbors[num_good] = j;
            num_good += 1;
        }
    }

    if num_good == 0 {
        let u: f64 = rng.random();
        if u > nucleation_probability {
            *working_id = 0;
            unrecrystallized_count.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let extended = lattice.extended_moore(i);
        let clumped = extended.iter().any(|&j| current_id[j] != 0);
        if clumped {
            *working_id = 0;
            unrecrystallized_count.fetch_add(1, Ordering::Relaxed);
        } else {
            *working_id = grain_counter.next_id();
            *recryst_time = time_step;
        }
        return;
    }

    let pick = rng.random_range(0..num_good);
    *working_id = current_id[good_neighbors[pick]];
    *recryst_time = time_step;
}
