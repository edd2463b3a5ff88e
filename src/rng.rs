/// ==============================================================================================
/// ===================================== Per-Tile RNG Provider ===================================
/// ==============================================================================================
///
/// Each parallel worker owns one of these for the duration of a tile's processing. Seeded from
/// wall-clock time mixed with the tile's voxel-index range, so two tiles that start in the same
/// millisecond still draw disjoint streams. `rand_chacha::ChaCha8Rng` stands in for the
/// upstream's per-call `boost::mt19937`: both are deterministic, seedable PRNGs with no shared
/// mutable state across workers.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Mix the wall-clock millisecond count with a tile's `[start, end)` voxel range into a
/// single seed, so tiles never collide even when read at the same instant. `base` is the
/// wall-clock reading unless a deterministic override replaces it.
fn mix_seed(base: u64, start: usize, end: usize) -> u64 {
    base.wrapping_mul(end as u64 + 1).wrapping_add(start as u64)
}

fn wall_clock_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Build a fresh per-tile RNG for the voxel range `[start, end)`. `deterministic_seed`
/// overrides the wall-clock read (for reproducible tests) without skipping the per-tile
/// mixing, so distinct tiles still draw distinct streams under a fixed seed.
pub fn rng_for_tile(start: usize, end: usize, deterministic_seed: Option<u64>) -> ChaCha8Rng {
    let base = deterministic_seed.unwrap_or_else(wall_clock_millis);
    ChaCha8Rng::seed_from_u64(mix_seed(base, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_wall_clock_instant_yields_disjoint_tile_seeds() {
        let base = 1_700_000_000_000u64;
        let a = mix_seed(base, 0, 100);
        let b = mix_seed(base, 100, 200);
        assert_ne!(a, b);
    }

    #[test]
    fn deterministic_seed_is_reproducible() {
        use rand::RngCore;
        let mut r1 = rng_for_tile(0, 64, Some(7));
        let mut r2 = rng_for_tile(0, 64, Some(7));
        assert_eq!(r1.next_u64(), r2.next_u64());
    }

    #[test]
    fn deterministic_seed_still_varies_per_tile() {
        use rand::RngCore;
        let mut r1 = rng_for_tile(0, 64, Some(7));
        let mut r2 = rng_for_tile(64, 128, Some(7));
        assert_ne!(r1.next_u64(), r2.next_u64());
    }
}
