/// ==============================================================================================
/// ======================================== Grain State ==========================================
/// ==============================================================================================
///
/// Atomic grain-count allocation and the finalized per-grain "active" flag array. Grain IDs
/// are handed out in tile-traversal order by whichever worker nucleates first; see
/// `DESIGN.md` for why that makes numbering non-deterministic but the underlying partition
/// of voxels into grains stable up to relabeling.

use std::sync::atomic::{AtomicI32, Ordering};

/// Shared, atomically-incremented grain counter. Grain 0 is reserved for "unrecrystallized"
/// and is never handed out.
#[derive(Debug, Default)]
pub struct GrainCounter(AtomicI32);

impl GrainCounter {
    pub fn new() -> Self {
        Self(AtomicI32::new(0))
    }

    /// Allocate the next grain ID (1-based).
    #[inline]
    pub fn next_id(&self) -> i32 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    #[inline]
    pub fn count(&self) -> i32 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Build the finalized `active` array: `active[0] = false`, `active[1..=grain_count] = true`.
pub fn build_active_flags(grain_count: i32) -> Vec<bool> {
    let grain_count = grain_count.max(0) as usize;
    let mut active = vec![true; grain_count + 1];
    active[0] = false;
    active
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_one_based_and_monotonic() {
        let counter = GrainCounter::new();
        assert_eq!(counter.next_id(), 1);
        assert_eq!(counter.next_id(), 2);
        assert_eq!(counter.next_id(), 3);
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn active_flags_follow_convention() {
        let active = build_active_flags(3);
        assert_eq!(active, vec![false, true, true, true]);

        let active_zero = build_active_flags(0);
        assert_eq!(active_zero, vec![false]);
    }
}
