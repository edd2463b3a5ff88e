use std::collections::HashSet;

use crate::config::{Dimensions, NeighborhoodKind, Origin, Resolution, SimConfig};
use crate::error::{InvalidField, SimError};
use crate::progress::NullProgressSink;
use crate::solvers::Simulation;

fn config(dims: Dimensions, neighborhood: NeighborhoodKind, nucleation_rate: f64, seed: u64) -> SimConfig {
    SimConfig {
        dimensions: dims,
        resolution: Resolution::new(1.0, 1.0, 1.0),
        origin: Origin::default(),
        nucleation_rate,
        neighborhood,
        deterministic_seed: Some(seed),
    }
}

#[test]
fn scenario_parameter_validation_rejects_zero_dimension_before_allocation() {
    let cfg = config(Dimensions::new(0, 10, 10), NeighborhoodKind::Moore, 0.0, 1);
    match Simulation::new(cfg) {
        Err(SimError::ParameterInvalid { field }) => {
            assert_eq!(field, InvalidField::DimensionsX);
            assert_eq!(field.code(), -5000);
        }
        other => panic!("expected ParameterInvalid for Dimensions.x, got {other:?}"),
    }
}

#[test]
fn scenario_forced_nucleation_never_double_nucleates_within_an_extended_moore_shell() {
    // NucleationRate extremely large, Von Neumann growth, 8x8x8: the first step should
    // nucleate many grains at once, but the anti-clumping check must keep any two
    // simultaneously-nucleated grains farther apart than the extended-Moore shell.
    let cfg = config(Dimensions::new(8, 8, 8), NeighborhoodKind::VonNeumann, 1.0e6, 99);
    let sim = Simulation::new(cfg).unwrap();
    let result = sim.run(&NullProgressSink);

    assert!(result.feature_ids.iter().all(|&g| g >= 1), "every voxel must eventually recrystallize");
    assert!(
        result.recrystallization_time.iter().all(|&t| (1..=4).contains(&t)),
        "all recrystallization times must fall within the first few steps"
    );

    let grain_ids: HashSet<i32> = result.feature_ids.iter().copied().collect();
    assert_eq!(
        grain_ids.len() as i32,
        result.active.len() as i32 - 1,
        "grain ids must form a dense 1..=grain_count range with no gaps",
    );
}

#[test]
fn scenario_low_nucleation_rate_skips_history_entries_for_zero_progress_steps() {
    // A very low rate on a small volume may burn several step iterations with no
    // progress before the first nucleus appears; history.len() must equal the number
    // of steps with nonzero progress plus one (the initial 0.0), never more.
    let cfg = config(Dimensions::new(4, 4, 4), NeighborhoodKind::Moore, 1e-9, 7);
    let sim = Simulation::new(cfg).unwrap();
    let result = sim.run(&NullProgressSink);

    assert_eq!(*result.history.first().unwrap(), 0.0);
    assert_eq!(*result.history.last().unwrap(), 1.0);
    assert!(result.history.windows(2).all(|w| w[0] <= w[1]), "history must be non-decreasing");
}

#[test]
fn scenario_active_flags_follow_the_reserved_zero_convention() {
    let cfg = config(Dimensions::new(6, 6, 6), NeighborhoodKind::Moore, 0.0, 3);
    let mut sim = Simulation::new(cfg).unwrap();
    sim.seed_nucleus(0, 0, 0);
    let result = sim.run(&NullProgressSink);

    assert!(!result.active[0], "grain 0 is never active");
    assert!(result.active[1..].iter().all(|&a| a), "every real grain is active");
}

#[test]
fn property_recrystallization_time_is_zero_only_where_unrecrystallized_is_impossible() {
    let cfg = config(Dimensions::new(6, 6, 6), NeighborhoodKind::Moore, 1e-3, 11);
    let sim = Simulation::new(cfg).unwrap();
    let result = sim.run(&NullProgressSink);

    for (&grain, &time) in result.feature_ids.iter().zip(result.recrystallization_time.iter()) {
        assert!(grain != 0, "termination implies no voxel remains unrecrystallized");
        // a pre-seeded voxel would report time 0 with grain != 0; this run has no
        // pre-seeding so every recrystallization time must be >= 1.
        assert!(time >= 1, "every voxel recrystallized during a step must record a positive time");
    }
}
