pub fn run() {
    use crate::config::{Dimensions, NeighborhoodKind, Origin, Resolution, SimConfig};

    let config = SimConfig {
        dimensions: Dimensions::new(32, 32, 32),
        resolution: Resolution::new(1.0, 1.0, 1.0),
        origin: Origin::default(),
        nucleation_rate: 0.0,
        neighborhood: NeighborhoodKind::Moore,
        deterministic_seed: None,
    };

    let output_path = std::path::Path::new("output/single_grain_growth");
    let pre_seeded = [(0usize, 0usize, 0usize)];

    match crate::tasks::run_recrystallization::run(config, &pre_seeded, output_path) {
        Ok(result) => {
            log::info!(
                "single grain reached {} voxels over {} steps",
                result.feature_ids.iter().filter(|&&g| g != 0).count(),
                result.history.len() - 1,
            );
        }
        Err(err) => {
            eprintln!("single_grain_growth failed: {err}");
            std::process::exit(1);
        }
    }
}
