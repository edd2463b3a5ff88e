pub fn run() {
    use crate::config::{Dimensions, NeighborhoodKind, Origin, Resolution, SimConfig};

    let dimensions = Dimensions::new(64, 64, 64);
    let resolution = Resolution::new(1.0, 1.0, 1.0);

    for &nucleation_rate in &[1e-6, 1e-5, 1e-4, 1e-3] {
        let config = SimConfig {
            dimensions,
            resolution,
            origin: Origin::default(),
            nucleation_rate,
            neighborhood: NeighborhoodKind::Moore,
            deterministic_seed: None,
        };

        let output_path = std::path::PathBuf::from(format!("output/nucleation_sweep/{nucleation_rate:e}"));

        match crate::tasks::run_recrystallization::run(config, &[], &output_path) {
            Ok(result) => {
                let avrami = result.avrami.map(|p| (p.k, p.n));
                log::info!(
                    "nucleation_rate={nucleation_rate:e} grain_count={} avrami={avrami:?}",
                    result.active.len().saturating_sub(1),
                );
            }
            Err(err) => {
                eprintln!("nucleation_sweep failed at nucleation_rate={nucleation_rate:e}: {err}");
                std::process::exit(1);
            }
        }
    }
}
