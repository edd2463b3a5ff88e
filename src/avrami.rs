/// ==============================================================================================
/// ======================================= Avrami Fit =============================================
/// ==============================================================================================
///
/// Linearizes X(t) = 1 - exp(-k*t^n) as ln(-ln(1-X)) = n*ln(t) + ln(k) and fits an ordinary
/// least-squares line. The trailing history entry (always 1.0 by construction, since the driver
/// only stops once every voxel has recrystallized) is singular under the log and is dropped
/// before fitting, mirroring the upstream's `pop_back()` — but the full history, trailing 1.0
/// included, is still what `SimulationResult` reports.

/// The fitted Avrami kinetic parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvramiParams {
    pub k: f32,
    pub n: f32,
}

/// Fit (k, n) from the recrystallized-fraction history. `history[0]` is the initial 0.0 and
/// `history` may or may not include the trailing 1.0 entry written at completion; either way
/// the last entry is dropped before regression. Returns `None` if fewer than 2 usable points
/// remain or the x-values are degenerate (all equal), matching the non-fatal "fit-degenerate"
/// path in `SimError`.
pub fn fit(history: &[f32]) -> Option<AvramiParams> {
    if history.len() < 2 {
        return None;
    }
    // Drop the trailing entry (singular: ln(-ln(1-1.0)) = ln(-ln(0)) = +inf).
    let body = &history[..history.len() - 1];

    // history[0] is the t=0, X=0 sample; regression starts at t=1.
    let mut xs = Vec::with_capacity(body.len().saturating_sub(1));
    let mut ys = Vec::with_capacity(body.len().saturating_sub(1));
    for (idx, &fraction) in body.iter().enumerate().skip(1) {
        if !(0.0..1.0).contains(&fraction) {
            continue;
        }
        let t = idx as f32;
        let x = t.ln();
        let y = (-(1.0 - fraction).ln()).ln();
        if x.is_finite() && y.is_finite() {
            xs.push(x);
            ys.push(y);
        }
    }

    ordinary_least_squares(&xs, &ys).map(|(slope, intercept)| AvramiParams {
        k: intercept.exp(),
        n: slope,
    })
}

/// Slope/intercept of the best-fit line through `(xs[i], ys[i])`. `None` if there are fewer
/// than 2 points or the x-values have zero variance (a vertical "fit" is undefined here).
fn ordinary_least_squares(xs: &[f32], ys: &[f32]) -> Option<(f32, f32)> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }

    let n_f = n as f32;
    let mean_x: f32 = xs.iter().sum::<f32>() / n_f;
    let mean_y: f32 = ys.iter().sum::<f32>() / n_f;

    let mut ss_xx = 0.0f32;
    let mut ss_xy = 0.0f32;
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        ss_xx += dx * dx;
        ss_xy += dx * (y - mean_y);
    }

    if ss_xx <= f32::EPSILON {
        return None;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;
    Some((slope, intercept))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_hand_computed_ols_on_the_scenario_history() {
        // history = [0, 0.05, 0.20, 0.55, 0.90, 1.0]
        let history = vec![0.0f32, 0.05, 0.20, 0.55, 0.90, 1.0];
        let params = fit(&history).expect("fit should succeed");

        let xs: Vec<f32> = (1..=4).map(|t| (t as f32).ln()).collect();
        let ys: Vec<f32> = [0.05f32, 0.20, 0.55, 0.90]
            .iter()
            .map(|&x| (-(1.0 - x).ln()).ln())
            .collect();
        let (slope, intercept) = ordinary_least_squares(&xs, &ys).unwrap();

        assert!((params.n - slope).abs() < 1e-4);
        assert!((params.k - intercept.exp()).abs() < 1e-4);
    }

    #[test]
    fn too_few_points_is_degenerate() {
        assert!(fit(&[0.0, 1.0]).is_none());
        assert!(fit(&[0.0, 0.3, 1.0]).is_none());
    }

    #[test]
    fn zero_x_variance_is_degenerate() {
        let xs = vec![1.0f32, 1.0, 1.0];
        let ys = vec![0.1f32, 0.4, 0.9];
        assert!(ordinary_least_squares(&xs, &ys).is_none());
    }
}
