use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Gaussian kernel density estimate
// ---------------------------------------------------------------------------

/// Standard normal density at `x` centred on `mu` with width `sigma`.
fn gaussian(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = (x - mu) / sigma;
    (-0.5 * z * z).exp() / (sigma * (2.0 * std::f64::consts::PI).sqrt())
}

/// Scott's-rule bandwidth: n^(-1/5) · sample standard deviation.
///
/// Falls back to 1.0 for degenerate samples (fewer than two values, or
/// all values equal), which keeps the curve drawable instead of
/// collapsing it to a spike.
fn scott_bandwidth(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 1.0;
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let std_dev = variance.sqrt();
    if std_dev <= 0.0 {
        return 1.0;
    }

    (n as f64).powf(-0.2) * std_dev
}

/// Evaluate a Gaussian kernel density estimate for `values` on an even
/// grid of `grid_points` points spanning `range`.
///
/// Returns (x, density) pairs in grid order. Density is an average of
/// per-value kernels, so it is non-negative everywhere and integrates
/// to one over the whole real line (a truncated range captures less).
pub fn kernel_density(
    values: &[f64],
    range: (f64, f64),
    grid_points: usize,
) -> Result<Vec<(f64, f64)>, AnalysisError> {
    if values.is_empty() {
        return Err(AnalysisError::EmptyInput("no values for density estimate"));
    }

    let bandwidth = scott_bandwidth(values);
    let (lo, hi) = range;
    let grid_points = grid_points.max(2);
    let step = (hi - lo) / (grid_points - 1) as f64;

    let curve = (0..grid_points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density =
                values.iter().map(|&v| gaussian(x, v, bandwidth)).sum::<f64>() / values.len() as f64;
            (x, density)
        })
        .collect();

    Ok(curve)
}
