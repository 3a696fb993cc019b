use crate::data::model::Peak;
use crate::error::AnalysisError;

/// Match distances are reported in kilometres; the CRS unit is metres.
const METRES_PER_KM: f64 = 1000.0;

// ---------------------------------------------------------------------------
// NearestMatch – one peak paired with its closest candidate
// ---------------------------------------------------------------------------

/// A peak paired with the closest member of the candidate set.
#[derive(Debug, Clone)]
pub struct NearestMatch {
    pub peak: Peak,
    pub nearest: Peak,
    /// Separation in kilometres. Always ≥ 0 and equal to the global
    /// minimum over all candidates.
    pub distance_km: f64,
}

// ---------------------------------------------------------------------------
// Brute-force nearest-neighbour scan
// ---------------------------------------------------------------------------

/// Pair every peak in `peaks` with the closest member of `candidates`.
///
/// O(|peaks|·|candidates|) comparisons; both sets are small (tens to a
/// few hundred points), so a spatial index would be overkill. The scan
/// compares with strict `<`, so an exact tie keeps the earliest
/// candidate in iteration order — an arbitrary but fixed choice.
///
/// An empty candidate set has no minimum and is an explicit error.
pub fn match_nearest(
    peaks: &[Peak],
    candidates: &[Peak],
) -> Result<Vec<NearestMatch>, AnalysisError> {
    if candidates.is_empty() {
        return Err(AnalysisError::EmptyInput(
            "no candidate peaks to match against",
        ));
    }

    let matches = peaks
        .iter()
        .map(|peak| {
            let mut best = &candidates[0];
            let mut best_dist = peak.point.distance(&best.point);

            for candidate in &candidates[1..] {
                let dist = peak.point.distance(&candidate.point);
                if dist < best_dist {
                    best = candidate;
                    best_dist = dist;
                }
            }

            NearestMatch {
                peak: peak.clone(),
                nearest: best.clone(),
                distance_km: best_dist / METRES_PER_KM,
            }
        })
        .collect();

    Ok(matches)
}
