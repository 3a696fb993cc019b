use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// DistanceSummary – mean and median of the match distances
// ---------------------------------------------------------------------------

/// Mean and median of a distance sequence, in the sequence's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSummary {
    pub mean: f64,
    pub median: f64,
}

/// Summarise a non-empty sequence of distances.
///
/// Mean is sum/count. Median is the middle of the sorted sequence, or
/// the mean of the two middle values for even lengths.
pub fn summarize(distances: &[f64]) -> Result<DistanceSummary, AnalysisError> {
    if distances.is_empty() {
        return Err(AnalysisError::EmptyInput("no distances to summarize"));
    }

    let count = distances.len();
    let mean = distances.iter().sum::<f64>() / count as f64;

    let mut sorted = distances.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    Ok(DistanceSummary { mean, median })
}
