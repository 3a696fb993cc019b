use thiserror::Error;

// ---------------------------------------------------------------------------
// Failure taxonomy
// ---------------------------------------------------------------------------

/// Everything that can abort the analysis.
///
/// No variant is recovered locally: each one propagates up through
/// `main` and ends the run with the underlying cause attached.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The CSV resource could not be fetched.
    #[error("failed to retrieve {url}: {reason}")]
    Retrieval { url: String, reason: String },

    /// The CSV is missing an expected column, or a cell failed to
    /// parse into its typed field.
    #[error("dataset schema mismatch: {0}")]
    Schema(String),

    /// A stage that requires a non-empty input received zero elements.
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    /// The output image could not be rendered or written.
    #[error("failed to write chart to {path}: {reason}")]
    Write { path: String, reason: String },
}
