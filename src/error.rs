use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by artifact loading, encoding and prediction.
///
/// Every variant is terminal for the current request only, except the
/// load-time ones (`ArtifactNotFound`, `AmbiguousColumn`) which disable the
/// prediction feature for the whole process. Nothing is retried
/// automatically.
#[derive(Debug, Error)]
pub enum PredictorError {
    /// Model or schema file missing or unreadable at startup.
    #[error("artifact not found: {path} ({reason})")]
    ArtifactNotFound { path: PathBuf, reason: String },

    /// Feature schema absent or empty when encoding was attempted.
    #[error("feature schema unavailable")]
    SchemaUnavailable,

    /// A category value matched more than one schema column, or one column
    /// was claimed by more than one value. Rejected at load time so a
    /// spurious indicator can never be set.
    #[error("ambiguous one-hot mapping: {0}")]
    AmbiguousColumn(String),

    /// A derived feature came out non-finite. Not reachable within the
    /// documented input bounds, but guarded regardless.
    #[error("derived feature computation failed: {0}")]
    ComputationError(String),

    /// The underlying model call failed (shape mismatch, runtime error).
    /// Reported per-request; the process keeps serving.
    #[error("prediction failed: {0}")]
    PredictionFailed(String),

    /// A numeric input fell outside its documented bounds.
    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
}
