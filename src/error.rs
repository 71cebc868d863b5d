use thiserror::Error;

// ---------------------------------------------------------------------------
// Query errors – contract violations in the two chart queries
// ---------------------------------------------------------------------------

/// Errors returned by the outcome aggregator and the payload filter.
///
/// The bundled controls can't produce either of these: the dropdown only
/// offers sites taken from the dataset, and the controller clamps slider
/// values into the valid domain before querying. They exist for programmatic
/// callers, where a silent empty chart would hide the mistake.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A concrete site selection that does not appear in the dataset.
    #[error("unknown launch site: {site:?}")]
    UnknownSite { site: String },

    /// Payload bounds outside `0 <= low <= high <= max`.
    ///
    /// Bounds are reported after truncation to whole kilograms, i.e. as the
    /// filter would have compared them.
    #[error("invalid payload range [{low}, {high}]: bounds must satisfy 0 <= low <= high <= {max}")]
    InvalidRange { low: f64, high: f64, max: f64 },
}
