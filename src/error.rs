use thiserror::Error;

/// Errors surfaced by configuration APIs.
///
/// Degenerate numeric input (non-positive frequency, magnitude or view
/// boundary) is never an error; it is clamped or substituted where it
/// occurs. Only malformed configuration fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An unsupported `which` selector was passed to a grid call.
    #[error("unsupported grid selector `{0}`, expected \"major\", \"minor\" or \"both\"")]
    InvalidGridSelector(String),

    /// No projection is registered under the requested name.
    #[error("no projection registered under `{0}`")]
    UnknownProjection(String),

    /// View limits must be finite with min strictly below max.
    #[error("invalid view limits: ({min}, {max})")]
    InvalidLimits { min: f64, max: f64 },

    /// A series must contain at least one point.
    #[error("series contains no points")]
    EmptySeries,
}
