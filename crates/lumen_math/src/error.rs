use thiserror::Error;

/// Errors from the math kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A zero-length vector was normalized or used as a ray direction.
    #[error("degenerate geometry: zero-length vector cannot be normalized")]
    DegenerateGeometry,
}
