use thiserror::Error;

/// Top-level error type for the arris corner-geometry engine.
///
/// Degenerate geometry inside the solver (collinear corners, zero-length
/// edges, over-shrunk radii) is clamped silently and never surfaces here;
/// out-of-range corner indices are caller programming errors and panic.
/// Errors are reserved for operations whose inputs the caller cannot
/// always validate up front.
#[derive(Debug, Error)]
pub enum ArrisError {
    #[error("mirror axis endpoints coincide at ({x}, {y})")]
    ZeroLengthAxis { x: f64, y: f64 },
}

/// Convenience type alias for results using [`ArrisError`].
pub type Result<T> = std::result::Result<T, ArrisError>;
