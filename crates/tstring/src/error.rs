use thiserror::Error;

/// A substring position past the end of the content.
///
/// Only the starting position is range-checked; a requested length that runs
/// past the end is clamped, not rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("position {pos} out of range for string of length {len}")]
pub struct OutOfRangeError {
    /// The requested starting offset.
    pub pos: usize,
    /// The content length it was checked against.
    pub len: usize,
}

/// The backing block for a string could not be allocated.
///
/// Returned by the `try_` entry points; the infallible forms panic instead,
/// the way std collections do on exhaustion. The string that reported this
/// error is left exactly as it was before the operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("failed to allocate a {requested} byte string buffer")]
pub struct ReserveError {
    /// The block size that could not be obtained.
    pub requested: usize,
}
