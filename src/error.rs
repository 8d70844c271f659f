//! Errors reported by the checked access tier of [`CircularDeque`](crate::CircularDeque).

use thiserror::Error;

/// Failure of a checked deque operation.
///
/// The unchecked tier (`Index`, `pop_back`, `pop_front`) never returns these;
/// misuse there is a caller bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// A pop was attempted on a deque with no live elements.
    #[error("deque is empty")]
    Empty,
    /// A logical position at or past the live length was requested.
    #[error("index {index} out of bounds for deque of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
