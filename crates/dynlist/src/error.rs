//! Error types for reorder operations.

use crate::reorder_list::ItemKey;

/// Error types for reorder operations.
///
/// These are caller contract violations surfaced through the fallible APIs.
/// A drag that cannot swap (first item moved up, last item moved down, offset
/// below the threshold) is a normal outcome and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderError {
    /// Slot index outside `0..len`.
    IndexOutOfBounds { index: usize, len: usize },
    /// Item key not present in the list (removed or never issued).
    UnknownItem(ItemKey),
}

impl std::fmt::Display for ReorderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReorderError::IndexOutOfBounds { index, len } => {
                write!(f, "Slot index {} out of bounds for list of length {}", index, len)
            }
            ReorderError::UnknownItem(key) => write!(f, "Item {:?} not found", key),
        }
    }
}

impl std::error::Error for ReorderError {}

/// Result type for reorder operations.
pub type ReorderResult<T> = Result<T, ReorderError>;
