/// Errors returned by [`ListHandle`](super::ListHandle) operations.
///
/// Absence of an element is never an error: lookups answer with `Option`
/// and removals with `bool` or `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The handle does not point at a list.
    #[error("operation on an absent list handle")]
    InvalidHandle,
}

/// Result type for fallible list operations.
pub type ListResult<T> = Result<T, ListError>;
