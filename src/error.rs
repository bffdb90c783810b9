use thiserror::Error;

/// Misuse of an [`IntSet`](crate::IntSet) reported through the fallible API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    #[error("set is full, capacity is {capacity}")]
    CapacityExceeded { capacity: usize },
    #[error("{0} is already a member")]
    DuplicateValue(i32),
    #[error("malformed set text: {0}")]
    Parse(String),
}
