//! Domain-level errors (no external dependencies)

use std::fmt;

use thiserror::Error;

/// Rule a comparator has to obey for a sort to be well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingRule {
    /// `cmp(x, y)` is the reverse of `cmp(y, x)`
    Antisymmetry,
    /// `x > y` and `y > z` implies `x > z`
    Transitivity,
    /// `x == y` implies `cmp(x, z) == cmp(y, z)`
    ConsistentWithEquality,
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingRule::Antisymmetry => write!(f, "antisymmetry"),
            OrderingRule::Transitivity => write!(f, "transitivity"),
            OrderingRule::ConsistentWithEquality => write!(f, "consistency with equality"),
        }
    }
}

/// Domain errors represent contract violations of the collection types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("unsupported operation on fixed-size view: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("concurrent modification: expected modification count {expected}, found {found}")]
    ConcurrentModification { expected: u64, found: u64 },

    #[error("comparator violates {rule}: {detail}")]
    InvalidOrdering { rule: OrderingRule, detail: String },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid range {from}..{to} for length {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    #[error("cursor has no current element to remove")]
    NoCurrentElement,

    #[error("destination length {found} does not match collection length {expected}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("cannot reserve capacity for {requested} elements")]
    CapacityExceeded { requested: usize },
}

impl CollectionError {
    /// True for the fail-fast error raised by invalidated traversals and views.
    pub fn is_concurrent_modification(&self) -> bool {
        matches!(self, CollectionError::ConcurrentModification { .. })
    }
}

/// Result type for domain operations.
pub type CollectionResult<T> = Result<T, CollectionError>;
