//! Error types for the aggregation builder.

use thiserror::Error;

use tensum_core::{CoreError, ElemKind};

/// Result alias for builder operations.
pub type AccumResult<T> = Result<T, AccumError>;

/// Top-level error type for append, merge, and finalize.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccumError {
    /// An absent (rank-0) sub-tensor was offered to `append`; there is no
    /// append-of-nothing.
    #[error("cannot accumulate an absent sub-tensor")]
    NullSubTensor,

    /// The sub-tensor's element kind does not match the builder's.
    #[error("sub-tensor element kind {actual} does not match accumulator kind {expected}")]
    KindMismatch {
        /// Kind the builder was created with
        expected: ElemKind,
        /// Kind of the offered sub-tensor
        actual: ElemKind,
    },

    /// The sub-tensor's rank differs from the locked sub-shape (or two
    /// merged builders disagree on sub-rank).
    #[error("cannot accumulate sub-tensors of different rank: expected {expected}, got {actual}")]
    RankMismatch {
        /// Rank locked by the first append
        expected: usize,
        /// Rank of the offending sub-tensor
        actual: usize,
    },

    /// A per-axis extent or lower bound differs from the locked sub-shape.
    #[error(
        "sub-tensor range [{actual_lower},{actual_upper}] differs from \
         [{expected_lower},{expected_upper}] on axis {axis}"
    )]
    ShapeMismatch {
        /// The first differing sub-shape axis
        axis: usize,
        /// Locked lower bound on that axis
        expected_lower: i64,
        /// Locked exclusive upper bound on that axis
        expected_upper: i64,
        /// Offered lower bound on that axis
        actual_lower: i64,
        /// Offered exclusive upper bound on that axis
        actual_upper: i64,
    },

    /// `merge` was handed a builder that has never accumulated anything.
    #[error("cannot merge an accumulator that has no appended sub-tensors")]
    MergeEmpty,

    /// Invariant violation surfaced by the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}
