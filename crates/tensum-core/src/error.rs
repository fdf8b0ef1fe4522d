//! Error types for core tensor operations.
//!
//! Every violation detected by this crate is reported as a distinct
//! [`CoreError`] variant carrying enough operand context (kinds, ranks,
//! per-axis ranges) to diagnose the failing call. No operation ever returns
//! a partially constructed tensor: callers get either a complete, valid
//! value or one of these errors.

use thiserror::Error;

use crate::types::ElemKind;

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Top-level error type for tensor construction, coercion, and validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A coercion was requested for a kind outside the domain it supports
    /// (the exact integer path only exists for integer kinds).
    #[error("element kind {kind} is not supported for the {domain} domain")]
    UnsupportedKind {
        /// The offending element kind
        kind: ElemKind,
        /// The computation domain that rejected it ("integer" or "real")
        domain: &'static str,
    },

    /// Two operands of a binary operation carry different element kinds.
    #[error("cannot operate on tensors of different element kinds: {left} vs {right}")]
    KindMismatch {
        /// Element kind of the left operand
        left: ElemKind,
        /// Element kind of the right operand
        right: ElemKind,
    },

    /// Two operands of a binary operation have different numbers of
    /// dimensions, or an operation requires a specific rank.
    #[error("cannot operate on tensors of {left} and {right} dimensions")]
    RankMismatch {
        /// Rank of the left operand (or the required rank)
        left: usize,
        /// Rank of the right operand (or the actual rank)
        right: usize,
    },

    /// Per-axis extent or index range differs between two operands.
    #[error(
        "ranges [{left_lower},{left_upper}] and [{right_lower},{right_upper}] \
         for dimension {axis} are not compatible"
    )]
    ShapeMismatch {
        /// The first differing axis
        axis: usize,
        /// Left operand's lower bound on that axis
        left_lower: i64,
        /// Left operand's exclusive upper bound on that axis
        left_upper: i64,
        /// Right operand's lower bound on that axis
        right_lower: i64,
        /// Right operand's exclusive upper bound on that axis
        right_upper: i64,
    },

    /// A tensor with missing elements reached an operation that requires
    /// full presence.
    #[error("tensors with missing elements are not allowed here")]
    NullNotAllowed,

    /// A real value has no representation in the requested kind (only
    /// decimals can refuse a value: non-finite inputs and magnitudes beyond
    /// the 96-bit mantissa range).
    #[error("value {value} cannot be represented as {kind}")]
    NonRepresentable {
        /// The real-domain value that failed to convert
        value: f64,
        /// The target element kind
        kind: ElemKind,
    },

    /// Construction input lengths disagree with the declared shape.
    #[error("{what} has length {actual}, but shape {shape:?} requires {expected}")]
    InvalidLength {
        /// Which constructor input was wrong ("data", "lower bounds", "presence mask")
        what: &'static str,
        /// Declared shape
        shape: Vec<usize>,
        /// Length the shape requires
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
}
