//! Error types for engine operations.
//!
//! Kernel-level failures are the two arithmetic guards (division by zero,
//! negative square root) and unknown comparison spellings; everything
//! structural (rank, shape, kind, presence) is a [`CoreError`] and passes
//! through transparently so hosts see one flat taxonomy.

use thiserror::Error;

use tensum_core::CoreError;

/// Result alias for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;

/// Top-level error type for elementwise, reduction, scan, filter, and
/// normalize operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Structural violation detected by the core validator or coercion
    /// layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A divisor of exactly zero reached `div` (real or integer path).
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// A negative operand reached `sqrt`.
    #[error("square root of negative value {value} is not allowed")]
    NegativeRoot {
        /// The offending operand
        value: f64,
    },

    /// A filter comparison operator string had no known spelling.
    #[error("comparison operator `{0}` is not supported")]
    UnknownComparison(String),
}
