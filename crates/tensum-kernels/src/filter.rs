//! Predicate filtering of rank-1 tensors.
//!
//! Keeps the elements (original kind and values, original order) whose
//! real-domain value passes a comparison against a reference scalar.
//!
//! Equality here treats NaN as an ordinary value: `NaN == NaN` holds and
//! `NaN != NaN` does not. This is deliberately different from the
//! reduction path, where NaN counts as missing: filtering is about the
//! stored values themselves, not about aggregation.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, Scalar, Tensor};
//! use tensum_kernels::filter::{filter, CmpOp};
//!
//! let t = Tensor::vector(ElemBuffer::I64(vec![1, 2, 0, 3, 0]));
//! let kept = filter(&t, CmpOp::Ne, &Scalar::I64(0)).unwrap();
//! assert_eq!(kept.buffer(), &ElemBuffer::I64(vec![1, 2, 3]));
//! ```

use std::str::FromStr;

use tensum_core::{validate, ElemBuffer, Scalar, Tensor};
use tracing::warn;

use crate::error::{KernelError, KernelResult};

/// Comparison operator for [`filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CmpOp {
    /// `==` (also spelled `=`)
    Eq,
    /// `!=` (also spelled `<>`)
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl CmpOp {
    /// Evaluate the predicate in the real domain with NaN-aware equality.
    pub fn matches(self, left: f64, right: f64) -> bool {
        match self {
            CmpOp::Eq => {
                if left.is_nan() || right.is_nan() {
                    left.is_nan() && right.is_nan()
                } else {
                    left == right
                }
            }
            CmpOp::Ne => {
                if left.is_nan() || right.is_nan() {
                    !(left.is_nan() && right.is_nan())
                } else {
                    left != right
                }
            }
            CmpOp::Lt => left < right,
            CmpOp::Le => left <= right,
            CmpOp::Gt => left > right,
            CmpOp::Ge => left >= right,
        }
    }
}

impl FromStr for CmpOp {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "==" | "=" => Ok(CmpOp::Eq),
            "!=" | "<>" => Ok(CmpOp::Ne),
            "<" => Ok(CmpOp::Lt),
            "<=" => Ok(CmpOp::Le),
            ">" => Ok(CmpOp::Gt),
            ">=" => Ok(CmpOp::Ge),
            other => Err(KernelError::UnknownComparison(other.to_string())),
        }
    }
}

/// Keep the elements of a rank-1, fully present tensor that pass the
/// predicate, in their original order.
///
/// Zero survivors produce an empty tensor plus a warning, an expected
/// data condition, never an error. A rank-0 input likewise passes through
/// with a warning.
///
/// # Errors
///
/// `RankMismatch` for ranks above 1, `NullNotAllowed` for missing
/// elements.
pub fn filter(tensor: &Tensor, op: CmpOp, value: &Scalar) -> KernelResult<Tensor> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(tensor.clone());
    }
    validate::ensure_rank(tensor, 1)?;
    validate::ensure_fully_present(tensor)?;

    let right = value.to_real();
    let mut kept = ElemBuffer::empty(tensor.kind());
    for i in 0..tensor.len() {
        if op.matches(tensor.buffer().get_real(i), right) {
            kept.push_scalar(&tensor.buffer().get_scalar(i))?;
        }
    }

    if kept.is_empty() {
        warn!("no elements passed the filter, returning an empty tensor");
        return Ok(Tensor::empty(tensor.kind()));
    }
    Ok(Tensor::vector(kept))
}

/// The default filter: drop exact zeros.
pub fn filter_nonzero(tensor: &Tensor) -> KernelResult<Tensor> {
    filter(tensor, CmpOp::Ne, &Scalar::F64(0.0))
}
