//! The elementwise engine: five generic drivers over the operator catalog.
//!
//! Every public operation in this crate is a thin wrapper around one of
//! these call shapes:
//!
//! 1. [`map_scalar`]: (tensor, scalar) -> tensor
//! 2. [`zip_map`]: (tensor, tensor) -> tensor
//! 3. [`zip_fold`]: (tensor, tensor) -> scalar
//! 4. [`fold`]: tensor -> scalar, with a count-aware finalizer
//! 5. [`fold_indexed`]: tensor -> (value, index) pair
//!
//! plus the cumulative variant [`scan`]. Implementing a new operation means
//! picking a driver and passing it an [`ElemOp`] (and, for folds, a
//! [`Finalizer`]); the drivers own all validation, presence handling, and
//! kind conversion.
//!
//! # Missing-value policy
//!
//! The drivers implement the per-shape rules exactly:
//!
//! - Maps, zip shapes, and scans require fully present operands
//!   (`NullNotAllowed` otherwise).
//! - Folds skip presence-missing elements *and* NaN values, and report the
//!   surviving count to the finalizer.
//! - Zip folds do **not** skip NaN: there, NaN is a value, not a gap.
//!
//! Empty (rank-0) inputs are never errors: each driver returns its
//! documented neutral result and emits a `tracing` warning.

use std::borrow::Cow;

use tensum_core::{coerce, validate, CoreError, ElemBuffer, ElemKind, Scalar, Tensor};
use tracing::warn;

use crate::catalog::{int_div, ElemOp};
use crate::error::KernelResult;

/// Post-processing step applied to a fold's running result.
///
/// Receives the accumulated value and the number of non-missing elements
/// that contributed to it.
pub type Finalizer = fn(f64, usize) -> f64;

/// Stock finalizers for the fold drivers.
pub mod finalize {
    use tracing::warn;

    /// Return the accumulated value unchanged.
    pub fn noop(acc: f64, _count: usize) -> f64 {
        acc
    }

    /// Divide by the non-missing count; an all-missing input warns and
    /// falls back to 0 rather than dividing by zero.
    pub fn average(acc: f64, count: usize) -> f64 {
        if count == 0 {
            warn!("input contains only missing or NaN elements, returning 0");
            return 0.0;
        }
        acc / count as f64
    }

    /// `sqrt(acc / (count - 1))`, the sample standard deviation step.
    /// Counts of 0 and 1 have no spread and finalize to 0.
    pub fn sample_root(acc: f64, count: usize) -> f64 {
        if count <= 1 {
            return 0.0;
        }
        (acc / (count as f64 - 1.0)).sqrt()
    }
}

/// Which extremum an indexed fold tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extremum {
    /// Track the maximum (seeded with `-inf`)
    Max,
    /// Track the minimum (seeded with `+inf`)
    Min,
}

/// A fold result that carries the winning element's index.
///
/// The index lives in the tensor's own index space: the axis lower bound
/// is the origin, so a one-based vector reports its first element as
/// index 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueIndex {
    /// The extremal value found
    pub value: f64,
    /// Bounds-aware index of its first occurrence
    pub index: i64,
}

fn ensure_equal_rank(left: &Tensor, right: &Tensor) -> Result<(), CoreError> {
    if left.rank() != right.rank() {
        return Err(CoreError::RankMismatch {
            left: left.rank(),
            right: right.rank(),
        });
    }
    Ok(())
}

/// Shape 1: apply an operator to every element against a scalar side
/// parameter, producing a tensor of `out_kind`.
///
/// The input must be fully present; the output never carries a presence
/// mask. A rank-0 input warns and passes through unchanged. When the
/// operator is `Div` and the output kind is integral, every element takes
/// the exact integer path instead of the real domain.
///
/// # Errors
///
/// `NullNotAllowed` for inputs with missing elements; operator guard
/// failures; coercion failures for the output kind.
pub fn map_scalar(
    tensor: &Tensor,
    side: &Scalar,
    op: ElemOp,
    out_kind: ElemKind,
) -> KernelResult<Tensor> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(tensor.clone());
    }
    validate::ensure_fully_present(tensor)?;

    let n = tensor.len();
    let mut out = ElemBuffer::with_capacity(out_kind, n);

    if op == ElemOp::Div && out_kind.is_integer() {
        let denom = coerce::to_integer(side)?;
        for i in 0..n {
            let num = tensor.buffer().get_integer(i)?;
            out.push_scalar(&coerce::from_integer(int_div(num, denom)?, out_kind)?)?;
        }
    } else {
        let side_real = side.to_real();
        for i in 0..n {
            let x = tensor.buffer().get_real(i);
            out.push_real(op.apply(x, x, side_real)?)?;
        }
    }

    Ok(Tensor::new(out, tensor.shape(), tensor.lower_bounds(), None)?)
}

/// Shape 2: apply an operator pairwise across two shape-compatible,
/// fully present tensors, producing a same-shape tensor of the inputs'
/// kind.
///
/// Two rank-0 inputs warn and return the left operand. Integer-kind `Div`
/// takes the exact integer path per element.
///
/// # Errors
///
/// `RankMismatch`/`ShapeMismatch`/`KindMismatch` for incompatible
/// operands, `NullNotAllowed` for missing elements, operator guard
/// failures.
pub fn zip_map(left: &Tensor, right: &Tensor, op: ElemOp) -> KernelResult<Tensor> {
    ensure_equal_rank(left, right)?;
    if right.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(left.clone());
    }
    validate::ensure_same_layout(left, right)?;
    validate::ensure_fully_present(left)?;
    validate::ensure_fully_present(right)?;

    let kind = left.kind();
    let n = left.len();
    let mut out = ElemBuffer::with_capacity(kind, n);

    if op == ElemOp::Div && kind.is_integer() {
        for i in 0..n {
            let num = left.buffer().get_integer(i)?;
            let denom = right.buffer().get_integer(i)?;
            out.push_scalar(&coerce::from_integer(int_div(num, denom)?, kind)?)?;
        }
    } else {
        for i in 0..n {
            let x = left.buffer().get_real(i);
            let y = right.buffer().get_real(i);
            out.push_real(op.apply(x, x, y)?)?;
        }
    }

    Ok(Tensor::new(out, left.shape(), left.lower_bounds(), None)?)
}

/// Shape 3: fold an operator across two shape-compatible, fully present
/// tensors into a single real value, then finalize it.
///
/// NaN elements are *not* skipped here. Two rank-0 inputs warn and return
/// 0 without running the finalizer.
///
/// # Errors
///
/// Same structural errors as [`zip_map`], plus operator guard failures.
pub fn zip_fold(
    left: &Tensor,
    right: &Tensor,
    op: ElemOp,
    finalizer: Finalizer,
) -> KernelResult<f64> {
    ensure_equal_rank(left, right)?;
    if right.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(0.0);
    }
    validate::ensure_same_layout(left, right)?;
    validate::ensure_fully_present(left)?;
    validate::ensure_fully_present(right)?;

    let n = left.len();
    let mut running = op.seed();
    for i in 0..n {
        running = op.apply(left.buffer().get_real(i), running, right.buffer().get_real(i))?;
    }
    Ok(finalizer(running, n))
}

/// Shape 4: fold an operator across one tensor into a single real value.
///
/// Presence-missing elements and NaN values are skipped; the finalizer
/// receives the count of elements that actually contributed. A rank-0
/// input warns and returns 0 without running the finalizer.
///
/// # Errors
///
/// Operator guard failures.
pub fn fold(tensor: &Tensor, side: f64, op: ElemOp, finalizer: Finalizer) -> KernelResult<f64> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(0.0);
    }

    let mut running = op.seed();
    let mut kept = 0usize;
    for i in 0..tensor.len() {
        if let Some(mask) = tensor.presence() {
            if mask.is_missing(i) {
                continue;
            }
        }
        let x = tensor.buffer().get_real(i);
        // NaN counts as missing for reductions.
        if x.is_nan() {
            continue;
        }
        running = op.apply(x, running, side)?;
        kept += 1;
    }
    Ok(finalizer(running, kept))
}

/// Shape 5: track the extremal (value, index) pair across a rank-1
/// tensor.
///
/// Skips missing and NaN elements like [`fold`]. Strict improvement only,
/// so ties keep the leftmost occurrence. The reported index uses the axis
/// lower bound as origin. A rank-0 input warns and returns the neutral
/// `(0, 0)` pair; higher ranks are rejected.
///
/// # Errors
///
/// `RankMismatch` for inputs of rank 2 or more.
pub fn fold_indexed(tensor: &Tensor, direction: Extremum) -> KernelResult<ValueIndex> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(ValueIndex { value: 0.0, index: 0 });
    }
    validate::ensure_rank(tensor, 1)?;

    let origin = tensor.lower_bounds()[0];
    let mut best = ValueIndex {
        value: match direction {
            Extremum::Max => f64::NEG_INFINITY,
            Extremum::Min => f64::INFINITY,
        },
        index: 0,
    };

    for i in 0..tensor.len() {
        if let Some(mask) = tensor.presence() {
            if mask.is_missing(i) {
                continue;
            }
        }
        let x = tensor.buffer().get_real(i);
        if x.is_nan() {
            continue;
        }
        let improved = match direction {
            Extremum::Max => x > best.value,
            Extremum::Min => x < best.value,
        };
        if improved {
            best = ValueIndex {
                value: x,
                index: origin + i as i64,
            };
        }
    }
    Ok(best)
}

/// Cumulative variant of shape 1: left-to-right scan in row-major order.
///
/// `output[i] = op(input[i], output[i-1])` with `output[-1] = seed`. The
/// running value is re-read from the converted output element, so integer
/// tensors accumulate in their own kind. Missing elements are rejected;
/// rank-0 warns and passes through.
///
/// # Errors
///
/// `NullNotAllowed` for inputs with missing elements; operator guard and
/// coercion failures.
pub fn scan(tensor: &Tensor, seed: f64, op: ElemOp) -> KernelResult<Tensor> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(tensor.clone());
    }
    validate::ensure_fully_present(tensor)?;

    let kind = tensor.kind();
    let n = tensor.len();
    let mut out = ElemBuffer::with_capacity(kind, n);
    let mut running = seed;
    for i in 0..n {
        let x = tensor.buffer().get_real(i);
        let converted = coerce::from_real(op.apply(x, x, running)?, kind)?;
        out.push_scalar(&converted)?;
        running = converted.to_real();
    }

    Ok(Tensor::new(out, tensor.shape(), tensor.lower_bounds(), None)?)
}

/// Borrow the tensor widened to the real kind, cloning only when needed.
pub(crate) fn widened(tensor: &Tensor) -> Cow<'_, Tensor> {
    if tensor.kind() == ElemKind::F64 {
        Cow::Borrowed(tensor)
    } else {
        Cow::Owned(tensor.widen_to_real())
    }
}
