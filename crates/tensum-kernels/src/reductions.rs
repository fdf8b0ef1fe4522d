//! Tensor reduction operations.
//!
//! Folds over a single tensor (sum, mean, spread, extrema) and over a pair
//! of tensors (dot product, pattern containment). Missing elements and NaN
//! values are excluded and the effective sample count drives the
//! size-dependent finalizers; see [`crate::engine`] for the exact policy.
//!
//! Kind-preserving reductions ([`sum`], [`abs_sum`], [`min`], [`max`])
//! convert their result back into the input's element kind; the
//! statistical reductions ([`mean`], [`stddev`], [`sum_wide`]) stay in
//! `f64` to avoid pointless truncation.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, Tensor};
//! use tensum_kernels::reductions;
//!
//! let t = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0]));
//! assert_eq!(reductions::sum_wide(&t).unwrap(), 10.0);
//! assert_eq!(reductions::mean(&t).unwrap(), 2.5);
//!
//! let best = reductions::argmax(&t).unwrap();
//! assert_eq!((best.value, best.index), (4.0, 4)); // one-based axis
//! ```

use tensum_core::{coerce, Scalar, Tensor};

use crate::catalog::ElemOp;
use crate::engine::{self, finalize, Extremum, ValueIndex};
use crate::error::KernelResult;

/// Sum of all elements, returned in the input's kind.
pub fn sum(tensor: &Tensor) -> KernelResult<Scalar> {
    let total = engine::fold(tensor, 0.0, ElemOp::Sum, finalize::noop)?;
    Ok(coerce::from_real(total, tensor.kind())?)
}

/// Sum of all elements in the real domain, immune to integer overflow.
pub fn sum_wide(tensor: &Tensor) -> KernelResult<f64> {
    engine::fold(tensor, 0.0, ElemOp::Sum, finalize::noop)
}

/// Sum of absolute values, returned in the input's kind.
pub fn abs_sum(tensor: &Tensor) -> KernelResult<Scalar> {
    let total = engine::fold(tensor, 0.0, ElemOp::AbsSum, finalize::noop)?;
    Ok(coerce::from_real(total, tensor.kind())?)
}

/// Arithmetic mean of the non-missing elements.
///
/// An input with no usable elements warns and yields 0.
pub fn mean(tensor: &Tensor) -> KernelResult<f64> {
    engine::fold(tensor, 0.0, ElemOp::Sum, finalize::average)
}

/// Sample standard deviation of the non-missing elements.
///
/// Two passes: the mean, then the summed squared deviations finalized by
/// `sqrt(acc / (n - 1))`. Fewer than two usable elements yield 0.
pub fn stddev(tensor: &Tensor) -> KernelResult<f64> {
    let center = mean(tensor)?;
    engine::fold(tensor, center, ElemOp::Diff, finalize::sample_root)
}

/// Minimum element, returned in the input's kind.
pub fn min(tensor: &Tensor) -> KernelResult<Scalar> {
    let best = engine::fold(tensor, 0.0, ElemOp::Min, finalize::noop)?;
    Ok(coerce::from_real(best, tensor.kind())?)
}

/// Maximum element, returned in the input's kind.
pub fn max(tensor: &Tensor) -> KernelResult<Scalar> {
    let best = engine::fold(tensor, 0.0, ElemOp::Max, finalize::noop)?;
    Ok(coerce::from_real(best, tensor.kind())?)
}

/// Maximum element of a rank-1 tensor together with its index.
///
/// Ties keep the leftmost occurrence; the index origin is the axis lower
/// bound.
pub fn argmax(tensor: &Tensor) -> KernelResult<ValueIndex> {
    engine::fold_indexed(tensor, Extremum::Max)
}

/// Minimum element of a rank-1 tensor together with its index.
pub fn argmin(tensor: &Tensor) -> KernelResult<ValueIndex> {
    engine::fold_indexed(tensor, Extremum::Min)
}

/// Inner product of two shape-compatible tensors, flattened row-major.
pub fn dot(left: &Tensor, right: &Tensor) -> KernelResult<f64> {
    engine::zip_fold(left, right, ElemOp::Dot, finalize::noop)
}

/// Whether every non-zero element of `pattern` equals the element at the
/// same position of `tensor` (zero acts as a wildcard in the pattern).
pub fn contains(tensor: &Tensor, pattern: &Tensor) -> KernelResult<bool> {
    let mismatches = engine::zip_fold(tensor, pattern, ElemOp::Contains, finalize::noop)?;
    Ok(mismatches == 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tensum_core::{ElemBuffer, ElemKind, MissingMask};

    fn vec64(values: &[f64]) -> Tensor {
        Tensor::vector(ElemBuffer::F64(values.to_vec()))
    }

    #[test]
    fn sum_mean_stddev_reference_values() {
        let t = vec64(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sum(&t).unwrap(), Scalar::F64(10.0));
        assert_eq!(mean(&t).unwrap(), 2.5);
        // sqrt(((1-2.5)^2 + (2-2.5)^2 + (3-2.5)^2 + (4-2.5)^2) / 3)
        assert!((stddev(&t).unwrap() - 1.2909944487358056).abs() < 1e-12);
    }

    #[test]
    fn sum_preserves_the_input_kind() {
        let t = Tensor::vector(ElemBuffer::I16(vec![1, 2, 3]));
        assert_eq!(sum(&t).unwrap(), Scalar::I16(6));
        assert_eq!(sum_wide(&t).unwrap(), 6.0);
    }

    #[test]
    fn missing_elements_shrink_the_sample() {
        let mut mask = MissingMask::all_present(4);
        mask.set_missing(0);
        let t = Tensor::new(
            ElemBuffer::F64(vec![100.0, 2.0, f64::NAN, 4.0]),
            &[4],
            &[1],
            Some(mask),
        )
        .unwrap();
        // only 2.0 and 4.0 survive
        assert_eq!(mean(&t).unwrap(), 3.0);
    }

    #[test]
    fn extrema_return_the_input_kind() {
        let t = Tensor::vector(ElemBuffer::I32(vec![5, -3, 9]));
        assert_eq!(min(&t).unwrap(), Scalar::I32(-3));
        assert_eq!(max(&t).unwrap(), Scalar::I32(9));
    }

    #[test]
    fn empty_reductions_are_neutral_not_errors() {
        let t = Tensor::empty(ElemKind::F64);
        assert_eq!(sum(&t).unwrap(), Scalar::F64(0.0));
        assert_eq!(mean(&t).unwrap(), 0.0);
        assert_eq!(min(&t).unwrap(), Scalar::F64(0.0));
    }

    #[test]
    fn argmax_breaks_ties_leftmost() {
        let t = vec64(&[3.0, 7.0, 2.0, 7.0]);
        let best = argmax(&t).unwrap();
        assert_eq!(best.value, 7.0);
        assert_eq!(best.index, 2); // one-based axis, first of the two 7s
    }

    #[test]
    fn argmin_skips_missing_values() {
        let t = vec64(&[f64::NAN, 5.0, 1.0]);
        let best = argmin(&t).unwrap();
        assert_eq!((best.value, best.index), (1.0, 3));
    }

    #[test]
    fn dot_is_the_flattened_inner_product() {
        let a = Tensor::from_buffer(ElemBuffer::F64(vec![1.0, 2.0, 3.0, 4.0]), &[2, 2]).unwrap();
        let b = Tensor::from_buffer(ElemBuffer::F64(vec![5.0, 6.0, 7.0, 8.0]), &[2, 2]).unwrap();
        assert_eq!(dot(&a, &b).unwrap(), 70.0);
    }

    #[test]
    fn contains_honors_the_zero_wildcard() {
        let t = Tensor::vector(ElemBuffer::I32(vec![1, 2, 3]));
        let pattern = Tensor::vector(ElemBuffer::I32(vec![1, 0, 3]));
        assert!(contains(&t, &pattern).unwrap());

        let other = Tensor::vector(ElemBuffer::I32(vec![1, 0, 4]));
        assert!(!contains(&t, &other).unwrap());
    }
}
