//! Shape, bounds, and presence validation for binary operations.
//!
//! Every (tensor, tensor) operation runs through [`ensure_same_layout`]
//! before touching a single element: equal rank, then per-axis equal extent
//! *and* equal lower bound, then equal element kind. The per-axis check
//! reports the full index range of both operands on the first differing
//! axis, which is usually all the context needed to find the producer of
//! the bad operand.

use crate::error::{CoreError, CoreResult};
use crate::tensor::Tensor;

/// Check that two extent/bound descriptors describe the same index space.
///
/// Shared by the elementwise engine (whole-tensor compatibility) and the
/// aggregation builder (sub-tensor layout lock).
///
/// # Errors
///
/// [`CoreError::RankMismatch`] or [`CoreError::ShapeMismatch`].
pub fn ensure_same_extents(
    left_shape: &[usize],
    left_bounds: &[i64],
    right_shape: &[usize],
    right_bounds: &[i64],
) -> CoreResult<()> {
    if left_shape.len() != right_shape.len() {
        return Err(CoreError::RankMismatch {
            left: left_shape.len(),
            right: right_shape.len(),
        });
    }
    for axis in 0..left_shape.len() {
        if left_shape[axis] != right_shape[axis] || left_bounds[axis] != right_bounds[axis] {
            return Err(CoreError::ShapeMismatch {
                axis,
                left_lower: left_bounds[axis],
                left_upper: left_bounds[axis] + left_shape[axis] as i64,
                right_lower: right_bounds[axis],
                right_upper: right_bounds[axis] + right_shape[axis] as i64,
            });
        }
    }
    Ok(())
}

/// Check full binary-operation compatibility: rank, per-axis ranges, and
/// element kind.
///
/// # Errors
///
/// [`CoreError::RankMismatch`], [`CoreError::ShapeMismatch`], or
/// [`CoreError::KindMismatch`].
pub fn ensure_same_layout(left: &Tensor, right: &Tensor) -> CoreResult<()> {
    ensure_same_extents(
        left.shape(),
        left.lower_bounds(),
        right.shape(),
        right.lower_bounds(),
    )?;
    if left.kind() != right.kind() {
        return Err(CoreError::KindMismatch {
            left: left.kind(),
            right: right.kind(),
        });
    }
    Ok(())
}

/// Check that a tensor has no missing elements.
///
/// # Errors
///
/// [`CoreError::NullNotAllowed`].
pub fn ensure_fully_present(tensor: &Tensor) -> CoreResult<()> {
    if tensor.has_missing() {
        return Err(CoreError::NullNotAllowed);
    }
    Ok(())
}

/// Check that a tensor has exactly the given rank.
///
/// # Errors
///
/// [`CoreError::RankMismatch`] with `left` as the required rank.
pub fn ensure_rank(tensor: &Tensor, required: usize) -> CoreResult<()> {
    if tensor.rank() != required {
        return Err(CoreError::RankMismatch {
            left: required,
            right: tensor.rank(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::ElemBuffer;
    use crate::presence::MissingMask;

    #[test]
    fn identical_layouts_pass() {
        let a = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 6]), &[2, 3]).unwrap();
        let b = Tensor::from_buffer(ElemBuffer::F64(vec![2.0; 6]), &[2, 3]).unwrap();
        assert!(ensure_same_layout(&a, &b).is_ok());
    }

    #[test]
    fn rank_difference_is_detected_first() {
        let a = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 6]), &[6]).unwrap();
        let b = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 6]), &[2, 3]).unwrap();
        assert!(matches!(
            ensure_same_layout(&a, &b),
            Err(CoreError::RankMismatch { left: 1, right: 2 })
        ));
    }

    #[test]
    fn extent_difference_reports_the_axis_ranges() {
        let a = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 6]), &[2, 3]).unwrap();
        let b = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 8]), &[2, 4]).unwrap();
        match ensure_same_layout(&a, &b) {
            Err(CoreError::ShapeMismatch { axis, left_upper, right_upper, .. }) => {
                assert_eq!(axis, 1);
                assert_eq!(left_upper, 4);
                assert_eq!(right_upper, 5);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn equal_extents_with_different_origins_are_incompatible() {
        let a = Tensor::new(ElemBuffer::F64(vec![1.0; 3]), &[3], &[0], None).unwrap();
        let b = Tensor::new(ElemBuffer::F64(vec![1.0; 3]), &[3], &[1], None).unwrap();
        assert!(matches!(
            ensure_same_layout(&a, &b),
            Err(CoreError::ShapeMismatch { axis: 0, .. })
        ));
    }

    #[test]
    fn kind_difference_is_its_own_error() {
        let a = Tensor::from_buffer(ElemBuffer::F64(vec![1.0]), &[1]).unwrap();
        let b = Tensor::from_buffer(ElemBuffer::F32(vec![1.0]), &[1]).unwrap();
        assert!(matches!(
            ensure_same_layout(&a, &b),
            Err(CoreError::KindMismatch { .. })
        ));
    }

    #[test]
    fn presence_check_flags_missing_elements() {
        let mut mask = MissingMask::all_present(2);
        mask.set_missing(0);
        let t = Tensor::new(ElemBuffer::F64(vec![1.0, 2.0]), &[2], &[1], Some(mask)).unwrap();
        assert!(matches!(ensure_fully_present(&t), Err(CoreError::NullNotAllowed)));
    }

    #[test]
    fn rank_requirement_is_enforced() {
        let t = Tensor::from_buffer(ElemBuffer::F64(vec![1.0; 4]), &[2, 2]).unwrap();
        assert!(matches!(
            ensure_rank(&t, 1),
            Err(CoreError::RankMismatch { left: 1, right: 2 })
        ));
    }
}
