//! Cumulative folds (prefix scans) over a tensor.
//!
//! Sequential, single pass, left to right in row-major order. The running
//! value is the previously *written* output element, so integer tensors
//! accumulate in their own kind rather than in a hidden real-domain
//! shadow.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, Tensor};
//! use tensum_kernels::scan;
//!
//! let t = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0, 3.0]));
//! let sums = scan::cum_sum(&t).unwrap();
//! assert_eq!(sums.buffer(), &ElemBuffer::F64(vec![1.0, 3.0, 6.0]));
//!
//! let prods = scan::cum_prod(&t).unwrap();
//! assert_eq!(prods.buffer(), &ElemBuffer::F64(vec![1.0, 2.0, 6.0]));
//! ```

use tensum_core::Tensor;

use crate::catalog::ElemOp;
use crate::engine;
use crate::error::KernelResult;

/// Cumulative sum, seeded with 0.
///
/// # Errors
///
/// `NullNotAllowed` for inputs with missing elements.
pub fn cum_sum(tensor: &Tensor) -> KernelResult<Tensor> {
    engine::scan(tensor, 0.0, ElemOp::Add)
}

/// Cumulative product, seeded with 1.
///
/// # Errors
///
/// `NullNotAllowed` for inputs with missing elements.
pub fn cum_prod(tensor: &Tensor) -> KernelResult<Tensor> {
    engine::scan(tensor, 1.0, ElemOp::Mult)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KernelError;
    use tensum_core::{CoreError, ElemBuffer, MissingMask};

    #[test]
    fn cum_sum_runs_row_major_across_all_axes() {
        let t = Tensor::from_buffer(ElemBuffer::I64(vec![1, 2, 3, 4]), &[2, 2]).unwrap();
        let out = cum_sum(&t).unwrap();
        assert_eq!(out.shape(), &[2, 2]);
        assert_eq!(out.buffer(), &ElemBuffer::I64(vec![1, 3, 6, 10]));
    }

    #[test]
    fn cum_prod_seeds_with_one() {
        let t = Tensor::vector(ElemBuffer::I32(vec![2, 3, 4]));
        let out = cum_prod(&t).unwrap();
        assert_eq!(out.buffer(), &ElemBuffer::I32(vec![2, 6, 24]));
    }

    #[test]
    fn missing_elements_are_rejected() {
        let mut mask = MissingMask::all_present(2);
        mask.set_missing(1);
        let t = Tensor::new(ElemBuffer::F64(vec![1.0, 2.0]), &[2], &[1], Some(mask)).unwrap();
        assert!(matches!(
            cum_sum(&t),
            Err(KernelError::Core(CoreError::NullNotAllowed))
        ));
    }

    #[test]
    fn empty_input_passes_through() {
        let t = Tensor::empty(tensum_core::ElemKind::F64);
        assert!(cum_sum(&t).unwrap().is_empty());
    }
}
