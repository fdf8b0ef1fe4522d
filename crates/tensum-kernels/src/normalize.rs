//! Euclidean normalization of rank-1 tensors.
//!
//! Scales a vector so its sum of squares is 1. A zero-norm input cannot be
//! scaled; it comes back unchanged (original kind) with a warning, because
//! an all-zero vector is expected data, not a programming error. Non-zero
//! inputs return an `f64` tensor scaled by `1 / sqrt(Σ x²)`.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, Tensor};
//! use tensum_kernels::normalize::normalize;
//!
//! let t = Tensor::vector(ElemBuffer::F64(vec![3.0, 4.0]));
//! let unit = normalize(&t).unwrap();
//! assert!((unit.buffer().get_real(0) - 0.6).abs() < 1e-12);
//! assert!((unit.buffer().get_real(1) - 0.8).abs() < 1e-12);
//! ```

use tensum_core::{validate, ElemKind, Scalar, Tensor};
use tracing::warn;

use crate::catalog::ElemOp;
use crate::engine::{self, finalize, widened};
use crate::error::KernelResult;

/// Scale a rank-1, fully present tensor to unit Euclidean norm.
///
/// # Errors
///
/// `RankMismatch` for ranks above 1, `NullNotAllowed` for missing
/// elements.
pub fn normalize(tensor: &Tensor) -> KernelResult<Tensor> {
    if tensor.rank() == 0 {
        warn!("input is an empty tensor");
        return Ok(tensor.clone());
    }
    validate::ensure_rank(tensor, 1)?;
    validate::ensure_fully_present(tensor)?;

    let wide = widened(tensor);
    let norm_sqr = engine::fold(&wide, 0.0, ElemOp::SumSqr, finalize::noop)?;
    if norm_sqr == 0.0 {
        warn!("no non-zero elements found, returning the input unchanged");
        return Ok(tensor.clone());
    }

    let inverse_norm = 1.0 / norm_sqr.sqrt();
    engine::map_scalar(&wide, &Scalar::F64(inverse_norm), ElemOp::Mult, ElemKind::F64)
}
