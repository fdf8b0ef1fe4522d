//! Elementwise map operations over tensors.
//!
//! The (tensor, tensor) operations require shape-compatible, fully present
//! operands of the same kind and produce a tensor of that kind. The
//! (tensor, scalar) operations preserve the input kind except for [`sqrt`]
//! and [`square`], which widen to `f64` first, matching the promotion the
//! engine applies to every root/power-style result.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, Scalar, Tensor};
//! use tensum_kernels::elementwise;
//!
//! let a = Tensor::vector(ElemBuffer::F64(vec![1.0, 2.0]));
//! let b = Tensor::vector(ElemBuffer::F64(vec![10.0, 20.0]));
//!
//! let sum = elementwise::add(&a, &b).unwrap();
//! assert_eq!(sum.buffer(), &ElemBuffer::F64(vec![11.0, 22.0]));
//!
//! let scaled = elementwise::scalar_mult(&a, &Scalar::F64(3.0)).unwrap();
//! assert_eq!(scaled.buffer(), &ElemBuffer::F64(vec![3.0, 6.0]));
//! ```

use tensum_core::{ElemKind, Scalar, Tensor};

use crate::catalog::ElemOp;
use crate::engine::{self, widened};
use crate::error::KernelResult;

/// Elementwise sum of two tensors.
pub fn add(left: &Tensor, right: &Tensor) -> KernelResult<Tensor> {
    engine::zip_map(left, right, ElemOp::Add)
}

/// Elementwise sum tolerating absent operands.
///
/// The merge step of a distributed sum: both absent yields absent, one
/// absent yields the other unchanged, both present adds elementwise.
pub fn add_partial(left: Option<&Tensor>, right: Option<&Tensor>) -> KernelResult<Option<Tensor>> {
    match (left, right) {
        (None, None) => Ok(None),
        (Some(l), None) => Ok(Some(l.clone())),
        (None, Some(r)) => Ok(Some(r.clone())),
        (Some(l), Some(r)) => add(l, r).map(Some),
    }
}

/// Elementwise difference of two tensors.
pub fn sub(left: &Tensor, right: &Tensor) -> KernelResult<Tensor> {
    engine::zip_map(left, right, ElemOp::Sub)
}

/// Elementwise product of two tensors.
pub fn mult(left: &Tensor, right: &Tensor) -> KernelResult<Tensor> {
    engine::zip_map(left, right, ElemOp::Mult)
}

/// Elementwise quotient of two tensors.
///
/// Integer kinds divide exactly in the integer domain; any zero divisor
/// element fails with `DivisionByZero`.
pub fn div(left: &Tensor, right: &Tensor) -> KernelResult<Tensor> {
    engine::zip_map(left, right, ElemOp::Div)
}

/// Add a scalar to every element.
pub fn scalar_add(tensor: &Tensor, value: &Scalar) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, value, ElemOp::Add, tensor.kind())
}

/// Multiply every element by a scalar.
pub fn scalar_mult(tensor: &Tensor, value: &Scalar) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, value, ElemOp::Mult, tensor.kind())
}

/// Set every element to a scalar, keeping shape and bounds.
pub fn fill(tensor: &Tensor, value: &Scalar) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, value, ElemOp::Set, tensor.kind())
}

/// Raise every element to a scalar exponent.
pub fn pow(tensor: &Tensor, exponent: &Scalar) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, exponent, ElemOp::Pow, tensor.kind())
}

/// Absolute value of every element.
pub fn abs(tensor: &Tensor) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, &Scalar::F64(0.0), ElemOp::Abs, tensor.kind())
}

/// Cosine of every element, in the input's kind.
pub fn cos(tensor: &Tensor) -> KernelResult<Tensor> {
    engine::map_scalar(tensor, &Scalar::F64(0.0), ElemOp::Cos, tensor.kind())
}

/// Square root of every element, widened to `f64`.
///
/// # Errors
///
/// `NegativeRoot` on the first negative element.
pub fn sqrt(tensor: &Tensor) -> KernelResult<Tensor> {
    let wide = widened(tensor);
    engine::map_scalar(&wide, &Scalar::F64(0.0), ElemOp::Sqrt, ElemKind::F64)
}

/// Square of every element, widened to `f64`.
pub fn square(tensor: &Tensor) -> KernelResult<Tensor> {
    let wide = widened(tensor);
    engine::map_scalar(&wide, &Scalar::F64(0.0), ElemOp::Square, ElemKind::F64)
}
