//! Kind-tagged flat element storage.
//!
//! [`ElemBuffer`] is a tagged union over one contiguous `Vec` per element
//! kind. Dispatch happens once per buffer access on the enum tag, never
//! through per-element virtual calls, and the payload stays a plain flat
//! vector so bulk copies (the aggregation builder's whole job) are single
//! `memcpy`-shaped operations.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemBuffer, ElemKind, Scalar};
//!
//! let mut buf = ElemBuffer::with_capacity(ElemKind::I32, 4);
//! buf.push_scalar(&Scalar::I32(7)).unwrap();
//! buf.push_real(2.9).unwrap(); // truncates into the i32 kind
//! assert_eq!(buf.len(), 2);
//! assert_eq!(buf.get_real(1), 2.0);
//! ```

use rust_decimal::Decimal;
use scirs2_core::numeric::ToPrimitive;

use crate::coerce;
use crate::error::{CoreError, CoreResult};
use crate::types::{ElemKind, Scalar};

/// Flat, row-major element storage for one tensor or accumulator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElemBuffer {
    /// 16-bit signed integer storage
    I16(Vec<i16>),
    /// 32-bit signed integer storage
    I32(Vec<i32>),
    /// 64-bit signed integer storage
    I64(Vec<i64>),
    /// 32-bit float storage
    F32(Vec<f32>),
    /// 64-bit float storage
    F64(Vec<f64>),
    /// 128-bit decimal storage
    Decimal(Vec<Decimal>),
}

fn widen<T: Copy + ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

impl ElemBuffer {
    /// Create an empty buffer of the given kind.
    pub fn empty(kind: ElemKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create an empty buffer with room for `capacity` elements.
    pub fn with_capacity(kind: ElemKind, capacity: usize) -> Self {
        match kind {
            ElemKind::I16 => ElemBuffer::I16(Vec::with_capacity(capacity)),
            ElemKind::I32 => ElemBuffer::I32(Vec::with_capacity(capacity)),
            ElemKind::I64 => ElemBuffer::I64(Vec::with_capacity(capacity)),
            ElemKind::F32 => ElemBuffer::F32(Vec::with_capacity(capacity)),
            ElemKind::F64 => ElemBuffer::F64(Vec::with_capacity(capacity)),
            ElemKind::Decimal => ElemBuffer::Decimal(Vec::with_capacity(capacity)),
        }
    }

    /// Build a buffer of the given kind from real-domain values.
    ///
    /// Each value goes through [`coerce::from_real`], so integer kinds
    /// truncate/saturate and decimal kinds may refuse non-finite inputs.
    pub fn from_reals(kind: ElemKind, values: &[f64]) -> CoreResult<Self> {
        let mut buf = Self::with_capacity(kind, values.len());
        for &v in values {
            buf.push_real(v)?;
        }
        Ok(buf)
    }

    /// The element kind stored in this buffer.
    pub fn kind(&self) -> ElemKind {
        match self {
            ElemBuffer::I16(_) => ElemKind::I16,
            ElemBuffer::I32(_) => ElemKind::I32,
            ElemBuffer::I64(_) => ElemKind::I64,
            ElemBuffer::F32(_) => ElemKind::F32,
            ElemBuffer::F64(_) => ElemKind::F64,
            ElemBuffer::Decimal(_) => ElemKind::Decimal,
        }
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        match self {
            ElemBuffer::I16(v) => v.len(),
            ElemBuffer::I32(v) => v.len(),
            ElemBuffer::I64(v) => v.len(),
            ElemBuffer::F32(v) => v.len(),
            ElemBuffer::F64(v) => v.len(),
            ElemBuffer::Decimal(v) => v.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocated capacity in elements.
    pub fn capacity(&self) -> usize {
        match self {
            ElemBuffer::I16(v) => v.capacity(),
            ElemBuffer::I32(v) => v.capacity(),
            ElemBuffer::I64(v) => v.capacity(),
            ElemBuffer::F32(v) => v.capacity(),
            ElemBuffer::F64(v) => v.capacity(),
            ElemBuffer::Decimal(v) => v.capacity(),
        }
    }

    /// Reserve capacity for exactly `additional` further elements.
    ///
    /// The aggregation builder drives its geometric growth policy through
    /// this rather than relying on `Vec`'s internal amortization, so the
    /// doubling/exact-fit rule stays observable and testable.
    pub fn reserve_exact(&mut self, additional: usize) {
        match self {
            ElemBuffer::I16(v) => v.reserve_exact(additional),
            ElemBuffer::I32(v) => v.reserve_exact(additional),
            ElemBuffer::I64(v) => v.reserve_exact(additional),
            ElemBuffer::F32(v) => v.reserve_exact(additional),
            ElemBuffer::F64(v) => v.reserve_exact(additional),
            ElemBuffer::Decimal(v) => v.reserve_exact(additional),
        }
    }

    /// Read the element at `index`, widened into the real domain.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_real(&self, index: usize) -> f64 {
        match self {
            ElemBuffer::I16(v) => widen(v[index]),
            ElemBuffer::I32(v) => widen(v[index]),
            ElemBuffer::I64(v) => widen(v[index]),
            ElemBuffer::F32(v) => widen(v[index]),
            ElemBuffer::F64(v) => v[index],
            ElemBuffer::Decimal(v) => widen(v[index]),
        }
    }

    /// Read the element at `index` as a tagged scalar.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_scalar(&self, index: usize) -> Scalar {
        match self {
            ElemBuffer::I16(v) => Scalar::I16(v[index]),
            ElemBuffer::I32(v) => Scalar::I32(v[index]),
            ElemBuffer::I64(v) => Scalar::I64(v[index]),
            ElemBuffer::F32(v) => Scalar::F32(v[index]),
            ElemBuffer::F64(v) => Scalar::F64(v[index]),
            ElemBuffer::Decimal(v) => Scalar::Decimal(v[index]),
        }
    }

    /// Read the element at `index` through the exact integer domain.
    ///
    /// # Errors
    ///
    /// [`CoreError::UnsupportedKind`] for non-integer buffers.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get_integer(&self, index: usize) -> CoreResult<i64> {
        coerce::to_integer(&self.get_scalar(index))
    }

    /// Append a scalar of the matching kind.
    ///
    /// # Errors
    ///
    /// [`CoreError::KindMismatch`] if the scalar's kind differs from the
    /// buffer's.
    pub fn push_scalar(&mut self, value: &Scalar) -> CoreResult<()> {
        match (self, value) {
            (ElemBuffer::I16(v), Scalar::I16(x)) => v.push(*x),
            (ElemBuffer::I32(v), Scalar::I32(x)) => v.push(*x),
            (ElemBuffer::I64(v), Scalar::I64(x)) => v.push(*x),
            (ElemBuffer::F32(v), Scalar::F32(x)) => v.push(*x),
            (ElemBuffer::F64(v), Scalar::F64(x)) => v.push(*x),
            (ElemBuffer::Decimal(v), Scalar::Decimal(x)) => v.push(*x),
            (buf, value) => {
                return Err(CoreError::KindMismatch {
                    left: buf.kind(),
                    right: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Append a real-domain value, converting it into this buffer's kind.
    ///
    /// # Errors
    ///
    /// Propagates [`coerce::from_real`] failures (decimal range).
    pub fn push_real(&mut self, value: f64) -> CoreResult<()> {
        let scalar = coerce::from_real(value, self.kind())?;
        self.push_scalar(&scalar)
    }

    /// Append every element of `other` to this buffer.
    ///
    /// This is the bulk-copy primitive behind the aggregation builder's
    /// append and merge: a single slice extend per call.
    ///
    /// # Errors
    ///
    /// [`CoreError::KindMismatch`] if the buffers disagree on kind.
    pub fn extend_from(&mut self, other: &ElemBuffer) -> CoreResult<()> {
        match (self, other) {
            (ElemBuffer::I16(dst), ElemBuffer::I16(src)) => dst.extend_from_slice(src),
            (ElemBuffer::I32(dst), ElemBuffer::I32(src)) => dst.extend_from_slice(src),
            (ElemBuffer::I64(dst), ElemBuffer::I64(src)) => dst.extend_from_slice(src),
            (ElemBuffer::F32(dst), ElemBuffer::F32(src)) => dst.extend_from_slice(src),
            (ElemBuffer::F64(dst), ElemBuffer::F64(src)) => dst.extend_from_slice(src),
            (ElemBuffer::Decimal(dst), ElemBuffer::Decimal(src)) => dst.extend_from_slice(src),
            (dst, src) => {
                return Err(CoreError::KindMismatch {
                    left: dst.kind(),
                    right: src.kind(),
                })
            }
        }
        Ok(())
    }

    /// Insert every element of `other` at the front of this buffer.
    ///
    /// Used by the merge algorithm when the *right* operand's allocation
    /// survives but the left operand's content must come first.
    ///
    /// # Errors
    ///
    /// [`CoreError::KindMismatch`] if the buffers disagree on kind.
    pub fn prepend_from(&mut self, other: &ElemBuffer) -> CoreResult<()> {
        match (self, other) {
            (ElemBuffer::I16(dst), ElemBuffer::I16(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (ElemBuffer::I32(dst), ElemBuffer::I32(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (ElemBuffer::I64(dst), ElemBuffer::I64(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (ElemBuffer::F32(dst), ElemBuffer::F32(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (ElemBuffer::F64(dst), ElemBuffer::F64(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (ElemBuffer::Decimal(dst), ElemBuffer::Decimal(src)) => {
                dst.splice(0..0, src.iter().copied());
            }
            (dst, src) => {
                return Err(CoreError::KindMismatch {
                    left: dst.kind(),
                    right: src.kind(),
                })
            }
        }
        Ok(())
    }

    /// Collect the whole buffer as real-domain values.
    pub fn to_real_vec(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.get_real(i)).collect()
    }
}
