//! Core type definitions for Tensum tensors.
//!
//! This module defines the fundamental types used throughout the stack:
//!
//! - Type aliases for tensor dimensions ([`Axis`], [`Rank`], [`Shape`],
//!   [`Bounds`])
//! - The closed set of element representations ([`ElemKind`])
//! - Tagged scalar values ([`Scalar`])
//!
//! # Examples
//!
//! ```
//! use tensum_core::{ElemKind, Scalar};
//!
//! let s = Scalar::I32(7);
//! assert_eq!(s.kind(), ElemKind::I32);
//! assert_eq!(s.to_real(), 7.0);
//! ```

use std::fmt;

use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Type alias for a tensor axis index.
///
/// Zero-indexed (0 is the leading axis).
pub type Axis = usize;

/// Type alias for tensor rank (number of dimensions).
pub type Rank = usize;

/// Shape type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for tensors with up to 6 dimensions; automatically falls back
/// to heap allocation for higher-rank tensors.
pub type Shape = SmallVec<[usize; 6]>;

/// Per-axis index origins, one per dimension.
///
/// Lower bounds enable non-zero-based indexing: an axis with extent 3 and
/// lower bound 1 accepts indices 1, 2, and 3. Two tensors must agree on
/// lower bounds (not just extents) to be compatible for binary operations.
pub type Bounds = SmallVec<[i64; 6]>;

/// The closed set of element representations a tensor may carry.
///
/// Every operation works through one of two computation domains (`f64`
/// for the real-domain operator catalog, `i64` for exact integer division)
/// and converts back to the source kind through the [`crate::coerce`]
/// layer. There is no open-ended extension point: adding a representation
/// means extending this enum and the coercion table together.
///
/// # Examples
///
/// ```
/// use tensum_core::ElemKind;
///
/// assert!(ElemKind::I32.is_integer());
/// assert!(!ElemKind::Decimal.is_integer());
/// assert_eq!(ElemKind::F64.byte_width(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElemKind {
    /// 16-bit signed integer
    I16,
    /// 32-bit signed integer
    I32,
    /// 64-bit signed integer
    I64,
    /// 32-bit IEEE float
    F32,
    /// 64-bit IEEE float
    F64,
    /// 128-bit decimal (`rust_decimal::Decimal`)
    Decimal,
}

impl ElemKind {
    /// Whether this kind participates in the exact integer domain.
    ///
    /// Only integer kinds may take the integer-division path; everything
    /// else computes in the real domain.
    pub fn is_integer(self) -> bool {
        matches!(self, ElemKind::I16 | ElemKind::I32 | ElemKind::I64)
    }

    /// Storage width of one element in bytes.
    ///
    /// Used by the aggregation builder to express its growth policy in
    /// bytes rather than element counts.
    pub fn byte_width(self) -> usize {
        match self {
            ElemKind::I16 => std::mem::size_of::<i16>(),
            ElemKind::I32 => std::mem::size_of::<i32>(),
            ElemKind::I64 => std::mem::size_of::<i64>(),
            ElemKind::F32 => std::mem::size_of::<f32>(),
            ElemKind::F64 => std::mem::size_of::<f64>(),
            ElemKind::Decimal => std::mem::size_of::<Decimal>(),
        }
    }
}

impl fmt::Display for ElemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElemKind::I16 => "i16",
            ElemKind::I32 => "i32",
            ElemKind::I64 => "i64",
            ElemKind::F32 => "f32",
            ElemKind::F64 => "f64",
            ElemKind::Decimal => "decimal",
        })
    }
}

/// A single tagged value drawn from the closed element-kind set.
///
/// `Scalar` is the boundary currency of the engine: side parameters come in
/// as scalars, and kind-preserving reductions (sum, min, max) hand their
/// results back as scalars of the input tensor's kind.
///
/// # Examples
///
/// ```
/// use tensum_core::{ElemKind, Scalar};
///
/// let x: Scalar = 2.5f64.into();
/// assert_eq!(x.kind(), ElemKind::F64);
/// assert_eq!(x.to_real(), 2.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// 16-bit signed integer value
    I16(i16),
    /// 32-bit signed integer value
    I32(i32),
    /// 64-bit signed integer value
    I64(i64),
    /// 32-bit float value
    F32(f32),
    /// 64-bit float value
    F64(f64),
    /// 128-bit decimal value
    Decimal(Decimal),
}

impl Scalar {
    /// The element kind this value is tagged with.
    pub fn kind(&self) -> ElemKind {
        match self {
            Scalar::I16(_) => ElemKind::I16,
            Scalar::I32(_) => ElemKind::I32,
            Scalar::I64(_) => ElemKind::I64,
            Scalar::F32(_) => ElemKind::F32,
            Scalar::F64(_) => ElemKind::F64,
            Scalar::Decimal(_) => ElemKind::Decimal,
        }
    }

    /// Widen this value into the real computation domain.
    ///
    /// Shorthand for [`crate::coerce::to_real`].
    pub fn to_real(&self) -> f64 {
        crate::coerce::to_real(self)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v}"),
            Scalar::F64(v) => write!(f, "{v}"),
            Scalar::Decimal(v) => write!(f, "{v}"),
        }
    }
}

impl From<i16> for Scalar {
    fn from(v: i16) -> Self {
        Scalar::I16(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::I32(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::I64(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::F32(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::F64(v)
    }
}

impl From<Decimal> for Scalar {
    fn from(v: Decimal) -> Self {
        Scalar::Decimal(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_kinds_are_flagged() {
        assert!(ElemKind::I16.is_integer());
        assert!(ElemKind::I32.is_integer());
        assert!(ElemKind::I64.is_integer());
        assert!(!ElemKind::F32.is_integer());
        assert!(!ElemKind::F64.is_integer());
        assert!(!ElemKind::Decimal.is_integer());
    }

    #[test]
    fn byte_widths_match_storage() {
        assert_eq!(ElemKind::I16.byte_width(), 2);
        assert_eq!(ElemKind::I32.byte_width(), 4);
        assert_eq!(ElemKind::I64.byte_width(), 8);
        assert_eq!(ElemKind::F32.byte_width(), 4);
        assert_eq!(ElemKind::F64.byte_width(), 8);
        assert_eq!(ElemKind::Decimal.byte_width(), 16);
    }

    #[test]
    fn scalar_reports_its_kind() {
        assert_eq!(Scalar::from(1i16).kind(), ElemKind::I16);
        assert_eq!(Scalar::from(1i32).kind(), ElemKind::I32);
        assert_eq!(Scalar::from(1i64).kind(), ElemKind::I64);
        assert_eq!(Scalar::from(1f32).kind(), ElemKind::F32);
        assert_eq!(Scalar::from(1f64).kind(), ElemKind::F64);
        assert_eq!(Scalar::from(Decimal::ONE).kind(), ElemKind::Decimal);
    }

    #[test]
    fn kind_display_is_stable() {
        assert_eq!(ElemKind::I16.to_string(), "i16");
        assert_eq!(ElemKind::Decimal.to_string(), "decimal");
    }
}
