//! Numeric coercion between element kinds and the computation domains.
//!
//! Operators work in one of two domains: `f64` (the real domain, used by
//! the entire operator catalog) or `i64` (the exact integer domain, used
//! only by integer division). This module is the single place values cross
//! between stored kinds and those domains, with four entry points:
//!
//! - [`to_real`] / [`from_real`]: total widening to `f64` and conversion
//!   back with the standard saturate/truncate rules
//! - [`to_integer`] / [`from_integer`]: the exact path, defined only for
//!   integer kinds so precision-sensitive division never takes a silent
//!   floating-point detour
//!
//! # Conversion Rules
//!
//! - Kinds of 32 bits or fewer widen to `f64` losslessly; `i64` and
//!   `decimal` follow the standard lossy rules.
//! - `f64 -> integer` rounds toward zero and saturates at the target
//!   width's bounds; NaN converts to 0.
//! - `i64 -> narrower integer` truncates to the target width.
//! - `f64 -> decimal` fails with [`CoreError::NonRepresentable`] for
//!   non-finite values or magnitudes a 128-bit decimal cannot hold.
//!
//! # Examples
//!
//! ```
//! use tensum_core::{coerce, ElemKind, Scalar};
//!
//! assert_eq!(coerce::to_real(&Scalar::I16(3)), 3.0);
//!
//! // Saturating conversion back into a narrow integer kind
//! let s = coerce::from_real(1e9, ElemKind::I16).unwrap();
//! assert_eq!(s, Scalar::I16(i16::MAX));
//!
//! // The integer domain refuses non-integer kinds
//! assert!(coerce::to_integer(&Scalar::F64(1.0)).is_err());
//! ```

use rust_decimal::Decimal;
use scirs2_core::numeric::{FromPrimitive, ToPrimitive};

use crate::error::{CoreError, CoreResult};
use crate::types::{ElemKind, Scalar};

/// Widen a scalar into the real computation domain.
///
/// Total over the closed kind set. `i64` and `decimal` values may lose
/// precision; every other kind converts exactly.
pub fn to_real(value: &Scalar) -> f64 {
    match value {
        Scalar::I16(v) => f64::from(*v),
        Scalar::I32(v) => f64::from(*v),
        Scalar::I64(v) => *v as f64,
        Scalar::F32(v) => f64::from(*v),
        Scalar::F64(v) => *v,
        // A 128-bit decimal always has a nearest f64.
        Scalar::Decimal(v) => v.to_f64().unwrap_or(0.0),
    }
}

/// Convert a real-domain value back into a scalar of the given kind.
///
/// Integer targets use the standard saturate/truncate rule of the target
/// width (round toward zero, clamp at the bounds, NaN becomes 0). Float
/// targets use the usual narrowing rules.
///
/// # Errors
///
/// [`CoreError::NonRepresentable`] when the target is `decimal` and the
/// value is non-finite or beyond the decimal range.
pub fn from_real(value: f64, kind: ElemKind) -> CoreResult<Scalar> {
    Ok(match kind {
        ElemKind::I16 => Scalar::I16(value as i16),
        ElemKind::I32 => Scalar::I32(value as i32),
        ElemKind::I64 => Scalar::I64(value as i64),
        ElemKind::F32 => Scalar::F32(value as f32),
        ElemKind::F64 => Scalar::F64(value),
        ElemKind::Decimal => Scalar::Decimal(
            Decimal::from_f64(value).ok_or(CoreError::NonRepresentable { value, kind })?,
        ),
    })
}

/// Narrow a scalar into the exact integer domain.
///
/// Defined only for integer kinds; the real kinds must stay on the `f64`
/// path so exactness guarantees remain meaningful.
///
/// # Errors
///
/// [`CoreError::UnsupportedKind`] for `f32`, `f64`, and `decimal` values.
pub fn to_integer(value: &Scalar) -> CoreResult<i64> {
    match value {
        Scalar::I16(v) => Ok(i64::from(*v)),
        Scalar::I32(v) => Ok(i64::from(*v)),
        Scalar::I64(v) => Ok(*v),
        other => Err(CoreError::UnsupportedKind {
            kind: other.kind(),
            domain: "integer",
        }),
    }
}

/// Convert an exact integer back into a scalar of the given kind.
///
/// Narrowing to a smaller integer width truncates to that width.
///
/// # Errors
///
/// [`CoreError::UnsupportedKind`] for non-integer target kinds.
pub fn from_integer(value: i64, kind: ElemKind) -> CoreResult<Scalar> {
    match kind {
        ElemKind::I16 => Ok(Scalar::I16(value as i16)),
        ElemKind::I32 => Ok(Scalar::I32(value as i32)),
        ElemKind::I64 => Ok(Scalar::I64(value)),
        other => Err(CoreError::UnsupportedKind {
            kind: other,
            domain: "integer",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening_is_exact_for_narrow_kinds() {
        assert_eq!(to_real(&Scalar::I16(-7)), -7.0);
        assert_eq!(to_real(&Scalar::I32(123_456)), 123_456.0);
        assert_eq!(to_real(&Scalar::F32(0.5)), 0.5);
        assert_eq!(to_real(&Scalar::Decimal(Decimal::new(25, 1))), 2.5);
    }

    #[test]
    fn from_real_round_trips_f64() {
        assert_eq!(from_real(2.75, ElemKind::F64).unwrap(), Scalar::F64(2.75));
    }

    #[test]
    fn from_real_truncates_toward_zero() {
        assert_eq!(from_real(2.9, ElemKind::I32).unwrap(), Scalar::I32(2));
        assert_eq!(from_real(-2.9, ElemKind::I32).unwrap(), Scalar::I32(-2));
    }

    #[test]
    fn from_real_saturates_at_integer_bounds() {
        assert_eq!(from_real(1e12, ElemKind::I16).unwrap(), Scalar::I16(i16::MAX));
        assert_eq!(from_real(-1e12, ElemKind::I16).unwrap(), Scalar::I16(i16::MIN));
        assert_eq!(from_real(f64::NAN, ElemKind::I64).unwrap(), Scalar::I64(0));
    }

    #[test]
    fn decimal_rejects_non_finite() {
        let err = from_real(f64::NAN, ElemKind::Decimal).unwrap_err();
        assert!(matches!(err, CoreError::NonRepresentable { .. }));
        let err = from_real(f64::INFINITY, ElemKind::Decimal).unwrap_err();
        assert!(matches!(err, CoreError::NonRepresentable { .. }));
    }

    #[test]
    fn integer_domain_is_closed_over_integer_kinds() {
        assert_eq!(to_integer(&Scalar::I16(4)).unwrap(), 4);
        assert_eq!(to_integer(&Scalar::I64(-9)).unwrap(), -9);
        assert!(matches!(
            to_integer(&Scalar::F32(1.0)),
            Err(CoreError::UnsupportedKind { domain: "integer", .. })
        ));
        assert!(matches!(
            from_integer(1, ElemKind::Decimal),
            Err(CoreError::UnsupportedKind { domain: "integer", .. })
        ));
    }

    #[test]
    fn from_integer_truncates_to_width() {
        // 0x1_0001 truncated to 16 bits is 1
        assert_eq!(from_integer(65_537, ElemKind::I16).unwrap(), Scalar::I16(1));
    }
}
