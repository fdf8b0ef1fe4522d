//! The fixed operator catalog of the real computation domain.
//!
//! Every elementwise and fold operation is one [`ElemOp`] applied through a
//! single visitor signature `(current, running, side) -> result`, where
//! `current` is the element under the cursor, `running` is the fold
//! accumulator (a placeholder for pure maps), and `side` is the operation's
//! scalar parameter (the other array's paired element for zip shapes).
//!
//! All operators work on `f64`. The single integer-domain operation,
//! exact division, lives beside the catalog as [`int_div`] and is selected
//! by the engine whenever `div` targets an integer kind, so integer
//! division never loses exactness through a floating-point detour.
//!
//! Arguments are never NaN for fold operators because the engine filters
//! missing values before invoking them; map and zip shapes let NaN flow
//! through as an ordinary value.

use crate::error::{KernelError, KernelResult};

/// One operator from the catalog.
///
/// # Examples
///
/// ```
/// use tensum_kernels::ElemOp;
///
/// // Folds thread the running accumulator:
/// assert_eq!(ElemOp::Sum.apply(3.0, 10.0, 0.0).unwrap(), 13.0);
///
/// // Maps combine the element with the side parameter:
/// assert_eq!(ElemOp::Add.apply(3.0, 3.0, 2.0).unwrap(), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElemOp {
    /// `current + side`
    Add,
    /// `current - side`
    Sub,
    /// `current * side`
    Mult,
    /// `current / side`; fails on a zero divisor
    Div,
    /// `side`, ignoring everything else
    Set,
    /// `|current|`
    Abs,
    /// `sqrt(current)`; fails on a negative operand
    Sqrt,
    /// `current ^ side`
    Pow,
    /// `current * current`
    Square,
    /// `cos(current)`
    Cos,
    /// `max(current, running)`, seeded with `-inf`
    Max,
    /// `min(current, running)`, seeded with `+inf`
    Min,
    /// `current + running`, seeded with 0
    Sum,
    /// `|current| + running`, seeded with 0
    AbsSum,
    /// `running + current * current`, seeded with 0
    SumSqr,
    /// `running + (current - side)^2`; side is a reference mean
    Diff,
    /// `running + current * side`; the paired-array inner product step
    Dot,
    /// `running + (current == side || side == 0 ? 0 : 1)`;
    /// equality-with-zero-wildcard counting
    Contains,
}

impl ElemOp {
    /// Apply the operator to one element.
    ///
    /// # Errors
    ///
    /// [`KernelError::DivisionByZero`] for `Div` with a zero side,
    /// [`KernelError::NegativeRoot`] for `Sqrt` of a negative current.
    pub fn apply(self, current: f64, running: f64, side: f64) -> KernelResult<f64> {
        Ok(match self {
            ElemOp::Add => current + side,
            ElemOp::Sub => current - side,
            ElemOp::Mult => current * side,
            ElemOp::Div => {
                if side == 0.0 {
                    return Err(KernelError::DivisionByZero);
                }
                current / side
            }
            ElemOp::Set => side,
            ElemOp::Abs => current.abs(),
            ElemOp::Sqrt => {
                if current < 0.0 {
                    return Err(KernelError::NegativeRoot { value: current });
                }
                current.sqrt()
            }
            ElemOp::Pow => current.powf(side),
            ElemOp::Square => current * current,
            ElemOp::Cos => current.cos(),
            ElemOp::Max => {
                if current > running {
                    current
                } else {
                    running
                }
            }
            ElemOp::Min => {
                if current < running {
                    current
                } else {
                    running
                }
            }
            ElemOp::Sum => current + running,
            ElemOp::AbsSum => current.abs() + running,
            ElemOp::SumSqr => running + current * current,
            ElemOp::Diff => running + (current - side) * (current - side),
            ElemOp::Dot => running + current * side,
            ElemOp::Contains => running + if current == side || side == 0.0 { 0.0 } else { 1.0 },
        })
    }

    /// The fold identity this operator is seeded with.
    ///
    /// `Min`/`Max` start from the appropriate infinity; every accumulating
    /// operator starts from 0. Pure map operators never read the seed.
    pub fn seed(self) -> f64 {
        match self {
            ElemOp::Min => f64::INFINITY,
            ElemOp::Max => f64::NEG_INFINITY,
            _ => 0.0,
        }
    }
}

/// Exact integer division, the catalog's only integer-domain operation.
///
/// Truncating division with a zero guard; the single overflowing case
/// (`i64::MIN / -1`) saturates instead of wrapping.
///
/// # Errors
///
/// [`KernelError::DivisionByZero`] when `denom == 0`.
pub fn int_div(num: i64, denom: i64) -> KernelResult<i64> {
    if denom == 0 {
        return Err(KernelError::DivisionByZero);
    }
    Ok(num.saturating_div(denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_operators_combine_current_and_side() {
        assert_eq!(ElemOp::Add.apply(2.0, 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(ElemOp::Sub.apply(2.0, 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(ElemOp::Mult.apply(2.0, 2.0, 3.0).unwrap(), 6.0);
        assert_eq!(ElemOp::Div.apply(6.0, 6.0, 3.0).unwrap(), 2.0);
        assert_eq!(ElemOp::Set.apply(2.0, 2.0, 3.0).unwrap(), 3.0);
        assert_eq!(ElemOp::Pow.apply(2.0, 2.0, 3.0).unwrap(), 8.0);
        assert_eq!(ElemOp::Square.apply(3.0, 3.0, 0.0).unwrap(), 9.0);
        assert_eq!(ElemOp::Abs.apply(-3.0, -3.0, 0.0).unwrap(), 3.0);
    }

    #[test]
    fn fold_operators_thread_the_accumulator() {
        assert_eq!(ElemOp::Sum.apply(2.0, 10.0, 0.0).unwrap(), 12.0);
        assert_eq!(ElemOp::AbsSum.apply(-2.0, 10.0, 0.0).unwrap(), 12.0);
        assert_eq!(ElemOp::SumSqr.apply(3.0, 1.0, 0.0).unwrap(), 10.0);
        assert_eq!(ElemOp::Diff.apply(4.0, 1.0, 2.5).unwrap(), 3.25);
        assert_eq!(ElemOp::Dot.apply(3.0, 1.0, 2.0).unwrap(), 7.0);
        assert_eq!(ElemOp::Max.apply(2.0, 5.0, 0.0).unwrap(), 5.0);
        assert_eq!(ElemOp::Min.apply(2.0, 5.0, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn contains_counts_mismatches_with_zero_wildcard() {
        // matching element: no increment
        assert_eq!(ElemOp::Contains.apply(3.0, 0.0, 3.0).unwrap(), 0.0);
        // zero side is a wildcard: no increment
        assert_eq!(ElemOp::Contains.apply(3.0, 0.0, 0.0).unwrap(), 0.0);
        // real mismatch: increment
        assert_eq!(ElemOp::Contains.apply(3.0, 0.0, 4.0).unwrap(), 1.0);
    }

    #[test]
    fn guards_fire_on_bad_operands() {
        assert!(matches!(
            ElemOp::Div.apply(1.0, 1.0, 0.0),
            Err(KernelError::DivisionByZero)
        ));
        assert!(matches!(
            ElemOp::Sqrt.apply(-1.0, -1.0, 0.0),
            Err(KernelError::NegativeRoot { .. })
        ));
    }

    #[test]
    fn seeds_are_fold_identities() {
        assert_eq!(ElemOp::Sum.seed(), 0.0);
        assert_eq!(ElemOp::Min.seed(), f64::INFINITY);
        assert_eq!(ElemOp::Max.seed(), f64::NEG_INFINITY);
    }

    #[test]
    fn integer_division_truncates_and_guards() {
        assert_eq!(int_div(7, 2).unwrap(), 3);
        assert_eq!(int_div(-7, 2).unwrap(), -3);
        assert!(matches!(int_div(1, 0), Err(KernelError::DivisionByZero)));
        assert_eq!(int_div(i64::MIN, -1).unwrap(), i64::MAX);
    }
}
