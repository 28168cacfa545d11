//! Trapping operations.
//!
//! Each function forwards to the matching [`overflow`](crate::overflow)
//! primitive and returns its value. When the primitive reports that the
//! exact result is not representable, the function [`trap`]s instead of
//! returning.

use core::any::type_name;

use crate::{
    overflow::{
        add_overflow, cast_truncate, div_overflow, divides_min_by_minus_one, mod_overflow,
        mul_overflow, sub_overflow,
    },
    trap::trap,
    Hazard, Integer, Op,
};

/// Converts `T`s to `R`s, and traps if `R` cannot hold the full `value`.
///
/// ```
/// use integers::trapping_cast;
///
/// assert_eq!(trapping_cast::<i64, u8>(255), 255u8);
/// ```
///
/// ```should_panic
/// use integers::trapping_cast;
///
/// let _ = trapping_cast::<i64, u8>(-1);
/// ```
#[inline]
#[track_caller]
pub fn trapping_cast<T: Integer, R: Integer>(value: T) -> R {
    let (result, truncated) = cast_truncate::<T, R>(value);
    if truncated {
        trap(Hazard::Truncation {
            value: value.widen(),
            target: type_name::<R>(),
        })
    }
    result
}

/// Adds `x` and `y` and returns the result.
/// Traps if the exact sum does not fit in `R`.
#[inline]
#[track_caller]
pub fn trapping_add<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> R {
    let (result, overflow) = add_overflow(x, y);
    if overflow {
        trap(Hazard::Overflow { op: Op::Add })
    }
    result
}

/// Subtracts `y` from `x` and returns the result.
/// Traps if the exact difference does not fit in `R`.
#[inline]
#[track_caller]
pub fn trapping_sub<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> R {
    let (result, overflow) = sub_overflow(x, y);
    if overflow {
        trap(Hazard::Overflow { op: Op::Sub })
    }
    result
}

/// Multiplies `x` and `y` and returns the result.
/// Traps if the exact product does not fit in `R`.
#[inline]
#[track_caller]
pub fn trapping_mul<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> R {
    let (result, overflow) = mul_overflow(x, y);
    if overflow {
        trap(Hazard::Overflow { op: Op::Mul })
    }
    result
}

/// Divides `dividend` by `divisor` and returns the quotient.
///
/// Traps if `divisor` is zero, on `MIN / -1`, or if the quotient does not
/// fit in `R`.
#[inline]
#[track_caller]
pub fn trapping_div<T: Integer, U: Integer, R: Integer>(dividend: T, divisor: U) -> R {
    let (result, overflow) = div_overflow(dividend, divisor);
    if overflow {
        trap(division_hazard(dividend, divisor, Op::Div))
    }
    result
}

/// Divides `dividend` by `divisor` and returns the remainder.
///
/// Traps in the same cases as [`trapping_div`].
#[inline]
#[track_caller]
pub fn trapping_mod<T: Integer, U: Integer, R: Integer>(dividend: T, divisor: U) -> R {
    let (result, overflow) = mod_overflow(dividend, divisor);
    if overflow {
        trap(division_hazard(dividend, divisor, Op::Rem))
    }
    result
}

#[cold]
fn division_hazard<T: Integer, U: Integer>(dividend: T, divisor: U, op: Op) -> Hazard {
    if divisor == U::ZERO {
        Hazard::DivideByZero
    } else if divides_min_by_minus_one(dividend, divisor) {
        Hazard::DivideMinByMinusOne
    } else {
        Hazard::Overflow { op }
    }
}
