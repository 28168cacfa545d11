use super::cast::truncate_wide;
use crate::Integer;

/// Whether `A` and `B` share a representation, so a value of one can be
/// reinterpreted as the other bit for bit (e.g. `i64` and `isize` on 64-bit).
#[inline(always)]
const fn same_repr<A: Integer, B: Integer>() -> bool {
    A::SIGNED == B::SIGNED && A::BITS == B::BITS
}

/// Runs the primitive's own `overflowing_*` when `T`, `U` and `R` share one
/// representation. Returns `None` for mixed types, which go through `Wide`.
#[inline(always)]
fn native<T: Integer, U: Integer, R: Integer>(
    x: T,
    y: U,
    op: impl FnOnce(&T, &T) -> (T, bool),
) -> Option<(R, bool)> {
    if !(same_repr::<T, U>() && same_repr::<T, R>()) {
        return None;
    }
    let (result, overflow) = op(&x, &bytemuck::cast(y));
    Some((bytemuck::cast(result), overflow))
}

/// Adds `x` to `y`.
///
/// Returns the result wrapped into `R` and `true` if the exact sum does not
/// fit in `R`. The operand and result types are independent.
///
/// ```
/// use integers::add_overflow;
///
/// assert_eq!(add_overflow::<u8, u8, u8>(200, 55), (255, false));
/// assert_eq!(add_overflow::<u8, u8, u8>(200, 56), (0, true));
/// assert_eq!(add_overflow::<u8, u8, u16>(200, 56), (256, false));
/// ```
#[inline]
pub fn add_overflow<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> (R, bool) {
    if let Some(result) = native(x, y, T::overflowing_add) {
        return result;
    }
    // Cannot overflow `Wide`: both operands are at most 64 bits.
    truncate_wide(x.widen() + y.widen())
}

/// Subtracts `y` from `x`.
///
/// Returns the result wrapped into `R` and `true` if the exact difference
/// does not fit in `R`.
///
/// ```
/// use integers::sub_overflow;
///
/// assert_eq!(sub_overflow::<u32, u32, u32>(1, 2), (u32::MAX, true));
/// assert_eq!(sub_overflow::<u32, u32, i64>(1, 2), (-1, false));
/// ```
#[inline]
pub fn sub_overflow<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> (R, bool) {
    if let Some(result) = native(x, y, T::overflowing_sub) {
        return result;
    }
    truncate_wide(x.widen() - y.widen())
}

/// Multiplies `x` and `y`.
///
/// Returns the result wrapped into `R` and `true` if the exact product does
/// not fit in `R`.
///
/// ```
/// use integers::mul_overflow;
///
/// assert_eq!(mul_overflow::<i8, i8, i8>(-8, 16), (-128, false));
/// assert_eq!(mul_overflow::<i8, i8, i8>(8, 16), (-128, true));
/// ```
#[inline]
pub fn mul_overflow<T: Integer, U: Integer, R: Integer>(x: T, y: U) -> (R, bool) {
    if let Some(result) = native(x, y, T::overflowing_mul) {
        return result;
    }
    // `u64::MAX * u64::MAX` needs 128 unsigned bits. The wrapped product still
    // carries the right low bits.
    let (wide, overflowed) = x.widen().overflowing_mul(y.widen());
    let (result, truncated) = truncate_wide(wide);
    (result, overflowed || truncated)
}
