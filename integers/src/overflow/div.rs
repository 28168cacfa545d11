use super::cast::truncate_wide;
use crate::Integer;

/// Whether `dividend / divisor` is the signed `MIN / -1` case, which raises a
/// hardware fault on common targets instead of producing a value.
#[inline(always)]
pub(crate) fn divides_min_by_minus_one<T: Integer, U: Integer>(dividend: T, divisor: U) -> bool {
    T::SIGNED && U::SIGNED && dividend == T::MIN && divisor.widen() == -1
}

/// Divides `dividend` by `divisor`.
///
/// Returns the quotient and `true` if `divisor` is zero, if `dividend` is
/// the signed minimum of its type and `divisor` is `-1`, or if the quotient
/// does not fit in `R`. The quotient is zero whenever the division itself
/// was refused.
///
/// ```
/// use integers::div_overflow;
///
/// assert_eq!(div_overflow::<i32, i32, i32>(-7, 2), (-3, false));
/// assert_eq!(div_overflow::<i32, i32, i32>(7, 0), (0, true));
/// assert_eq!(div_overflow::<i8, i8, i16>(i8::MIN, -1), (0, true));
/// ```
#[inline]
pub fn div_overflow<T: Integer, U: Integer, R: Integer>(dividend: T, divisor: U) -> (R, bool) {
    if divisor == U::ZERO || divides_min_by_minus_one(dividend, divisor) {
        return (R::ZERO, true);
    }
    truncate_wide(dividend.widen() / divisor.widen())
}

/// Divides `dividend` by `divisor` and keeps the remainder.
///
/// The remainder takes the sign of `dividend`. The same cases as
/// [`div_overflow`] are refused, including `MIN % -1`.
///
/// ```
/// use integers::mod_overflow;
///
/// assert_eq!(mod_overflow::<i32, i32, i32>(-7, 2), (-1, false));
/// assert_eq!(mod_overflow::<u8, u8, u8>(7, 0), (0, true));
/// assert_eq!(mod_overflow::<i64, i64, i64>(i64::MIN, -1), (0, true));
/// ```
#[inline]
pub fn mod_overflow<T: Integer, U: Integer, R: Integer>(dividend: T, divisor: U) -> (R, bool) {
    if divisor == U::ZERO || divides_min_by_minus_one(dividend, divisor) {
        return (R::ZERO, true);
    }
    truncate_wide(dividend.widen() % divisor.widen())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide_by_zero() {
        assert!(div_overflow::<u8, u8, u8>(10, 0).1);
        assert!(div_overflow::<i64, i8, i64>(0, 0).1);
        assert!(mod_overflow::<usize, u32, usize>(usize::MAX, 0).1);
    }

    #[test]
    fn test_min_by_minus_one() {
        assert!(div_overflow::<i8, i8, i8>(i8::MIN, -1).1);
        assert!(div_overflow::<i16, i64, i64>(i16::MIN, -1).1);
        assert!(mod_overflow::<i32, i32, i32>(i32::MIN, -1).1);
        assert_eq!(div_overflow::<i8, i8, i8>(i8::MIN + 1, -1), (127, false));
        assert_eq!(div_overflow::<i8, i8, i8>(i8::MIN, 1), (-128, false));
    }

    #[test]
    fn test_unsigned_dividend_by_minus_one() {
        assert_eq!(div_overflow::<u8, i8, i16>(0, -1), (0, false));
        assert_eq!(div_overflow::<u8, i8, i16>(200, -1), (-200, false));
        assert!(div_overflow::<u8, i8, u8>(200, -1).1);
    }

    #[test]
    fn test_quotient_truncation() {
        assert_eq!(div_overflow::<u16, u16, u8>(1000, 4), (250, false));
        assert!(div_overflow::<u16, u16, u8>(1000, 3).1);
        assert_eq!(mod_overflow::<u16, u16, u8>(1000, 300), (100, false));
        assert!(mod_overflow::<i32, i32, u32>(-7, 2).1);
    }
}
