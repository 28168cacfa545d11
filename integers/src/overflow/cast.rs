use crate::{trap::debug_invariant, Integer, Wide};

/// How a conversion from one [`Integer`] type to another must be checked.
///
/// Picked once per `(source, destination)` pair from the signedness and
/// width of both types. Every pair maps to exactly one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastRule {
    /// Every source value fits the destination.
    Lossless,
    /// Fits iff the value is at most the destination's maximum.
    AtMost,
    /// Fits iff the value lies in the destination's `[MIN, MAX]`.
    Within,
    /// Fits iff the value is not negative.
    NonNegative,
    /// Fits iff the value is not negative and at most the destination's maximum.
    NonNegativeAtMost,
}

impl CastRule {
    /// Selects the rule for a source and destination described by their
    /// signedness and bit width.
    pub const fn select(src_signed: bool, src_bits: u32, dst_signed: bool, dst_bits: u32) -> Self {
        match (src_signed, dst_signed) {
            (true, true) | (false, false) if dst_bits >= src_bits => CastRule::Lossless,
            (true, true) => CastRule::Within,
            (false, false) => CastRule::AtMost,
            (true, false) if dst_bits >= src_bits => CastRule::NonNegative,
            (true, false) => CastRule::NonNegativeAtMost,
            // A signed destination spends one bit on the sign.
            (false, true) if dst_bits > src_bits => CastRule::Lossless,
            (false, true) => CastRule::AtMost,
        }
    }

    /// The rule for converting `T`s into `R`s.
    pub const fn of<T: Integer, R: Integer>() -> Self {
        Self::select(T::SIGNED, T::BITS, R::SIGNED, R::BITS)
    }

    /// Whether `wide` fits a destination whose bounds are `[min, max]`.
    #[inline(always)]
    pub fn admits(self, wide: Wide, min: Wide, max: Wide) -> bool {
        match self {
            CastRule::Lossless => true,
            CastRule::AtMost => wide <= max,
            CastRule::Within => min <= wide && wide <= max,
            CastRule::NonNegative => wide >= 0,
            CastRule::NonNegativeAtMost => wide >= 0 && wide <= max,
        }
    }
}

/// Converts `T`s to `R`s.
///
/// Returns the converted value and `true` if `R` cannot hold the exact
/// `value`. That happens on narrowing conversions of large magnitudes and
/// when a negative value meets an unsigned `R`. When truncated, the returned
/// value keeps the low bits of `value`, like an `as` cast.
///
/// ```
/// use integers::cast_truncate;
///
/// assert_eq!(cast_truncate::<u16, u8>(200), (200, false));
/// assert_eq!(cast_truncate::<u16, u8>(300), (44, true));
/// assert_eq!(cast_truncate::<i32, u64>(-1), (u64::MAX, true));
/// ```
#[inline]
pub fn cast_truncate<T: Integer, R: Integer>(value: T) -> (R, bool) {
    narrow(CastRule::of::<T, R>(), value.widen())
}

/// Narrows an exact [`Wide`] result into `R`.
#[inline]
pub(crate) fn truncate_wide<R: Integer>(wide: Wide) -> (R, bool) {
    narrow(CastRule::Within, wide)
}

#[inline(always)]
fn narrow<R: Integer>(rule: CastRule, wide: Wide) -> (R, bool) {
    let result = R::truncate_from(wide);
    let truncated = !rule.admits(wide, R::MIN.widen(), R::MAX.widen());
    debug_invariant(
        truncated || result.widen() == wide,
        "cast rule admitted a lossy conversion",
    );
    (result, truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_selection() {
        assert_eq!(CastRule::of::<i8, i8>(), CastRule::Lossless);
        assert_eq!(CastRule::of::<i8, i64>(), CastRule::Lossless);
        assert_eq!(CastRule::of::<i64, i8>(), CastRule::Within);
        assert_eq!(CastRule::of::<u32, u32>(), CastRule::Lossless);
        assert_eq!(CastRule::of::<u64, u16>(), CastRule::AtMost);
        assert_eq!(CastRule::of::<i16, u16>(), CastRule::NonNegative);
        assert_eq!(CastRule::of::<i8, u64>(), CastRule::NonNegative);
        assert_eq!(CastRule::of::<i32, u8>(), CastRule::NonNegativeAtMost);
        assert_eq!(CastRule::of::<u8, i16>(), CastRule::Lossless);
        assert_eq!(CastRule::of::<u8, i8>(), CastRule::AtMost);
        assert_eq!(CastRule::of::<u64, i32>(), CastRule::AtMost);
    }

    #[test]
    fn test_same_sign_narrowing() {
        assert_eq!(cast_truncate::<i32, i8>(127), (127, false));
        assert_eq!(cast_truncate::<i32, i8>(-128), (-128, false));
        assert!(cast_truncate::<i32, i8>(128).1);
        assert!(cast_truncate::<i32, i8>(-129).1);
        assert_eq!(cast_truncate::<u32, u8>(255), (255, false));
        assert_eq!(cast_truncate::<u32, u8>(256), (0, true));
    }

    #[test]
    fn test_sign_changes() {
        assert_eq!(cast_truncate::<i8, u8>(-1), (255, true));
        assert!(cast_truncate::<i8, u64>(-128).1);
        assert_eq!(cast_truncate::<i64, u8>(255), (255, false));
        assert!(cast_truncate::<i64, u8>(256).1);
        assert_eq!(cast_truncate::<u8, i8>(200), (-56, true));
        assert_eq!(cast_truncate::<u8, i8>(127), (127, false));
        assert!(cast_truncate::<u64, i64>(u64::MAX).1);
        assert_eq!(cast_truncate::<u16, i64>(u16::MAX), (65535, false));
    }

    #[test]
    fn test_widening_never_truncates() {
        assert_eq!(cast_truncate::<i8, i64>(i8::MIN), (-128, false));
        assert_eq!(cast_truncate::<u8, u64>(u8::MAX), (255, false));
        assert_eq!(cast_truncate::<u32, i64>(u32::MAX), (u32::MAX as i64, false));
    }
}
