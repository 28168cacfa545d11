use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

use super::Trapping;
use crate::{trap::trap, Hazard, Integer, Wide};

macro_rules! impl_bitwise {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Integer> $OpAssign<T> for Trapping<T> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: T) {
                self.0.$op_assign(rhs);
            }
        }

        impl<T: Integer> $OpAssign for Trapping<T> {
            #[inline(always)]
            fn $op_assign(&mut self, rhs: Self) {
                self.0.$op_assign(rhs.0);
            }
        }

        impl<T: Integer> $Op<T> for Trapping<T> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: T) -> Self {
                Self(self.0.$op(rhs))
            }
        }

        impl<T: Integer> $Op for Trapping<T> {
            type Output = Self;

            #[inline(always)]
            fn $op(self, rhs: Self) -> Self {
                Self(self.0.$op(rhs.0))
            }
        }
    };
}

impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign);
impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T: Integer> Not for Trapping<T> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

/// Checks a shift amount against `1..T::BITS`.
///
/// Shifting by zero, by a negative amount, or by the full width or more
/// is treated as a mistake rather than a no-op.
#[inline(always)]
#[track_caller]
fn shift_amount<T: Integer>(amount: Wide) -> u32 {
    if amount < 1 || amount >= T::BITS as Wide {
        trap(Hazard::ShiftOutOfBounds {
            amount,
            bits: T::BITS,
        })
    }
    amount as u32
}

impl<T: Integer> ShrAssign<u32> for Trapping<T> {
    /// Shifts right by `amount` bits. Traps unless `1 <= amount < T::BITS`.
    #[inline]
    #[track_caller]
    fn shr_assign(&mut self, amount: u32) {
        let amount = shift_amount::<T>(amount as Wide);
        self.0 = self.0 >> amount;
    }
}

impl<T: Integer> ShlAssign<u32> for Trapping<T> {
    /// Shifts left by `amount` bits. Traps unless `1 <= amount < T::BITS`,
    /// and traps if a significant bit would be shifted out.
    #[inline]
    #[track_caller]
    fn shl_assign(&mut self, amount: u32) {
        let amount = shift_amount::<T>(amount as Wide);
        // The largest and smallest values that survive the shift unchanged.
        if self.0 > (T::MAX >> amount) || self.0 < (T::MIN >> amount) {
            trap(Hazard::ShiftOverflow {
                amount: amount as Wide,
            })
        }
        self.0 = self.0 << amount;
    }
}

macro_rules! impl_shift {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl<T: Integer> $OpAssign for Trapping<T> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, amount: Self) {
                let amount = shift_amount::<T>(amount.0.widen());
                <Self as $OpAssign<u32>>::$op_assign(self, amount);
            }
        }

        impl<T: Integer> $Op<u32> for Trapping<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, amount: u32) -> Self {
                <Self as $OpAssign<u32>>::$op_assign(&mut self, amount);
                self
            }
        }

        impl<T: Integer> $Op for Trapping<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, amount: Self) -> Self {
                <Self as $OpAssign>::$op_assign(&mut self, amount);
                self
            }
        }
    };
}

impl_shift!(Shr, shr, ShrAssign, shr_assign);
impl_shift!(Shl, shl, ShlAssign, shl_assign);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitwise() {
        let x = Trapping::new(0b1100u8);
        assert_eq!((x | 0b0011).get(), 0b1111);
        assert_eq!((x & Trapping::new(0b0100)).get(), 0b0100);
        assert_eq!((x ^ 0b1010).get(), 0b0110);
        assert_eq!((!x).get(), 0b1111_0011);

        let mut y = Trapping::new(-1i32);
        y &= 0xff;
        y |= Trapping::new(0x100);
        y ^= 0x1;
        assert_eq!(y.get(), 0x1fe);
    }

    #[test]
    fn test_shifts() {
        assert_eq!((Trapping::new(1u8) << 7).get(), 0x80);
        assert_eq!((Trapping::new(0x80u8) >> 7).get(), 1);
        assert_eq!((Trapping::new(1i8) << 6).get(), 64);
        assert_eq!((Trapping::new(-1i8) << 7).get(), -128);
        assert_eq!((Trapping::new(-64i8) << 1).get(), -128);
        assert_eq!((Trapping::new(-128i8) >> 7).get(), -1);
        assert_eq!((Trapping::new(3u64) << Trapping::new(62)).get(), 3u64 << 62);

        let mut x = Trapping::new(0xf0u16);
        x >>= 4;
        x <<= Trapping::new(8);
        assert_eq!(x.get(), 0x0f00);
    }

    #[test]
    #[should_panic(expected = "shift amount 0 is outside 1..32")]
    fn test_shift_by_zero_traps() {
        let _ = Trapping::new(1u32) >> 0;
    }

    #[test]
    #[should_panic(expected = "shift amount 16 is outside 1..16")]
    fn test_shift_by_width_traps() {
        let _ = Trapping::new(1i16) << 16;
    }

    #[test]
    #[should_panic(expected = "shift amount -1 is outside 1..8")]
    fn test_negative_shift_traps() {
        let _ = Trapping::new(1i8) >> Trapping::new(-1);
    }

    #[test]
    #[should_panic(expected = "attempt to shift left by 7 with overflow")]
    fn test_sign_bit_shift_traps() {
        let _ = Trapping::new(1i8) << 7;
    }

    #[test]
    #[should_panic(expected = "attempt to shift left by 1 with overflow")]
    fn test_lost_bit_traps() {
        let _ = Trapping::new(0x81u8) << 1;
    }

    #[test]
    #[should_panic(expected = "attempt to shift left by 1 with overflow")]
    fn test_negative_lost_bit_traps() {
        let _ = Trapping::new(-65i8) << 1;
    }

    #[test]
    #[should_panic(expected = "shift amount 8 is outside 1..8")]
    fn test_shr_by_width_traps() {
        let _ = Trapping::new(1u8) >> 8;
    }

    #[test]
    #[should_panic(expected = "shift amount 0 is outside 1..8")]
    fn test_shl_by_zero_traps() {
        let _ = Trapping::new(1u8) << 0;
    }

    #[test]
    #[should_panic(expected = "shift amount 64 is outside 1..64")]
    fn test_shr_by_wrapped_width_traps() {
        let _ = Trapping::new(1u64) >> Trapping::new(64);
    }

    #[test]
    #[should_panic(expected = "shift amount 16 is outside 1..16")]
    fn test_shl_assign_by_wrapped_width_traps() {
        let mut x = Trapping::new(1u16);
        x <<= Trapping::new(16);
    }

    #[test]
    #[should_panic(expected = "shift amount 40 is outside 1..32")]
    fn test_shr_assign_beyond_width_traps() {
        let mut x = Trapping::new(-1i32);
        x >>= Trapping::new(40);
    }

    #[test]
    #[should_panic(expected = "shift amount 18446744073709551615 is outside 1..64")]
    fn test_shr_by_huge_wrapped_amount_traps() {
        let _ = Trapping::new(1u64) >> Trapping::new(u64::MAX);
    }

    #[test]
    #[should_panic(expected = "shift amount 4294967295 is outside 1..64")]
    fn test_shl_by_huge_amount_traps() {
        let _ = Trapping::new(1i64) << u32::MAX;
    }
}
