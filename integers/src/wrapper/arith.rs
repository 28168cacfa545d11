use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use super::Trapping;
use crate::{
    ops::{trapping_add, trapping_div, trapping_mod, trapping_mul, trapping_sub},
    trap::trap,
    Hazard, Integer, Op,
};

macro_rules! impl_trapping_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $trapping:ident) => {
        impl<T: Integer> $OpAssign<T> for Trapping<T> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, rhs: T) {
                self.0 = $trapping::<T, T, T>(self.0, rhs);
            }
        }

        impl<T: Integer> $OpAssign for Trapping<T> {
            #[inline]
            #[track_caller]
            fn $op_assign(&mut self, rhs: Self) {
                <Self as $OpAssign<T>>::$op_assign(self, rhs.0);
            }
        }

        impl<T: Integer> $Op<T> for Trapping<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, rhs: T) -> Self {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl<T: Integer> $Op for Trapping<T> {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $op(mut self, rhs: Self) -> Self {
                <Self as $OpAssign<T>>::$op_assign(&mut self, rhs.0);
                self
            }
        }
    };
}

impl_trapping_binop!(Add, add, AddAssign, add_assign, trapping_add);
impl_trapping_binop!(Sub, sub, SubAssign, sub_assign, trapping_sub);
impl_trapping_binop!(Mul, mul, MulAssign, mul_assign, trapping_mul);
impl_trapping_binop!(Div, div, DivAssign, div_assign, trapping_div);
impl_trapping_binop!(Rem, rem, RemAssign, rem_assign, trapping_mod);

impl<T: Integer> Neg for Trapping<T> {
    type Output = Self;

    /// Reverses the sign. Traps if `T` is signed and the value is `T::MIN`.
    ///
    /// For unsigned `T` this never traps: the bits are flipped as if `T` were
    /// signed, giving `2^BITS - value`.
    #[inline]
    #[track_caller]
    fn neg(self) -> Self {
        if T::SIGNED && self.0 == T::MIN {
            trap(Hazard::Overflow { op: Op::Neg })
        }
        Self(self.0.wrapping_neg())
    }
}
