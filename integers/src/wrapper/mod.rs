//! The [`Trapping`] value type.

mod arith;
mod bits;
mod cmp;

use core::{
    fmt,
    iter::{Product, Sum},
    mem::{align_of, size_of},
};

use bytemuck::{Pod, TransparentWrapper, Zeroable};
use num_traits::{Bounded, ConstOne, ConstZero, One, Zero};
use serde::{Deserialize, Serialize};

use crate::{ops::trapping_cast, ConstBounded, Integer};

/// An integer that traps on overflow, underflow, division by zero,
/// `MIN / -1`, over-shifting, shifts that drop bits, and lossy conversions.
///
/// Every operator routes through the [`crate::ops`] functions, so a
/// `Trapping<T>` only ever holds a correct value: any hazard stops the
/// program before a wrong value can be observed.
///
/// `Trapping<T>` is `repr(transparent)` over `T`. Its size and alignment
/// equal `T`'s, it implements [`Pod`], and slices of it can be reinterpreted
/// as slices of `T` (see [`TransparentWrapper`]).
///
/// Safe Rust has no way to construct a value with indeterminate contents.
/// [`Default`] and [`Zeroable::zeroed`] give zero; to reserve storage that is
/// initialized later, use `MaybeUninit<Trapping<T>>`.
///
/// Negating an unsigned `Trapping<T>` does not trap. It flips the value as
/// two's complement would, so `-Trapping::new(5u8)` is `251`.
///
/// ```
/// use integers::Trapping;
///
/// let a = Trapping::new(100u8);
/// let b = a * 2 + 55;
/// assert_eq!(b.get(), 255);
/// assert_eq!((-Trapping::new(5u8)).get(), 251);
/// ```
///
/// ```should_panic
/// use integers::Trapping;
///
/// let mut x = Trapping::new(i8::MAX);
/// x.increment();
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Trapping<T>(T);

impl<T: Integer> Trapping<T> {
    /// Wraps `value`.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline(always)]
    pub fn get(self) -> T {
        self.0
    }

    /// Consumes the wrapper, returning the wrapped value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns `self` unchanged. Present for symmetry with negation.
    #[inline(always)]
    pub fn pos(self) -> Self {
        self
    }

    /// Converts the value to `U`, trapping if `U` cannot hold it exactly.
    ///
    /// Converting to `T` itself never traps.
    #[inline]
    #[track_caller]
    pub fn cast<U: Integer>(self) -> U {
        trapping_cast::<T, U>(self.0)
    }

    /// Like [`cast`](Self::cast), but keeps the result trapping.
    #[inline]
    #[track_caller]
    pub fn cast_into<U: Integer>(self) -> Trapping<U> {
        Trapping(self.cast())
    }

    /// Adds one and returns the new value. Traps at `T::MAX`.
    #[inline]
    #[track_caller]
    pub fn increment(&mut self) -> Self {
        *self += T::ONE;
        *self
    }

    /// Adds one and returns the previous value. Traps at `T::MAX`.
    #[inline]
    #[track_caller]
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        *self += T::ONE;
        previous
    }

    /// Subtracts one and returns the new value. Traps at `T::MIN`.
    #[inline]
    #[track_caller]
    pub fn decrement(&mut self) -> Self {
        *self -= T::ONE;
        *self
    }

    /// Subtracts one and returns the previous value. Traps at `T::MIN`.
    #[inline]
    #[track_caller]
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        *self -= T::ONE;
        previous
    }
}

impl<T: Integer> From<T> for Trapping<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

macro_rules! impl_into_primitive {
    ($($T:ty),*) => {
        $(
            impl From<Trapping<$T>> for $T {
                #[inline(always)]
                fn from(value: Trapping<$T>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_into_primitive!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

macro_rules! assert_layout {
    ($($T:ty),*) => {
        $(
            const _: () = assert!(size_of::<Trapping<$T>>() == size_of::<$T>());
            const _: () = assert!(align_of::<Trapping<$T>>() == align_of::<$T>());
        )*
    };
}

assert_layout!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

// SAFETY: `Trapping<T>` is `repr(transparent)` over `T`, which is `Pod`.
unsafe impl<T: Integer> Zeroable for Trapping<T> {}
unsafe impl<T: Integer> Pod for Trapping<T> {}
unsafe impl<T: Integer> TransparentWrapper<T> for Trapping<T> {}

macro_rules! impl_fmt {
    ($($Trait:ident),*) => {
        $(
            impl<T: fmt::$Trait> fmt::$Trait for Trapping<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::$Trait::fmt(&self.0, f)
                }
            }
        )*
    };
}

impl_fmt!(Debug, Display, Binary, Octal, LowerHex, UpperHex);

impl<T: Integer> ConstBounded for Trapping<T> {
    const MIN: Self = Trapping(T::MIN);
    const MAX: Self = Trapping(T::MAX);
}

impl<T: Integer> Bounded for Trapping<T> {
    #[inline]
    fn min_value() -> Self {
        Self(T::MIN)
    }

    #[inline]
    fn max_value() -> Self {
        Self(T::MAX)
    }
}

impl<T: Integer> Zero for Trapping<T> {
    #[inline]
    fn zero() -> Self {
        Self(T::ZERO)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == T::ZERO
    }
}

impl<T: Integer> ConstZero for Trapping<T> {
    const ZERO: Self = Trapping(T::ZERO);
}

impl<T: Integer> One for Trapping<T> {
    #[inline]
    fn one() -> Self {
        Self(T::ONE)
    }
}

impl<T: Integer> ConstOne for Trapping<T> {
    const ONE: Self = Trapping(T::ONE);
}

impl<T: Integer> Sum for Trapping<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(T::ZERO), |acc, x| acc + x)
    }
}

impl<T: Integer> Product for Trapping<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self(T::ONE), |acc, x| acc * x)
    }
}
