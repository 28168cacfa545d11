//! Defines the primitive integer types the trapping layer works on.

use core::{
    fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
    hash::Hash,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr},
};

use bytemuck::Pod;
use num_traits::{
    ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub},
    ConstOne, ConstZero, WrappingNeg,
};

/// The common wide representation.
///
/// Every [`Integer`] converts into it without loss, and the exact result of
/// adding or subtracting any two of them fits in it.
pub type Wide = i128;

mod sealed {
    pub trait Sealed {}
}

/// The bit width of an integer type.
pub trait Bits {
    /// Number of bits in the representation.
    const BITS: u32;
}

/// Compile-time bounds of an integer type.
pub trait ConstBounded {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

/// An abstract over the fixed-width primitive integers.
///
/// Implemented for `i8 i16 i32 i64 isize u8 u16 u32 u64 usize`. 128-bit
/// types are left out because [`Wide`] cannot hold all of their values.
pub trait Integer:
    'static
    + Sized
    + Pod
    + Send
    + Sync
    + Clone
    + Copy
    + Default
    + PartialOrd
    + Ord
    + PartialEq
    + Eq
    + Hash
    + Debug
    + Display
    + Binary
    + Octal
    + LowerHex
    + UpperHex
    + Bits
    + ConstBounded
    + ConstZero
    + ConstOne
    + WrappingNeg
    + OverflowingAdd
    + OverflowingSub
    + OverflowingMul
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + sealed::Sealed
{
    /// Whether this type can hold negative values.
    const SIGNED: bool;

    /// Converts `self` into [`Wide`]. Never loses information.
    fn widen(self) -> Wide;

    /// Keeps the low [`Bits::BITS`] bits of `wide`, like an `as` cast.
    fn truncate_from(wide: Wide) -> Self;
}

macro_rules! impl_integer {
    ($($T:ty => $signed:literal),* $(,)?) => {
        $(
            impl sealed::Sealed for $T {}

            impl Bits for $T {
                const BITS: u32 = <$T>::BITS;
            }

            impl ConstBounded for $T {
                const MIN: Self = <$T>::MIN;
                const MAX: Self = <$T>::MAX;
            }

            impl Integer for $T {
                const SIGNED: bool = $signed;

                #[inline(always)]
                fn widen(self) -> Wide {
                    self as Wide
                }

                #[inline(always)]
                fn truncate_from(wide: Wide) -> Self {
                    wide as $T
                }
            }
        )*
    };
}

impl_integer!(
    i8 => true,
    i16 => true,
    i32 => true,
    i64 => true,
    isize => true,
    u8 => false,
    u16 => false,
    u32 => false,
    u64 => false,
    usize => false,
);
