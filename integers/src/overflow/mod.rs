//! Overflow-detecting primitives.
//!
//! Each function performs one conversion or arithmetic operation exactly and
//! reports, next to the value, whether the exact result fits the requested
//! type. They never trap; [`crate::ops`] builds the trapping layer on top.

mod arith;
mod cast;
mod div;

pub use arith::{add_overflow, mul_overflow, sub_overflow};
pub use cast::{cast_truncate, CastRule};
pub use div::{div_overflow, mod_overflow};

pub(crate) use div::divides_min_by_minus_one;
