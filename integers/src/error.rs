//! This module defines the hazards that make
//! a trapping operation stop the program.

use core::fmt;

use thiserror::Error;

use crate::Wide;

/// The arithmetic operation that overflowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`
    Div,
    /// `x % y`
    Rem,
    /// `-x`
    Neg,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Add => "add",
            Op::Sub => "subtract",
            Op::Mul => "multiply",
            Op::Div => "divide",
            Op::Rem => "calculate the remainder",
            Op::Neg => "negate",
        })
    }
}

/// Hazards detected by the overflow primitives.
///
/// None of these are recoverable. A `Hazard` is only ever handed to
/// [`trap`](crate::trap::trap), which reports it and terminates.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hazard {
    /// The exact result of an arithmetic operation does not fit the result type.
    #[error("attempt to {op} with overflow")]
    Overflow {
        /// The operation.
        op: Op,
    },
    /// The divisor of a division or remainder is zero.
    #[error("attempt to divide by zero")]
    DivideByZero,
    /// The dividend is the signed minimum and the divisor is `-1`.
    #[error("attempt to divide the minimum value by -1")]
    DivideMinByMinusOne,
    /// A conversion would lose information.
    #[error("value {value} does not fit in `{target}`")]
    Truncation {
        /// The exact value being converted.
        value: Wide,
        /// Name of the destination type.
        target: &'static str,
    },
    /// A shift amount is below 1 or not below the bit width.
    #[error("shift amount {amount} is outside 1..{bits}")]
    ShiftOutOfBounds {
        /// The requested shift amount.
        amount: Wide,
        /// Bit width of the shifted type.
        bits: u32,
    },
    /// A left shift would push set bits out of the value.
    #[error("attempt to shift left by {amount} with overflow")]
    ShiftOverflow {
        /// The requested shift amount.
        amount: Wide,
    },
    /// An internal case analysis reached a branch it rules out.
    #[error("internal invariant violated: {0}")]
    Invariant(&'static str),
}
