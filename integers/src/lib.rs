#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! Integer arithmetic that traps instead of overflowing.
//!
//! Two layers live here. The [`overflow`] primitives compute one operation
//! exactly and report whether the result fits the requested type. The
//! [`ops`] functions and the [`Trapping`] value type turn every such report
//! into an immediate, irrecoverable [`trap`](trap::trap): add/sub/mul
//! overflow, division by zero, `MIN / -1`, lossy narrowing, over-shifting and
//! left shifts that drop significant bits.
//!
//! ```
//! use integers::Trapping;
//!
//! let mut x = Trapping::new(120i8);
//! x += 7;
//! assert_eq!(x.get(), 127);
//!
//! let y: u8 = Trapping::new(200u16).cast();
//! assert_eq!(y, 200);
//! ```

pub mod error;
pub mod integer;
pub mod ops;
pub mod overflow;
pub mod trap;

mod wrapper;

pub use error::{Hazard, Op};
pub use integer::{Bits, ConstBounded, Integer, Wide};
pub use ops::*;
pub use overflow::*;
pub use wrapper::Trapping;
