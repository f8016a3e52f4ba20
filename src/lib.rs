//! Floatconv implements format-correct, correctly rounded conversions
//! between integers of arbitrary width and binary floating point
//! representations, and between binary floating point representations of
//! differing precision, purely from the raw sign, exponent, and significand
//! bit patterns.
//!
//! Rounding follows the IEEE 754 round-to-nearest contract: overflow
//! converts to infinity, underflow to zero, NaN payloads are propagated,
//! and loss of information is reported by an exactness flag rather than an
//! error.
//!
//! ## Examples
//!
//! ``` rust
//! use floatconv::{FloatNumber, IntNumber, BINARY32};
//!
//! // the nearest binary32 value of a large integer
//! let n = IntNumber::from(u64::MAX);
//! let c = FloatNumber::convert_from_int(&n, *BINARY32);
//!
//! assert_eq!(c.value.to_f32(), u64::MAX as f32);
//! assert!(!c.exact);
//!
//! // narrowing a binary64 value rounds to the nearest binary32 value
//! let c = FloatNumber::from_f64(0.1).convert(*BINARY32);
//!
//! assert_eq!(c.value.to_f32(), 0.1f32);
//! assert!(!c.exact);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod common;
mod conv;
mod defs;
mod format;
mod int;
mod num;
mod strop;

#[cfg(all(feature = "std", feature = "serde"))]
mod for_3rd;

pub use crate::conv::Conversion;
pub use crate::defs::DoubleWord;
pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Sign;
pub use crate::defs::Word;
pub use crate::format::FloatFormat;
pub use crate::int::IntNumber;
pub use crate::num::FloatNumber;

pub use crate::defs::DOUBLE_WORD_BIT_SIZE;
pub use crate::defs::WORD_BIT_SIZE;
pub use crate::defs::WORD_MAX;
pub use crate::defs::WORD_SIGNIFICANT_BIT;

pub use crate::format::BFLOAT16;
pub use crate::format::BINARY128;
pub use crate::format::BINARY16;
pub use crate::format::BINARY32;
pub use crate::format::BINARY64;
