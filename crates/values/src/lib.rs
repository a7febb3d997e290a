//! Argot Values Library
//!
//! Value types for argot parameters that the standard library does not
//! provide. Both implement [`FromStr`](std::str::FromStr) and
//! [`Display`](std::fmt::Display), so they work with any one-argument
//! parameter; [`Ymd`] is also ordered and can be range-limited or clamped.
//!
//! - [`IntegerSequence`]: lists and ranges of integers, `1,4..6,10`
//! - [`Ymd`]: calendar dates with `today` / `MM-DD` style shorthands

pub mod error;
pub mod integer_sequence;
pub mod ymd;

pub use error::{DateError, SequenceError};
pub use integer_sequence::IntegerSequence;
pub use ymd::Ymd;
