//! # Text format
//!
//! Everything is plain JSON text, with one deliberate exception for 128-bit integers.
//!
//! The below pseudocode depicts the serialized representations.
//!
//! ```text
//! uint8 .. uint64, int8 .. int64:    42, -7             // native number literal
//! float, float64:                    0.1, -2.5e-8       // shortest round-trip literal
//! bool:                              true, false
//! string:                            "escaped \"text\""
//! uint128, int128 (raw, default):    340282366920938463463374607431768211455
//! uint128, int128 (quoted):          "-170141183460469231731687303715884105728"
//!
//! tagged union, unit variant:        {"kind":"empty"}
//! tagged union, payload variant:     {"kind":"circle","value":{"radius":3}}
//!
//! T[]:                               [1,2,3]
//! T[N]:                              [1,2,3]            // exactly N members
//! ```
//!
//! The raw 128-bit form is not valid under parsers that cap numbers at `f64` precision.
//! Consumers that cannot read arbitrary-precision literals should be configured with
//! [`WideIntEncoding::Quoted`] on both ends.

mod lexeme;
mod options;
mod reader;
mod serializable;
mod writer;

pub use options::*;
pub use reader::*;
pub use serializable::*;
pub use writer::*;

pub(crate) use lexeme::*;
