//! Runtime support for NeatProto-generated bindings.
//!
//! Generated code leans on two pieces:
//! - [`union`]: the tagged-union contract (a discriminant plus an optional, strongly typed payload).
//! - [`scalar`]: the canonical JSON form of every schema primitive, including the raw 128-bit rule.
//!
//! Both read and write through the token-level [`json::TokenReader`] and [`json::TokenWriter`].

mod error;
pub mod json;
pub mod scalar;
pub mod union;
pub mod wide;

pub use error::*;
