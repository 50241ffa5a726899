//! Tagged unions: a discriminant plus, for payload-bearing variants, one strongly typed value.
//!
//! Generated code models a schema union as a Rust enum implementing [`TaggedUnion`], a
//! discriminant enum implementing [`Discriminant`], and one type per payload-bearing case
//! implementing [`CaseOf`]. The case type pins its own discriminant, so constructing through
//! [`construct`] cannot disagree with the payload.
//!
//! Two generic shapes cover the degenerate cases:
//! - [`Tagged`] holds only a discriminant (every variant is a unit variant).
//! - [`TaggedValue`] holds one payload whose type fixes the discriminant.
//!
//! The wire form is `{"kind":"<name>","value":<payload>}`, `value` omitted for unit variants.

mod codec;
mod kind;
mod ops;
mod tagged;


pub use codec::*;
pub use kind::*;
pub use ops::*;
pub use tagged::*;
