//! Scalar codec: one JSON token per schema primitive.
//!
//! Every primitive implements [`Ser`](crate::json::Ser) and [`Deser`](crate::json::Deser)
//! through a single table in `codec`, and [`Scalar`] mirrors the same table for runtime dispatch
//! on a [`ScalarType`].

mod codec;
mod scalar_type;
mod value;


pub use codec::JsonScalar;
pub use scalar_type::*;
pub use value::*;

pub(crate) use codec::{parse_signed, parse_unsigned};
