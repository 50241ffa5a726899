//! `#[serde(with = ...)]` adapters giving serde-derived types the 128-bit rules of [`crate::scalar`].
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Balance {
//!     #[serde(with = "neatproto_types::wide::raw")]
//!     total: u128,
//!     #[serde(with = "neatproto_types::wide::quoted")]
//!     delta: i128,
//! }
//! ```
//!
//! Both adapters read either form; they differ only in what they write.

use crate::scalar::{self, JsonScalar};
use crate::Result;
use std::fmt::Display;

/// A 128-bit integer primitive.
pub trait WideInt: JsonScalar + Display + Copy {
    fn parse_digits(text: &str) -> Result<Self>;
}
impl WideInt for u128 {
    fn parse_digits(text: &str) -> Result<Self> {
        scalar::parse_unsigned(Self::SCALAR_TYPE, text)
    }
}
impl WideInt for i128 {
    fn parse_digits(text: &str) -> Result<Self> {
        scalar::parse_signed(Self::SCALAR_TYPE, text)
    }
}

/// Parses either a bare digit token or a string literal holding the digits.
fn parse_token<T: WideInt>(text: &str) -> Result<T> {
    if text.starts_with('"') {
        let digits = serde_json::from_str::<String>(text).map_err(|_| {
            crate::CodecError::MalformedNumber {
                ty: T::SCALAR_TYPE,
                token: text.to_string(),
            }
        })?;
        T::parse_digits(&digits)
    } else {
        T::parse_digits(text)
    }
}

/// Unquoted digits. Only meaningful with `serde_json`.
pub mod raw {
    use super::WideInt;
    use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::value::RawValue;

    pub fn serialize<T: WideInt, S: Serializer>(v: &T, s: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(v.to_string()).map_err(<S::Error as ser::Error>::custom)?;
        raw.serialize(s)
    }

    pub fn deserialize<'de, T: WideInt, D: Deserializer<'de>>(d: D) -> Result<T, D::Error> {
        let raw = Box::<RawValue>::deserialize(d)?;
        super::parse_token(raw.get()).map_err(de::Error::custom)
    }
}

/// Digits inside a string. Works with any serde format.
pub mod quoted {
    use super::WideInt;
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub fn serialize<T: WideInt, S: Serializer>(v: &T, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(v)
    }

    pub fn deserialize<'de, T: WideInt, D: Deserializer<'de>>(d: D) -> Result<T, D::Error> {
        d.deserialize_any(DigitsVisitor(PhantomData))
    }

    struct DigitsVisitor<T>(PhantomData<T>);

    impl<'de, T: WideInt> Visitor<'de> for DigitsVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a {} as decimal digits", T::SCALAR_TYPE)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            T::parse_digits(v).map_err(E::custom)
        }

        // Small numbers may still arrive unquoted. Floats never do, since they have lost digits.
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
            T::parse_digits(&v.to_string()).map_err(E::custom)
        }
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
            T::parse_digits(&v.to_string()).map_err(E::custom)
        }
    }
}
