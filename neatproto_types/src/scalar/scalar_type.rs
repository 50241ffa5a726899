use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use std::fmt;

/// The closed set of schema primitives.
///
/// Discriminants are stable and dense from zero, so the whole set can be walked with [`ScalarType::iter`].
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, ToPrimitive, Debug)]
pub enum ScalarType {
    U8 = 0,
    U16 = 1,
    U32 = 2,
    U64 = 3,
    U128 = 4,
    I8 = 5,
    I16 = 6,
    I32 = 7,
    I64 = 8,
    I128 = 9,
    F32 = 10,
    F64 = 11,
    Bool = 12,
    Str = 13,
}

impl ScalarType {
    pub fn iter() -> impl Iterator<Item = ScalarType> {
        (0u8..).map_while(ScalarType::from_u8)
    }

    /// The type's name in schema source.
    pub fn schema_name(self) -> &'static str {
        match self {
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::U128 => "uint128",
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::I128 => "int128",
            Self::F32 => "float",
            Self::F64 => "float64",
            Self::Bool => "bool",
            Self::Str => "string",
        }
    }

    pub fn from_schema_name(name: &str) -> Option<Self> {
        Self::iter().find(|ty| ty.schema_name() == name)
    }

    /// Integers wider than an `f64` mantissa, written under the wide-integer rule.
    pub fn is_wide(self) -> bool {
        matches!(self, Self::U128 | Self::I128)
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::F32 | Self::F64 | Self::Bool | Self::Str)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}
