use crate::scalar::ScalarType;
use std::fmt;
use std::io;
use thiserror::Error;

pub type Result<T, E = CodecError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("malformed {ty} token `{token}`")]
    MalformedNumber { ty: ScalarType, token: String },

    #[error("malformed bool token `{token}`")]
    MalformedBoolean { token: String },

    #[error("malformed string token `{token}`")]
    MalformedString { token: String },

    #[error("`{token}` is out of range for {ty}")]
    OutOfRange { ty: ScalarType, token: String },

    #[error("non-finite {ty} has no JSON representation")]
    NonFiniteFloat { ty: ScalarType },

    #[error("invalid access to variant `{kind}`: {access}")]
    InvalidVariantAccess {
        kind: &'static str,
        access: VariantAccess,
    },

    #[error("unknown variant kind `{found}`; expected one of: {expected}")]
    UnknownKind { found: String, expected: String },

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("duplicate field `{0}`")]
    DuplicateField(String),

    #[error("expected {expected} elements, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("trailing characters at offset {0}")]
    TrailingCharacters(usize),

    #[error("writer misuse: {0}")]
    WriterState(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How a tagged-union instance was misused.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum VariantAccess {
    /// A payload was requested from a unit variant.
    UnitVariant,
    /// A payload-bearing variant was constructed or read without its payload.
    PayloadRequired,
    /// A unit variant was given a payload.
    UnexpectedPayload,
    /// The discriminant disagrees with the payload's own declared one.
    KindMismatch { expected: &'static str },
}
impl fmt::Display for VariantAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnitVariant => write!(f, "unit variant carries no payload"),
            Self::PayloadRequired => write!(f, "variant requires a payload"),
            Self::UnexpectedPayload => write!(f, "unit variant must not carry a payload"),
            Self::KindMismatch { expected } => write!(f, "payload declares kind `{expected}`"),
        }
    }
}

impl CodecError {
    pub fn variant(kind: &'static str, access: VariantAccess) -> Self {
        Self::InvalidVariantAccess { kind, access }
    }
}
