use crate::json::{self, Deser, RawToken, Ser, TokenReader, TokenWriter, WideIntEncoding};
use crate::scalar::ScalarType;
use crate::{CodecError, Result};
use std::io::Write;

/// A Rust primitive with a fixed place in the scalar table.
pub trait JsonScalar: Ser + Deser {
    const SCALAR_TYPE: ScalarType;
}

fn malformed(ty: ScalarType, token: &str) -> CodecError {
    CodecError::MalformedNumber {
        ty,
        token: token.to_string(),
    }
}

/* Integer text rules, shared by the native and the wide encodings. */

pub(crate) fn parse_unsigned<T: TryFrom<u128>>(ty: ScalarType, text: &str) -> Result<T> {
    if !json::is_integer(text) {
        return Err(malformed(ty, text));
    }
    let out_of_range = || CodecError::OutOfRange {
        ty,
        token: text.to_string(),
    };
    let wide = match text.strip_prefix('-') {
        Some(digits) if digits.bytes().all(|b| b == b'0') => 0,
        Some(_) => return Err(out_of_range()),
        None => text.parse::<u128>().map_err(|_| out_of_range())?,
    };
    T::try_from(wide).map_err(|_| out_of_range())
}

pub(crate) fn parse_signed<T: TryFrom<i128>>(ty: ScalarType, text: &str) -> Result<T> {
    if !json::is_integer(text) {
        return Err(malformed(ty, text));
    }
    let out_of_range = || CodecError::OutOfRange {
        ty,
        token: text.to_string(),
    };
    // The grammar is already checked, so the only parse failure left is overflow.
    let wide = text.parse::<i128>().map_err(|_| out_of_range())?;
    T::try_from(wide).map_err(|_| out_of_range())
}

/* Up to 64 bits: native number literals. */

macro_rules! native_ints {
    ($parse:ident: $($t:ty => $variant:ident),* $(,)?) => {$(
        impl JsonScalar for $t {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;
        }
        impl Ser for $t {
            fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
                w.write_native(self)
            }
        }
        impl Deser for $t {
            fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
                match r.read_token()? {
                    RawToken::Bare(text) => $parse(ScalarType::$variant, text),
                    RawToken::Quoted(text) => Err(malformed(ScalarType::$variant, text)),
                }
            }
        }
    )*};
}
native_ints!(parse_unsigned: u8 => U8, u16 => U16, u32 => U32, u64 => U64);
native_ints!(parse_signed: i8 => I8, i16 => I16, i32 => I32, i64 => I64);

/* 128 bits: the wide-integer rule. */

macro_rules! wide_ints {
    ($($t:ty => $variant:ident via $parse:ident),* $(,)?) => {$(
        impl JsonScalar for $t {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;
        }
        impl Ser for $t {
            fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
                let digits = self.to_string();
                match w.options().wide_int {
                    WideIntEncoding::Raw => w.write_raw(&digits),
                    WideIntEncoding::Quoted => w.write_str(&digits),
                }
            }
        }
        impl Deser for $t {
            fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
                let ty = ScalarType::$variant;
                let opts = *r.options();
                match r.read_token()? {
                    RawToken::Bare(text) if opts.accepts(WideIntEncoding::Raw) => $parse(ty, text),
                    tok @ RawToken::Quoted(_) if opts.accepts(WideIntEncoding::Quoted) => {
                        let digits = tok.unquote().map_err(|_| malformed(ty, tok.text()))?;
                        $parse(ty, &digits)
                    }
                    tok => Err(malformed(ty, tok.text())),
                }
            }
        }
    )*};
}
wide_ints!(u128 => U128 via parse_unsigned, i128 => I128 via parse_signed);

/* Floats: native number literals, finite only. */

macro_rules! floats {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl JsonScalar for $t {
            const SCALAR_TYPE: ScalarType = ScalarType::$variant;
        }
        impl Ser for $t {
            fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
                if !self.is_finite() {
                    return Err(CodecError::NonFiniteFloat {
                        ty: ScalarType::$variant,
                    });
                }
                w.write_native(self)
            }
        }
        impl Deser for $t {
            fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
                let ty = ScalarType::$variant;
                match r.read_token()? {
                    RawToken::Bare(text) if json::is_number(text) => {
                        let v = text.parse::<$t>().map_err(|_| malformed(ty, text))?;
                        if !v.is_finite() {
                            return Err(CodecError::OutOfRange {
                                ty,
                                token: text.to_string(),
                            });
                        }
                        Ok(v)
                    }
                    tok => Err(malformed(ty, tok.text())),
                }
            }
        }
    )*};
}
floats!(f32 => F32, f64 => F64);

/* bool */

impl JsonScalar for bool {
    const SCALAR_TYPE: ScalarType = ScalarType::Bool;
}
impl Ser for bool {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.write_bool(*self)
    }
}
impl Deser for bool {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        match r.read_token()? {
            RawToken::Bare("true") => Ok(true),
            RawToken::Bare("false") => Ok(false),
            tok => Err(CodecError::MalformedBoolean {
                token: tok.text().to_string(),
            }),
        }
    }
}

/* string */

impl JsonScalar for String {
    const SCALAR_TYPE: ScalarType = ScalarType::Str;
}
impl Ser for str {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.write_str(self)
    }
}
impl Ser for String {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.write_str(self)
    }
}
impl Deser for String {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        r.read_token()?.unquote()
    }
}
