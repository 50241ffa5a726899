use crate::json::{CodecOptions, Deser, Ser, TokenReader, TokenWriter};
use crate::scalar::ScalarType;
use crate::Result;
use std::io::Write;

macro_rules! scalar_table {
    ($($variant:ident($t:ty)),* $(,)?) => {
        /// A scalar of any schema primitive, for code that only knows its [`ScalarType`] at runtime.
        #[derive(PartialEq, Clone, Debug)]
        pub enum Scalar {
            $($variant($t)),*
        }

        impl From<&Scalar> for ScalarType {
            fn from(scalar: &Scalar) -> Self {
                match scalar {
                    $(Scalar::$variant(_) => ScalarType::$variant),*
                }
            }
        }

        impl Ser for Scalar {
            fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
                match self {
                    $(Scalar::$variant(v) => v.ser(w)),*
                }
            }
        }

        impl Scalar {
            /// Reads one token as the given type.
            pub fn deser_typed(ty: ScalarType, r: &mut TokenReader<'_>) -> Result<Self> {
                match ty {
                    $(ScalarType::$variant => <$t>::deser(r).map(Scalar::$variant)),*
                }
            }
        }

        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::$variant(v)
                }
            }
        )*
    };
}

scalar_table!(
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(String),
);

impl Scalar {
    pub fn scalar_type(&self) -> ScalarType {
        ScalarType::from(self)
    }

    /// Reads a whole document holding a single token of the given type.
    pub fn deser_solo_typed(ty: ScalarType, src: &str, opts: CodecOptions) -> Result<Self> {
        let mut r = TokenReader::with_options(src, opts);
        let scalar = Self::deser_typed(ty, &mut r)?;
        r.finish()?;
        Ok(scalar)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Str(s.to_string())
    }
}
