use crate::json::{CodecOptions, TokenReader, TokenWriter};
use crate::{CodecError, Result};
use std::io::{self, Write};

pub trait Ser {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()>;

    fn ser_solo(&self) -> Result<String> {
        self.ser_solo_with(CodecOptions::default())
    }
    fn ser_solo_with(&self, opts: CodecOptions) -> Result<String> {
        let mut w = TokenWriter::with_options(vec![], opts);
        self.ser(&mut w)?;
        let buf = w.into_inner();
        let s = String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(s)
    }
}
pub trait Deser: Sized {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self>;

    fn deser_solo(src: &str) -> Result<Self> {
        Self::deser_solo_with(src, CodecOptions::default())
    }
    fn deser_solo_with(src: &str, opts: CodecOptions) -> Result<Self> {
        let mut r = TokenReader::with_options(src, opts);
        let moi = Self::deser(&mut r)?;
        r.finish()?;
        Ok(moi)
    }
}

/* trait Serializable */
pub trait Serializable: Ser + Deser {}
impl<T: Ser + Deser> Serializable for T {}

/* References */
impl<T: Ser + ?Sized> Ser for &T {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
impl<T: Ser + ?Sized> Ser for Box<T> {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
impl<T: Deser> Deser for Box<T> {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        T::deser(r).map(Box::new)
    }
}

/* `T[]`: a JSON array of any length. */
impl<T: Ser> Ser for [T] {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        w.begin_array()?;
        for member in self {
            member.ser(w)?;
        }
        w.end_array()
    }
}
impl<T: Ser> Ser for Vec<T> {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        self.as_slice().ser(w)
    }
}
impl<T: Deser> Deser for Vec<T> {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        let mut members = vec![];
        r.begin_array()?;
        while r.next_element()? {
            members.push(T::deser(r)?);
        }
        Ok(members)
    }
}

/* `T[N]`: a JSON array of exactly N members. */
impl<T: Ser, const N: usize> Ser for [T; N] {
    fn ser<W: Write>(&self, w: &mut TokenWriter<W>) -> Result<()> {
        self.as_slice().ser(w)
    }
}
impl<T: Deser, const N: usize> Deser for [T; N] {
    fn deser(r: &mut TokenReader<'_>) -> Result<Self> {
        let members = Vec::<T>::deser(r)?;
        let found = members.len();
        members.try_into().map_err(|_| CodecError::LengthMismatch {
            expected: N,
            found,
        })
    }
}
