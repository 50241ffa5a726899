use crate::json::{CodecOptions, Ser};
use crate::{CodecError, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Clone, Copy)]
struct Scope {
    first: bool,
    after_key: bool,
}

/// An append-only JSON token sink. Separators are inserted as values are written.
pub struct TokenWriter<W: Write> {
    w: W,
    opts: CodecOptions,
    scopes: Vec<Scope>,
}

impl<W: Write> TokenWriter<W> {
    pub fn new(w: W) -> Self {
        Self::with_options(w, CodecOptions::default())
    }
    pub fn with_options(w: W, opts: CodecOptions) -> Self {
        Self {
            w,
            opts,
            scopes: vec![],
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.opts
    }

    pub fn into_inner(self) -> W {
        self.w
    }

    pub fn write<T: Ser + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.ser(self)
    }

    /// Emits an already formatted token verbatim, without quoting or escaping.
    pub fn write_raw(&mut self, token: &str) -> Result<()> {
        self.separate()?;
        self.w.write_all(token.as_bytes())?;
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_native(s)
    }

    pub fn write_bool(&mut self, b: bool) -> Result<()> {
        self.write_raw(if b { "true" } else { "false" })
    }

    pub fn write_null(&mut self) -> Result<()> {
        self.write_raw("null")
    }

    /// Emits a value through `serde_json`'s own number and string formatting.
    pub(crate) fn write_native<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        self.separate()?;
        serde_json::to_writer(&mut self.w, value).map_err(io::Error::from)?;
        Ok(())
    }

    /* Objects. */

    pub fn begin_object(&mut self) -> Result<()> {
        self.open(b"{")
    }

    pub fn key(&mut self, name: &str) -> Result<()> {
        let first = match self.scopes.last_mut() {
            Some(scope) if !scope.after_key => {
                let first = scope.first;
                scope.first = false;
                scope.after_key = true;
                first
            }
            Some(_) => return Err(CodecError::WriterState("key written where a value is due")),
            None => return Err(CodecError::WriterState("key written outside an object")),
        };
        if !first {
            self.w.write_all(b",")?;
        }
        serde_json::to_writer(&mut self.w, name).map_err(io::Error::from)?;
        self.w.write_all(b":")?;
        Ok(())
    }

    pub fn field<T: Ser + ?Sized>(&mut self, name: &str, value: &T) -> Result<()> {
        self.key(name)?;
        value.ser(self)
    }

    pub fn end_object(&mut self) -> Result<()> {
        self.close(b"}")
    }

    /* Arrays. */

    pub fn begin_array(&mut self) -> Result<()> {
        self.open(b"[")
    }

    pub fn end_array(&mut self) -> Result<()> {
        self.close(b"]")
    }

    /* Helpers. */

    fn separate(&mut self) -> Result<()> {
        if let Some(scope) = self.scopes.last_mut() {
            if scope.after_key {
                scope.after_key = false;
                return Ok(());
            }
            if !scope.first {
                self.w.write_all(b",")?;
            }
            scope.first = false;
        }
        Ok(())
    }

    fn open(&mut self, bracket: &[u8]) -> Result<()> {
        self.separate()?;
        self.w.write_all(bracket)?;
        self.scopes.push(Scope {
            first: true,
            after_key: false,
        });
        Ok(())
    }

    fn close(&mut self, bracket: &[u8]) -> Result<()> {
        match self.scopes.pop() {
            Some(scope) if !scope.after_key => {}
            Some(_) => return Err(CodecError::WriterState("container closed after a dangling key")),
            None => return Err(CodecError::WriterState("no open container to close")),
        }
        self.w.write_all(bracket)?;
        Ok(())
    }
}
