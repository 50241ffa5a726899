use crate::json::{self, CodecOptions, Deser};
use crate::{CodecError, Result};

/// One scalar-position token, borrowed from the source text.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum RawToken<'a> {
    /// A string literal, quotes and escapes included.
    Quoted(&'a str),
    /// Any unquoted run: numbers, `true`, `false`, `null`, or garbage.
    Bare(&'a str),
}
impl<'a> RawToken<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Quoted(s) | Self::Bare(s) => s,
        }
    }

    /// Decodes a string literal. Bare tokens are not strings.
    pub fn unquote(&self) -> Result<String> {
        match self {
            Self::Quoted(raw) => serde_json::from_str::<String>(raw).map_err(|_| {
                CodecError::MalformedString {
                    token: raw.to_string(),
                }
            }),
            Self::Bare(raw) => Err(CodecError::MalformedString {
                token: raw.to_string(),
            }),
        }
    }
}

/// A cursor over JSON text, positioned between tokens.
///
/// Containers are walked explicitly with [`Self::begin_object`] / [`Self::next_key`]
/// and [`Self::begin_array`] / [`Self::next_element`]; separators are consumed there.
/// After a failed read the position is unspecified.
pub struct TokenReader<'a> {
    src: &'a str,
    pos: usize,
    opts: CodecOptions,
    /// Per open container: whether the next member is the first one.
    scopes: Vec<bool>,
}

impl<'a> TokenReader<'a> {
    pub fn new(src: &'a str) -> Self {
        Self::with_options(src, CodecOptions::default())
    }
    pub fn with_options(src: &'a str, opts: CodecOptions) -> Self {
        Self {
            src,
            pos: 0,
            opts,
            scopes: vec![],
        }
    }

    pub fn options(&self) -> &CodecOptions {
        &self.opts
    }

    /// A reader over a span previously returned by [`Self::skip_value`], sharing these options.
    pub fn sub_reader(&self, span: &'a str) -> TokenReader<'a> {
        TokenReader::with_options(span, self.opts)
    }

    pub fn read<T: Deser>(&mut self) -> Result<T> {
        T::deser(self)
    }

    /// Reads the token at the cursor as a scalar-position token.
    ///
    /// A structural character is returned as a one-byte bare token, so the
    /// calling scalar codec reports it under its own malformed-token kind.
    pub fn read_token(&mut self) -> Result<RawToken<'a>> {
        let start = self.peek_pos()?;
        let bytes = self.bytes();

        if bytes[start] == b'"' {
            let mut i = start + 1;
            loop {
                match bytes.get(i) {
                    None => {
                        return Err(CodecError::MalformedString {
                            token: self.src[start..].to_string(),
                        })
                    }
                    Some(b'\\') => i += 2,
                    Some(b'"') => break,
                    Some(_) => i += 1,
                }
            }
            self.pos = i + 1;
            return Ok(RawToken::Quoted(&self.src[start..self.pos]));
        }

        let mut end = start;
        while let Some(b) = bytes.get(end) {
            if json::is_delimiter(*b) {
                break;
            }
            end += 1;
        }
        if end == start {
            end += 1;
        }
        self.pos = end;
        Ok(RawToken::Bare(&self.src[start..end]))
    }

    /* Objects. */

    pub fn begin_object(&mut self) -> Result<()> {
        self.expect_byte(b'{', "`{`")?;
        self.scopes.push(true);
        Ok(())
    }

    /// Advances to the next member key of the innermost open object,
    /// or consumes its closing brace and returns `None`.
    pub fn next_key(&mut self) -> Result<Option<String>> {
        if !self.advance_member(b'}', "`,` or `}`")? {
            return Ok(None);
        }
        let key = match self.read_token()? {
            tok @ RawToken::Quoted(_) => tok.unquote()?,
            RawToken::Bare(found) => {
                return Err(CodecError::UnexpectedToken {
                    expected: "a quoted member name",
                    found: found.to_string(),
                })
            }
        };
        self.expect_byte(b':', "`:`")?;
        Ok(Some(key))
    }

    /* Arrays. */

    pub fn begin_array(&mut self) -> Result<()> {
        self.expect_byte(b'[', "`[`")?;
        self.scopes.push(true);
        Ok(())
    }

    /// Whether another element follows in the innermost open array.
    /// Consumes the closing bracket when it does not.
    pub fn next_element(&mut self) -> Result<bool> {
        self.advance_member(b']', "`,` or `]`")
    }

    /// Skips one value of any shape and returns its raw text.
    ///
    /// Nested containers are walked with an explicit stack, so depth is bounded by memory only.
    pub fn skip_value(&mut self) -> Result<&'a str> {
        let start = self.peek_pos()?;
        // Per container opened here: whether it is an object.
        let mut open = Vec::<bool>::new();
        loop {
            let pos = self.peek_pos()?;
            match self.bytes()[pos] {
                b'{' => {
                    self.begin_object()?;
                    open.push(true);
                }
                b'[' => {
                    self.begin_array()?;
                    open.push(false);
                }
                _ => self.skip_scalar()?,
            }
            loop {
                let is_object = match open.last() {
                    Some(is_object) => *is_object,
                    None => return Ok(&self.src[start..self.pos]),
                };
                let more = if is_object {
                    self.next_key()?.is_some()
                } else {
                    self.next_element()?
                };
                if more {
                    break;
                }
                open.pop();
            }
        }
    }

    /// Reads one member value into `slot`. A second member with the same name is an error.
    pub fn read_member<T: Deser>(&mut self, name: &str, slot: &mut Option<T>) -> Result<()> {
        if slot.is_some() {
            return Err(CodecError::DuplicateField(name.to_string()));
        }
        *slot = Some(self.read()?);
        Ok(())
    }

    /// Whether the next value is the `null` literal. Consumes it if so.
    pub fn take_null(&mut self) -> Result<bool> {
        self.skip_ws();
        if self.src[self.pos..].starts_with("null") {
            let after = self.bytes().get(self.pos + 4).copied();
            if after.map_or(true, json::is_delimiter) {
                self.pos += 4;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Checks that only whitespace remains.
    pub fn finish(&mut self) -> Result<()> {
        self.skip_ws();
        if self.pos < self.src.len() {
            return Err(CodecError::TrailingCharacters(self.pos));
        }
        Ok(())
    }

    /* Helpers. */

    fn skip_scalar(&mut self) -> Result<()> {
        match self.read_token()? {
            RawToken::Quoted(_) => Ok(()),
            RawToken::Bare(tok) => {
                let is_literal = matches!(tok, "true" | "false" | "null");
                if !is_literal && !json::is_number(tok) {
                    return Err(CodecError::UnexpectedToken {
                        expected: "a JSON value",
                        found: tok.to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.src.as_bytes()
    }

    fn skip_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.bytes().get(self.pos) {
            self.pos += 1;
        }
    }

    /// Position of the next non-whitespace byte.
    fn peek_pos(&mut self) -> Result<usize> {
        self.skip_ws();
        if self.pos < self.src.len() {
            Ok(self.pos)
        } else {
            Err(CodecError::UnexpectedEof)
        }
    }

    fn expect_byte(&mut self, expected_byte: u8, expected: &'static str) -> Result<()> {
        let pos = self.peek_pos()?;
        if self.bytes()[pos] != expected_byte {
            return Err(self.unexpected(expected));
        }
        self.pos += 1;
        Ok(())
    }

    /// Shared member stepping for objects and arrays.
    fn advance_member(&mut self, close: u8, expected: &'static str) -> Result<bool> {
        let first = match self.scopes.last() {
            Some(first) => *first,
            None => return Err(self.unexpected("an open container")),
        };
        let pos = self.peek_pos()?;
        if self.bytes()[pos] == close {
            self.pos += 1;
            self.scopes.pop();
            return Ok(false);
        }
        if !first {
            self.expect_byte(b',', expected)?;
        }
        if let Some(first) = self.scopes.last_mut() {
            *first = false;
        }
        Ok(true)
    }

    fn unexpected(&self, expected: &'static str) -> CodecError {
        let found = self.src[self.pos..].chars().take(16).collect::<String>();
        CodecError::UnexpectedToken { expected, found }
    }
}
