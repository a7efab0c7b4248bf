use crate::utils::error::{PersonError, Result};
use std::io::{self, BufRead};
use std::str::FromStr;

/// Same set as C's `isspace` in the default locale.
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Whitespace-delimited token extraction over a buffered reader.
///
/// Once an extraction fails the reader stays failed until [`TokenReader::clear`]
/// is called; further extractions return [`PersonError::StreamFailed`] without
/// consuming input.
#[derive(Debug)]
pub struct TokenReader<R> {
    inner: R,
    failed: bool,
    eof: bool,
}

impl<'a> TokenReader<&'a [u8]> {
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            failed: false,
            eof: false,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }

    /// True once a read has hit the end of the underlying input.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Skips whitespace and reports whether any input is left.
    pub fn at_end(&mut self) -> Result<bool> {
        Ok(!self.skip_whitespace()?)
    }

    /// Returns the next token, or `None` when only whitespace remains.
    /// The whitespace following the token is left unread.
    pub fn next_token(&mut self) -> Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }

        let mut token = Vec::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                self.eof = true;
                break;
            }
            let len = buf.iter().take_while(|b| !is_space(**b)).count();
            token.extend_from_slice(&buf[..len]);
            let ended = len < buf.len();
            self.inner.consume(len);
            if ended {
                break;
            }
        }

        String::from_utf8(token)
            .map(Some)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Reads the next token and parses it as `T`. `field` names the value
    /// being read and is carried in the error.
    ///
    /// The whole token must parse: `30abc` is rejected as a whole rather than
    /// yielding `30` and leaving `abc` for the next read. A rejected token is
    /// consumed, so after [`TokenReader::clear`] reading resumes past it.
    pub fn extract<T: FromStr>(&mut self, field: &'static str) -> Result<T> {
        self.extract_if(field, |_| true)
    }

    /// Reads a balance. `nan`, `inf`, `infinity` and values that overflow
    /// `f64` are rejected like any other malformed number.
    pub fn extract_finite(&mut self, field: &'static str) -> Result<f64> {
        self.extract_if(field, |value: &f64| value.is_finite())
    }

    fn extract_if<T, F>(&mut self, field: &'static str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        if self.failed {
            return Err(PersonError::StreamFailed);
        }

        let token = match self.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.failed = true;
                return Err(PersonError::UnexpectedEof { field });
            }
            Err(e) => {
                self.failed = true;
                return Err(e);
            }
        };

        match token.parse::<T>() {
            Ok(value) if accept(&value) => Ok(value),
            _ => {
                self.failed = true;
                tracing::debug!(field, token = %token, "token did not parse");
                Err(PersonError::InvalidToken { field, token })
            }
        }
    }

    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                self.eof = true;
                return Ok(false);
            }
            let skip = buf.iter().take_while(|b| is_space(**b)).count();
            let more = skip < buf.len();
            self.inner.consume(skip);
            if more {
                return Ok(true);
            }
        }
    }
}
