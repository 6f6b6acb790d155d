// SPDX-License-Identifier: Apache-2.0

//! Recursive-descent JSON parser.
//!
//! One-byte lookahead after each whitespace skip picks the production:
//! `"` string, `t`/`f` boolean, `n` null, `[` array, `{` object, anything
//! else a number. The parser is deliberately loose where the grammar's
//! separators are concerned: commas between array elements are optional and
//! trailing commas are accepted. Escape sequences in strings are carried
//! through as raw bytes, not decoded.
//!
//! Nesting is bounded by an explicit depth counter so that hostile input
//! reports [`ParseError::MaxDepthExceeded`] instead of exhausting the call
//! stack.

use std::collections::HashMap;

use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::value::Value;

/// Nesting depth allowed by [`Parser::new`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Recursive-descent parser over one borrowed input text.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser with the default depth limit.
    pub fn new(input: &'a str) -> Self {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with an explicit depth limit.
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Self {
        Self {
            cursor: Cursor::new(input),
            max_depth,
            depth: 0,
        }
    }

    /// Parse one value from the input.
    ///
    /// Trailing input after the root value is not inspected.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        self.parse_value()
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek().ok_or(ParseError::UnexpectedEnd)? {
            b'"' => Ok(Value::String(self.parse_string()?)),
            b't' | b'f' => Ok(Value::Bool(self.parse_bool()?)),
            b'n' => self.parse_null(),
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            _ => Ok(Value::Number(self.parse_number()?)),
        }
    }

    /// Copy a string literal's bytes verbatim, without decoding escapes: a
    /// backslash and the byte after it pass through as two raw bytes.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.cursor.bump(); // opening quote
        let start = self.cursor.pos();
        loop {
            match self.cursor.peek() {
                None => return Err(ParseError::UnterminatedString),
                Some(b'"') => break,
                Some(b'\\') => {
                    self.cursor.bump();
                    if self.cursor.peek().is_none() {
                        return Err(ParseError::UnterminatedString);
                    }
                    self.cursor.bump();
                }
                Some(_) => self.cursor.bump(),
            }
        }
        let end = self.cursor.pos();
        self.cursor.bump(); // closing quote
        let text = self
            .cursor
            .slice(start, end)
            .ok_or(ParseError::UnterminatedString)?;
        Ok(text.to_string())
    }

    /// Parse the longest valid numeric prefix into a double.
    fn parse_number(&mut self) -> Result<f64, ParseError> {
        let rest = self.cursor.rest();
        let len = numeric_prefix_len(rest.as_bytes());
        if len == 0 {
            return Err(ParseError::InvalidNumber);
        }
        let value = rest[..len]
            .parse::<f64>()
            .map_err(|_| ParseError::InvalidNumber)?;
        self.cursor.advance(len);
        Ok(value)
    }

    fn parse_bool(&mut self) -> Result<bool, ParseError> {
        if self.cursor.eat("true") {
            Ok(true)
        } else if self.cursor.eat("false") {
            Ok(false)
        } else {
            Err(ParseError::InvalidLiteral)
        }
    }

    fn parse_null(&mut self) -> Result<Value, ParseError> {
        if self.cursor.eat("null") {
            Ok(Value::Null)
        } else {
            Err(ParseError::InvalidLiteral)
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.bump(); // '['
        let mut items = Vec::new();
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(b']') => {
                    self.cursor.bump();
                    break;
                }
                Some(_) => {}
            }
            items.push(self.parse_value()?);
            self.cursor.skip_whitespace();
            if self.cursor.peek() == Some(b',') {
                self.cursor.bump();
            }
            // A missing comma is tolerated: the next pass either finds `]`
            // or parses another element.
        }
        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.bump(); // '{'
        let mut members = HashMap::new();
        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                None => return Err(ParseError::MissingCommaOrBrace),
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                Some(b'"') => {}
                Some(_) => return Err(ParseError::ExpectedKey),
            }
            let key = self.parse_string()?;
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some(b':') {
                return Err(ParseError::MissingColon);
            }
            self.cursor.bump();
            let value = self.parse_value()?;
            // Duplicate keys overwrite: last write wins.
            members.insert(key, value);
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                Some(b',') => self.cursor.bump(),
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                _ => return Err(ParseError::MissingCommaOrBrace),
            }
        }
        self.leave();
        Ok(Value::Object(members))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(ParseError::MaxDepthExceeded(self.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Length of the longest numeric prefix of `bytes`: optional sign, digits,
/// optional fraction, optional exponent. The exponent marker is only
/// consumed when at least one exponent digit follows, mirroring `strtod`'s
/// backoff. Returns 0 when no mantissa digits are present.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    let mut digits = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    while matches!(bytes.get(i), Some(b'0'..=b'9')) {
        i += 1;
        digits += 1;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        while matches!(bytes.get(i), Some(b'0'..=b'9')) {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while matches!(bytes.get(j), Some(b'0'..=b'9')) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
