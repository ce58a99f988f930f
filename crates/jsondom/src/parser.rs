//! Recursive-descent JSON parser.
//!
//! The parser walks the input byte slice with a cursor, dispatching on the
//! lookahead byte: `n`/`t`/`f` begin a literal, `"` a string, `[` an
//! array, `{` an object, and anything else is tried as a number. String
//! payloads are decoded into a [`Scratch`] buffer and copied out before
//! any nested parsing resumes; staged array elements and object members
//! live in ordinary `Vec`s, so an error path drops them on unwind and
//! nothing partially built survives a failed call.

use alloc::vec::Vec;
use bstr::BString;

use crate::{
    error::ParseError,
    options::ParseOptions,
    scratch::Scratch,
    value::{Member, Value},
};

/// Parses a complete JSON document with default [`ParseOptions`].
///
/// The input must contain exactly one JSON value, optionally surrounded
/// by whitespace: blank input fails with [`ParseError::AllBlank`] and
/// trailing non-whitespace content fails with [`ParseError::NotSingle`].
///
/// # Errors
///
/// Returns the [`ParseError`] kind describing the first failure.
///
/// # Examples
///
/// ```
/// use jsondom::parse;
///
/// let value = parse(b"[1, 2, 3]").unwrap();
/// assert_eq!(value.array_len(), Some(3));
/// ```
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with_options(input, ParseOptions::default())
}

/// Parses a complete JSON document.
///
/// # Errors
///
/// Returns the [`ParseError`] kind describing the first failure.
pub fn parse_with_options(input: &[u8], options: ParseOptions) -> Result<Value, ParseError> {
    let mut parser = Parser {
        input,
        pos: 0,
        depth: 0,
        scratch: Scratch::new(),
        options,
    };
    parser.skip_whitespace();
    if parser.at_end() {
        return Err(ParseError::AllBlank);
    }
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.at_end() {
        Ok(value)
    } else {
        Err(ParseError::NotSingle)
    }
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    scratch: Scratch,
    options: ParseOptions,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek();
        if byte.is_some() {
            self.pos += 1;
        }
        byte
    }

    /// Consumes `byte` if it is next in the input.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn descend(&mut self) -> Result<(), ParseError> {
        if self.depth == self.options.max_depth {
            return Err(ParseError::DepthLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Boolean(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
            None => Err(ParseError::AllBlank),
        }
    }

    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, ParseError> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        self.eat(b'-');
        if self.eat(b'0') {
            // a leading zero takes no further integer digits
        } else if matches!(self.peek(), Some(b'1'..=b'9')) {
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        } else {
            return Err(ParseError::InvalidValue);
        }
        if self.eat(b'.') {
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if !matches!(self.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
            while matches!(self.peek(), Some(b'0'..=b'9')) {
                self.pos += 1;
            }
        }
        // The grammar above admits only ASCII.
        let text = core::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| ParseError::InvalidValue)?;
        let n: f64 = text.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        Ok(Value::Number(n))
    }

    /// Decodes a string into the scratch buffer and copies it out; the
    /// buffer is rolled back to its pre-call top on any failure.
    fn parse_string(&mut self) -> Result<BString, ParseError> {
        let mark = self.scratch.top();
        match self.scan_string() {
            Ok(()) => {
                let len = self.scratch.top() - mark;
                Ok(BString::from(self.scratch.release(len).to_vec()))
            }
            Err(e) => {
                self.scratch.truncate(mark);
                Err(e)
            }
        }
    }

    fn scan_string(&mut self) -> Result<(), ParseError> {
        self.pos += 1; // opening quote, guaranteed by the dispatcher
        loop {
            match self.bump() {
                None => return Err(ParseError::MissQuotationMark),
                Some(b'"') => return Ok(()),
                Some(b'\\') => match self.bump() {
                    Some(b'"') => self.scratch.push(b'"'),
                    Some(b'\\') => self.scratch.push(b'\\'),
                    Some(b'/') => self.scratch.push(b'/'),
                    Some(b'b') => self.scratch.push(0x08),
                    Some(b'f') => self.scratch.push(0x0C),
                    Some(b'n') => self.scratch.push(b'\n'),
                    Some(b'r') => self.scratch.push(b'\r'),
                    Some(b't') => self.scratch.push(b'\t'),
                    Some(b'u') => {
                        let mut unit = self.parse_hex4()?;
                        if (0xD800..=0xDBFF).contains(&unit) {
                            if !(self.eat(b'\\') && self.eat(b'u')) {
                                return Err(ParseError::InvalidUnicodeSurrogate);
                            }
                            let low = self.parse_hex4()?;
                            if !(0xDC00..=0xDFFF).contains(&low) {
                                return Err(ParseError::InvalidUnicodeSurrogate);
                            }
                            unit = (((unit - 0xD800) << 10) | (low - 0xDC00)) + 0x10000;
                        }
                        // Unpaired low surrogates fall through and encode
                        // like any other BMP unit (WTF-8).
                        self.encode_utf8(unit);
                    }
                    _ => return Err(ParseError::InvalidStringEscape),
                },
                Some(byte) if byte < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(byte) => self.scratch.push(byte),
            }
        }
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut unit = 0u32;
        for _ in 0..4 {
            let digit = match self.bump() {
                Some(b @ b'0'..=b'9') => u32::from(b - b'0'),
                Some(b @ b'a'..=b'f') => u32::from(b - b'a' + 10),
                Some(b @ b'A'..=b'F') => u32::from(b - b'A' + 10),
                _ => return Err(ParseError::InvalidUnicodeHex),
            };
            unit = unit << 4 | digit;
        }
        Ok(unit)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode_utf8(&mut self, cp: u32) {
        if cp <= 0x7F {
            self.scratch.push(cp as u8);
        } else if cp <= 0x7FF {
            self.scratch
                .extend(&[0xC0 | (cp >> 6) as u8, 0x80 | (cp & 0x3F) as u8]);
        } else if cp <= 0xFFFF {
            self.scratch.extend(&[
                0xE0 | (cp >> 12) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ]);
        } else {
            self.scratch.extend(&[
                0xF0 | (cp >> 18) as u8,
                0x80 | ((cp >> 12) & 0x3F) as u8,
                0x80 | ((cp >> 6) & 0x3F) as u8,
                0x80 | (cp & 0x3F) as u8,
            ]);
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.pos += 1; // '['
        self.skip_whitespace();
        if self.eat(b']') {
            self.depth -= 1;
            return Ok(Value::Array(Vec::new()));
        }
        let mut elements = Vec::new();
        loop {
            self.skip_whitespace();
            if self.at_end() {
                // an element or a closing bracket was still owed
                return Err(ParseError::MissCommaOrSquareBracket);
            }
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            if self.eat(b']') {
                self.depth -= 1;
                return Ok(Value::Array(elements));
            }
            return Err(ParseError::MissCommaOrSquareBracket);
        }
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.descend()?;
        self.pos += 1; // '{'
        self.skip_whitespace();
        if self.eat(b'}') {
            self.depth -= 1;
            return Ok(Value::Object(Vec::new()));
        }
        let mut members = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if !self.eat(b':') {
                return Err(ParseError::MissColon);
            }
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.push(Member { key, value });
            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            if self.eat(b'}') {
                self.depth -= 1;
                return Ok(Value::Object(members));
            }
            return Err(ParseError::MissCommaOrCurlyBracket);
        }
    }
}
