use thiserror::Error;

/// The ways a JSON document can fail to parse.
///
/// Parse failures are ordinary values, not panics. A failed [`parse`] call
/// releases everything it had partially built, so no memory is retained
/// past the error.
///
/// [`parse`]: crate::parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    #[error("input contains no value")]
    AllBlank,
    /// A token matched no JSON literal, number, string, array, or object.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was followed by trailing non-whitespace input.
    #[error("unexpected content after the value")]
    NotSingle,
    /// A number literal overflowed the range of an IEEE double.
    #[error("number is out of range of a double")]
    NumberTooBig,
    /// A string reached end of input before its closing quote.
    #[error("missing closing quotation mark")]
    MissQuotationMark,
    /// A backslash introduced an unrecognized escape.
    #[error("invalid string escape")]
    InvalidStringEscape,
    /// An unescaped control byte appeared inside a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// A `\u` escape was not followed by four hexadecimal digits.
    #[error("invalid unicode hex escape")]
    InvalidUnicodeHex,
    /// A high surrogate was not followed by a valid low surrogate.
    #[error("invalid unicode surrogate pair")]
    InvalidUnicodeSurrogate,
    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or square bracket")]
    MissCommaOrSquareBracket,
    /// An object member did not begin with a string key.
    #[error("missing object key")]
    MissKey,
    /// An object key was not followed by `:`.
    #[error("missing colon after object key")]
    MissColon,
    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or curly bracket")]
    MissCommaOrCurlyBracket,
    /// Nesting exceeded [`max_depth`](crate::ParseOptions::max_depth).
    #[error("nesting exceeded the configured depth limit")]
    DepthLimitExceeded,
}
