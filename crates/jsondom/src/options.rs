/// Configuration for a single parse call.
///
/// # Examples
///
/// ```rust
/// use jsondom::{ParseOptions, parse_with_options};
///
/// let options = ParseOptions { max_depth: 4 };
/// assert!(parse_with_options(b"[[[[1]]]]", options).is_ok());
/// assert!(parse_with_options(b"[[[[[1]]]]]", options).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Maximum number of nested arrays and objects the parser will enter.
    ///
    /// The parser recurses once per nesting level, so this bounds the call
    /// stack an adversarial input can consume. Exceeding the limit fails
    /// with [`ParseError::DepthLimitExceeded`](crate::ParseError::DepthLimitExceeded).
    ///
    /// # Default
    ///
    /// `128`
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
