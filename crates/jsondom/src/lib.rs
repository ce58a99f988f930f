//! A minimal JSON document (DOM) library.
//!
//! [`parse`] turns strict JSON text into an owned [`Value`] tree; the tree
//! can be queried and mutated in place, and [`stringify`] renders it back
//! as compact, whitespace-free JSON text.
//!
//! String payloads are byte strings ([`bstr::BString`]) rather than
//! `String`: the decoder is permissive about unpaired low surrogates, so a
//! decoded payload is not guaranteed to be valid UTF-8.
//!
//! ```rust
//! use jsondom::{parse, stringify};
//!
//! let value = parse(br#"{ "name": "pi", "digits": [3, 1, 4] }"#).unwrap();
//! assert_eq!(value.find("name").unwrap().as_string().unwrap(), "pi");
//! assert_eq!(stringify(&value), r#"{"name":"pi","digits":[3,1,4]}"#);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod scratch;
mod stringify;
mod value;

#[cfg(test)]
mod tests;

pub use error::ParseError;
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use stringify::stringify;
pub use value::{Array, Kind, Member, Object, Value};
