//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, and [`Member`], a single key/value pair of an object.

use alloc::vec::Vec;
use bstr::{BStr, BString};

/// An array payload: an ordered, owned sequence of values.
pub type Array = Vec<Value>;
/// An object payload: an ordered, owned sequence of members.
pub type Object = Vec<Member>;

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number (IEEE double)
/// - String (owned bytes; see below)
/// - Array
/// - Object
///
/// String payloads are [`BString`]s rather than `String`s. The parser
/// decodes unpaired low surrogates permissively, so a payload may contain
/// WTF-8 rather than strictly valid UTF-8.
///
/// Objects keep their members in insertion order and do not deduplicate
/// keys; lookups return the first match.
///
/// # Examples
///
/// ```
/// use jsondom::{Member, Value};
///
/// let v = Value::Object(vec![Member::new("key", Value::from("value"))]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(BString),
    Array(Array),
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

/// A single object member: an owned key paired with an owned value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    pub key: BString,
    pub value: Value,
}

impl Member {
    pub fn new(key: impl Into<BString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(BString::from(v))
    }
}

impl From<BString> for Value {
    fn from(v: BString) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Vec<Member>> for Value {
    fn from(v: Vec<Member>) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns the type tag of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::{Kind, Value};
    ///
    /// assert_eq!(Value::Number(1.0).kind(), Kind::Number);
    /// ```
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Boolean(..) => Kind::Boolean,
            Self::Number(..) => Kind::Number,
            Self::String(..) => Kind::String,
            Self::Array(..) => Kind::Array,
            Self::Object(..) => Kind::Object,
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, or `None` for any other type.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number payload, or `None` for any other type.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
    /// assert_eq!(Value::Null.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, or `None` for any other type.
    #[must_use]
    pub fn as_string(&self) -> Option<&BStr> {
        match self {
            Self::String(s) => Some(BStr::new(s)),
            _ => None,
        }
    }

    /// The string payload's length in bytes, or `None` for any other type.
    #[must_use]
    pub fn string_len(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.len()),
            _ => None,
        }
    }

    /// The array elements, or `None` for any other type.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Mutable access to the array payload, or `None` for any other type.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// The number of array elements, or `None` for any other type.
    #[must_use]
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(<[Value]>::len)
    }

    /// The array element at `index`, or `None` if out of bounds or not an
    /// array.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Mutable counterpart of [`element`](Value::element).
    #[must_use]
    pub fn element_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.as_array_mut()?.get_mut(index)
    }

    /// The object members, or `None` for any other type.
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Mutable access to the object payload, or `None` for any other type.
    #[must_use]
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// The number of object members, or `None` for any other type.
    ///
    /// Duplicate keys each count as their own member.
    #[must_use]
    pub fn object_len(&self) -> Option<usize> {
        self.as_object().map(<[Member]>::len)
    }

    /// The object member at `index`, or `None` if out of bounds or not an
    /// object.
    #[must_use]
    pub fn member(&self, index: usize) -> Option<&Member> {
        self.as_object()?.get(index)
    }

    /// The key of the object member at `index`.
    #[must_use]
    pub fn key(&self, index: usize) -> Option<&BStr> {
        self.member(index).map(|m| BStr::new(&m.key))
    }

    /// The key length, in bytes, of the object member at `index`.
    #[must_use]
    pub fn key_len(&self, index: usize) -> Option<usize> {
        self.member(index).map(|m| m.key.len())
    }

    /// The value of the object member at `index`.
    #[must_use]
    pub fn member_value(&self, index: usize) -> Option<&Value> {
        self.member(index).map(|m| &m.value)
    }

    /// The index of the first member whose key equals `key`, or `None` if
    /// absent or not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::parse;
    ///
    /// let v = parse(br#"{"a":1,"b":2,"a":3}"#).unwrap();
    /// assert_eq!(v.find_index("a"), Some(0));
    /// assert_eq!(v.find_index("c"), None);
    /// ```
    #[must_use]
    pub fn find_index(&self, key: impl AsRef<[u8]>) -> Option<usize> {
        let key = key.as_ref();
        self.as_object()?.iter().position(|m| m.key == key)
    }

    /// The value of the first member whose key equals `key`.
    #[must_use]
    pub fn find(&self, key: impl AsRef<[u8]>) -> Option<&Value> {
        find_in(self.as_object()?, key.as_ref())
    }

    /// Mutable counterpart of [`find`](Value::find).
    #[must_use]
    pub fn find_mut(&mut self, key: impl AsRef<[u8]>) -> Option<&mut Value> {
        let key = key.as_ref();
        self.as_object_mut()?
            .iter_mut()
            .find(|m| m.key == key)
            .map(|m| &mut m.value)
    }

    /// Resets this value to `Null`, dropping any owned payload.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Replaces this value with a boolean, dropping any owned payload.
    pub fn set_boolean(&mut self, b: bool) {
        *self = Self::Boolean(b);
    }

    /// Replaces this value with a number, dropping any owned payload.
    pub fn set_number(&mut self, n: f64) {
        *self = Self::Number(n);
    }

    /// Replaces this value with a string, dropping any owned payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut v = Value::Boolean(true);
    /// v.set_string("hello");
    /// assert_eq!(v.as_string().unwrap(), "hello");
    /// ```
    pub fn set_string(&mut self, s: impl Into<BString>) {
        *self = Self::String(s.into());
    }

    /// Replaces this value with an array, dropping any owned payload.
    pub fn set_array(&mut self, elements: Array) {
        *self = Self::Array(elements);
    }

    /// Replaces this value with an object, dropping any owned payload.
    pub fn set_object(&mut self, members: Object) {
        *self = Self::Object(members);
    }

    /// Moves this value out, leaving `Null` behind.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsondom::Value;
    ///
    /// let mut v = Value::from("payload");
    /// let moved = v.take();
    /// assert!(v.is_null());
    /// assert_eq!(moved.as_string().unwrap(), "payload");
    /// ```
    #[must_use]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }
}

fn find_in<'a>(members: &'a [Member], key: &[u8]) -> Option<&'a Value> {
    members.iter().find(|m| m.key == key).map(|m| &m.value)
}

/// Structural equality.
///
/// Numbers compare by IEEE semantics (`NaN != NaN`, `-0.0 == 0.0`),
/// strings by bytes, arrays element-wise in order. Objects compare by
/// size, then each left-hand member's key is looked up in the right-hand
/// object (first match) and the values compared recursively; member order
/// is irrelevant, and a key absent from the right-hand object makes the
/// objects unequal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|m| find_in(b, &m.key).is_some_and(|v| *v == m.value))
            }
            _ => false,
        }
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", crate::stringify::stringify(self))
    }
}
