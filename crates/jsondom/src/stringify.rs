//! Compact JSON serializer.
//!
//! Output is canonical: no inserted whitespace, members and elements in
//! insertion order, numbers rendered with the shortest text that parses
//! back to the same double.

use alloc::string::ToString;
use bstr::BString;

use crate::{scratch::Scratch, value::Value};

/// Renders a value tree as compact JSON text.
///
/// Control bytes below `0x20` in string payloads are escaped as `\u00XX`;
/// `"`, `\`, and the named control escapes use their two-character form.
/// All other payload bytes are copied through verbatim, so a payload that
/// holds WTF-8 stringifies to the same bytes it was parsed from.
///
/// # Examples
///
/// ```
/// use jsondom::{parse, stringify};
///
/// let value = parse(b" [ 1 , \"a\\tb\" , { } ] ").unwrap();
/// assert_eq!(stringify(&value), r#"[1,"a\tb",{}]"#);
/// ```
#[must_use]
pub fn stringify(value: &Value) -> BString {
    let mut out = Scratch::new();
    write_value(&mut out, value);
    BString::from(out.into_bytes())
}

fn write_value(out: &mut Scratch, value: &Value) {
    match value {
        Value::Null => out.extend(b"null"),
        Value::Boolean(true) => out.extend(b"true"),
        Value::Boolean(false) => out.extend(b"false"),
        Value::Number(n) => out.extend(n.to_string().as_bytes()),
        Value::String(s) => write_string(out, s),
        Value::Array(elements) => {
            out.push(b'[');
            let mut first = true;
            for element in elements {
                if !first {
                    out.push(b',');
                }
                first = false;
                write_value(out, element);
            }
            out.push(b']');
        }
        Value::Object(members) => {
            out.push(b'{');
            let mut first = true;
            for member in members {
                if !first {
                    out.push(b',');
                }
                first = false;
                write_string(out, &member.key);
                out.push(b':');
                write_value(out, &member.value);
            }
            out.push(b'}');
        }
    }
}

fn write_string(out: &mut Scratch, bytes: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push(b'"');
    for &byte in bytes {
        match byte {
            b'"' => out.extend(b"\\\""),
            b'\\' => out.extend(b"\\\\"),
            0x08 => out.extend(b"\\b"),
            0x0C => out.extend(b"\\f"),
            b'\n' => out.extend(b"\\n"),
            b'\r' => out.extend(b"\\r"),
            b'\t' => out.extend(b"\\t"),
            byte if byte < 0x20 => out.extend(&[
                b'\\',
                b'u',
                b'0',
                b'0',
                HEX[usize::from(byte >> 4)],
                HEX[usize::from(byte & 0xF)],
            ]),
            byte => out.push(byte),
        }
    }
    out.push(b'"');
}
