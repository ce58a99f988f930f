use alloc::{string::String, vec::Vec};

use bstr::BString;
use quickcheck::{Arbitrary, Gen};

use crate::{Member, Value};

/// A finite double; parse output never contains `NaN` or infinities.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(pub(crate) f64);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            if depth == 0 {
                match usize::arbitrary(g) % 4 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(JsonNumber::arbitrary(g).0),
                    _ => Value::String(BString::from(String::arbitrary(g))),
                }
            } else {
                match usize::arbitrary(g) % 6 {
                    0 => Value::Null,
                    1 => Value::Boolean(bool::arbitrary(g)),
                    2 => Value::Number(JsonNumber::arbitrary(g).0),
                    3 => Value::String(BString::from(String::arbitrary(g))),
                    4 => {
                        let len = usize::arbitrary(g) % 3;
                        let mut elements = Vec::new();
                        for _ in 0..len {
                            elements.push(gen_val(g, depth - 1));
                        }
                        Value::Array(elements)
                    }
                    _ => {
                        let len = usize::arbitrary(g) % 3;
                        let mut members: Vec<Member> = Vec::new();
                        for _ in 0..len {
                            let key = BString::from(String::arbitrary(g));
                            // Lookup-based object equality cannot relate an
                            // object with duplicate keys even to itself, so
                            // generated objects keep their keys distinct.
                            if members.iter().any(|m| m.key == key) {
                                continue;
                            }
                            members.push(Member::new(key, gen_val(g, depth - 1)));
                        }
                        Value::Object(members)
                    }
                }
            }
        }

        let depth = usize::arbitrary(g) % 3;
        gen_val(g, depth)
    }
}
