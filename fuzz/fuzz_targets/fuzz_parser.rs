#![no_main]
use jsondom::{Value, parse, stringify};
use libfuzzer_sys::fuzz_target;

// Lookup-based object equality cannot relate an object with duplicate
// keys even to itself, so the structural round-trip assert only applies
// to trees without them.
fn has_duplicate_keys(value: &Value) -> bool {
    match value {
        Value::Array(elements) => elements.iter().any(has_duplicate_keys),
        Value::Object(members) => {
            members
                .iter()
                .enumerate()
                .any(|(i, m)| members[..i].iter().any(|other| other.key == m.key))
                || members.iter().any(|m| has_duplicate_keys(&m.value))
        }
        _ => false,
    }
}

// Parse arbitrary bytes; whenever they happen to form a document, the
// stringified text must reparse to an equal tree and be a fixed point of
// another stringify pass.
fuzz_target!(|data: &[u8]| {
    let Ok(value) = parse(data) else {
        return;
    };
    let text = stringify(&value);
    let reparsed = parse(&text).expect("stringified output must reparse");
    assert_eq!(stringify(&reparsed), text);
    if !has_duplicate_keys(&value) {
        assert_eq!(reparsed, value);
    }
});
