#![allow(missing_docs)]

use jsondom::{Kind, Member, ParseError, ParseOptions, Value, parse, parse_with_options, stringify};
use rstest::rstest;

#[test]
fn parse_and_query_a_document() {
    let value = parse(br#"{"name":"pi","digits":[3,1,4],"exact":false}"#).unwrap();
    assert_eq!(value.kind(), Kind::Object);
    assert_eq!(value.object_len(), Some(3));
    assert_eq!(value.find("name").unwrap().as_string().unwrap(), "pi");
    assert_eq!(value.find("digits").unwrap().array_len(), Some(3));
    assert_eq!(value.find("exact").unwrap().as_boolean(), Some(false));
    assert!(value.find("missing").is_none());
}

#[test]
fn mutate_then_restringify() {
    let mut value = parse(br#"{"count":1,"tags":[]}"#).unwrap();
    value.find_mut("count").unwrap().set_number(2.0);
    value
        .find_mut("tags")
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(Value::from("fresh"));
    assert_eq!(stringify(&value), r#"{"count":2,"tags":["fresh"]}"#);
}

#[test]
fn build_a_tree_without_parsing() {
    let value = Value::Object(vec![
        Member::new("ok", Value::Boolean(true)),
        Member::new("data", Value::Array(vec![Value::Null, Value::Number(0.5)])),
    ]);
    assert_eq!(stringify(&value), r#"{"ok":true,"data":[null,0.5]}"#);
}

#[rstest]
#[case(b"".as_slice(), ParseError::AllBlank)]
#[case(b"   ".as_slice(), ParseError::AllBlank)]
#[case(b"truex".as_slice(), ParseError::NotSingle)]
#[case(b"1e309".as_slice(), ParseError::NumberTooBig)]
#[case(b"-1e309".as_slice(), ParseError::NumberTooBig)]
#[case(b"[1,2,".as_slice(), ParseError::MissCommaOrSquareBracket)]
#[case(b"\"\\v\"".as_slice(), ParseError::InvalidStringEscape)]
#[case(b"\"\x01\"".as_slice(), ParseError::InvalidStringChar)]
fn errors_are_reported_as_values(#[case] input: &[u8], #[case] expected: ParseError) {
    assert_eq!(parse(input), Err(expected));
}

#[test]
fn errors_display_a_message() {
    assert_eq!(
        parse(b"").unwrap_err().to_string(),
        "input contains no value"
    );
}

#[test]
fn unicode_escapes_decode_to_utf8() {
    let cent = parse(b"\"\\u00A2\"").unwrap();
    assert_eq!(cent.as_string().unwrap(), b"\xC2\xA2".as_slice());

    let clef = parse(b"\"\\uD834\\uDD1E\"").unwrap();
    assert_eq!(clef.as_string().unwrap(), b"\xF0\x9D\x84\x9E".as_slice());
}

#[test]
fn depth_limit_is_configurable() {
    let options = ParseOptions { max_depth: 2 };
    assert!(parse_with_options(b"[[1]]", options).is_ok());
    assert_eq!(
        parse_with_options(b"[[[1]]]", options),
        Err(ParseError::DepthLimitExceeded)
    );
}

#[test]
fn parse_round_trips_stringify() {
    let value = parse(br#"{"a":[1,2,3],"b":{"c":"\u00A2"},"d":null}"#).unwrap();
    let text = stringify(&value);
    let reparsed = parse(&text).unwrap();
    assert_eq!(reparsed, value);
    assert_eq!(stringify(&reparsed), text);
}
