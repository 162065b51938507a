//! Tests for CLI parameter parsing and prompting.

use primebench::error::Error;
use primebench::input::{UPPER_PROMPT, parse_positive, prompt_positive, resolve};
use std::io::Cursor;

#[test]
fn accepts_positive_integers_with_whitespace() {
    assert_eq!(parse_positive("upper bound", "1000").unwrap(), 1000);
    assert_eq!(parse_positive("upper bound", "  42\n").unwrap(), 42);
}

#[test]
fn rejects_bad_values_with_field_name() {
    for raw in ["abc", "0", "-5", "", "   ", "3.5", "1e3"] {
        match parse_positive("upper bound", raw) {
            Err(Error::InvalidInput(msg)) => {
                assert!(msg.starts_with("upper bound"), "message: {msg}");
            }
            other => panic!("expected InvalidInput for {raw:?}, got {other:?}"),
        }
    }
}

#[test]
fn negative_values_are_reported_as_non_positive() {
    let err = parse_positive("maximum thread count", "-5").unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn oversized_values_are_reported_as_too_large() {
    for raw in ["99999999999999999999999", "18446744073709551616", "+18446744073709551616"] {
        let err = parse_positive("upper bound", raw).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("is too large"), "message: {msg}");
        assert!(msg.contains("18446744073709551615"), "message: {msg}");
        assert!(!msg.contains("greater than zero"), "message: {msg}");
    }
}

#[test]
fn largest_u64_is_accepted() {
    assert_eq!(
        parse_positive("upper bound", "18446744073709551615").unwrap(),
        u64::MAX
    );
}

#[test]
fn huge_negative_values_are_reported_as_non_positive() {
    let err = parse_positive("upper bound", "-99999999999999999999999").unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn prompt_writes_prompt_and_reads_one_line() {
    let mut input = Cursor::new("120\n8\n");
    let mut output = Vec::new();

    let value = prompt_positive(&mut input, &mut output, "upper bound", UPPER_PROMPT).unwrap();
    assert_eq!(value, 120);
    assert_eq!(String::from_utf8(output).unwrap(), UPPER_PROMPT);
}

#[test]
fn prompt_fails_on_end_of_input() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let err = prompt_positive(&mut input, &mut output, "upper bound", UPPER_PROMPT).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn resolve_prefers_flag_over_prompt() {
    let mut input = Cursor::new("999\n");
    let mut output = Vec::new();
    let value = resolve(Some(7), &mut input, &mut output, "upper bound", UPPER_PROMPT).unwrap();
    assert_eq!(value, 7);
    assert!(output.is_empty());

    let value = resolve(None, &mut input, &mut output, "upper bound", UPPER_PROMPT).unwrap();
    assert_eq!(value, 999);
}

#[test]
fn resolve_rejects_zero_flag() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    assert!(resolve(Some(0), &mut input, &mut output, "upper bound", UPPER_PROMPT).is_err());
}
