use afl::fuzz;
use dd_text_validators::{
    is_identification_no, is_valid_bank_card, matches_pattern, FormatRuleConfig, TextFormat,
    Validator,
};
use strum::IntoEnumIterator;

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input_str = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input_str);

    // `<pattern>,<input>` additionally exercises caller supplied patterns
    let (pattern, input) = split_bytes_once(bytes)?;
    let pattern_str = std::str::from_utf8(pattern).ok()?;
    let input_str = std::str::from_utf8(input).ok()?;
    run_pattern_fuzz(pattern_str, input_str);

    Some(())
}

fn run_fuzz(input: &str) {
    // Every check must return, whatever the input is
    for format in TextFormat::iter() {
        format.is_valid_match(input);
    }

    if is_valid_bank_card(input) {
        assert!((13..=19).contains(&input.len()));
        assert!(input.bytes().all(|b| b.is_ascii_digit()));
    }

    if is_identification_no(input) {
        assert!(input.len() == 15 || input.len() == 18);
        let (body, check_symbol) = input.split_at(input.len() - 1);
        assert!(body.bytes().all(|b| b.is_ascii_digit()));
        assert!(
            check_symbol.bytes().all(|b| b.is_ascii_digit())
                || check_symbol.eq_ignore_ascii_case("x")
        );
    }
}

fn run_pattern_fuzz(pattern: &str, input: &str) {
    let cached_result = matches_pattern(input, pattern);
    match FormatRuleConfig::new(TextFormat::Pattern {
        pattern: pattern.to_string(),
    })
    .compile()
    {
        Ok(rule) => assert_eq!(cached_result, Ok(rule.is_valid(input))),
        Err(_) => assert!(cached_result.is_err()),
    }
}
