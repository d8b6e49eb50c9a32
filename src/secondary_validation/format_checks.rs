use crate::date::{is_valid_calendar_date, DateFormat};
use crate::pattern::standard_patterns::with_standard_patterns;
use std::ops::RangeInclusive;

// Same range as the `true_name` pattern
const CJK_IDEOGRAPHS: RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// `local@domain.tld`, with at least two letters in the top level domain
pub fn is_email(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.email.is_match(input))
}

/// Plain decimal notation with an optional sign and exponent. No grouping separators,
/// no locale specific decimal mark, no `inf`/`NaN`.
pub fn is_number(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.number.is_match(input))
}

/// The whole input is a base-10 integer that fits in an `i64`
pub fn is_pure_int(input: &str) -> bool {
    input.parse::<i64>().is_ok()
}

pub fn is_lowercase(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.lowercase.is_match(input))
}

pub fn is_capitalized(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.capitalized.is_match(input))
}

/// At most two decimals. The empty string is accepted.
pub fn is_price(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.price.is_match(input))
}

pub fn is_mobile_phone(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.mobile_phone.is_match(input))
}

/// 6 digit one-time code
pub fn is_verification_code(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.verification_code.is_match(input))
}

/// A personal name written with at least two CJK ideographs
pub fn is_true_name(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.true_name.is_match(input))
}

/// At least one CJK ideograph, anywhere in the input (line breaks included)
pub fn contains_chinese(input: &str) -> bool {
    input.chars().any(|c| CJK_IDEOGRAPHS.contains(&c))
}

pub fn is_pure_english(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.pure_english.is_match(input))
}

pub fn is_pure_english_or_int(input: &str) -> bool {
    with_standard_patterns(|patterns| patterns.pure_english_or_int.is_match(input))
}

/// Any scalar value outside of the Basic Multilingual Plane, which is where emoji live.
/// This works on Unicode scalar values, not on UTF-16 code units.
pub fn includes_emoji(input: &str) -> bool {
    input.chars().any(|c| u32::from(c) > 0xFFFF)
}

/// `yyyyMMdd`
pub fn is_valid_date(input: &str) -> bool {
    is_valid_calendar_date(input, DateFormat::YearMonthDay)
}
