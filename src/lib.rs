// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod date;
mod observability;
mod pattern;
mod rule;
mod secondary_validation;
mod stats;
mod validation;

// This is the public API of the text validators library
pub use date::{is_valid_calendar_date, parse_calendar_date, DateFormat};
pub use observability::labels::Labels;
pub use pattern::standard_patterns::ensure_standard_patterns;
pub use pattern::{matches_pattern, Pattern};
pub use rule::compiled::CompiledFormatRule;
pub use rule::config::{FormatRuleConfig, TextFormat};
pub use rule::error::CreateRuleError;
pub use secondary_validation::{
    contains_chinese, includes_emoji, is_capitalized, is_email, is_identification_no,
    is_lowercase, is_mobile_phone, is_number, is_price, is_pure_english, is_pure_english_or_int,
    is_pure_int, is_true_name, is_valid_bank_card, is_valid_date, is_verification_code,
    BankCardChecksum, IdentificationNumberChecksum, Validator,
};
pub use validation::{validate_pattern, PatternError};
