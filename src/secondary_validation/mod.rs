mod bank_card_checksum;
mod format_checks;
mod identification_number_checksum;

use crate::pattern::matches_pattern;
use crate::rule::config::TextFormat;
pub use crate::secondary_validation::bank_card_checksum::{is_valid_bank_card, BankCardChecksum};
pub use crate::secondary_validation::format_checks::{
    contains_chinese, includes_emoji, is_capitalized, is_email, is_lowercase, is_mobile_phone,
    is_number, is_price, is_pure_english, is_pure_english_or_int, is_pure_int, is_true_name,
    is_valid_date, is_verification_code,
};
pub use crate::secondary_validation::identification_number_checksum::{
    is_identification_no, IdentificationNumberChecksum,
};

/// A total check over a piece of text. Malformed input is never an error, it is just not valid.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, input: &str) -> bool;
}

impl Validator for TextFormat {
    fn is_valid_match(&self, input: &str) -> bool {
        match self {
            TextFormat::BankCard => BankCardChecksum.is_valid_match(input),
            TextFormat::IdentificationNumber => {
                IdentificationNumberChecksum.is_valid_match(input)
            }
            TextFormat::Email => is_email(input),
            TextFormat::Number => is_number(input),
            TextFormat::PureInt => is_pure_int(input),
            TextFormat::Lowercase => is_lowercase(input),
            TextFormat::Capitalized => is_capitalized(input),
            TextFormat::Price => is_price(input),
            TextFormat::MobilePhone => is_mobile_phone(input),
            TextFormat::VerificationCode => is_verification_code(input),
            TextFormat::TrueName => is_true_name(input),
            TextFormat::ContainsChinese => contains_chinese(input),
            TextFormat::PureEnglish => is_pure_english(input),
            TextFormat::PureEnglishOrInt => is_pure_english_or_int(input),
            TextFormat::IncludesEmoji => includes_emoji(input),
            TextFormat::Date => is_valid_date(input),
            // An invalid pattern can't match anything
            TextFormat::Pattern { pattern } => matches_pattern(input, pattern).unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::rule::config::TextFormat;
    use crate::secondary_validation::*;

    #[test]
    fn text_format_dispatches_to_its_check() {
        let cases = vec![
            (TextFormat::BankCard, "4111111111111111", "4111111111111112"),
            (
                TextFormat::IdentificationNumber,
                "11010519491231002X",
                "110105194912310021",
            ),
            (TextFormat::Email, "john@example.com", "john@example"),
            (TextFormat::Number, "-1.5e3", "1,5"),
            (TextFormat::PureInt, "-15", "1.5"),
            (TextFormat::Lowercase, "abc", "Abc"),
            (TextFormat::Capitalized, "ABC", "Abc"),
            (TextFormat::Price, "9.99", "9.999"),
            (TextFormat::MobilePhone, "13812345678", "03812345678"),
            (TextFormat::VerificationCode, "123456", "12345"),
            (TextFormat::TrueName, "张三", "张"),
            (TextFormat::ContainsChinese, "abc中", "abc"),
            (TextFormat::PureEnglish, "abc", "abc1"),
            (TextFormat::PureEnglishOrInt, "123", "abc123"),
            (TextFormat::IncludesEmoji, "ok 👍", "ok"),
            (TextFormat::Date, "19491231", "19491232"),
            (
                TextFormat::Pattern {
                    pattern: "[a-f0-9]{4}".to_string(),
                },
                "be3f",
                "be3fa",
            ),
        ];
        for (format, valid, invalid) in cases {
            println!("testing format {format:?}");
            assert!(format.is_valid_match(valid));
            assert!(!format.is_valid_match(invalid));
        }
    }

    #[test]
    fn invalid_custom_pattern_never_matches() {
        let format = TextFormat::Pattern {
            pattern: "[a-f".to_string(),
        };
        assert!(!format.is_valid_match("a"));
        assert!(!format.is_valid_match("[a-f"));
    }
}
