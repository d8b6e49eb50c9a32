use crate::date::{is_valid_calendar_date, DateFormat};
use crate::pattern::standard_patterns::with_standard_patterns;
use crate::secondary_validation::Validator;

const LEGACY_ID_LENGTH: usize = 15;
const ID_LENGTH: usize = 18;

// Legacy numbers only carry a 2-digit birth year
const LEGACY_CENTURY: &str = "19";

const ID_COEFFICIENTS: [u32; ID_LENGTH - 1] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_SYMBOLS: [char; 11] = ['1', '0', 'x', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Resident identity number: 15 digits (legacy), or 17 digits plus a check symbol.
///
/// https://en.wikipedia.org/wiki/Resident_Identity_Card
/// The check symbol follows ISO 7064:1983, MOD 11-2.
pub struct IdentificationNumberChecksum;

impl Validator for IdentificationNumberChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        if !with_standard_patterns(|patterns| patterns.identification_number.is_match(input)) {
            return false;
        }

        // Past the structural check the input is pure ASCII, byte offsets are character offsets
        match input.len() {
            LEGACY_ID_LENGTH => input.get(6..12).is_some_and(is_valid_legacy_birth_date),
            ID_LENGTH => {
                input
                    .get(6..14)
                    .is_some_and(|birth_date| {
                        is_valid_calendar_date(birth_date, DateFormat::YearMonthDay)
                    })
                    && has_valid_check_symbol(input)
            }
            _ => false,
        }
    }
}

fn is_valid_legacy_birth_date(short_birth_date: &str) -> bool {
    is_valid_calendar_date(
        &format!("{LEGACY_CENTURY}{short_birth_date}"),
        DateFormat::YearMonthDay,
    )
}

fn has_valid_check_symbol(input: &str) -> bool {
    let mut chars = input.chars();
    let Some(check_symbol) = chars.next_back() else {
        return false;
    };

    let mut sum = 0;
    for (c, coefficient) in chars.zip(ID_COEFFICIENTS) {
        match c.to_digit(10) {
            Some(digit) => sum += digit * coefficient,
            None => return false,
        }
    }

    check_symbol.to_ascii_lowercase() == CHECK_SYMBOLS[(sum % 11) as usize]
}

pub fn is_identification_no(input: &str) -> bool {
    IdentificationNumberChecksum.is_valid_match(input)
}
