use crate::secondary_validation::Validator;

const MIN_CARD_NUMBER_LENGTH: usize = 13;
const MAX_CARD_NUMBER_LENGTH: usize = 19;

/// Luhn checksum over a bare payment card number.
///
/// Separators are not skipped: the whole input has to be 13 to 19 ASCII digits.
/// Leading zeros are kept, the input is a digit string and not a number.
pub struct BankCardChecksum;

impl Validator for BankCardChecksum {
    fn is_valid_match(&self, input: &str) -> bool {
        if !(MIN_CARD_NUMBER_LENGTH..=MAX_CARD_NUMBER_LENGTH).contains(&input.len()) {
            return false;
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        // Positions are counted from 1, starting at the rightmost (check) digit
        let (odd_sum, even_sum) = input
            .bytes()
            .rev()
            .map(|b| u32::from(b - b'0'))
            .enumerate()
            .fold((0u32, 0u32), |(odd_sum, even_sum), (offset, digit)| {
                if (offset + 1) % 2 == 0 {
                    let doubled = digit * 2;
                    let folded = if doubled >= 10 { doubled - 9 } else { doubled };
                    (odd_sum, even_sum + folded)
                } else {
                    (odd_sum + digit, even_sum)
                }
            });
        (odd_sum + even_sum) % 10 == 0
    }
}

pub fn is_valid_bank_card(input: &str) -> bool {
    BankCardChecksum.is_valid_match(input)
}

#[cfg(test)]
mod test {
    use crate::secondary_validation::*;

    // Computes the expected check digit the other way around: sum every digit but the
    // last one, then derive which digit would bring the total to a multiple of 10.
    fn expected_check_digit(payload: &str) -> u32 {
        let mut sum = 0;
        for (offset, digit) in payload.chars().rev().filter_map(|c| c.to_digit(10)).enumerate() {
            if offset % 2 == 0 {
                sum += if digit > 4 { digit * 2 - 9 } else { digit * 2 };
            } else {
                sum += digit;
            }
        }
        (10 - sum % 10) % 10
    }

    #[test]
    fn validate_various_credit_cards() {
        let credit_cards = vec![
            // source https://www.paypalobjects.com/en_AU/vhelp/paypalmanager_help/credit_card_numbers.htm
            // American Express
            "378282246310005",
            "371449635398431",
            // American Express Corporate
            "378734493671000",
            // Australian BankCard
            "5610591081018250",
            // Diners Club
            "30569309025904",
            "38520000023237",
            // Discover
            "6011111111111117",
            "6011000990139424",
            // JCB
            "3530111333300000",
            "3566002020360505",
            // MasterCard
            "5555555555554444",
            "5105105105105100",
            // Visa
            "4111111111111111",
            "4012888888881881",
            "4222222222222",
            // Dankort (PBS)
            "5019717010103742",
            // Switch/Solo (Paymentech)
            "6331101999990016",
        ];
        for credit_card in credit_cards {
            println!("credit card input: {}", credit_card);
            assert!(is_valid_bank_card(credit_card));

            let (split_credit_card, last_digit) = credit_card.split_at(credit_card.len() - 1);
            let mut wrong_credit_card = split_credit_card.to_string();
            wrong_credit_card.push_str(&((last_digit.parse::<u32>().unwrap() + 1) % 10).to_string());

            println!("wrong credit card input: {}", wrong_credit_card);
            assert!(!is_valid_bank_card(&wrong_credit_card));
        }
    }

    #[test]
    fn known_test_numbers() {
        assert!(is_valid_bank_card("4111111111111111"));
        assert!(!is_valid_bank_card("4111111111111112"));
        assert!(!is_valid_bank_card("123"));
    }

    #[test]
    fn length_bounds() {
        assert!(!is_valid_bank_card(&"0".repeat(12)));
        assert!(is_valid_bank_card(&"0".repeat(13)));
        assert!(is_valid_bank_card(&"0".repeat(19)));
        assert!(!is_valid_bank_card(&"0".repeat(20)));
        assert!(!is_valid_bank_card(""));
    }

    #[test]
    fn leading_zeros_are_kept() {
        // Same digits as 4222222222222, shifted by leading zeros, still a valid checksum
        assert!(is_valid_bank_card("0004222222222222"));
        assert!(!is_valid_bank_card("0004222222222223"));
    }

    #[test]
    fn non_digit_characters_are_rejected() {
        let invalid = vec![
            "4111 1111 1111 1111",
            "4111-1111-1111-1111",
            "+4111111111111111",
            "-4111111111111111",
            "411111111111111.0",
            "4111111111111111 ",
            "411111111111111X",
            // Fullwidth digits
            "４１１１１１１１１１１１１１１１",
            "411111111111🎅11",
        ];
        for credit_card in invalid {
            println!("credit card input: {}", credit_card);
            assert!(!is_valid_bank_card(credit_card));
        }
    }

    #[test]
    fn exactly_one_check_digit_is_valid() {
        for length in 13..=19 {
            let payload: String = (0..length - 1)
                .map(|i| char::from(b'0' + ((i * 7 + length) % 10) as u8))
                .collect();
            let expected = expected_check_digit(&payload);

            for check_digit in 0..10 {
                let card_number = format!("{payload}{check_digit}");
                assert_eq!(
                    BankCardChecksum.is_valid_match(&card_number),
                    check_digit == expected,
                    "input: {card_number}"
                );
            }
        }
    }
}
