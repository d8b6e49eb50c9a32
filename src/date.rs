use chrono::NaiveDate;

/// Fixed, separator-free layouts a date string can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `yyyyMMdd`, e.g. `19491231`
    #[default]
    YearMonthDay,
}

impl DateFormat {
    fn digit_count(self) -> usize {
        match self {
            DateFormat::YearMonthDay => 8,
        }
    }
}

/// Reports whether `input` is exactly `format` and denotes a day that exists in the
/// proleptic Gregorian calendar.
pub fn is_valid_calendar_date(input: &str, format: DateFormat) -> bool {
    parse_calendar_date(input, format).is_some()
}

pub fn parse_calendar_date(input: &str, format: DateFormat) -> Option<NaiveDate> {
    // Signs, whitespace and non-ASCII digits are all rejected here, so the fixed
    // byte offsets below always fall on character boundaries.
    if input.len() != format.digit_count() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match format {
        DateFormat::YearMonthDay => {
            let year: i32 = input[0..4].parse().ok()?;
            let month: u32 = input[4..6].parse().ok()?;
            let day: u32 = input[6..8].parse().ok()?;

            // There is no year zero in the Gregorian calendar
            if year == 0 {
                return None;
            }
            NaiveDate::from_ymd_opt(year, month, day)
        }
    }
}
