use crate::pattern::Pattern;
use crate::validation::PatternError;
use lazy_static::lazy_static;

pub const IDENTIFICATION_NUMBER_PATTERN: &str = "^[0-9]{15}$|^[0-9]{18}$|^[0-9]{17}([0-9]|X|x)$";
pub const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}";
pub const NUMBER_PATTERN: &str = r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?";
pub const LOWERCASE_PATTERN: &str = "^[a-z]+$";
pub const CAPITALIZED_PATTERN: &str = "^[A-Z]+$";
pub const PRICE_PATTERN: &str = r"^\d*\.?\d{0,2}$";
pub const MOBILE_PHONE_PATTERN: &str = "^(1[0-9][0-9])[0-9]{8}$";
pub const VERIFICATION_CODE_PATTERN: &str = "^[0-9]{6}$";
pub const TRUE_NAME_PATTERN: &str = r"^[\x{4e00}-\x{9fa5}]{2,}$";
pub const PURE_ENGLISH_PATTERN: &str = "^[a-zA-Z]+$";
pub const PURE_ENGLISH_OR_INT_PATTERN: &str = "^[a-zA-Z]+$|^[0-9]+$";

/// The patterns every format check relies on, compiled once and shared.
pub struct StandardPatterns {
    pub identification_number: Pattern,
    pub email: Pattern,
    pub number: Pattern,
    pub lowercase: Pattern,
    pub capitalized: Pattern,
    pub price: Pattern,
    pub mobile_phone: Pattern,
    pub verification_code: Pattern,
    pub true_name: Pattern,
    pub pure_english: Pattern,
    pub pure_english_or_int: Pattern,
}

impl StandardPatterns {
    fn compile() -> Result<Self, PatternError> {
        Ok(Self {
            identification_number: Pattern::new(IDENTIFICATION_NUMBER_PATTERN)?,
            email: Pattern::new(EMAIL_PATTERN)?,
            number: Pattern::new(NUMBER_PATTERN)?,
            lowercase: Pattern::new(LOWERCASE_PATTERN)?,
            capitalized: Pattern::new(CAPITALIZED_PATTERN)?,
            price: Pattern::new(PRICE_PATTERN)?,
            mobile_phone: Pattern::new(MOBILE_PHONE_PATTERN)?,
            verification_code: Pattern::new(VERIFICATION_CODE_PATTERN)?,
            true_name: Pattern::new(TRUE_NAME_PATTERN)?,
            pure_english: Pattern::new(PURE_ENGLISH_PATTERN)?,
            pure_english_or_int: Pattern::new(PURE_ENGLISH_OR_INT_PATTERN)?,
        })
    }
}

lazy_static! {
    static ref STANDARD_PATTERNS: Result<StandardPatterns, PatternError> =
        StandardPatterns::compile();
}

/// Forces compilation of the standard patterns and reports whether it succeeded.
///
/// Rule construction calls this so a broken pattern shows up as a configuration error
/// instead of every check silently failing.
pub fn ensure_standard_patterns() -> Result<(), PatternError> {
    (*STANDARD_PATTERNS).as_ref().map(|_| ()).map_err(Clone::clone)
}

/// Runs `check` against the standard patterns, or returns `false` if they are unavailable.
pub(crate) fn with_standard_patterns(check: impl FnOnce(&StandardPatterns) -> bool) -> bool {
    (*STANDARD_PATTERNS).as_ref().map(check).unwrap_or(false)
}
