use crate::validation::PatternError;
use thiserror::Error;

impl From<CreateRuleError> for i64 {
    fn from(value: CreateRuleError) -> i64 {
        match value {
            CreateRuleError::InvalidPattern(_) => -2,
            CreateRuleError::InvalidStandardPatterns(_) => -3,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CreateRuleError {
    /// The pattern of a `TextFormat::Pattern` rule is invalid (bad syntax, too complex, etc.)
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    /// One of the built-in patterns could not be compiled
    #[error("Built-in patterns are unavailable: {0}")]
    InvalidStandardPatterns(PatternError),
}
