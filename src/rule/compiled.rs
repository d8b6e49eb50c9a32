use crate::pattern::Pattern;
use crate::rule::config::TextFormat;
use crate::rule::metrics::RuleMetrics;
use crate::secondary_validation::Validator;
use crate::stats::GLOBAL_STATS;
use std::fmt;

/// A rule ready to check text. Build it with [`crate::FormatRuleConfig::compile`].
pub struct CompiledFormatRule {
    pub(crate) format: TextFormat,
    // Compiled up-front for `TextFormat::Pattern`, so no pattern lookup happens per check.
    pub(crate) custom_pattern: Option<Pattern>,
    pub(crate) metrics: RuleMetrics,
}

impl CompiledFormatRule {
    pub fn format(&self) -> &TextFormat {
        &self.format
    }

    pub fn is_valid(&self, input: &str) -> bool {
        let is_valid = match &self.custom_pattern {
            Some(pattern) => pattern.is_match(input),
            None => self.format.is_valid_match(input),
        };

        self.metrics.checks.increment(1);
        if !is_valid {
            self.metrics.rejections.increment(1);
        }
        is_valid
    }
}

impl fmt::Debug for CompiledFormatRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledFormatRule")
            .field("format", &self.format)
            .field("custom_pattern", &self.custom_pattern)
            .finish_non_exhaustive()
    }
}

impl Validator for CompiledFormatRule {
    fn is_valid_match(&self, input: &str) -> bool {
        self.is_valid(input)
    }
}

impl Drop for CompiledFormatRule {
    fn drop(&mut self) {
        GLOBAL_STATS.rule_deletions.increment(1);
    }
}
