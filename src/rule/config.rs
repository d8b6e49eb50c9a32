use crate::pattern::standard_patterns::ensure_standard_patterns;
use crate::pattern::Pattern;
use crate::rule::compiled::CompiledFormatRule;
use crate::rule::error::CreateRuleError;
use crate::rule::metrics::RuleMetrics;
use crate::stats::GLOBAL_STATS;
use crate::Labels;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use serde_with::DefaultOnNull;
use strum::{EnumIter, IntoStaticStr};

/// The format a rule checks text against
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, IntoStaticStr, EnumIter)]
#[serde(tag = "type")]
pub enum TextFormat {
    BankCard,
    IdentificationNumber,
    Email,
    Number,
    PureInt,
    Lowercase,
    Capitalized,
    Price,
    MobilePhone,
    VerificationCode,
    TrueName,
    ContainsChinese,
    PureEnglish,
    PureEnglishOrInt,
    IncludesEmoji,
    Date,
    /// Full-string match against a caller supplied pattern
    Pattern { pattern: String },
}

impl TextFormat {
    /// Stable name of the format, used as the `format` metric label
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FormatRuleConfig {
    pub format: TextFormat,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub labels: Labels,
}

impl FormatRuleConfig {
    pub fn new(format: TextFormat) -> Self {
        Self {
            format,
            labels: Labels::empty(),
        }
    }

    pub fn format(&self, format: TextFormat) -> Self {
        self.mutate_clone(|x| x.format = format)
    }

    pub fn labels(&self, labels: Labels) -> Self {
        self.mutate_clone(|x| x.labels = labels)
    }

    /// Validates the configuration and compiles every pattern the rule needs, so that
    /// a compiled rule can't fail at check time.
    pub fn compile(&self) -> Result<CompiledFormatRule, CreateRuleError> {
        ensure_standard_patterns().map_err(CreateRuleError::InvalidStandardPatterns)?;

        let custom_pattern = match &self.format {
            TextFormat::Pattern { pattern } => Some(Pattern::new(pattern)?),
            _ => None,
        };

        GLOBAL_STATS.rule_creations.increment(1);

        Ok(CompiledFormatRule {
            format: self.format.clone(),
            custom_pattern,
            metrics: RuleMetrics::new(&self.labels, &self.format),
        })
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
