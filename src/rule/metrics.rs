use crate::rule::config::TextFormat;
use crate::Labels;
use metrics::{counter, Counter};

pub struct RuleMetrics {
    pub checks: Counter,
    pub rejections: Counter,
}

const FORMAT: &str = "format";

impl RuleMetrics {
    pub fn new(labels: &Labels, format: &TextFormat) -> Self {
        let rule_labels = labels.clone_with_labels(&[(FORMAT, format.name())]);
        RuleMetrics {
            checks: counter!("validation.checks", rule_labels.clone()),
            rejections: counter!("validation.rejections", rule_labels),
        }
    }
}
