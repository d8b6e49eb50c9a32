use lazy_static::lazy_static;
use metrics::{counter, gauge, Counter, Gauge};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

pub struct Stats {
    pub rule_creations: Counter,
    pub rule_deletions: Counter,

    // Number of caller supplied patterns currently kept compiled
    cached_patterns: Gauge,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            rule_creations: counter!("rule.creations"),
            rule_deletions: counter!("rule.deletions"),
            cached_patterns: gauge!("pattern_cache.size"),
        }
    }

    pub fn set_cached_patterns(&self, count: u64) {
        self.cached_patterns.set(count as f64);
    }
}
