use crate::pattern::Pattern;
use crate::stats::GLOBAL_STATS;
use crate::validation::PatternError;
use lazy_static::lazy_static;
use moka::sync::Cache;

// Caller supplied patterns are unbounded, so only the most recently used ones are kept.
const MAX_CACHED_PATTERNS: u64 = 1_000;

lazy_static! {
    static ref PATTERN_STORE: Cache<String, Pattern> = Cache::new(MAX_CACHED_PATTERNS);
}

pub fn get_memoized_pattern(pattern: &str) -> Result<Pattern, PatternError> {
    get_memoized_pattern_with_custom_store(pattern, &PATTERN_STORE)
}

fn get_memoized_pattern_with_custom_store(
    pattern: &str,
    store: &Cache<String, Pattern>,
) -> Result<Pattern, PatternError> {
    if let Some(existing_pattern) = store.get(pattern) {
        return Ok(existing_pattern);
    }

    // Invalid patterns are never cached, every call reports the error again.
    let compiled = Pattern::new(pattern)?;
    store.insert(pattern.to_owned(), compiled.clone());
    GLOBAL_STATS.set_cached_patterns(cached_pattern_count(store));
    Ok(compiled)
}

// The cache applies inserts and evictions lazily, they are flushed so the count is exact
fn cached_pattern_count(store: &Cache<String, Pattern>) -> u64 {
    store.run_pending_tasks();
    store.entry_count()
}
