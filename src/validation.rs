use regex_automata::meta;
use regex_syntax::ast::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("Invalid pattern syntax")]
    InvalidSyntax,

    #[error("The pattern was nested too deeply")]
    ExceededDepthLimit,

    #[error("The pattern has exceeded the complexity limit (i.e. it might be too slow)")]
    TooComplex,
}

const PATTERN_COMPLEXITY_LIMIT: usize = 1_000_000;
const PATTERN_NEST_LIMIT: u32 = 500;
// `^(?:input)$` nests the input two levels deeper: the concatenation with the anchors,
// then the group. `check_syntax` already enforced the limit on the input itself.
const ANCHORING_NEST_DEPTH: u32 = 2;

/// Checks that a pattern can be used for full-string matching
pub fn validate_pattern(input: &str) -> Result<(), PatternError> {
    // Same as `validate_and_create_pattern`, without exposing the regex engine type.
    validate_and_create_pattern(input).map(|_| ())
}

/// Compiles `input` so that a match always spans the whole text, as if the pattern
/// was written `^(?:input)$`.
pub fn validate_and_create_pattern(input: &str) -> Result<meta::Regex, PatternError> {
    // The raw pattern is parsed first, so that a malformed pattern can't change meaning
    // once it is wrapped in the anchoring group.
    check_syntax(input)?;

    let anchored_pattern = format!("^(?:{input})$");

    meta::Builder::new()
        .configure(
            meta::Config::new()
                .nfa_size_limit(Some(PATTERN_COMPLEXITY_LIMIT))
                .hybrid_cache_capacity(2 * (1 << 20)),
        )
        .syntax(
            regex_automata::util::syntax::Config::default()
                .dot_matches_new_line(false)
                .unicode(true)
                .nest_limit(PATTERN_NEST_LIMIT + ANCHORING_NEST_DEPTH),
        )
        .build(&anchored_pattern)
        .map_err(|regex_err| {
            if regex_err.size_limit().is_some() {
                PatternError::TooComplex
            } else {
                PatternError::InvalidSyntax
            }
        })
}

fn check_syntax(input: &str) -> Result<(), PatternError> {
    regex_syntax::ParserBuilder::new()
        .nest_limit(PATTERN_NEST_LIMIT)
        .build()
        .parse(input)
        .map(|_| ())
        .map_err(|err| match err {
            regex_syntax::Error::Parse(ast_err)
                if matches!(ast_err.kind(), ErrorKind::NestLimitExceeded(_)) =>
            {
                PatternError::ExceededDepthLimit
            }
            _ => PatternError::InvalidSyntax,
        })
}
