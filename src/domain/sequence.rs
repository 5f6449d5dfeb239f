//! Parsing integer sequences from text.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::error::DomainError;

fn separator_regex() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[\s,;]+").expect("valid separator regex"))
}

/// Parse a sequence like `3, 2, 1`, `[3 2 1]` or `3;2;1`.
///
/// Blank input and `[]` give an empty sequence.
pub fn parse_sequence(input: &str) -> Result<Vec<i64>, DomainError> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed);

    separator_regex()
        .split(inner.trim())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i64>().map_err(|_| DomainError::InvalidValue {
                token: token.to_string(),
                position,
            })
        })
        .collect()
}

/// Builders accept duplicates, but callers are expected to avoid them.
pub fn has_duplicates(values: &[i64]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|v| !seen.insert(*v))
}
