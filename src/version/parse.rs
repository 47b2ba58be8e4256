//! Digit-run extraction and normalization
//!
//! Every maximal run of ASCII decimal digits is one component; anything
//! else (letters, punctuation, whitespace) only separates runs:
//! - "1.23.3" -> [1, 23, 3]
//! - "1 dot 23 dot 3" -> [1, 23, 3]
//! - "v2.0.0" -> [2] after normalization

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::version::component::Component;
use crate::version::error::MalformedVersion;

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Extract every digit run in `input` as a component, in order.
pub fn extract_components(input: &str) -> Vec<Component> {
    DIGIT_RUN
        .find_iter(input)
        .map(|run| Component::from_digits(run.as_str()))
        .collect()
}

/// Drop trailing zero components until the last one is nonzero.
pub fn strip_trailing_zeros(mut components: Vec<Component>) -> Vec<Component> {
    while components.last().is_some_and(Component::is_zero) {
        components.pop();
    }
    components
}

/// Reject empty sequences, otherwise return the normalized components.
///
/// `input` is only used for the error.
pub fn normalize(
    components: Vec<Component>,
    input: &str,
) -> Result<Vec<Component>, MalformedVersion> {
    let components = strip_trailing_zeros(components);
    if components.is_empty() {
        warn!("No significant version components in '{}'", input);
        return Err(MalformedVersion::new(input));
    }
    Ok(components)
}

/// Parse free-form text into a normalized, non-empty component list.
pub fn parse_components(input: &str) -> Result<Vec<Component>, MalformedVersion> {
    let components = normalize(extract_components(input), input)?;
    debug!("Parsed '{}' into {:?}", input, components);
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn digits(components: &[Component]) -> Vec<&str> {
        components.iter().map(Component::as_str).collect()
    }

    fn components(digits: &[&str]) -> Vec<Component> {
        digits.iter().map(|d| Component::from_digits(d)).collect()
    }

    #[rstest]
    #[case("1.23.3", &["1", "23", "3"])]
    #[case("1 dot 23 dot 3", &["1", "23", "3"])]
    #[case("v10_2+build7", &["10", "2", "7"])]
    #[case("007.0", &["7", "0"])]
    #[case("fred", &[])]
    #[case("", &[])]
    fn extract_components_splits_on_non_digits(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(digits(&extract_components(input)), expected);
    }

    #[test]
    fn extract_components_ignores_non_ascii_digits() {
        // Arabic-Indic digits are separators, not components
        assert_eq!(digits(&extract_components("1\u{0663}2")), ["1", "2"]);
    }

    #[test]
    fn extract_components_keeps_runs_wider_than_u64() {
        let input = "1.20240101123456789012";
        assert_eq!(
            digits(&extract_components(input)),
            ["1", "20240101123456789012"]
        );
    }

    #[rstest]
    #[case(&["1", "0", "0"], &["1"])]
    #[case(&["1", "2", "0"], &["1", "2"])]
    #[case(&["1", "0", "1"], &["1", "0", "1"])]
    #[case(&["0", "00", "000"], &[])]
    #[case(&[], &[])]
    fn strip_trailing_zeros_keeps_inner_zeros(#[case] input: &[&str], #[case] expected: &[&str]) {
        assert_eq!(digits(&strip_trailing_zeros(components(input))), expected);
    }

    #[rstest]
    #[case("")]
    #[case("fred")]
    #[case("0.0.0")]
    #[case("v0")]
    fn parse_components_rejects_empty_result(#[case] input: &str) {
        assert_eq!(parse_components(input), Err(MalformedVersion::new(input)));
    }
}
