//! A single numeric version component of unbounded size

use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// One non-negative integer component, kept as its decimal digits.
///
/// Leading zeros are stripped on construction (zero is the empty string),
/// so ordering is by digit count first, then digit by digit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Component(String);

pub(crate) static ZERO: Component = Component(String::new());

impl Component {
    /// Build from an ASCII digit run.
    pub(crate) fn from_digits(digits: &str) -> Self {
        Self(digits.trim_start_matches('0').to_string())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Decimal digits without leading zeros ("0" for zero).
    pub fn as_str(&self) -> &str {
        if self.is_zero() { "0" } else { &self.0 }
    }

    /// The value as `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.as_str().parse().ok()
    }
}

impl From<u64> for Component {
    fn from(value: u64) -> Self {
        Self::from_digits(&value.to_string())
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_u64() {
            Some(value) => serializer.serialize_u64(value),
            None => serializer.serialize_str(self.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("007", "7")]
    #[case("000", "0")]
    #[case("10", "10")]
    #[case("00020240101123456789012", "20240101123456789012")]
    fn from_digits_strips_leading_zeros(#[case] digits: &str, #[case] expected: &str) {
        assert_eq!(Component::from_digits(digits).as_str(), expected);
    }

    #[rstest]
    #[case("10", "9", Ordering::Greater)]
    #[case("09", "9", Ordering::Equal)]
    #[case("0", "00", Ordering::Equal)]
    #[case("123", "124", Ordering::Less)]
    #[case("20240101123456789012", "18446744073709551615", Ordering::Greater)]
    fn cmp_is_numeric(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        let left = Component::from_digits(left);
        let right = Component::from_digits(right);
        assert_eq!(left.cmp(&right), expected);
    }

    #[test]
    fn to_u64_only_when_in_range() {
        assert_eq!(Component::from_digits("42").to_u64(), Some(42));
        assert_eq!(Component::from_digits("0").to_u64(), Some(0));
        assert_eq!(Component::from_digits("20240101123456789012").to_u64(), None);
    }

    #[test]
    fn serializes_as_number_or_digit_string() {
        assert_eq!(serde_json::to_value(Component::from(5)).unwrap(), json!(5));
        assert_eq!(
            serde_json::to_value(Component::from_digits("20240101123456789012")).unwrap(),
            json!("20240101123456789012")
        );
    }
}
