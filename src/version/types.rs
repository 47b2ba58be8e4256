//! The `Version` value type

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::version::component::{Component, ZERO};
use crate::version::error::MalformedVersion;
use crate::version::like::IntoVersion;
use crate::version::parse::{normalize, parse_components};

/// Minimum number of components in the canonical display form
pub const MIN_DISPLAY_WIDTH: usize = 3;

/// A parsed, normalized numeric version.
///
/// Components are stored most-significant first and never end in zero, so
/// "1", "1.0" and "1.0.0" all hold `[1]` and compare, hash and print alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    components: Vec<Component>,
}

impl Version {
    /// Build a version from any version-like value.
    pub fn new(input: impl IntoVersion) -> Result<Self, MalformedVersion> {
        input.into_version()
    }

    /// Parse free-form text, treating every non-digit as a separator.
    ///
    /// Examples:
    /// - "1.1" -> 1.1.0
    /// - "1 dot 1" -> 1.1.0
    /// - "0.0.0" -> error
    pub fn parse(input: &str) -> Result<Self, MalformedVersion> {
        Ok(Self {
            components: parse_components(input)?,
        })
    }

    /// Build a version from explicit components, applying the same
    /// normalization as parsing.
    pub fn from_components(components: Vec<u64>) -> Result<Self, MalformedVersion> {
        let rendered = components
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        let components = components.into_iter().map(Component::from).collect();
        Ok(Self {
            components: normalize(components, &rendered)?,
        })
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn major(&self) -> &Component {
        self.component(0)
    }

    pub fn minor(&self) -> &Component {
        self.component(1)
    }

    pub fn patch(&self) -> &Component {
        self.component(2)
    }

    /// Component at `index`, zero past the stored length.
    pub fn component(&self, index: usize) -> &Component {
        self.components.get(index).unwrap_or(&ZERO)
    }

    /// Three-way comparison against any version-like value.
    pub fn compare(&self, other: impl IntoVersion) -> Result<Ordering, MalformedVersion> {
        let other = other.into_version()?;
        Ok(self.cmp(&other))
    }

    pub fn equals(&self, other: impl IntoVersion) -> Result<bool, MalformedVersion> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    pub fn greater_than(&self, other: impl IntoVersion) -> Result<bool, MalformedVersion> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    pub fn greater_or_equal(&self, other: impl IntoVersion) -> Result<bool, MalformedVersion> {
        Ok(self.compare(other)? != Ordering::Less)
    }

    pub fn less_than(&self, other: impl IntoVersion) -> Result<bool, MalformedVersion> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn less_or_equal(&self, other: impl IntoVersion) -> Result<bool, MalformedVersion> {
        Ok(self.compare(other)? != Ordering::Greater)
    }
}

impl Ord for Version {
    /// Numeric comparison position by position; the shorter side is padded
    /// with zeros.
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        let ordering = (0..len)
            .map(|i| self.component(i).cmp(other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal);
        trace!("Compared {} with {}: {:?}", self, other, ordering);
        ordering
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.components.len().max(MIN_DISPLAY_WIDTH);
        for i in 0..width {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", self.component(i))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = MalformedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = Version;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a version string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Version::parse(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Version::new(v).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Version::new(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Version::new(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}
