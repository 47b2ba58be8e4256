//! Parse free-form numeric version strings and gate behavior on version
//! thresholds.
//!
//! ```
//! use version_gate::Version;
//!
//! let version = Version::parse("1 dot 10").unwrap();
//! assert_eq!(version.to_string(), "1.10.0");
//! assert!(version.greater_than("1.9").unwrap());
//!
//! let ran = version.if_between("1", "2", || "gated").unwrap();
//! assert_eq!(ran, Some("gated"));
//! ```

pub mod check;
pub mod config;
pub mod logging;
pub mod selftest;
pub mod version;

pub use version::{Component, IntoVersion, MalformedVersion, Version};
