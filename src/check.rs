//! Threshold checks behind `version-gate check` and `compare`

use std::cmp::Ordering;

use clap::Args;
use tracing::debug;

use crate::version::{MalformedVersion, Version};

/// Bounds a version must satisfy; unset bounds are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct Bounds {
    /// Require version > V
    #[arg(long, value_name = "V")]
    pub gt: Option<String>,
    /// Require version >= V
    #[arg(long, value_name = "V")]
    pub ge: Option<String>,
    /// Require version < V
    #[arg(long, value_name = "V")]
    pub lt: Option<String>,
    /// Require version <= V
    #[arg(long, value_name = "V")]
    pub le: Option<String>,
    /// Require MIN <= version <= MAX
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"])]
    pub between: Option<Vec<String>>,
}

impl Bounds {
    /// True iff every set bound holds; each one is evaluated through its guard.
    ///
    /// With no bounds set this is vacuously true.
    pub fn satisfied_by(&self, version: &Version) -> Result<bool, MalformedVersion> {
        let mut held = 0;
        let mut bounds = 0;

        if let Some(v) = &self.gt {
            bounds += 1;
            version.if_greater_than(v, || held += 1)?;
        }
        if let Some(v) = &self.ge {
            bounds += 1;
            version.if_greater_or_equal(v, || held += 1)?;
        }
        if let Some(v) = &self.lt {
            bounds += 1;
            version.if_less_than(v, || held += 1)?;
        }
        if let Some(v) = &self.le {
            bounds += 1;
            version.if_less_or_equal(v, || held += 1)?;
        }
        if let Some([min, max]) = self.between.as_deref() {
            bounds += 1;
            version.if_between(min, max, || held += 1)?;
        }

        debug!("{} of {} bound(s) held for {}", held, bounds, version);
        Ok(held == bounds)
    }
}

/// `<`, `=` or `>`
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}
