//! Conditional execution on version thresholds
//!
//! Each guard performs one comparison and runs the action synchronously,
//! at most once, only when the relation holds. `Some(result)` means the
//! action ran; whatever it returns (including its own errors) is handed back
//! untouched. A malformed argument fails before the action can run.

use tracing::debug;

use crate::version::error::MalformedVersion;
use crate::version::like::IntoVersion;
use crate::version::types::Version;

impl Version {
    /// Run `action` iff `self > other`.
    pub fn if_greater_than<R>(
        &self,
        other: impl IntoVersion,
        action: impl FnOnce() -> R,
    ) -> Result<Option<R>, MalformedVersion> {
        let holds = self.greater_than(other)?;
        Ok(run_if("greater_than", self, holds, action))
    }

    /// Run `action` iff `self >= other`.
    pub fn if_greater_or_equal<R>(
        &self,
        other: impl IntoVersion,
        action: impl FnOnce() -> R,
    ) -> Result<Option<R>, MalformedVersion> {
        let holds = self.greater_or_equal(other)?;
        Ok(run_if("greater_or_equal", self, holds, action))
    }

    /// Run `action` iff `self < other`.
    pub fn if_less_than<R>(
        &self,
        other: impl IntoVersion,
        action: impl FnOnce() -> R,
    ) -> Result<Option<R>, MalformedVersion> {
        let holds = self.less_than(other)?;
        Ok(run_if("less_than", self, holds, action))
    }

    /// Run `action` iff `self <= other`.
    pub fn if_less_or_equal<R>(
        &self,
        other: impl IntoVersion,
        action: impl FnOnce() -> R,
    ) -> Result<Option<R>, MalformedVersion> {
        let holds = self.less_or_equal(other)?;
        Ok(run_if("less_or_equal", self, holds, action))
    }

    /// Run `action` iff `min <= self <= max`.
    ///
    /// Both bounds are coerced before either is compared, so a malformed
    /// `max` is reported even when `self < min`.
    pub fn if_between<R>(
        &self,
        min: impl IntoVersion,
        max: impl IntoVersion,
        action: impl FnOnce() -> R,
    ) -> Result<Option<R>, MalformedVersion> {
        let min = min.into_version()?;
        let max = max.into_version()?;
        let holds = *self >= min && *self <= max;
        Ok(run_if("between", self, holds, action))
    }
}

fn run_if<R>(
    relation: &str,
    version: &Version,
    holds: bool,
    action: impl FnOnce() -> R,
) -> Option<R> {
    debug!("Guard {} on {}: {}", relation, version, holds);
    holds.then(action)
}
