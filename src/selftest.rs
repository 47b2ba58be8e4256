//! Built-in self-test
//!
//! A fixed table of checks run against the public [`Version`] API, used by
//! `version-gate self-test` to verify a build on the target machine.

use std::cell::Cell;

use serde::Serialize;
use tracing::{debug, warn};

use crate::version::{MalformedVersion, Version};

/// Outcome of a single named check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    /// Why the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub checks: Vec<CheckOutcome>,
}

impl SelfTestReport {
    pub fn passed(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.checks.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn record(&mut self, name: String, result: Result<(), String>) {
        match &result {
            Ok(()) => debug!("Self-test '{}' passed", name),
            Err(detail) => warn!("Self-test '{}' failed: {}", name, detail),
        }
        self.checks.push(CheckOutcome {
            name,
            passed: result.is_ok(),
            detail: result.err(),
        });
    }
}

/// Run every check and collect the outcomes.
pub fn run() -> SelfTestReport {
    let mut report = SelfTestReport::default();

    for (input, expected) in [
        ("1.1", "1.1.0"),
        ("1_1", "1.1.0"),
        ("1+1", "1.1.0"),
        ("1 1", "1.1.0"),
        ("1 . 1", "1.1.0"),
        ("1 dot 1", "1.1.0"),
        ("1.1.1", "1.1.1"),
        ("1.0", "1.0.0"),
        ("1", "1.0.0"),
        ("1.1.1.1", "1.1.1.1"),
    ] {
        report.record(format!("display {:?}", input), check_display(input, expected));
    }

    report.record("reject none".to_string(), check_malformed(None));
    for input in ["", "fred"] {
        report.record(format!("reject {:?}", input), check_malformed(Some(input)));
    }

    for (left, right) in [("1.1.1", "1"), ("1.1", "1"), ("1.10.1", "1.9.1")] {
        report.record(
            format!("{} > {}", left, right),
            check_predicate(left, |v| v.greater_than(right)),
        );
    }
    report.record("1 == 1".to_string(), check_predicate("1", |v| v.equals("1")));

    report.record(
        "1.1.1 between 1 and 2".to_string(),
        check_guard_calls(1, |bump| Version::parse("1.1.1")?.if_between("1", "2", bump)),
    );
    report.record(
        "1.1 greater_or_equal 1.1".to_string(),
        check_guard_calls(1, |bump| Version::parse("1.1")?.if_greater_or_equal("1.1", bump)),
    );
    report.record(
        "1_0 less_than 1.1".to_string(),
        check_guard_calls(1, |bump| Version::parse("1_0")?.if_less_than("1.1", bump)),
    );
    report.record(
        "1 greater_than 2 skips".to_string(),
        check_guard_calls(0, |bump| Version::parse("1")?.if_greater_than("2", bump)),
    );

    report
}

fn check_display(input: &str, expected: &str) -> Result<(), String> {
    let version = Version::parse(input).map_err(|e| e.to_string())?;
    let actual = version.to_string();
    if actual != expected {
        return Err(format!("expected {:?}, got {:?}", expected, actual));
    }
    Ok(())
}

fn check_malformed(input: Option<&str>) -> Result<(), String> {
    match Version::new(input) {
        Err(_) => Ok(()),
        Ok(version) => Err(format!("expected MalformedVersion, got {}", version)),
    }
}

fn check_predicate(
    input: &str,
    predicate: impl FnOnce(&Version) -> Result<bool, MalformedVersion>,
) -> Result<(), String> {
    let version = Version::parse(input).map_err(|e| e.to_string())?;
    match predicate(&version) {
        Ok(true) => Ok(()),
        Ok(false) => Err("predicate did not hold".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

fn check_guard_calls(
    expected: usize,
    guard: impl FnOnce(&dyn Fn()) -> Result<Option<()>, MalformedVersion>,
) -> Result<(), String> {
    let calls = Cell::new(0);
    let bump = || calls.set(calls.get() + 1);
    guard(&bump).map_err(|e| e.to_string())?;
    if calls.get() != expected {
        return Err(format!("expected {} call(s), got {}", expected, calls.get()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_passes_every_check() {
        let report = run();
        let failures: Vec<_> = report.checks.iter().filter(|c| !c.passed).collect();
        assert!(failures.is_empty(), "failed checks: {:?}", failures);
        assert!(report.is_success());
        assert_eq!(report.passed(), report.checks.len());
    }

    #[test]
    fn report_counts_failures() {
        let mut report = SelfTestReport::default();
        report.record("ok".to_string(), Ok(()));
        report.record("bad".to_string(), Err("nope".to_string()));

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert_eq!(report.checks[1].detail.as_deref(), Some("nope"));
    }

    #[test]
    fn guard_check_detects_wrong_call_count() {
        let result = check_guard_calls(1, |bump| Version::parse("1")?.if_greater_than("2", bump));
        assert_eq!(result, Err("expected 1 call(s), got 0".to_string()));
    }
}
