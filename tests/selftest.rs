use version_gate::selftest;

#[test]
fn self_test_succeeds() {
    let report = selftest::run();

    assert!(report.is_success(), "{:?}", report);
    assert_eq!(report.failed(), 0);
    assert!(report.passed() > 0);
}

#[test]
fn self_test_report_serializes_to_json() {
    let report = selftest::run();
    let value = serde_json::to_value(&report).unwrap();

    let checks = value["checks"].as_array().unwrap();
    assert_eq!(checks.len(), report.checks.len());
    assert!(checks.iter().all(|c| c["passed"] == true));
    assert!(checks.iter().all(|c| c.get("detail").is_none()));
}
