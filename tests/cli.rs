use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

fn version_gate() -> Command {
    Command::cargo_bin("version-gate").unwrap()
}

#[rstest]
#[case("1.1.1", "1", ">")]
#[case("1.0", "1", "=")]
#[case("1.9.1", "1.10.1", "<")]
#[case("1.20240101123456789012", "1.9", ">")]
fn compare_prints_ordering_symbol(#[case] left: &str, #[case] right: &str, #[case] symbol: &str) {
    version_gate()
        .args(["compare", left, right])
        .assert()
        .success()
        .stdout(format!("{}\n", symbol));
}

#[rstest]
#[case(&["1.5", "--ge", "1", "--lt", "2"], 0)]
#[case(&["2", "--ge", "1", "--lt", "2"], 1)]
#[case(&["1", "--gt", "2"], 1)]
#[case(&["1", "--between", "1", "2"], 0)]
#[case(&["2.0.0", "--between", "1", "2"], 0)]
#[case(&["2.0.1", "--between", "1", "2"], 1)]
fn check_exits_zero_only_when_every_bound_holds(#[case] args: &[&str], #[case] code: i32) {
    version_gate()
        .arg("check")
        .args(args)
        .assert()
        .code(code)
        .stdout(if code == 0 { "true\n" } else { "false\n" });
}

#[rstest]
#[case(&["parse", "fred"])]
#[case(&["compare", "1", "0.0.0"])]
#[case(&["check", "1", "--le", "nope"])]
fn malformed_input_exits_with_code_two(#[case] args: &[&str]) {
    version_gate()
        .args(args)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Malformed version"));
}

#[test]
fn parse_prints_canonical_form_and_components() {
    version_gate()
        .args(["parse", "1 dot 02"])
        .assert()
        .success()
        .stdout("1.2.0 [1, 2]\n");
}

#[test]
fn json_format_outputs_objects() {
    let output = version_gate()
        .args(["--format", "json", "parse", "v3.0.7"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "version": "3.0.7", "components": [3, 0, 7] })
    );

    let output = version_gate()
        .args(["check", "2", "--gt", "1", "--format", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "satisfied": true }));

    version_gate()
        .args(["--format", "json", "compare", "1", "2"])
        .assert()
        .success()
        .stdout("{\"ordering\":\"<\"}\n");
}

#[test]
fn config_file_sets_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, r#"{ "output": { "format": "json" } }"#).unwrap();

    version_gate()
        .arg("--config")
        .arg(&path)
        .args(["compare", "2", "1"])
        .assert()
        .success()
        .stdout("{\"ordering\":\">\"}\n");
}

#[test]
fn self_test_passes() {
    version_gate()
        .arg("self-test")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));
}
