//! CLI integration tests
//!
//! Drive the built `arc4` binary against contract files in a scratch
//! directory.

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn calculator() -> Value {
    json!({
        "name": "calculator",
        "desc": "basic arithmetic",
        "methods": [
            {"name": "sub", "args": [{"type": "uint64", "name": "a"}, {"type": "uint64", "name": "b"}], "returns": {"type": "uint64"}},
            {"name": "add", "args": [{"type": "uint64", "name": "a"}, {"type": "uint64", "name": "b"}], "returns": {"type": "uint128"}}
        ],
        "networks": {"mainnet": {"appID": 1234}}
    })
}

fn write_contract(dir: &TempDir, file: &str, doc: &Value) -> PathBuf {
    let path = dir.path().join(file);
    fs::write(&path, serde_json::to_string(doc).unwrap()).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arc4"))
        .args(["--log-profile", "test"])
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_selector_prints_signature_and_hex() {
    let output = run(&["selector", "add(uint64,uint64)uint128"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "add(uint64,uint64)uint128 0x8aa3b61f");
}

#[test]
fn test_selector_rejects_malformed_signature() {
    let output = run(&["selector", "add(uint64"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
}

#[test]
fn test_method_prints_json() {
    let output = run(&["method", "noop()void"]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value, json!({"name": "noop", "args": [], "returns": {"type": "void"}}));
}

#[test]
fn test_canonicalize_sorts_methods() {
    let dir = TempDir::new().unwrap();
    let path = write_contract(&dir, "calc.json", &calculator());

    let output = run(&["canonicalize", path.to_str().unwrap()]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["methods"][0]["name"], "add");
    assert_eq!(value["methods"][1]["name"], "sub");
    assert!(stdout(&output).starts_with(r#"{"name":"calculator","desc":"basic arithmetic""#));
}

#[test]
fn test_lookup_reports_signature() {
    let dir = TempDir::new().unwrap();
    let path = write_contract(&dir, "calc.json", &calculator());

    let output = run(&["lookup", path.to_str().unwrap(), "add"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "add(uint64,uint64)uint128 0x8aa3b61f");

    let output = run(&["lookup", path.to_str().unwrap(), "mul"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_diff_identical_prints_null() {
    let dir = TempDir::new().unwrap();
    let a = write_contract(&dir, "a.json", &calculator());
    let b = write_contract(&dir, "b.json", &calculator());

    let output = run(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "null");
}

#[test]
fn test_diff_reports_network_change() {
    let dir = TempDir::new().unwrap();
    let mut changed = calculator();
    changed["networks"]["mainnet"]["appID"] = json!(99);
    let a = write_contract(&dir, "a.json", &calculator());
    let b = write_contract(&dir, "b.json", &changed);

    let output = run(&["diff", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["networks"]["mainnet"]["appID"], json!([1234, 99]));
    assert_eq!(value["methods"], Value::Null);
}

#[test]
fn test_raw_diff_uses_documents_as_written() {
    let dir = TempDir::new().unwrap();
    let a = write_contract(&dir, "a.json", &json!({"x": 1, "y": [1, 2]}));
    let b = write_contract(&dir, "b.json", &json!({"x": 2, "y": [1, 2]}));

    let output = run(&["diff", "--raw", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert!(output.status.success());
    let value: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value, json!({"x": [1, 2], "y": null}));
}

#[test]
fn test_equiv_exit_codes() {
    let dir = TempDir::new().unwrap();
    let mut renamed = calculator();
    renamed["methods"][0]["args"][0]["name"] = json!("minuend");
    renamed["desc"] = json!("arithmetic");
    let mut retyped = calculator();
    retyped["methods"][1]["returns"]["type"] = json!("uint64");

    let base = write_contract(&dir, "base.json", &calculator());
    let cosmetic = write_contract(&dir, "cosmetic.json", &renamed);
    let breaking = write_contract(&dir, "breaking.json", &retyped);

    let output = run(&["equiv", base.to_str().unwrap(), cosmetic.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "equivalent");

    let output = run(&["equiv", base.to_str().unwrap(), breaking.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "not equivalent");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    let output = run(&["canonicalize", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}
