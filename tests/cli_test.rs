use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_project")
}

fn srcprobe() -> Command {
    Command::cargo_bin("srcprobe").unwrap()
}

#[test]
fn test_no_subcommand_prints_help() {
    srcprobe()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("check-config"))
        .stdout(predicate::str::contains("api-routes"));
}

#[test]
fn test_deps_requires_module() {
    srcprobe().arg("deps").assert().failure();
}

#[test]
fn test_deps_command() {
    srcprobe()
        .arg("--root")
        .arg(fixture_root())
        .args(["deps", "--module", "auth"])
        .assert()
        .success()
        .stdout("\nauth depends on:\n  ../db/client\n  ./index\n  jsonwebtoken\n\nImported by:\n  models/user.ts\n  routes/users.ts\n");
}

#[test]
fn test_check_config_missing_file_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();

    srcprobe()
        .current_dir(temp_dir.path())
        .arg("check-config")
        .assert()
        .code(1)
        .stdout("ERROR: src/config.ts not found\n");
}

#[test]
fn test_check_config_degraded_mode_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("src")).unwrap();
    fs::write(
        temp_dir.path().join("src/config.ts"),
        "export const port = process.env.PORT;\n",
    )
    .unwrap();

    srcprobe()
        .current_dir(temp_dir.path())
        .arg("check-config")
        .assert()
        .success()
        .stdout("Config references 1 env vars (no .env.example to check against)\n  PORT\n");
}

#[test]
fn test_find_type_not_found_is_success() {
    srcprobe()
        .arg("--root")
        .arg(fixture_root())
        .args(["find-type", "Missing"])
        .assert()
        .success()
        .stdout("Type 'Missing' not found in src/\n");
}

#[test]
fn test_custom_src_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("lib")).unwrap();
    fs::write(temp_dir.path().join("lib/shape.ts"), "export enum Shape {}\n").unwrap();

    srcprobe()
        .arg("--root")
        .arg(temp_dir.path())
        .args(["--src-dir", "lib", "find-type", "Shape"])
        .assert()
        .success()
        .stdout("lib/shape.ts:1  export enum Shape {}\n");
}

#[test]
fn test_api_routes_json_output() {
    let output = srcprobe()
        .arg("--root")
        .arg(fixture_root())
        .args(["api-routes", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let routes = report["routes"].as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0]["method"], "GET");
    assert_eq!(routes[0]["path"], "/health");
    assert_eq!(routes[2]["method"], "POST");
}

#[test]
fn test_check_config_json_keeps_exit_code() {
    let temp_dir = TempDir::new().unwrap();

    let output = srcprobe()
        .current_dir(temp_dir.path())
        .args(["--json", "check-config"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["status"], "missing_config");
    assert_eq!(report["config_file"], "src/config.ts");
}
