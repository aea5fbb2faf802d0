use std::fs;
use std::path::{Path, PathBuf};

use certora_build::model::BuildResult;
use certora_build::report::Report;

fn result_with_exit(code: i32) -> BuildResult {
    BuildResult {
        stdout_log: Some(PathBuf::from("/tmp/certora_build_a.stdout")),
        stderr_log: Some(PathBuf::from("/tmp/certora_build_a.stderr")),
        exit_code: code,
    }
}

#[test]
fn success_tracks_exit_code() {
    let report = Report::new(Path::new("/proj"), &result_with_exit(0));
    assert!(report.success);
    assert_eq!(report.return_code, 0);

    let report = Report::new(Path::new("/proj"), &result_with_exit(101));
    assert!(!report.success);
    assert_eq!(report.return_code, 101);
}

#[test]
fn sources_and_executables_are_fixed() {
    let a = Report::new(Path::new("/proj"), &result_with_exit(0));
    let b = Report::new(Path::new("/other"), &result_with_exit(3));

    assert_eq!(a.sources, vec!["src/**/*.rs"]);
    assert_eq!(a.sources, b.sources);
    assert_eq!(
        a.executables,
        "../../target/sbf-solana-solana/release/vault_application.so"
    );
    assert_eq!(a.executables, b.executables);
}

#[test]
fn json_matches_prover_schema() {
    let report = Report::new(Path::new("/proj"), &result_with_exit(0));
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["project_directory"], "/proj");
    assert_eq!(value["sources"][0], "src/**/*.rs");
    assert_eq!(value["success"], true);
    assert_eq!(value["return_code"], 0);
    assert_eq!(value["log"]["stdout"], "/tmp/certora_build_a.stdout");
    assert_eq!(value["log"]["stderr"], "/tmp/certora_build_a.stderr");
}

#[test]
fn live_mode_logs_serialize_as_null() {
    let result = BuildResult {
        stdout_log: None,
        stderr_log: None,
        exit_code: 0,
    };
    let report = Report::new(Path::new("/proj"), &result);
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert!(value["log"]["stdout"].is_null());
    assert!(value["log"]["stderr"].is_null());
}

#[test]
fn file_and_console_render_identically() {
    let report = Report::new(Path::new("/proj"), &result_with_exit(0));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    report.write_to_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report.to_json().unwrap());
}

#[test]
fn write_replaces_existing_content() {
    let report = Report::new(Path::new("/proj"), &result_with_exit(0));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    fs::write(&path, "stale content").unwrap();
    report.write_to_file(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), report.to_json().unwrap());
}
