//! CLI integration tests: run the `mcat` binary end to end.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

use movie_catalog::types::{BUNDLED_MOVIE_COUNT, DATASET_ENV_VAR};

// ==================== CLI Helpers ====================

/// Locate the `mcat` binary built alongside test binaries.
fn mcat_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // test binary name
    path.pop(); // "deps"
    path.push("mcat");
    path
}

/// Run `mcat` with a clean logging and dataset environment.
fn mcat_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(mcat_bin());
    cmd.args(args).env_remove("RUST_LOG").env_remove(DATASET_ENV_VAR);
    cmd
}

fn run_mcat(args: &[&str]) -> Output {
    mcat_command(args).output().expect("Failed to run mcat")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "mcat failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not JSON ({})\nstdout: {}",
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn stderr_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn dataset_file(names: &[&str]) -> NamedTempFile {
    let records: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                r#"{{"id": {}, "movieName": "{}", "director": "d", "year": 2010,
                    "genre": "Drama", "description": "", "duration": 90, "imdbRating": 3.0}}"#,
                i + 1,
                name
            )
        })
        .collect();
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[{}]", records.join(", ")).unwrap();
    file.flush().unwrap();
    file
}

// ==================== Command Tests ====================

#[test]
fn test_cli_list_json() {
    let output = run_mcat(&["--format", "json", "list"]);
    assert_success(&output);

    let body = stdout_json(&output);
    assert_eq!(body["status"], "success");
    assert_eq!(body["count"], BUNDLED_MOVIE_COUNT);
    assert_eq!(body["movies"][0]["movieName"], "The Prison Escape");
}

#[test]
fn test_cli_list_text() {
    let output = run_mcat(&["list"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), BUNDLED_MOVIE_COUNT);
    assert!(stdout.contains("The Prison Escape (1994)"));
}

#[test]
fn test_cli_get_found() {
    let output = run_mcat(&["--format", "json", "get", "1"]);
    assert_success(&output);

    let body = stdout_json(&output);
    assert_eq!(body["status"], "success");
    assert_eq!(body["movie"]["id"], 1);
    assert_eq!(body["movie"]["movieName"], "The Prison Escape");
}

#[test]
fn test_cli_get_not_found() {
    let output = run_mcat(&["--format", "json", "get", "999"]);
    assert_eq!(output.status.code(), Some(4));

    let body = stdout_json(&output);
    assert_eq!(body["status"], "error");
    assert_eq!(body["errorCode"], "MOVIE_NOT_FOUND");

    let text = run_mcat(&["get", "999"]);
    assert_eq!(text.status.code(), Some(4));
    assert!(stderr_str(&text).contains("999"));
}

#[test]
fn test_cli_get_negative_id_is_not_found() {
    let output = run_mcat(&["--format", "json", "get", "-1"]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(stdout_json(&output)["errorCode"], "MOVIE_NOT_FOUND");
}

#[test]
fn test_cli_get_non_numeric_id() {
    let output = run_mcat(&["--format", "json", "get", "abc"]);
    assert_eq!(output.status.code(), Some(5));

    let body = stdout_json(&output);
    assert_eq!(body["status"], "error");
    assert_eq!(body["errorCode"], "INVALID_MOVIE_ID_FORMAT");
}

#[test]
fn test_cli_search_non_numeric_id() {
    let output = run_mcat(&["--format", "json", "search", "--id", "1x"]);
    assert_eq!(output.status.code(), Some(5));
    assert_eq!(stdout_json(&output)["errorCode"], "INVALID_MOVIE_ID_FORMAT");
}

#[test]
fn test_cli_search_without_criteria() {
    let output = run_mcat(&["--format", "json", "search"]);
    assert_eq!(output.status.code(), Some(3));

    let body = stdout_json(&output);
    assert_eq!(body["errorCode"], "INVALID_SEARCH_PARAMETERS");
    assert_eq!(body["validParameters"], serde_json::json!(["name", "id", "genre"]));

    let blank = run_mcat(&["--format", "json", "search", "--name", "  ", "--id", "0"]);
    assert_eq!(blank.status.code(), Some(3));
}

#[test]
fn test_cli_search_by_name() {
    let output = run_mcat(&["--format", "json", "search", "--name", "prison"]);
    assert_success(&output);

    let body = stdout_json(&output);
    assert_eq!(body["count"], 1);
    assert_eq!(body["movies"][0]["id"], 1);
    assert_eq!(body["searchCriteria"]["name"], "prison");
    assert!(body["searchCriteria"].get("id").is_none());
}

#[test]
fn test_cli_search_and_combination() {
    let output = run_mcat(&[
        "--format", "json", "search", "--genre", "drama", "--id", "2",
    ]);
    assert_success(&output);
    let body = stdout_json(&output);
    assert_eq!(body["count"], 1);
    assert_eq!(body["movies"][0]["movieName"], "The Family Boss");
}

#[test]
fn test_cli_info_json() {
    let output = run_mcat(&["--format", "json", "info"]);
    assert_success(&output);
    let body = stdout_json(&output);
    assert_eq!(body["movie_count"], BUNDLED_MOVIE_COUNT);
}

// ==================== Dataset Source Tests ====================

#[test]
fn test_cli_dataset_flag() {
    let file = dataset_file(&["Alpha", "Beta"]);
    let path = file.path().to_str().unwrap();

    let output = run_mcat(&["--format", "json", "--dataset", path, "list"]);
    assert_success(&output);
    let body = stdout_json(&output);
    assert_eq!(body["count"], 2);
    assert_eq!(body["movies"][1]["movieName"], "Beta");
}

#[test]
fn test_cli_env_dataset_override() {
    let file = dataset_file(&["From Env"]);

    let output = mcat_command(&["--format", "json", "list"])
        .env(DATASET_ENV_VAR, file.path())
        .output()
        .unwrap();
    assert_success(&output);
    let body = stdout_json(&output);
    assert_eq!(body["count"], 1);
    assert_eq!(body["movies"][0]["movieName"], "From Env");
}

#[test]
fn test_cli_dataset_flag_beats_env_and_config() {
    let from_config = dataset_file(&["Config One"]);
    let from_env = dataset_file(&["Env One", "Env Two"]);
    let from_flag = dataset_file(&["Flag One", "Flag Two", "Flag Three"]);

    let mut config = NamedTempFile::new().unwrap();
    writeln!(
        config,
        "dataset_path = {:?}",
        from_config.path().to_str().unwrap()
    )
    .unwrap();
    config.flush().unwrap();
    let config_path = config.path().to_str().unwrap();

    let only_config = run_mcat(&["--format", "json", "--config", config_path, "list"]);
    assert_success(&only_config);
    assert_eq!(stdout_json(&only_config)["count"], 1);

    let env_over_config = mcat_command(&["--format", "json", "--config", config_path, "list"])
        .env(DATASET_ENV_VAR, from_env.path())
        .output()
        .unwrap();
    assert_eq!(stdout_json(&env_over_config)["count"], 2);

    let flag_over_all = mcat_command(&[
        "--format",
        "json",
        "--config",
        config_path,
        "--dataset",
        from_flag.path().to_str().unwrap(),
        "list",
    ])
    .env(DATASET_ENV_VAR, from_env.path())
    .output()
    .unwrap();
    assert_eq!(stdout_json(&flag_over_all)["count"], 3);
}

#[test]
fn test_cli_missing_dataset_is_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let output = run_mcat(&[
        "--format",
        "json",
        "--dataset",
        missing.to_str().unwrap(),
        "list",
    ]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["count"], 0);
}

#[test]
fn test_cli_malformed_config_exit_code() {
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"log_level = [").unwrap();
    config.flush().unwrap();

    let output = run_mcat(&["--config", config.path().to_str().unwrap(), "list"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_str(&output).contains("Configuration error"));
}

// ==================== Logging Tests ====================

#[test]
fn test_cli_verbose_enables_debug_logs() {
    let quiet = run_mcat(&["list"]);
    assert_success(&quiet);
    assert!(!stderr_str(&quiet).contains("Decoded 12 movies"));

    let verbose = run_mcat(&["--verbose", "list"]);
    assert_success(&verbose);
    assert!(stderr_str(&verbose).contains("Decoded 12 movies"));
}

#[test]
fn test_cli_config_log_level() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "log_level = \"info\"").unwrap();
    config.flush().unwrap();

    let output = run_mcat(&["--config", config.path().to_str().unwrap(), "list"]);
    assert_success(&output);
    let stderr = stderr_str(&output);
    assert!(stderr.contains("Catalog built with 12 movies"));
    assert!(!stderr.contains("Decoded 12 movies"));
}
