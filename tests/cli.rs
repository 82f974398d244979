use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn agecalc_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_agecalc"))
}

fn run(args: &[&str]) -> Output {
    Command::new(agecalc_binary())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run agecalc")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("agecalc.toml");
    fs::write(&path, content).expect("Failed to write config");
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path is not UTF-8")
}

#[test]
fn picked_date_prints_text_card() {
    let output = run(&["age", "--date", "1990-06-15", "--today", "2024-06-10"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("33 years"), "{text}");
    assert!(text.contains("11 months"), "{text}");
    assert!(text.contains("26 days"), "{text}");
    assert!(text.contains("Born on: "), "{text}");
    assert!(text.contains("Friday, June 15th, 1990"), "{text}");
    assert!(!text.contains("Zodiac"), "{text}");
}

#[test]
fn manual_date_omits_born_on_line() {
    let output = run(&[
        "age", "--day", "15", "--month", "6", "--year", "1990", "--today", "2024-06-15",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("34 years"), "{text}");
    assert!(!text.contains("Born on"), "{text}");
}

#[test]
fn impossible_manual_date_exits_with_message() {
    let output = run(&[
        "age", "--day", "31", "--month", "2", "--year", "2020", "--today", "2024-06-10",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());

    let err = stderr(&output);
    assert!(
        err.lines()
            .any(|line| line == "Error: Please enter a valid date: 2/2020 has only 29 days"),
        "stderr: {err}"
    );
}

#[test]
fn future_birth_date_exits_with_message() {
    let output = run(&["age", "--date", "2024-06-11", "--today", "2024-06-10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Date of birth cannot be in the future"));
}

#[test]
fn zodiac_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[form]\nshow_zodiac = false\n");

    let output = run(&[
        "--config",
        path_str(&config),
        "age",
        "--date",
        "2000-02-29",
        "--today",
        "2024-02-28",
        "--zodiac",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("23 years"), "{text}");
    assert!(text.contains("30 days"), "{text}");
    assert!(text.contains("♓ Pisces"), "{text}");
}

#[test]
fn format_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[output]\nformat = \"text\"\n");

    let output = run(&[
        "--config",
        path_str(&config),
        "-f",
        "json",
        "age",
        "--date",
        "2000-02-29",
        "--today",
        "2024-02-28",
        "--zodiac",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("stdout is not JSON");
    assert_eq!(json["birth_date"], "2000-02-29");
    assert_eq!(json["today"], "2024-02-28");
    assert_eq!(json["age"]["years"], 23);
    assert_eq!(json["age"]["months"], 11);
    assert_eq!(json["age"]["days"], 30);
    assert_eq!(json["zodiac"]["name"], "Pisces");
}

#[test]
fn config_enables_zodiac_and_json() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "[form]\nshow_zodiac = true\n\n[output]\nformat = \"json\"\n");

    let output = run(&[
        "--config",
        path_str(&config),
        "age",
        "--date",
        "1990-06-15",
        "--today",
        "2024-06-15",
    ]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["age"]["years"], 34);
    assert_eq!(json["zodiac"]["name"], "Gemini");
}

#[test]
fn reference_date_before_min_year_names_the_date() {
    let output = run(&["age", "--date", "1840-01-01", "--today", "1850-01-01"]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert!(err.contains("reference date 1850-01-01"), "stderr: {err}");
    assert!(!err.contains("config"), "stderr: {err}");
}

#[test]
fn missing_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = run(&["--config", path_str(&missing), "signs"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: loading configuration"));
}

#[test]
fn zodiac_subcommand_and_sign_list() {
    let output = run(&["zodiac", "--month", "3", "--day", "21"]);
    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("♈ Aries"));

    let output = run(&["zodiac", "--month", "2", "--day", "30"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run(&["-f", "json", "signs"]);
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(12));
}
