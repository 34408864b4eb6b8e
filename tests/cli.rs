//! Integration tests for the picklist binary.

use std::process::Command;

fn run_command(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .arg("run")
        .arg("-q")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn temp_path(tag: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "picklist_cli_{}_{}_{:?}.csv",
        tag,
        std::process::id(),
        std::thread::current().id(),
    ))
}

#[test]
fn test_default_run_reports_range_and_rule() {
    let (stdout, _, code) = run_command(&[]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 9 values to A1:A9: 1, 2, 3, 4, 5, 6, 7, 8, 9"));
    assert!(stdout.contains("B1 accepts: 1, 2, 3, 4, 5, 6, 7, 8, 9"));
}

#[test]
fn test_custom_values_and_cells() {
    let (stdout, _, code) = run_command(&["-v", "red,green,blue", "-a", "C2", "-t", "D1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Wrote 3 values to C2:C4: red, green, blue"));
    assert!(stdout.contains("D1 accepts: red, green, blue"));
}

#[test]
fn test_output_csv_contains_sequence() {
    let output_file = temp_path("output");
    let path = output_file.to_str().unwrap();

    let (stdout, _, code) = run_command(&["-o", path]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Sheet written to"));

    let content = std::fs::read_to_string(&output_file).unwrap();
    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows, ["1", "2", "3", "4", "5", "6", "7", "8", "9"]);

    std::fs::remove_file(&output_file).ok();
}

#[test]
fn test_loaded_csv_cells_survive_populate() {
    let input_file = temp_path("input");
    let output_file = temp_path("merged");
    std::fs::write(&input_file, "old,hello\n").unwrap();

    let (stdout, _, code) = run_command(&[
        input_file.to_str().unwrap(),
        "-o",
        output_file.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("B1 accepts: 1, 2, 3, 4, 5, 6, 7, 8, 9"));

    // A1 was overwritten by the sequence; the unrelated B1 value survived.
    let content = std::fs::read_to_string(&output_file).unwrap();
    let first_row = content.lines().next().unwrap();
    assert_eq!(first_row, "1,hello");

    std::fs::remove_file(&input_file).ok();
    std::fs::remove_file(&output_file).ok();
}

#[test]
fn test_invalid_target_cell_fails() {
    let (_, stderr, code) = run_command(&["-t", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("bad target cell"));
}

#[test]
fn test_anchor_too_deep_for_values_fails() {
    let (_, stderr, code) = run_command(&["-a", "A18446744073709551615"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Invalid range"));
}

#[test]
fn test_empty_value_list_fails() {
    let (_, stderr, code) = run_command(&["-v", ","]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Value list is empty"));
}

#[test]
fn test_unknown_option_fails() {
    let (_, stderr, code) = run_command(&["--bogus"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown option"));
}
