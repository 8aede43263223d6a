//! Integration tests for directory conversion
//!
//! These tests build small input directories on disk and check the sorted
//! output files, both through the library API and through the binary.

use address_sort::Error;
use address_sort::app::services::batch_converter::{BatchConverter, FileStatus};
use address_sort::{Config, PhaseOrdering};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Input directory with the given files and a not-yet-created output directory
fn setup(files: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input");
    fs::create_dir_all(&input).unwrap();
    for (name, content) in files {
        fs::write(input.join(name), content).unwrap();
    }
    let output = temp_dir.path().join("output");
    (temp_dir, input, output)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

fn run_binary(args: &[&str], cwd: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_address-sort"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run address-sort binary")
}

/// Test the documented walk order for a single phase
///
/// Purpose: Street name is compared before house number, numbers compare by value
#[test]
fn test_street_then_house_number_order() {
    let (_temp, input, output) = setup(&[(
        "route.csv",
        "address,phase\n10 Oak St,1\n2 Oak St,1\n5 Elm St,1\n",
    )]);

    let report = BatchConverter::new(Config::new(&input, &output)).run().unwrap();

    assert!(report.is_success());
    assert_eq!(
        read(&output.join("route.csv")),
        "address,phase\n5 Elm St,1\n2 Oak St,1\n10 Oak St,1\n"
    );
}

/// Test a realistic multi-phase file with extra columns
///
/// Purpose: Phase is the primary key, numberless addresses sort first on
/// their street, leading zeros are ignored and extra columns travel with rows
#[test]
fn test_multi_phase_file_with_extra_columns() {
    let input_csv = "\
id,owner,address,phase,notes
1,Ada,12 High St,2,
2,Ben,Main St,1,no number
3,Cy,007 Main St,1,\"gate code, 4411\"
4,Di,3 High St,2,
5,Ed,1 Main St,1,
6,Fay,3 High St,2,second unit
";
    let (_temp, input, output) = setup(&[("phased.csv", input_csv)]);

    BatchConverter::new(Config::new(&input, &output)).run().unwrap();

    let expected = "\
id,owner,address,phase,notes
2,Ben,Main St,1,no number
5,Ed,1 Main St,1,
3,Cy,007 Main St,1,\"gate code, 4411\"
4,Di,3 High St,2,
6,Fay,3 High St,2,second unit
1,Ada,12 High St,2,
";
    assert_eq!(read(&output.join("phased.csv")), expected);
}

/// Test that sorting already sorted output changes nothing
#[test]
fn test_sorting_is_idempotent() {
    let (temp, input, output) = setup(&[(
        "route.csv",
        "phase,address\n2,9 Birch Rd\n1,4 Ash Ln\n1,Ash Ln\n2,1 Birch Rd\n",
    )]);

    BatchConverter::new(Config::new(&input, &output)).run().unwrap();
    let first = read(&output.join("route.csv"));

    let second_output = temp.path().join("second");
    BatchConverter::new(Config::new(&output, &second_output))
        .run()
        .unwrap();

    assert_eq!(read(&second_output.join("route.csv")), first);
}

/// Test that one bad file does not stop the batch
///
/// Purpose: Per-file errors are reported in the outcome and other files convert
#[test]
fn test_bad_file_is_isolated() {
    let (_temp, input, output) = setup(&[
        ("a_good.csv", "phase,address\n2,1 B St\n1,1 A St\n"),
        ("b_no_phase.csv", "address\n1 A St\n"),
        ("c_good.csv", "phase,address\n1,3 C St\n1,2 C St\n"),
    ]);

    let report = BatchConverter::new(Config::new(&input, &output)).run().unwrap();

    assert_eq!(report.files.len(), 3);
    assert_eq!(report.files_converted(), 2);
    assert_eq!(report.files_failed(), 1);
    assert_eq!(report.rows_written(), 4);

    match &report.files[1].status {
        FileStatus::Failed { error } => {
            assert!(error.contains("phase"));
            assert!(error.contains("b_no_phase.csv"));
        }
        other => panic!("Expected failure, got {other:?}"),
    }

    assert_eq!(read(&output.join("c_good.csv")), "phase,address\n1,2 C St\n1,3 C St\n");
    assert!(!output.join("b_no_phase.csv").exists());
}

/// Test that a missing input directory aborts the run
#[test]
fn test_missing_input_directory_is_fatal() {
    let temp = TempDir::new().unwrap();
    let config = Config::new(temp.path().join("nope"), temp.path().join("output"));

    let error = BatchConverter::new(config).run().unwrap_err();

    assert!(matches!(error, Error::InputDirectory { .. }));
    assert!(!temp.path().join("output").exists());
}

/// Test that non-numeric phases fall back to text comparison in auto mode
#[test]
fn test_auto_phase_ordering_falls_back_to_lexical() {
    let (_temp, input, output) = setup(&[(
        "phases.csv",
        "phase,address\n10,1 A St\nB,1 A St\n9,1 A St\n",
    )]);

    BatchConverter::new(Config::new(&input, &output)).run().unwrap();

    assert_eq!(
        read(&output.join("phases.csv")),
        "phase,address\n10,1 A St\n9,1 A St\nB,1 A St\n"
    );
}

/// Test numeric phases compare by value in auto mode and as text in lexical mode
#[test]
fn test_numeric_and_lexical_phase_ordering() {
    let content = "phase,address\n10,1 A St\n9,1 A St\n";
    let (temp, input, output) = setup(&[("phases.csv", content)]);

    BatchConverter::new(Config::new(&input, &output)).run().unwrap();
    assert_eq!(
        read(&output.join("phases.csv")),
        "phase,address\n9,1 A St\n10,1 A St\n"
    );

    let lexical_output = temp.path().join("lexical");
    let config =
        Config::new(&input, &lexical_output).with_phase_ordering(PhaseOrdering::Lexical);
    BatchConverter::new(config).run().unwrap();
    assert_eq!(
        read(&lexical_output.join("phases.csv")),
        "phase,address\n10,1 A St\n9,1 A St\n"
    );
}

/// Test the binary with default directories relative to the working directory
#[test]
fn test_binary_bare_invocation() {
    let (temp, _input, output) = setup(&[(
        "route.csv",
        "address,phase\n10 Oak St,1\n2 Oak St,1\n5 Elm St,1\n",
    )]);

    let result = run_binary(&[], temp.path());

    assert_eq!(result.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Processed and saved:"));
    assert!(stdout.contains("All files have been processed."));
    assert_eq!(
        read(&output.join("route.csv")),
        "address,phase\n5 Elm St,1\n2 Oak St,1\n10 Oak St,1\n"
    );
}

/// Test the binary exit status when a file fails
#[test]
fn test_binary_reports_file_failures() {
    let (temp, input, output) = setup(&[
        ("good.csv", "phase,address\n1,1 A St\n"),
        ("bad.csv", "phase,address\n1,\n"),
    ]);

    let result = run_binary(
        &[
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ],
        temp.path(),
    );

    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("bad.csv"));
    assert!(output.join("good.csv").exists());
}

/// Test the binary exit status for a fatal error
#[test]
fn test_binary_missing_input_directory() {
    let temp = TempDir::new().unwrap();

    let result = run_binary(&["--input", "absent"], temp.path());

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Error:"));
}

/// Test the JSON report and dry run together
#[test]
fn test_binary_dry_run_json_report() {
    let (temp, input, output) = setup(&[("route.csv", "phase,address\n1,1 A St\n")]);

    let result = run_binary(
        &[
            "-i",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--dry-run",
            "--output-format",
            "json",
        ],
        temp.path(),
    );

    assert_eq!(result.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["files"][0]["file"], "route.csv");
    assert_eq!(report["files"][0]["status"], "planned");
    assert!(!output.exists());
}
