//! Argument parsing and non-interactive commands.

use clap::Parser;
use roster::cli::{Cli, Commands, cmd_auto, demonstration_employee, normalize_args, write_roster};
use roster_core::{EmployeeContainer, SortKey};

// =============================================================================
// ARGUMENT PARSING
// =============================================================================

#[test]
fn no_command_means_shell() {
    let cli = Cli::try_parse_from(["roster"]).expect("parse");
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn auto_matches_any_casing() {
    for word in ["auto", "AUTO", "Auto", "aUtO"] {
        let cli = Cli::try_parse_normalized(["roster", word]).expect("parse");
        assert!(matches!(cli.command, Some(Commands::Auto { output: None })));
    }
}

#[test]
fn command_casing_folds_after_global_options() {
    let cli = Cli::try_parse_normalized(["roster", "-q", "-c", "AUTO", "Show", "-f", "AUTO"])
        .expect("parse");

    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("AUTO")));
    match cli.command {
        Some(Commands::Show { file, .. }) => assert_eq!(file.to_string_lossy(), "AUTO"),
        other => unreachable!("unexpected command: {:?}", other),
    }
}

#[test]
fn normalize_leaves_unknown_words_alone() {
    let args = normalize_args(["roster", "Automatic"]);
    assert_eq!(args[1], std::ffi::OsString::from("Automatic"));
    assert!(Cli::try_parse_normalized(["roster", "Automatic"]).is_err());
}

#[test]
fn show_arguments() {
    let cli = Cli::try_parse_from([
        "roster", "-q", "show", "-f", "staff.roster", "--sort", "salary", "--json",
    ])
    .expect("parse");

    assert!(cli.quiet);
    match cli.command {
        Some(Commands::Show { file, sort, json }) => {
            assert_eq!(file.to_string_lossy(), "staff.roster");
            assert_eq!(sort, Some(SortKey::Salary));
            assert!(json);
        }
        other => unreachable!("unexpected command: {:?}", other),
    }
}

#[test]
fn unknown_sort_key_rejected() {
    let result = Cli::try_parse_from(["roster", "show", "-f", "x", "--sort", "age"]);
    assert!(result.is_err());
}

// =============================================================================
// AUTO & SHOW
// =============================================================================

#[test]
fn auto_writes_demonstration_roster() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test");

    cmd_auto(&path).expect("auto");

    let roster = EmployeeContainer::deserialize(&path).expect("deserialize");
    assert_eq!(roster.employees(), &[demonstration_employee()]);
    assert_eq!(roster.employees()[0].to_string(), "Passport: XYZ-98765, Salary: 60000.00");
}

#[test]
fn show_as_text() {
    let roster: EmployeeContainer = std::iter::once(demonstration_employee()).collect();
    let mut out = Vec::new();

    write_roster(&mut out, &roster, Some(SortKey::Passport), false).expect("write");

    let text = String::from_utf8(out).expect("utf8");
    assert_eq!(
        text,
        "Passport: XYZ-98765, Salary: 60000.00\nCharacteristic: Experience, Rating: 5.5\n"
    );
}

#[test]
fn show_as_json_keeps_exact_salary() {
    let roster: EmployeeContainer = std::iter::once(demonstration_employee()).collect();
    let mut out = Vec::new();

    write_roster(&mut out, &roster, None, true).expect("write");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("json");
    assert_eq!(value["count"], 1);
    assert_eq!(value["employees"][0]["salary"], "60000.00");
    assert_eq!(value["employees"][0]["characteristics"][0]["property"], "Experience");
    assert_eq!(value["employees"][0]["characteristics"][0]["rating"], 5.5);
}

#[test]
fn show_empty_roster() {
    let mut out = Vec::new();
    write_roster(&mut out, &EmployeeContainer::new(), None, false).expect("write");
    assert_eq!(String::from_utf8(out).expect("utf8"), "No employees.\n");
}
