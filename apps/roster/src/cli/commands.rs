//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::shell::{Shell, render};
use roster_core::{Decimal, Employee, EmployeeContainer, Query, RosterError, SortKey};
use std::io::Write;
use std::path::Path;

// =============================================================================
// SHELL COMMAND
// =============================================================================

/// Run the interactive menu on stdin/stdout.
pub fn cmd_shell(preload: Option<&Path>) -> Result<(), RosterError> {
    let stdin = std::io::stdin();
    let (input, output) = (stdin.lock(), std::io::stdout().lock());

    let mut shell = match preload {
        Some(path) => {
            let roster = EmployeeContainer::deserialize(path)?;
            tracing::info!(file = %path.display(), employees = roster.len(), "Roster preloaded");
            Shell::with_roster(input, output, roster)
        }
        None => Shell::new(input, output),
    };
    shell.run()?;

    tracing::info!(employees = shell.roster().len(), "Shell closed");
    Ok(())
}

// =============================================================================
// AUTO COMMAND
// =============================================================================

/// The fixed record written by `auto`.
pub fn demonstration_employee() -> Employee {
    Employee::new("XYZ", "98765", Decimal::new(6_000_000, 2)).with_characteristic("Experience", 5.5)
}

/// Build the demonstration roster and save it to `destination`.
pub fn cmd_auto(destination: &Path) -> Result<(), RosterError> {
    let mut roster = EmployeeContainer::new();
    roster.add_employee(demonstration_employee());

    let bytes = roster.serialize(destination)?;
    tracing::info!(file = %destination.display(), bytes, "Demonstration roster saved");

    println!("Data added and saved to '{}' file.", destination.display());
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Print a saved roster to stdout.
pub fn cmd_show(file: &Path, sort: Option<SortKey>, json_mode: bool) -> Result<(), RosterError> {
    let roster = EmployeeContainer::deserialize(file)?;
    let mut stdout = std::io::stdout().lock();
    write_roster(&mut stdout, &roster, sort, json_mode)
}

/// Write a roster view as text lines or as pretty JSON.
pub fn write_roster<W: Write>(
    out: &mut W,
    roster: &EmployeeContainer,
    sort: Option<SortKey>,
    json_mode: bool,
) -> Result<(), RosterError> {
    let view: Vec<&Employee> = match sort {
        Some(key) => roster.execute(&Query::Sorted(key)),
        None => roster.iter().collect(),
    };

    let text = if json_mode {
        serde_json::to_string_pretty(&employees_json(&view))
            .map_err(|e| RosterError::Io(format!("JSON encoding: {}", e)))?
    } else {
        render(view).join("\n")
    };

    writeln!(out, "{}", text).map_err(|e| RosterError::Io(e.to_string()))
}

/// JSON form of a roster view. Salaries are strings so no precision is lost.
pub fn employees_json(view: &[&Employee]) -> serde_json::Value {
    let employees: Vec<serde_json::Value> = view
        .iter()
        .map(|e| {
            serde_json::json!({
                "passport_series": e.passport_series(),
                "passport_number": e.passport_number(),
                "salary": e.salary().to_string(),
                "characteristics": e
                    .characteristics()
                    .iter()
                    .map(|c| serde_json::json!({
                        "property": c.property(),
                        "rating": c.rating()
                    }))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    serde_json::json!({
        "count": employees.len(),
        "employees": employees
    })
}
