//! # Interactive Shell
//!
//! Numbered menu over a line-oriented reader and writer.
//!
//! ## Menu
//!
//! - `1` - Display employees
//! - `2` - Add employee (with any number of characteristics)
//! - `3` - Sort employees by salary
//! - `4` - Serialize or deserialize (an existing file is loaded, otherwise saved)
//! - `5` - Remove employee by passport
//! - `6` - Search employee by passport
//! - `7` - Exit
//! - `8` - Sort employees by passport
//! - `9` - Search employees by salary range
//!
//! Bad numeric answers re-prompt the same question. End of input behaves
//! like `7`.

mod input;

pub use input::{parse_rating, parse_salary, parse_yes_no};

use roster_core::{Decimal, Employee, EmployeeContainer, RosterError};
use std::io::{BufRead, Write};
use std::path::Path;

// =============================================================================
// DISPATCH TABLE
// =============================================================================

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Handler<R, W> = fn(&mut Shell<R, W>) -> Result<Flow, RosterError>;

/// One menu line: the choice typed, its label, and the command run.
struct MenuEntry<R, W> {
    key: &'static str,
    label: &'static str,
    handler: Handler<R, W>,
}

fn menu<R: BufRead, W: Write>() -> Vec<MenuEntry<R, W>> {
    vec![
        MenuEntry { key: "1", label: "Display employees", handler: Shell::cmd_list },
        MenuEntry { key: "2", label: "Add employee", handler: Shell::cmd_add },
        MenuEntry { key: "3", label: "Sort employees by salary", handler: Shell::cmd_sort_by_salary },
        MenuEntry { key: "4", label: "Serialize or deserialize container", handler: Shell::cmd_persist },
        MenuEntry { key: "5", label: "Remove employee by passport", handler: Shell::cmd_remove },
        MenuEntry { key: "6", label: "Search employee by passport", handler: Shell::cmd_search_passport },
        MenuEntry { key: "7", label: "Exit", handler: Shell::cmd_exit },
        MenuEntry { key: "8", label: "Sort employees by passport", handler: Shell::cmd_sort_by_passport },
        MenuEntry { key: "9", label: "Search employees by salary range", handler: Shell::cmd_search_salary },
    ]
}

// =============================================================================
// SHELL
// =============================================================================

/// The read-eval loop and the roster it edits.
pub struct Shell<R, W> {
    input: R,
    output: W,
    roster: EmployeeContainer,
    commands: Vec<MenuEntry<R, W>>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an empty roster.
    pub fn new(input: R, output: W) -> Self {
        Self::with_roster(input, output, EmployeeContainer::new())
    }

    /// Create a shell over an existing roster.
    pub fn with_roster(input: R, output: W, roster: EmployeeContainer) -> Self {
        Self {
            input,
            output,
            roster,
            commands: menu(),
        }
    }

    /// The roster as it currently stands.
    pub fn roster(&self) -> &EmployeeContainer {
        &self.roster
    }

    /// Consume the shell, returning its writer (captured output in tests).
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the exit command or end of input.
    pub fn run(&mut self) -> Result<(), RosterError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                tracing::debug!("End of input, leaving shell");
                return Ok(());
            };

            let handler = self
                .commands
                .iter()
                .find(|entry| entry.key == choice.trim())
                .map(|entry| entry.handler);

            let flow = match handler {
                Some(handler) => handler(self)?,
                None => {
                    self.say("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    // =========================================================================
    // COMMANDS
    // =========================================================================

    fn cmd_list(&mut self) -> Result<Flow, RosterError> {
        let lines = render(self.roster.iter());
        self.print_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn cmd_add(&mut self) -> Result<Flow, RosterError> {
        let Some(series) = self.prompt("Enter passport series: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(number) = self.prompt("Enter passport number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(salary) = self.prompt_parsed("Enter salary: ", parse_salary)? else {
            return Ok(Flow::Exit);
        };

        let mut employee = Employee::new(series.trim(), number.trim(), salary);

        loop {
            let Some(answer) = self.prompt("Add a characteristic (Y/N): ")? else {
                return Ok(Flow::Exit);
            };
            match parse_yes_no(&answer) {
                Some(true) => {
                    let Some(property) = self.prompt("Enter characteristic property: ")? else {
                        return Ok(Flow::Exit);
                    };
                    let Some(rating) =
                        self.prompt_parsed("Enter characteristic rating: ", parse_rating)?
                    else {
                        return Ok(Flow::Exit);
                    };
                    employee.add_characteristic(property.trim(), rating);
                }
                Some(false) => break,
                None => self.say("Invalid choice. Please enter Y or N.")?,
            }
        }

        if self
            .roster
            .contains_passport(employee.passport_series(), employee.passport_number())
        {
            self.say(&format!(
                "Note: passport {} is already on the roster; both records are kept.",
                employee.key()
            ))?;
        }

        tracing::debug!(
            passport = %employee.key(),
            characteristics = employee.characteristics().len(),
            "Employee added"
        );
        self.roster.add_employee(employee);
        self.say("Employee added.")?;
        Ok(Flow::Continue)
    }

    fn cmd_sort_by_salary(&mut self) -> Result<Flow, RosterError> {
        let lines = render(self.roster.sort_by_salary());
        self.print_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn cmd_sort_by_passport(&mut self) -> Result<Flow, RosterError> {
        let lines = render(self.roster.sort_by_passport());
        self.print_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn cmd_persist(&mut self) -> Result<Flow, RosterError> {
        let Some(name) = self.prompt("Enter the file name for serialization or deserialization: ")?
        else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            self.say("File name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        if Path::new(&name).exists() {
            match EmployeeContainer::deserialize(&name) {
                Ok(loaded) => {
                    tracing::info!(file = %name, employees = loaded.len(), "Roster loaded");
                    self.roster = loaded;
                    self.say(&format!("Data loaded from file '{}'.", name))?;
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Load failed, roster unchanged");
                    self.say(&format!("Could not load '{}': {}", name, e))?;
                }
            }
        } else {
            match self.roster.serialize(&name) {
                Ok(bytes) => {
                    tracing::info!(file = %name, employees = self.roster.len(), bytes, "Roster saved");
                    self.say(&format!("Data saved to file '{}'.", name))?;
                }
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "Save failed");
                    self.say(&format!("Could not save '{}': {}", name, e))?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn cmd_remove(&mut self) -> Result<Flow, RosterError> {
        let Some(series) = self.prompt("Enter passport series to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(number) = self.prompt("Enter passport number to remove: ")? else {
            return Ok(Flow::Exit);
        };
        let (series, number) = (series.trim(), number.trim());

        let removed = self.roster.remove_employee(series, number);
        tracing::info!(series, number, removed, "Remove by passport");
        if removed == 0 {
            self.say(&format!(
                "No employee with passport series {} and passport number {} found.",
                series, number
            ))?;
        } else {
            self.say(&format!(
                "Employee with passport series {} and passport number {} removed.",
                series, number
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn cmd_search_passport(&mut self) -> Result<Flow, RosterError> {
        let Some(series) = self.prompt("Enter passport series to search: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(number) = self.prompt("Enter passport number to search: ")? else {
            return Ok(Flow::Exit);
        };

        let lines = passport_report(&self.roster, series.trim(), number.trim());
        self.print_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn cmd_search_salary(&mut self) -> Result<Flow, RosterError> {
        let Some(min) = self.prompt_parsed("Enter minimum salary: ", parse_salary)? else {
            return Ok(Flow::Exit);
        };
        let Some(max) = self.prompt_parsed("Enter maximum salary: ", parse_salary)? else {
            return Ok(Flow::Exit);
        };

        let lines = salary_report(&self.roster, min, max);
        self.print_lines(&lines)?;
        Ok(Flow::Continue)
    }

    fn cmd_exit(&mut self) -> Result<Flow, RosterError> {
        Ok(Flow::Exit)
    }

    // =========================================================================
    // I/O HELPERS
    // =========================================================================

    fn print_menu(&mut self) -> Result<(), RosterError> {
        let mut lines = vec!["Choose an action:".to_string()];
        lines.extend(
            self.commands
                .iter()
                .map(|entry| format!("{}. {}", entry.key, entry.label)),
        );
        self.print_lines(&lines)
    }

    fn say(&mut self, line: &str) -> Result<(), RosterError> {
        writeln!(self.output, "{}", line).map_err(io_error)
    }

    fn print_lines(&mut self, lines: &[String]) -> Result<(), RosterError> {
        for line in lines {
            writeln!(self.output, "{}", line).map_err(io_error)?;
        }
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, RosterError> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(io_error)?;
        if read == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, RosterError> {
        write!(self.output, "{}", text).map_err(io_error)?;
        self.output.flush().map_err(io_error)?;
        self.read_line()
    }

    /// Ask until the answer parses or input ends.
    fn prompt_parsed<T>(
        &mut self,
        text: &str,
        parse: fn(&str) -> Result<T, RosterError>,
    ) -> Result<Option<T>, RosterError> {
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    tracing::debug!(error = %e, "Rejected input");
                    self.say(&format!("{}. Please try again.", e))?;
                }
            }
        }
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render employees and their characteristics, one line each.
pub fn render<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Vec<String> {
    let mut lines = Vec::new();
    for employee in employees {
        lines.push(employee.to_string());
        lines.extend(employee.characteristics().iter().map(|c| c.to_string()));
    }
    if lines.is_empty() {
        lines.push("No employees.".to_string());
    }
    lines
}

fn passport_report(roster: &EmployeeContainer, series: &str, number: &str) -> Vec<String> {
    let hits = roster.search_by_passport(series, number);
    if hits.is_empty() {
        return vec![format!(
            "No employees found with passport series {} and passport number {}",
            series, number
        )];
    }
    let mut lines = vec![format!(
        "Employees with passport series {} and passport number {}:",
        series, number
    )];
    lines.extend(render(hits));
    lines
}

fn salary_report(roster: &EmployeeContainer, min: Decimal, max: Decimal) -> Vec<String> {
    let hits = roster.search_by_salary(min, max);
    if hits.is_empty() {
        return vec![format!("No employees found with salary between {} and {}", min, max)];
    }
    let mut lines = vec![format!("Employees with salary between {} and {}:", min, max)];
    lines.extend(render(hits));
    lines
}

fn io_error(e: std::io::Error) -> RosterError {
    RosterError::Io(format!("Terminal: {}", e))
}
