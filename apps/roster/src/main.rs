//! # Roster - Employee Record Manager
//!
//! The main binary for the roster.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive menu
//! roster
//! roster shell --file staff.roster
//!
//! # Save the demonstration employee to ./test
//! roster auto
//!
//! # Print a saved roster
//! roster show -f staff.roster --sort salary --json
//! ```

use roster::cli;
use roster::config::Settings;
use roster::logging;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse_normalized(std::env::args_os());

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing — ROSTER_LOG_FORMAT=json enables machine-parseable output.
    if let Err(e) = logging::init(&settings.logging, cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli, &settings) {
        tracing::error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Roster startup banner.
fn print_banner() {
    println!("Roster v{} - employee records", env!("CARGO_PKG_VERSION"));
    println!();
}
