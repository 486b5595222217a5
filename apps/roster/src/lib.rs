//! # Roster
//!
//! Application layer over `roster-core`: command line, interactive shell,
//! settings file and logging setup. Exposed as a library so the
//! integration tests can drive the shell with scripted input.

pub mod cli;
pub mod config;
pub mod logging;
pub mod shell;
