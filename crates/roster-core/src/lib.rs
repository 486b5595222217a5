//! # roster-core
//!
//! Employee records and the container that owns them - THE RECORDS.
//!
//! This crate implements the in-memory roster: an ordered collection of
//! [`Employee`] records with stable sorted views, linear passport and salary
//! search, add/remove, and whole-roster persistence in a versioned binary
//! format.
//!
//! ## Architectural Constraints
//!
//! - Single-threaded and synchronous: NO async, NO network
//! - NO logging dependency; the app layer reports what happens
//! - Salaries are exact decimals; floats appear only in characteristic ratings
//! - Failed loads return an error and never touch an existing container
//!
//! ## Example
//!
//! ```
//! use roster_core::{Decimal, Employee, EmployeeContainer};
//!
//! let mut roster = EmployeeContainer::new();
//! roster.add_employee(Employee::new("AB", "12345", Decimal::new(5_000_000, 2)));
//! assert_eq!(roster.search_by_passport("AB", "12345").len(), 1);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod container;
pub mod formats;
pub mod primitives;
pub mod query;
pub mod storage;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use container::EmployeeContainer;
pub use formats::{roster_from_bytes, roster_to_bytes};
pub use query::{Query, SortKey};
pub use types::{Characteristic, Employee, PassportKey, RosterError};

pub use rust_decimal::Decimal;
