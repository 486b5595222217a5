//! # Record Model
//!
//! This module contains the value shapes held by the roster:
//! - Identity key (`PassportKey`)
//! - Records (`Employee`, `Characteristic`)
//! - Error types (`RosterError`)
//!
//! ## Money
//!
//! Salaries are `rust_decimal::Decimal`. Comparisons and range checks are exact
//! and the textual scale survives a round trip (`60000.00` stays `60000.00`).

use rust_decimal::Decimal;
use std::fmt;
use std::num::FpCategory;
use thiserror::Error;

// =============================================================================
// IDENTITY
// =============================================================================

/// Natural key of an employee: passport series plus passport number.
///
/// The key is used for search and removal but is not enforced as unique.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassportKey {
    pub series: String,
    pub number: String,
}

impl PassportKey {
    /// Create a new key.
    #[must_use]
    pub fn new(series: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            series: series.into(),
            number: number.into(),
        }
    }
}

impl fmt::Display for PassportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.series, self.number)
    }
}

// =============================================================================
// CHARACTERISTIC
// =============================================================================

/// A rated performance property of an employee.
///
/// Immutable once built. Ratings are not range-checked and duplicate
/// property names are allowed. Equality compares rating bits, so a `NaN`
/// rating equals itself and `0.0` differs from `-0.0`.
#[derive(Debug, Clone)]
pub struct Characteristic {
    property: String,
    rating: f64,
}

impl Characteristic {
    /// Create a new characteristic.
    #[must_use]
    pub fn new(property: impl Into<String>, rating: f64) -> Self {
        Self {
            property: property.into(),
            rating,
        }
    }

    #[must_use]
    pub fn property(&self) -> &str {
        &self.property
    }

    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }
}

impl PartialEq for Characteristic {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property && self.rating.to_bits() == other.rating.to_bits()
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Characteristic: {}, Rating: {}",
            self.property,
            Rating(self.rating)
        )
    }
}

/// Display form of a rating.
///
/// Plain decimals with at least one fractional digit for `1e-3 <= |r| < 1e7`
/// (`4.0`, `0.001`), `d.dddE±n` outside that band (`1.0E-5`, `1.5E7`), and
/// `NaN` / `Infinity` / `-Infinity` for non-finite values.
struct Rating(f64);

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        if r.is_nan() {
            return f.write_str("NaN");
        }
        if r.is_infinite() {
            return f.write_str(if r.is_sign_negative() { "-Infinity" } else { "Infinity" });
        }

        let magnitude = r.abs();
        if magnitude.classify() == FpCategory::Zero || (1e-3..1e7).contains(&magnitude) {
            return write!(f, "{r:?}");
        }

        let scientific = format!("{r:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if mantissa.contains('.') => {
                write!(f, "{mantissa}E{exponent}")
            }
            Some((mantissa, exponent)) => write!(f, "{mantissa}.0E{exponent}"),
            None => f.write_str(&scientific),
        }
    }
}

// =============================================================================
// EMPLOYEE
// =============================================================================

/// An employee record.
///
/// Built by the shell, then handed to the container, which never mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    passport_series: String,
    passport_number: String,
    salary: Decimal,
    characteristics: Vec<Characteristic>,
}

impl Employee {
    /// Create an employee with no characteristics.
    #[must_use]
    pub fn new(
        passport_series: impl Into<String>,
        passport_number: impl Into<String>,
        salary: Decimal,
    ) -> Self {
        Self {
            passport_series: passport_series.into(),
            passport_number: passport_number.into(),
            salary,
            characteristics: Vec::new(),
        }
    }

    /// Append a characteristic. Order of insertion is kept.
    pub fn add_characteristic(&mut self, property: impl Into<String>, rating: f64) {
        self.characteristics
            .push(Characteristic::new(property, rating));
    }

    /// Builder form of [`Employee::add_characteristic`].
    #[must_use]
    pub fn with_characteristic(mut self, property: impl Into<String>, rating: f64) -> Self {
        self.add_characteristic(property, rating);
        self
    }

    #[must_use]
    pub fn passport_series(&self) -> &str {
        &self.passport_series
    }

    #[must_use]
    pub fn passport_number(&self) -> &str {
        &self.passport_number
    }

    #[must_use]
    pub fn salary(&self) -> Decimal {
        self.salary
    }

    #[must_use]
    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    /// The (series, number) identity key.
    #[must_use]
    pub fn key(&self) -> PassportKey {
        PassportKey::new(self.passport_series.clone(), self.passport_number.clone())
    }

    /// Check whether this employee carries the given passport.
    #[must_use]
    pub fn matches(&self, series: &str, number: &str) -> bool {
        self.passport_series == series && self.passport_number == number
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Passport: {}-{}, Salary: {}",
            self.passport_series, self.passport_number, self.salary
        )
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the roster.
///
/// - Empty search or remove results are NOT errors
/// - A failed load never touches the container that was already in memory
#[derive(Debug, Error)]
pub enum RosterError {
    /// A numeric field could not be parsed from user text.
    #[error("Invalid {field}: '{value}' is not a valid number")]
    InputFormat { field: &'static str, value: String },

    /// A persisted roster is missing, corrupt or of an incompatible format.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),

    /// Settings could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

// =============================================================================
// TESTS
// =============================================================================
