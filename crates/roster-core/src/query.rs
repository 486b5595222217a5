//! # Query Module
//!
//! Structured query types for container interaction.
//!
//! Each query names one search or one sort; the container executes it
//! with [`EmployeeContainer::execute`](crate::EmployeeContainer::execute).

use crate::PassportKey;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Ordering applied by a sorted view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// `series ++ number`, compared as a string.
    Passport,
    /// Exact salary, ascending.
    Salary,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "passport" => Ok(Self::Passport),
            "salary" => Ok(Self::Salary),
            other => Err(format!("Unknown sort key: {other}. Use: passport, salary")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passport => f.write_str("passport"),
            Self::Salary => f.write_str("salary"),
        }
    }
}

/// Query operation types supported by the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Employees with exactly this passport.
    ByPassport(PassportKey),

    /// Employees with `min <= salary <= max`.
    BySalary { min: Decimal, max: Decimal },

    /// Every employee, in a stable sorted order.
    Sorted(SortKey),
}

impl Query {
    /// Passport search helper.
    #[must_use]
    pub fn by_passport(series: impl Into<String>, number: impl Into<String>) -> Self {
        Self::ByPassport(PassportKey::new(series, number))
    }

    /// Salary range helper.
    #[must_use]
    pub fn by_salary(min: Decimal, max: Decimal) -> Self {
        Self::BySalary { min, max }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parsing() {
        assert_eq!("passport".parse::<SortKey>(), Ok(SortKey::Passport));
        assert_eq!(" Salary ".parse::<SortKey>(), Ok(SortKey::Salary));
        assert!("age".parse::<SortKey>().is_err());
    }

    #[test]
    fn query_helpers() {
        let q = Query::by_passport("AB", "12345");
        assert_eq!(q, Query::ByPassport(PassportKey::new("AB", "12345")));
        assert_eq!(
            Query::by_salary(Decimal::ONE, Decimal::TEN),
            Query::BySalary {
                min: Decimal::ONE,
                max: Decimal::TEN
            }
        );
    }

    #[test]
    fn sort_key_display_roundtrip() {
        for key in [SortKey::Passport, SortKey::Salary] {
            assert_eq!(key.to_string().parse::<SortKey>(), Ok(key));
        }
    }
}
