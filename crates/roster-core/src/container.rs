//! # Employee Container
//!
//! An ordered, owning collection of [`Employee`] records.
//!
//! - Insertion order is the iteration order
//! - Sorts and searches return borrowed views; the container is never reordered
//! - Every lookup is a linear scan
//! - The passport key is NOT enforced as unique; duplicates are kept and
//!   removed together

use crate::query::{Query, SortKey};
use crate::types::Employee;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// The roster: zero or more employees in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeContainer {
    employees: Vec<Employee>,
}

impl EmployeeContainer {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an employee to the end of the sequence.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Remove every employee carrying the given passport.
    ///
    /// Returns how many records were removed. Zero is a normal outcome.
    pub fn remove_employee(&mut self, series: &str, number: &str) -> usize {
        let before = self.employees.len();
        self.employees.retain(|e| !e.matches(series, number));
        before - self.employees.len()
    }

    /// All employees with the given passport, in container order.
    #[must_use]
    pub fn search_by_passport(&self, series: &str, number: &str) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.matches(series, number))
            .collect()
    }

    /// All employees whose salary lies in `[min, max]`, in container order.
    ///
    /// An inverted range (`min > max`) matches nothing.
    #[must_use]
    pub fn search_by_salary(&self, min: Decimal, max: Decimal) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|e| e.salary() >= min && e.salary() <= max)
            .collect()
    }

    /// Check whether at least one employee carries the given passport.
    #[must_use]
    pub fn contains_passport(&self, series: &str, number: &str) -> bool {
        self.employees.iter().any(|e| e.matches(series, number))
    }

    /// Stable view ordered by `series ++ number` compared as one string.
    ///
    /// The concatenation is compared, not the pair: `"AB" + "C"` sorts
    /// before `"A" + "BD"`.
    #[must_use]
    pub fn sort_by_passport(&self) -> Vec<&Employee> {
        let mut view: Vec<&Employee> = self.employees.iter().collect();
        view.sort_by(|a, b| compare_passports(a, b));
        view
    }

    /// Stable view ordered by exact salary, ascending.
    #[must_use]
    pub fn sort_by_salary(&self) -> Vec<&Employee> {
        let mut view: Vec<&Employee> = self.employees.iter().collect();
        view.sort_by(|a, b| a.salary().cmp(&b.salary()));
        view
    }

    /// Run a structured query against the container.
    #[must_use]
    pub fn execute(&self, query: &Query) -> Vec<&Employee> {
        match query {
            Query::ByPassport(key) => self.search_by_passport(&key.series, &key.number),
            Query::BySalary { min, max } => self.search_by_salary(*min, *max),
            Query::Sorted(SortKey::Passport) => self.sort_by_passport(),
            Query::Sorted(SortKey::Salary) => self.sort_by_salary(),
        }
    }

    /// Number of employees held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// The employees as a slice, in insertion order.
    #[must_use]
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}

/// Compare two passports as if `series ++ number` were a single string.
fn compare_passports(a: &Employee, b: &Employee) -> Ordering {
    let left = a.passport_series().bytes().chain(a.passport_number().bytes());
    let right = b.passport_series().bytes().chain(b.passport_number().bytes());
    left.cmp(right)
}

impl<'a> IntoIterator for &'a EmployeeContainer {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

impl FromIterator<Employee> for EmployeeContainer {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
