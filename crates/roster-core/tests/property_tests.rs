//! # Property-Based Tests
//!
//! Ordering, search, removal and persistence invariants of the roster,
//! checked with proptest over generated rosters.

use proptest::collection::vec;
use proptest::prelude::*;
use roster_core::{
    Decimal, Employee, EmployeeContainer, PassportKey, roster_from_bytes, roster_to_bytes,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// Small alphabets so generated rosters contain plenty of key collisions.
/// Ratings span every `f64` class, `NaN` and infinities included.
fn series() -> impl Strategy<Value = String> {
    "[A-C]{0,2}"
}

fn number() -> impl Strategy<Value = String> {
    "[0-2]{0,2}"
}

fn salary() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000, 0u32..4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn employee() -> impl Strategy<Value = Employee> {
    (
        series(),
        number(),
        salary(),
        vec(("[a-z]{1,8}", proptest::num::f64::ANY), 0..4),
    )
        .prop_map(|(s, n, pay, traits)| {
            let mut e = Employee::new(s, n, pay);
            for (property, rating) in traits {
                e.add_characteristic(property, rating);
            }
            e
        })
}

fn roster() -> impl Strategy<Value = EmployeeContainer> {
    vec(employee(), 0..40).prop_map(EmployeeContainer::from_iter)
}

fn concat(e: &Employee) -> String {
    format!("{}{}", e.passport_series(), e.passport_number())
}

/// Position of an employee reference inside the container's own storage.
fn position(container: &EmployeeContainer, e: &Employee) -> usize {
    container
        .employees()
        .iter()
        .position(|candidate| std::ptr::eq(candidate, e))
        .unwrap_or(usize::MAX)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// deserialize(serialize(C)) reproduces C, salary scale included.
    #[test]
    fn persistence_roundtrip(container in roster()) {
        let bytes = roster_to_bytes(&container).expect("serialize");
        let restored = roster_from_bytes(&bytes).expect("deserialize");

        prop_assert_eq!(&restored, &container);
        for (a, b) in restored.iter().zip(container.iter()) {
            prop_assert_eq!(a.salary().to_string(), b.salary().to_string());
            prop_assert_eq!(a.characteristics(), b.characteristics());
        }
    }

    /// Passport view is ordered by the concatenated key and stable for ties.
    #[test]
    fn sort_by_passport_ordered_and_stable(container in roster()) {
        let before = container.clone();
        let sorted = container.sort_by_passport();

        prop_assert_eq!(sorted.len(), container.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(concat(a) <= concat(b));
            if concat(a) == concat(b) {
                prop_assert!(position(&container, a) < position(&container, b));
            }
        }
        prop_assert_eq!(&container, &before);
    }

    /// Salary view is ordered by exact salary and stable for ties.
    #[test]
    fn sort_by_salary_ordered_and_stable(container in roster()) {
        let before = container.clone();
        let sorted = container.sort_by_salary();

        prop_assert_eq!(sorted.len(), container.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(a.salary() <= b.salary());
            if a.salary() == b.salary() {
                prop_assert!(position(&container, a) < position(&container, b));
            }
        }
        prop_assert_eq!(&container, &before);
    }

    /// Passport search returns exactly the matching subsequence.
    #[test]
    fn search_by_passport_is_exact_subsequence(
        container in roster(),
        s in series(),
        n in number(),
    ) {
        let key = PassportKey::new(s.clone(), n.clone());
        let hits = container.search_by_passport(&s, &n);
        let expected: Vec<&Employee> = container.iter().filter(|e| e.key() == key).collect();

        prop_assert_eq!(hits.len(), expected.len());
        for (hit, want) in hits.iter().zip(expected.iter()) {
            prop_assert!(std::ptr::eq(*hit, *want));
        }
    }

    /// Salary search returns exactly the subsequence inside [lo, hi].
    #[test]
    fn search_by_salary_is_exact_subsequence(
        container in roster(),
        lo in salary(),
        hi in salary(),
    ) {
        let hits = container.search_by_salary(lo, hi);
        let expected: Vec<&Employee> = container
            .iter()
            .filter(|e| lo <= e.salary() && e.salary() <= hi)
            .collect();

        prop_assert_eq!(hits.len(), expected.len());
        for (hit, want) in hits.iter().zip(expected.iter()) {
            prop_assert!(std::ptr::eq(*hit, *want));
        }
    }

    /// Removal deletes every match and nothing else.
    #[test]
    fn remove_deletes_exactly_the_matches(
        container in roster(),
        s in series(),
        n in number(),
    ) {
        let mut container = container;
        let prior_matches = container.search_by_passport(&s, &n).len();
        let survivors: Vec<Employee> = container
            .iter()
            .filter(|e| !e.matches(&s, &n))
            .cloned()
            .collect();
        let before_len = container.len();

        let removed = container.remove_employee(&s, &n);

        prop_assert_eq!(removed, prior_matches);
        prop_assert_eq!(container.len(), before_len - prior_matches);
        prop_assert!(!container.contains_passport(&s, &n));
        prop_assert_eq!(container.employees(), survivors.as_slice());
    }
}
