//! Parsing of single answers typed at the shell prompts.

use roster_core::{Decimal, RosterError};

/// Parse a salary as an exact decimal ("60000.00", "6e4").
pub fn parse_salary(text: &str) -> Result<Decimal, RosterError> {
    let trimmed = text.trim();
    Decimal::from_str_exact(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| RosterError::InputFormat {
            field: "salary",
            value: trimmed.to_string(),
        })
}

/// Parse a characteristic rating. Non-finite values are refused.
pub fn parse_rating(text: &str) -> Result<f64, RosterError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(rating) if rating.is_finite() => Ok(rating),
        _ => Err(RosterError::InputFormat {
            field: "rating",
            value: trimmed.to_string(),
        }),
    }
}

/// Parse a Y/N answer, case-insensitive. `None` for anything else.
pub fn parse_yes_no(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
