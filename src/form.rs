//! Input validation and display text for interactive front ends.

use crate::types::CategoryTotal;

/// Rejected form input. No state changes when this is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Category, activity or amount was left empty.
    MissingField,
    /// The amount text is not a finite number.
    InvalidAmount(String),
    /// The amount parsed but is below zero.
    NegativeAmount(f64),
}

impl ValidationError {
    /// Message shown to the operator.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingField => "Please fill in all fields.",
            ValidationError::InvalidAmount(_) => "Please enter a valid number for amount.",
            ValidationError::NegativeAmount(_) => "Amount cannot be negative.",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for ValidationError {}

/// Validated category, activity and amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// Trimmed category name.
    pub category: String,
    /// Trimmed activity name.
    pub activity: String,
    /// Parsed, finite, non-negative amount.
    pub amount: f64,
}

impl Submission {
    /// Validates raw field text. Zero is accepted.
    ///
    /// Only truly empty fields count as missing; whitespace is trimmed
    /// afterwards, so a blank amount reports an invalid number instead.
    pub fn parse(category: &str, activity: &str, amount: &str) -> Result<Self, ValidationError> {
        if category.is_empty() || activity.is_empty() || amount.is_empty() {
            return Err(ValidationError::MissingField);
        }
        let (category, activity, amount) = (category.trim(), activity.trim(), amount.trim());

        let value: f64 = amount
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;
        if !value.is_finite() {
            return Err(ValidationError::InvalidAmount(amount.to_string()));
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeAmount(value));
        }

        Ok(Self {
            category: category.to_string(),
            activity: activity.to_string(),
            amount: value,
        })
    }
}

/// Message shown when the factor lookup fails.
pub const NOT_FOUND_MESSAGE: &str = "Invalid category or activity selected.";

/// Result line for a single calculation, rounded to two decimals.
pub fn format_emission(emission: f64) -> String {
    format!("Emission: {emission:.2} kg CO₂")
}

/// Totals report, one capitalized category per line.
pub fn format_totals(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No data available.".to_string();
    }

    let mut out = String::from("Total Emissions by Category:\n");
    for t in totals {
        out.push_str(&format!("{}: {:.2} kg CO₂\n", capitalize(&t.category), t.total));
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
