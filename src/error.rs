//! Structured error types for the Laurea rendering engine.
//!
//! The taxonomy is deliberate: configuration validation failures and QR
//! generation failures surface to the caller; recoverable conditions
//! (unknown template identifier, missing optional assets, absent optional
//! data fields) are resolved by substitution or omission and never appear
//! here.

use thiserror::Error;

/// The unified error type returned by all public Laurea API functions.
#[derive(Debug, Error)]
pub enum LaureaError {
    /// The supplied template configuration failed structural validation.
    /// Carries every violation found, not just the first.
    #[error("invalid template configuration: {0}")]
    Validation(#[from] ValidationErrors),

    /// The QR symbol for the validation URL could not be generated.
    #[error("failed to generate QR code: {0}")]
    QrGeneration(String),

    /// A caller-supplied image payload (logo, signature) could not be decoded.
    #[error("image decode error: {0}")]
    Image(String),

    /// Certificate data or configuration JSON failed to parse.
    #[error("failed to parse input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// All field-level violations found in one validation pass.
#[derive(Debug, Error)]
#[error("{}", format_violations(.violations))]
pub struct ValidationErrors {
    pub violations: Vec<FieldViolation>,
}

/// A single invalid field: dotted path into the config plus the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    pub path: String,
    pub reason: String,
}

impl FieldViolation {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.path, v.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_list_every_field() {
        let errs = ValidationErrors {
            violations: vec![
                FieldViolation::new("colors.primary", "not a 6-digit hex color"),
                FieldViolation::new("ornaments.patternOpacity", "must be within 0..=1"),
            ],
        };
        let msg = errs.to_string();
        assert!(msg.contains("colors.primary"));
        assert!(msg.contains("ornaments.patternOpacity"));
    }
}
