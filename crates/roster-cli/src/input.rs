//! Parsing of raw console input
//!
//! Every parser trims its input and returns an explicit error instead of
//! panicking, so the command loop decides what to print.

use roster_domain::RecordKind;

use crate::error::{CliError, CliResult};

/// Parse a required integer field
pub fn parse_int(field: &'static str, raw: &str) -> CliResult<i32> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| CliError::Parse {
        field,
        input: trimmed.to_string(),
    })
}

/// Parse a required floating point field
pub fn parse_float(field: &'static str, raw: &str) -> CliResult<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CliError::Parse {
            field,
            input: trimmed.to_string(),
        }),
    }
}

/// Parse an integer that may be left blank
pub fn parse_optional_int(field: &'static str, raw: &str) -> CliResult<Option<i32>> {
    optional(raw).map(|s| parse_int(field, s)).transpose()
}

/// Parse a float that may be left blank
pub fn parse_optional_float(field: &'static str, raw: &str) -> CliResult<Option<f64>> {
    optional(raw).map(|s| parse_float(field, s)).transpose()
}

/// Trimmed text, or `None` when blank
pub fn optional(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse the U/G student type selector
pub fn parse_kind(raw: &str) -> CliResult<RecordKind> {
    let trimmed = raw.trim();
    match trimmed.to_uppercase().as_str() {
        "U" => Ok(RecordKind::Undergraduate),
        "G" => Ok(RecordKind::Graduate),
        _ => Err(CliError::InvalidVariant {
            input: trimmed.to_string(),
        }),
    }
}
