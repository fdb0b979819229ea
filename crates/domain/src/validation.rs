// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

/// Validates that a required text field is not blank.
///
/// # Arguments
///
/// * `field` - The field name used in the error
/// * `value` - The value to check
///
/// # Returns
///
/// The trimmed value.
///
/// # Errors
///
/// Returns `DomainError::EmptyField` if the value is empty or whitespace.
pub fn validate_non_empty(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Validates a quantity supplied for an order line or a stock item.
///
/// Quantities arrive signed so that negative input can be reported rather
/// than wrapped.
///
/// # Arguments
///
/// * `context` - What the quantity belongs to, for the error message
/// * `quantity` - The raw quantity
///
/// # Errors
///
/// Returns `DomainError::InvalidQuantity` if the quantity is zero, negative,
/// or does not fit in a `u32`.
pub fn validate_quantity(context: &str, quantity: i64) -> Result<u32, DomainError> {
    match u32::try_from(quantity) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(DomainError::InvalidQuantity {
            context: context.to_string(),
            quantity,
        }),
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
