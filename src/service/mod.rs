//! Validation and persistence for the two resources. The HTTP layer in
//! `crate::api` only extracts input and shapes responses around these.

pub mod attendance;
pub mod employee;

use crate::error::AppError;

pub(crate) const MISSING_FIELDS: &str = "All fields are required";

/// Unwraps a required request field.
pub(crate) fn required(field: Option<String>) -> Result<String, AppError> {
    field.ok_or_else(|| AppError::validation(MISSING_FIELDS))
}
