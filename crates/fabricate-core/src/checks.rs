//! Argument validation used by generator factories.
//!
//! Every factory validates eagerly so that a bad argument fails where the
//! generator is built, not on the first draw.

use crate::error::GeneratorError;

/// Fail with [`GeneratorError::InvalidArgument`] unless `predicate` holds.
pub fn check_that(predicate: bool, message: &str) -> Result<(), GeneratorError> {
    if predicate {
        Ok(())
    } else {
        Err(GeneratorError::invalid_argument(message))
    }
}

/// Fail unless `value` is non-empty.
pub fn check_not_empty(value: &str, message: &str) -> Result<(), GeneratorError> {
    check_that(!value.is_empty(), message)
}

/// Fail unless `values` holds at least one element.
pub fn check_has_values<T>(values: &[T], message: &str) -> Result<(), GeneratorError> {
    check_that(!values.is_empty(), message)
}
