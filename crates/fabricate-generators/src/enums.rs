//! Uniform choice among the constants of an enumeration.

use crate::collections::from_list;
use fabricate_core::{Generator, GeneratorError};

/// A type with a fixed, listable set of values.
///
/// Usually implemented through `pojo_enum!`.
pub trait Enumerated: Clone + Send + Sync + 'static {
    /// Every value, in declaration order.
    fn values() -> Vec<Self>;
}

/// Uniform draws from `E::values()`.
pub fn enum_values<E: Enumerated>() -> Result<Generator<E>, GeneratorError> {
    let values = E::values();
    if values.is_empty() {
        return Err(GeneratorError::NoEnumValues {
            type_name: std::any::type_name::<E>(),
        });
    }

    from_list(values)
}
