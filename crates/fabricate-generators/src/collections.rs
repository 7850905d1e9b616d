//! Collection generators and helpers for drawing containers.

use crate::numbers::int_range;
use fabricate_core::checks::check_has_values;
use fabricate_core::{Generator, GeneratorError};
use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Upper bound on draws per requested entry when filling maps and sets.
pub const ATTEMPTS_PER_ENTRY: usize = 10;

/// Values picked uniformly from `values`.
pub fn from_list<T>(values: Vec<T>) -> Result<Generator<T>, GeneratorError>
where
    T: Clone + Send + Sync + 'static,
{
    check_has_values(&values, "No values specified")?;
    let values = Arc::new(values);

    Ok(Generator::new(move || {
        let index = rand::thread_rng().gen_range(0..values.len());
        values[index].clone()
    }))
}

/// A list of 5 to 199 values drawn from `generator`.
pub fn list_of<T: 'static>(generator: &Generator<T>) -> Vec<T> {
    let size = int_range(5, 200).get() as usize;
    list_of_size(generator, size)
}

/// A list of exactly `size` values drawn from `generator`.
pub fn list_of_size<T: 'static>(generator: &Generator<T>, size: usize) -> Vec<T> {
    generator.take(size)
}

/// A map of 5 to 199 entries.
pub fn map_of<K, V>(keys: &Generator<K>, values: &Generator<V>) -> HashMap<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    let size = int_range(5, 200).get() as usize;
    map_of_size(keys, values, size)
}

/// A map of `size` entries.
///
/// Duplicate keys are redrawn, up to [`ATTEMPTS_PER_ENTRY`] draws per entry;
/// a key generator with fewer than `size` distinct values yields a smaller
/// map rather than looping forever.
pub fn map_of_size<K, V>(keys: &Generator<K>, values: &Generator<V>, size: usize) -> HashMap<K, V>
where
    K: Eq + Hash + 'static,
    V: 'static,
{
    fill_distinct(size, HashMap::with_capacity(size), |map| {
        map.insert(keys.get(), values.get());
        map.len()
    })
}

/// Repeatedly call `insert` until the container reports `size` entries or
/// the attempt budget runs out.
pub fn fill_distinct<C, F>(size: usize, mut container: C, mut insert: F) -> C
where
    F: FnMut(&mut C) -> usize,
{
    let mut len = 0;
    let mut attempts = 0;
    let budget = size.saturating_mul(ATTEMPTS_PER_ENTRY);

    while len < size && attempts < budget {
        len = insert(&mut container);
        attempts += 1;
    }

    if len < size {
        tracing::debug!("Filled {} of {} requested entries", len, size);
    }

    container
}
