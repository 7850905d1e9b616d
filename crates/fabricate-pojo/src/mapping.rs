//! Type-keyed registry of generators.
//!
//! A mapping stores one `Generator<T>` per type, erased behind `Any` and
//! recovered by downcasting on lookup. The populator consults two of them:
//! the caller's overrides first, then [`GeneratorMapping::defaults`].

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use fabricate_core::Generator;
use fabricate_generators::{binary, booleans, dates, identifiers, network, numbers, strings, times};
use once_cell::sync::Lazy;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::net::Ipv4Addr;
use std::sync::Arc;
use uuid::Uuid;

/// Size of byte buffers produced by the default mapping.
pub const DEFAULT_BUFFER_SIZE: usize = 333;

static DEFAULTS: Lazy<GeneratorMapping> = Lazy::new(|| {
    GeneratorMapping::new()
        .with::<String>(strings::alphabetic_strings())
        .with::<i32>(numbers::small_positive_integers())
        .with::<i64>(numbers::positive_longs())
        .with::<f64>(numbers::positive_doubles())
        .with::<f32>(numbers::positive_floats())
        .with::<bool>(booleans::booleans())
        .with::<u8>(binary::bytes())
        .with::<u16>(network::ports())
        .with::<Bytes>(binary::byte_buffers(DEFAULT_BUFFER_SIZE))
        .with::<DateTime<Utc>>(times::anytime())
        .with::<NaiveDate>(dates::any_dates())
        .with::<Uuid>(identifiers::uuids())
        .with::<Ipv4Addr>(network::ip4_addresses())
});

#[derive(Clone)]
struct Entry {
    type_name: &'static str,
    generator: Arc<dyn Any + Send + Sync>,
}

/// Generators keyed by the type they produce.
#[derive(Clone, Default)]
pub struct GeneratorMapping {
    entries: HashMap<TypeId, Entry>,
}

impl GeneratorMapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in mapping for common leaf types.
    pub fn defaults() -> &'static GeneratorMapping {
        &DEFAULTS
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<T: 'static>(mut self, generator: Generator<T>) -> Self {
        self.insert(generator);
        self
    }

    /// Register `generator` for `T`, replacing any previous entry.
    pub fn insert<T: 'static>(&mut self, generator: Generator<T>) {
        let entry = Entry {
            type_name: type_name::<T>(),
            generator: Arc::new(generator),
        };

        if self.entries.insert(TypeId::of::<T>(), entry).is_some() {
            tracing::trace!("Replaced generator for {}", type_name::<T>());
        }
    }

    /// The generator registered for `T`, if any.
    pub fn get<T: 'static>(&self) -> Option<Generator<T>> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.generator.downcast_ref::<Generator<T>>())
            .cloned()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the registered types, sorted.
    pub fn type_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for GeneratorMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mapping = GeneratorMapping::new().with(Generator::constant(42u32));

        assert!(mapping.contains::<u32>());
        assert!(!mapping.contains::<u64>());
        assert_eq!(mapping.get::<u32>().unwrap().get(), 42);
        assert!(mapping.get::<u64>().is_none());
    }

    #[test]
    fn test_insert_replaces() {
        let mut mapping = GeneratorMapping::new();
        mapping.insert(Generator::constant("first".to_string()));
        mapping.insert(Generator::constant("second".to_string()));

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get::<String>().unwrap().get(), "second");
    }

    #[test]
    fn test_defaults_cover_leaf_types() {
        let defaults = GeneratorMapping::defaults();

        assert_eq!(defaults.len(), 13);
        assert!(defaults.contains::<String>());
        assert!(defaults.contains::<DateTime<Utc>>());
        assert!(defaults.contains::<Ipv4Addr>());
        assert!(!defaults.contains::<u32>());

        let buffer = defaults.get::<Bytes>().unwrap().get();
        assert_eq!(buffer.len(), DEFAULT_BUFFER_SIZE);

        let port = defaults.get::<u16>().unwrap().get();
        assert!(port >= 22);
    }

    #[test]
    fn test_debug_lists_types() {
        let mapping = GeneratorMapping::new().with(Generator::constant(true));
        assert_eq!(format!("{mapping:?}"), "{\"bool\"}");
        assert!(GeneratorMapping::new().is_empty());
    }
}
