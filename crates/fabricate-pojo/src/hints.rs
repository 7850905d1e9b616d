//! Field-name refinement of default generators.
//!
//! When a field's type is covered by the default mapping, its name may pick
//! a more realistic generator: a `String` called `email` gets email
//! addresses instead of random letters. Matching is exact and
//! case-sensitive on the Rust field name.

use fabricate_core::{Generator, Settings};
use fabricate_generators::{emails, geolocation, people, WordLists};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

type ErasedGenerator = Arc<dyn Any + Send + Sync>;

/// Generators keyed by field type, then field name.
#[derive(Clone, Default)]
pub(crate) struct FieldHints {
    by_type: HashMap<TypeId, HashMap<&'static str, ErasedGenerator>>,
}

impl FieldHints {
    /// Hints drawing names and places from the word lists and email
    /// domains named in `settings`.
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        let words = WordLists::from_settings(settings);
        let emails = emails::emails_from_settings(settings).unwrap_or_else(|e| {
            tracing::warn!("Falling back to popular email domains: {}", e);
            emails::emails()
        });

        let mut hints = Self::default();
        for field in ["name", "first_name", "last_name"] {
            hints.insert(field, words.names());
        }
        hints.insert("email", emails);
        hints.insert("city", words.cities());
        hints.insert("country", words.countries());
        hints.insert("latitude", geolocation::latitudes());
        hints.insert("longitude", geolocation::longitudes());
        hints.insert("age", people::adult_ages());
        hints
    }

    fn insert<T: 'static>(&mut self, field: &'static str, generator: Generator<T>) {
        self.by_type
            .entry(TypeId::of::<T>())
            .or_default()
            .insert(field, Arc::new(generator));
    }

    /// The refined generator for a `T` field called `field`, if any.
    pub(crate) fn refine<T: 'static>(&self, field: &str) -> Option<Generator<T>> {
        self.by_type
            .get(&TypeId::of::<T>())?
            .get(field)?
            .downcast_ref::<Generator<T>>()
            .cloned()
    }
}
