//! Entry points for populating registered types.

use crate::hints::FieldHints;
use crate::mapping::GeneratorMapping;
use crate::resolver::Resolver;
use crate::shape::Shape;
use fabricate_core::{Generator, GeneratorError, Settings};
use std::any::type_name;

/// Builds generators for registered types.
///
/// Holds the settings (container sizes, email domains, word lists) and an
/// optional override mapping consulted before the defaults.
pub struct Populator {
    settings: Settings,
    overrides: GeneratorMapping,
    hints: FieldHints,
}

impl Populator {
    pub fn new(settings: Settings) -> Self {
        let hints = FieldHints::from_settings(&settings);
        Self {
            settings,
            overrides: GeneratorMapping::new(),
            hints,
        }
    }

    /// Use `overrides` ahead of the default mapping and field hints.
    pub fn with_overrides(mut self, overrides: GeneratorMapping) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// A generator producing fully populated values of `T`.
    ///
    /// A mapping entry for `T` itself is returned unchanged.
    pub fn generator<T: Shape>(&self) -> Result<Generator<T>, GeneratorError> {
        let generator = self.resolver().resolve::<T>(None)?;
        tracing::debug!("Built generator for {}", type_name::<T>());
        Ok(generator)
    }

    pub(crate) fn resolver(&self) -> Resolver<'_> {
        Resolver::new(
            &self.overrides,
            GeneratorMapping::defaults(),
            &self.hints,
            &self.settings.collections,
        )
    }
}

impl Default for Populator {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// A generator for `T` using default settings and the default mapping.
pub fn pojos<T: Shape>() -> Result<Generator<T>, GeneratorError> {
    Populator::default().generator::<T>()
}
