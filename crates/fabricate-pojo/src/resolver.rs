//! Generator resolution for registered types and their fields.
//!
//! ```text
//! resolve::<T>(field)
//!   ├─ override mapping has T ──────────────► use it as is
//!   ├─ default mapping has T ──► field hint? ► hinted generator
//!   │                          └───────────► default generator
//!   └─ T::shape(resolver)
//!        ├─ container / Option / Box ──────► resolve element types
//!        ├─ enumeration ───────────────────► uniform choice of values
//!        └─ composite ─► pojo::<T>()
//!             ├─ pick constructor (nullary first, then declaration order)
//!             └─ bind each field; failures are logged and skipped
//! ```

use crate::hints::FieldHints;
use crate::layout::{Constructor, Pojo};
use crate::mapping::GeneratorMapping;
use crate::shape::Shape;
use fabricate_core::{CollectionSettings, Generator, GeneratorError};
use fabricate_generators::{enum_values, Enumerated};
use rand::Rng;
use std::any::{type_name, TypeId};

/// Resolves generators for one populator call.
///
/// Tracks the composites currently being built so that self-referential
/// types fail with [`GeneratorError::Cycle`] instead of recursing forever.
pub struct Resolver<'a> {
    overrides: &'a GeneratorMapping,
    defaults: &'a GeneratorMapping,
    hints: &'a FieldHints,
    collections: &'a CollectionSettings,
    in_progress: Vec<TypeId>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        overrides: &'a GeneratorMapping,
        defaults: &'a GeneratorMapping,
        hints: &'a FieldHints,
        collections: &'a CollectionSettings,
    ) -> Self {
        Self {
            overrides,
            defaults,
            hints,
            collections,
            in_progress: Vec::new(),
        }
    }

    /// A generator for `T`, optionally refined by the name of the field
    /// it will populate.
    pub fn resolve<T: Shape>(&mut self, field: Option<&str>) -> Result<Generator<T>, GeneratorError> {
        if let Some(generator) = self.overrides.get::<T>() {
            return Ok(generator);
        }

        if let Some(generator) = self.defaults.get::<T>() {
            let hinted = field.and_then(|name| self.hints.refine::<T>(name));
            return Ok(hinted.unwrap_or(generator));
        }

        T::shape(self)
    }

    /// Uniform draws among the values of `E`.
    pub fn enumeration<E: Enumerated>(&self) -> Result<Generator<E>, GeneratorError> {
        enum_values::<E>()
    }

    /// Container sizes, uniform in `[min_size, max_size]`.
    pub fn collection_sizes(&self) -> Generator<usize> {
        let min = self.collections.min_size;
        let max = self.collections.max_size.max(min);

        Generator::new(move || rand::thread_rng().gen_range(min..=max))
    }

    /// A generator that constructs `T` and fills its registered fields.
    pub fn pojo<T: Pojo>(&mut self) -> Result<Generator<T>, GeneratorError> {
        let id = TypeId::of::<T>();
        if self.in_progress.contains(&id) {
            return Err(GeneratorError::Cycle {
                type_name: type_name::<T>(),
            });
        }

        self.in_progress.push(id);
        let result = self.build_pojo::<T>();
        self.in_progress.pop();

        result
    }

    fn build_pojo<T: Pojo>(&mut self) -> Result<Generator<T>, GeneratorError> {
        let type_name = type_name::<T>();
        let layout = T::layout();

        let construct = self.select_constructor(type_name, &layout.constructors)?;

        let mut injectors = Vec::with_capacity(layout.fields.len());
        for field in &layout.fields {
            match (field.bind)(self) {
                Ok(injector) => injectors.push(injector),
                Err(e) => {
                    tracing::warn!(
                        "Skipping field {}.{} of type {}: {}",
                        type_name,
                        field.name,
                        field.type_name,
                        e
                    );
                }
            }
        }

        tracing::debug!(
            "Resolved {} with {} of {} fields",
            type_name,
            injectors.len(),
            layout.fields.len()
        );

        Ok(Generator::new(move || {
            let mut instance = construct.get();
            for inject in &injectors {
                inject(&mut instance);
            }
            instance
        }))
    }

    fn select_constructor<T: 'static>(
        &mut self,
        type_name: &'static str,
        constructors: &[Constructor<T>],
    ) -> Result<Generator<T>, GeneratorError> {
        if constructors.is_empty() {
            return Err(GeneratorError::NotInstantiable {
                type_name,
                reason: "no constructor registered".to_string(),
            });
        }

        let nullary = constructors.iter().filter(|c| c.nullary);
        let with_arguments = constructors.iter().filter(|c| !c.nullary);

        let mut failures = Vec::new();
        for constructor in nullary.chain(with_arguments) {
            match (constructor.build)(self) {
                Ok(generator) => return Ok(generator),
                Err(e) => {
                    tracing::debug!("Constructor for {} not usable: {}", type_name, e);
                    failures.push(e.to_string());
                }
            }
        }

        Err(GeneratorError::NotInstantiable {
            type_name,
            reason: format!("no constructor arguments can be generated ({})", failures.join("; ")),
        })
    }
}
