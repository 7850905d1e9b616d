//! Registration of composite types.
//!
//! A [`Layout`] lists how to construct a type and which fields can be set
//! after construction. Setters are ordinary closures supplied by the type's
//! owner, so the populator only writes what the owner chose to expose.
//!
//! ```text
//! Layout<T>
//!   constructors: [ nullary | with(A) | with((A, B)) ... ]   tried nullary first
//!   fields:       [ (name, setter: Fn(&mut T, F)) ... ]       declaration order
//! ```

use crate::resolver::Resolver;
use crate::shape::Shape;
use fabricate_core::{Generator, GeneratorError};
use std::any::type_name;
use std::sync::Arc;

/// A composite type the populator can build and fill.
pub trait Pojo: Sized + 'static {
    fn layout() -> Layout<Self>;
}

/// Sets one field on an instance with a freshly drawn value.
pub(crate) type Injector<T> = Box<dyn Fn(&mut T) + Send + Sync>;

type Build<T> = Box<dyn Fn(&mut Resolver<'_>) -> Result<Generator<T>, GeneratorError>>;
type Bind<T> = Box<dyn Fn(&mut Resolver<'_>) -> Result<Injector<T>, GeneratorError>>;

pub(crate) struct Constructor<T> {
    pub(crate) nullary: bool,
    pub(crate) build: Build<T>,
}

pub(crate) struct Field<T> {
    pub(crate) name: &'static str,
    pub(crate) type_name: &'static str,
    pub(crate) bind: Bind<T>,
}

/// Constructors and settable fields of `T`.
pub struct Layout<T> {
    pub(crate) constructors: Vec<Constructor<T>>,
    pub(crate) fields: Vec<Field<T>>,
}

impl<T: 'static> Layout<T> {
    pub fn new() -> Self {
        Self {
            constructors: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Register a zero-argument constructor.
    pub fn constructor<F>(mut self, construct: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let construct = Arc::new(construct);
        self.constructors.push(Constructor {
            nullary: true,
            build: Box::new(move |_| {
                let construct = Arc::clone(&construct);
                Ok(Generator::new(move || construct()))
            }),
        });
        self
    }

    /// Register a constructor taking generated arguments.
    ///
    /// Several arguments are passed as a tuple, e.g. `|(name, age): (String, i32)|`.
    pub fn constructor_with<A, F>(mut self, construct: F) -> Self
    where
        A: Shape,
        F: Fn(A) -> T + Send + Sync + 'static,
    {
        let construct = Arc::new(construct);
        self.constructors.push(Constructor {
            nullary: false,
            build: Box::new(move |resolver| {
                let arguments = resolver.resolve::<A>(None)?;
                let construct = Arc::clone(&construct);
                Ok(Generator::new(move || construct(arguments.get())))
            }),
        });
        self
    }

    /// Register a settable field of type `F`.
    pub fn field<F, S>(mut self, name: &'static str, setter: S) -> Self
    where
        F: Shape,
        S: Fn(&mut T, F) + Send + Sync + 'static,
    {
        let setter = Arc::new(setter);
        self.fields.push(Field {
            name,
            type_name: type_name::<F>(),
            bind: Box::new(move |resolver| {
                let values = resolver.resolve::<F>(Some(name))?;
                let setter = Arc::clone(&setter);
                Ok(Box::new(move |target: &mut T| setter(target, values.get())) as Injector<T>)
            }),
        });
        self
    }

    /// Registered field names, in declaration order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }
}

impl<T: 'static> Default for Layout<T> {
    fn default() -> Self {
        Self::new()
    }
}
