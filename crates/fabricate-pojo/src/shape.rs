//! How each type is generated when no mapping entry covers it.
//!
//! ```text
//! leaf (String, i32, Uuid, ...)   -> NoGenerator (only mappings supply leaves)
//! Vec / HashSet / BTreeSet        -> sized containers of resolved elements
//! HashMap / BTreeMap              -> sized maps of resolved keys and values
//! Option / Box                    -> the inner generator, wrapped
//! tuples                          -> one draw per position (constructor arguments)
//! Untyped                         -> UntypedElements
//! registered types                -> Resolver::pojo / Resolver::enumeration
//! ```

use crate::resolver::Resolver;
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use fabricate_core::{Generator, GeneratorError};
use fabricate_generators::collections::fill_distinct;
use std::any::{type_name, Any};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::Hash;
use std::net::Ipv4Addr;
use uuid::Uuid;

/// A type the populator knows how to generate.
///
/// Registered composites implement this through `pojo!` or `pojo_shape!`,
/// enumerations through `pojo_enum!`.
pub trait Shape: Sized + 'static {
    /// Build a generator for `Self` from its structure.
    ///
    /// Only called when neither the override nor the default mapping has
    /// an entry for `Self`.
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError>;
}

/// A value whose type is not known statically.
///
/// Containers of `Untyped` cannot be generated; fields holding them are
/// skipped and keep their constructed value.
#[derive(Debug)]
pub struct Untyped(pub Box<dyn Any + Send>);

impl Shape for Untyped {
    fn shape(_: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        Err(GeneratorError::UntypedElements {
            type_name: type_name::<Self>(),
        })
    }
}

// ============================================================================
// Leaves
// ============================================================================

macro_rules! leaf_shapes {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Shape for $ty {
                fn shape(_: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
                    Err(GeneratorError::NoGenerator {
                        type_name: type_name::<Self>(),
                    })
                }
            }
        )*
    };
}

leaf_shapes!(
    String,
    char,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    usize,
    f32,
    f64,
    Bytes,
    DateTime<Utc>,
    NaiveDate,
    Uuid,
    Ipv4Addr,
);

// ============================================================================
// Containers
// ============================================================================

impl<E: Shape> Shape for Vec<E> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        let elements = resolver.resolve::<E>(None)?;
        let sizes = resolver.collection_sizes();

        Ok(Generator::new(move || elements.take(sizes.get())))
    }
}

impl<E: Shape + Eq + Hash> Shape for HashSet<E> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        let elements = resolver.resolve::<E>(None)?;
        let sizes = resolver.collection_sizes();

        Ok(Generator::new(move || {
            let size = sizes.get();
            fill_distinct(size, HashSet::with_capacity(size), |set| {
                set.insert(elements.get());
                set.len()
            })
        }))
    }
}

impl<E: Shape + Ord> Shape for BTreeSet<E> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        let elements = resolver.resolve::<E>(None)?;
        let sizes = resolver.collection_sizes();

        Ok(Generator::new(move || {
            fill_distinct(sizes.get(), BTreeSet::new(), |set| {
                set.insert(elements.get());
                set.len()
            })
        }))
    }
}

impl<K: Shape + Eq + Hash, V: Shape> Shape for HashMap<K, V> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        let keys = resolver.resolve::<K>(None)?;
        let values = resolver.resolve::<V>(None)?;
        let sizes = resolver.collection_sizes();

        Ok(Generator::new(move || {
            let size = sizes.get();
            fill_distinct(size, HashMap::with_capacity(size), |map| {
                map.insert(keys.get(), values.get());
                map.len()
            })
        }))
    }
}

impl<K: Shape + Ord, V: Shape> Shape for BTreeMap<K, V> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        let keys = resolver.resolve::<K>(None)?;
        let values = resolver.resolve::<V>(None)?;
        let sizes = resolver.collection_sizes();

        Ok(Generator::new(move || {
            fill_distinct(sizes.get(), BTreeMap::new(), |map| {
                map.insert(keys.get(), values.get());
                map.len()
            })
        }))
    }
}

impl<E: Shape> Shape for Option<E> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        Ok(resolver.resolve::<E>(None)?.map(Some))
    }
}

impl<E: Shape> Shape for Box<E> {
    fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
        Ok(resolver.resolve::<E>(None)?.map(Box::new))
    }
}

// ============================================================================
// Tuples (constructor arguments)
// ============================================================================

macro_rules! tuple_shapes {
    ($(($($ty:ident $value:ident),+)),* $(,)?) => {
        $(
            impl<$($ty: Shape),+> Shape for ($($ty,)+) {
                fn shape(resolver: &mut Resolver<'_>) -> Result<Generator<Self>, GeneratorError> {
                    $(let $value = resolver.resolve::<$ty>(None)?;)+
                    Ok(Generator::new(move || ($($value.get(),)+)))
                }
            }
        )*
    };
}

tuple_shapes!((A a), (A a, B b), (A a, B b, C c), (A a, B b, C c, D d));
