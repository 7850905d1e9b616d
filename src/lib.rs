//! Fabricate
//!
//! Random test data for Rust tests: typed value generators and a populator
//! that fills registered structs, collections and enums.
//!
//! # Crates
//!
//! - `fabricate_core` - `Generator<T>`, argument checks, errors, `Settings`
//! - `fabricate_generators` - value domains (numbers, strings, times, people, places, ...)
//! - `fabricate_pojo` - the object populator and its registration macros
//!
//! # Example
//!
//! ```rust
//! use fabricate::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     name: String,
//!     email: String,
//!     age: i32,
//!     scores: Vec<i64>,
//! }
//! pojo!(User { name, email, age, scores });
//!
//! let users = pojos::<User>().unwrap();
//! let user = one(&users);
//! assert!(user.email.contains('@'));
//!
//! let dice = numbers::integers(1, 7).unwrap();
//! assert!((1..7).contains(&dice.get()));
//! ```

pub use fabricate_core::{
    checks, one, CollectionSettings, Generator, GeneratorError, Settings, SettingsError,
};
pub use fabricate_generators::{
    binary, booleans, collections, dates, emails, enum_values, geolocation, identifiers, network,
    numbers, people, places, resources, strings, times, Enumerated, WordLists,
};
pub use fabricate_pojo::{
    pojo, pojo_enum, pojo_shape, pojos, GeneratorMapping, Layout, Pojo, Populator, Resolver,
    Shape, Untyped,
};

/// Everything a typical test needs.
pub mod prelude {
    pub use crate::{
        binary, booleans, collections, dates, emails, geolocation, identifiers, network,
        numbers, one, people, places, pojo, pojo_enum, pojo_shape, pojos, strings, times,
        Generator, GeneratorError, GeneratorMapping, Layout, Pojo, Populator, Settings,
    };
}
