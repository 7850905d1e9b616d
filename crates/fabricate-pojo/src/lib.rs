//! Populates registered Rust types with generated data.
//!
//! Types opt in by describing how to construct them and which fields can be
//! set ([`Pojo`], usually through [`pojo!`]). The [`Populator`] then builds
//! a generator that constructs a fresh instance per draw and fills every
//! field it can resolve:
//!
//! - leaf types from the override mapping, else the default mapping
//!   (refined by field name: `email`, `city`, `age`, ...)
//! - containers, `Option` and `Box` from their element types
//! - enumerations via [`pojo_enum!`]
//! - nested registered types recursively
//!
//! Fields that cannot be resolved are logged and left at their constructed
//! value; only a type that cannot be constructed at all is an error.
//!
//! # Example
//!
//! ```rust
//! use fabricate_pojo::{pojo, pojos};
//!
//! #[derive(Debug, Default)]
//! struct Address {
//!     city: String,
//!     country: String,
//! }
//! pojo!(Address { city, country });
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     first_name: String,
//!     age: i32,
//!     address: Option<Address>,
//! }
//! pojo!(Person { first_name, age, address });
//!
//! let person = pojos::<Person>().unwrap().get();
//! assert!(person.age >= 18);
//! assert!(person.address.is_some());
//! ```

mod hints;
pub mod layout;
mod macros;
pub mod mapping;
pub mod populator;
pub mod resolver;
pub mod shape;

// Re-exports for convenience and for the registration macros
pub use fabricate_core::{Generator, GeneratorError};
pub use fabricate_generators::Enumerated;
pub use layout::{Layout, Pojo};
pub use mapping::GeneratorMapping;
pub use populator::{pojos, Populator};
pub use resolver::Resolver;
pub use shape::{Shape, Untyped};
