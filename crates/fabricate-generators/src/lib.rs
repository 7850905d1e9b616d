//! Value-domain generators for test data.
//!
//! Every factory here returns a [`Generator<T>`](fabricate_core::Generator):
//! a cheap, cloneable, thread-safe closure that produces a fresh value on
//! each call. Factories that take arguments validate them up front and
//! return `Result<Generator<T>, GeneratorError>`; presets without arguments
//! cannot fail and return the generator directly.
//!
//! # Architecture
//!
//! ```text
//!                 rand::thread_rng()
//!                        │
//!        ┌───────────────┼────────────────┐
//!        ▼               ▼                ▼
//!   numbers (ranges)  strings        resources (word lists)
//!        │               │                │
//!        ├──► times ──► dates             │
//!        ├──► geolocation                 │
//!        ├──► people ◄────────────────────┤
//!        ├──► network ◄── emails          │
//!        └──► places ◄────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use fabricate_generators::{emails, numbers};
//!
//! let ports = numbers::integers(1024, 65536).unwrap();
//! let port = ports.get();
//! assert!((1024..65536).contains(&port));
//!
//! let email = emails::emails().get();
//! assert!(email.contains('@'));
//! ```

pub mod binary;
pub mod booleans;
pub mod collections;
pub mod dates;
pub mod emails;
pub mod enums;
pub mod geolocation;
pub mod identifiers;
pub mod network;
pub mod numbers;
pub mod people;
pub mod places;
pub mod resources;
pub mod strings;
pub mod times;

// Re-exports for convenience
pub use enums::{enum_values, Enumerated};
pub use resources::WordLists;
