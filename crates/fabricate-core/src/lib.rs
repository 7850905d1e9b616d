//! Core types for the fabricate test-data generators.
//!
//! This crate provides the foundational pieces shared by every generator
//! crate in the workspace:
//!
//! - [`Generator`] - A clonable, thread-safe, zero-argument value factory
//! - [`GeneratorError`] - Error taxonomy for generator construction
//! - [`Settings`] - Tunables loaded from YAML
//! - [`checks`] - Argument validation helpers
//!
//! # Architecture
//!
//! ```text
//! fabricate-core (this crate)
//!    │
//!    ├─── fabricate-generators  (value-domain generators)
//!    │
//!    └─── fabricate-pojo        (populates registered composite types)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fabricate_core::{one, Generator};
//!
//! let answers = Generator::new(|| 42);
//! assert_eq!(one(&answers), 42);
//! ```

pub mod checks;
pub mod error;
pub mod generator;
pub mod settings;

// Re-exports for convenience
pub use error::{GeneratorError, SettingsError};
pub use generator::{one, Generator};
pub use settings::{CollectionSettings, Settings};
