//! Error types shared across the workspace.

/// Error type for generator construction and object population.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Malformed caller input (bounds, lengths, empty candidate lists)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Composite type has no constructor whose arguments can be produced
    #[error("Cannot instantiate {type_name}: {reason}")]
    NotInstantiable {
        type_name: &'static str,
        reason: String,
    },

    /// Enumerated type declares no constants
    #[error("Enum {type_name} has no values")]
    NoEnumValues { type_name: &'static str },

    /// Leaf type with no entry in any generator mapping
    #[error("No generator registered for {type_name}")]
    NoGenerator { type_name: &'static str },

    /// Container whose element type is not known
    #[error("Element type of {type_name} is untyped")]
    UntypedElements { type_name: &'static str },

    /// Composite type reached again while it is still being resolved
    #[error("Cycle detected while resolving {type_name}")]
    Cycle { type_name: &'static str },
}

impl GeneratorError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Error type for loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Error reading settings file
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Settings parsed but are inconsistent
    #[error("Invalid settings: {0}")]
    Invalid(String),
}
