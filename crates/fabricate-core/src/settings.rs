//! Settings for the generators, loadable from YAML.
//!
//! Every field has a default, so an empty document is valid:
//!
//! ```yaml
//! collections:
//!   min_size: 3
//!   max_size: 25
//! email_domains:
//!   - example.com
//! resources_dir: ./fixtures/words
//! ```

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Domains used by the default email generator.
pub const DEFAULT_EMAIL_DOMAINS: &[&str] = &[
    "yahoo.com",
    "google.com",
    "gmail.com",
    "example.com",
    "apple.com",
    "icloud.com",
    "microsoft.com",
];

/// Size bounds for containers built by the object populator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectionSettings {
    /// Smallest container size (inclusive)
    pub min_size: usize,

    /// Largest container size (inclusive)
    pub max_size: usize,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            min_size: 3,
            max_size: 25,
        }
    }
}

/// Top-level generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Container sizing for populated objects
    pub collections: CollectionSettings,

    /// Domains for generated email addresses
    pub email_domains: Vec<String>,

    /// Directory holding replacement word lists, if any
    pub resources_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collections: CollectionSettings::default(),
            email_domains: DEFAULT_EMAIL_DOMAINS
                .iter()
                .map(|d| d.to_string())
                .collect(),
            resources_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loaded settings from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject settings no generator could honour.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.collections.min_size > self.collections.max_size {
            return Err(SettingsError::Invalid(format!(
                "collections.min_size ({}) exceeds collections.max_size ({})",
                self.collections.min_size, self.collections.max_size
            )));
        }

        if self.email_domains.is_empty() {
            return Err(SettingsError::Invalid(
                "email_domains must list at least one domain".to_string(),
            ));
        }

        if let Some(domain) = self.email_domains.iter().find(|d| d.trim().is_empty()) {
            return Err(SettingsError::Invalid(format!(
                "email domain '{domain}' is blank"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.collections.min_size, 3);
        assert_eq!(settings.collections.max_size, 25);
        assert_eq!(settings.email_domains.len(), DEFAULT_EMAIL_DOMAINS.len());
        assert!(settings.resources_dir.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let settings = Settings::from_yaml("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
collections:
  max_size: 10
email_domains:
  - example.org
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.collections.min_size, 3);
        assert_eq!(settings.collections.max_size, 10);
        assert_eq!(settings.email_domains, vec!["example.org".to_string()]);
    }

    #[test]
    fn test_inverted_collection_bounds_rejected() {
        let yaml = r#"
collections:
  min_size: 30
  max_size: 5
"#;
        let result = Settings::from_yaml(yaml);
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_empty_domains_rejected() {
        let result = Settings::from_yaml("email_domains: []");
        assert!(matches!(result, Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Settings::from_yaml("collections: [not, a, map]");
        assert!(matches!(result, Err(SettingsError::YamlError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "resources_dir: /tmp/words").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.resources_dir, Some(PathBuf::from("/tmp/words")));
    }

    #[test]
    fn test_missing_file() {
        let result = Settings::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(SettingsError::IoError(_))));
    }
}
