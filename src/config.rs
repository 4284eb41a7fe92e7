// src/config.rs

//! Parser configuration
//!
//! The built-in registries cover what every Pkgfile carries. Ports that use
//! extra fields can extend them from a TOML file:
//!
//! ```toml
//! [metadata]
//! list_keys = ["optional"]
//!
//! [variables]
//! scalars = ["maintainer"]
//! arrays = ["renames"]
//! ```

use crate::error::{Error, Result};
use crate::pkgfile::metadata::{split_dependencies, MetadataExtractor};
use crate::pkgfile::variables::VariableExtractor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Registry extensions applied on top of the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgfileConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,

    #[serde(default)]
    pub variables: VariableConfig,
}

/// `[metadata]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataConfig {
    /// Keys whose values are split like `Depends on`
    #[serde(default)]
    pub list_keys: Vec<String>,
}

/// `[variables]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableConfig {
    /// Extra single-line `name=value` assignments
    #[serde(default)]
    pub scalars: Vec<String>,

    /// Extra `name=(...)` arrays
    #[serde(default)]
    pub arrays: Vec<String>,
}

impl PkgfileConfig {
    /// Parse a configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&content)?;
        debug!(
            "Loaded config from {}: {} list key(s), {} scalar(s), {} array(s)",
            path.display(),
            config.metadata.list_keys.len(),
            config.variables.scalars.len(),
            config.variables.arrays.len()
        );
        Ok(config)
    }

    /// Build a metadata extractor with the configured list keys
    pub fn metadata_extractor(&self) -> MetadataExtractor {
        let mut extractor = MetadataExtractor::new();
        for key in &self.metadata.list_keys {
            extractor.register(key, split_dependencies);
        }
        extractor
    }

    /// Build a variable extractor with the configured variables
    pub fn variable_extractor(&self) -> Result<VariableExtractor> {
        let mut extractor = VariableExtractor::new();
        for name in &self.variables.scalars {
            extractor.register(name)?;
        }
        for name in &self.variables.arrays {
            extractor.register_array(name)?;
        }
        Ok(extractor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = PkgfileConfig::from_toml("").unwrap();
        assert_eq!(config, PkgfileConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let config = PkgfileConfig::from_toml(
            r#"
[metadata]
list_keys = ["optional"]

[variables]
scalars = ["maintainer"]
arrays = ["renames"]
"#,
        )
        .unwrap();

        assert_eq!(config.metadata.list_keys, vec!["optional"]);
        assert_eq!(config.variables.scalars, vec!["maintainer"]);
        assert_eq!(config.variables.arrays, vec!["renames"]);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            PkgfileConfig::from_toml("[metadata]\nlist_keys = 3\n"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_extractors_from_config() {
        let config = PkgfileConfig {
            metadata: MetadataConfig {
                list_keys: vec!["Optional".to_string()],
            },
            variables: VariableConfig {
                scalars: vec!["maintainer".to_string()],
                arrays: vec![],
            },
        };

        assert!(config.metadata_extractor().is_registered("optional"));
        let vars = config.variable_extractor().unwrap();
        assert!(vars.names().any(|n| n == "maintainer"));
    }

    #[test]
    fn test_bad_variable_name_in_config() {
        let config = PkgfileConfig {
            variables: VariableConfig {
                scalars: vec!["not valid".to_string()],
                arrays: vec![],
            },
            ..Default::default()
        };
        assert!(config.variable_extractor().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = PkgfileConfig::load(Path::new("/nonexistent/pkgfile.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
