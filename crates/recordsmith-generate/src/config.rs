use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// Engine configuration, usually read from `recordsmith.toml`.
///
/// Every key is optional; missing keys fall back to [`GeneratorConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Domain used for generated email addresses and URLs.
    pub email_domain: String,
    /// Fields never generated because the platform rejects assigned values.
    pub excluded_fields: Vec<String>,
    /// Shared types that relationships never create records for.
    pub singleton_types: Vec<String>,
    pub user_type: String,
    pub profile_type: String,
    /// Relationship field that receives the current user.
    pub owner_field: String,
    /// Type whose records disambiguate the subtype of another record.
    pub subtype_type: String,
    /// Levels of relationship records created when recursion is enabled.
    pub max_reference_depth: u8,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            email_domain: "example.com".to_string(),
            excluded_fields: vec!["CleanStatus".to_string()],
            singleton_types: vec![
                "User".to_string(),
                "BusinessHours".to_string(),
                "Group".to_string(),
                "Profile".to_string(),
            ],
            user_type: "User".to_string(),
            profile_type: "Profile".to_string(),
            owner_field: "OwnerId".to_string(),
            subtype_type: "RecordType".to_string(),
            max_reference_depth: 1,
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, GenerationError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn is_excluded(&self, field_name: &str) -> bool {
        contains_ignore_case(&self.excluded_fields, field_name)
    }

    pub fn is_singleton(&self, type_name: &str) -> bool {
        contains_ignore_case(&self.singleton_types, type_name)
    }
}

/// Log output settings consumed by [`crate::init_tracing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, GenerationError> {
    let contents = std::fs::read_to_string(path)?;
    GeneratorConfig::from_toml_str(&contents)
}

fn contains_ignore_case(values: &[String], needle: &str) -> bool {
    values.iter().any(|value| value.eq_ignore_ascii_case(needle))
}
