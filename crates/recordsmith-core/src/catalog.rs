use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::provider::{IdentityProvider, MetadataProvider};
use crate::schema::{Catalog, RecordTypeDescriptor};
use crate::validation::validate_catalog;

/// Metadata provider backed by a catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    pub fn new(types: Vec<RecordTypeDescriptor>) -> Result<Self> {
        Self::from_catalog(Catalog {
            catalog_version: crate::CATALOG_VERSION.to_string(),
            types,
        })
    }

    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        validate_catalog(&catalog)?;
        Ok(Self { catalog })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Self::from_catalog(catalog)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl MetadataProvider for InMemoryCatalog {
    fn list_known_types(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .catalog
            .types
            .iter()
            .map(|record_type| record_type.name.clone())
            .collect())
    }

    fn describe(&self, type_name: &str) -> Result<RecordTypeDescriptor> {
        self.catalog
            .types
            .iter()
            .find(|record_type| record_type.is_named(type_name))
            .cloned()
            .ok_or_else(|| Error::Metadata(format!("type '{type_name}' not found in catalog")))
    }
}

/// Identity provider returning fixed identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticIdentity {
    pub user_id: String,
    pub profile_id: String,
}

impl StaticIdentity {
    pub fn new(user_id: impl Into<String>, profile_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            profile_id: profile_id.into(),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user_id(&self) -> Result<String> {
        Ok(self.user_id.clone())
    }

    fn current_profile_id(&self) -> Result<String> {
        Ok(self.profile_id.clone())
    }
}
