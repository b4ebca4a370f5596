use std::collections::HashSet;

use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::error::{Error, Result};
use crate::schema::Catalog;

/// Validate catalog invariants that the JSON format cannot express.
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let mut type_names = HashSet::new();

    for record_type in &catalog.types {
        if record_type.name.trim().is_empty() {
            return Err(Error::InvalidSchema(
                "record type name must not be empty".to_string(),
            ));
        }
        if !type_names.insert(record_type.name.to_ascii_lowercase()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate record type '{}'",
                record_type.name
            )));
        }

        let mut field_names = HashSet::new();
        for field in &record_type.fields {
            if !field_names.insert(field.name.to_ascii_lowercase()) {
                return Err(Error::InvalidSchema(format!(
                    "duplicate field '{}.{}'",
                    record_type.name, field.name
                )));
            }
        }
    }

    Ok(())
}

/// Emit the JSON Schema for `catalog.json`.
pub fn catalog_json_schema() -> RootSchema {
    schema_for!(Catalog)
}
