//! Core contracts for recordsmith.
//!
//! This crate defines the record-type descriptors consumed by the generator,
//! the values it produces, and the collaborator traits (metadata, identity,
//! persistence) the engine talks to.

pub mod catalog;
pub mod error;
pub mod provider;
pub mod record;
pub mod schema;
pub mod types;
pub mod validation;

pub use catalog::{InMemoryCatalog, StaticIdentity};
pub use error::{Error, Result};
pub use provider::{IdentityProvider, MetadataProvider, PersistenceSink};
pub use record::{FieldValue, GeneratedRecord};
pub use schema::{Catalog, FieldDescriptor, RecordSubtype, RecordTypeDescriptor};
pub use types::{FieldConstraints, FieldKind};
pub use validation::{catalog_json_schema, validate_catalog};

/// Current contract version for catalog JSON documents.
pub const CATALOG_VERSION: &str = "0.1";
