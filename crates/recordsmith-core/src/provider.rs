use std::collections::BTreeSet;

use crate::error::Result;
use crate::record::GeneratedRecord;
use crate::schema::RecordTypeDescriptor;

/// Source of record-type metadata.
///
/// Implementations may be expensive to call; the generator memoizes both
/// methods so each is called at most once per type name.
pub trait MetadataProvider {
    /// Names of every record type the catalog knows about.
    fn list_known_types(&self) -> Result<BTreeSet<String>>;

    /// Full descriptor for a known type.
    fn describe(&self, type_name: &str) -> Result<RecordTypeDescriptor>;
}

/// Supplies the well-known singleton identifiers used for owner and profile
/// relationships.
pub trait IdentityProvider {
    fn current_user_id(&self) -> Result<String>;
    fn current_profile_id(&self) -> Result<String>;
}

/// Durable storage for generated records.
pub trait PersistenceSink {
    /// Store the record and return the identifier assigned to it.
    fn insert(&mut self, record: &GeneratedRecord) -> Result<String>;
}
