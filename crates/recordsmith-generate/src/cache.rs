use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use recordsmith_core::{MetadataProvider, RecordTypeDescriptor, Result};

/// Memoizes metadata lookups for the lifetime of the cache.
///
/// The known-type list is fetched once; each descriptor is fetched at most
/// once per type name. Entries are never invalidated.
pub struct MetadataCache<'a> {
    provider: &'a dyn MetadataProvider,
    known_types: Option<BTreeMap<String, String>>,
    descriptors: HashMap<String, Arc<RecordTypeDescriptor>>,
    fetch_count: usize,
}

impl<'a> MetadataCache<'a> {
    pub fn new(provider: &'a dyn MetadataProvider) -> Self {
        Self {
            provider,
            known_types: None,
            descriptors: HashMap::new(),
            fetch_count: 0,
        }
    }

    /// Catalog spelling of `type_name`, or `None` when the type is unknown.
    pub fn resolve_name(&mut self, type_name: &str) -> Result<Option<String>> {
        let key = type_name.to_ascii_lowercase();
        if self.known_types.is_none() {
            debug!("fetching known record types");
            let names = self.provider.list_known_types()?;
            self.fetch_count += 1;
            self.known_types = Some(
                names
                    .into_iter()
                    .map(|name| (name.to_ascii_lowercase(), name))
                    .collect(),
            );
        }
        Ok(self
            .known_types
            .as_ref()
            .and_then(|known| known.get(&key))
            .cloned())
    }

    pub fn is_known(&mut self, type_name: &str) -> Result<bool> {
        Ok(self.resolve_name(type_name)?.is_some())
    }

    /// Descriptor for `type_name`, fetched from the provider on first use.
    pub fn describe(&mut self, type_name: &str) -> Result<Arc<RecordTypeDescriptor>> {
        let key = type_name.to_ascii_lowercase();
        if let Some(descriptor) = self.descriptors.get(&key) {
            return Ok(Arc::clone(descriptor));
        }

        debug!(record_type = %type_name, "metadata cache miss");
        let descriptor = Arc::new(self.provider.describe(type_name)?);
        self.fetch_count += 1;
        self.descriptors.insert(key, Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Number of calls made to the metadata provider so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    pub fn cached_types(&self) -> usize {
        self.descriptors.len()
    }
}
