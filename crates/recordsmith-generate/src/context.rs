use recordsmith_core::{
    GeneratedRecord, IdentityProvider, MetadataProvider, PersistenceSink, Result,
};

use crate::cache::MetadataCache;

/// Collaborators a generator works against, plus the state cached from them.
///
/// The current user and profile are looked up on first use and reused for
/// every later request served by this context.
pub struct GenerationContext<'a> {
    metadata: MetadataCache<'a>,
    identity: &'a dyn IdentityProvider,
    sink: &'a mut dyn PersistenceSink,
    current_user: Option<String>,
    current_profile: Option<String>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        metadata: &'a dyn MetadataProvider,
        identity: &'a dyn IdentityProvider,
        sink: &'a mut dyn PersistenceSink,
    ) -> Self {
        Self {
            metadata: MetadataCache::new(metadata),
            identity,
            sink,
            current_user: None,
            current_profile: None,
        }
    }

    pub fn metadata(&self) -> &MetadataCache<'a> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut MetadataCache<'a> {
        &mut self.metadata
    }

    pub fn current_user_id(&mut self) -> Result<String> {
        if let Some(id) = &self.current_user {
            return Ok(id.clone());
        }
        let id = self.identity.current_user_id()?;
        self.current_user = Some(id.clone());
        Ok(id)
    }

    pub fn current_profile_id(&mut self) -> Result<String> {
        if let Some(id) = &self.current_profile {
            return Ok(id.clone());
        }
        let id = self.identity.current_profile_id()?;
        self.current_profile = Some(id.clone());
        Ok(id)
    }

    pub fn persist(&mut self, record: &GeneratedRecord) -> Result<String> {
        self.sink.insert(record)
    }
}
