#![allow(dead_code)]

use std::cell::Cell;
use std::collections::BTreeSet;

use recordsmith_core::{
    Error, GeneratedRecord, IdentityProvider, InMemoryCatalog, MetadataProvider,
    PersistenceSink, RecordTypeDescriptor, Result,
};

pub const USER_ID: &str = "005000000000001AAA";
pub const PROFILE_ID: &str = "00e000000000001AAA";

/// Catalog wrapper that counts calls to the provider.
pub struct CountingCatalog {
    inner: InMemoryCatalog,
    pub list_calls: Cell<usize>,
    pub describe_calls: Cell<usize>,
}

impl CountingCatalog {
    pub fn new(types: Vec<RecordTypeDescriptor>) -> Self {
        Self {
            inner: InMemoryCatalog::new(types).expect("valid catalog"),
            list_calls: Cell::new(0),
            describe_calls: Cell::new(0),
        }
    }
}

impl MetadataProvider for CountingCatalog {
    fn list_known_types(&self) -> Result<BTreeSet<String>> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.inner.list_known_types()
    }

    fn describe(&self, type_name: &str) -> Result<RecordTypeDescriptor> {
        self.describe_calls.set(self.describe_calls.get() + 1);
        self.inner.describe(type_name)
    }
}

/// Identity provider that counts lookups.
#[derive(Default)]
pub struct CountingIdentity {
    pub user_calls: Cell<usize>,
    pub profile_calls: Cell<usize>,
}

impl IdentityProvider for CountingIdentity {
    fn current_user_id(&self) -> Result<String> {
        self.user_calls.set(self.user_calls.get() + 1);
        Ok(USER_ID.to_string())
    }

    fn current_profile_id(&self) -> Result<String> {
        self.profile_calls.set(self.profile_calls.get() + 1);
        Ok(PROFILE_ID.to_string())
    }
}

/// Sink that accepts `capacity` inserts and fails afterwards.
pub struct FailingSink {
    capacity: usize,
    pub inserted: Vec<GeneratedRecord>,
}

impl FailingSink {
    pub fn after(capacity: usize) -> Self {
        Self {
            capacity,
            inserted: Vec::new(),
        }
    }
}

impl PersistenceSink for FailingSink {
    fn insert(&mut self, record: &GeneratedRecord) -> Result<String> {
        if self.inserted.len() >= self.capacity {
            return Err(Error::Persistence(format!(
                "insert rejected for {}",
                record.type_name()
            )));
        }
        self.inserted.push(record.clone());
        Ok(format!("id-{}", self.inserted.len()))
    }
}
