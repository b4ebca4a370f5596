use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Which fields of a record type get a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldInclusion {
    /// Every settable, non-excluded field.
    All,
    /// Only fields that do not accept an empty value.
    RequiredOnly,
}

impl FieldInclusion {
    pub fn from_required_only(required_only: bool) -> Self {
        if required_only {
            FieldInclusion::RequiredOnly
        } else {
            FieldInclusion::All
        }
    }
}

/// How a single generation request fills a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPolicy {
    pub inclusion: FieldInclusion,
    /// Create and persist records for relationship fields.
    pub recursive_references: bool,
}

impl GenerationPolicy {
    pub fn new(required_only: bool, recursive_references: bool) -> Self {
        Self {
            inclusion: FieldInclusion::from_required_only(required_only),
            recursive_references,
        }
    }
}

/// Remaining levels of relationship records that may still be created.
///
/// Every created child consumes one level, so generation always terminates
/// regardless of how the schema's relationships loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReferenceDepth(u8);

impl ReferenceDepth {
    pub const NONE: ReferenceDepth = ReferenceDepth(0);

    pub fn new(levels: u8) -> Self {
        Self(levels)
    }

    pub fn for_policy(policy: GenerationPolicy, max_levels: u8) -> Self {
        if policy.recursive_references {
            Self(max_levels)
        } else {
            Self::NONE
        }
    }

    pub fn remaining(self) -> u8 {
        self.0
    }

    /// Depth available to a child record, or `None` when no level is left.
    pub fn descend(self) -> Option<ReferenceDepth> {
        self.0.checked_sub(1).map(ReferenceDepth)
    }
}

/// Caller-supplied literal values keyed by field name (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    values: HashMap<String, String>,
}

impl FieldOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl AsRef<str>, literal: impl Into<String>) -> Self {
        self.insert(field, literal);
        self
    }

    pub fn insert(&mut self, field: impl AsRef<str>, literal: impl Into<String>) {
        self.values
            .insert(field.as_ref().to_ascii_lowercase(), literal.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .get(&field.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldOverrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = FieldOverrides::new();
        for (field, literal) in iter {
            overrides.insert(field, literal);
        }
        overrides
    }
}

/// Counters accumulated by a generator across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub records_built: u64,
    pub records_persisted: u64,
    pub fields_synthesized: u64,
    pub fields_overridden: u64,
    pub references_resolved: u64,
    pub references_blank: u64,
}

impl GenerationStats {
    pub fn record_built(&mut self) {
        self.records_built += 1;
    }

    pub fn record_persisted(&mut self) {
        self.records_persisted += 1;
    }

    pub fn record_synthesized(&mut self) {
        self.fields_synthesized += 1;
    }

    pub fn record_override(&mut self) {
        self.fields_overridden += 1;
    }

    pub fn record_reference(&mut self, resolved: bool) {
        if resolved {
            self.references_resolved += 1;
        } else {
            self.references_blank += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_runs_out() {
        let depth = ReferenceDepth::for_policy(GenerationPolicy::new(true, true), 1);
        let child = depth.descend().expect("one level available");
        assert_eq!(child, ReferenceDepth::NONE);
        assert!(child.descend().is_none());
    }

    #[test]
    fn recursion_disabled_grants_no_depth() {
        let depth = ReferenceDepth::for_policy(GenerationPolicy::new(false, false), 3);
        assert_eq!(depth.remaining(), 0);
    }

    #[test]
    fn overrides_match_any_case() {
        let overrides: FieldOverrides = [("Name", "Acme")].into_iter().collect();
        assert_eq!(overrides.get("NAME"), Some("Acme"));
        assert_eq!(overrides.get("Industry"), None);
    }
}
