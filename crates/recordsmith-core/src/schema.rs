use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{FieldConstraints, FieldKind};

/// Catalog of record types, as loaded from a `catalog.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Contract version for this catalog format.
    #[serde(default = "default_catalog_version")]
    pub catalog_version: String,
    /// Record types in declaration order.
    pub types: Vec<RecordTypeDescriptor>,
}

fn default_catalog_version() -> String {
    crate::CATALOG_VERSION.to_string()
}

/// A record type with its ordered fields and subtypes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RecordTypeDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<RecordSubtype>,
}

impl RecordTypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            subtypes: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_subtype(mut self, subtype: RecordSubtype) -> Self {
        self.subtypes.push(subtype);
        self
    }

    /// Case-insensitive field lookup.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Sub-classification of a record type used to pick which variant is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecordSubtype {
    pub id: String,
    pub available: bool,
}

impl RecordSubtype {
    pub fn new(id: impl Into<String>, available: bool) -> Self {
        Self {
            id: id.into(),
            available,
        }
    }
}

/// Immutable description of one field of a record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub constraints: FieldConstraints,
    /// Whether the field accepts no value.
    #[serde(default)]
    pub nillable: bool,
    /// Whether the field may be assigned when a record is created.
    #[serde(default = "default_settable")]
    pub settable: bool,
    /// Allowed values for enumerated fields, in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    /// Permissible target type names for relationship fields, in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<String>,
}

fn default_settable() -> bool {
    true
}

impl FieldDescriptor {
    /// A settable, required field of the given kind with no constraints.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            constraints: FieldConstraints::default(),
            nillable: false,
            settable: true,
            choices: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn short_text(name: impl Into<String>, length: u32) -> Self {
        Self::new(name, FieldKind::ShortText).with_constraints(FieldConstraints::text(length))
    }

    pub fn single_select<I, S>(name: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(name, FieldKind::SingleSelect);
        field.choices = choices.into_iter().map(Into::into).collect();
        field
    }

    pub fn relationship<I, S>(name: impl Into<String>, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(name, FieldKind::Relationship);
        field.targets = targets.into_iter().map(Into::into).collect();
        field
    }

    pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn nillable(mut self) -> Self {
        self.nillable = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.settable = false;
        self
    }

    /// First permissible target; multi-target fields are not disambiguated.
    pub fn primary_target(&self) -> Option<&str> {
        self.targets.first().map(String::as_str)
    }
}
