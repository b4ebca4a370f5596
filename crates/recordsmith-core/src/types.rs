use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Semantic classification of a field's value domain.
///
/// Classifications the catalog reports but recordsmith does not know about
/// deserialize to [`FieldKind::Unknown`] and always synthesize to no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Boolean,
    Integer,
    Decimal,
    Currency,
    Percent,
    Date,
    Datetime,
    Time,
    ShortText,
    LongText,
    MaskedText,
    SingleSelect,
    MultiSelect,
    Email,
    Phone,
    Url,
    Relationship,
    Identifier,
    #[serde(other)]
    Unknown,
}

impl FieldKind {
    pub fn is_relationship(self) -> bool {
        matches!(self, FieldKind::Relationship)
    }
}

/// Size constraints declared for a field.
///
/// `length` applies to text kinds, `digits` to integers, and
/// `precision`/`scale` to decimal kinds. Absent values read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldConstraints {
    #[serde(default)]
    pub length: u32,
    #[serde(default)]
    pub digits: u32,
    #[serde(default)]
    pub precision: u32,
    #[serde(default)]
    pub scale: u32,
}

impl FieldConstraints {
    pub fn text(length: u32) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn integer(digits: u32) -> Self {
        Self {
            digits,
            ..Self::default()
        }
    }

    pub fn numeric(precision: u32, scale: u32) -> Self {
        Self {
            precision,
            scale,
            ..Self::default()
        }
    }

    /// Digits available to the integer part of a decimal value.
    pub fn integer_digits(&self) -> u32 {
        self.precision.saturating_sub(self.scale)
    }
}
