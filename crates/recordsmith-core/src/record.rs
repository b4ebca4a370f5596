use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Value assigned to a field of a generated record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// No value; the field is present but left blank.
    Null,
    Bool(bool),
    Int(i64),
    Decimal(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Time(NaiveTime),
    /// Identifier of another record.
    Id(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) | FieldValue::Id(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(value) => Some(*value as f64),
            FieldValue::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_none(),
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Decimal(value) => serializer.serialize_f64(*value),
            FieldValue::Text(value) | FieldValue::Id(value) => serializer.serialize_str(value),
            FieldValue::Date(value) => {
                serializer.serialize_str(&value.format("%Y-%m-%d").to_string())
            }
            FieldValue::DateTime(value) => {
                serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            FieldValue::Time(value) => {
                serializer.serialize_str(&value.format("%H:%M:%S").to_string())
            }
        }
    }
}

/// A record instance assembled field by field.
///
/// Fields keep insertion order, which is the descriptor's field order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedRecord {
    type_name: String,
    fields: Vec<(String, FieldValue)>,
}

impl GeneratedRecord {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Assign a field, replacing any earlier value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        match self
            .fields
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for GeneratedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GeneratedRecord", 2)?;
        state.serialize_field("type", &self.type_name)?;
        state.serialize_field("fields", &FieldMap(&self.fields))?;
        state.end()
    }
}

struct FieldMap<'a>(&'a [(String, FieldValue)]);

impl Serialize for FieldMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, value)| (name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_case_insensitively() {
        let mut record = GeneratedRecord::new("Account");
        record.set("Name", FieldValue::Text("first".to_string()));
        record.set("name", FieldValue::Text("second".to_string()));

        assert_eq!(record.len(), 1);
        assert_eq!(record.get("NAME").and_then(FieldValue::as_str), Some("second"));
    }

    #[test]
    fn serializes_fields_as_object_in_order() {
        let mut record = GeneratedRecord::new("Account");
        record.set("Name", FieldValue::Text("acme".to_string()));
        record.set("Employees", FieldValue::Int(12));
        record.set("Website", FieldValue::Null);

        let json = serde_json::to_string(&record).expect("serialize record");
        assert_eq!(
            json,
            r#"{"type":"Account","fields":{"Name":"acme","Employees":12,"Website":null}}"#
        );
    }

    #[test]
    fn datetime_keeps_sub_second_precision() {
        let instant = DateTime::parse_from_rfc3339("2024-05-01T00:00:00.123Z")
            .expect("valid datetime")
            .with_timezone(&Utc);
        let whole = DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z")
            .expect("valid datetime")
            .with_timezone(&Utc);

        assert_eq!(
            serde_json::to_string(&FieldValue::DateTime(instant)).expect("serialize"),
            r#""2024-05-01T00:00:00.123Z""#
        );
        assert_eq!(
            serde_json::to_string(&FieldValue::DateTime(whole)).expect("serialize"),
            r#""2024-05-01T08:30:00Z""#
        );
    }
}
