use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use recordsmith_core::{GeneratedRecord, PersistenceSink, Result};

/// Sink that keeps every inserted record in memory.
#[derive(Debug, Default)]
pub struct InMemorySink {
    records: Vec<(String, GeneratedRecord)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(String, GeneratedRecord)] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&GeneratedRecord> {
        self.records
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, record)| record)
    }

    pub fn records_of_type<'s>(
        &'s self,
        type_name: &'s str,
    ) -> impl Iterator<Item = &'s GeneratedRecord> + 's {
        self.records
            .iter()
            .map(|(_, record)| record)
            .filter(move |record| record.type_name().eq_ignore_ascii_case(type_name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PersistenceSink for InMemorySink {
    fn insert(&mut self, record: &GeneratedRecord) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.records.push((id.clone(), record.clone()));
        Ok(id)
    }
}

/// Sink that writes each inserted record as one JSON line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    written: u64,
}

#[derive(Serialize)]
struct PersistedLine<'a> {
    id: &'a str,
    #[serde(flatten)]
    record: &'a GeneratedRecord,
}

impl JsonLinesSink<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> PersistenceSink for JsonLinesSink<W> {
    fn insert(&mut self, record: &GeneratedRecord) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        serde_json::to_writer(&mut self.writer, &PersistedLine { id: &id, record })?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recordsmith_core::FieldValue;

    fn account() -> GeneratedRecord {
        let mut record = GeneratedRecord::new("Account");
        record.set("Name", FieldValue::Text("acme".to_string()));
        record
    }

    #[test]
    fn in_memory_sink_assigns_distinct_ids() {
        let mut sink = InMemorySink::new();
        let first = sink.insert(&account()).expect("insert first");
        let second = sink.insert(&account()).expect("insert second");

        assert_ne!(first, second);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.get(&first), Some(&account()));
        assert_eq!(sink.records_of_type("account").count(), 2);
    }

    #[test]
    fn json_lines_sink_writes_one_line_per_record() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let id = sink.insert(&account()).expect("insert");
        sink.insert(&account()).expect("insert");
        assert_eq!(sink.written(), 2);

        let bytes = sink.into_inner().expect("flush");
        let text = String::from_utf8(bytes).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).expect("parse line");
        assert_eq!(first["id"], id.as_str());
        assert_eq!(first["type"], "Account");
        assert_eq!(first["fields"]["Name"], "acme");
    }
}
