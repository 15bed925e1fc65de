//! Extraction results: per-field values and per-document records.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Value recorded for a field whose pattern did not match.
pub const NOT_AVAILABLE: &str = "N/A";

/// Column/key holding the originating file name. Always first.
pub const FILE_NAME_KEY: &str = "Archivo";

/// Ordered mapping from field name to extracted value.
///
/// Built by the field extractor with exactly one entry per catalog rule,
/// in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap {
    entries: Vec<(&'static str, String)>,
}

impl FieldMap {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: String) {
        self.entries.push((name, value));
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut String> {
        self.entries
            .iter_mut()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Value for `name`, if the field is part of the map.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// True if `name` holds something other than [`NOT_AVAILABLE`].
    pub fn is_available(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| v != NOT_AVAILABLE)
    }

    /// Field names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Number of fields that were found in the document.
    pub fn available_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, v)| v != NOT_AVAILABLE)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Extracted fields of one fiscal document plus the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    file_name: String,
    fields: FieldMap,
}

impl Record {
    pub fn new(file_name: impl Into<String>, fields: FieldMap) -> Self {
        Self {
            file_name: file_name.into(),
            fields,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Column names: [`FILE_NAME_KEY`] followed by the field names.
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(FILE_NAME_KEY)
            .chain(self.fields.names())
            .collect()
    }

    /// Row values aligned with [`Record::header`].
    pub fn values(&self) -> Vec<&str> {
        std::iter::once(self.file_name.as_str())
            .chain(self.fields.iter().map(|(_, v)| v))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(FILE_NAME_KEY, &self.file_name)?;
        for (name, value) in self.fields.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
