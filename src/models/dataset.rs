use serde_json::Value;
use tracing::debug;

use super::Record;

/// Key under which a wrapped dataset keeps its records.
pub const ANIMALS_KEY: &str = "animals";

/// The ordered list of records read from the data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Accepts either a bare array of records or an object with an
    /// `animals` array. Any other shape yields an empty dataset and
    /// non-object elements are skipped.
    pub fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(mut root) => match root.remove(ANIMALS_KEY) {
                Some(Value::Array(items)) => items,
                _ => {
                    debug!("Data object has no '{}' array, using empty dataset", ANIMALS_KEY);
                    Vec::new()
                }
            },
            _ => {
                debug!("Data is neither an array nor an object, using empty dataset");
                Vec::new()
            }
        };

        let total = items.len();
        let records: Vec<Record> = items.into_iter().filter_map(Record::from_value).collect();

        if records.len() < total {
            debug!("Skipped {} non-object entries", total - records.len());
        }

        Self { records }
    }

    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
