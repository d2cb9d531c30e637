use serde_json::{Map, Value};

use super::Pick;

/// One animal entry: an ordered map of field name to raw JSON value.
///
/// Key order follows the source document, which matters for the
/// case-insensitive index where the last key (after lowering) wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Narrow a JSON value into a record. Anything but an object is rejected.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self::new(fields)),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A field value after type narrowing.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Nested(Record),
}

impl FieldValue {
    /// Narrow a raw JSON value, treating null, blank strings, empty lists and
    /// empty objects as absent. Strings are trimmed; numbers and booleans
    /// become their textual form.
    pub fn narrow(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let items: Vec<String> = items.iter().filter_map(scalar_text).collect();
                if items.is_empty() {
                    None
                } else {
                    Some(FieldValue::List(items))
                }
            }
            Value::Object(fields) if fields.is_empty() => None,
            Value::Object(fields) => Some(FieldValue::Nested(Record::new(fields.clone()))),
            scalar => scalar_text(scalar).map(FieldValue::Text),
        }
    }

    pub fn as_nested(&self) -> Option<&Record> {
        match self {
            FieldValue::Nested(record) => Some(record),
            _ => None,
        }
    }

    /// Display text for a fact. Nested maps have no display form.
    pub fn display(&self, pick: Pick) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::List(items) => match pick {
                Pick::First => items.first().cloned(),
                Pick::Join => Some(items.join(", ")),
            },
            FieldValue::Nested(_) => None,
        }
    }
}

/// True when a raw value would narrow to nothing.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.iter().all(|item| scalar_text(item).is_none()),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
