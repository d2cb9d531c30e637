use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::models::{is_blank, FieldValue, Record, CHARACTERISTICS_KEY};

/// Flat lookup over one map: exact keys first, then a lowercase index.
///
/// The index is built once so that resolving many attributes against the
/// same record does not re-lower every key per alias.
pub struct FieldLookup<'a> {
    fields: &'a Map<String, Value>,
    lowered: HashMap<String, &'a Value>,
}

impl<'a> FieldLookup<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        // Later keys overwrite earlier ones that lower to the same name,
        // unless they are blank
        let lowered: HashMap<_, _> = fields
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(key, value)| (key.to_lowercase(), value))
            .collect();

        Self { fields, lowered }
    }

    /// Raw value of the first alias with a non-blank match.
    ///
    /// A literal key holding a blank value does not stop the search; the
    /// case-insensitive pass still gets a chance to find a usable value.
    pub fn find(&self, aliases: &[&str]) -> Option<&'a Value> {
        self.find_by(aliases, |value| !is_blank(value))
    }

    fn find_by<F>(&self, aliases: &[&str], usable: F) -> Option<&'a Value>
    where
        F: Fn(&Value) -> bool,
    {
        let fields = self.fields;

        aliases
            .iter()
            .find_map(|alias| fields.get(*alias).filter(|value| usable(*value)))
            .or_else(|| {
                aliases.iter().find_map(|alias| {
                    self.lowered
                        .get(&alias.to_lowercase())
                        .copied()
                        .filter(|value| usable(*value))
                })
            })
    }

    pub fn get_ci(&self, aliases: &[&str]) -> Option<FieldValue> {
        self.find(aliases).and_then(FieldValue::narrow)
    }

    /// Like `get_ci`, but skips nested objects, which have no display form.
    pub fn get_display(&self, aliases: &[&str]) -> Option<FieldValue> {
        self.find_by(aliases, |value| !is_blank(value) && !value.is_object())
            .and_then(FieldValue::narrow)
    }

    /// Lookup over a nested object stored under `name`, if there is one.
    pub fn section(&self, name: &str) -> Option<FieldLookup<'a>> {
        match self.find(&[name]) {
            Some(Value::Object(fields)) => Some(FieldLookup::new(fields)),
            _ => None,
        }
    }
}

/// Resolves attributes against a record, falling back to its nested
/// sections (by default only `characteristics`) when the top level has
/// nothing usable.
pub struct FieldResolver<'a> {
    top: FieldLookup<'a>,
    sections: Vec<FieldLookup<'a>>,
}

impl<'a> FieldResolver<'a> {
    pub fn new(record: &'a Record) -> Self {
        Self::with_sections(record, &[CHARACTERISTICS_KEY])
    }

    pub fn with_sections<S: AsRef<str>>(record: &'a Record, sections: &[S]) -> Self {
        let top = FieldLookup::new(record.fields());
        let sections: Vec<_> = sections
            .iter()
            .filter_map(|name| top.section(name.as_ref()))
            .collect();

        Self { top, sections }
    }

    /// First displayable value for `aliases`. An object under an attribute
    /// key counts as nothing usable, so the nested sections are still tried.
    pub fn get(&self, aliases: &[&str]) -> Option<FieldValue> {
        self.top
            .get_display(aliases)
            .or_else(|| self.sections.iter().find_map(|section| section.get_display(aliases)))
    }
}

/// Top-level only lookup.
pub fn get_ci(record: &Record, aliases: &[&str]) -> Option<FieldValue> {
    FieldLookup::new(record.fields()).get_ci(aliases)
}

/// Top-level lookup with `characteristics` fallback.
pub fn get_field(record: &Record, aliases: &[&str]) -> Option<FieldValue> {
    FieldResolver::new(record).get(aliases)
}
