//! Field-map filtering.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::{Rule, SanitizeError};

/// Where the fields to filter come from.
///
/// Request data is always handed over explicitly by the HTTP layer.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Decoded query-string parameters.
    Query(&'a [(String, String)]),
    /// Decoded `application/x-www-form-urlencoded` body.
    Form(&'a [(String, String)]),
    /// Caller-supplied value, must be a JSON object of scalars.
    Direct(&'a Value),
}

impl Source<'_> {
    fn name(&self) -> &'static str {
        match self {
            Self::Query(_) => "query",
            Self::Form(_) => "form",
            Self::Direct(_) => "direct",
        }
    }
}

/// Which sanitized fields to return.
#[derive(Debug, Clone, Copy, Default)]
pub enum Select<'a> {
    #[default]
    All,
    One(&'a str),
    Many(&'a [&'a str]),
}

/// Result of [`filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filtered {
    /// A single field was selected. `None` when its rule rejected the value.
    Value(Option<String>),
    Fields(SanitizedFields),
}

/// Sanitized `name -> value` pairs in input order.
///
/// A `None` value means the field's rule rejected it (e.g. an invalid
/// email address).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedFields {
    fields: Vec<(String, Option<String>)>,
}

impl SanitizedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. A repeated name replaces the earlier value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// `None` when absent, `Some(None)` when present but rejected.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    fn take(&mut self, name: &str) -> Result<Option<String>, SanitizeError> {
        let index = self
            .fields
            .iter()
            .position(|(key, _)| key == name)
            .ok_or_else(|| SanitizeError::KeyNotFound(name.to_string()))?;
        Ok(self.fields.remove(index).1)
    }
}

impl Serialize for SanitizedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Filtered {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Fields(fields) => fields.serialize(serializer),
        }
    }
}

/// Sanitize every field of `source` and return the selected part.
///
/// Fails with [`SanitizeError::InvalidSource`] when a request collection is
/// empty or a direct value is not a flat object, and with
/// [`SanitizeError::KeyNotFound`] when a selected key is absent.
pub fn filter(source: Source<'_>, select: Select<'_>) -> Result<Filtered, SanitizeError> {
    let mut fields = sanitize_source(source)?;

    match select {
        Select::All => Ok(Filtered::Fields(fields)),
        Select::One(key) => fields.take(key).map(Filtered::Value),
        Select::Many(keys) => {
            let mut selected = SanitizedFields::new();
            for key in keys {
                let value = fields
                    .get(key)
                    .ok_or_else(|| SanitizeError::KeyNotFound((*key).to_string()))?;
                selected.insert(*key, value.map(str::to_string));
            }
            Ok(Filtered::Fields(selected))
        }
    }
}

fn sanitize_source(source: Source<'_>) -> Result<SanitizedFields, SanitizeError> {
    let mut fields = SanitizedFields::new();

    match source {
        Source::Query(pairs) | Source::Form(pairs) => {
            if pairs.is_empty() {
                return Err(SanitizeError::InvalidSource(format!(
                    "{} data is empty",
                    source.name()
                )));
            }
            for (name, value) in pairs {
                fields.insert(name.as_str(), Rule::for_field(name).apply(value));
            }
        }
        Source::Direct(value) => {
            let Value::Object(map) = value else {
                return Err(SanitizeError::InvalidSource(format!(
                    "expected an object, got {}",
                    json_kind(value)
                )));
            };
            for (name, value) in map {
                let raw = scalar_text(value).ok_or_else(|| {
                    SanitizeError::InvalidSource(format!(
                        "field `{name}` holds {}, only scalars can be sanitized",
                        json_kind(value)
                    ))
                })?;
                fields.insert(name.as_str(), Rule::for_field(name).apply(&raw));
            }
        }
    }

    Ok(fields)
}

/// Text form of a scalar JSON value. `null` reads as an empty string.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
