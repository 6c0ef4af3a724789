//! Portfolio data model
//!
//! `PortfolioData` maps field ids to values whose shape is decided by the
//! field's declared kind. Values coming from outside (session files) are
//! coerced against the template schema; anything malformed degrades to the
//! empty value for its kind instead of failing.

pub mod records;

pub use records::{
    EducationAttr, EducationRecord, ExperienceAttr, ExperienceRecord, ProjectAttr,
    ProjectRecord, Record,
};

use crate::catalog::{FieldKind, TemplateDescriptor};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// The value of one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Projects(Vec<ProjectRecord>),
    Experience(Vec<ExperienceRecord>),
    Education(Vec<EducationRecord>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the value matches the shape a field kind expects
    pub fn matches(&self, kind: FieldKind) -> bool {
        match self {
            FieldValue::Text(_) => kind.is_scalar(),
            FieldValue::List(_) => kind == FieldKind::Array,
            FieldValue::Projects(_) => kind == FieldKind::Projects,
            FieldValue::Experience(_) => kind == FieldKind::Experience,
            FieldValue::Education(_) => kind == FieldKind::Education,
        }
    }

    /// Coerce a raw JSON value into the shape of `kind`.
    ///
    /// Returns `None` when the value has the wrong shape.
    fn coerce(kind: FieldKind, raw: &Value) -> Option<FieldValue> {
        match kind {
            FieldKind::Text | FieldKind::Textarea | FieldKind::Email | FieldKind::Url => {
                match raw {
                    Value::String(s) => Some(FieldValue::Text(s.clone())),
                    Value::Number(n) => Some(FieldValue::Text(n.to_string())),
                    Value::Null => Some(FieldValue::Text(String::new())),
                    _ => None,
                }
            }
            FieldKind::Array => raw.as_array().map(|items| {
                FieldValue::List(
                    items
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect(),
                )
            }),
            FieldKind::Projects => coerce_records(raw).map(FieldValue::Projects),
            FieldKind::Experience => coerce_records(raw).map(FieldValue::Experience),
            FieldKind::Education => coerce_records(raw).map(FieldValue::Education),
        }
    }
}

fn coerce_records<R: Record>(raw: &Value) -> Option<Vec<R>> {
    let items = raw.as_array()?;
    Some(
        items
            .iter()
            .map(|item| {
                serde_json::from_value::<R>(item.clone()).unwrap_or_else(|e| {
                    tracing::warn!(kind = %R::KIND, error = %e, "malformed record replaced with blank");
                    R::default()
                })
            })
            .collect(),
    )
}

/// The mapping from field id to user-entered value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortfolioData {
    values: BTreeMap<String, FieldValue>,
}

impl PortfolioData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every field of the template with its empty value, and nothing else
    pub fn for_template(template: &TemplateDescriptor) -> Self {
        let values = template
            .fields
            .iter()
            .map(|f| (f.id.to_string(), f.kind.empty_value()))
            .collect();
        Self { values }
    }

    /// Build data from raw JSON, checked against the template schema.
    ///
    /// Keys outside the schema are dropped. Fields that are missing or have
    /// the wrong shape get the empty value for their kind.
    pub fn from_json(template: &TemplateDescriptor, raw: &Value) -> Self {
        let mut data = Self::for_template(template);
        let Some(object) = raw.as_object() else {
            tracing::warn!(template = template.id, "portfolio data is not an object, using defaults");
            return data;
        };

        for (key, value) in object {
            let Some(field) = template.field(key) else {
                tracing::warn!(template = template.id, field = %key, "dropping field not in schema");
                continue;
            };
            match FieldValue::coerce(field.kind, value) {
                Some(coerced) => {
                    data.values.insert(key.clone(), coerced);
                }
                None => {
                    tracing::warn!(
                        template = template.id,
                        field = %key,
                        kind = %field.kind,
                        "value has the wrong shape, using empty default"
                    );
                }
            }
        }

        data
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Mutable value of a field, reset to the empty value of `kind` when it
    /// is absent or has another shape
    pub(crate) fn value_mut(&mut self, id: &str, kind: FieldKind) -> &mut FieldValue {
        let value = self
            .values
            .entry(id.to_string())
            .or_insert_with(|| kind.empty_value());
        if !value.matches(kind) {
            *value = kind.empty_value();
        }
        value
    }

    pub(crate) fn insert(&mut self, id: impl Into<String>, value: FieldValue) {
        self.values.insert(id.into(), value);
    }

    /// Text value of a field, empty when absent or not text
    pub fn text(&self, id: &str) -> &str {
        self.get(id).and_then(FieldValue::as_text).unwrap_or("")
    }

    /// Text value of a field when it is present and non-empty
    pub fn non_empty_text(&self, id: &str) -> Option<&str> {
        self.get(id)
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// String list of a field, `None` when absent or not a list
    pub fn list(&self, id: &str) -> Option<&[String]> {
        self.get(id).and_then(FieldValue::as_list)
    }

    /// Records stored under a field, `None` when absent or of another kind
    pub fn records<R: Record>(&self, id: &str) -> Option<&[R]> {
        self.get(id).and_then(R::list).map(Vec::as_slice)
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        self.records("projects").unwrap_or(&[])
    }

    pub fn experience(&self) -> &[ExperienceRecord] {
        self.records("experience").unwrap_or(&[])
    }

    pub fn education(&self) -> &[EducationRecord] {
        self.records("education").unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
