//! Session files: the selected template plus its data mapping, as JSON

use crate::catalog::{self, TemplateDescriptor};
use crate::data::PortfolioData;
use crate::error::{Error, Result};
use crate::form::FormBuilder;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;

/// A saved editing session
#[derive(Debug, Clone)]
pub struct Session {
    pub template: &'static TemplateDescriptor,
    pub data: PortfolioData,
}

impl Session {
    /// A fresh session with reset data
    pub fn new(template: &'static TemplateDescriptor) -> Self {
        Self {
            template,
            data: PortfolioData::for_template(template),
        }
    }

    /// Parse `{ "template": "<id>", "data": { ... } }`.
    ///
    /// The template id must exist; data is coerced against its schema.
    pub fn from_json(raw: &Value) -> Result<Self> {
        let id = raw
            .get("template")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::other("session is missing a \"template\" id"))?;
        let template = catalog::get(id)?;
        let data = match raw.get("data") {
            Some(value) => PortfolioData::from_json(template, value),
            None => PortfolioData::for_template(template),
        };
        Ok(Self { template, data })
    }

    pub fn to_json(&self) -> Value {
        json!({
            "template": self.template.id,
            "data": self.data.to_json(),
        })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let raw: Value = serde_json::from_str(&contents)?;
        let session = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), template = session.template.id, "session loaded");
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.to_json())?)?;
        Ok(())
    }

    pub fn into_form(self) -> FormBuilder {
        FormBuilder::with_data(self.template, self.data)
    }

    pub fn from_form(form: FormBuilder) -> Self {
        let template = form.template();
        Self {
            template,
            data: form.into_data(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_session_has_every_field() {
        let template = catalog::get("freshstart").unwrap();
        let session = Session::new(template);
        for field in template.fields {
            assert!(session.data.contains(field.id));
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let mut form = Session::new(catalog::get("devflow").unwrap()).into_form();
        form.set_text("name", "Ada").unwrap();
        form.add_item("skills", "Rust").unwrap();
        Session::from_form(form).save(&path).unwrap();

        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded.template.id, "devflow");
        assert_eq!(loaded.data.text("name"), "Ada");
        assert_eq!(loaded.data.list("skills").unwrap(), ["Rust"]);
    }

    #[test]
    fn test_from_json_coerces_data() {
        let raw = json!({
            "template": "codecraft",
            "data": { "name": "Ada", "skills": "not a list", "twitter": "@ada" }
        });
        let session = Session::from_json(&raw).unwrap();
        assert_eq!(session.data.text("name"), "Ada");
        assert!(!session.data.contains("twitter"));
    }

    #[test]
    fn test_from_json_without_data() {
        let session = Session::from_json(&json!({ "template": "testlab" })).unwrap();
        assert_eq!(session.data.len(), session.template.fields.len());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Session::from_json(&json!({ "template": "retro" })),
            Err(Error::UnknownTemplate(_))
        ));
        assert!(Session::from_json(&json!({ "data": {} })).is_err());
    }
}
