//! Form builder
//!
//! The only component that mutates portfolio data. Each operation is checked
//! against the field's declared kind before it touches the mapping.

use crate::catalog::{FieldDescriptor, FieldKind, TemplateDescriptor};
use crate::data::{
    EducationAttr, EducationRecord, ExperienceAttr, ExperienceRecord, FieldValue,
    PortfolioData, ProjectAttr, ProjectRecord, Record,
};
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Editor state for one selected template
#[derive(Debug, Clone)]
pub struct FormBuilder {
    template: &'static TemplateDescriptor,
    data: PortfolioData,
    pending: HashMap<&'static str, String>,
}

impl FormBuilder {
    /// Start editing a template with reset data
    pub fn new(template: &'static TemplateDescriptor) -> Self {
        tracing::debug!(template = template.id, "template selected");
        Self {
            template,
            data: PortfolioData::for_template(template),
            pending: HashMap::new(),
        }
    }

    /// Resume editing existing data.
    ///
    /// Keys outside the schema are dropped and missing fields are filled with
    /// their empty value, so the subset invariant holds afterwards.
    pub fn with_data(template: &'static TemplateDescriptor, data: PortfolioData) -> Self {
        let mut form = Self::new(template);
        for (id, value) in data.iter() {
            if let Some(field) = template.field(id) {
                if value.matches(field.kind) {
                    form.data.insert(id, value.clone());
                }
            }
        }
        form
    }

    /// Switch to another template, discarding everything entered so far
    pub fn select_template(&mut self, template: &'static TemplateDescriptor) {
        tracing::debug!(from = self.template.id, to = template.id, "template changed, data reset");
        self.template = template;
        self.data = PortfolioData::for_template(template);
        self.pending.clear();
    }

    pub fn template(&self) -> &'static TemplateDescriptor {
        self.template
    }

    pub fn data(&self) -> &PortfolioData {
        &self.data
    }

    pub fn into_data(self) -> PortfolioData {
        self.data
    }

    /// Fields in schema order, for rendering one editor per field
    pub fn fields(&self) -> &'static [FieldDescriptor] {
        self.template.fields
    }

    fn field_of(
        &self,
        id: &str,
        expected: impl Fn(FieldKind) -> bool,
        what: &str,
    ) -> Result<&'static FieldDescriptor> {
        let field = self.template.require_field(id)?;
        if !expected(field.kind) {
            return Err(Error::field_kind(
                id,
                field.kind.as_str(),
                format!("expected {}", what),
            ));
        }
        Ok(field)
    }

    /// Replace the value of a text, textarea, email or url field
    pub fn set_text(&mut self, id: &str, value: impl Into<String>) -> Result<()> {
        let field = self.field_of(id, FieldKind::is_scalar, "a text field")?;
        self.data.insert(field.id, FieldValue::Text(value.into()));
        Ok(())
    }

    /// Update the pending new-item text of an array field
    pub fn set_pending(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let field = self.field_of(id, |k| k == FieldKind::Array, "an array field")?;
        self.pending.insert(field.id, text.into());
        Ok(())
    }

    pub fn pending(&self, id: &str) -> &str {
        self.pending.get(id).map(String::as_str).unwrap_or("")
    }

    /// Append the pending item (trimmed, if non-empty) and clear it.
    ///
    /// Returns whether an item was added.
    pub fn submit_pending(&mut self, id: &str) -> Result<bool> {
        let field = self.field_of(id, |k| k == FieldKind::Array, "an array field")?;
        let text = self.pending.remove(field.id).unwrap_or_default();
        self.add_item(id, &text)
    }

    /// Append a trimmed item to an array field; blank items are ignored
    pub fn add_item(&mut self, id: &str, item: &str) -> Result<bool> {
        let item = item.trim();
        let list = self.list_mut(id)?;
        if item.is_empty() {
            return Ok(false);
        }
        list.push(item.to_string());
        Ok(true)
    }

    /// Remove the item at `index`; out-of-range indices are ignored
    pub fn remove_item(&mut self, id: &str, index: usize) -> Result<()> {
        let list = self.list_mut(id)?;
        if index < list.len() {
            list.remove(index);
        }
        Ok(())
    }

    fn list_mut(&mut self, id: &str) -> Result<&mut Vec<String>> {
        let field = self.field_of(id, |k| k == FieldKind::Array, "an array field")?;
        match self.data.value_mut(field.id, field.kind) {
            FieldValue::List(items) => Ok(items),
            _ => Err(Error::field_kind(id, field.kind.as_str(), "list expected")),
        }
    }

    fn records_mut<R: Record>(&mut self, id: &str) -> Result<&mut Vec<R>> {
        let field = self.field_of(id, |k| k == R::KIND, R::KIND.as_str())?;
        R::list_mut(self.data.value_mut(field.id, field.kind))
            .ok_or_else(|| Error::field_kind(id, field.kind.as_str(), "record list expected"))
    }

    fn push_blank<R: Record>(&mut self, id: &str) -> Result<usize> {
        let records = self.records_mut::<R>(id)?;
        records.push(R::default());
        Ok(records.len() - 1)
    }

    fn splice<R: Record>(&mut self, id: &str, index: usize) -> Result<()> {
        let records = self.records_mut::<R>(id)?;
        if index < records.len() {
            records.remove(index);
        }
        Ok(())
    }

    /// Append a blank record to a projects, experience or education field.
    ///
    /// Returns the index of the new record.
    pub fn add_record(&mut self, id: &str) -> Result<usize> {
        let field = self.field_of(id, FieldKind::is_record_list, "a record list field")?;
        match field.kind {
            FieldKind::Projects => self.push_blank::<ProjectRecord>(id),
            FieldKind::Experience => self.push_blank::<ExperienceRecord>(id),
            _ => self.push_blank::<EducationRecord>(id),
        }
    }

    /// Remove the record at `index`; out-of-range indices are ignored
    pub fn remove_record(&mut self, id: &str, index: usize) -> Result<()> {
        let field = self.field_of(id, FieldKind::is_record_list, "a record list field")?;
        match field.kind {
            FieldKind::Projects => self.splice::<ProjectRecord>(id, index),
            FieldKind::Experience => self.splice::<ExperienceRecord>(id, index),
            _ => self.splice::<EducationRecord>(id, index),
        }
    }

    /// Replace one attribute of the record at `index`, leaving siblings untouched
    pub fn update_record<R: Record>(
        &mut self,
        id: &str,
        index: usize,
        attr: R::Attr,
        raw: &str,
    ) -> Result<()> {
        let records = self.records_mut::<R>(id)?;
        let len = records.len();
        let record = records.get_mut(index).ok_or_else(|| Error::IndexOutOfRange {
            field: id.to_string(),
            index,
            len,
        })?;
        record.set(attr, raw);
        Ok(())
    }

    pub fn update_project(
        &mut self,
        id: &str,
        index: usize,
        attr: ProjectAttr,
        raw: &str,
    ) -> Result<()> {
        self.update_record::<ProjectRecord>(id, index, attr, raw)
    }

    pub fn update_experience(
        &mut self,
        id: &str,
        index: usize,
        attr: ExperienceAttr,
        raw: &str,
    ) -> Result<()> {
        self.update_record::<ExperienceRecord>(id, index, attr, raw)
    }

    pub fn update_education(
        &mut self,
        id: &str,
        index: usize,
        attr: EducationAttr,
        raw: &str,
    ) -> Result<()> {
        self.update_record::<EducationRecord>(id, index, attr, raw)
    }

    /// Update a record attribute named by string, dispatching on the field kind
    pub fn update_record_attr(
        &mut self,
        id: &str,
        index: usize,
        attr: &str,
        raw: &str,
    ) -> Result<()> {
        let field = self.field_of(id, FieldKind::is_record_list, "a record list field")?;
        match field.kind {
            FieldKind::Projects => self.update_project(id, index, attr.parse()?, raw),
            FieldKind::Experience => self.update_experience(id, index, attr.parse()?, raw),
            _ => self.update_education(id, index, attr.parse()?, raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn form(id: &str) -> FormBuilder {
        FormBuilder::new(catalog::get(id).unwrap())
    }

    #[test]
    fn test_set_text() {
        let mut f = form("codecraft");
        f.set_text("name", "Ada Lovelace").unwrap();
        f.set_text("email", "not-an-email").unwrap();
        assert_eq!(f.data().text("name"), "Ada Lovelace");
        assert_eq!(f.data().text("email"), "not-an-email");
    }

    #[test]
    fn test_set_text_rejects_other_kinds_and_unknown_fields() {
        let mut f = form("codecraft");
        assert!(matches!(f.set_text("skills", "Rust"), Err(Error::FieldKind { .. })));
        assert!(matches!(f.set_text("goals", "x"), Err(Error::UnknownField { .. })));
    }

    #[test]
    fn test_submit_pending_trims_and_clears() {
        let mut f = form("codecraft");
        f.set_pending("skills", "  Rust  ").unwrap();
        assert!(f.submit_pending("skills").unwrap());
        assert_eq!(f.pending("skills"), "");
        assert_eq!(f.data().list("skills").unwrap(), ["Rust"]);
    }

    #[test]
    fn test_submit_blank_pending_adds_nothing() {
        let mut f = form("codecraft");
        f.set_pending("skills", "   ").unwrap();
        assert!(!f.submit_pending("skills").unwrap());
        assert_eq!(f.pending("skills"), "");
        assert!(f.data().list("skills").unwrap().is_empty());
    }

    #[test]
    fn test_remove_item_by_index_keeps_duplicate() {
        let mut f = form("devflow");
        f.add_item("skills", "Rust").unwrap();
        f.add_item("skills", "Rust").unwrap();
        f.remove_item("skills", 0).unwrap();
        assert_eq!(f.data().list("skills").unwrap(), ["Rust"]);
    }

    #[test]
    fn test_remove_item_out_of_range_is_noop() {
        let mut f = form("devflow");
        f.add_item("skills", "Go").unwrap();
        f.remove_item("skills", 5).unwrap();
        assert_eq!(f.data().list("skills").unwrap().len(), 1);
    }

    #[test]
    fn test_add_record_appends_blank() {
        let mut f = form("codecraft");
        assert_eq!(f.add_record("projects").unwrap(), 0);
        assert_eq!(f.add_record("projects").unwrap(), 1);
        assert_eq!(f.data().projects(), &[ProjectRecord::default(), ProjectRecord::default()]);
        assert_eq!(f.add_record("education").unwrap(), 0);
        assert_eq!(f.data().education()[0], EducationRecord::default());
    }

    #[test]
    fn test_update_record_leaves_siblings_untouched() {
        let mut f = form("codecraft");
        for title in ["A", "B", "C"] {
            let i = f.add_record("projects").unwrap();
            f.update_project("projects", i, ProjectAttr::Title, title).unwrap();
        }
        let before = f.data().projects().to_vec();

        f.update_project("projects", 1, ProjectAttr::Title, "Changed").unwrap();

        let after = f.data().projects();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].title, "Changed");
    }

    #[test]
    fn test_update_record_out_of_range() {
        let mut f = form("codecraft");
        let err = f
            .update_experience("experience", 0, ExperienceAttr::Company, "Acme")
            .unwrap_err();
        assert!(matches!(err, Error::IndexOutOfRange { index: 0, len: 0, .. }));
    }

    #[test]
    fn test_update_record_wrong_kind() {
        let mut f = form("codecraft");
        f.add_record("projects").unwrap();
        let result = f.update_education("projects", 0, EducationAttr::Gpa, "4.0");
        assert!(matches!(result, Err(Error::FieldKind { .. })));
    }

    #[test]
    fn test_responsibilities_split_on_lines() {
        let mut f = form("codecraft");
        f.add_record("experience").unwrap();
        f.update_experience("experience", 0, ExperienceAttr::Responsibilities, "Did X\n\nDid Y\n")
            .unwrap();
        assert_eq!(f.data().experience()[0].responsibilities, vec!["Did X", "Did Y"]);
    }

    #[test]
    fn test_update_record_attr_by_name() {
        let mut f = form("freshstart");
        f.add_record("education").unwrap();
        f.update_record_attr("education", 0, "achievements", "Dean's List\nTA")
            .unwrap();
        f.update_record_attr("education", 0, "gpa", "3.9").unwrap();
        let edu = &f.data().education()[0];
        assert_eq!(edu.achievements, vec!["Dean's List", "TA"]);
        assert_eq!(edu.gpa, "3.9");
        assert!(f.update_record_attr("education", 0, "salary", "x").is_err());
    }

    #[test]
    fn test_remove_record_splices() {
        let mut f = form("codecraft");
        for company in ["A", "B", "C"] {
            let i = f.add_record("experience").unwrap();
            f.update_experience("experience", i, ExperienceAttr::Company, company).unwrap();
        }
        f.remove_record("experience", 0).unwrap();
        let companies: Vec<_> = f.data().experience().iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, vec!["B", "C"]);
    }

    #[test]
    fn test_select_template_resets_data() {
        let mut f = form("testlab");
        f.add_item("certifications", "ISTQB").unwrap();
        f.set_pending("skills", "Selenium").unwrap();

        f.select_template(catalog::get("freshstart").unwrap());

        assert!(!f.data().contains("certifications"));
        assert!(f.data().contains("goals"));
        assert_eq!(f.pending("skills"), "");
        assert_eq!(*f.data(), PortfolioData::for_template(f.template()));
    }

    #[test]
    fn test_with_data_drops_foreign_keys() {
        let codecraft = catalog::get("codecraft").unwrap();
        let mut source = FormBuilder::new(catalog::get("testlab").unwrap());
        source.set_text("name", "Grace").unwrap();
        source.add_item("certifications", "ISTQB").unwrap();

        let f = FormBuilder::with_data(codecraft, source.into_data());
        assert_eq!(f.data().text("name"), "Grace");
        assert!(!f.data().contains("certifications"));
        assert!(f.data().contains("githubUrl"));
    }
}
