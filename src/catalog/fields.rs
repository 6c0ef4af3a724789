// Field schema types
//
// Every template carries an ordered list of field descriptors. The form
// builder renders one editor per descriptor and the data model uses the
// descriptor's kind to pick the value shape.

use crate::data::FieldValue;
use serde::Serialize;
use std::fmt;

/// The editor kind of a template field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    Email,
    Url,
    Array,
    Projects,
    Experience,
    Education,
}

impl FieldKind {
    /// Kinds whose value is a single string
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Textarea | FieldKind::Email | FieldKind::Url
        )
    }

    /// Kinds whose value is a list of structured records
    pub fn is_record_list(self) -> bool {
        matches!(
            self,
            FieldKind::Projects | FieldKind::Experience | FieldKind::Education
        )
    }

    /// The empty value a freshly selected template starts with
    pub fn empty_value(self) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::Textarea | FieldKind::Email | FieldKind::Url => {
                FieldValue::Text(String::new())
            }
            FieldKind::Array => FieldValue::List(Vec::new()),
            FieldKind::Projects => FieldValue::Projects(Vec::new()),
            FieldKind::Experience => FieldValue::Experience(Vec::new()),
            FieldKind::Education => FieldValue::Education(Vec::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Textarea => "textarea",
            FieldKind::Email => "email",
            FieldKind::Url => "url",
            FieldKind::Array => "array",
            FieldKind::Projects => "projects",
            FieldKind::Experience => "experience",
            FieldKind::Education => "education",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One editable attribute of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn new(id: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            label,
            kind,
            required: false,
            placeholder: None,
        }
    }

    /// Mark the field as required (shown in the form, not enforced)
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn placeholder(mut self, text: &'static str) -> Self {
        self.placeholder = Some(text);
        self
    }
}

const NAME: FieldDescriptor = FieldDescriptor::new("name", "Full Name", FieldKind::Text).required();
const EMAIL: FieldDescriptor = FieldDescriptor::new("email", "Email", FieldKind::Email).required();
const PHONE: FieldDescriptor = FieldDescriptor::new("phone", "Phone", FieldKind::Text);
const LOCATION: FieldDescriptor = FieldDescriptor::new("location", "Location", FieldKind::Text);
const BIO: FieldDescriptor =
    FieldDescriptor::new("bio", "Bio/Summary", FieldKind::Textarea).required();
const GITHUB: FieldDescriptor = FieldDescriptor::new("githubUrl", "GitHub URL", FieldKind::Url)
    .placeholder("https://github.com/username");
const LINKEDIN: FieldDescriptor =
    FieldDescriptor::new("linkedinUrl", "LinkedIn URL", FieldKind::Url)
        .placeholder("https://linkedin.com/in/username");
const PORTFOLIO: FieldDescriptor =
    FieldDescriptor::new("portfolioUrl", "Portfolio URL", FieldKind::Url);
const DRIBBBLE: FieldDescriptor = FieldDescriptor::new("dribbbleUrl", "Dribbble URL", FieldKind::Url);
const BEHANCE: FieldDescriptor = FieldDescriptor::new("behanceUrl", "Behance URL", FieldKind::Url);
const EXPERIENCE: FieldDescriptor =
    FieldDescriptor::new("experience", "Work Experience", FieldKind::Experience);
const EDUCATION: FieldDescriptor =
    FieldDescriptor::new("education", "Education", FieldKind::Education);

/// Schema shared by the developer templates
pub static DEVELOPER_FIELDS: &[FieldDescriptor] = &[
    NAME,
    FieldDescriptor::new("title", "Professional Title", FieldKind::Text).required(),
    EMAIL,
    PHONE,
    LOCATION,
    BIO,
    GITHUB,
    LINKEDIN,
    PORTFOLIO,
    FieldDescriptor::new("skills", "Technical Skills", FieldKind::Array),
    FieldDescriptor::new("projects", "Projects", FieldKind::Projects),
    EXPERIENCE,
    EDUCATION,
];

/// Schema shared by the QA templates
pub static QA_FIELDS: &[FieldDescriptor] = &[
    NAME,
    FieldDescriptor::new("title", "Professional Title", FieldKind::Text).required(),
    EMAIL,
    PHONE,
    LOCATION,
    BIO,
    LINKEDIN,
    PORTFOLIO,
    FieldDescriptor::new("skills", "Testing Skills & Tools", FieldKind::Array),
    FieldDescriptor::new("certifications", "Certifications", FieldKind::Array),
    FieldDescriptor::new("projects", "Testing Projects", FieldKind::Projects),
    EXPERIENCE,
    EDUCATION,
];

/// Schema shared by the designer templates
pub static DESIGNER_FIELDS: &[FieldDescriptor] = &[
    NAME,
    FieldDescriptor::new("title", "Professional Title", FieldKind::Text).required(),
    EMAIL,
    PHONE,
    LOCATION,
    BIO,
    DRIBBBLE,
    BEHANCE,
    LINKEDIN,
    PORTFOLIO,
    FieldDescriptor::new("skills", "Design Skills & Tools", FieldKind::Array),
    FieldDescriptor::new("projects", "Design Projects", FieldKind::Projects),
    EXPERIENCE,
    EDUCATION,
];

/// Schema for the student template
pub static STUDENT_FIELDS: &[FieldDescriptor] = &[
    NAME,
    FieldDescriptor::new("title", "Desired Role/Field", FieldKind::Text).required(),
    EMAIL,
    PHONE,
    LOCATION,
    BIO,
    GITHUB,
    LINKEDIN,
    PORTFOLIO,
    FieldDescriptor::new("skills", "Skills & Technologies", FieldKind::Array),
    FieldDescriptor::new("goals", "Career Goals", FieldKind::Array),
    FieldDescriptor::new("projects", "Academic/Personal Projects", FieldKind::Projects),
    FieldDescriptor::new("experience", "Internships/Part-time Work", FieldKind::Experience),
    EDUCATION,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_scalar_kinds() {
        assert!(FieldKind::Text.is_scalar());
        assert!(FieldKind::Url.is_scalar());
        assert!(!FieldKind::Array.is_scalar());
        assert!(!FieldKind::Projects.is_scalar());
    }

    #[test]
    fn test_empty_values_match_kind() {
        assert_eq!(FieldKind::Email.empty_value(), FieldValue::Text(String::new()));
        assert_eq!(FieldKind::Array.empty_value(), FieldValue::List(vec![]));
        assert_eq!(FieldKind::Education.empty_value(), FieldValue::Education(vec![]));
    }

    #[test]
    fn test_schemas_have_unique_ids() {
        for schema in [DEVELOPER_FIELDS, QA_FIELDS, DESIGNER_FIELDS, STUDENT_FIELDS] {
            let ids: HashSet<_> = schema.iter().map(|f| f.id).collect();
            assert_eq!(ids.len(), schema.len());
        }
    }

    #[test]
    fn test_required_builder() {
        let field = FieldDescriptor::new("x", "X", FieldKind::Text);
        assert!(!field.required);
        assert!(field.required().required);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Textarea.to_string(), "textarea");
        assert_eq!(FieldKind::Experience.to_string(), "experience");
    }
}
