// React/TSX component export

use crate::catalog::TemplateDescriptor;
use crate::data::{FieldValue, PortfolioData};
use crate::error::Result;
use crate::render::TemplateEngine;
use serde_json::{json, Value};
use tera::Context;

const DEFAULT_SKILLS: &[&str] = &["React", "TypeScript", "Node.js"];

/// Builds a single-file React component with the data embedded as a literal
pub struct ReactExporter<'a> {
    engine: &'a TemplateEngine,
}

impl<'a> ReactExporter<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self { engine }
    }

    /// The object embedded as `portfolioData`, with placeholder fallbacks
    pub fn literal(data: &PortfolioData) -> Value {
        let text = |id: &str, fallback: &str| -> Value {
            Value::String(data.non_empty_text(id).unwrap_or(fallback).to_string())
        };
        let records = |id: &str| -> Value {
            match data.get(id) {
                Some(
                    value @ (FieldValue::Projects(_)
                    | FieldValue::Experience(_)
                    | FieldValue::Education(_)),
                ) => serde_json::to_value(value).unwrap_or_else(|_| json!([])),
                _ => json!([]),
            }
        };

        let skills = match data.list("skills") {
            Some(items) => json!(items),
            None => json!(DEFAULT_SKILLS),
        };

        json!({
            "name": text("name", "Your Name"),
            "title": text("title", "Professional Title"),
            "bio": text("bio", "Your professional bio"),
            "about": text("about", "Your detailed about section"),
            "email": text("email", "your.email@example.com"),
            "linkedin": text("linkedinUrl", "https://linkedin.com/in/yourprofile"),
            "github": text("githubUrl", "https://github.com/yourusername"),
            "skills": skills,
            "projects": records("projects"),
            "experience": records("experience"),
            "education": records("education"),
        })
    }

    pub fn render(&self, template: &TemplateDescriptor, data: &PortfolioData) -> Result<String> {
        let literal = serde_json::to_string_pretty(&Self::literal(data))?;

        let mut context = Context::new();
        context.insert("component", &template.component_name());
        context.insert("literal", &literal);

        self.engine.render("export/component.tsx", &context)
    }

    pub fn filename(template: &TemplateDescriptor) -> String {
        format!("{}Portfolio.tsx", template.component_name())
    }
}

/// Extract the `portfolioData` literal from a generated component
pub fn extract_literal(source: &str) -> Option<&str> {
    let start = source.find("const portfolioData: PortfolioData = ")?;
    let body = &source[start..];
    let open = body.find('{')?;
    let close = body.find("\n}\n")?;
    Some(&body[open..=close + 1])
}
