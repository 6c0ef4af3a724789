// Template engine for previews and exports

use crate::error::Result;
use chrono::NaiveDate;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Footer credit used when no brand is configured
pub const DEFAULT_BRAND: &str = "Nexzenova";

/// Template engine wrapping Tera with custom filters and embedded templates
pub struct TemplateEngine {
    tera: Tera,
    brand: String,
}

impl TemplateEngine {
    /// Create a new template engine with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html.tera")),
            ("layouts/codecraft.html", include_str!("../../templates/layouts/codecraft.html.tera")),
            ("layouts/devflow.html", include_str!("../../templates/layouts/devflow.html.tera")),
            ("layouts/techstack.html", include_str!("../../templates/layouts/techstack.html.tera")),
            ("layouts/testlab.html", include_str!("../../templates/layouts/testlab.html.tera")),
            ("layouts/qualitypro.html", include_str!("../../templates/layouts/qualitypro.html.tera")),
            ("layouts/bughunter.html", include_str!("../../templates/layouts/bughunter.html.tera")),
            ("layouts/designstudio.html", include_str!("../../templates/layouts/designstudio.html.tera")),
            ("layouts/pixelperfect.html", include_str!("../../templates/layouts/pixelperfect.html.tera")),
            ("layouts/creativeflow.html", include_str!("../../templates/layouts/creativeflow.html.tera")),
            ("layouts/freshstart.html", include_str!("../../templates/layouts/freshstart.html.tera")),
            ("export/index.html", include_str!("../../templates/export/index.html.tera")),
            ("export/component.tsx", include_str!("../../templates/export/component.tsx.tera")),
            ("export/README.md", include_str!("../../templates/export/README.md.tera")),
            ("export/styles.css", include_str!("../../assets/styles.css.tera")),
            ("export/script.js", include_str!("../../assets/script.js.tera")),
        ])?;

        tera.register_filter("format_date", format_date);
        tera.register_filter("pluralize", pluralize);
        tera.register_filter("truncate_words", truncate_words);

        Ok(Self {
            tera,
            brand: DEFAULT_BRAND.to_string(),
        })
    }

    /// Set the footer credit shown in every document
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Render a template; `brand` is always available in the context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        let mut context = context.clone();
        context.insert("brand", &self.brand);
        Ok(self.tera.render(template_name, &context)?)
    }

    /// Get the underlying Tera instance for advanced usage
    pub fn tera(&self) -> &Tera {
        &self.tera
    }
}

/// Format an ISO date (`YYYY-MM-DD` or `YYYY-MM`) as `Mon YYYY`.
///
/// Empty input yields the `empty` argument; unparseable input is returned
/// unchanged.
pub fn format_date_str(raw: &str, empty: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return empty.to_string();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn format_date(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = value.as_str().unwrap_or("");
    let empty = args.get("empty").and_then(|v| v.as_str()).unwrap_or("");
    Ok(Value::String(format_date_str(raw, empty)))
}

/// Pluralize a word based on count
fn pluralize(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let count = value.as_u64().unwrap_or(0);
    let singular = args
        .get("singular")
        .and_then(|v| v.as_str())
        .unwrap_or("item");
    let default_plural = format!("{}s", singular);
    let plural = args
        .get("plural")
        .and_then(|v| v.as_str())
        .unwrap_or(&default_plural);

    if count == 1 {
        Ok(Value::String(format!("{} {}", count, singular)))
    } else {
        Ok(Value::String(format!("{} {}", count, plural)))
    }
}

/// Truncate text to a number of words
fn truncate_words(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value.as_str().unwrap_or("");
    let max_words = args
        .get("count")
        .and_then(|v| v.as_u64())
        .unwrap_or(30) as usize;

    let words: Vec<&str> = s.split_whitespace().collect();
    if words.len() <= max_words {
        Ok(Value::String(s.to_string()))
    } else {
        Ok(Value::String(format!("{}...", words[..max_words].join(" "))))
    }
}
