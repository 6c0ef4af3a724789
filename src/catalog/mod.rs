//! Template catalog
//!
//! A fixed registry of the ten portfolio templates, grouped by category.
//! Descriptors are defined at build time and never mutated.

pub mod fields;

pub use fields::{FieldDescriptor, FieldKind};

use crate::error::{Error, Result};
use fields::{DESIGNER_FIELDS, DEVELOPER_FIELDS, QA_FIELDS, STUDENT_FIELDS};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Template category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Developer,
    Qa,
    Designer,
    Student,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Developer => "developer",
            Category::Qa => "qa",
            Category::Designer => "designer",
            Category::Student => "student",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "developer" | "dev" => Ok(Category::Developer),
            "qa" => Ok(Category::Qa),
            "designer" | "design" => Ok(Category::Designer),
            "student" => Ok(Category::Student),
            other => Err(Error::other(format!("Unknown category: {}", other))),
        }
    }
}

/// Which renderer draws a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    CodeCraft,
    DevFlow,
    TechStack,
    TestLab,
    QualityPro,
    BugHunter,
    DesignStudio,
    PixelPerfect,
    CreativeFlow,
    FreshStart,
}

/// A named, styled portfolio layout paired with its field schema
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub preview: &'static str,
    pub price: &'static str,
    pub original_price: &'static str,
    pub popular: bool,
    #[serde(skip)]
    pub layout: Layout,
    pub fields: &'static [FieldDescriptor],
}

impl TemplateDescriptor {
    /// Look up a field descriptor by id
    pub fn field(&self, id: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Whether the schema declares a field
    pub fn has_field(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    /// Resolve a field or fail with an unknown-field error
    pub fn require_field(&self, id: &str) -> Result<&'static FieldDescriptor> {
        self.field(id)
            .ok_or_else(|| Error::unknown_field(self.id, id))
    }

    /// Template name with whitespace removed, used for component names
    pub fn component_name(&self) -> String {
        self.name.split_whitespace().collect()
    }

    /// Lowercase, dash-separated template name, used for file names
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

static TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "codecraft",
        name: "CodeCraft",
        category: Category::Developer,
        description: "Dark terminal-inspired template with neon green accents",
        preview: "Dark theme with terminal aesthetics, perfect for backend developers",
        price: "₹2,499",
        original_price: "₹4,999",
        popular: true,
        layout: Layout::CodeCraft,
        fields: DEVELOPER_FIELDS,
    },
    TemplateDescriptor {
        id: "devflow",
        name: "DevFlow",
        category: Category::Developer,
        description: "Clean SaaS dashboard with blue gradients",
        preview: "Professional SaaS-style layout with clean blue design",
        price: "₹2,999",
        original_price: "₹5,999",
        popular: false,
        layout: Layout::DevFlow,
        fields: DEVELOPER_FIELDS,
    },
    TemplateDescriptor {
        id: "techstack",
        name: "TechStack",
        category: Category::Developer,
        description: "Modern grid layout with tech stack showcase",
        preview: "Grid-based layout highlighting your technology stack",
        price: "₹1,999",
        original_price: "₹3,999",
        popular: false,
        layout: Layout::TechStack,
        fields: DEVELOPER_FIELDS,
    },
    TemplateDescriptor {
        id: "testlab",
        name: "TestLab",
        category: Category::Qa,
        description: "Clean analytical dashboard with testing metrics",
        preview: "Professional QA template with metrics and testing tools showcase",
        price: "₹2,299",
        original_price: "₹4,599",
        popular: true,
        layout: Layout::TestLab,
        fields: QA_FIELDS,
    },
    TemplateDescriptor {
        id: "qualitypro",
        name: "QualityPro",
        category: Category::Qa,
        description: "Professional white/gray with data visualizations",
        preview: "Clean professional design with quality metrics focus",
        price: "₹2,799",
        original_price: "₹5,599",
        popular: false,
        layout: Layout::QualityPro,
        fields: QA_FIELDS,
    },
    TemplateDescriptor {
        id: "bughunter",
        name: "BugHunter",
        category: Category::Qa,
        description: "Systematic grid layout with testing tools showcase",
        preview: "Systematic approach to showcasing QA expertise",
        price: "₹1,799",
        original_price: "₹3,599",
        popular: false,
        layout: Layout::BugHunter,
        fields: QA_FIELDS,
    },
    TemplateDescriptor {
        id: "designstudio",
        name: "DesignStudio",
        category: Category::Designer,
        description: "Bold typography with creative layouts",
        preview: "Creative design-focused template with bold visuals",
        price: "₹3,499",
        original_price: "₹6,999",
        popular: true,
        layout: Layout::DesignStudio,
        fields: DESIGNER_FIELDS,
    },
    TemplateDescriptor {
        id: "pixelperfect",
        name: "PixelPerfect",
        category: Category::Designer,
        description: "Minimalist with large visual showcases",
        preview: "Minimalist design with focus on visual portfolio",
        price: "₹2,999",
        original_price: "₹5,999",
        popular: false,
        layout: Layout::PixelPerfect,
        fields: DESIGNER_FIELDS,
    },
    TemplateDescriptor {
        id: "creativeflow",
        name: "CreativeFlow",
        category: Category::Designer,
        description: "Animated interactions with portfolio galleries",
        preview: "Dynamic template with smooth animations and interactions",
        price: "₹3,999",
        original_price: "₹7,999",
        popular: false,
        layout: Layout::CreativeFlow,
        fields: DESIGNER_FIELDS,
    },
    TemplateDescriptor {
        id: "freshstart",
        name: "FreshStart",
        category: Category::Student,
        description: "Bright, energetic with goal-oriented sections",
        preview: "Perfect for students and fresh graduates",
        price: "₹999",
        original_price: "₹1,999",
        popular: true,
        layout: Layout::FreshStart,
        fields: STUDENT_FIELDS,
    },
];

/// All templates in catalog order
pub fn templates() -> &'static [TemplateDescriptor] {
    TEMPLATES
}

/// Find a template by id
pub fn find(id: &str) -> Option<&'static TemplateDescriptor> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Find a template by id or fail
pub fn get(id: &str) -> Result<&'static TemplateDescriptor> {
    find(id).ok_or_else(|| Error::UnknownTemplate(id.to_string()))
}

/// Templates in one category, in catalog order
pub fn by_category(category: Category) -> impl Iterator<Item = &'static TemplateDescriptor> {
    TEMPLATES.iter().filter(move |t| t.category == category)
}
