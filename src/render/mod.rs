//! Template renderers
//!
//! Each layout has a renderer that resolves the user's data against its own
//! placeholder defaults and draws the result through a tera template. The
//! renderer is chosen only by the template descriptor's layout.

mod designer;
mod developer;
pub mod engine;
mod qa;
mod student;

pub use designer::{CreativeFlow, DesignStudio, PixelPerfect};
pub use developer::{CodeCraft, DevFlow, TechStack};
pub use engine::{format_date_str, TemplateEngine, DEFAULT_BRAND};
pub use qa::{BugHunter, QualityPro, TestLab};
pub use student::FreshStart;

use crate::catalog::{Layout, TemplateDescriptor};
use crate::data::{EducationRecord, ExperienceRecord, PortfolioData, ProjectRecord};
use crate::error::Result;
use serde::Serialize;
use tera::Context;

/// A rendered preview document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub html: String,
}

/// A page section, identified in the output by its element id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Work,
    Experience,
    Education,
    Goals,
    Contact,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Work => "work",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Goals => "goals",
            Section::Contact => "contact",
        }
    }
}

/// Placeholder values a layout shows for empty fields
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub bio: &'static str,
    pub about: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
    pub portfolio_url: &'static str,
    pub dribbble_url: &'static str,
    pub behance_url: &'static str,
    pub skills: &'static [&'static str],
    /// Label for a record with no end date
    pub open_end: &'static str,
}

impl Defaults {
    pub const BLANK: Defaults = Defaults {
        name: "Your Name",
        title: "",
        email: "",
        phone: "",
        location: "",
        bio: "",
        about: "",
        github_url: "",
        linkedin_url: "",
        portfolio_url: "",
        dribbble_url: "",
        behance_url: "",
        skills: &[],
        open_end: "Present",
    };
}

/// Portfolio data with a layout's fallbacks applied
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView<'a> {
    pub name: &'a str,
    pub title: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub bio: &'a str,
    pub about: &'a str,
    pub github_url: &'a str,
    pub linkedin_url: &'a str,
    pub portfolio_url: &'a str,
    pub dribbble_url: &'a str,
    pub behance_url: &'a str,
    pub skills: Vec<&'a str>,
    pub certifications: Vec<&'a str>,
    pub goals: Vec<&'a str>,
    pub projects: &'a [ProjectRecord],
    pub experience: &'a [ExperienceRecord],
    pub education: &'a [EducationRecord],
    pub initial: String,
    pub project_count: usize,
    pub experience_count: usize,
    pub open_end: &'a str,
}

impl<'a> ProfileView<'a> {
    /// Apply fallbacks: empty text takes the default, an absent list takes
    /// the default list, a present but empty list stays empty.
    pub fn resolve(data: &'a PortfolioData, defaults: &'a Defaults) -> Self {
        let text = move |id: &str, fallback: &'a str| -> &'a str {
            data.non_empty_text(id).unwrap_or(fallback)
        };
        let list = move |id: &str, fallback: &'a [&'a str]| -> Vec<&'a str> {
            match data.list(id) {
                Some(items) => items.iter().map(String::as_str).collect(),
                None => fallback.to_vec(),
            }
        };

        let name = text("name", defaults.name);
        let projects = data.projects();
        let experience = data.experience();

        Self {
            name,
            title: text("title", defaults.title),
            email: text("email", defaults.email),
            phone: text("phone", defaults.phone),
            location: text("location", defaults.location),
            bio: text("bio", defaults.bio),
            about: text("about", defaults.about),
            github_url: text("githubUrl", defaults.github_url),
            linkedin_url: text("linkedinUrl", defaults.linkedin_url),
            portfolio_url: text("portfolioUrl", defaults.portfolio_url),
            dribbble_url: text("dribbbleUrl", defaults.dribbble_url),
            behance_url: text("behanceUrl", defaults.behance_url),
            skills: list("skills", defaults.skills),
            certifications: list("certifications", &[]),
            goals: list("goals", &[]),
            projects,
            experience,
            education: data.education(),
            initial: name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
            project_count: projects.len(),
            experience_count: experience.len(),
            open_end: defaults.open_end,
        }
    }
}

/// Draws one layout
pub trait Renderer: Sync {
    fn layout(&self) -> Layout;

    fn defaults(&self) -> &'static Defaults;

    /// Sections in page order
    fn sections(&self) -> &'static [Section];

    /// Name of the tera template that draws this layout
    fn template_name(&self) -> &'static str;

    fn render(
        &self,
        engine: &TemplateEngine,
        template: &TemplateDescriptor,
        data: &PortfolioData,
    ) -> Result<Document> {
        let profile = ProfileView::resolve(data, self.defaults());
        let sections: Vec<&str> = self.sections().iter().map(|s| s.id()).collect();

        let mut context = Context::new();
        context.insert("profile", &profile);
        context.insert("template", template);
        context.insert("sections", &sections);

        tracing::debug!(template = template.id, layout = ?self.layout(), "rendering preview");
        let html = engine.render(self.template_name(), &context)?;

        Ok(Document {
            title: format!("{} | {}", profile.name, template.name),
            html,
        })
    }
}

/// The renderer for a layout
pub fn renderer_for(layout: Layout) -> &'static dyn Renderer {
    match layout {
        Layout::CodeCraft => &CodeCraft,
        Layout::DevFlow => &DevFlow,
        Layout::TechStack => &TechStack,
        Layout::TestLab => &TestLab,
        Layout::QualityPro => &QualityPro,
        Layout::BugHunter => &BugHunter,
        Layout::DesignStudio => &DesignStudio,
        Layout::PixelPerfect => &PixelPerfect,
        Layout::CreativeFlow => &CreativeFlow,
        Layout::FreshStart => &FreshStart,
    }
}

/// Render a template's preview with its own renderer
pub fn render(
    engine: &TemplateEngine,
    template: &TemplateDescriptor,
    data: &PortfolioData,
) -> Result<Document> {
    renderer_for(template.layout).render(engine, template, data)
}
