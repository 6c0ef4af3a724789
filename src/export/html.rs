// Standalone HTML export

use super::seo::SeoMetadata;
use crate::catalog::TemplateDescriptor;
use crate::data::PortfolioData;
use crate::error::Result;
use crate::render::{Defaults, ProfileView, TemplateEngine};
use tera::Context;

static EXPORT_DEFAULTS: Defaults = Defaults {
    title: "Professional Title",
    bio: "Your professional bio will appear here.",
    about: "Your detailed about section will appear here.",
    ..Defaults::BLANK
};

/// Builds a self-contained HTML page with SEO and social tags
pub struct HtmlExporter<'a> {
    engine: &'a TemplateEngine,
}

impl<'a> HtmlExporter<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self { engine }
    }

    pub fn render(
        &self,
        template: &TemplateDescriptor,
        data: &PortfolioData,
        seo: &SeoMetadata,
    ) -> Result<String> {
        let profile = ProfileView::resolve(data, &EXPORT_DEFAULTS);

        let mut context = Context::new();
        context.insert("seo", seo);
        context.insert("template", template);
        context.insert("profile", &profile);

        self.engine.render("export/index.html", &context)
    }

    pub fn filename(template: &TemplateDescriptor) -> String {
        format!("{}-portfolio.html", template.slug())
    }
}
