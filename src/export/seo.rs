// SEO metadata derived from portfolio data

use crate::catalog::TemplateDescriptor;
use crate::data::PortfolioData;
use serde::Serialize;

/// Maximum length of meta descriptions, in characters
pub const DESCRIPTION_LIMIT: usize = 160;
pub const DEFAULT_OG_IMAGE: &str = "/og-image.jpg";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Search and social metadata for an exported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_card: String,
}

impl SeoMetadata {
    pub fn derive(template: &TemplateDescriptor, data: &PortfolioData, og_image: &str) -> Self {
        let name = data.non_empty_text("name").unwrap_or("Portfolio");
        let profession = data
            .non_empty_text("title")
            .or_else(|| data.non_empty_text("profession"))
            .unwrap_or("Professional");
        let bio = data
            .non_empty_text("bio")
            .or_else(|| data.non_empty_text("about"))
            .unwrap_or("Professional portfolio website");

        let description: String = bio.chars().take(DESCRIPTION_LIMIT).collect();

        Self {
            title: format!("{} - {} Portfolio", name, profession),
            keywords: format!("{}, {}, portfolio, {}", name, profession, template.category),
            author: name.to_string(),
            og_title: format!("{} - {}", name, profession),
            og_description: description.clone(),
            description,
            og_image: og_image.to_string(),
            twitter_card: TWITTER_CARD.to_string(),
        }
    }
}
