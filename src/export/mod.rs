// Export generation: standalone HTML, React/TSX, and the ZIP project bundle

pub mod archive;
pub mod bundle;
pub mod html;
pub mod react;
pub mod seo;

pub use archive::ArchiveWriter;
pub use bundle::{BundleFile, ProjectBundle};
pub use html::HtmlExporter;
pub use react::{extract_literal, ReactExporter};
pub use seo::SeoMetadata;

use crate::catalog::TemplateDescriptor;
use crate::data::PortfolioData;
use crate::error::{Error, Result};
use crate::render::TemplateEngine;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Output format for an export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Html,
    React,
    Zip,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::React => "react",
            ExportFormat::Zip => "zip",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ExportFormat::Html),
            "react" | "tsx" => Ok(ExportFormat::React),
            "zip" => Ok(ExportFormat::Zip),
            other => Err(Error::other(format!(
                "Unknown export format '{}' (expected html, react or zip)",
                other
            ))),
        }
    }
}

/// A finished export, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    /// Set when the requested format could not be produced and a substitute
    /// was returned instead
    pub notice: Option<String>,
}

impl Artifact {
    fn text(filename: String, mime: &'static str, contents: String) -> Self {
        Self {
            filename,
            mime,
            bytes: contents.into_bytes(),
            notice: None,
        }
    }

    /// Contents as UTF-8, if they are text
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Save into `dir`, returning the written path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "wrote artifact");
        Ok(path)
    }
}

/// Knobs for an export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub og_image: String,
    /// Allow the archive backend; when false ZIP requests fall back to HTML
    pub archive: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            og_image: seo::DEFAULT_OG_IMAGE.to_string(),
            archive: true,
        }
    }
}

/// Entry point for every export path
pub struct Exporter<'a> {
    engine: &'a TemplateEngine,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    pub fn new(engine: &'a TemplateEngine) -> Self {
        Self::with_options(engine, ExportOptions::default())
    }

    pub fn with_options(engine: &'a TemplateEngine, options: ExportOptions) -> Self {
        Self { engine, options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn seo(&self, template: &TemplateDescriptor, data: &PortfolioData) -> SeoMetadata {
        SeoMetadata::derive(template, data, &self.options.og_image)
    }

    pub fn html(&self, template: &TemplateDescriptor, data: &PortfolioData) -> Result<String> {
        let seo = self.seo(template, data);
        HtmlExporter::new(self.engine).render(template, data, &seo)
    }

    pub fn react(&self, template: &TemplateDescriptor, data: &PortfolioData) -> Result<String> {
        ReactExporter::new(self.engine).render(template, data)
    }

    pub fn bundle(
        &self,
        template: &TemplateDescriptor,
        data: &PortfolioData,
    ) -> Result<ProjectBundle> {
        let html = self.html(template, data)?;
        ProjectBundle::build(self.engine, template, data, html)
    }

    pub fn export(
        &self,
        format: ExportFormat,
        template: &TemplateDescriptor,
        data: &PortfolioData,
    ) -> Result<Artifact> {
        tracing::debug!(template = template.id, %format, "exporting");

        match format {
            ExportFormat::Html => Ok(Artifact::text(
                HtmlExporter::filename(template),
                "text/html",
                self.html(template, data)?,
            )),
            ExportFormat::React => Ok(Artifact::text(
                ReactExporter::filename(template),
                "text/typescript",
                self.react(template, data)?,
            )),
            ExportFormat::Zip => self.zip(template, data),
        }
    }

    fn zip(&self, template: &TemplateDescriptor, data: &PortfolioData) -> Result<Artifact> {
        let Some(writer) = archive::writer(self.options.archive) else {
            tracing::warn!(template = template.id, "archive backend unavailable, exporting HTML");
            let mut artifact = self.export(ExportFormat::Html, template, data)?;
            artifact.notice = Some(archive::FALLBACK_NOTICE.to_string());
            return Ok(artifact);
        };

        let bytes = self.bundle(template, data)?.write_archive(writer)?;
        Ok(Artifact {
            filename: format!("{}-portfolio.zip", template.slug()),
            mime: "application/zip",
            bytes,
            notice: None,
        })
    }
}
