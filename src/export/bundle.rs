// Multi-file project bundle
//
// Every file is derived independently from (template, data). The bundle is
// packed by an ArchiveWriter or written out as a directory.

use super::archive::ArchiveWriter;
use crate::catalog::TemplateDescriptor;
use crate::data::PortfolioData;
use crate::error::Result;
use crate::render::TemplateEngine;
use serde_json::json;
use std::fs;
use std::path::Path;
use tera::Context;

/// A named file inside the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub path: &'static str,
    pub contents: String,
}

/// The files of a deployable static site
#[derive(Debug, Clone)]
pub struct ProjectBundle {
    files: Vec<BundleFile>,
}

impl ProjectBundle {
    /// Assemble the bundle around an already rendered `index.html`
    pub fn build(
        engine: &TemplateEngine,
        template: &TemplateDescriptor,
        data: &PortfolioData,
        index_html: String,
    ) -> Result<Self> {
        let mut context = Context::new();
        context.insert("template", template);

        let files = vec![
            BundleFile {
                path: "README.md",
                contents: engine.render("export/README.md", &context)?,
            },
            BundleFile {
                path: "index.html",
                contents: index_html,
            },
            BundleFile {
                path: "package.json",
                contents: package_json(template, data)?,
            },
            BundleFile {
                path: "styles.css",
                contents: engine.render("export/styles.css", &context)?,
            },
            BundleFile {
                path: "script.js",
                contents: engine.render("export/script.js", &context)?,
            },
        ];

        Ok(Self { files })
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }

    pub fn file(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    /// Pack every file into an archive
    pub fn write_archive(&self, mut writer: Box<dyn ArchiveWriter>) -> Result<Vec<u8>> {
        for file in &self.files {
            writer.add_file(file.path, file.contents.as_bytes())?;
        }
        writer.finish()
    }

    /// Write the files into a directory
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        for file in &self.files {
            fs::write(dir.join(file.path), &file.contents)?;
        }
        Ok(())
    }
}

fn package_json(template: &TemplateDescriptor, data: &PortfolioData) -> Result<String> {
    let manifest = json!({
        "name": format!("{}-portfolio", template.slug()),
        "version": "1.0.0",
        "description": format!("Portfolio website built with {} template", template.name),
        "main": "index.html",
        "scripts": {
            "start": "serve -s .",
            "build": "echo 'Static site - no build needed'",
            "deploy": "echo 'Upload files to your hosting provider'"
        },
        "keywords": ["portfolio", "website", template.category.as_str(), "nexzenova"],
        "author": data.non_empty_text("name").unwrap_or("Portfolio Owner"),
        "license": "MIT",
        "devDependencies": {
            "serve": "^14.0.0"
        }
    });
    Ok(serde_json::to_string_pretty(&manifest)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::data::FieldValue;
    use serde_json::Value;
    use tempfile::TempDir;

    fn bundle(template: &TemplateDescriptor, data: &PortfolioData) -> ProjectBundle {
        let engine = TemplateEngine::new().unwrap();
        ProjectBundle::build(&engine, template, data, "<html></html>".to_string()).unwrap()
    }

    #[test]
    fn test_bundle_files() {
        let template = catalog::get("freshstart").unwrap();
        let bundle = bundle(template, &PortfolioData::for_template(template));
        let paths: Vec<_> = bundle.files().iter().map(|f| f.path).collect();
        assert_eq!(
            paths,
            vec!["README.md", "index.html", "package.json", "styles.css", "script.js"]
        );
        assert_eq!(bundle.file("index.html").unwrap().contents, "<html></html>");
    }

    #[test]
    fn test_package_json() {
        let template = catalog::get("creativeflow").unwrap();
        let mut data = PortfolioData::for_template(template);

        let manifest: Value =
            serde_json::from_str(&bundle(template, &data).file("package.json").unwrap().contents)
                .unwrap();
        assert_eq!(manifest["name"], "creativeflow-portfolio");
        assert_eq!(manifest["author"], "Portfolio Owner");
        assert_eq!(manifest["keywords"][2], "designer");
        assert_eq!(manifest["devDependencies"]["serve"], "^14.0.0");

        data.insert("name", FieldValue::Text("Frida".to_string()));
        let manifest: Value =
            serde_json::from_str(&bundle(template, &data).file("package.json").unwrap().contents)
                .unwrap();
        assert_eq!(manifest["author"], "Frida");
    }

    #[test]
    fn test_readme_and_assets_name_template() {
        let template = catalog::get("bughunter").unwrap();
        let bundle = bundle(template, &PortfolioData::for_template(template));
        assert!(bundle
            .file("README.md")
            .unwrap()
            .contents
            .starts_with("# BugHunter Portfolio"));
        assert!(bundle
            .file("styles.css")
            .unwrap()
            .contents
            .contains("--primary-color"));
        assert!(bundle
            .file("script.js")
            .unwrap()
            .contents
            .contains("BugHunter Portfolio loaded successfully!"));
    }

    #[test]
    fn test_write_to_directory() {
        let template = catalog::get("devflow").unwrap();
        let bundle = bundle(template, &PortfolioData::for_template(template));
        let dir = TempDir::new().unwrap();
        bundle.write_to(dir.path()).unwrap();
        for file in bundle.files() {
            assert!(dir.path().join(file.path).exists());
        }
    }
}
