//! Portfolio builder - portfolio sites from templates
//!
//! Pick a template from the catalog, fill in its fields through the form
//! builder, preview it with the template's renderer, and export it as a
//! standalone HTML page, a React component, or a ZIP project bundle.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod form;
pub mod logging;
pub mod render;
pub mod session;

// Re-export main types
pub use catalog::{Category, TemplateDescriptor};
pub use config::Config;
pub use data::{FieldValue, PortfolioData};
pub use error::{Error, Result};
pub use export::{Artifact, ExportFormat, Exporter};
pub use form::FormBuilder;
pub use render::TemplateEngine;
pub use session::Session;
