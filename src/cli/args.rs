//! CLI argument parsing

use crate::catalog::Category;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Build portfolio sites from templates
#[derive(Parser, Debug)]
#[command(name = "portfolio-builder")]
#[command(about = "Build portfolio sites from templates and export them as HTML, React, or ZIP")]
#[command(version)]
pub struct Args {
    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available templates
    Templates {
        /// Only show one category (developer, qa, designer, student)
        #[arg(long)]
        category: Option<Category>,
    },

    /// Show the fields a template collects
    Fields {
        /// Template id
        template: String,
    },

    /// Start a new session for a template
    New {
        /// Template id
        template: String,

        /// Session file to create
        #[arg(short, long, default_value = "session.json")]
        output: PathBuf,
    },

    /// Edit a session's data
    Edit {
        /// Session file
        session: PathBuf,

        #[command(subcommand)]
        action: EditAction,
    },

    /// Render the template preview document
    Preview {
        /// Session file
        session: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a session as HTML, React or ZIP
    Export {
        /// Session file
        session: PathBuf,

        /// Output format (html, react, zip)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the SEO metadata an export would carry
    Seo {
        /// Session file
        session: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Set a text field
    Set { field: String, value: String },

    /// Append an item to a list field
    Add { field: String, item: String },

    /// Remove a list item by index
    Remove { field: String, index: usize },

    /// Append a blank record to a projects, experience or education field
    AddRecord { field: String },

    /// Set one attribute of a record
    SetRecord {
        field: String,
        index: usize,
        attr: String,
        value: String,
    },

    /// Remove a record by index
    RemoveRecord { field: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let args = Args::try_parse_from(["portfolio-builder", "new", "codecraft"]).unwrap();
        match args.command {
            Command::New { template, output } => {
                assert_eq!(template, "codecraft");
                assert_eq!(output, PathBuf::from("session.json"));
            }
            _ => panic!("Expected New command"),
        }
        assert!(!args.verbose);
    }

    #[test]
    fn test_templates_category() {
        let args =
            Args::try_parse_from(["portfolio-builder", "templates", "--category", "qa"]).unwrap();
        match args.command {
            Command::Templates { category } => assert_eq!(category, Some(Category::Qa)),
            _ => panic!("Expected Templates command"),
        }

        assert!(
            Args::try_parse_from(["portfolio-builder", "templates", "--category", "chef"]).is_err()
        );
    }

    #[test]
    fn test_export_with_options() {
        let args = Args::try_parse_from([
            "portfolio-builder", "export", "s.json",
            "--format", "zip",
            "--output", "/tmp/site",
            "--config", "custom.toml",
            "-v",
        ])
        .unwrap();

        match args.command {
            Command::Export { session, format, output, config } => {
                assert_eq!(session, PathBuf::from("s.json"));
                assert_eq!(format, Some(ExportFormat::Zip));
                assert_eq!(output, Some(PathBuf::from("/tmp/site")));
                assert_eq!(config, Some(PathBuf::from("custom.toml")));
            }
            _ => panic!("Expected Export command"),
        }
        assert!(args.verbose);
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        assert!(Args::try_parse_from([
            "portfolio-builder", "export", "s.json", "--format", "pdf"
        ])
        .is_err());
    }

    #[test]
    fn test_edit_actions() {
        let args = Args::try_parse_from([
            "portfolio-builder", "edit", "s.json", "set", "name", "Ada Lovelace",
        ])
        .unwrap();
        match args.command {
            Command::Edit { session, action } => {
                assert_eq!(session, PathBuf::from("s.json"));
                assert_eq!(
                    action,
                    EditAction::Set {
                        field: "name".to_string(),
                        value: "Ada Lovelace".to_string()
                    }
                );
            }
            _ => panic!("Expected Edit command"),
        }

        let args = Args::try_parse_from([
            "portfolio-builder", "edit", "s.json", "set-record", "projects", "1", "title", "Engine",
        ])
        .unwrap();
        match args.command {
            Command::Edit { action, .. } => assert_eq!(
                action,
                EditAction::SetRecord {
                    field: "projects".to_string(),
                    index: 1,
                    attr: "title".to_string(),
                    value: "Engine".to_string()
                }
            ),
            _ => panic!("Expected Edit command"),
        }
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["portfolio-builder", "version"]).unwrap();
        assert!(matches!(args.command, Command::Version));
    }
}
