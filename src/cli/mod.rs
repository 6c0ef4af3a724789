//! CLI module for the portfolio builder

mod args;

pub use args::{Args, Command, EditAction};

use crate::catalog::{self, TemplateDescriptor};
use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::export::Exporter;
use crate::form::FormBuilder;
use crate::logging;
use crate::render::{self, TemplateEngine};
use crate::session::Session;
use std::path::Path;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))),
    }
}

fn execute(args: Args) -> Result<()> {
    let config_path = match &args.command {
        Command::Export { config, .. } => config.clone(),
        _ => None,
    };
    let mut cfg = load_config(config_path.as_deref())?;
    cfg.merge_cli(None, None, args.verbose);
    logging::init(&cfg.logging.level);

    match args.command {
        Command::Templates { category } => {
            let templates: Vec<&TemplateDescriptor> = match category {
                Some(c) => catalog::by_category(c).collect(),
                None => catalog::templates().iter().collect(),
            };
            for t in templates {
                println!(
                    "{:<14} {:<14} {:<10} {:>4} (was {}){}",
                    t.id,
                    t.name,
                    t.category,
                    t.price,
                    t.original_price,
                    if t.popular { "  popular" } else { "" }
                );
                println!("               {}", t.description);
            }
            Ok(())
        }

        Command::Fields { template } => {
            let template = catalog::get(&template)?;
            println!("{} ({})", template.name, template.category);
            for field in template.fields {
                println!(
                    "  {:<14} {:<11} {}{}",
                    field.id,
                    field.kind,
                    field.label,
                    if field.required { " *" } else { "" }
                );
            }
            Ok(())
        }

        Command::New { template, output } => {
            let template = catalog::get(&template)?;
            Session::new(template).save(&output)?;
            println!("Created {} session at {}", template.name, output.display());
            Ok(())
        }

        Command::Edit { session, action } => {
            let mut form = Session::load(&session)?.into_form();
            let message = apply_edit(&mut form, action)?;
            Session::from_form(form).save(&session)?;
            println!("{}", message);
            Ok(())
        }

        Command::Preview { session, output } => {
            let session = Session::load(&session)?;
            let engine = TemplateEngine::new()?.with_brand(cfg.export.brand.clone());
            let document = render::render(&engine, session.template, &session.data)?;

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &document.html)?;
                    println!("Preview \"{}\" written to {}", document.title, path.display());
                }
                None => println!("{}", document.html),
            }
            Ok(())
        }

        Command::Export {
            session,
            format,
            output,
            ..
        } => {
            cfg.merge_cli(output, format, args.verbose);
            cfg.validate()?;

            let session = Session::load(&session)?;
            let engine = TemplateEngine::new()?.with_brand(cfg.export.brand.clone());
            let exporter = Exporter::with_options(&engine, cfg.export_options());

            let artifact = exporter.export(cfg.output.format, session.template, &session.data)?;
            if let Some(notice) = &artifact.notice {
                eprintln!("Note: {}", notice);
            }
            let path = artifact.write_to(&cfg.output.directory)?;
            println!("Exported {} to {}", artifact.filename, path.display());
            Ok(())
        }

        Command::Seo { session } => {
            let session = Session::load(&session)?;
            let engine = TemplateEngine::new()?;
            let seo = Exporter::with_options(&engine, cfg.export_options())
                .seo(session.template, &session.data);
            println!("{}", serde_json::to_string_pretty(&seo)?);
            Ok(())
        }

        Command::Version => {
            println!("portfolio-builder {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Apply one edit, returning a confirmation line
fn apply_edit(form: &mut FormBuilder, action: EditAction) -> Result<String> {
    match action {
        EditAction::Set { field, value } => {
            form.set_text(&field, value)?;
            Ok(format!("Set {}", field))
        }
        EditAction::Add { field, item } => {
            if form.add_item(&field, &item)? {
                Ok(format!("Added item to {}", field))
            } else {
                Ok(format!("Blank item ignored for {}", field))
            }
        }
        EditAction::Remove { field, index } => {
            form.remove_item(&field, index)?;
            Ok(format!("Removed {}[{}]", field, index))
        }
        EditAction::AddRecord { field } => {
            let index = form.add_record(&field)?;
            Ok(format!("Added {}[{}]", field, index))
        }
        EditAction::SetRecord {
            field,
            index,
            attr,
            value,
        } => {
            form.update_record_attr(&field, index, &attr, &value)?;
            Ok(format!("Set {}[{}].{}", field, index, attr))
        }
        EditAction::RemoveRecord { field, index } => {
            form.remove_record(&field, index)?;
            Ok(format!("Removed {}[{}]", field, index))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str) -> FormBuilder {
        FormBuilder::new(catalog::get(id).unwrap())
    }

    #[test]
    fn test_apply_set_and_add() {
        let mut f = form("devflow");
        apply_edit(
            &mut f,
            EditAction::Set {
                field: "name".to_string(),
                value: "Ada".to_string(),
            },
        )
        .unwrap();
        let msg = apply_edit(
            &mut f,
            EditAction::Add {
                field: "skills".to_string(),
                item: "   ".to_string(),
            },
        )
        .unwrap();
        assert_eq!(msg, "Blank item ignored for skills");
        assert_eq!(f.data().text("name"), "Ada");
        assert!(f.data().list("skills").unwrap().is_empty());
    }

    #[test]
    fn test_apply_record_edits() {
        let mut f = form("codecraft");
        let msg = apply_edit(
            &mut f,
            EditAction::AddRecord {
                field: "projects".to_string(),
            },
        )
        .unwrap();
        assert_eq!(msg, "Added projects[0]");

        apply_edit(
            &mut f,
            EditAction::SetRecord {
                field: "projects".to_string(),
                index: 0,
                attr: "technologies".to_string(),
                value: "Rust, SQL".to_string(),
            },
        )
        .unwrap();
        assert_eq!(f.data().projects()[0].technologies, ["Rust", "SQL"]);

        assert!(apply_edit(
            &mut f,
            EditAction::SetRecord {
                field: "projects".to_string(),
                index: 4,
                attr: "title".to_string(),
                value: "x".to_string(),
            },
        )
        .is_err());

        apply_edit(
            &mut f,
            EditAction::RemoveRecord {
                field: "projects".to_string(),
                index: 0,
            },
        )
        .unwrap();
        assert!(f.data().projects().is_empty());
    }
}
