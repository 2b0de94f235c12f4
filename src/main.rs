use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use craftfolio::app::domain::{AppConfig, TemplateId};
use craftfolio::app::infrastructure::error::{AppError, Result};
use craftfolio::app::infrastructure::storage::FileStorage;
use craftfolio::app::services::export::export_file_name;
use craftfolio::app::services::render::render_page;
use craftfolio::app::services::store::ResumeStore;

#[derive(Parser, Debug)]
#[command(name = "craftfolio", version, about = "Build a resume from structured sections")]
struct Cmd {
    #[command(subcommand)]
    command: SubCommandType,
}

#[derive(Subcommand, Debug, PartialEq)]
enum SubCommandType {
    /// Print the resume document as JSON
    Show,
    /// Print the selected template, or select one
    Template { id: Option<String> },
    /// Write the HTML preview (stdout when no path is given)
    Render { path: Option<PathBuf> },
    /// Print the file name a PDF export would use
    ExportName,
    /// Erase the resume and restore defaults
    Reset {
        /// Confirm that all resume data may be erased
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: SubCommandType, config: &AppConfig) -> Result<()> {
    let mut store = ResumeStore::open(FileStorage::new(&config.data_dir));
    debug!(dir = %config.data_dir.display(), "store opened");

    match command {
        SubCommandType::Show => {
            println!("{}", serde_json::to_string_pretty(store.resume_data())?);
        }
        SubCommandType::Template { id: Some(id) } => {
            let template = store.set_template(&id)?;
            println!("Selected template: {}", template.display_name());
        }
        SubCommandType::Template { id: None } => {
            let selected = store.selected_template();
            for template in TemplateId::all() {
                let marker = if *template == selected { "*" } else { " " };
                println!("{} {:<12} {}", marker, template.key(), template.display_name());
            }
        }
        SubCommandType::Render { path } => {
            let html = render_page(store.resume_data(), store.selected_template(), "");
            match path {
                Some(path) => {
                    fs::write(&path, html)?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", html),
            }
        }
        SubCommandType::ExportName => {
            println!("{}", export_file_name(&store.resume_data().personal_info));
        }
        SubCommandType::Reset { yes: false } => {
            return Err(AppError::Usage(
                "reset erases all resume data; pass --yes to confirm".to_string(),
            ));
        }
        SubCommandType::Reset { yes: true } => {
            store.reset()?;
            println!("Resume data reset.");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cmd::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read configuration: {}. Using defaults.", e);
            AppConfig::default()
        }
    };
    init_logging(&config);

    match run(args.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> SubCommandType {
        let mut argv = vec!["craftfolio"];
        argv.extend_from_slice(args);
        Cmd::try_parse_from(argv).unwrap().command
    }

    #[test]
    fn test_command_definition_is_valid() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn test_reset_confirmation_flags() {
        assert_eq!(parse(&["reset"]), SubCommandType::Reset { yes: false });
        assert_eq!(parse(&["reset", "--yes"]), SubCommandType::Reset { yes: true });
        assert_eq!(parse(&["reset", "-y"]), SubCommandType::Reset { yes: true });
    }

    #[test]
    fn test_optional_arguments() {
        assert_eq!(parse(&["template"]), SubCommandType::Template { id: None });
        assert_eq!(
            parse(&["template", "modern"]),
            SubCommandType::Template { id: Some("modern".to_string()) }
        );
        assert_eq!(
            parse(&["render", "out.html"]),
            SubCommandType::Render { path: Some(PathBuf::from("out.html")) }
        );
        assert_eq!(parse(&["export-name"]), SubCommandType::ExportName);
    }

    #[test]
    fn test_unknown_command_is_rejected() {
        assert!(Cmd::try_parse_from(["craftfolio", "publish"]).is_err());
        assert!(Cmd::try_parse_from(["craftfolio"]).is_err());
    }

    #[test]
    fn test_reset_without_confirmation_is_refused() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            log: "info".to_string(),
        };
        let err = run(SubCommandType::Reset { yes: false }, &config).unwrap_err();
        assert!(matches!(err, AppError::Usage(_)));
    }
}
