use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use super::{ContactCommand, ListCommand};
use crate::config::Config;
use crate::content::Catalog;
use crate::tui;

/// fieldfolio - a biodiversity researcher's portfolio in your terminal
#[derive(Parser)]
#[command(
    name = "fieldfolio",
    version,
    about = "A biodiversity researcher's portfolio in your terminal",
    long_about = r#"fieldfolio renders a researcher's portfolio (profile, projects, publications,
skills and contact form) as an interactive terminal page.

Examples:
  fieldfolio                                  # Browse the portfolio
  fieldfolio list --section publications      # Print publications
  fieldfolio contact --name Ana --message Hi  # Print the contact form URL
  fieldfolio --catalog ./catalog.json         # Use another catalog"#
)]
pub struct Cli {
    /// Catalog JSON file replacing the built-in content
    #[arg(long = "catalog", global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print catalog entries
    List(ListCommand),

    /// Build the contact form submission URL
    Contact(ContactCommand),
}

impl Cli {
    /// Whether this invocation runs the full-screen interface
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }

    pub async fn execute(self, mut config: Config) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        config.validate()?;

        let catalog = Catalog::load_or_builtin(config.catalog_path.as_deref())
            .await
            .context("Failed to load catalog")?;
        debug!(
            "Catalog loaded: {} projects, {} publications",
            catalog.projects.len(),
            catalog.publications.len()
        );

        match self.command {
            Some(Commands::List(list_cmd)) => list_cmd.execute(&catalog),
            Some(Commands::Contact(contact_cmd)) => contact_cmd.execute(&config).await,
            None => Self::start_interactive_mode(&config, catalog).await,
        }
    }

    async fn start_interactive_mode(config: &Config, catalog: Catalog) -> Result<()> {
        info!("Starting interactive mode");
        tui::run(config, Arc::new(catalog)).await?;
        info!("Application finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["fieldfolio"]);
        assert!(cli.is_interactive());

        let cli = Cli::parse_from(["fieldfolio", "--catalog", "c.json", "list"]);
        assert!(!cli.is_interactive());
        assert_eq!(cli.catalog, Some(PathBuf::from("c.json")));

        let cli = Cli::parse_from(["fieldfolio", "contact", "--name", "Ana", "--open", "-d"]);
        assert!(cli.debug);
        match cli.command {
            Some(Commands::Contact(cmd)) => {
                assert_eq!(cmd.name, "Ana");
                assert!(cmd.open);
            }
            _ => panic!("expected contact command"),
        }
    }
}
