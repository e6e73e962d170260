//! CLI definitions and command dispatch.

use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fontpair_core::{PairingSession, Role};
use fontpair_font_catalog::{Catalog, CatalogLoader, FileCatalog, HttpCatalog};

use crate::session::{SessionMode, run_session};

#[derive(Parser)]
#[command(name = "fontpair")]
#[command(about = "Pick and compare font pairings for heading, subheading, body and caption")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the font family list comes from. Neither option means no suggestions.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CatalogArgs {
    /// URL of a JSON or plain-text list of font families.
    #[arg(long, conflicts_with = "catalog_file")]
    pub catalog_url: Option<String>,
    /// Local JSON or plain-text list of font families.
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,
}

impl CatalogArgs {
    /// Start loading the catalog in the background.
    pub fn spawn_loader(&self) -> CatalogLoader {
        match (&self.catalog_url, &self.catalog_file) {
            (Some(url), _) => CatalogLoader::spawn(HttpCatalog::new(url.clone())),
            (None, Some(path)) => CatalogLoader::spawn(FileCatalog::new(path.clone())),
            (None, None) => CatalogLoader::ready(Catalog::default()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive picker reading one command per line.
    Session {
        /// Read commands from this file instead of stdin.
        #[arg(long)]
        script: Option<PathBuf>,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Print catalog families matching a query.
    Suggest {
        query: String,
        #[command(flatten)]
        catalog: CatalogArgs,
    },
    /// Print the combined font reference for a set of role fonts.
    Reference {
        #[arg(long)]
        heading: Option<String>,
        #[arg(long)]
        subheading: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        caption: Option<String>,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Session { script, catalog } => {
                let mut loader = catalog.spawn_loader();
                let stdout = io::stdout();
                match script {
                    Some(path) => {
                        let file = File::open(&path)
                            .with_context(|| format!("Failed to open script {}", path.display()))?;
                        run_session(
                            BufReader::new(file),
                            &mut stdout.lock(),
                            &mut loader,
                            SessionMode::Script,
                        )?;
                    }
                    None => {
                        run_session(
                            io::stdin().lock(),
                            &mut stdout.lock(),
                            &mut loader,
                            SessionMode::Interactive,
                        )?;
                    }
                }
            }
            Commands::Suggest { query, catalog } => {
                let mut loader = catalog.spawn_loader();
                let suggestions = loader.wait().suggest(&query);
                if suggestions.is_empty() {
                    println!("No suggestions for '{query}'");
                }
                for family in suggestions {
                    println!("{family}");
                }
            }
            Commands::Reference { heading, subheading, body, caption } => {
                let mut session = PairingSession::new();
                let fonts = [
                    (Role::Heading, heading),
                    (Role::Subheading, subheading),
                    (Role::Body, body),
                    (Role::Caption, caption),
                ];
                for (role, font) in
                    fonts.into_iter().filter_map(|(role, font)| font.map(|font| (role, font)))
                {
                    session
                        .assign_font(role, &font)
                        .with_context(|| format!("Invalid font for {role}"))?;
                }
                let reference = session.font_reference();
                println!("{reference}");
                println!("{}", reference.stylesheet_url());
            }
        }
        Ok(())
    }
}
