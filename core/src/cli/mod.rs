pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::api::ImportOptions;
use crate::corpus::{CorpusLayout, DEFAULT_LISTING_DIR, DEFAULT_STUDIES_DIR};

/// Command-line arguments for nlstdb
#[derive(Parser, Debug)]
#[command(name = "nlstdb")]
#[command(about = "Build a SQLite series database from NLST metadata JSON")]
#[command(version)]
pub struct Cli {
    /// Corpus root holding the listing and study directories
    #[arg(value_name = "CORPUS", default_value = ".")]
    pub corpus: PathBuf,

    /// Destination database (must not exist)
    #[arg(short, long, value_name = "DB", default_value = "db/nlst.db")]
    pub output: PathBuf,

    /// Listing directory, relative to the corpus root
    #[arg(long, value_name = "DIR", default_value = DEFAULT_LISTING_DIR)]
    pub listing_dir: String,

    /// Study directory, relative to the corpus root
    #[arg(long, value_name = "DIR", default_value = DEFAULT_STUDIES_DIR)]
    pub studies_dir: String,

    /// Summary output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Corpus layout described by the arguments
    pub fn layout(&self) -> CorpusLayout {
        CorpusLayout::new(self.corpus.clone())
            .with_listing_dir(self.listing_dir.as_str())
            .with_studies_dir(self.studies_dir.as_str())
    }

    /// Import options described by the arguments
    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::default().show_progress(!self.no_progress)
    }
}

/// Output format options
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
