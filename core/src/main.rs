use clap::Parser;
use log::error;
use nlstdb_core::cli::{Cli, OutputFormat};
use nlstdb_core::{CorpusImporter, ImportSummary, TextReport};
use std::process;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    if cli.format == OutputFormat::Text {
        println!("NLST metadata database builder");
    }

    let summary = match CorpusImporter::import_with_options(
        &cli.layout(),
        &cli.output,
        &cli.import_options(),
    ) {
        Ok(summary) => summary,
        Err(e) => {
            error!("Import failed, no database was written");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match format_summary(&summary, &cli.format) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn format_summary(
    summary: &ImportSummary,
    format: &OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(TextReport::new(summary).to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(summary),
    }
}
