use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::corpus::{CorpusLayout, HierarchyWalker, WalkEvent};
use crate::error::Result;
use crate::extraction::flatten_study;
use crate::storage::{ensure_absent, SeriesStore};

/// Builds a fresh series database from an NLST metadata corpus
///
/// One run walks every listing, flattens every study's series and writes
/// them to the destination in one batch per study. The run either
/// completes and publishes the database or fails and leaves nothing at
/// the destination.
///
/// # Example
///
/// ```no_run
/// use nlstdb_core::{CorpusImporter, CorpusLayout};
/// use std::path::Path;
///
/// let layout = CorpusLayout::new(".");
/// let summary = CorpusImporter::import(&layout, Path::new("db/nlst.db")).unwrap();
/// println!("{} rows", summary.rows);
/// ```
pub struct CorpusImporter;

impl CorpusImporter {
    /// Imports a corpus with default options (no progress bar)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The destination already exists (before any input is read)
    /// - A document is missing, unreadable or malformed
    /// - A study document does not hold exactly one study
    /// - SQLite rejects a row
    pub fn import(layout: &CorpusLayout, destination: &Path) -> Result<ImportSummary> {
        Self::import_with_options(layout, destination, &ImportOptions::default())
    }

    /// Imports a corpus with explicit options
    pub fn import_with_options(
        layout: &CorpusLayout,
        destination: &Path,
        options: &ImportOptions,
    ) -> Result<ImportSummary> {
        ensure_absent(destination)?;

        info!(
            "Importing corpus {} into {}",
            layout.root().display(),
            destination.display()
        );
        let mut store = SeriesStore::create(destination)?;

        let mut listings = 0usize;
        let mut patients = 0usize;
        let mut studies = 0usize;
        let mut coercion_warnings = 0usize;

        let walker = HierarchyWalker::new(layout)?;
        let progress = listing_progress(walker.remaining_listings(), options.show_progress);
        let walker = walker.on_event(|event| match event {
            WalkEvent::ListingOpened { patients: count } => {
                listings += 1;
                patients += count;
            }
            WalkEvent::ListingFinished => progress.inc(1),
        });

        for triple in walker {
            let triple = triple?;
            let batch = flatten_study(&triple.patient, &triple.study, &triple.series);
            store.insert_batch(&batch.rows)?;

            debug!(
                "Listing {} subject {} study {}: {} rows",
                triple.listing_id,
                triple.patient.subject_id,
                triple.study.id,
                batch.len()
            );
            studies += 1;
            coercion_warnings += batch.coercion_warnings;
        }

        let rows = store.rows_written();
        let destination = store.finish()?;
        progress.finish_and_clear();

        info!("Database created on {}", destination.display());
        Ok(ImportSummary {
            destination,
            listings,
            patients,
            studies,
            rows,
            coercion_warnings,
        })
    }
}

/// Options for one import run
///
/// # Example
///
/// ```
/// use nlstdb_core::ImportOptions;
///
/// let options = ImportOptions::default().show_progress(true);
/// assert!(options.show_progress);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Draw a progress bar over listing documents
    pub show_progress: bool,
}

impl ImportOptions {
    /// Builder: Show or hide the progress bar
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

/// Outcome of a successful import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Where the database was published
    pub destination: PathBuf,

    /// Listing documents read
    pub listings: usize,

    /// Patients found across all listings
    pub patients: usize,

    /// Study documents flattened
    pub studies: usize,

    /// Rows written to `SERIES`
    pub rows: usize,

    /// Numeric description tokens that could not be read and were stored as NULL
    pub coercion_warnings: usize,
}

fn listing_progress(total: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} {prefix:.bold} [{elapsed_precise}] [{bar:32.cyan/blue}] \
{pos}/{len} ({percent}%) eta {eta_precise}",
    ) {
        progress.set_style(style.progress_chars("=> "));
    }
    progress.set_prefix("listings");
    progress
}
