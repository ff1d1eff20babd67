use log::debug;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{NlstError, Result};
use crate::types::{Listing, Study};

/// Default directory holding the patient listing documents
pub const DEFAULT_LISTING_DIR: &str = "patient";

/// Default directory holding the per-study documents
pub const DEFAULT_STUDIES_DIR: &str = "studies";

/// On-disk layout of an NLST metadata corpus
///
/// ```text
/// <root>/patient/<listing-id>.json
/// <root>/studies/<listing-id>/<subject-id>/<study-identifier>.json
/// ```
///
/// # Example
///
/// ```
/// use nlstdb_core::CorpusLayout;
/// use std::path::Path;
///
/// let layout = CorpusLayout::new("/data/nlst").with_listing_dir("patients");
/// assert_eq!(layout.listing_dir(), Path::new("/data/nlst/patients"));
/// assert_eq!(
///     layout.study_path("1", "100002", "7"),
///     Path::new("/data/nlst/studies/1/100002/7.json")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLayout {
    root: PathBuf,
    listing_dir: String,
    studies_dir: String,
}

impl CorpusLayout {
    /// Creates a layout with the default directory names
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            listing_dir: DEFAULT_LISTING_DIR.to_string(),
            studies_dir: DEFAULT_STUDIES_DIR.to_string(),
        }
    }

    /// Builder: Set the listing directory name
    pub fn with_listing_dir(mut self, name: impl Into<String>) -> Self {
        self.listing_dir = name.into();
        self
    }

    /// Builder: Set the studies directory name
    pub fn with_studies_dir(mut self, name: impl Into<String>) -> Self {
        self.studies_dir = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn listing_dir(&self) -> PathBuf {
        self.root.join(&self.listing_dir)
    }

    /// Path of the study document for one (listing, subject, study) triple
    pub fn study_path(&self, listing_id: &str, subject_id: &str, study_identifier: &str) -> PathBuf {
        self.root
            .join(&self.studies_dir)
            .join(listing_id)
            .join(subject_id)
            .join(format!("{}.json", study_identifier))
    }

    /// Lists the listing documents (`*.json`), sorted by file name
    pub fn listing_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.listing_dir();
        let entries = std::fs::read_dir(&dir).map_err(|e| NlstError::file_read(&dir, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| NlstError::file_read(&dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
            if is_json {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// Reads a listing document
    pub fn load_listing(&self, path: &Path) -> Result<Listing> {
        read_json(path)
    }

    /// Reads the single study of a study document
    ///
    /// # Errors
    ///
    /// [`NlstError::MalformedInput`] if the document does not hold exactly one study.
    pub fn load_study(
        &self,
        listing_id: &str,
        subject_id: &str,
        study_identifier: &str,
    ) -> Result<Study> {
        let path = self.study_path(listing_id, subject_id, study_identifier);
        debug!("Reading study document {}", path.display());

        let mut studies: Vec<Study> = read_json(&path)?;
        if studies.len() != 1 {
            return Err(NlstError::malformed(
                &path,
                format!("expected exactly 1 study, found {}", studies.len()),
            ));
        }
        Ok(studies.remove(0))
    }
}

/// Listing id of a listing document: its file stem
pub fn listing_id(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| NlstError::malformed(path, "listing file name is not valid UTF-8"))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| NlstError::file_read(path, e))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            NlstError::file_read(path, e.into())
        } else {
            NlstError::malformed(path, e.to_string())
        }
    })
}
