//! Flattens NLST patient, study and series metadata into one SQLite table
//!
//! A corpus is a directory of patient listing documents plus one study
//! document per (listing, subject, study). [`CorpusImporter`] walks it,
//! decodes the comma-separated series descriptions and writes one row per
//! series to a fresh database.

pub mod api;
pub mod cli;
pub mod corpus;
pub mod error;
pub mod extraction;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_support;

pub use api::{CorpusImporter, ImportOptions, ImportSummary};
pub use cli::report::TextReport;
pub use corpus::{CorpusLayout, HierarchyWalker, StudyTriple};
pub use error::{FieldCoercionWarning, NlstError, Result};
pub use extraction::{flatten_series, flatten_study, AuxiliaryFields};
pub use storage::SeriesStore;
pub use types::*;
