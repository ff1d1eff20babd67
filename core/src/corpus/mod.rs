//! Hierarchy walking
//!
//! Discovers patient listings and, for each patient, the study documents
//! they declare, yielding one [`StudyTriple`] per study.

mod layout;
mod walker;

pub use layout::{listing_id, CorpusLayout, DEFAULT_LISTING_DIR, DEFAULT_STUDIES_DIR};
pub use walker::{HierarchyWalker, StudyTriple, WalkEvent};
