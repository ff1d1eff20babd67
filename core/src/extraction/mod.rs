//! Row flattening
//!
//! Turns one (patient, study, series) triple into one `SERIES` row, decoding
//! the auxiliary fields packed into the series description on the way.

pub mod auxiliary;
pub mod row;

pub use auxiliary::{coerce_real, pad_tokens, AuxiliaryFields, AUXILIARY_SLOTS, PLACEHOLDER};
pub use row::{flatten_series, flatten_study, FlattenedRow, StudyBatch};
