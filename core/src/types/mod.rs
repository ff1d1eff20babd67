//! Core type definitions for the NLST series hierarchy
//!
//! This module provides the input documents and the flattened output row:
//! - [`Listing`] / [`Patient`]: top-level patient listing documents
//! - [`Study`]: one study document entry with its series
//! - [`Series`]: one imaging series, including the packed description
//! - [`SeriesRow`]: one row of the `SERIES` table
//! - [`Scalar`]: JSON scalars passed through to the database untouched

mod patient;
mod row;
mod scalar;
mod series;
mod study;

pub use patient::{Listing, Patient, StudyIdentifier};
pub use row::{SeriesRow, SERIES_COLUMNS, SERIES_COLUMN_COUNT};
pub use scalar::Scalar;
pub use series::Series;
pub use study::Study;
