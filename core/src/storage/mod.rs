//! SQLite destination for flattened series rows

mod schema;
mod store;

pub use schema::{insert_series_sql, CREATE_SCHEMA_SQL};
pub use store::{ensure_absent, staging_path, SeriesStore, STAGING_SUFFIX};
