use log::{debug, warn};
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NlstError, Result};
use crate::types::SeriesRow;

use super::schema::{insert_series_sql, CREATE_SCHEMA_SQL};

/// Suffix of the staging database built next to the destination
pub const STAGING_SUFFIX: &str = "partial";

/// Exclusive handle on a series database being built
///
/// The database is written to a staging file beside the destination and
/// only renamed into place by [`SeriesStore::finish`]. Dropping the store
/// without finishing closes the connection and deletes the staging file,
/// so a failed run never leaves a destination behind.
pub struct SeriesStore {
    // Field order matters: the connection must close before the staging
    // file is removed.
    conn: Connection,
    staging: StagingFile,
    insert_sql: String,
    rows_written: usize,
}

impl SeriesStore {
    /// Creates an empty series database for `destination`
    ///
    /// # Errors
    ///
    /// [`NlstError::DestinationExists`] if anything already exists at `destination`.
    pub fn create(destination: &Path) -> Result<Self> {
        ensure_absent(destination)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let staging_path = staging_path(destination);
        if staging_path.exists() {
            warn!(
                "Removing leftover staging database {}",
                staging_path.display()
            );
            fs::remove_file(&staging_path)?;
        }

        let staging = StagingFile {
            path: staging_path,
            destination: destination.to_path_buf(),
            published: false,
        };
        let conn = Connection::open(&staging.path)?;
        conn.execute_batch(CREATE_SCHEMA_SQL)?;
        debug!("Created staging database {}", staging.path.display());

        Ok(Self {
            conn,
            staging,
            insert_sql: insert_series_sql(),
            rows_written: 0,
        })
    }

    /// Inserts one study's rows in a single transaction
    pub fn insert_batch(&mut self, rows: &[SeriesRow]) -> Result<usize> {
        if rows.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&self.insert_sql)?;
            for row in rows {
                stmt.execute(&row.sql_values()[..])?;
            }
        }
        tx.commit()?;

        self.rows_written += rows.len();
        Ok(rows.len())
    }

    /// Rows inserted so far
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Path the database will be published to
    pub fn destination(&self) -> &Path {
        &self.staging.destination
    }

    /// Closes the database and moves it to its destination
    pub fn finish(self) -> Result<PathBuf> {
        let SeriesStore { conn, staging, .. } = self;
        conn.close().map_err(|(_, e)| NlstError::Database(e))?;
        staging.publish()
    }
}

/// Fails with [`NlstError::DestinationExists`] if `destination` exists
pub fn ensure_absent(destination: &Path) -> Result<()> {
    if destination.exists() {
        return Err(NlstError::DestinationExists {
            path: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Staging path for a destination: `<destination>.partial`
pub fn staging_path(destination: &Path) -> PathBuf {
    let file_name = destination
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("series.db");
    destination.with_file_name(format!("{}.{}", file_name, STAGING_SUFFIX))
}

struct StagingFile {
    path: PathBuf,
    destination: PathBuf,
    published: bool,
}

impl StagingFile {
    fn publish(mut self) -> Result<PathBuf> {
        // Re-check: nothing may have appeared at the destination during the run.
        ensure_absent(&self.destination)?;
        fs::rename(&self.path, &self.destination)?;
        self.published = true;
        Ok(self.destination.clone())
    }
}

impl Drop for StagingFile {
    fn drop(&mut self) {
        if self.published {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "Failed removing staging database {}: {}",
                    self.path.display(),
                    e
                );
            }
        } else {
            debug!("Discarded staging database {}", self.path.display());
        }
    }
}
