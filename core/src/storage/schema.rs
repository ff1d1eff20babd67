use crate::types::SERIES_COLUMNS;

/// Table and index definitions of a fresh series database
pub const CREATE_SCHEMA_SQL: &str = "
    CREATE TABLE SERIES (
        series_id INTEGER NOT NULL PRIMARY KEY,
        series_uid TEXT,
        series_number TEXT,
        series_description TEXT,
        series_number_images INTEGER,
        series_modality TEXT,
        series_manufacturer TEXT,
        series_model TEXT,
        series_annotations_flag BOOLEAN,
        series_annotations_size INTEGER,
        series_total_size INTEGER,
        series_project TEXT,
        series_data_provenance TEXT,
        series_software_version TEXT,
        series_max_frame_count INTEGER,
        series_body_part TEXT,
        series_third_party_analysis TEXT,
        series_description_uri TEXT,
        series_sop_class_uid TEXT,
        series_license_name TEXT,
        series_license_url TEXT,
        series_commercial_restrictions BOOLEAN,
        series_exact_size INTEGER,
        series_screening_year INTEGER,
        series_image_type TEXT,
        series_convolution_kernel TEXT,
        series_reconstruction_diameter REAL,
        series_slice_thickness REAL,
        series_kvp REAL,
        series_mas REAL,
        series_effective_mas REAL,
        series_pitch REAL,

        patient_id INTEGER,
        patient_subject_id INTEGER,

        study_id INTEGER,
        study_uid TEXT,
        study_date INTEGER,
        study_description TEXT,
        study_exclude_commercial TEXT
    );
    CREATE INDEX idx_pat_id ON SERIES(patient_id);
    CREATE INDEX idx_std_id ON SERIES(study_id);
";

/// `INSERT` statement binding every column of [`SERIES_COLUMNS`] in order
pub fn insert_series_sql() -> String {
    let placeholders: Vec<String> = (1..=SERIES_COLUMNS.len())
        .map(|i| format!("?{}", i))
        .collect();
    format!(
        "INSERT INTO SERIES ({}) VALUES ({})",
        SERIES_COLUMNS.join(", "),
        placeholders.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_matches_row_columns() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_SCHEMA_SQL).unwrap();

        let mut stmt = conn.prepare("PRAGMA table_info(SERIES)").unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(names, SERIES_COLUMNS.to_vec());
    }

    #[test]
    fn test_schema_creates_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_SCHEMA_SQL).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'SERIES' ORDER BY name")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();

        assert_eq!(names, vec!["idx_pat_id", "idx_std_id"]);
    }

    #[test]
    fn test_insert_sql_shape() {
        let sql = insert_series_sql();
        assert!(sql.starts_with("INSERT INTO SERIES (series_id, series_uid,"));
        assert!(sql.ends_with("?38, ?39)"));
    }
}
