use rusqlite::types::ToSql;

use super::scalar::Scalar;

/// Number of columns in the `SERIES` table
pub const SERIES_COLUMN_COUNT: usize = 39;

/// Column names of the `SERIES` table, in insertion order
pub const SERIES_COLUMNS: [&str; SERIES_COLUMN_COUNT] = [
    "series_id",
    "series_uid",
    "series_number",
    "series_description",
    "series_number_images",
    "series_modality",
    "series_manufacturer",
    "series_model",
    "series_annotations_flag",
    "series_annotations_size",
    "series_total_size",
    "series_project",
    "series_data_provenance",
    "series_software_version",
    "series_max_frame_count",
    "series_body_part",
    "series_third_party_analysis",
    "series_description_uri",
    "series_sop_class_uid",
    "series_license_name",
    "series_license_url",
    "series_commercial_restrictions",
    "series_exact_size",
    "series_screening_year",
    "series_image_type",
    "series_convolution_kernel",
    "series_reconstruction_diameter",
    "series_slice_thickness",
    "series_kvp",
    "series_mas",
    "series_effective_mas",
    "series_pitch",
    "patient_id",
    "patient_subject_id",
    "study_id",
    "study_uid",
    "study_date",
    "study_description",
    "study_exclude_commercial",
];

/// One flattened output row: a series with its patient and study context
///
/// Built by [`crate::extraction::flatten_series`]; never modified after that.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    // Series pass-through attributes
    pub series_id: i64,
    pub series_uid: Option<Scalar>,
    pub series_number: Option<Scalar>,
    pub series_description: String,
    pub series_number_images: Option<Scalar>,
    pub series_modality: Option<Scalar>,
    pub series_manufacturer: Option<Scalar>,
    /// Model name after the description fallback
    pub series_model: Option<Scalar>,
    pub series_annotations_flag: Option<Scalar>,
    pub series_annotations_size: Option<Scalar>,
    pub series_total_size: Option<Scalar>,
    pub series_project: Option<Scalar>,
    pub series_data_provenance: Option<Scalar>,
    pub series_software_version: Option<Scalar>,
    pub series_max_frame_count: Option<Scalar>,
    pub series_body_part: Option<Scalar>,
    pub series_third_party_analysis: Option<Scalar>,
    pub series_description_uri: Option<Scalar>,
    pub series_sop_class_uid: Option<Scalar>,
    pub series_license_name: Option<Scalar>,
    pub series_license_url: Option<Scalar>,
    pub series_commercial_restrictions: Option<Scalar>,
    pub series_exact_size: Option<Scalar>,

    // Decoded from the description
    pub series_screening_year: String,
    pub series_image_type: String,
    pub series_convolution_kernel: String,
    pub series_reconstruction_diameter: Option<f64>,
    pub series_slice_thickness: Option<f64>,
    pub series_kvp: Option<f64>,
    pub series_mas: Option<f64>,
    pub series_effective_mas: Option<f64>,
    pub series_pitch: Option<f64>,

    // Patient
    pub patient_id: i64,
    pub patient_subject_id: String,

    // Study
    pub study_id: i64,
    pub study_uid: Option<Scalar>,
    pub study_date: Option<Scalar>,
    pub study_description: Option<Scalar>,
    pub study_exclude_commercial: Option<Scalar>,
}

impl SeriesRow {
    /// Returns the row's values in [`SERIES_COLUMNS`] order, ready for binding
    pub fn sql_values(&self) -> [&dyn ToSql; SERIES_COLUMN_COUNT] {
        [
            &self.series_id,
            &self.series_uid,
            &self.series_number,
            &self.series_description,
            &self.series_number_images,
            &self.series_modality,
            &self.series_manufacturer,
            &self.series_model,
            &self.series_annotations_flag,
            &self.series_annotations_size,
            &self.series_total_size,
            &self.series_project,
            &self.series_data_provenance,
            &self.series_software_version,
            &self.series_max_frame_count,
            &self.series_body_part,
            &self.series_third_party_analysis,
            &self.series_description_uri,
            &self.series_sop_class_uid,
            &self.series_license_name,
            &self.series_license_url,
            &self.series_commercial_restrictions,
            &self.series_exact_size,
            &self.series_screening_year,
            &self.series_image_type,
            &self.series_convolution_kernel,
            &self.series_reconstruction_diameter,
            &self.series_slice_thickness,
            &self.series_kvp,
            &self.series_mas,
            &self.series_effective_mas,
            &self.series_pitch,
            &self.patient_id,
            &self.patient_subject_id,
            &self.study_id,
            &self.study_uid,
            &self.study_date,
            &self.study_description,
            &self.study_exclude_commercial,
        ]
    }
}
