use crate::error::FieldCoercionWarning;
use crate::types::{Patient, Scalar, Series, SeriesRow, Study};

use super::auxiliary::AuxiliaryFields;

/// A flattened row together with the coercion warnings raised while building it
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenedRow {
    pub row: SeriesRow,
    pub warnings: Vec<FieldCoercionWarning>,
}

/// All rows of one study, submitted to the store as a single batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudyBatch {
    pub rows: Vec<SeriesRow>,
    pub coercion_warnings: usize,
}

impl StudyBatch {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Flattens one series with its patient and study context into one row
///
/// Series attributes pass through untouched. The description is decoded
/// into its auxiliary slots, and its model slot stands in for a null
/// `manufacturerModelName`.
pub fn flatten_series(patient: &Patient, study: &Study, series: &Series) -> FlattenedRow {
    let (aux, warnings) = AuxiliaryFields::decode_with_warnings(&series.description);

    let series_model = match &series.manufacturer_model_name {
        Some(model) => Some(model.clone()),
        None => Some(Scalar::Text(aux.model_name)),
    };

    let row = SeriesRow {
        series_id: series.series_pk_id,
        series_uid: series.series_uid.clone(),
        series_number: series.series_number.clone(),
        series_description: series.description.clone(),
        series_number_images: series.number_images.clone(),
        series_modality: series.modality.clone(),
        series_manufacturer: series.manufacturer.clone(),
        series_model,
        series_annotations_flag: series.annotations_flag.clone(),
        series_annotations_size: series.annotations_size.clone(),
        series_total_size: series.total_size.clone(),
        series_project: series.project.clone(),
        series_data_provenance: series.data_provenance.clone(),
        series_software_version: series.software_version.clone(),
        series_max_frame_count: series.max_frame_count.clone(),
        series_body_part: series.body_part.clone(),
        series_third_party_analysis: series.third_party_analysis.clone(),
        series_description_uri: series.description_uri.clone(),
        series_sop_class_uid: series.sop_class_uid.clone(),
        series_license_name: series.license_name.clone(),
        series_license_url: series.license_url.clone(),
        series_commercial_restrictions: series.commercial_restrictions.clone(),
        series_exact_size: series.exact_size.clone(),

        series_screening_year: aux.screening_year,
        series_image_type: aux.image_type,
        series_convolution_kernel: aux.convolution_kernel,
        series_reconstruction_diameter: aux.reconstruction_diameter,
        series_slice_thickness: aux.slice_thickness,
        series_kvp: aux.kvp,
        series_mas: aux.mas,
        series_effective_mas: aux.effective_mas,
        series_pitch: aux.pitch,

        patient_id: patient.id,
        patient_subject_id: patient.subject_id.clone(),

        study_id: study.id,
        study_uid: study.study_uid.clone(),
        study_date: study.date.clone(),
        study_description: study.description.clone(),
        study_exclude_commercial: study.exclude_commercial.clone(),
    };

    FlattenedRow { row, warnings }
}

/// Flattens every series of one study into a batch
pub fn flatten_study(patient: &Patient, study: &Study, series: &[Series]) -> StudyBatch {
    let mut batch = StudyBatch {
        rows: Vec::with_capacity(series.len()),
        coercion_warnings: 0,
    };
    for entry in series {
        let flattened = flatten_series(patient, study, entry);
        batch.coercion_warnings += flattened.warnings.len();
        batch.rows.push(flattened.row);
    }
    batch
}
