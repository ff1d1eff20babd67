use serde::Deserialize;

use super::scalar::{required, Scalar};

/// One imaging series as found in a study document's `seriesList`
///
/// Everything except `series_pk_id`, `description` and
/// `manufacturer_model_name` is passed through to the output row as-is.
/// Every key must be present; `null` values are fine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Series {
    #[serde(rename = "seriesPkId")]
    pub series_pk_id: i64,

    #[serde(rename = "seriesUID", deserialize_with = "required")]
    pub series_uid: Option<Scalar>,

    #[serde(rename = "seriesNumber", deserialize_with = "required")]
    pub series_number: Option<Scalar>,

    /// Free-text description carrying the packed auxiliary fields
    pub description: String,

    #[serde(rename = "numberImages", deserialize_with = "required")]
    pub number_images: Option<Scalar>,

    #[serde(deserialize_with = "required")]
    pub modality: Option<Scalar>,

    #[serde(deserialize_with = "required")]
    pub manufacturer: Option<Scalar>,

    /// Model name; when `None` the description's model slot is used instead
    #[serde(rename = "manufacturerModelName", deserialize_with = "required")]
    pub manufacturer_model_name: Option<Scalar>,

    #[serde(rename = "annotationsFlag", deserialize_with = "required")]
    pub annotations_flag: Option<Scalar>,

    #[serde(rename = "annotationsSize", deserialize_with = "required")]
    pub annotations_size: Option<Scalar>,

    #[serde(rename = "totalSizeForAllImagesInSeries", deserialize_with = "required")]
    pub total_size: Option<Scalar>,

    #[serde(deserialize_with = "required")]
    pub project: Option<Scalar>,

    #[serde(rename = "dataProvenanceSiteName", deserialize_with = "required")]
    pub data_provenance: Option<Scalar>,

    #[serde(rename = "softwareVersion", deserialize_with = "required")]
    pub software_version: Option<Scalar>,

    #[serde(rename = "maxFrameCount", deserialize_with = "required")]
    pub max_frame_count: Option<Scalar>,

    #[serde(rename = "bodyPartExamined", deserialize_with = "required")]
    pub body_part: Option<Scalar>,

    #[serde(rename = "thirdPartyAnalysis", deserialize_with = "required")]
    pub third_party_analysis: Option<Scalar>,

    #[serde(rename = "descriptionURI", deserialize_with = "required")]
    pub description_uri: Option<Scalar>,

    #[serde(rename = "sopClassUID", deserialize_with = "required")]
    pub sop_class_uid: Option<Scalar>,

    #[serde(rename = "licenseName", deserialize_with = "required")]
    pub license_name: Option<Scalar>,

    #[serde(rename = "licenseUrl", deserialize_with = "required")]
    pub license_url: Option<Scalar>,

    #[serde(rename = "commercialRestrictions", deserialize_with = "required")]
    pub commercial_restrictions: Option<Scalar>,

    #[serde(rename = "exactSize", deserialize_with = "required")]
    pub exact_size: Option<Scalar>,
}
