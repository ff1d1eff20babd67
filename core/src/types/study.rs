use serde::Deserialize;

use super::scalar::{required, Scalar};
use super::series::Series;

/// One study document entry
///
/// A study document on disk is a JSON list that must hold exactly one of
/// these; the walker enforces that before anything else looks at it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Study {
    /// Internal numeric id, stored as `study_id`
    pub id: i64,

    /// External study identifier, stored as `study_uid`
    #[serde(rename = "studyId", deserialize_with = "required")]
    pub study_uid: Option<Scalar>,

    #[serde(deserialize_with = "required")]
    pub date: Option<Scalar>,

    #[serde(deserialize_with = "required")]
    pub description: Option<Scalar>,

    #[serde(rename = "excludeCommercial", deserialize_with = "required")]
    pub exclude_commercial: Option<Scalar>,

    /// Series of this study; the walker moves them out before yielding
    #[serde(rename = "seriesList")]
    pub series_list: Vec<Series>,
}
