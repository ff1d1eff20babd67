//! Fixtures shared by the unit tests

use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::types::{Patient, Series, Study, StudyIdentifier};

pub fn series_json(pk: i64, description: &str, model: Option<&str>) -> Value {
    json!({
        "seriesPkId": pk,
        "seriesUID": format!("1.3.6.1.4.1.14519.5.2.1.7009.{}", pk),
        "seriesNumber": "2",
        "description": description,
        "numberImages": 120,
        "modality": "CT",
        "manufacturer": "GE MEDICAL SYSTEMS",
        "manufacturerModelName": model,
        "annotationsFlag": false,
        "annotationsSize": 0,
        "totalSizeForAllImagesInSeries": 63123456,
        "project": "NLST",
        "dataProvenanceSiteName": "NCI",
        "softwareVersion": "LightSpeed Verify",
        "maxFrameCount": "0",
        "bodyPartExamined": "CHEST",
        "thirdPartyAnalysis": "NO",
        "descriptionURI": null,
        "sopClassUID": "1.2.840.10008.5.1.4.1.1.2",
        "licenseName": "Creative Commons Attribution 4.0 International License",
        "licenseUrl": "https://creativecommons.org/licenses/by/4.0/",
        "commercialRestrictions": false,
        "exactSize": 52428800
    })
}

pub fn study_json(id: i64, uid: &str, series: Vec<Value>) -> Value {
    json!({
        "id": id,
        "studyId": uid,
        "date": 19990102,
        "description": "NLST-LSS",
        "excludeCommercial": null,
        "seriesList": series
    })
}

pub fn series(pk: i64, description: &str, model: Option<&str>) -> Series {
    serde_json::from_value(series_json(pk, description, model)).unwrap()
}

pub fn study(id: i64, uid: &str) -> Study {
    serde_json::from_value(study_json(id, uid, Vec::new())).unwrap()
}

pub fn patient(id: i64, subject_id: &str, studies: &[&str]) -> Patient {
    Patient {
        id,
        subject_id: subject_id.to_string(),
        study_identifiers: studies
            .iter()
            .map(|s| StudyIdentifier {
                study_identifier: s.to_string(),
            })
            .collect(),
    }
}

pub fn patient_json(id: i64, subject_id: &str, studies: &[&str]) -> Value {
    let identifiers: Vec<Value> = studies
        .iter()
        .map(|s| json!({ "studyIdentifier": s }))
        .collect();
    json!({
        "id": id,
        "subjectId": subject_id,
        "studyIdentifiers": identifiers
    })
}

/// Temporary corpus laid out as `patient/*.json` plus `studies/<listing>/<subject>/<study>.json`
pub struct TestCorpus {
    pub dir: TempDir,
}

impl TestCorpus {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_listing(&self, listing_id: &str, patients: Vec<Value>) -> PathBuf {
        let path = self
            .root()
            .join("patient")
            .join(format!("{}.json", listing_id));
        write_json(&path, &json!({ "resultSet": patients }));
        path
    }

    /// Writes a study document; `studies` is the raw list stored on disk
    pub fn write_study(
        &self,
        listing_id: &str,
        subject_id: &str,
        study_identifier: &str,
        studies: Vec<Value>,
    ) -> PathBuf {
        let path = self
            .root()
            .join("studies")
            .join(listing_id)
            .join(subject_id)
            .join(format!("{}.json", study_identifier));
        write_json(&path, &Value::Array(studies));
        path
    }
}

fn write_json(path: &Path, value: &Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
}
