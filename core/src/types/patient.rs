use serde::Deserialize;

use super::scalar::identifier;

/// One patient entry of a listing's `resultSet`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Patient {
    /// Internal numeric id, stored as `patient_id`
    pub id: i64,

    /// External subject identifier, also the directory name of the
    /// patient's study documents
    #[serde(rename = "subjectId", deserialize_with = "identifier")]
    pub subject_id: String,

    /// Studies declared for this patient
    #[serde(rename = "studyIdentifiers")]
    pub study_identifiers: Vec<StudyIdentifier>,
}

/// Reference from a patient to one of its study documents
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudyIdentifier {
    #[serde(rename = "studyIdentifier", deserialize_with = "identifier")]
    pub study_identifier: String,
}

/// Top-level patient listing document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "resultSet")]
    pub result_set: Vec<Patient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_parses_result_set() {
        let json = r#"{
            "totalCount": 1,
            "resultSet": [
                {
                    "id": 17,
                    "subjectId": "100002",
                    "studyIdentifiers": [
                        {"studyIdentifier": 201},
                        {"studyIdentifier": "202"}
                    ]
                }
            ]
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.result_set.len(), 1);

        let patient = &listing.result_set[0];
        assert_eq!(patient.id, 17);
        assert_eq!(patient.subject_id, "100002");
        assert_eq!(
            patient.study_identifiers,
            vec![
                StudyIdentifier {
                    study_identifier: "201".to_string()
                },
                StudyIdentifier {
                    study_identifier: "202".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_listing_requires_result_set() {
        assert!(serde_json::from_str::<Listing>(r#"{"totalCount": 0}"#).is_err());
    }

    #[test]
    fn test_patient_requires_subject_id() {
        let json = r#"{"id": 1, "studyIdentifiers": []}"#;
        assert!(serde_json::from_str::<Patient>(json).is_err());
    }
}
