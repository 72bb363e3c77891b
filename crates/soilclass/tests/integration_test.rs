//! Integration tests for loading and classifying sample files.

use std::io::Write;
use tempfile::{Builder, NamedTempFile};

use soilclass::{SoilClass, SoilClassifier, SoilError, ValidationError};

/// Helper to create a temporary file with given content and extension.
fn create_test_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

#[test]
fn test_classify_json_file() {
    let content = r#"{
        "sample_id": "BH-2 @ 1.5m",
        "readings": [
            {"sieve_size_mm": 75, "retained_percent": 0},
            {"sieve_size_mm": 19, "retained_percent": 0},
            {"sieve_size_mm": 4.75, "retained_percent": 0},
            {"sieve_size_mm": 2, "retained_percent": 0},
            {"sieve_size_mm": 0.425, "retained_percent": 0},
            {"sieve_size_mm": 0.075, "retained_percent": 100}
        ],
        "liquid_limit": 30,
        "plastic_limit": 25,
        "moisture_content": 14.2
    }"#;
    let file = create_test_file(content, ".json");

    let result = SoilClassifier::new()
        .classify_file(file.path())
        .expect("Classification failed");

    assert_eq!(result.source.format, "json");
    assert_eq!(result.source.reading_count, 6);
    assert_eq!(result.summary.classification, SoilClass::SiltySand);
    assert_eq!(result.summary.sample_id.as_deref(), Some("BH-2 @ 1.5m"));
    assert_eq!(result.summary.moisture_content, Some(14.2));
}

#[test]
fn test_classify_tsv_file() {
    let content = "sieve_mm\tretained_percent\n\
                   75\t0\n19\t0\n4.75\t0\n2\t0\n0.425\t0\n0.075\t100\n\
                   liquid_limit\t30\nplastic_limit\t20\n";
    let file = create_test_file(content, ".tsv");

    let result = SoilClassifier::new()
        .classify_file(file.path())
        .expect("Classification failed");

    assert_eq!(result.summary.classification, SoilClass::ClayeySand);
}

#[test]
fn test_invalid_readings_surface_as_validation_error() {
    let content = "75,60\n19,60\n4.75,0\n2,0\n0.425,0\n0.075,0\nll,30\npl,20\n";
    let file = create_test_file(content, ".csv");

    let err = SoilClassifier::new().classify_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        SoilError::Validation(ValidationError::CumulativeExceeded { .. })
    ));
}

#[test]
fn test_missing_file() {
    let err = SoilClassifier::new()
        .classify_file("/nonexistent/sample.csv")
        .unwrap_err();
    assert!(matches!(err, SoilError::Io { .. }));
}

#[test]
fn test_unsupported_extension() {
    let file = create_test_file("{}", ".xml");
    let err = SoilClassifier::new().classify_file(file.path()).unwrap_err();
    assert!(matches!(err, SoilError::UnsupportedFormat(_)));
}

#[test]
fn test_summary_serializes_to_json() {
    let content = "75,0\n19,0\n4.75,0\n2,0\n0.425,0\n0.075,0\nll,25\npl,23\n";
    let file = create_test_file(content, ".csv");

    let result = SoilClassifier::new()
        .classify_file(file.path())
        .expect("Classification failed");
    let json = serde_json::to_value(&result.summary).expect("Serialization failed");

    assert_eq!(json["classification"], "ML");
    assert_eq!(json["plasticity_index"], 2.0);
    assert_eq!(json["curve"]["points"].as_array().map(|a| a.len()), Some(6));
}
