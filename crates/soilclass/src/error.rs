//! Error types for the soilclass library.

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or physically impossible lab readings.
///
/// Raised eagerly when data enters the core (gradation and plasticity
/// stages, or curve deserialization). `SoilClassifier` also checks for the
/// boundary sieves before computing a curve; calling `classify` directly on
/// a curve without them yields [`ValidationError::MissingSieve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// No sieve readings supplied.
    #[error("At least one sieve reading is required")]
    Empty,

    /// Sieve sizes and retained percentages differ in length.
    #[error("Got {sizes} sieve sizes but {retained} retained percentages")]
    LengthMismatch { sizes: usize, retained: usize },

    /// NaN or infinite value in an input field.
    #[error("Non-finite value for {field}: {value}")]
    NonFinite { field: String, value: f64 },

    /// Retained percentage below zero.
    #[error("Negative retained percentage {value} on the {sieve_mm} mm sieve")]
    NegativeRetained { sieve_mm: f64, value: f64 },

    /// Running total of retained material went past 100%.
    #[error("Cumulative retained percentage {cumulative} exceeds 100 at the {sieve_mm} mm sieve")]
    CumulativeExceeded { sieve_mm: f64, cumulative: f64 },

    /// Sieve sizes are not strictly descending.
    #[error("Sieve sizes must be strictly descending: {current} mm follows {previous} mm at position {index}")]
    NotDescending {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// Sieve size of zero or below.
    #[error("Sieve size must be positive, got {size_mm} mm")]
    NonPositiveSieve { size_mm: f64 },

    /// Passing percentage outside `[0, 100]`.
    #[error("Passing percentage {value} on the {sieve_mm} mm sieve is outside [0, 100]")]
    PassingOutOfRange { sieve_mm: f64, value: f64 },

    /// Passing percentage rises on a finer sieve.
    #[error("Passing percentage rises from {previous} to {current} at the {sieve_mm} mm sieve")]
    NotMonotonic {
        sieve_mm: f64,
        previous: f64,
        current: f64,
    },

    /// Sieve set differs from the one the classifier expects.
    #[error("Unexpected sieve set {actual:?}, expected {expected:?}")]
    UnexpectedSieveSet { expected: Vec<f64>, actual: Vec<f64> },

    /// Atterberg limit below zero.
    #[error("Negative {name}: {value}")]
    NegativeLimit { name: &'static str, value: f64 },

    /// Plastic limit exceeds liquid limit.
    #[error("Plastic limit {plastic_limit} exceeds liquid limit {liquid_limit} (plasticity index would be negative)")]
    NegativePlasticityIndex {
        liquid_limit: f64,
        plastic_limit: f64,
    },

    /// A boundary sieve the decision tree consults is absent from the curve.
    #[error("Gradation curve has no reading for the {size_mm} mm sieve")]
    MissingSieve { size_mm: f64 },
}

/// Main error type for soilclass operations.
#[derive(Debug, Error)]
pub enum SoilError {
    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing a sample file.
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Required field absent from a sample file.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Result type alias for soilclass operations.
pub type Result<T> = std::result::Result<T, SoilError>;
