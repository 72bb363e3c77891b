//! soilclass: simplified USCS soil classification.
//!
//! Classifies a soil sample from a sieve analysis and its Atterberg limits.
//! Data flows strictly forward through pure functions:
//!
//! - **Gradation**: per-sieve retained percentages become a cumulative
//!   passing curve
//! - **Plasticity**: liquid and plastic limits give the plasticity index
//! - **Classification**: a fixed decision tree maps the curve and index to
//!   a soil class
//! - **Report**: everything is packaged into a read-only summary
//!
//! # Example
//!
//! ```
//! use soilclass::{SampleInput, SoilClass, SoilClassifier};
//!
//! let sample = SampleInput::from_retained(&[0.0, 0.0, 0.0, 0.0, 0.0, 100.0], 30.0, 25.0).unwrap();
//! let summary = SoilClassifier::new().classify(&sample).unwrap();
//!
//! assert_eq!(summary.classification, SoilClass::SiltySand);
//! println!("{}", summary.classification);
//! ```

pub mod classification;
pub mod error;
pub mod gradation;
pub mod input;
pub mod plasticity;
pub mod report;

mod pipeline;

pub use crate::pipeline::{ClassifierConfig, FileClassification, SoilClassifier};
pub use classification::{SoilClass, classify, classify_passing};
pub use error::{Result, SoilError, ValidationError};
pub use gradation::{
    GradationCurve, GradationPoint, STANDARD_SIEVES_MM, SieveReading, compute_curve,
    compute_curve_from_readings,
};
pub use input::{SampleFormat, SampleInput, SampleParser, SourceMetadata};
pub use plasticity::{AtterbergLimits, compute_plasticity_index};
pub use report::{ClassificationSummary, PlotPoint};
