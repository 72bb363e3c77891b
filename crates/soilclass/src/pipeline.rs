//! Main SoilClassifier struct and public API.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classification::classify;
use crate::error::{Result, ValidationError};
use crate::gradation::{
    DEFAULT_CUMULATIVE_TOLERANCE, FINES_SIEVE_MM, GRAVEL_SAND_SIEVE_MM, STANDARD_SIEVES_MM,
    check_finite, compute_curve_with_tolerance, sizes_match,
};
use crate::input::{SampleInput, SampleParser, SourceMetadata};
use crate::plasticity::AtterbergLimits;
use crate::report::ClassificationSummary;

/// Configuration for a classification run.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Expected sieve set, largest first.
    pub sieve_sizes_mm: Vec<f64>,
    /// Reject inputs whose sieves differ from `sieve_sizes_mm`.
    pub enforce_standard_sieves: bool,
    /// Slack allowed on the 100% cumulative retained check.
    pub cumulative_tolerance: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            sieve_sizes_mm: STANDARD_SIEVES_MM.to_vec(),
            enforce_standard_sieves: true,
            cumulative_tolerance: DEFAULT_CUMULATIVE_TOLERANCE,
        }
    }
}

/// Result of classifying a sample file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileClassification {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Pipeline output.
    pub summary: ClassificationSummary,
}

/// Runs gradation, plasticity and classification in order.
///
/// Holds configuration only; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct SoilClassifier {
    config: ClassifierConfig,
}

impl SoilClassifier {
    /// Create a classifier with default configuration.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one sample. Validation errors surface before any label is chosen.
    pub fn classify(&self, sample: &SampleInput) -> std::result::Result<ClassificationSummary, ValidationError> {
        let sizes = sample.sieve_sizes();
        if self.config.enforce_standard_sieves {
            self.check_sieve_set(&sizes)?;
        }
        for boundary in [GRAVEL_SAND_SIEVE_MM, FINES_SIEVE_MM] {
            if !sizes.iter().any(|&size| sizes_match(size, boundary)) {
                return Err(ValidationError::MissingSieve { size_mm: boundary });
            }
        }

        let curve = compute_curve_with_tolerance(
            &sizes,
            &sample.retained_percentages(),
            self.config.cumulative_tolerance,
        )?;

        let limits = AtterbergLimits::new(sample.liquid_limit, sample.plastic_limit)?;
        let plasticity_index = limits.plasticity_index()?;

        if let Some(moisture) = sample.moisture_content {
            check_finite("moisture content", moisture)?;
            if moisture < 0.0 {
                return Err(ValidationError::NegativeLimit {
                    name: "moisture content",
                    value: moisture,
                });
            }
        }

        let classification = classify(&curve, plasticity_index)?;

        tracing::debug!(
            sample = sample.sample_id.as_deref().unwrap_or("-"),
            class = classification.symbol(),
            "Classification complete"
        );

        Ok(
            ClassificationSummary::assemble(curve, limits, plasticity_index, classification)
                .with_sample_id(sample.sample_id.clone())
                .with_moisture_content(sample.moisture_content),
        )
    }

    /// Load a sample file and classify it.
    pub fn classify_file(&self, path: impl AsRef<Path>) -> Result<FileClassification> {
        let (sample, source) = SampleParser::new().parse_file(path)?;
        let summary = self.classify(&sample)?;
        Ok(FileClassification { source, summary })
    }

    fn check_sieve_set(&self, sizes: &[f64]) -> std::result::Result<(), ValidationError> {
        let expected = &self.config.sieve_sizes_mm;
        let matches = sizes.len() == expected.len()
            && sizes.iter().zip(expected).all(|(&a, &b)| sizes_match(a, b));
        if matches {
            Ok(())
        } else {
            Err(ValidationError::UnexpectedSieveSet {
                expected: expected.clone(),
                actual: sizes.to_vec(),
            })
        }
    }
}
