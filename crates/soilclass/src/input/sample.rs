//! Raw lab readings for one soil sample.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::gradation::{STANDARD_SIEVES_MM, SieveReading};

/// Unvalidated readings as they arrive from data entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleInput {
    /// Optional identifier carried through to the summary.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sample_id: Option<String>,
    /// Sieve readings, largest sieve first.
    pub readings: Vec<SieveReading>,
    /// Liquid limit (LL) in %.
    pub liquid_limit: f64,
    /// Plastic limit (PL) in %.
    pub plastic_limit: f64,
    /// Natural moisture content in %, reported but not used for classification.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub moisture_content: Option<f64>,
}

impl SampleInput {
    pub fn new(readings: Vec<SieveReading>, liquid_limit: f64, plastic_limit: f64) -> Self {
        Self {
            sample_id: None,
            readings,
            liquid_limit,
            plastic_limit,
            moisture_content: None,
        }
    }

    /// Pair retained percentages with the standard sieve stack (75 mm down to 0.075 mm).
    pub fn from_retained(
        retained: &[f64],
        liquid_limit: f64,
        plastic_limit: f64,
    ) -> Result<Self, ValidationError> {
        if retained.len() != STANDARD_SIEVES_MM.len() {
            return Err(ValidationError::LengthMismatch {
                sizes: STANDARD_SIEVES_MM.len(),
                retained: retained.len(),
            });
        }

        let readings = STANDARD_SIEVES_MM
            .iter()
            .zip(retained)
            .map(|(&size, &value)| SieveReading::new(size, value))
            .collect();

        Ok(Self::new(readings, liquid_limit, plastic_limit))
    }

    pub fn with_sample_id(mut self, sample_id: impl Into<String>) -> Self {
        self.sample_id = Some(sample_id.into());
        self
    }

    pub fn with_moisture_content(mut self, moisture_content: f64) -> Self {
        self.moisture_content = Some(moisture_content);
        self
    }

    pub fn sieve_sizes(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.sieve_size_mm).collect()
    }

    pub fn retained_percentages(&self) -> Vec<f64> {
        self.readings.iter().map(|r| r.retained_percent).collect()
    }
}
