//! Atterberg limits and the plasticity index.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::gradation::check_finite;

/// Liquid and plastic limits, both as moisture-content percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtterbergLimits {
    pub liquid_limit: f64,
    pub plastic_limit: f64,
}

impl AtterbergLimits {
    /// Build limits, rejecting negative or non-finite values.
    pub fn new(liquid_limit: f64, plastic_limit: f64) -> Result<Self, ValidationError> {
        check_limit("liquid limit", liquid_limit)?;
        check_limit("plastic limit", plastic_limit)?;
        Ok(Self {
            liquid_limit,
            plastic_limit,
        })
    }

    /// Plasticity index for these limits.
    pub fn plasticity_index(&self) -> Result<f64, ValidationError> {
        compute_plasticity_index(self.liquid_limit, self.plastic_limit)
    }
}

fn check_limit(name: &'static str, value: f64) -> Result<(), ValidationError> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeLimit { name, value });
    }
    Ok(())
}

/// `liquid_limit - plastic_limit`.
///
/// A negative result means the limits were swapped or corrupt and is
/// reported, never clamped.
pub fn compute_plasticity_index(liquid_limit: f64, plastic_limit: f64) -> Result<f64, ValidationError> {
    check_limit("liquid limit", liquid_limit)?;
    check_limit("plastic limit", plastic_limit)?;

    let index = liquid_limit - plastic_limit;
    if index < 0.0 {
        return Err(ValidationError::NegativePlasticityIndex {
            liquid_limit,
            plastic_limit,
        });
    }

    tracing::debug!(liquid_limit, plastic_limit, plasticity_index = index, "Computed plasticity index");
    Ok(index)
}
