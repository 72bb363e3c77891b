//! Simplified USCS decision tree.
//!
//! The tree consults two boundary points of the gradation curve, the
//! passing percentage at the 2 mm sieve and at the 0.075 mm sieve, plus the
//! plasticity index. Thresholds are fixed cutoffs (50% passing, PI 4 and 7)
//! rather than the A-line of the full plasticity chart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::gradation::{FINES_SIEVE_MM, GRAVEL_SAND_SIEVE_MM, GradationCurve};

/// Passing percentage that splits each branch of the tree.
pub const PASSING_SPLIT_PERCENT: f64 = 50.0;

/// PI below which fine-grained soil is silt.
pub const SILT_PI_MAX: f64 = 4.0;

/// PI above which soil is clay (coarse branches use `>=`).
pub const CLAY_PI_MIN: f64 = 7.0;

/// Soil class label produced by the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilClass {
    #[serde(rename = "GM")]
    SiltyGravel,
    #[serde(rename = "GC")]
    ClayeyGravel,
    #[serde(rename = "G")]
    Gravel,
    #[serde(rename = "SM")]
    SiltySand,
    #[serde(rename = "SC")]
    ClayeySand,
    #[serde(rename = "S")]
    Sand,
    #[serde(rename = "ML")]
    Silt,
    #[serde(rename = "CL")]
    Clay,
    #[serde(rename = "CL-ML")]
    SiltyClay,
}

impl SoilClass {
    /// All classes in decision-table order.
    pub const ALL: [SoilClass; 9] = [
        SoilClass::SiltyGravel,
        SoilClass::ClayeyGravel,
        SoilClass::Gravel,
        SoilClass::SiltySand,
        SoilClass::ClayeySand,
        SoilClass::Sand,
        SoilClass::Silt,
        SoilClass::Clay,
        SoilClass::SiltyClay,
    ];

    /// Full label, e.g. "Silty Sand (SM)".
    pub fn label(&self) -> &'static str {
        match self {
            SoilClass::SiltyGravel => "Silty Gravel (GM)",
            SoilClass::ClayeyGravel => "Clayey Gravel (GC)",
            SoilClass::Gravel => "Gravel (G)",
            SoilClass::SiltySand => "Silty Sand (SM)",
            SoilClass::ClayeySand => "Clayey Sand (SC)",
            SoilClass::Sand => "Sand (S)",
            SoilClass::Silt => "Silt (ML)",
            SoilClass::Clay => "Clay (CL)",
            SoilClass::SiltyClay => "Silty Clay (CL-ML)",
        }
    }

    /// Group symbol, e.g. "SM".
    pub fn symbol(&self) -> &'static str {
        match self {
            SoilClass::SiltyGravel => "GM",
            SoilClass::ClayeyGravel => "GC",
            SoilClass::Gravel => "G",
            SoilClass::SiltySand => "SM",
            SoilClass::ClayeySand => "SC",
            SoilClass::Sand => "S",
            SoilClass::Silt => "ML",
            SoilClass::Clay => "CL",
            SoilClass::SiltyClay => "CL-ML",
        }
    }

    /// Whether the class comes from the fine-grained branch.
    pub fn is_fine_grained(&self) -> bool {
        matches!(self, SoilClass::Silt | SoilClass::Clay | SoilClass::SiltyClay)
    }
}

impl fmt::Display for SoilClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a validated curve.
///
/// Fails only when the curve lacks one of the two boundary sieves.
pub fn classify(curve: &GradationCurve, plasticity_index: f64) -> Result<SoilClass, ValidationError> {
    let passing_2mm = curve
        .passing_at(GRAVEL_SAND_SIEVE_MM)
        .ok_or(ValidationError::MissingSieve {
            size_mm: GRAVEL_SAND_SIEVE_MM,
        })?;
    let passing_0075mm = curve
        .passing_at(FINES_SIEVE_MM)
        .ok_or(ValidationError::MissingSieve {
            size_mm: FINES_SIEVE_MM,
        })?;

    let class = classify_passing(passing_2mm, passing_0075mm, plasticity_index);
    tracing::debug!(
        passing_2mm,
        passing_0075mm,
        plasticity_index,
        class = class.symbol(),
        "Classified soil"
    );
    Ok(class)
}

/// The decision table over the two boundary values. First match wins.
pub fn classify_passing(passing_2mm: f64, passing_0075mm: f64, plasticity_index: f64) -> SoilClass {
    if passing_2mm < PASSING_SPLIT_PERCENT {
        if passing_0075mm > PASSING_SPLIT_PERCENT {
            if plasticity_index < CLAY_PI_MIN {
                SoilClass::SiltyGravel
            } else {
                SoilClass::ClayeyGravel
            }
        } else {
            SoilClass::Gravel
        }
    } else if passing_0075mm < PASSING_SPLIT_PERCENT {
        if passing_2mm > PASSING_SPLIT_PERCENT {
            if plasticity_index < CLAY_PI_MIN {
                SoilClass::SiltySand
            } else {
                SoilClass::ClayeySand
            }
        } else {
            SoilClass::Sand
        }
    } else if plasticity_index < SILT_PI_MAX {
        SoilClass::Silt
    } else if plasticity_index > CLAY_PI_MIN {
        SoilClass::Clay
    } else {
        SoilClass::SiltyClay
    }
}
