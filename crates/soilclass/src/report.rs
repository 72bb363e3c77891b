//! Presentation-facing summary of a classification run.

use serde::{Deserialize, Serialize};

use crate::classification::SoilClass;
use crate::gradation::GradationCurve;
use crate::plasticity::AtterbergLimits;

/// Everything a report or plot needs from one run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sample_id: Option<String>,
    pub curve: GradationCurve,
    pub limits: AtterbergLimits,
    pub plasticity_index: f64,
    pub classification: SoilClass,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub moisture_content: Option<f64>,
}

/// A point ready for a log-scaled, reversed sieve-size axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub sieve_size_mm: f64,
    pub log10_size: f64,
    pub passing_percent: f64,
}

impl ClassificationSummary {
    /// Package pipeline outputs. Performs no computation.
    pub fn assemble(
        curve: GradationCurve,
        limits: AtterbergLimits,
        plasticity_index: f64,
        classification: SoilClass,
    ) -> Self {
        Self {
            sample_id: None,
            curve,
            limits,
            plasticity_index,
            classification,
            moisture_content: None,
        }
    }

    pub fn with_sample_id(mut self, sample_id: Option<String>) -> Self {
        self.sample_id = sample_id;
        self
    }

    pub fn with_moisture_content(mut self, moisture_content: Option<f64>) -> Self {
        self.moisture_content = moisture_content;
        self
    }

    /// Label/value pairs for a tabular report, in display order.
    pub fn table_rows(&self) -> Vec<(&'static str, String)> {
        let distribution = self
            .curve
            .points()
            .iter()
            .map(|p| format!("{}", p.passing_percent))
            .collect::<Vec<_>>()
            .join(", ");

        let mut rows = Vec::with_capacity(7);
        if let Some(ref id) = self.sample_id {
            rows.push(("Sample", id.clone()));
        }
        rows.push(("Grain Size Distribution", format!("[{}]", distribution)));
        rows.push(("Liquid Limit (LL)", format!("{}%", self.limits.liquid_limit)));
        rows.push(("Plastic Limit (PL)", format!("{}%", self.limits.plastic_limit)));
        rows.push(("Plasticity Index (PI)", format!("{}%", self.plasticity_index)));
        if let Some(moisture) = self.moisture_content {
            rows.push(("Moisture Content", format!("{}%", moisture)));
        }
        rows.push(("Soil Class (USCS)", self.classification.label().to_string()));
        rows
    }

    /// Curve points for plotting, largest sieve first.
    pub fn plot_series(&self) -> Vec<PlotPoint> {
        self.curve
            .points()
            .iter()
            .map(|p| PlotPoint {
                sieve_size_mm: p.sieve_size_mm,
                log10_size: p.sieve_size_mm.log10(),
                passing_percent: p.passing_percent,
            })
            .collect()
    }
}
