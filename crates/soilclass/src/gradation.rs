//! Sieve readings and the cumulative passing curve.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Standard sieve sizes in millimetres, largest first.
pub const STANDARD_SIEVES_MM: [f64; 6] = [75.0, 19.0, 4.75, 2.0, 0.425, 0.075];

/// Gravel/sand boundary sieve.
pub const GRAVEL_SAND_SIEVE_MM: f64 = 2.0;

/// Fines boundary sieve.
pub const FINES_SIEVE_MM: f64 = 0.075;

/// Default slack when checking that cumulative retained stays within 100%.
pub const DEFAULT_CUMULATIVE_TOLERANCE: f64 = 1e-9;

/// Relative tolerance used when matching a sieve size by value.
const SIZE_MATCH_TOLERANCE: f64 = 1e-6;

/// Percentage of the sample retained on one sieve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SieveReading {
    /// Sieve opening in millimetres.
    pub sieve_size_mm: f64,
    /// Percentage of the total sample retained on this sieve.
    pub retained_percent: f64,
}

impl SieveReading {
    pub fn new(sieve_size_mm: f64, retained_percent: f64) -> Self {
        Self {
            sieve_size_mm,
            retained_percent,
        }
    }
}

/// One point of a gradation curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradationPoint {
    pub sieve_size_mm: f64,
    pub passing_percent: f64,
}

/// Cumulative passing percentage per sieve, ordered largest sieve first.
///
/// Built by [`compute_curve`] or by a deserialize that re-checks the same
/// invariants: positive strictly descending sizes, passing non-increasing
/// and bounded to `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct GradationCurve {
    points: Vec<GradationPoint>,
}

#[derive(Deserialize)]
struct RawCurve {
    points: Vec<GradationPoint>,
}

impl TryFrom<RawCurve> for GradationCurve {
    type Error = ValidationError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        GradationCurve::from_points(raw.points)
    }
}

impl GradationCurve {
    /// Build a curve from existing points, checking every curve invariant.
    pub fn from_points(points: Vec<GradationPoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::Empty);
        }

        for (index, point) in points.iter().enumerate() {
            check_sieve_size(point.sieve_size_mm)?;
            check_finite("passing percentage", point.passing_percent)?;
            if !(0.0..=100.0).contains(&point.passing_percent) {
                return Err(ValidationError::PassingOutOfRange {
                    sieve_mm: point.sieve_size_mm,
                    value: point.passing_percent,
                });
            }

            if index > 0 {
                let previous = points[index - 1];
                if point.sieve_size_mm >= previous.sieve_size_mm {
                    return Err(ValidationError::NotDescending {
                        index,
                        previous: previous.sieve_size_mm,
                        current: point.sieve_size_mm,
                    });
                }
                if point.passing_percent > previous.passing_percent {
                    return Err(ValidationError::NotMonotonic {
                        sieve_mm: point.sieve_size_mm,
                        previous: previous.passing_percent,
                        current: point.passing_percent,
                    });
                }
            }
        }

        Ok(Self { points })
    }

    /// Points in sieve order, largest first.
    pub fn points(&self) -> &[GradationPoint] {
        &self.points
    }

    /// Passing percentages in sieve order.
    pub fn passing_percentages(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.passing_percent).collect()
    }

    /// Sieve sizes in curve order.
    pub fn sieve_sizes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sieve_size_mm).collect()
    }

    /// Passing percentage at a specific sieve, if that sieve was measured.
    pub fn passing_at(&self, sieve_size_mm: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| sizes_match(p.sieve_size_mm, sieve_size_mm))
            .map(|p| p.passing_percent)
    }

    /// Passing percentage at the finest sieve.
    pub fn last_passing(&self) -> Option<f64> {
        self.points.last().map(|p| p.passing_percent)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether two sieve sizes name the same sieve.
pub(crate) fn sizes_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= SIZE_MATCH_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

/// Compute the cumulative passing curve from per-sieve retained percentages.
///
/// `passing[i] = 100 - sum(retained[0..=i])`.
pub fn compute_curve(
    sieve_sizes_descending: &[f64],
    retained_percentages: &[f64],
) -> Result<GradationCurve, ValidationError> {
    compute_curve_with_tolerance(
        sieve_sizes_descending,
        retained_percentages,
        DEFAULT_CUMULATIVE_TOLERANCE,
    )
}

/// Compute the curve from paired readings.
pub fn compute_curve_from_readings(
    readings: &[SieveReading],
) -> Result<GradationCurve, ValidationError> {
    let (sizes, retained): (Vec<f64>, Vec<f64>) = readings
        .iter()
        .map(|r| (r.sieve_size_mm, r.retained_percent))
        .unzip();
    compute_curve(&sizes, &retained)
}

pub(crate) fn compute_curve_with_tolerance(
    sieve_sizes_descending: &[f64],
    retained_percentages: &[f64],
    tolerance: f64,
) -> Result<GradationCurve, ValidationError> {
    if sieve_sizes_descending.len() != retained_percentages.len() {
        return Err(ValidationError::LengthMismatch {
            sizes: sieve_sizes_descending.len(),
            retained: retained_percentages.len(),
        });
    }
    if sieve_sizes_descending.is_empty() {
        return Err(ValidationError::Empty);
    }

    let mut points = Vec::with_capacity(sieve_sizes_descending.len());
    let mut cumulative = 0.0;

    for (index, (&size, &retained)) in sieve_sizes_descending
        .iter()
        .zip(retained_percentages)
        .enumerate()
    {
        check_sieve_size(size)?;
        check_finite("retained percentage", retained)?;

        if index > 0 {
            let previous = sieve_sizes_descending[index - 1];
            if size >= previous {
                return Err(ValidationError::NotDescending {
                    index,
                    previous,
                    current: size,
                });
            }
        }

        if retained < 0.0 {
            return Err(ValidationError::NegativeRetained {
                sieve_mm: size,
                value: retained,
            });
        }

        cumulative += retained;
        if cumulative > 100.0 + tolerance {
            return Err(ValidationError::CumulativeExceeded {
                sieve_mm: size,
                cumulative,
            });
        }

        points.push(GradationPoint {
            sieve_size_mm: size,
            passing_percent: (100.0 - cumulative).clamp(0.0, 100.0),
        });
    }

    tracing::debug!(
        sieves = points.len(),
        finest_passing = points.last().map(|p| p.passing_percent),
        "Computed gradation curve"
    );

    Ok(GradationCurve { points })
}

fn check_sieve_size(size_mm: f64) -> Result<(), ValidationError> {
    check_finite("sieve size", size_mm)?;
    if size_mm <= 0.0 {
        return Err(ValidationError::NonPositiveSieve { size_mm });
    }
    Ok(())
}

pub(crate) fn check_finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}
