//! Sounding schedule and Schlumberger geometric-factor model.
//!
//! Produces the canonical, ordered station list for a new sounding and
//! computes each station's geometric factor K. The schedule is a fixed
//! constant of the domain, expressed as contiguous groups of AB/2 values
//! sharing one MN/2 spacing; adjacent groups repeat their boundary AB/2
//! value so operators can check continuity between segments.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::models::Station;

// ============================================================================
// Canonical Schlumberger schedule
// ============================================================================

/// AB/2 values (m) measured with MN/2 = 0.5 m.
const AB2_MN05: [f64; 11] = [1.6, 2.0, 2.5, 3.2, 4.0, 5.0, 6.3, 8.0, 10.0, 13.0, 16.0];

/// AB/2 values (m) measured with MN/2 = 5 m.
const AB2_MN5: [f64; 4] = [16.0, 20.0, 25.0, 32.0];

/// AB/2 values (m) measured with MN/2 = 10 m.
const AB2_MN10: [f64; 5] = [32.0, 40.0, 50.0, 63.0, 80.0];

/// AB/2 values (m) measured with MN/2 = 25 m.
const AB2_MN25: [f64; 7] = [80.0, 100.0, 130.0, 160.0, 200.0, 250.0, 320.0];

/// One contiguous segment of the schedule: every AB/2 value measured at a
/// single potential-electrode spacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGroup {
    /// MN/2 spacing (m) shared by this segment.
    pub mn2: f64,
    /// AB/2 stations (m) in measurement order.
    pub ab2_values: Vec<f64>,
}

/// The full electrode-spacing schedule for one sounding, in traversal order.
///
/// Owned configuration rather than scattered constants: a deployment that
/// standardizes on a different spread swaps the config, not the code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub groups: Vec<ScheduleGroup>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            groups: vec![
                ScheduleGroup {
                    mn2: 0.5,
                    ab2_values: AB2_MN05.to_vec(),
                },
                ScheduleGroup {
                    mn2: 5.0,
                    ab2_values: AB2_MN5.to_vec(),
                },
                ScheduleGroup {
                    mn2: 10.0,
                    ab2_values: AB2_MN10.to_vec(),
                },
                ScheduleGroup {
                    mn2: 25.0,
                    ab2_values: AB2_MN25.to_vec(),
                },
            ],
        }
    }
}

impl ScheduleConfig {
    /// Total number of stations across all groups.
    pub fn station_count(&self) -> usize {
        self.groups.iter().map(|g| g.ab2_values.len()).sum()
    }
}

/// The canonical Schlumberger schedule (27 stations, MN/2 of 0.5/5/10/25 m).
#[uniffi::export]
pub fn default_schedule() -> ScheduleConfig {
    ScheduleConfig::default()
}

/// Flatten a schedule into the ordered station list for a new sounding.
///
/// Group traversal order and per-group AB/2 order are preserved exactly as
/// declared; this order drives the entry form and the exported sheet rows.
/// Each station carries a freshly computed K and empty readings.
#[uniffi::export]
pub fn build_schedule(config: ScheduleConfig) -> Vec<Station> {
    config
        .groups
        .iter()
        .flat_map(|group| {
            group.ab2_values.iter().map(|&ab2| Station {
                ab2,
                mn2: group.mn2,
                k: compute_k(ab2, group.mn2),
                resistivity: None,
                tdip: None,
            })
        })
        .collect()
}

/// Schlumberger geometric factor `K = π(AB/2² − MN/2²) / (2·MN/2)`.
///
/// Returns `None` for degenerate or physically invalid geometry: a
/// non-positive or non-finite spacing, or AB/2² ≤ MN/2². An invalid K must
/// never silently present a value to the operator, so there is no zero or
/// NaN fallback.
#[uniffi::export]
pub fn compute_k(ab2: f64, mn2: f64) -> Option<f64> {
    if !ab2.is_finite() || !mn2.is_finite() || mn2 <= 0.0 {
        return None;
    }
    let numerator = ab2 * ab2 - mn2 * mn2;
    if numerator <= 0.0 {
        return None;
    }
    Some(PI * numerator / (2.0 * mn2))
}

/// Parse a raw text-field entry into a reading.
///
/// The single string-to-number edge of the model: empty or non-numeric input
/// maps to an absent reading rather than an error, and NaN/infinite values
/// are rejected so they never reach the layout engine.
#[uniffi::export]
pub fn parse_reading(raw: String) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}
