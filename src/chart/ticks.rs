//! Gridline and axis-label generation for logarithmic axes.

use serde::{Deserialize, Serialize};

/// Display cap on labels per axis.
const MAX_LABELS: usize = 8;

/// Widest span, in decades, that still receives intra-decade minor labels.
/// Beyond this the minors only add clutter.
const MINOR_LABEL_MAX_DECADES: i32 = 2;

/// Intra-decade multipliers for minor gridlines.
const MINOR_MULTIPLIERS: [f64; 8] = [2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

/// One axis label. Major labels sit on decade marks and get numeric text;
/// minor gridlines are typically drawn undecorated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    pub value: f64,
    pub is_major: bool,
}

/// Generate axis labels for a log axis over `[min, max]`.
///
/// Major labels are every power of ten inside the domain. When the domain
/// spans no more than [`MINOR_LABEL_MAX_DECADES`] decades, multiples
/// 2..9 of each decade strictly inside `(min, max)` are added as minors.
/// The result is sorted ascending; when it exceeds [`MAX_LABELS`] it is
/// decimated by keeping every k-th entry, which preserves coverage across
/// the full range instead of truncating one end.
///
/// Precondition: `0 < min <= max` (domain computation guarantees this).
#[uniffi::export]
pub fn generate_axis_labels(min: f64, max: f64) -> Vec<AxisLabel> {
    debug_assert!(min > 0.0 && min <= max);

    let min_exp = min.log10().floor() as i32;
    let max_exp = max.log10().ceil() as i32;

    let mut labels = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10f64.powi(exp);
        if decade >= min && decade <= max {
            labels.push(AxisLabel {
                value: decade,
                is_major: true,
            });
        }
    }

    if max_exp - min_exp <= MINOR_LABEL_MAX_DECADES {
        for exp in min_exp..=max_exp {
            let base = 10f64.powi(exp);
            for multiplier in MINOR_MULTIPLIERS {
                let value = base * multiplier;
                if value > min && value < max {
                    labels.push(AxisLabel {
                        value,
                        is_major: false,
                    });
                }
            }
        }
    }

    labels.sort_by(|a, b| a.value.total_cmp(&b.value));

    if labels.len() > MAX_LABELS {
        let step = labels.len().div_ceil(MAX_LABELS);
        labels = labels
            .into_iter()
            .enumerate()
            .filter(|(i, _)| i % step == 0)
            .map(|(_, label)| label)
            .collect();
    }

    labels
}
