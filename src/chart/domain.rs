//! Axis domain computation for the log-log layout.

use serde::{Deserialize, Serialize};

/// Hard floor applied to domain bounds so `log10` stays finite for values
/// approaching zero.
const DOMAIN_FLOOR: f64 = 0.1;

/// Inclusive value range of one logarithmic axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Domain for the AB/2 axis: the data range padded by 10% on both sides,
    /// floored at 0.1.
    ///
    /// Precondition: `values` is non-empty. Callers short-circuit empty
    /// series to a placeholder state before asking for layout.
    pub fn x_axis(values: &[f64]) -> Domain {
        debug_assert!(!values.is_empty());
        let (lo, hi) = spread(values);
        Domain {
            min: (lo * 0.9).max(DOMAIN_FLOOR),
            max: hi * 1.1,
        }
    }

    /// Domain for the measurement axis.
    ///
    /// The data range is floored at 0.1, then widened: a single-valued series
    /// becomes 0.5x..1.5x, otherwise 20% padding is applied. If the result
    /// still spans less than one decade it is recentered on the geometric
    /// mean as mid/2..mid*2, so the tick generator always has room to work.
    ///
    /// Precondition: `values` is non-empty.
    pub fn y_axis(values: &[f64]) -> Domain {
        debug_assert!(!values.is_empty());
        let (lo, hi) = spread(values);
        let mut min = lo.max(DOMAIN_FLOOR);
        let mut max = hi.max(DOMAIN_FLOOR);

        if min == max {
            min *= 0.5;
            max *= 1.5;
        } else {
            min *= 0.8;
            max *= 1.2;
        }

        if max.log10() - min.log10() < 1.0 {
            let mid = (min * max).sqrt();
            min = mid / 2.0;
            max = mid * 2.0;
        }

        Domain { min, max }
    }

    /// Width of the domain in decades.
    pub fn log_span(&self) -> f64 {
        self.max.log10() - self.min.log10()
    }
}

fn spread(values: &[f64]) -> (f64, f64) {
    values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    })
}
