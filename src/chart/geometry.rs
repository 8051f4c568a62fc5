//! Projection of values and series into the plotting surface.

use serde::{Deserialize, Serialize};

use crate::chart::domain::Domain;
use crate::chart::{ChartPoint, Frame};

/// One polyline segment between consecutive series points, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Marker glyph position for one data point, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
}

/// Log-linear interpolation of `value` into `[pixel_min, pixel_max]`.
///
/// Precondition: `value > 0` and a positive, non-degenerate domain. The
/// domain computation's flooring at 0.1 is what guarantees this in practice;
/// this function must never be handed a non-positive number to log.
pub fn scale(value: f64, domain: &Domain, pixel_min: f64, pixel_max: f64) -> f64 {
    debug_assert!(value > 0.0 && domain.min > 0.0 && domain.max > domain.min);
    let t = (value.log10() - domain.min.log10()) / domain.log_span();
    pixel_min + t * (pixel_max - pixel_min)
}

/// As [`scale`], flip-oriented: larger values plot upward (smaller pixel y).
pub fn scale_flipped(value: f64, domain: &Domain, pixel_min: f64, pixel_max: f64) -> f64 {
    debug_assert!(value > 0.0 && domain.min > 0.0 && domain.max > domain.min);
    let t = (value.log10() - domain.min.log10()) / domain.log_span();
    pixel_max - t * (pixel_max - pixel_min)
}

/// Project a series into segments and point markers.
///
/// One segment per consecutive pair in series order — the caller-supplied
/// order is authoritative, matching the schedule, not sorted by x. A series
/// of length 1 yields no segments but still gets its marker.
pub fn build_polyline(
    series: &[ChartPoint],
    x_domain: &Domain,
    y_domain: &Domain,
    frame: &Frame,
) -> (Vec<Segment>, Vec<Marker>) {
    let project = |point: &ChartPoint| -> (f64, f64) {
        (
            scale(point.x, x_domain, frame.plot_left(), frame.plot_right()),
            scale_flipped(point.y, y_domain, frame.plot_top(), frame.plot_bottom()),
        )
    };

    let markers: Vec<Marker> = series
        .iter()
        .map(|p| {
            let (x, y) = project(p);
            Marker { x, y }
        })
        .collect();

    let segments: Vec<Segment> = series
        .windows(2)
        .map(|pair| {
            let (x1, y1) = project(&pair[0]);
            let (x2, y2) = project(&pair[1]);
            Segment { x1, y1, x2, y2 }
        })
        .collect();

    (segments, markers)
}
