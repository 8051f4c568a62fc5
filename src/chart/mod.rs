//! Log-log chart layout engine for sounding curves.
//!
//! Transforms a sparse series of (AB/2, measurement) pairs into renderable
//! geometry: axis domains, positioned gridline labels with a major/minor
//! distinction, and the polyline segments and point markers of the curve.
//! Everything here is pure call-and-return — no storage, no I/O — so the
//! surrounding screens can regenerate a chart on every keystroke.
//!
//! # Example
//!
//! ```
//! use ves_compute::chart::{chart_series, compute_layout, Frame};
//! use ves_compute::models::Channel;
//! use ves_compute::schedule::{build_schedule, default_schedule};
//!
//! let mut stations = build_schedule(default_schedule());
//! stations[0].resistivity = Some(120.0);
//! stations[1].resistivity = Some(95.0);
//!
//! let series = chart_series(stations, Channel::Resistivity);
//! assert_eq!(series.len(), 2);
//!
//! let frame = Frame { width: 320.0, height: 300.0, padding: 40.0 };
//! let layout = compute_layout(series, frame).expect("non-empty series");
//! assert_eq!(layout.segments.len(), 1);
//! assert_eq!(layout.markers.len(), 2);
//! ```

pub mod domain;
pub mod geometry;
pub mod ticks;

pub use domain::Domain;
pub use geometry::{build_polyline, scale, scale_flipped, Marker, Segment};
pub use ticks::{generate_axis_labels, AxisLabel};

use serde::{Deserialize, Serialize};

use crate::models::{Channel, Station};

/// One plottable data point: x is AB/2 in meters, y the channel reading.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Pixel dimensions of the plotting surface. The padding band on each side
/// holds axis labels; the curve draws inside it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Frame {
    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.padding
    }
}

/// An axis label with its projected pixel position. Callers use `is_major`
/// to pick the dash style and whether to draw the numeric text.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    pub value: f64,
    pub position: f64,
    pub is_major: bool,
}

/// Complete render geometry for one chart pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub x_domain: Domain,
    pub y_domain: Domain,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub segments: Vec<Segment>,
    pub markers: Vec<Marker>,
}

/// Extract the plottable series for one channel from a station list.
///
/// Stations without a reading on the channel are skipped — absent is not
/// zero. Non-positive values cannot be projected on a log axis and are
/// skipped as well. Order follows the input (schedule) order.
#[uniffi::export]
pub fn chart_series(readings: Vec<Station>, channel: Channel) -> Vec<ChartPoint> {
    readings
        .iter()
        .filter_map(|station| {
            let y = station.reading(channel)?;
            (station.ab2 > 0.0 && y > 0.0).then_some(ChartPoint { x: station.ab2, y })
        })
        .collect()
}

/// Compute the full layout for a series within a frame.
///
/// Returns `None` for an empty series; the caller renders its "no data"
/// placeholder instead. Pure and reentrant — safe to call per keystroke.
#[uniffi::export]
pub fn compute_layout(series: Vec<ChartPoint>, frame: Frame) -> Option<ChartLayout> {
    if series.is_empty() {
        return None;
    }

    let xs: Vec<f64> = series.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = series.iter().map(|p| p.y).collect();
    let x_domain = Domain::x_axis(&xs);
    let y_domain = Domain::y_axis(&ys);

    let x_ticks = generate_axis_labels(x_domain.min, x_domain.max)
        .into_iter()
        .map(|label| Tick {
            value: label.value,
            position: scale(label.value, &x_domain, frame.plot_left(), frame.plot_right()),
            is_major: label.is_major,
        })
        .collect();

    let y_ticks = generate_axis_labels(y_domain.min, y_domain.max)
        .into_iter()
        .map(|label| Tick {
            value: label.value,
            position: scale_flipped(label.value, &y_domain, frame.plot_top(), frame.plot_bottom()),
            is_major: label.is_major,
        })
        .collect();

    let (segments, markers) = build_polyline(&series, &x_domain, &y_domain, &frame);

    Some(ChartLayout {
        x_domain,
        y_domain,
        x_ticks,
        y_ticks,
        segments,
        markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(ab2: f64, resistivity: Option<f64>, tdip: Option<f64>) -> Station {
        Station {
            ab2,
            mn2: 0.5,
            k: None,
            resistivity,
            tdip,
        }
    }

    fn frame() -> Frame {
        Frame {
            width: 320.0,
            height: 300.0,
            padding: 40.0,
        }
    }

    #[test]
    fn test_chart_series_skips_absent_readings() {
        let readings = vec![
            station(1.6, Some(120.0), None),
            station(2.0, None, Some(4.2)),
            station(2.5, Some(98.0), Some(3.9)),
        ];

        let resistivity = chart_series(readings.clone(), Channel::Resistivity);
        assert_eq!(
            resistivity,
            vec![
                ChartPoint { x: 1.6, y: 120.0 },
                ChartPoint { x: 2.5, y: 98.0 }
            ]
        );

        let tdip = chart_series(readings, Channel::Tdip);
        assert_eq!(
            tdip,
            vec![ChartPoint { x: 2.0, y: 4.2 }, ChartPoint { x: 2.5, y: 3.9 }]
        );
    }

    #[test]
    fn test_chart_series_skips_unplottable_values() {
        let readings = vec![
            station(1.6, Some(0.0), None),
            station(2.0, Some(-5.0), None),
            station(2.5, Some(42.0), None),
        ];
        let series = chart_series(readings, Channel::Resistivity);
        assert_eq!(series, vec![ChartPoint { x: 2.5, y: 42.0 }]);
    }

    #[test]
    fn test_compute_layout_empty_series() {
        assert_eq!(compute_layout(vec![], frame()), None);
    }

    #[test]
    fn test_compute_layout_single_point() {
        let layout = compute_layout(vec![ChartPoint { x: 5.0, y: 5.0 }], frame()).unwrap();
        assert!(layout.segments.is_empty());
        assert_eq!(layout.markers.len(), 1);
        assert!(!layout.y_ticks.is_empty());

        // The lone point projects strictly inside the plot area.
        let marker = layout.markers[0];
        let f = frame();
        assert!(marker.x > f.plot_left() && marker.x < f.plot_right());
        assert!(marker.y > f.plot_top() && marker.y < f.plot_bottom());
    }

    #[test]
    fn test_compute_layout_tick_positions_inside_frame() {
        let series = vec![
            ChartPoint { x: 1.6, y: 120.0 },
            ChartPoint { x: 16.0, y: 80.0 },
            ChartPoint { x: 320.0, y: 640.0 },
        ];
        let f = frame();
        let layout = compute_layout(series, f).unwrap();

        assert!(!layout.x_ticks.is_empty());
        for tick in layout.x_ticks.iter() {
            assert!(tick.position >= f.plot_left() - 1e-9);
            assert!(tick.position <= f.plot_right() + 1e-9);
        }
        for tick in layout.y_ticks.iter() {
            assert!(tick.position >= f.plot_top() - 1e-9);
            assert!(tick.position <= f.plot_bottom() + 1e-9);
        }
        assert!(layout.x_ticks.len() <= 8);
        assert!(layout.y_ticks.len() <= 8);
    }
}
