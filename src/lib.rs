//! Stateless compute core for vertical electrical sounding (VES) surveys.
//!
//! Field screens feed raw entries in and render geometry out: the schedule
//! model produces the station list with precomputed geometric factors, the
//! chart module lays out log-log sounding curves, and the storage and export
//! modules define the JSON store payload and spreadsheet grid the host app
//! persists and shares. No UI, no I/O, no shared state.

pub mod chart;
pub mod error;
pub mod export;
pub mod models;
pub mod schedule;
pub mod storage;

uniffi::setup_scaffolding!();

pub use chart::{
    chart_series, compute_layout, generate_axis_labels, AxisLabel, ChartLayout, ChartPoint,
    Domain, Frame, Marker, Segment, Tick,
};
pub use error::StoreError;
pub use export::{build_workbook, export_file_name, Cell, Sheet, Workbook};
pub use models::{
    Channel, GeoPoint, LocationInfo, Project, Sounding, Station, SurveyInfo,
};
pub use schedule::{
    build_schedule, compute_k, default_schedule, parse_reading, ScheduleConfig, ScheduleGroup,
};
pub use storage::{projects_from_json, projects_to_json, MemoryProjectStore, ProjectStore};
