//! Spreadsheet export: workbook construction for a survey project.
//!
//! Builds the cell grid of the export workbook — one project-info sheet plus
//! one sheet per sounding. Serializing the grid to actual XLSX bytes is the
//! host platform's job; this module only decides content and order. Row
//! order within a sounding sheet is the schedule's station order, which is
//! the one hard compatibility constraint with downstream interpretation
//! tools.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{GeoPoint, Project, Sounding};

/// Shown where optional sounding metadata was never entered.
const NOT_SPECIFIED: &str = "Not specified";

/// Shown where no geolocation was captured at save time.
const NOT_CAPTURED: &str = "Not captured";

/// Measurement table header, in column order.
const TABLE_HEADER: [&str; 5] = ["AB/2 (m)", "MN/2 (m)", "K", "Resistivity (Ω·m)", "TDIP"];

/// One spreadsheet cell. Absent numerics export as `Empty` — a blank cell,
/// never the text "NaN".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    Empty,
    Text { value: String },
    Number { value: f64 },
}

impl Cell {
    fn text(value: impl Into<String>) -> Cell {
        Cell::Text {
            value: value.into(),
        }
    }

    fn number(value: f64) -> Cell {
        Cell::Number { value }
    }

    fn opt_number(value: Option<f64>) -> Cell {
        value.map_or(Cell::Empty, Cell::number)
    }
}

/// One sheet: a name and a dense row-major cell grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

/// The full export workbook.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

/// Build the export workbook for a project: a "Project Info" sheet followed
/// by one `VES{id}` sheet per sounding, in saved order.
#[uniffi::export]
pub fn build_workbook(project: Project) -> Workbook {
    let mut sheets = Vec::with_capacity(project.soundings.len() + 1);
    sheets.push(project_info_sheet(&project));
    for sounding in &project.soundings {
        sheets.push(sounding_sheet(sounding));
    }
    Workbook { sheets }
}

/// Export file name: project name with whitespace collapsed to underscores,
/// plus a sortable UTC timestamp.
#[uniffi::export]
pub fn export_file_name(project_name: String, now_unix: i64) -> String {
    let stamp = DateTime::<Utc>::from_timestamp(now_unix, 0)
        .map(|t| t.format("%Y-%m-%dT%H-%M-%SZ").to_string())
        .unwrap_or_else(|| now_unix.to_string());
    let name: String = project_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{name}_VES_Data_{stamp}.xlsx")
}

fn project_info_sheet(project: &Project) -> Sheet {
    let created = project
        .created_unix_ms()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|t| t.format("%b %-d, %Y %I:%M %p").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let loc = &project.location_info;
    let survey = &project.survey_info;
    let rows = vec![
        vec![Cell::text("Project Details")],
        vec![],
        vec![Cell::text("Project Name"), Cell::text(&project.name)],
        vec![Cell::text("Created"), Cell::text(created)],
        vec![Cell::text("Village"), Cell::text(&loc.village)],
        vec![Cell::text("Sublocation"), Cell::text(&loc.sublocation)],
        vec![Cell::text("Location"), Cell::text(&loc.location)],
        vec![Cell::text("Ward"), Cell::text(&loc.ward)],
        vec![Cell::text("Sub-County"), Cell::text(&loc.sub_county)],
        vec![Cell::text("County"), Cell::text(&loc.county)],
        vec![Cell::text("Survey Type"), Cell::text(&survey.survey_type)],
        vec![Cell::text("Array Type"), Cell::text(&survey.array_type)],
        vec![Cell::text("Operator"), Cell::text(&survey.operator)],
    ];

    Sheet {
        name: "Project Info".to_string(),
        rows,
    }
}

fn sounding_sheet(sounding: &Sounding) -> Sheet {
    let when = DateTime::<Utc>::from_timestamp(sounding.timestamp_unix, 0);
    let date = when
        .map(|t| t.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let time = when
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let or_not_specified =
        |field: &Option<String>| field.clone().unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut rows = vec![
        vec![Cell::text(format!("VES Point: VES{}", sounding.id))],
        vec![Cell::text("Date"), Cell::text(date)],
        vec![Cell::text("Time"), Cell::text(time)],
        vec![
            Cell::text("Location"),
            Cell::text(format_location(sounding.location)),
        ],
        vec![
            Cell::text("Azimuth (Degree)"),
            Cell::text(or_not_specified(&sounding.azimuth)),
        ],
        vec![
            Cell::text("Description"),
            Cell::text(or_not_specified(&sounding.description)),
        ],
        vec![],
        TABLE_HEADER.iter().map(|h| Cell::text(*h)).collect(),
    ];

    // Measurement rows in schedule order.
    for station in &sounding.readings {
        rows.push(vec![
            Cell::number(station.ab2),
            Cell::number(station.mn2),
            // K displays at two decimals, matching the entry table.
            Cell::opt_number(station.k.map(|k| (k * 100.0).round() / 100.0)),
            Cell::opt_number(station.resistivity),
            Cell::opt_number(station.tdip),
        ]);
    }

    Sheet {
        name: format!("VES{}", sounding.id),
        rows,
    }
}

fn format_location(location: Option<GeoPoint>) -> String {
    match location {
        Some(point) => format!("{:.6}, {:.6}", point.latitude, point.longitude),
        None => NOT_CAPTURED.to_string(),
    }
}
