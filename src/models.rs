use serde::{Deserialize, Serialize};

/// Measurement channel of a sounding curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, uniffi::Enum)]
pub enum Channel {
    Resistivity,
    Tdip,
}

/// One scheduled measurement position within a sounding.
///
/// `ab2`, `mn2` and `k` are fixed once the schedule is generated; only the
/// entered readings mutate during data entry. An absent `k` means the
/// geometry is degenerate and must render as a blank cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Half the current-electrode spacing AB/2, in meters.
    pub ab2: f64,
    /// Half the potential-electrode spacing MN/2, in meters.
    pub mn2: f64,
    /// Schlumberger geometric factor; absent for degenerate geometry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    /// Apparent resistivity reading in ohm-meters; absent until measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistivity: Option<f64>,
    /// Time-domain induced-polarization reading; absent until measured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdip: Option<f64>,
}

impl Station {
    /// Reading for the given channel, if entered.
    pub fn reading(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::Resistivity => self.resistivity,
            Channel::Tdip => self.tdip,
        }
    }

    /// Whether any measurement has been entered at this station.
    pub fn has_data(&self) -> bool {
        self.resistivity.is_some() || self.tdip.is_some()
    }
}

/// Geographic position captured when a sounding is saved.
///
/// Absence is a valid, displayable state ("Not captured"), never an error.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// One completed or in-progress VES point: the full station schedule with
/// whatever values were entered at save time. Append-only once saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Sounding {
    /// Sequential index within the project (1, 2, 3, ...).
    pub id: u32,
    /// Save time as Unix timestamp (seconds).
    pub timestamp_unix: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub readings: Vec<Station>,
}

impl Sounding {
    /// Whether any station in this sounding carries a measurement.
    pub fn has_data(&self) -> bool {
        self.readings.iter().any(Station::has_data)
    }
}

/// Administrative location of a survey project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct LocationInfo {
    pub village: String,
    pub sublocation: String,
    pub location: String,
    pub ward: String,
    pub sub_county: String,
    pub county: String,
}

/// Survey configuration captured at project setup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct SurveyInfo {
    pub survey_type: String,
    pub array_type: String,
    pub operator: String,
}

/// A named survey: an ordered sequence of soundings plus metadata.
///
/// Identified by a creation-time-derived id (Unix milliseconds as a string).
/// The lifecycle is create, append soundings, read; there is no delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub location_info: LocationInfo,
    pub survey_info: SurveyInfo,
    pub soundings: Vec<Sounding>,
}

impl Project {
    /// Create an empty project. `created_unix_ms` becomes the project id.
    pub fn new(
        name: impl Into<String>,
        location_info: LocationInfo,
        survey_info: SurveyInfo,
        created_unix_ms: i64,
    ) -> Self {
        Project {
            id: created_unix_ms.to_string(),
            name: name.into(),
            location_info,
            survey_info,
            soundings: Vec::new(),
        }
    }

    /// Creation time in Unix milliseconds, if the id parses back.
    pub fn created_unix_ms(&self) -> Option<i64> {
        self.id.parse().ok()
    }

    /// Id for the next sounding: one past the highest saved id, starting at 1.
    pub fn next_sounding_id(&self) -> u32 {
        self.soundings.iter().map(|s| s.id).max().map_or(1, |m| m + 1)
    }

    pub fn append_sounding(&mut self, sounding: Sounding) {
        self.soundings.push(sounding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(ab2: f64, resistivity: Option<f64>) -> Station {
        Station {
            ab2,
            mn2: 0.5,
            k: Some(1.0),
            resistivity,
            tdip: None,
        }
    }

    #[test]
    fn test_next_sounding_id() {
        let mut project = Project::new(
            "Borehole A",
            LocationInfo::default(),
            SurveyInfo::default(),
            1700000000000,
        );
        assert_eq!(project.next_sounding_id(), 1);

        project.append_sounding(Sounding {
            id: 3,
            timestamp_unix: 1700000100,
            location: None,
            azimuth: None,
            description: None,
            readings: vec![],
        });
        assert_eq!(project.next_sounding_id(), 4);
    }

    #[test]
    fn test_created_unix_ms_round_trips_through_id() {
        let project = Project::new(
            "P",
            LocationInfo::default(),
            SurveyInfo::default(),
            1723456789012,
        );
        assert_eq!(project.id, "1723456789012");
        assert_eq!(project.created_unix_ms(), Some(1723456789012));
    }

    #[test]
    fn test_sounding_has_data() {
        let empty = Sounding {
            id: 1,
            timestamp_unix: 0,
            location: None,
            azimuth: None,
            description: None,
            readings: vec![station(1.6, None), station(2.0, None)],
        };
        assert!(!empty.has_data());

        let measured = Sounding {
            readings: vec![station(1.6, Some(120.0)), station(2.0, None)],
            ..empty
        };
        assert!(measured.has_data());
    }

    #[test]
    fn test_absent_k_serializes_as_omitted_field() {
        let s = Station {
            ab2: 1.6,
            mn2: 2.0,
            k: None,
            resistivity: None,
            tdip: None,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"ab2":1.6,"mn2":2.0}"#);

        let back: Station = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
