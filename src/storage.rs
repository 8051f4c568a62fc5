//! Project persistence boundary.
//!
//! The device store itself (a platform key-value blob) lives outside this
//! crate; the contract here is its payload format — a JSON array of
//! [`Project`] records — plus a small trait the screens program against.
//! [`MemoryProjectStore`] backs tests and hosts without platform storage.

use crate::error::StoreError;
use crate::models::Project;

/// Storage abstraction the entry and review screens call through.
///
/// `save` upserts by project id: an existing record is replaced in place,
/// a new one is appended. There is deliberately no delete.
pub trait ProjectStore {
    fn load(&self, id: &str) -> Result<Option<Project>, StoreError>;
    fn save(&mut self, project: Project) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Project>, StoreError>;
}

/// Decode the store payload. An empty payload is an empty project list.
#[uniffi::export]
pub fn projects_from_json(raw: String) -> Result<Vec<Project>, StoreError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let projects: Vec<Project> =
        serde_json::from_str(&raw).map_err(|e| StoreError::MalformedPayload {
            message: e.to_string(),
        })?;
    log::debug!("decoded {} project(s) from store payload", projects.len());
    Ok(projects)
}

/// Encode the full project list as the store payload.
#[uniffi::export]
pub fn projects_to_json(projects: Vec<Project>) -> Result<String, StoreError> {
    serde_json::to_string(&projects).map_err(|e| StoreError::EncodeFailed {
        message: e.to_string(),
    })
}

/// In-memory store, used in tests and as a stand-in until the host app
/// wires up platform storage.
#[derive(Debug, Default)]
pub struct MemoryProjectStore {
    projects: Vec<Project>,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from an existing JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        Ok(MemoryProjectStore {
            projects: projects_from_json(raw.to_string())?,
        })
    }

    /// Serialize the current contents as the store payload.
    pub fn to_json(&self) -> Result<String, StoreError> {
        projects_to_json(self.projects.clone())
    }
}

impl ProjectStore for MemoryProjectStore {
    fn load(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    fn save(&mut self, project: Project) -> Result<(), StoreError> {
        match self.projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => {
                log::debug!("replacing project {}", project.id);
                *existing = project;
            }
            None => {
                log::debug!("appending project {}", project.id);
                self.projects.push(project);
            }
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoPoint, LocationInfo, Sounding, SurveyInfo};
    use crate::schedule::{build_schedule, default_schedule};

    fn sample_project(id_ms: i64) -> Project {
        let mut readings = build_schedule(default_schedule());
        readings[0].resistivity = Some(120.0);
        readings[1].tdip = Some(4.2);

        let mut project = Project::new(
            "Kiambu Borehole",
            LocationInfo {
                village: "Ting'ang'a".to_string(),
                county: "Kiambu".to_string(),
                ..LocationInfo::default()
            },
            SurveyInfo {
                survey_type: "Groundwater".to_string(),
                array_type: "Schlumberger".to_string(),
                operator: "J. Mwangi".to_string(),
            },
            id_ms,
        );
        project.append_sounding(Sounding {
            id: 1,
            timestamp_unix: 1700000100,
            location: Some(GeoPoint {
                latitude: -1.171234,
                longitude: 36.835678,
            }),
            azimuth: Some("45".to_string()),
            description: None,
            readings,
        });
        project
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let original = vec![sample_project(1700000000000)];
        let raw = projects_to_json(original.clone()).unwrap();
        let back = projects_from_json(raw).unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn test_empty_payload_decodes_to_no_projects() {
        assert_eq!(projects_from_json(String::new()).unwrap(), vec![]);
        assert_eq!(projects_from_json("  ".to_string()).unwrap(), vec![]);
        assert_eq!(projects_from_json("[]".to_string()).unwrap(), vec![]);
    }

    #[test]
    fn test_malformed_payload_is_an_error_not_a_panic() {
        let err = projects_from_json("{not json".to_string()).unwrap_err();
        assert!(matches!(err, StoreError::MalformedPayload { .. }));
    }

    #[test]
    fn test_save_upserts_by_id() {
        let mut store = MemoryProjectStore::new();
        let mut project = sample_project(1700000000000);
        store.save(project.clone()).unwrap();
        store.save(sample_project(1700000099999)).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        // Saving the same id again replaces, not duplicates.
        project.name = "Kiambu Borehole (revised)".to_string();
        store.save(project.clone()).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(
            store.load(&project.id).unwrap().unwrap().name,
            "Kiambu Borehole (revised)"
        );
    }

    #[test]
    fn test_load_missing_is_none() {
        let store = MemoryProjectStore::new();
        assert_eq!(store.load("12345").unwrap(), None);
    }

    #[test]
    fn test_store_json_round_trip() {
        let mut store = MemoryProjectStore::new();
        store.save(sample_project(1700000000000)).unwrap();
        let raw = store.to_json().unwrap();
        let restored = MemoryProjectStore::from_json(&raw).unwrap();
        assert_eq!(restored.list().unwrap(), store.list().unwrap());
    }
}
