use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{ConjunctionEvent, ConjunctionList, SatelliteList, TrackedObject};

/// One refresh worth of catalog data. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub satellites: Vec<TrackedObject>,
    pub conjunctions: Vec<ConjunctionEvent>,
}

// Payloads may be saved straight from the API (envelope) or trimmed to the list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<E, L> {
    Envelope(E),
    Bare(Vec<L>),
}

impl CatalogSnapshot {
    pub fn new(satellites: Vec<TrackedObject>, conjunctions: Vec<ConjunctionEvent>) -> Self {
        Self {
            satellites,
            conjunctions,
        }
    }

    /// Load a snapshot from JSON dumps of the satellite and conjunction lists.
    pub fn load(satellites_path: &Path, conjunctions_path: &Path) -> Result<Self, CatalogError> {
        let satellites = match read_payload::<SatelliteList, TrackedObject>(satellites_path)? {
            Payload::Envelope(list) => list.satellites,
            Payload::Bare(items) => items,
        };
        let conjunctions =
            match read_payload::<ConjunctionList, ConjunctionEvent>(conjunctions_path)? {
                Payload::Envelope(list) => list.conjunctions,
                Payload::Bare(items) => items,
            };

        log::debug!(
            "Loaded {} objects and {} conjunctions",
            satellites.len(),
            conjunctions.len()
        );

        Ok(Self::new(satellites, conjunctions))
    }

    pub fn find(&self, object_id: &str) -> Option<&TrackedObject> {
        self.satellites.iter().find(|s| s.id == object_id)
    }
}

fn read_payload<E, L>(path: &Path) -> Result<Payload<E, L>, CatalogError>
where
    E: DeserializeOwned,
    L: DeserializeOwned,
{
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CatalogError::InvalidPayload {
        file: path.display().to_string(),
        message: e.to_string(),
    })
}
