use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::Artifact;
use crate::CatalogLoadError;

/// Full replacement snapshot delivered by the ingestion side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub artifacts: Vec<Artifact>,
}

/// The authoritative, ordered set of artifacts for a session.
///
/// A catalog is immutable once built. Re-syncing produces a new `Catalog`
/// rather than editing this one, so readers never see a half-applied update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    artifacts: Vec<Artifact>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from a snapshot, checking it is structurally sound.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogLoadError> {
        if let Err(e) = validate(&snapshot.artifacts) {
            tracing::warn!("rejected catalog snapshot: {}", e);
            return Err(e);
        }
        tracing::debug!(count = snapshot.artifacts.len(), "catalog snapshot loaded");
        Ok(Self {
            artifacts: snapshot.artifacts,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json).map_err(|e| {
            tracing::warn!("unparseable catalog snapshot: {}", e);
            CatalogLoadError::from(e)
        })?;
        Self::from_snapshot(snapshot)
    }

    /// All artifacts, in snapshot order.
    pub fn get_all(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.id == id)
    }
}

fn validate(artifacts: &[Artifact]) -> Result<(), CatalogLoadError> {
    let mut seen = HashSet::new();
    for (index, artifact) in artifacts.iter().enumerate() {
        let required = [
            ("id", &artifact.id),
            ("name", &artifact.name),
            ("version", &artifact.version),
            ("digest", &artifact.digest),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(CatalogLoadError::EmptyField { index, field });
            }
        }
        if !seen.insert(artifact.id.as_str()) {
            return Err(CatalogLoadError::DuplicateId(artifact.id.clone()));
        }
    }
    Ok(())
}
