use std::fmt;

use serde::{Deserialize, Serialize};

use super::Vulnerabilities;

/// Packaging format of a deployable artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Helm,
    Docker,
}

impl ArtifactType {
    pub const ALL: [ArtifactType; 2] = [ArtifactType::Helm, ArtifactType::Docker];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactType::Helm => "helm",
            ArtifactType::Docker => "docker",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureState {
    Unverified,
    Verified,
    Failed,
}

impl SignatureState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureState::Unverified => "unverified",
            SignatureState::Verified => "verified",
            SignatureState::Failed => "failed",
        }
    }
}

impl fmt::Display for SignatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A deployable artifact and its already-computed trust posture.
///
/// Artifacts are never edited in place; a re-sync replaces the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub size: String,
    #[serde(alias = "sha256")]
    pub digest: String,
    pub signature_state: SignatureState,
    pub sbom_presence: bool,
    pub provenance_presence: bool,
    pub last_updated: String,
    pub vulnerabilities: Vulnerabilities,
    /// Tracked separately from `signature_state`; the two can disagree.
    pub cosign_verified: bool,
}
