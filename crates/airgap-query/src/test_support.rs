use airgap_core::{Artifact, ArtifactType, SignatureState, Vulnerabilities};

/// A clean docker artifact with no trust attributes set.
pub fn artifact(id: &str, name: &str) -> Artifact {
    Artifact {
        id: id.to_string(),
        name: name.to_string(),
        version: "1.0.0".to_string(),
        artifact_type: ArtifactType::Docker,
        size: "64 MB".to_string(),
        digest: "cd2662154e6d76b2".to_string(),
        signature_state: SignatureState::Unverified,
        sbom_presence: false,
        provenance_presence: false,
        last_updated: "just now".to_string(),
        vulnerabilities: Vulnerabilities::default(),
        cosign_verified: false,
    }
}
