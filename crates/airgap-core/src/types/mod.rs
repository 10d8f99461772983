mod artifact;
mod vulnerability;

pub use artifact::{Artifact, ArtifactType, SignatureState};
pub use vulnerability::Vulnerabilities;
