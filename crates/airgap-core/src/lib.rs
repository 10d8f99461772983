pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogSnapshot};
pub use error::CatalogLoadError;
pub use types::{Artifact, ArtifactType, SignatureState, Vulnerabilities};
