use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("malformed catalog snapshot: {0}")]
    Malformed(String),
    #[error("artifact #{index}: field '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate artifact id: {0}")]
    DuplicateId(String),
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(e: serde_json::Error) -> Self {
        CatalogLoadError::Malformed(e.to_string())
    }
}
