use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid type selector: {0:?} (expected one of all, helm, docker)")]
    InvalidSelector(String),
}
