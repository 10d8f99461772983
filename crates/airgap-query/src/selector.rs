use std::fmt;
use std::str::FromStr;

use airgap_core::ArtifactType;

use crate::QueryError;

/// Restricts results to one artifact type, or lets every type through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    #[default]
    All,
    Only(ArtifactType),
}

impl TypeSelector {
    /// Every selector in display order, `All` first.
    pub fn choices() -> Vec<TypeSelector> {
        std::iter::once(TypeSelector::All)
            .chain(ArtifactType::ALL.into_iter().map(TypeSelector::Only))
            .collect()
    }

    pub fn admits(&self, artifact_type: ArtifactType) -> bool {
        match self {
            TypeSelector::All => true,
            TypeSelector::Only(t) => *t == artifact_type,
        }
    }
}

impl FromStr for TypeSelector {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(TypeSelector::All);
        }
        ArtifactType::parse(s)
            .map(TypeSelector::Only)
            .ok_or_else(|| QueryError::InvalidSelector(s.to_string()))
    }
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSelector::All => f.write_str("all"),
            TypeSelector::Only(t) => write!(f, "{t}"),
        }
    }
}
