use std::fmt;
use std::sync::Arc;

use airgap_core::{Artifact, Catalog, CatalogLoadError};

use crate::evaluator::evaluate;
use crate::QueryState;

/// Counts for the "N of M" summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} artifacts", self.shown, self.total)
    }
}

/// One user's view over a catalog: the catalog reference plus the query state.
///
/// The catalog is only ever swapped as a whole, never edited in place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: Arc<Catalog>,
    state: QueryState,
}

impl Session {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: QueryState::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut QueryState {
        &mut self.state
    }

    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        tracing::debug!(
            previous = self.catalog.count(),
            next = catalog.count(),
            "replacing catalog"
        );
        self.catalog = catalog;
    }

    /// Load a JSON snapshot and swap it in. The current catalog stays on failure.
    pub fn sync_catalog(&mut self, json: &str) -> Result<(), CatalogLoadError> {
        let catalog = Catalog::from_json(json)?;
        self.replace_catalog(Arc::new(catalog));
        Ok(())
    }

    pub fn evaluate(&self) -> Vec<&Artifact> {
        evaluate(&self.catalog, &self.state)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            shown: self.evaluate().len(),
            total: self.catalog.count(),
        }
    }
}
