use airgap_core::{Artifact, Catalog};

use crate::filters::lookup;
use crate::{QueryState, TypeSelector};

/// Compute the visible artifacts for `state`, in catalog order.
///
/// An artifact is kept when its name contains the search text (case-insensitive),
/// the type selector admits it, and it satisfies at least one active trust filter.
/// Each class is neutral when unset: empty text, `All`, or no active filters.
/// The catalog is rescanned in full on every call.
pub fn evaluate<'a>(catalog: &'a Catalog, state: &QueryState) -> Vec<&'a Artifact> {
    let needle = state.search_text().to_lowercase();
    let results: Vec<&Artifact> = catalog
        .get_all()
        .iter()
        .filter(|a| matches_lowered_text(a, &needle))
        .filter(|a| matches_type(a, state.type_selector()))
        .filter(|a| matches_trust_filters(a, state.active_filter_ids()))
        .collect();
    tracing::trace!(shown = results.len(), total = catalog.count(), "evaluated query");
    results
}

pub fn matches_text(artifact: &Artifact, search_text: &str) -> bool {
    matches_lowered_text(artifact, &search_text.to_lowercase())
}

fn matches_lowered_text(artifact: &Artifact, needle: &str) -> bool {
    needle.is_empty() || artifact.name.to_lowercase().contains(needle)
}

pub fn matches_type(artifact: &Artifact, selector: TypeSelector) -> bool {
    selector.admits(artifact.artifact_type)
}

/// OR across active filters; vacuously true when none are active.
/// Ids missing from the registry never match.
pub fn matches_trust_filters<S: AsRef<str>>(artifact: &Artifact, active: &[S]) -> bool {
    active.is_empty()
        || active
            .iter()
            .filter_map(|id| lookup(id.as_ref()))
            .any(|f| f.matches(artifact))
}
