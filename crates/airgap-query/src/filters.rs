use std::fmt;

use airgap_core::Artifact;

/// A named trust predicate the user can toggle on and off.
#[derive(Clone, Copy)]
pub struct FilterCriterion {
    pub id: &'static str,
    pub label: &'static str,
    pub predicate: fn(&Artifact) -> bool,
}

impl FilterCriterion {
    pub fn matches(&self, artifact: &Artifact) -> bool {
        (self.predicate)(artifact)
    }
}

impl fmt::Debug for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCriterion")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Every trust filter, in display order. Ids are unique.
pub static FILTER_REGISTRY: [FilterCriterion; 4] = [
    FilterCriterion {
        id: "has-cves",
        label: "Has Vulnerabilities",
        predicate: has_cves,
    },
    FilterCriterion {
        id: "verified-only",
        label: "Verified Only",
        predicate: verified_only,
    },
    FilterCriterion {
        id: "has-sbom",
        label: "Has SBOM",
        predicate: has_sbom,
    },
    FilterCriterion {
        id: "has-provenance",
        label: "Has Provenance",
        predicate: has_provenance,
    },
];

pub fn registry() -> &'static [FilterCriterion] {
    &FILTER_REGISTRY
}

pub fn lookup(id: &str) -> Option<&'static FilterCriterion> {
    FILTER_REGISTRY.iter().find(|f| f.id == id)
}

fn has_cves(artifact: &Artifact) -> bool {
    artifact.vulnerabilities.has_high_or_critical()
}

// Keyed on the cosign flag, not `signature_state`.
fn verified_only(artifact: &Artifact) -> bool {
    artifact.cosign_verified
}

fn has_sbom(artifact: &Artifact) -> bool {
    artifact.sbom_presence
}

fn has_provenance(artifact: &Artifact) -> bool {
    artifact.provenance_presence
}
