use std::sync::Arc;

use airgap_core::{ArtifactType, Catalog, CatalogLoadError};
use airgap_query::{evaluate, QueryError, QueryState, ResultSummary, Session, TypeSelector};

const DEMO_CATALOG: &str = include_str!("../../demos/catalog.json");

fn demo_session() -> Session {
    let catalog = Catalog::from_json(DEMO_CATALOG).unwrap();
    Session::new(Arc::new(catalog))
}

fn visible(session: &Session) -> Vec<String> {
    session.evaluate().iter().map(|a| a.name.clone()).collect()
}

fn artifact_json(id: &str, name: &str, high: u32, sbom: bool, cosign: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "version": "1.0.0",
        "type": "docker",
        "size": "100 MB",
        "digest": "e3b0c44298fc1c14",
        "signatureState": "verified",
        "sbomPresence": sbom,
        "provenancePresence": false,
        "lastUpdated": "2 hours ago",
        "vulnerabilities": { "critical": 0, "high": high, "medium": 0, "low": 0 },
        "cosignVerified": cosign,
    })
}

// === Demo catalog ===

#[test]
fn demo_catalog_loads_in_order() {
    let session = demo_session();
    assert_eq!(session.catalog().count(), 6);
    assert_eq!(
        visible(&session),
        [
            "app-backend-service",
            "frontend-app",
            "database-operator",
            "api-gateway",
            "monitoring-stack",
            "data-processor",
        ]
    );
    assert_eq!(session.summary().to_string(), "Showing 6 of 6 artifacts");
}

#[test]
fn search_and_cve_filter_on_demo() {
    let mut session = demo_session();
    session.state_mut().set_search_text("APP");
    assert_eq!(visible(&session), ["app-backend-service", "frontend-app"]);
    session.state_mut().toggle_filter("has-cves");
    assert_eq!(visible(&session), ["frontend-app"]);
}

#[test]
fn provenance_filter_on_demo() {
    let mut session = demo_session();
    session.state_mut().toggle_filter("has-provenance");
    assert_eq!(
        visible(&session),
        ["app-backend-service", "database-operator", "monitoring-stack"]
    );
    // Broadening: CVEs OR provenance.
    session.state_mut().toggle_filter("has-cves");
    assert_eq!(
        visible(&session),
        [
            "app-backend-service",
            "frontend-app",
            "database-operator",
            "api-gateway",
            "monitoring-stack",
        ]
    );
}

#[test]
fn type_and_filter_can_exclude_everything() {
    let mut session = demo_session();
    session
        .state_mut()
        .set_type_selector(TypeSelector::Only(ArtifactType::Helm));
    session.state_mut().toggle_filter("has-cves");
    assert!(session.evaluate().is_empty());
    assert_eq!(session.summary(), ResultSummary { shown: 0, total: 6 });

    session.state_mut().clear_filters();
    assert_eq!(session.summary().shown, 3);
}

#[test]
fn invalid_selector_is_reported_and_ignored() {
    let mut session = demo_session();
    session.state_mut().set_type_selector_str("docker").unwrap();
    let err = session.state_mut().set_type_selector_str("oci").unwrap_err();
    assert_eq!(err, QueryError::InvalidSelector("oci".into()));
    assert_eq!(
        visible(&session),
        ["frontend-app", "api-gateway", "data-processor"]
    );
}

// === Combination semantics ===

#[test]
fn end_to_end_search_with_cve_filter() {
    let json = serde_json::json!({
        "artifacts": [
            artifact_json("1", "app-backend-service", 0, true, true),
            artifact_json("2", "frontend-app", 1, true, true),
        ]
    });
    let catalog = Catalog::from_json(&json.to_string()).unwrap();
    let mut state = QueryState::new();
    state.set_search_text("app");
    state.set_type_selector(TypeSelector::All);
    state.toggle_filter("has-cves");

    let names: Vec<&str> = evaluate(&catalog, &state)
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, ["frontend-app"]);
}

#[test]
fn active_filters_match_any() {
    let json = serde_json::json!({
        "artifacts": [
            artifact_json("1", "sbom-only", 0, true, false),
            artifact_json("2", "bare", 0, false, false),
        ]
    });
    let catalog = Catalog::from_json(&json.to_string()).unwrap();
    let mut state = QueryState::new();
    state.toggle_filter("verified-only");
    state.toggle_filter("has-sbom");
    let results = evaluate(&catalog, &state);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "1");

    state.toggle_filter("has-sbom");
    assert!(evaluate(&catalog, &state).is_empty());
}

#[test]
fn unknown_filter_adds_nothing() {
    let mut session = demo_session();
    session.state_mut().toggle_filter("has-provenance");
    let before = visible(&session);
    session.state_mut().toggle_filter("has-malware");
    assert_eq!(visible(&session), before);
    assert_eq!(session.state().active_filters().len(), 1);
}

#[test]
fn repeated_evaluation_is_stable() {
    let mut session = demo_session();
    session.state_mut().set_search_text("a");
    session.state_mut().toggle_filter("has-sbom");
    let first = visible(&session);
    let second = visible(&session);
    assert_eq!(first, second);
}

// === Catalog replacement ===

#[test]
fn empty_catalog_boundary() {
    let mut session = Session::new(Arc::new(Catalog::empty()));
    session.state_mut().set_search_text("app");
    session.state_mut().toggle_filter("has-cves");
    assert!(session.evaluate().is_empty());
    assert_eq!(session.catalog().count(), 0);
}

#[test]
fn rejected_resync_keeps_previous_catalog() {
    let mut session = demo_session();
    let duplicate = serde_json::json!({
        "artifacts": [
            artifact_json("1", "a", 0, true, true),
            artifact_json("1", "b", 0, true, true),
        ]
    });
    let err = session.sync_catalog(&duplicate.to_string()).unwrap_err();
    assert!(matches!(err, CatalogLoadError::DuplicateId(ref id) if id == "1"));

    let mut negative = artifact_json("9", "neg", 0, true, true);
    negative["vulnerabilities"]["low"] = serde_json::json!(-3);
    let err = session
        .sync_catalog(&serde_json::json!({ "artifacts": [negative] }).to_string())
        .unwrap_err();
    assert!(matches!(err, CatalogLoadError::Malformed(_)));

    assert_eq!(session.catalog().count(), 6);
    assert_eq!(session.evaluate().len(), 6);
}

#[test]
fn accepted_resync_replaces_whole_catalog() {
    let mut session = demo_session();
    session.state_mut().toggle_filter("has-cves");
    let json = serde_json::json!({
        "artifacts": [artifact_json("10", "edge-proxy", 2, false, false)]
    });
    session.sync_catalog(&json.to_string()).unwrap();
    assert_eq!(visible(&session), ["edge-proxy"]);
    assert_eq!(session.summary().to_string(), "Showing 1 of 1 artifacts");
}
