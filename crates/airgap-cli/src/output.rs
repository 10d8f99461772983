use airgap_core::Artifact;
use airgap_query::QueryState;

/// Format a key-value pair for display.
pub fn kv(key: &str, value: &str) -> String {
    format!("{key:>16}: {value}")
}

/// Format a header line.
pub fn header(title: &str) -> String {
    format!("=== {title} ===")
}

fn mark(present: bool) -> &'static str {
    if present {
        "yes"
    } else {
        "no"
    }
}

/// One-line summary used by `list`.
pub fn artifact_line(artifact: &Artifact) -> String {
    let v = &artifact.vulnerabilities;
    let mut trust = Vec::new();
    if artifact.cosign_verified {
        trust.push("cosign");
    }
    if artifact.sbom_presence {
        trust.push("sbom");
    }
    if artifact.provenance_presence {
        trust.push("provenance");
    }
    let trust = if trust.is_empty() {
        "-".to_string()
    } else {
        trust.join(",")
    };
    format!(
        "{:<24} {:<8} {:<6} {:<10} {:<22} C:{} H:{} M:{} L:{}",
        artifact.name,
        artifact.version,
        artifact.artifact_type,
        artifact.signature_state,
        trust,
        v.critical,
        v.high,
        v.medium,
        v.low,
    )
}

/// Detailed block used by `show`.
pub fn artifact_details(artifact: &Artifact) -> Vec<String> {
    let v = &artifact.vulnerabilities;
    vec![
        header(&artifact.name),
        kv("id", &artifact.id),
        kv("version", &artifact.version),
        kv("type", artifact.artifact_type.as_str()),
        kv("size", &artifact.size),
        kv("digest", &artifact.digest),
        kv("signature", artifact.signature_state.as_str()),
        kv("cosign verified", mark(artifact.cosign_verified)),
        kv("sbom", mark(artifact.sbom_presence)),
        kv("provenance", mark(artifact.provenance_presence)),
        kv("last updated", &artifact.last_updated),
        kv(
            "vulnerabilities",
            &format!(
                "critical {} / high {} / medium {} / low {}",
                v.critical, v.high, v.medium, v.low
            ),
        ),
    ]
}

/// Active filter chips, or `None` when no known filter is active.
pub fn filter_chips(state: &QueryState) -> Option<String> {
    let labels: Vec<&str> = state.active_filters().iter().map(|f| f.label).collect();
    if labels.is_empty() {
        return None;
    }
    Some(format!("Active filters: {}", labels.join(" | ")))
}
