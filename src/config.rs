use std::collections::HashMap;

use serde::Deserialize;

use crate::entries::{AllowlistEntry, DetectionEntry};
use crate::feature::{FeatureFlags, FeatureName};
use crate::matcher::normalize_host;
use crate::store::AttributionStore;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.json");

// ── Raw document types (upstream JSON shape) ──

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    /// Feature state of the whole block: "enabled" / "disabled".
    state: Option<String>,
    #[serde(default)]
    settings: RawSettings,
    #[serde(default)]
    detections: Vec<RawDetection>,
}

#[derive(Debug, Deserialize, Default)]
struct RawSettings {
    #[serde(default)]
    allowlist: Vec<RawAllowlistEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAllowlistEntry {
    blocklist_entry: Option<String>,
    host: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDetection {
    id: i64,
    heuristic_detection: Option<String>,
    domain_detection: Option<String>,
}

// ── Normalized configuration ──

/// A parsed and normalized attribution configuration document.
///
/// All normalization happens here, before entries ever reach the matcher:
/// null fields become empty strings, entry hosts are lowercased and lose a
/// leading `www.` label. The store only ever sees canonical entries.
#[derive(Debug, Clone, Default)]
pub struct AttributionConfig {
    /// Feature state carried by the document; `None` when absent, leaving
    /// the evaluator's default in force.
    pub state: Option<bool>,
    pub allowlist: Vec<AllowlistEntry>,
    pub detections: Vec<DetectionEntry>,
}

impl AttributionConfig {
    /// Parse a configuration document from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawDocument = serde_json::from_str(json)?;

        let allowlist = raw
            .settings
            .allowlist
            .into_iter()
            .map(|entry| {
                let host = entry
                    .host
                    .as_deref()
                    .and_then(normalize_host)
                    .unwrap_or_default();
                AllowlistEntry::new(entry.blocklist_entry.unwrap_or_default(), host)
            })
            .collect();

        let detections = raw
            .detections
            .into_iter()
            .map(|d| {
                DetectionEntry::new(
                    d.id,
                    d.heuristic_detection.unwrap_or_default(),
                    d.domain_detection.unwrap_or_default(),
                )
            })
            .collect();

        let state = raw.state.map(|s| s.eq_ignore_ascii_case("enabled"));

        Ok(Self {
            state,
            allowlist,
            detections,
        })
    }

    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        Self::from_json(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Push this document into the live snapshots: both collections are
    /// replaced wholesale, and the feature flag is set when the document
    /// carries a `state`.
    pub fn install(&self, store: &AttributionStore, flags: &FeatureFlags) {
        store.replace_allowlist(self.allowlist.clone());
        store.replace_detections(self.detections.clone());
        if let Some(enabled) = self.state {
            flags.set(FeatureName::AdClickAttribution, enabled);
        }
    }

    /// Feature-flag map equivalent of this document's `state` field, for
    /// refresh paths that feed a whole [`FeatureFlags::replace`].
    pub fn feature_map(&self) -> HashMap<String, bool> {
        match self.state {
            Some(enabled) => HashMap::from([(
                FeatureName::AdClickAttribution.as_str().to_string(),
                enabled,
            )]),
            None => HashMap::new(),
        }
    }
}
