//! Attribution evaluator: composes the feature gate, the entry store, and
//! the URL matcher into the single public question `is_allowed(url)`.
//!
//! The evaluator is stateless between calls; every evaluation reads the live
//! snapshots, so configuration refresh and remote toggling take effect on the
//! next call without restart. It never fails: malformed input degrades to the
//! conservative answer (not exempt) because this sits on the navigation hot
//! path and must not block a page load.

use std::sync::Arc;

use log::debug;

use crate::feature::{FeatureFlags, FeatureName};
use crate::matcher;
use crate::store::AttributionStore;

/// An evaluation outcome with a human-readable reason, for logging and the
/// CLI surface. [`AttributionEvaluator::is_allowed`] is the boolean
/// projection used on the navigation path.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub allowed: bool,
    pub reason: String,
}

/// The public-facing gate.
pub struct AttributionEvaluator {
    store: Arc<AttributionStore>,
    flags: Arc<FeatureFlags>,
}

impl AttributionEvaluator {
    pub fn new(store: Arc<AttributionStore>, flags: Arc<FeatureFlags>) -> Self {
        Self { store, flags }
    }

    fn feature_enabled(&self) -> bool {
        let name = FeatureName::AdClickAttribution;
        self.flags.is_enabled(name, name.default_state())
    }

    /// Is `url` exempt from ad-click attribution?
    ///
    /// Feature off short-circuits to `false` (no exemptions granted; the
    /// surrounding attribution logic is bypassed entirely in that case).
    /// Otherwise the URL's normalized host is tested against the current
    /// allow-list snapshot.
    pub fn is_allowed(&self, url: &str) -> bool {
        if !self.feature_enabled() {
            return false;
        }
        let allowlist = self.store.allowlist();
        matcher::matching_entry(url, &allowlist).is_some()
    }

    /// Like [`is_allowed`](Self::is_allowed), with the cause spelled out.
    pub fn verdict(&self, url: &str) -> Verdict {
        if !self.feature_enabled() {
            return Verdict {
                allowed: false,
                reason: "adClickAttribution feature disabled".into(),
            };
        }

        let allowlist = self.store.allowlist();
        match matcher::matching_entry(url, &allowlist) {
            Some(entry) => {
                debug!("allow-list match: host entry {}", entry.host);
                let reason = if entry.blocklist_entry.is_empty() {
                    format!("allow-list entry {}", entry.host)
                } else {
                    format!(
                        "allow-list entry {} (blocklist rule {})",
                        entry.host, entry.blocklist_entry
                    )
                };
                Verdict {
                    allowed: true,
                    reason,
                }
            }
            None => {
                let reason = match matcher::request_host(url) {
                    Some(host) => format!("no allow-list match for {host}"),
                    None => "unparsable url".into(),
                };
                Verdict {
                    allowed: false,
                    reason,
                }
            }
        }
    }

    /// True when at least one configured detection rule is active, i.e. the
    /// broader attribution mechanism is armed. Not consulted by the
    /// allow-list verdict itself.
    pub fn detections_active(&self) -> bool {
        self.store.detections().iter().any(|d| d.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{AllowlistEntry, DetectionEntry};

    fn evaluator_with(entries: Vec<AllowlistEntry>) -> AttributionEvaluator {
        let store = Arc::new(AttributionStore::new());
        store.replace_allowlist(entries);
        AttributionEvaluator::new(store, Arc::new(FeatureFlags::new()))
    }

    #[test]
    fn matching_host_is_allowed() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        assert!(eval.is_allowed("https://ads-example.com/click?x=1"));
    }

    #[test]
    fn subdomain_is_allowed() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        assert!(eval.is_allowed("https://sub.ads-example.com/a"));
    }

    #[test]
    fn unlisted_host_is_not_allowed() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        assert!(!eval.is_allowed("https://notads-example.com/a"));
    }

    #[test]
    fn malformed_url_is_not_allowed() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        assert!(!eval.is_allowed("not a url"));
    }

    #[test]
    fn feature_disabled_blocks_every_url() {
        let store = Arc::new(AttributionStore::new());
        store.replace_allowlist(vec![AllowlistEntry::new("", "ads-example.com")]);
        let flags = Arc::new(FeatureFlags::new());
        flags.set(FeatureName::AdClickAttribution, false);
        let eval = AttributionEvaluator::new(store, flags);

        assert!(!eval.is_allowed("https://ads-example.com/click"));
        assert!(!eval.is_allowed("https://sub.ads-example.com/a"));
    }

    #[test]
    fn feature_defaults_to_enabled() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        assert!(eval.is_allowed("https://ads-example.com/"));
    }

    #[test]
    fn empty_entry_host_grants_nothing() {
        let eval = evaluator_with(vec![AllowlistEntry::new("rule.example", "")]);
        assert!(!eval.is_allowed("https://anything.example/"));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let eval = evaluator_with(vec![AllowlistEntry::new("", "ads-example.com")]);
        let url = "https://ads-example.com/click";
        let first = eval.is_allowed(url);
        for _ in 0..8 {
            assert_eq!(eval.is_allowed(url), first);
        }
    }

    #[test]
    fn refresh_is_visible_to_next_call() {
        let store = Arc::new(AttributionStore::new());
        let eval = AttributionEvaluator::new(store.clone(), Arc::new(FeatureFlags::new()));

        assert!(!eval.is_allowed("https://late.example/"));
        store.replace_allowlist(vec![AllowlistEntry::new("", "late.example")]);
        assert!(eval.is_allowed("https://late.example/"));
    }

    #[test]
    fn verdict_names_the_matching_entry() {
        let eval = evaluator_with(vec![AllowlistEntry::new("tracker.example", "ads-example.com")]);
        let verdict = eval.verdict("https://ads-example.com/");
        assert!(verdict.allowed);
        assert!(verdict.reason.contains("ads-example.com"));
        assert!(verdict.reason.contains("tracker.example"));
    }

    #[test]
    fn verdict_reports_parse_failure() {
        let eval = evaluator_with(vec![]);
        let verdict = eval.verdict("::::");
        assert!(!verdict.allowed);
        assert_eq!(verdict.reason, "unparsable url");
    }

    #[test]
    fn detections_armed_when_any_entry_active() {
        let store = Arc::new(AttributionStore::new());
        let eval = AttributionEvaluator::new(store.clone(), Arc::new(FeatureFlags::new()));
        assert!(!eval.detections_active());

        store.replace_detections(vec![
            DetectionEntry::new(1, "disabled", "disabled"),
            DetectionEntry::new(2, "enabled", "disabled"),
        ]);
        assert!(eval.detections_active());
    }
}
