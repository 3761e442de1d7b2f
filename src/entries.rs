//! Data model for attribution configuration entries.
//!
//! Both entry kinds arrive from remote configuration, are normalized at the
//! parsing boundary ([`crate::config`]), and are only ever replaced wholesale
//! via the store — never mutated in place.

use serde::{Deserialize, Serialize};

/// One allow-list exemption: a host whose navigations are excluded from
/// ad-click attribution.
///
/// `blocklist_entry` names the tracker-blocklist rule this exemption was
/// written for. It is informational metadata in the allow-list check itself:
/// host matching alone decides the verdict, and an empty value means the
/// exemption applies regardless of blocklist rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowlistEntry {
    /// Blocklist rule this exemption is scoped to; empty means "any rule".
    pub blocklist_entry: String,
    /// Domain (or domain fragment) granting exemption. Stored lowercase,
    /// without a leading `www.` label. Empty never matches.
    pub host: String,
}

impl AllowlistEntry {
    pub fn new(blocklist_entry: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            blocklist_entry: blocklist_entry.into(),
            host: host.into(),
        }
    }
}

/// One detection rule record. The gate only cares whether at least one entry
/// is active; the exact rule semantics live in the broader detection step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionEntry {
    pub id: i64,
    /// State of heuristic (URL-parameter) detection: "enabled" / "disabled".
    pub heuristic_detection: String,
    /// State of domain-based detection: "enabled" / "disabled".
    pub domain_detection: String,
}

impl DetectionEntry {
    pub fn new(
        id: i64,
        heuristic_detection: impl Into<String>,
        domain_detection: impl Into<String>,
    ) -> Self {
        Self {
            id,
            heuristic_detection: heuristic_detection.into(),
            domain_detection: domain_detection.into(),
        }
    }

    /// True when either detection mode is switched on.
    pub fn is_active(&self) -> bool {
        self.heuristic_detection.eq_ignore_ascii_case("enabled")
            || self.domain_detection.eq_ignore_ascii_case("enabled")
    }
}
