//! Feature gate: remotely toggled booleans with caller-supplied defaults.
//!
//! Flag lookups are typed through [`FeatureName`] instead of loose strings,
//! and the flag map is swapped atomically on refresh so remote toggling takes
//! effect without restart and without locking readers.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

/// Known feature identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureName {
    /// The ad-click attribution feature as a whole.
    AdClickAttribution,
}

impl FeatureName {
    /// Wire name used in remote configuration documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureName::AdClickAttribution => "adClickAttribution",
        }
    }

    /// Default value when remote configuration carries no entry.
    pub fn default_state(self) -> bool {
        match self {
            FeatureName::AdClickAttribution => true,
        }
    }
}

/// Live feature-flag state. Reads are lock-free snapshot loads; refresh
/// replaces the whole map at once.
#[derive(Debug, Default)]
pub struct FeatureFlags {
    flags: ArcSwap<HashMap<String, bool>>,
}

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configured value for `name`, or `default` when absent. Consulted
    /// fresh on every evaluation; absence of configuration is not an error.
    pub fn is_enabled(&self, name: FeatureName, default: bool) -> bool {
        self.flags
            .load()
            .get(name.as_str())
            .copied()
            .unwrap_or(default)
    }

    /// Install a new flag map from refreshed remote configuration.
    pub fn replace(&self, flags: HashMap<String, bool>) {
        self.flags.store(Arc::new(flags));
    }

    /// Set a single flag, keeping the rest. Refresh paths that deliver one
    /// feature block at a time use this.
    pub fn set(&self, name: FeatureName, enabled: bool) {
        let mut flags: HashMap<String, bool> = self.flags.load().as_ref().clone();
        flags.insert(name.as_str().to_string(), enabled);
        self.flags.store(Arc::new(flags));
    }
}
