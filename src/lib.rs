//! adclick-gate: decides whether a navigation URL is exempt from ad-click
//! attribution tracking.
//!
//! Given a remotely refreshed configuration (allow-list entries, detection
//! rules, and a feature flag), the gate answers one yes/no question per URL:
//! [`eval::AttributionEvaluator::is_allowed`]. URLs are parsed, their host
//! normalized, and tested against the allow-list with exact-or-subdomain
//! matching. Anything malformed fails closed — the gate sits on the
//! navigation hot path and must never block a page load.
//!
//! # Architecture
//!
//! - **[`entries`]** — Data model: allow-list and detection entries.
//! - **[`config`]** — Configuration document parsing and normalization,
//!   embedded defaults.
//! - **[`feature`]** — Feature gate: typed flag names, atomic flag map.
//! - **[`store`]** — Entry store: swap-on-refresh immutable snapshots.
//! - **[`matcher`]** — URL normalization and host/dot-suffix matching.
//! - **[`eval`]** — The evaluator composing gate + store + matcher.
//! - **[`logging`]** — Logger setup for the binary.

/// Configuration document types, normalization, and the embedded default.
pub mod config;
/// Allow-list and detection entry types.
pub mod entries;
/// Evaluator and verdict types.
pub mod eval;
/// Feature names and the live flag map.
pub mod feature;
/// Terminal logger initialization.
pub mod logging;
/// URL normalization and allow-list matching.
pub mod matcher;
/// Snapshot store for the configured collections.
pub mod store;

use std::sync::Arc;

use eval::{AttributionEvaluator, Verdict};

/// Build an evaluator over the embedded default configuration and evaluate
/// one URL.
///
/// This is the main entry point for tests and simple usage. For live
/// configuration, build the store and flags directly and install refreshed
/// documents via [`config::AttributionConfig::install`].
pub fn evaluate(url: &str) -> Verdict {
    let store = Arc::new(store::AttributionStore::new());
    let flags = Arc::new(feature::FeatureFlags::new());
    config::AttributionConfig::default_config().install(&store, &flags);
    AttributionEvaluator::new(store, flags).verdict(url)
}
