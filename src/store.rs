//! Entry store: swap-on-refresh snapshots of the configured collections.
//!
//! Evaluation happens synchronously on the navigation path while refresh runs
//! on a separate configuration path, so readers must never observe a
//! half-updated collection. Each collection is an immutable `Arc<Vec<_>>`
//! behind an [`ArcSwap`]: reads are a lock-free pointer load, refresh is a
//! single atomic pointer store of a fully built replacement.

use std::sync::Arc;

use arc_swap::ArcSwap;
use log::debug;

use crate::entries::{AllowlistEntry, DetectionEntry};

/// Holds the current allow-list and detection collections.
#[derive(Debug, Default)]
pub struct AttributionStore {
    allowlist: ArcSwap<Vec<AllowlistEntry>>,
    detections: ArcSwap<Vec<DetectionEntry>>,
}

impl AttributionStore {
    /// Empty store; matches nothing until populated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically install a new allow-list. In-flight readers keep the prior
    /// snapshot until their next load.
    pub fn replace_allowlist(&self, entries: Vec<AllowlistEntry>) {
        debug!("installing allowlist snapshot ({} entries)", entries.len());
        self.allowlist.store(Arc::new(entries));
    }

    /// Atomically install a new detection collection.
    pub fn replace_detections(&self, entries: Vec<DetectionEntry>) {
        debug!("installing detections snapshot ({} entries)", entries.len());
        self.detections.store(Arc::new(entries));
    }

    /// Current allow-list snapshot (non-blocking).
    pub fn allowlist(&self) -> Arc<Vec<AllowlistEntry>> {
        self.allowlist.load_full()
    }

    /// Current detection snapshot (non-blocking).
    pub fn detections(&self) -> Arc<Vec<DetectionEntry>> {
        self.detections.load_full()
    }
}
