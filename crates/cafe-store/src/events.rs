//! # Store Events
//!
//! Observability hook for the selection action.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      select_cafe("abc")                                 │
//! │                                                                         │
//! │  emit_selection_started("abc", "en")                                   │
//! │        │                                                                │
//! │        ├──► emit_fetch_committed("abc", Cafe)            (any order)   │
//! │        ├──► emit_fetch_committed("abc", Advertisements)                │
//! │        └──► emit_fetch_failed("abc", Discounts, err)                   │
//! │                                                                         │
//! │  emit_selection_resolved("abc")    (only when all three committed)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Emitters are called synchronously from the fetch tasks and must not block.

use std::sync::Arc;

use cafe_core::RecordKind;
use tracing::{debug, info, warn};

use crate::error::StoreError;

// =============================================================================
// Event Emitter Trait
// =============================================================================

/// Trait for emitting store events (implemented by the embedding UI layer).
pub trait StoreEventEmitter: Send + Sync {
    /// A selection began; its fetches are being dispatched.
    fn emit_selection_started(&self, cafe_id: &str, locale: &str);

    /// One fetch resolved and its mutation was committed.
    fn emit_fetch_committed(&self, cafe_id: &str, kind: RecordKind);

    /// One fetch failed; nothing was committed for it.
    fn emit_fetch_failed(&self, cafe_id: &str, kind: RecordKind, error: &StoreError);

    /// All three fetches committed.
    fn emit_selection_resolved(&self, cafe_id: &str);
}

/// No-op event emitter (the default).
pub struct NoOpEmitter;

impl StoreEventEmitter for NoOpEmitter {
    fn emit_selection_started(&self, _cafe_id: &str, _locale: &str) {}
    fn emit_fetch_committed(&self, _cafe_id: &str, _kind: RecordKind) {}
    fn emit_fetch_failed(&self, _cafe_id: &str, _kind: RecordKind, _error: &StoreError) {}
    fn emit_selection_resolved(&self, _cafe_id: &str) {}
}

/// Emitter that turns every event into a `tracing` event.
///
/// Handy for the demo binary and for debugging UI integrations.
pub struct TracingEmitter;

impl StoreEventEmitter for TracingEmitter {
    fn emit_selection_started(&self, cafe_id: &str, locale: &str) {
        info!(cafe_id, locale, "store:selection_started");
    }

    fn emit_fetch_committed(&self, cafe_id: &str, kind: RecordKind) {
        debug!(cafe_id, %kind, "store:fetch_committed");
    }

    fn emit_fetch_failed(&self, cafe_id: &str, kind: RecordKind, error: &StoreError) {
        warn!(cafe_id, %kind, %error, "store:fetch_failed");
    }

    fn emit_selection_resolved(&self, cafe_id: &str) {
        info!(cafe_id, "store:selection_resolved");
    }
}

/// Shared emitter handle.
pub type SharedEmitter = Arc<dyn StoreEventEmitter>;
