//! # Store State
//!
//! The state shape of the café store, its getters and its mutations.
//!
//! ## State Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Café State Operations                                │
//! │                                                                         │
//! │  Caller                  Operation                State Change          │
//! │  ──────                  ─────────                ────────────          │
//! │                                                                         │
//! │  select_cafe() ────────► select(id) ────────────► cafe_id = id         │
//! │                                                   resolving_id = id    │
//! │                                                                         │
//! │  getFullCafe done ─────► set_cafe(record) ──────► cafes: replace by id │
//! │                                                                         │
//! │  ads fetch done ───────► set_advertisements() ──► ads[cafe_id] = list  │
//! │                                                                         │
//! │  discounts done ───────► set_discounts() ───────► discounts[..] = list │
//! │                                                                         │
//! │  all three done ───────► finish_resolving() ────► resolving_id = None  │
//! │                                                                         │
//! │  UI render ────────────► current_*() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one record per numeric `id` in `cafes`
//! - `advertisements` / `discounts` keys are never removed
//! - `cafe_id` may name a café that is not cached yet; getters return
//!   `None` / an empty slice in that case

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    Advertisement, CafeRecord, Discount, SelectionStatus, SetAdvertisements, SetDiscounts,
};
use crate::DOMAIN_SENTINEL;

// =============================================================================
// Mutations
// =============================================================================

/// A state mutation, as committed by the selection action.
///
/// Mirrors commit-by-name dispatch with typed payloads: [`Mutation::name`]
/// gives the name the enclosing framework knows it by.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    SetCafe(CafeRecord),
    SetAdvertisements(SetAdvertisements),
    SetDiscounts(SetDiscounts),
}

impl Mutation {
    /// Names of every mutation this module exposes.
    pub const NAMES: [&'static str; 3] = ["setCafe", "setAdvertisements", "setDiscounts"];

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetCafe(_) => "setCafe",
            Mutation::SetAdvertisements(_) => "setAdvertisements",
            Mutation::SetDiscounts(_) => "setDiscounts",
        }
    }
}

// =============================================================================
// Café State
// =============================================================================

/// In-memory cache of cafés and their per-café lists, plus the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CafeState {
    /// Cached cafés, unique by `id`.
    pub cafes: Vec<CafeRecord>,

    /// Advertisements keyed by selection identifier.
    pub advertisements: HashMap<String, Vec<Advertisement>>,

    /// Discounts keyed by selection identifier.
    pub discounts: HashMap<String, Vec<Discount>>,

    /// Currently selected identifier.
    pub cafe_id: Option<String>,

    /// Identifier whose selection is still being fetched.
    pub resolving_id: Option<String>,
}

impl CafeState {
    /// Creates the initial (empty) state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The currently selected café, if it is cached.
    ///
    /// ## Lookup Rules
    /// - `$`-prefixed identifier: record whose `domain` equals the identifier
    ///   as given, sentinel included
    /// - Otherwise: first record whose `hash_id` or `slug` equals it
    pub fn current_cafe(&self) -> Option<&CafeRecord> {
        let cafe_id = self.cafe_id.as_deref()?;

        // Raw identifier, `$` included.
        if cafe_id.starts_with(DOMAIN_SENTINEL) {
            return self
                .cafes
                .iter()
                .find(|cafe| cafe.domain.as_deref() == Some(cafe_id));
        }

        self.cafes.iter().find(|cafe| {
            cafe.hash_id == cafe_id || cafe.slug.as_deref() == Some(cafe_id)
        })
    }

    /// Advertisements of the selected café, empty if none are cached.
    pub fn current_advertisements(&self) -> &[Advertisement] {
        self.cafe_id
            .as_ref()
            .and_then(|id| self.advertisements.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Discounts of the selected café, empty if none are cached.
    pub fn current_discounts(&self) -> &[Discount] {
        self.cafe_id
            .as_ref()
            .and_then(|id| self.discounts.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.cafe_id.as_deref()
    }

    pub fn resolving_id(&self) -> Option<&str> {
        self.resolving_id.as_deref()
    }

    /// Returns true while a selection's fetches are in flight.
    pub fn is_resolving(&self) -> bool {
        self.resolving_id.is_some()
    }

    pub fn status(&self) -> SelectionStatus {
        SelectionStatus {
            cafe_id: self.cafe_id.clone(),
            resolving_id: self.resolving_id.clone(),
        }
    }

    /// Looks up a cached café by numeric id.
    pub fn cafe_by_id(&self, id: i64) -> Option<&CafeRecord> {
        self.cafes.iter().find(|cafe| cafe.id == id)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Inserts a café, replacing any cached record with the same `id`.
    ///
    /// The new record always goes to the end of the cache.
    pub fn set_cafe(&mut self, cafe: CafeRecord) {
        self.cafes.retain(|old| old.id != cafe.id);
        self.cafes.push(cafe);
    }

    /// Overwrites the advertisements cached for a café.
    pub fn set_advertisements(&mut self, payload: SetAdvertisements) {
        self.advertisements
            .insert(payload.cafe_id, payload.advertisements);
    }

    /// Overwrites the discounts cached for a café.
    pub fn set_discounts(&mut self, payload: SetDiscounts) {
        self.discounts.insert(payload.cafe_id, payload.discounts);
    }

    /// Applies a mutation.
    pub fn commit(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::SetCafe(cafe) => self.set_cafe(cafe),
            Mutation::SetAdvertisements(payload) => self.set_advertisements(payload),
            Mutation::SetDiscounts(payload) => self.set_discounts(payload),
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Marks `id` as both selected and in flight.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.resolving_id = Some(id.clone());
        self.cafe_id = Some(id);
    }

    /// Clears the in-flight marker once a selection has fully resolved.
    pub fn finish_resolving(&mut self) {
        self.resolving_id = None;
    }
}
