//! # Café Store
//!
//! The store instance: shared state, getters, and the `select_cafe` action.
//!
//! ## Selection Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    select_cafe("abc", None)                             │
//! │                                                                         │
//! │  (at call time)   cafe_id = "abc", resolving_id = "abc"                 │
//! │                              │                                          │
//! │          ┌───────────────────┼───────────────────┐                     │
//! │          ▼                   ▼                   ▼                      │
//! │  ┌──────────────┐   ┌──────────────────┐  ┌──────────────┐             │
//! │  │ getFullCafe  │   │getCafeAdvertise- │  │getCafeDisco- │  tokio tasks│
//! │  │              │   │ments             │  │unts          │             │
//! │  └──────┬───────┘   └────────┬─────────┘  └──────┬───────┘             │
//! │         ▼                    ▼                   ▼                      │
//! │     set_cafe         set_advertisements     set_discounts  (on arrival)│
//! │          └───────────────────┼───────────────────┘                     │
//! │                              ▼                                          │
//! │          try_join (first failure returns immediately)                   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │        resolving_id = None, return SelectionResult                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! - Each fetch runs as its own task and commits as soon as it resolves, so a
//!   failing fetch does not stop the other two from committing.
//! - The state lock is only held for a single mutation, never across an await.
//!   Getters may observe a partially resolved selection.
//! - Overlapping selections are not cancelled; the last write to each state
//!   slice wins.
//! - No timeouts: a hung client call hangs the action.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use cafe_core::{
    decode_list, Advertisement, CafeRecord, CafeState, CoreResult, Discount, Mutation,
    SelectionResult, SelectionStatus, SetAdvertisements, SetDiscounts,
};

use crate::client::{CafeClient, InvokeParams, Operation};
use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::events::{NoOpEmitter, SharedEmitter};
use crate::module::{evaluate_getter, ModuleDescriptor};

// =============================================================================
// Café Store
// =============================================================================

/// Café selection store.
///
/// Cheap to clone: clones share the same state, client and emitter.
#[derive(Clone)]
pub struct CafeStore {
    /// Store configuration.
    config: Arc<StoreConfig>,

    /// Remote capability all fetches go through.
    client: Arc<dyn CafeClient>,

    /// Shared state.
    state: Arc<RwLock<CafeState>>,

    /// Event emitter for observers.
    emitter: SharedEmitter,
}

impl CafeStore {
    /// Creates a store with empty state.
    pub fn new(config: StoreConfig, client: Arc<dyn CafeClient>) -> Self {
        Self::with_emitter(config, client, Arc::new(NoOpEmitter))
    }

    /// Creates a store with a custom event emitter.
    pub fn with_emitter(
        config: StoreConfig,
        client: Arc<dyn CafeClient>,
        emitter: SharedEmitter,
    ) -> Self {
        CafeStore {
            config: Arc::new(config),
            client,
            state: Arc::new(RwLock::new(CafeState::new())),
            emitter,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Describes this store to the enclosing state framework.
    pub fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor::for_config(&self.config)
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Executes a function with read access to the state.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CafeState) -> R,
    {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    fn with_state_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CafeState) -> R,
    {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }

    /// A copy of the whole state.
    pub fn snapshot(&self) -> CafeState {
        self.with_state(CafeState::clone)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn current_cafe(&self) -> Option<CafeRecord> {
        self.with_state(|s| s.current_cafe().cloned())
    }

    pub fn current_advertisements(&self) -> Vec<Advertisement> {
        self.with_state(|s| s.current_advertisements().to_vec())
    }

    pub fn current_discounts(&self) -> Vec<Discount> {
        self.with_state(|s| s.current_discounts().to_vec())
    }

    pub fn status(&self) -> SelectionStatus {
        self.with_state(CafeState::status)
    }

    /// Evaluates a getter by its framework name (`cafe`, `advertisements`,
    /// `discounts`). Returns `None` for unknown names.
    pub fn getter(&self, name: &str) -> Option<Value> {
        self.with_state(|s| evaluate_getter(s, name))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Applies a mutation to the shared state.
    pub fn commit(&self, mutation: Mutation) {
        debug!(mutation = mutation.name(), "Committing mutation");
        self.with_state_mut(|s| s.commit(mutation));
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Selects a café and fetches its record, advertisements and discounts.
    ///
    /// The selection is visible to getters as soon as this is called; the
    /// three fetches start when the returned future is first polled.
    /// `locale` falls back to the configured locale.
    ///
    /// ## Errors
    /// Returns the first fetch failure. Fetches that already succeeded stay
    /// committed, fetches still in flight keep running and commit later, and
    /// the in-flight marker is left set.
    pub fn select_cafe(
        &self,
        id: &str,
        locale: Option<&str>,
    ) -> impl Future<Output = StoreResult<SelectionResult>> + Send + 'static {
        let id = id.to_string();
        let locale = locale.unwrap_or(&self.config.locale).to_string();

        self.with_state_mut(|s| s.select(id.clone()));
        info!(cafe_id = %id, locale = %locale, "Selecting cafe");
        self.emitter.emit_selection_started(&id, &locale);

        let store = self.clone();
        let params = InvokeParams::new(id, locale);

        async move {
            let cafe_task = tokio::spawn(store.clone().resolve(
                Operation::GetFullCafe,
                params.clone(),
                CafeRecord::from_value,
                |_, cafe| Mutation::SetCafe(cafe),
            ));

            let advertisements_task = tokio::spawn(store.clone().resolve(
                Operation::GetCafeAdvertisements,
                params.clone(),
                |value| decode_list::<Advertisement>(Operation::GetCafeAdvertisements.kind(), value),
                |cafe_id, advertisements| {
                    Mutation::SetAdvertisements(SetAdvertisements {
                        cafe_id,
                        advertisements,
                    })
                },
            ));

            let discounts_task = tokio::spawn(store.clone().resolve(
                Operation::GetCafeDiscounts,
                params.clone(),
                |value| decode_list::<Discount>(Operation::GetCafeDiscounts.kind(), value),
                |cafe_id, discounts| Mutation::SetDiscounts(SetDiscounts { cafe_id, discounts }),
            ));

            let (cafe, advertisements, discounts) = tokio::try_join!(
                join_fetch(cafe_task),
                join_fetch(advertisements_task),
                join_fetch(discounts_task)
            )?;

            store.with_state_mut(CafeState::finish_resolving);
            info!(cafe_id = %params.id, cafe = cafe.id, "Cafe selection resolved");
            store.emitter.emit_selection_resolved(&params.id);

            Ok(SelectionResult {
                cafe,
                advertisements,
                discounts,
            })
        }
    }

    /// Runs one fetch: invoke, decode, commit.
    async fn resolve<T, D, M>(
        self,
        operation: Operation,
        params: InvokeParams,
        decode: D,
        into_mutation: M,
    ) -> StoreResult<T>
    where
        T: Clone + Send + 'static,
        D: FnOnce(Value) -> CoreResult<T> + Send + 'static,
        M: FnOnce(String, T) -> Mutation + Send + 'static,
    {
        let kind = operation.kind();
        debug!(cafe_id = %params.id, %operation, locale = %params.locale, "Invoking");

        let outcome = match self.client.invoke(operation.name(), params.to_value()).await {
            Ok(value) => decode(value).map_err(StoreError::from),
            Err(err) => Err(StoreError::from(err)),
        };

        match outcome {
            Ok(value) => {
                self.commit(into_mutation(params.id.clone(), value.clone()));
                self.emitter.emit_fetch_committed(&params.id, kind);
                Ok(value)
            }
            Err(err) => {
                warn!(cafe_id = %params.id, %operation, error = %err, "Fetch failed");
                self.emitter.emit_fetch_failed(&params.id, kind, &err);
                Err(err)
            }
        }
    }
}

impl std::fmt::Debug for CafeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CafeStore")
            .field("config", &self.config)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

/// Waits for a fetch task. Dropping the handle on an early return detaches
/// the task; it still runs to completion and commits.
async fn join_fetch<T>(handle: JoinHandle<StoreResult<T>>) -> StoreResult<T> {
    handle.await?
}
