//! # cafe-store: Café Selection Store
//!
//! A client-side cache of cafés, their advertisements and their discounts,
//! keyed by the currently selected café.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Store Architecture                          │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      CafeStore                                   │  │
//! │  │                                                                  │  │
//! │  │  Getters:  current_cafe, current_advertisements,                 │  │
//! │  │            current_discounts, status                             │  │
//! │  │  Action:   select_cafe(id, locale)                               │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │  CafeClient    │  │  CafeState     │  │  StoreEventEmitter     │    │
//! │  │  (injected)    │  │  (cafe-core)   │  │  (optional hook)       │    │
//! │  │                │  │                │  │                        │    │
//! │  │  invoke(op,    │  │  Pure getters  │  │  started / committed / │    │
//! │  │   params)      │  │  & mutations   │  │  failed / resolved     │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`client`] - `CafeClient` trait and remote operation names
//! - [`config`] - Store configuration (locale, mode, namespaced)
//! - [`error`] - Client and store error types
//! - [`events`] - Event emitter hook
//! - [`fixture`] - In-memory client answering from canned data
//! - [`module`] - Descriptor for the enclosing state framework
//! - [`store`] - `CafeStore` and the `select_cafe` action
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cafe_store::{CafeStore, FixtureClient, StoreConfig};
//!
//! # async fn run() -> cafe_store::StoreResult<()> {
//! let client = FixtureClient::load("fixtures.json".as_ref()).await?;
//! let store = CafeStore::new(StoreConfig::load_or_default(None), Arc::new(client));
//!
//! let result = store.select_cafe("abc", None).await?;
//! println!("Selected cafe #{}", result.cafe.id);
//!
//! assert_eq!(store.current_cafe(), Some(result.cafe));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod fixture;
pub mod module;
pub mod store;

pub use client::{CafeClient, InvokeParams, Operation};
pub use config::{StoreConfig, StoreMode};
pub use error::{ClientError, StoreError, StoreResult};
pub use events::{NoOpEmitter, SharedEmitter, StoreEventEmitter, TracingEmitter};
pub use fixture::{CafeFixture, FixtureClient};
pub use module::ModuleDescriptor;
pub use store::CafeStore;
