//! # cafe-core: Pure State Logic for the Café Store
//!
//! This crate holds the state of the café store and every pure operation on
//! it. Nothing here performs I/O; the async selection action lives in
//! `cafe-store` and calls into this crate between fetches.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Café Store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-end (UI components)                    │   │
//! │  │      current café ──► advertisements ──► discounts              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ getters / select_cafe                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    cafe-store (async)                           │   │
//! │  │    CafeStore, CafeClient, StoreConfig, events                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cafe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   state   │  │ validation│                  │   │
//! │  │   │CafeRecord │  │ CafeState │  │  locale   │                  │   │
//! │  │   │ payloads  │  │ Mutation  │  │           │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use cafe_core::{CafeRecord, CafeState};
//!
//! let mut state = CafeState::new();
//! state.set_cafe(CafeRecord::new(1, "abc").with_slug("corner"));
//!
//! state.select("corner");
//! assert_eq!(state.current_cafe().map(|c| c.id), Some(1));
//! assert!(state.current_advertisements().is_empty());
//! ```

pub mod error;
pub mod state;
pub mod types;
pub mod validation;

pub use error::{CoreError, CoreResult, ValidationError};
pub use state::{CafeState, Mutation};
pub use types::*;

/// Locale used when neither the config nor the caller picks one.
pub const DEFAULT_LOCALE: &str = "en";

/// Prefix marking a selection identifier as a custom domain.
pub const DOMAIN_SENTINEL: char = '$';

/// Longest locale tag accepted from configuration.
pub const MAX_LOCALE_LEN: usize = 35;
