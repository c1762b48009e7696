//! # Module Descriptor
//!
//! What the enclosing state framework sees when it composes this store:
//! the initial state, the names of the getters, mutations and actions, and
//! whether the module is namespaced.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  cafe (namespaced)                            │
//! │  ├── state        CafeState::new()            │
//! │  ├── getters      cafe, advertisements,       │
//! │  │                discounts                   │
//! │  ├── mutations    setCafe, setAdvertisements, │
//! │  │                setDiscounts                │
//! │  └── actions      setCafe                     │
//! └──────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use serde_json::Value;

use cafe_core::{CafeState, Mutation};

use crate::config::StoreConfig;

/// Getter names exposed to the framework.
pub const GETTERS: [&str; 3] = ["cafe", "advertisements", "discounts"];

/// Action names exposed to the framework.
pub const ACTIONS: [&str; 1] = ["setCafe"];

/// Serializable description of the store module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDescriptor {
    pub namespaced: bool,
    pub state: CafeState,
    pub getters: Vec<&'static str>,
    pub mutations: Vec<&'static str>,
    pub actions: Vec<&'static str>,
}

impl ModuleDescriptor {
    pub fn for_config(config: &StoreConfig) -> Self {
        ModuleDescriptor {
            namespaced: config.namespaced,
            state: CafeState::new(),
            getters: GETTERS.to_vec(),
            mutations: Mutation::NAMES.to_vec(),
            actions: ACTIONS.to_vec(),
        }
    }
}

/// Evaluates a getter by name against a state, as JSON.
///
/// A missing café evaluates to `null`, missing lists to `[]`.
pub fn evaluate_getter(state: &CafeState, name: &str) -> Option<Value> {
    let value = match name {
        "cafe" => serde_json::to_value(state.current_cafe()),
        "advertisements" => serde_json::to_value(state.current_advertisements()),
        "discounts" => serde_json::to_value(state.current_discounts()),
        _ => return None,
    };

    // Records are plain JSON maps; serialization cannot fail.
    value.ok()
}
