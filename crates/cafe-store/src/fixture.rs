//! # Fixture Client
//!
//! An in-memory [`CafeClient`] that answers from canned data. Used by the
//! `select-cafe` binary and by UI work that runs without a backend.
//!
//! ## Fixture File Format
//! ```json
//! {
//!   "abc": {
//!     "cafe": { "id": 1, "hash_id": "abc", "slug": "corner" },
//!     "advertisements": [{ "adId": 1 }],
//!     "discounts": []
//!   }
//! }
//! ```
//!
//! Keys are selection identifiers exactly as passed to `select_cafe`.
//! Missing `advertisements` / `discounts` default to empty arrays.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::client::{CafeClient, Operation};
use crate::error::{ClientError, StoreResult};

/// Canned answers for one café.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeFixture {
    pub cafe: Value,

    #[serde(default = "empty_array")]
    pub advertisements: Value,

    #[serde(default = "empty_array")]
    pub discounts: Value,
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

/// Client answering from [`CafeFixture`]s.
#[derive(Debug, Clone, Default)]
pub struct FixtureClient {
    cafes: HashMap<String, CafeFixture>,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the fixture for an identifier.
    pub fn with_cafe(mut self, id: impl Into<String>, fixture: CafeFixture) -> Self {
        self.cafes.insert(id.into(), fixture);
        self
    }

    /// Parses a fixture document.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let cafes: HashMap<String, CafeFixture> = serde_json::from_str(json)?;
        Ok(FixtureClient { cafes })
    }

    /// Reads a fixture file.
    pub async fn load(path: &Path) -> StoreResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let client = Self::from_json(&contents)?;
        info!(?path, cafes = client.len(), "Loaded cafe fixtures");
        Ok(client)
    }

    pub fn len(&self) -> usize {
        self.cafes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cafes.is_empty()
    }
}

#[async_trait]
impl CafeClient for FixtureClient {
    async fn invoke(&self, operation: &str, params: Value) -> Result<Value, ClientError> {
        let op = Operation::from_name(operation)
            .ok_or_else(|| ClientError::Rejected(format!("Unknown operation: {}", operation)))?;

        let id = params
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientError::Rejected(format!("{}: missing string 'id'", operation)))?;

        debug!(%op, cafe_id = id, "Answering from fixture");

        let fixture = self.cafes.get(id).ok_or_else(|| ClientError::NotFound {
            operation: operation.to_string(),
            id: id.to_string(),
        })?;

        Ok(match op {
            Operation::GetFullCafe => fixture.cafe.clone(),
            Operation::GetCafeAdvertisements => fixture.advertisements.clone(),
            Operation::GetCafeDiscounts => fixture.discounts.clone(),
        })
    }
}
