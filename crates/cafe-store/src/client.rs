//! # Remote Client Seam
//!
//! The store never talks to the network itself. It calls a single injected
//! capability, [`CafeClient::invoke`], with an operation name and JSON
//! parameters, and decodes whatever comes back.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Remote Operations                                   │
//! │                                                                         │
//! │  Operation               Params              Result                     │
//! │  ─────────               ──────              ──────                     │
//! │  getFullCafe             { id, locale }      café record                │
//! │  getCafeAdvertisements   { id, locale }      [advertisement, ...]       │
//! │  getCafeDiscounts        { id, locale }      [discount, ...]            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use cafe_core::RecordKind;

use crate::error::ClientError;

// =============================================================================
// Operation
// =============================================================================

/// One of the three remote operations a selection issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetFullCafe,
    GetCafeAdvertisements,
    GetCafeDiscounts,
}

impl Operation {
    /// The operation name the remote service knows.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::GetFullCafe => "getFullCafe",
            Operation::GetCafeAdvertisements => "getCafeAdvertisements",
            Operation::GetCafeDiscounts => "getCafeDiscounts",
        }
    }

    /// What kind of data this operation returns.
    pub fn kind(&self) -> RecordKind {
        match self {
            Operation::GetFullCafe => RecordKind::Cafe,
            Operation::GetCafeAdvertisements => RecordKind::Advertisements,
            Operation::GetCafeDiscounts => RecordKind::Discounts,
        }
    }

    /// Resolves an operation from its remote name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "getFullCafe" => Some(Operation::GetFullCafe),
            "getCafeAdvertisements" => Some(Operation::GetCafeAdvertisements),
            "getCafeDiscounts" => Some(Operation::GetCafeDiscounts),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Params
// =============================================================================

/// Parameters shared by all three operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokeParams {
    pub id: String,
    pub locale: String,
}

impl InvokeParams {
    pub fn new(id: impl Into<String>, locale: impl Into<String>) -> Self {
        InvokeParams {
            id: id.into(),
            locale: locale.into(),
        }
    }

    /// Encodes the params as the JSON object sent to `invoke`.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "locale": self.locale,
        })
    }
}

// =============================================================================
// Client Trait
// =============================================================================

/// Remote capability the store fetches through.
///
/// Implemented by the application's RPC layer; the store only needs this
/// one method. Errors are returned to the caller of `select_cafe` as-is.
#[async_trait]
pub trait CafeClient: Send + Sync {
    /// Calls a remote operation by name.
    async fn invoke(&self, operation: &str, params: Value) -> Result<Value, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_names_round_trip() {
        for op in [
            Operation::GetFullCafe,
            Operation::GetCafeAdvertisements,
            Operation::GetCafeDiscounts,
        ] {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("getCafe"), None);
    }

    #[test]
    fn test_operation_kinds() {
        assert_eq!(Operation::GetFullCafe.kind(), RecordKind::Cafe);
        assert_eq!(Operation::GetCafeDiscounts.kind(), RecordKind::Discounts);
    }

    #[test]
    fn test_params_shape() {
        let params = InvokeParams::new("abc", "en");
        assert_eq!(params.to_value(), json!({ "id": "abc", "locale": "en" }));
    }
}
