//! # Domain Types
//!
//! Records cached by the store and the payloads that move them around.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CafeRecord    │   │  Advertisement  │   │    Discount     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  opaque JSON    │   │  opaque JSON    │       │
//! │  │  hash_id        │   │  value          │   │  value          │       │
//! │  │  domain?        │   └─────────────────┘   └─────────────────┘       │
//! │  │  slug?          │                                                    │
//! │  │  extra {..}     │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │SetAdvertisements│   │  SetDiscounts   │       │
//! │                        │  cafe_id + list │   │  cafe_id + list │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Fields
//! The remote service returns café records with many more fields than the
//! store looks at. Those land in [`CafeRecord::extra`] and are serialized
//! back out unchanged, so the UI sees the record exactly as fetched.
//!
//! The exception is `domain` and `slug`: an explicit `null` and a missing
//! field both decode to `None`, and `None` is serialized by omitting the
//! field.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Record Kind
// =============================================================================

/// The three kinds of data a selection fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Cafe,
    Advertisements,
    Discounts,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Cafe => write!(f, "cafe"),
            RecordKind::Advertisements => write!(f, "advertisements"),
            RecordKind::Discounts => write!(f, "discounts"),
        }
    }
}

// =============================================================================
// Café Record
// =============================================================================

/// A fully fetched café.
///
/// ## Identity
/// - `id`: numeric key, unique within the cache
/// - `hash_id` / `slug`: what a plain selection identifier matches against
/// - `domain`: what a `$`-prefixed selection identifier matches against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CafeRecord {
    /// Numeric identifier (cache key).
    pub id: i64,

    /// Public hash identifier.
    pub hash_id: String,

    /// Custom domain, if the café has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Human-readable slug, if the café has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Every other field of the remote record, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CafeRecord {
    /// Creates a record with only the required fields.
    pub fn new(id: i64, hash_id: impl Into<String>) -> Self {
        CafeRecord {
            id,
            hash_id: hash_id.into(),
            domain: None,
            slug: None,
            extra: Map::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Adds a pass-through field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Looks up a pass-through field by name.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Decodes a `getFullCafe` result.
    pub fn from_value(value: Value) -> CoreResult<Self> {
        serde_json::from_value(value).map_err(|e| CoreError::InvalidRecord {
            kind: RecordKind::Cafe,
            reason: e.to_string(),
        })
    }
}

// =============================================================================
// Advertisements & Discounts
// =============================================================================

/// An advertisement attached to a café. The store never looks inside, so any
/// JSON value is accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Advertisement(pub Value);

impl Advertisement {
    /// Field lookup for object-shaped entries; `None` for anything else.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for Advertisement {
    fn from(value: Value) -> Self {
        Advertisement(value)
    }
}

impl From<Map<String, Value>> for Advertisement {
    fn from(fields: Map<String, Value>) -> Self {
        Advertisement(Value::Object(fields))
    }
}

/// A discount attached to a café. The store never looks inside, so any JSON
/// value is accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Discount(pub Value);

impl Discount {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for Discount {
    fn from(value: Value) -> Self {
        Discount(value)
    }
}

impl From<Map<String, Value>> for Discount {
    fn from(fields: Map<String, Value>) -> Self {
        Discount(Value::Object(fields))
    }
}

/// Decodes a `getCafeAdvertisements` / `getCafeDiscounts` result.
///
/// The payload must be a JSON array. Entries are taken as they are.
pub fn decode_list<T: DeserializeOwned>(kind: RecordKind, value: Value) -> CoreResult<Vec<T>> {
    if !value.is_array() {
        return Err(CoreError::InvalidRecord {
            kind,
            reason: format!("expected an array, got {}", json_type_name(&value)),
        });
    }

    serde_json::from_value(value).map_err(|e| CoreError::InvalidRecord {
        kind,
        reason: e.to_string(),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Mutation Payloads
// =============================================================================

/// Payload of the `setAdvertisements` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAdvertisements {
    pub cafe_id: String,
    pub advertisements: Vec<Advertisement>,
}

/// Payload of the `setDiscounts` mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDiscounts {
    pub cafe_id: String,
    pub discounts: Vec<Discount>,
}

// =============================================================================
// Selection Result & Status
// =============================================================================

/// The composite value a completed selection returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub cafe: CafeRecord,
    pub advertisements: Vec<Advertisement>,
    pub discounts: Vec<Discount>,
}

/// What the front-end needs to render a loading state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionStatus {
    /// Currently selected identifier.
    pub cafe_id: Option<String>,

    /// Identifier whose fetches are still in flight.
    pub resolving_id: Option<String>,
}

impl SelectionStatus {
    pub fn is_resolving(&self) -> bool {
        self.resolving_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cafe_record_keeps_unknown_fields() {
        let record = CafeRecord::from_value(json!({
            "id": 7,
            "hash_id": "h7",
            "slug": "corner",
            "title": "Corner Café",
            "tables": [1, 2, 3],
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.slug.as_deref(), Some("corner"));
        assert_eq!(record.domain, None);
        assert_eq!(record.field("title"), Some(&json!("Corner Café")));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["tables"], json!([1, 2, 3]));
        assert!(back.get("domain").is_none());
    }

    #[test]
    fn test_cafe_record_null_identity_fields_are_omitted() {
        let record = CafeRecord::from_value(json!({
            "id": 1,
            "hash_id": "abc",
            "domain": null,
            "title": "T",
        }))
        .unwrap();

        assert_eq!(record.domain, None);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "id": 1, "hash_id": "abc", "title": "T" })
        );
    }

    #[test]
    fn test_cafe_record_requires_core_fields() {
        let err = CafeRecord::from_value(json!({ "id": 1 })).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidRecord {
                kind: RecordKind::Cafe,
                ..
            }
        ));

        assert!(CafeRecord::from_value(json!("abc")).is_err());
        assert!(CafeRecord::from_value(json!({ "id": "1", "hash_id": "x" })).is_err());
    }

    #[test]
    fn test_decode_list() {
        let ads: Vec<Advertisement> =
            decode_list(RecordKind::Advertisements, json!([{ "adId": 1 }])).unwrap();
        assert_eq!(ads.len(), 1);
        assert_eq!(ads[0].get("adId"), Some(&json!(1)));

        let discounts: Vec<Discount> = decode_list(RecordKind::Discounts, json!([])).unwrap();
        assert!(discounts.is_empty());
    }

    #[test]
    fn test_decode_list_rejects_non_arrays() {
        let err = decode_list::<Discount>(RecordKind::Discounts, json!({ "a": 1 })).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid discounts payload: expected an array, got an object"
        );

        assert!(decode_list::<Advertisement>(RecordKind::Advertisements, json!(null)).is_err());
    }

    #[test]
    fn test_decode_list_keeps_scalar_entries() {
        let payload = json!(["banner.png", 1, null, { "adId": 2 }]);
        let ads: Vec<Advertisement> =
            decode_list(RecordKind::Advertisements, payload.clone()).unwrap();

        assert_eq!(ads.len(), 4);
        assert_eq!(ads[0], Advertisement(json!("banner.png")));
        assert_eq!(ads[0].get("adId"), None);
        assert_eq!(ads[3].get("adId"), Some(&json!(2)));
        assert_eq!(serde_json::to_value(&ads).unwrap(), payload);
    }

    #[test]
    fn test_mutation_payload_uses_camel_case() {
        let payload = SetAdvertisements {
            cafe_id: "abc".into(),
            advertisements: vec![],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!({ "cafeId": "abc", "advertisements": [] }));
    }

    #[test]
    fn test_selection_result_shape() {
        let result = SelectionResult {
            cafe: CafeRecord::new(1, "abc"),
            advertisements: vec![Advertisement(json!({ "adId": 1 }))],
            discounts: vec![],
        };

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "cafe": { "id": 1, "hash_id": "abc" },
                "advertisements": [{ "adId": 1 }],
                "discounts": [],
            })
        );
    }
}
