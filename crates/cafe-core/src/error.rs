//! # Error Types
//!
//! Domain-specific error types for cafe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cafe-core errors (this file)                                          │
//! │  ├── CoreError        - Payload decoding failures                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  cafe-store errors (separate crate)                                    │
//! │  ├── ClientError      - Whatever the remote capability rejected with   │
//! │  └── StoreError       - What the caller of select_cafe sees            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Caller               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Getters and mutations never fail. Errors only arise when turning an
//! untyped remote payload into a record, or when validating configuration.

use thiserror::Error;

use crate::types::RecordKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core state logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A remote payload did not have the expected shape.
    ///
    /// ## When This Occurs
    /// - `getFullCafe` returned something without a numeric `id` or string `hash_id`
    /// - `getCafeAdvertisements` / `getCafeDiscounts` returned a non-array
    /// - An advertisement or discount entry is not a JSON object
    #[error("Invalid {kind} payload: {reason}")]
    InvalidRecord { kind: RecordKind, reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidRecord {
            kind: RecordKind::Cafe,
            reason: "missing field `hash_id`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid cafe payload: missing field `hash_id`"
        );

        let err = ValidationError::TooLong {
            field: "locale".to_string(),
            max: 35,
        };
        assert_eq!(err.to_string(), "locale must be at most 35 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "locale".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
