//! # Validation Module
//!
//! Input validation for values that reach the store from configuration.
//!
//! Mutations deliberately skip validation: whatever the remote service
//! returned is cached as-is. Only values a human types into a config file
//! or environment variable are checked here.
//!
//! ## Usage
//! ```rust
//! use cafe_core::validation::validate_locale;
//!
//! assert!(validate_locale("en").is_ok());
//! assert!(validate_locale("pt-BR").is_ok());
//! assert!(validate_locale("").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_LOCALE_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a locale tag passed through to the remote service.
///
/// ## Rules
/// - Must not be empty
/// - At most 35 characters (longest practical BCP 47 tag)
/// - ASCII alphanumerics, `-` and `_` only
pub fn validate_locale(locale: &str) -> ValidationResult<()> {
    let locale = locale.trim();

    if locale.is_empty() {
        return Err(ValidationError::Required {
            field: "locale".to_string(),
        });
    }

    if locale.len() > MAX_LOCALE_LEN {
        return Err(ValidationError::TooLong {
            field: "locale".to_string(),
            max: MAX_LOCALE_LEN,
        });
    }

    if let Some(c) = locale
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "locale".to_string(),
            reason: format!("unexpected character '{}'", c),
        });
    }

    Ok(())
}
