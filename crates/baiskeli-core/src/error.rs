//! # Error Types
//!
//! Validation error types for baiskeli-core.
//!
//! ## Why So Few Errors?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Failure Taxonomy                                  │
//! │                                                                         │
//! │  Interaction paths (increment, decrement, remove):                     │
//! │  ├── Invalid quantity  → CLAMPED, never an error                       │
//! │  ├── Unknown item id   → silent no-op, never an error                  │
//! │  └── Missing image     → placeholder fallback, never an error          │
//! │                                                                         │
//! │  Construction paths (LineItem::new from host JSON):                    │
//! │  └── ValidationError   → the ONLY fallible surface in this crate       │
//! │                                                                         │
//! │  The cart is a presentation layer, not a transactional boundary:       │
//! │  nothing here propagates errors upward during normal interaction.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for line-item construction.
///
/// Host data crosses a serialization boundary before reaching this crate,
/// so the constructors re-check what the type system cannot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A monetary value was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: String, value: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NegativeAmount {
            field: "unit_price".to_string(),
            value: -100,
        };
        assert_eq!(err.to_string(), "unit_price must not be negative (got -100)");
    }
}
