//! # Validation Module
//!
//! Quantity clamping and input validation for the Baiskeli cart.
//!
//! ## Clamp, Don't Reject
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of Bad Input                             │
//! │                                                                         │
//! │  Interaction input (quantity steppers, repeated clicks):               │
//! │  ├── comes from OUR OWN UI controls                                    │
//! │  ├── a "wrong" value means the user hammered a button, not a bug       │
//! │  └── → CLAMP into range, keep going, never surface an error            │
//! │                                                                         │
//! │  Construction input (JSON from the host store):                        │
//! │  ├── crosses a serialization boundary, may be genuinely malformed      │
//! │  └── → typed ValidationError at LineItem::new                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use baiskeli_core::validation::clamp_quantity;
//!
//! // Decrement below 1 floors at 1 - removal is a separate, explicit action
//! assert_eq!(clamp_quantity(0), 1);
//! assert_eq!(clamp_quantity(-5), 1);
//! assert_eq!(clamp_quantity(3), 3);
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Quantity Clamping
// =============================================================================

/// Clamps a requested quantity into the valid range `1..=MAX_ITEM_QUANTITY`.
///
/// ## Rules
/// - Zero or below floors at 1: a decrement can never empty a row, only
///   an explicit remove can
/// - Above the cap clamps to `MAX_ITEM_QUANTITY`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart row: [−] 1 [+]                                                    │
/// │                                                                         │
/// │  User clicks [−] at quantity 1                                          │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  clamp_quantity(0) ← THIS FUNCTION                                      │
/// │       │                                                                 │
/// │       └── returns 1 → host store is asked to set quantity 1 (no-op)     │
/// │                                                                         │
/// │  The row stays; the trash icon is the only path to removal.             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[inline]
pub const fn clamp_quantity(requested: i64) -> i64 {
    if requested < 1 {
        1
    } else if requested > MAX_ITEM_QUANTITY {
        MAX_ITEM_QUANTITY
    } else {
        requested
    }
}

/// Computes the quantity an increment click should request.
///
/// Saturates at `MAX_ITEM_QUANTITY` instead of erroring.
#[inline]
pub const fn clamp_increment(current: i64) -> i64 {
    clamp_quantity(current + 1)
}

/// Computes the quantity a decrement click should request.
///
/// Floors at 1 - see [`clamp_quantity`].
#[inline]
pub const fn clamp_decrement(current: i64) -> i64 {
    clamp_quantity(current - 1)
}

// =============================================================================
// Construction Validators
// =============================================================================

/// Validates a line-item display name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use baiskeli_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Gravel Bike 54cm").is_ok());
/// assert!(validate_item_name("").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (promotional freebies)
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::NegativeAmount {
            field: "unit_price".to_string(),
            value: price.units(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity_floors_at_one() {
        assert_eq!(clamp_quantity(0), 1);
        assert_eq!(clamp_quantity(-1), 1);
        assert_eq!(clamp_quantity(-999), 1);
        assert_eq!(clamp_quantity(1), 1);
    }

    #[test]
    fn test_clamp_quantity_caps_at_max() {
        assert_eq!(clamp_quantity(MAX_ITEM_QUANTITY), MAX_ITEM_QUANTITY);
        assert_eq!(clamp_quantity(MAX_ITEM_QUANTITY + 1), MAX_ITEM_QUANTITY);
        assert_eq!(clamp_quantity(50), 50);
    }

    #[test]
    fn test_clamp_increment() {
        assert_eq!(clamp_increment(1), 2);
        assert_eq!(clamp_increment(MAX_ITEM_QUANTITY), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_clamp_decrement() {
        assert_eq!(clamp_decrement(2), 1);
        // Decrement at the floor stays at the floor, never reaches 0
        assert_eq!(clamp_decrement(1), 1);
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Gravel Bike 54cm").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::new(0)).is_ok());
        assert!(validate_unit_price(Money::new(45_000)).is_ok());
        assert!(validate_unit_price(Money::new(-1)).is_err());
    }
}
