//! # Domain Types
//!
//! Core domain types for the Baiskeli cart.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌──────────────────────────┐           │
//! │  │      LineItem       │        │      ShippingPolicy      │           │
//! │  │  ─────────────────  │        │  ──────────────────────  │           │
//! │  │  id (join key)      │        │  free_shipping_threshold │           │
//! │  │  name               │        │  flat_fee                │           │
//! │  │  category           │        │                          │           │
//! │  │  unit_price (KSh)   │        │  Default: 5,000 / 300    │           │
//! │  │  quantity (≥ 1)     │        └──────────────────────────┘           │
//! │  │  image_ref (opt)    │                                               │
//! │  └─────────────────────┘                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership Model
//! The host storefront owns the canonical `Vec<LineItem>`; this crate only
//! ever sees borrowed snapshots of it. Items are created by the host's
//! "add to cart" flow and destroyed by an explicit remove request routed
//! through the drawer's callback contract.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationResult;
use crate::money::Money;
use crate::validation::{clamp_quantity, validate_item_name, validate_unit_price};
use crate::PLACEHOLDER_IMAGE;

// =============================================================================
// Line Item
// =============================================================================

/// A single product entry in the cart.
///
/// ## Invariants
/// - `id` is unique within a cart (the host's join key for mutations)
/// - `quantity` is always ≥ 1; a quantity-0 item has no representation —
///   removal is the only way an item leaves the cart
/// - `unit_price` is non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier, unique within the cart.
    pub id: String,

    /// Display name shown in the drawer row.
    pub name: String,

    /// Display classification ("Bikes", "Accessories", ...).
    pub category: String,

    /// Price per unit in whole shillings.
    pub unit_price: Money,

    /// Quantity in cart, always ≥ 1.
    pub quantity: i64,

    /// Optional display asset reference. `None` renders the placeholder.
    pub image_ref: Option<String>,
}

impl LineItem {
    /// Creates a validated line item.
    ///
    /// ## Behavior
    /// - `name` must be non-empty (trimmed) and at most 200 characters
    /// - `unit_price` must be non-negative
    /// - `quantity` is clamped into `1..=MAX_ITEM_QUANTITY`, never rejected
    ///
    /// ## Example
    /// ```rust
    /// use baiskeli_core::money::Money;
    /// use baiskeli_core::types::LineItem;
    ///
    /// let item = LineItem::new("t-700", "Inner Tube 700c", "Spares", Money::new(2_500), 2, None).unwrap();
    /// assert_eq!(item.line_total(), Money::new(5_000));
    ///
    /// // A zero quantity clamps to 1 rather than erroring
    /// let one = LineItem::new("t-700", "Inner Tube 700c", "Spares", Money::new(2_500), 0, None).unwrap();
    /// assert_eq!(one.quantity, 1);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        image_ref: Option<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_unit_price(unit_price)?;

        Ok(LineItem {
            id: id.into(),
            name,
            category: category.into(),
            unit_price,
            quantity: clamp_quantity(quantity),
            image_ref,
        })
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// Returns the display asset reference, falling back to the placeholder.
    ///
    /// A missing image is never fatal; the drawer always has something
    /// to render.
    pub fn image(&self) -> &str {
        self.image_ref.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

// =============================================================================
// Shipping Policy
// =============================================================================

/// Configuration for the shipping-fee step function.
///
/// ## Business Rule
/// ```text
/// subtotal >  free_shipping_threshold  →  shipping is FREE
/// subtotal <= free_shipping_threshold  →  flat_fee applies
/// ```
/// The comparison is strict `>`: a subtotal of exactly KSh 5,000 still
/// pays the flat fee. This mirrors observed storefront behavior and is
/// locked in by a boundary test in [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    /// Subtotal above which shipping is waived.
    pub free_shipping_threshold: Money,

    /// Flat fee charged at or below the threshold.
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy {
            free_shipping_threshold: Money::new(crate::FREE_SHIPPING_THRESHOLD_UNITS),
            flat_fee: Money::new(crate::FLAT_SHIPPING_FEE_UNITS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;

    #[test]
    fn test_line_item_new() {
        let item = LineItem::new(
            "b-01",
            "Gravel Bike",
            "Bikes",
            Money::new(45_000),
            1,
            Some("/images/gravel.webp".to_string()),
        )
        .unwrap();

        assert_eq!(item.line_total(), Money::new(45_000));
        assert_eq!(item.image(), "/images/gravel.webp");
    }

    #[test]
    fn test_line_item_clamps_quantity() {
        let item =
            LineItem::new("t-700", "Inner Tube 700c", "Spares", Money::new(2_500), -3, None)
                .unwrap();
        assert_eq!(item.quantity, 1);

        let capped =
            LineItem::new("t-700", "Inner Tube 700c", "Spares", Money::new(2_500), 500, None)
                .unwrap();
        assert_eq!(capped.quantity, crate::MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_line_item_rejects_empty_name() {
        let err = LineItem::new("x", "   ", "Spares", Money::new(100), 1, None).unwrap_err();
        assert!(matches!(err, ValidationError::Required { .. }));
    }

    #[test]
    fn test_line_item_rejects_negative_price() {
        let err = LineItem::new("x", "Bell", "Accessories", Money::new(-50), 1, None).unwrap_err();
        assert!(matches!(err, ValidationError::NegativeAmount { .. }));
    }

    #[test]
    fn test_image_placeholder_fallback() {
        let item = LineItem::new("x", "Bell", "Accessories", Money::new(450), 1, None).unwrap();
        assert_eq!(item.image(), crate::PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_shipping_policy_default() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.free_shipping_threshold, Money::new(5_000));
        assert_eq!(policy.flat_fee, Money::new(300));
    }

    #[test]
    fn test_line_item_serde_camel_case() {
        let item = LineItem::new("b-01", "Gravel Bike", "Bikes", Money::new(45_000), 1, None)
            .unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"unitPrice\":45000"));
        assert!(json.contains("\"imageRef\":null"));
    }
}
