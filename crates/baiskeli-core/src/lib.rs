//! # baiskeli-core: Pure Business Logic for the Baiskeli Cart
//!
//! This crate is the **heart** of the Baiskeli storefront cart. It contains
//! all cart business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Baiskeli Cart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront Frontend (host app)                  │   │
//! │  │    Product Pages ──► Cart Drawer UI ──► Checkout Handoff       │   │
//! │  │    owns the canonical item list, applies mutations             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ items + callbacks, every render        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 baiskeli-drawer (engine layer)                  │   │
//! │  │    interaction handlers, render models, scroll lock             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ baiskeli-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │ LineItem  │  │   Money   │  │ Breakdown │  │  clamping │  │   │
//! │  │   │ Shipping  │  │  KSh i64  │  │ Shipping  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO NETWORK • PURE FUNCTIONS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (LineItem, ShippingPolicy)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Subtotal / shipping / total derivation
//! - [`error`] - Validation error types
//! - [`validation`] - Quantity clamping and input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, DOM, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole shillings (i64), never floats
//! 4. **Clamp, Don't Reject**: Interaction paths clamp bad quantities instead of
//!    erroring - the cart is a presentation layer, not a transactional boundary
//!
//! ## Example Usage
//!
//! ```rust
//! use baiskeli_core::money::Money;
//! use baiskeli_core::pricing::price_cart;
//! use baiskeli_core::types::{LineItem, ShippingPolicy};
//!
//! let items = vec![LineItem::new("b-01", "Gravel Bike", "Bikes", Money::new(45_000), 1, None).unwrap()];
//!
//! let breakdown = price_cart(&items, &ShippingPolicy::default());
//!
//! // KSh 45,000 clears the KSh 5,000 free-shipping threshold
//! assert_eq!(breakdown.subtotal, Money::new(45_000));
//! assert!(breakdown.shipping_fee.is_zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use baiskeli_core::Money` instead of
// `use baiskeli_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use pricing::{price_cart, PricingBreakdown};
pub use types::{LineItem, ShippingPolicy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal above which shipping is free, in whole shillings.
///
/// ## Business Rule
/// The comparison is strict: a subtotal of exactly 5 000 still pays the
/// flat fee. Only subtotals strictly greater qualify.
pub const FREE_SHIPPING_THRESHOLD_UNITS: i64 = 5_000;

/// Flat shipping fee charged below the threshold, in whole shillings.
pub const FLAT_SHIPPING_FEE_UNITS: i64 = 300;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents runaway quantities from repeated increment clicks
/// (a storefront order of 99 of anything already warrants a phone call).
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Fallback asset shown when a line item carries no image reference.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder-product.webp";
