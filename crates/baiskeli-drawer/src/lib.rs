//! # baiskeli-drawer: The Cart Drawer Engine
//!
//! The embeddable engine behind the storefront's slide-out cart drawer.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One Interaction, End to End                        │
//! │                                                                         │
//! │  Host store (canonical state)                                          │
//! │      │  items snapshot + CartActions, every render                     │
//! │      ▼                                                                  │
//! │  CartDrawer::increment("t-700")                                        │
//! │      │  look up current quantity in snapshot                           │
//! │      │  clamp: current + 1, capped                                     │
//! │      ▼                                                                  │
//! │  actions.update_quantity("t-700", 3)   ← host applies it              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  next render: fresh snapshot in, DrawerView out                        │
//! │                                                                         │
//! │  The engine never mutates. It computes, clamps, and asks.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`actions`] - the dependency-injected mutation contract
//! - [`engine`] - `CartDrawer`: visibility state machine + handlers
//! - [`scroll_lock`] - scoped scroll-suppression resource
//! - [`format`] - `MoneyFormatter` trait + Kenyan-shilling formatter
//! - [`view`] - serializable render models for the frontend

// =============================================================================
// Module Declarations
// =============================================================================

pub mod actions;
pub mod engine;
pub mod format;
pub mod scroll_lock;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use actions::CartActions;
pub use engine::{CartDrawer, Visibility};
pub use format::{KenyanShillingFormatter, MoneyFormatter};
pub use scroll_lock::{ScrollHost, ScrollLock};
pub use view::{DrawerView, ItemRow, SummaryView};
