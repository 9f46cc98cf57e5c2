//! # Currency Formatting
//!
//! Turns `Money` into display strings for the drawer.
//!
//! ## Why a Trait?
//! The storefront's display locale is a host concern: production uses the
//! Kenyan-shilling formatter below, tests can inject a deterministic stub,
//! and a future host could swap in one backed by real locale data. The
//! engine only depends on `format(Money) -> String`.
//!
//! ## Observed Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   Money::new(0)       →  "KSh 0"                                        │
//! │   Money::new(450)     →  "KSh 450"                                      │
//! │   Money::new(1_800)   →  "KSh 1,800"                                    │
//! │   Money::new(50_000)  →  "KSh 50,000"                                   │
//! │                                                                         │
//! │   Zero fractional digits - the shilling has no displayed subdivision   │
//! │   in this storefront. Comma thousands grouping.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use baiskeli_core::Money;

// =============================================================================
// Formatter Trait
// =============================================================================

/// Renders a monetary amount for display.
///
/// Implementations must be pure: the same amount always yields the same
/// string, independent of call order or ambient locale state.
pub trait MoneyFormatter {
    fn format(&self, amount: Money) -> String;
}

// =============================================================================
// Kenyan Shilling Formatter
// =============================================================================

/// The storefront's default formatter: `KSh 1,234,567`, zero decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct KenyanShillingFormatter;

impl MoneyFormatter for KenyanShillingFormatter {
    fn format(&self, amount: Money) -> String {
        format!("KSh {}", group_thousands(amount.units()))
    }
}

/// Inserts comma separators every three digits, preserving a leading sign.
fn group_thousands(units: i64) -> String {
    let negative = units < 0;
    let digits = units.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        // A comma goes before every remaining-multiple-of-three boundary
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        let fmt = KenyanShillingFormatter;
        assert_eq!(fmt.format(Money::new(0)), "KSh 0");
        assert_eq!(fmt.format(Money::new(7)), "KSh 7");
        assert_eq!(fmt.format(Money::new(450)), "KSh 450");
    }

    #[test]
    fn test_format_grouped_amounts() {
        let fmt = KenyanShillingFormatter;
        assert_eq!(fmt.format(Money::new(1_800)), "KSh 1,800");
        assert_eq!(fmt.format(Money::new(50_000)), "KSh 50,000");
        assert_eq!(fmt.format(Money::new(1_234_567)), "KSh 1,234,567");
    }

    #[test]
    fn test_format_boundary_widths() {
        let fmt = KenyanShillingFormatter;
        assert_eq!(fmt.format(Money::new(999)), "KSh 999");
        assert_eq!(fmt.format(Money::new(1_000)), "KSh 1,000");
        assert_eq!(fmt.format(Money::new(999_999)), "KSh 999,999");
        assert_eq!(fmt.format(Money::new(1_000_000)), "KSh 1,000,000");
    }

    #[test]
    fn test_format_is_pure() {
        let fmt = KenyanShillingFormatter;
        let a = fmt.format(Money::new(2_100));
        let b = fmt.format(Money::new(2_100));
        assert_eq!(a, b);
    }

    #[test]
    fn test_group_thousands_negative() {
        // Negative money never reaches the UI, but the helper must not
        // garble a sign if it ever does
        assert_eq!(group_thousands(-1_800), "-1,800");
    }
}
