//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PRICES ARRIVE AS DISPLAY STRINGS                                       │
//! │                                                                         │
//! │  The shop pages label items "$280", "$1,200", "$12.50".                 │
//! │  Re-parsing those strings for every subtotal is where float drift and  │
//! │  "$1,200" → 1 bugs creep in.                                            │
//! │                                                                         │
//! │  OUR SOLUTION: parse once into integer cents                            │
//! │    "$1,200.50" ──parse──► Money(120050) ──math──► Display "$1,200.50"   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use atelier_core::money::Money;
//!
//! let price: Money = "$280".parse().unwrap();
//! assert_eq!(price.cents(), 28000);
//!
//! let line = price * 2;
//! assert_eq!(line.to_string(), "$560.00");
//! assert_eq!(line.format_compact(), "$560");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::TaxRate;

/// Symbols stripped from the front of a display price.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.price ──► LineItem.unit_price ──► LineItem::line_total
///                                                      │
///                      CartState::subtotal ◄───────────┘
///                              │
///                              ▼
///            CheckoutTotals { shipping, tax, total }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -$5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a display price such as `"$280"`, `"$1,200"` or `"12.50"`.
    ///
    /// ## Rules
    /// - Surrounding whitespace and a leading currency symbol are ignored
    /// - Thousands separators (`,`) are ignored
    /// - At most two decimal places
    /// - Negative prices are rejected
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// assert_eq!(Money::parse("$1,200.5").unwrap().cents(), 120050);
    /// assert!(Money::parse("$abc").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Money, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidPrice {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let digits: String = input
            .trim()
            .trim_start_matches(CURRENCY_SYMBOLS)
            .trim_start()
            .chars()
            .filter(|c| *c != ',')
            .collect();

        if digits.is_empty() {
            return Err(invalid("no amount"));
        }

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (digits.as_str(), ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("no amount"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("must contain only digits"));
        }
        if fraction.len() > 2 {
            return Err(invalid("at most two decimal places"));
        }

        let major: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount too large"))?
        };
        // "5" after the point means 50 cents, not 5
        let minor: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("bad cents"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("bad cents"))?,
        };

        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
            .ok_or_else(|| invalid("amount too large"))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax, rounding half a cent up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    /// use atelier_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(74000); // $740.00
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// assert_eq!(tax.cents(), 5920); // $59.20
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so large carts cannot overflow mid-calculation
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        let clamped = tax_cents.clamp(i64::MIN as i128, i64::MAX as i128);
        Money::from_cents(clamped as i64)
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }

    /// Formats the way the shop pages label prices: thousands separators,
    /// and cents only when there are any.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(28000).format_compact(), "$280");
    /// assert_eq!(Money::from_cents(120050).format_compact(), "$1,200.50");
    /// ```
    pub fn format_compact(&self) -> String {
        if self.cents_part() == 0 {
            format!("{}${}", self.sign(), group_thousands(self.dollars().unsigned_abs()))
        } else {
            self.format_with_symbol("$")
        }
    }

    /// Formats with thousands separators, always showing cents.
    ///
    /// The output parses back to the same amount when `symbol` is one
    /// [`Money::parse`] strips.
    ///
    /// ```rust
    /// use atelier_core::money::Money;
    ///
    /// let price = Money::from_cents(120050);
    /// assert_eq!(price.format_with_symbol("€"), "€1,200.50");
    /// ```
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!(
            "{}{}{}.{:02}",
            self.sign(),
            symbol,
            group_thousands(self.dollars().unsigned_abs()),
            self.cents_part()
        )
    }

    fn sign(&self) -> &'static str {
        if self.0 < 0 {
            "-"
        } else {
            ""
        }
    }
}

/// Inserts `,` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Trait Implementations
// =============================================================================
//
// Arithmetic saturates instead of overflowing: a parsed price can be as large
// as `i64::MAX` cents and cart quantities saturate at `u32::MAX`, and no cart
// operation may panic.

/// Shows money as `$12.34`, always with cents.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
