//! Money arithmetic helpers.
//!
//! Stored records come from several historical schemas, so numeric fields may
//! arrive as JSON numbers, numeric strings, or be missing entirely. Coercion
//! here never fails: anything unusable degrades to the caller's default.
//!
//! Monetary sums and rounding are done in [`Decimal`], converted from the
//! shortest round-trip string form of each float so that `0.1 + 0.2` sums to
//! exactly `0.3`.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

/// Number of decimal places used for every displayed or stored amount
pub const MONEY_SCALE: u32 = 2;

/// Coerce an arbitrary JSON value to a finite float.
///
/// Numbers pass through, strings are parsed after trimming surrounding
/// whitespace, booleans count as `1`/`0`. Everything else (null, arrays,
/// objects, unparseable or non-finite values) yields `default`.
pub fn safe_number(value: &Value, default: f64) -> f64 {
    try_number(value).unwrap_or(default)
}

/// Like [`safe_number`] but for a field that may be absent.
pub fn safe_number_opt(value: Option<&Value>, default: f64) -> f64 {
    value.map_or(default, |v| safe_number(v, default))
}

/// Coercion that reports failure instead of substituting a default.
pub fn try_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    };

    parsed.filter(|v| v.is_finite())
}

/// Convert a float to an exact decimal through its shortest string form.
///
/// Values outside the decimal range collapse to zero.
pub fn to_exact_decimal(value: f64) -> Decimal {
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64(value))
        .unwrap_or(Decimal::ZERO)
}

/// Nearest float to an exact decimal, for storing amounts as JSON numbers.
pub fn to_float(amount: Decimal) -> f64 {
    amount.to_string().parse().unwrap_or(0.0)
}

/// Round to two decimal places, midpoints away from zero.
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount * percent / 100`, rounded half-up to two places.
///
/// `None` when the product leaves the decimal range.
pub fn percent_of(amount: Decimal, percent: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(percent)?
        .checked_div(Decimal::ONE_HUNDRED)
        .map(round_half_up)
}

/// Sum of amounts, `None` on overflow.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

/// Format a decimal amount with exactly two decimal places.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_half_up(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

/// Format a float amount with exactly two decimal places, using the same
/// rounding rule as the totals.
pub fn format_float(amount: f64) -> String {
    format_amount(to_exact_decimal(amount))
}
