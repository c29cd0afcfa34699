//! Coercion of raw form text into calculator input.
//!
//! Nothing here can fail: text that does not describe a usable quantity
//! becomes 0, and keys that do not name a known choice become `None`.

use serde::Deserialize;

use crate::factors::{Choice, MeatTier, ShoppingTier, TransportMode};

/// Untyped snapshot of the form, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawInput {
    pub transport: String,
    pub weekly_distance: String,
    pub monthly_electricity: String,
    pub monthly_gas: String,
    pub shopping: String,
    pub meat: String,
    pub daily_hvac_hours: String,
}

/// Typed, normalized input for one calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserInput {
    pub transport: Option<TransportMode>,
    /// km per week
    pub weekly_distance: f64,
    /// kWh per month
    pub monthly_electricity: f64,
    /// m3 per month
    pub monthly_gas: f64,
    pub shopping: Option<ShoppingTier>,
    pub meat: Option<MeatTier>,
    /// hours per day
    pub daily_hvac_hours: f64,
}

impl UserInput {
    /// Builds a normalized input from raw form text.
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            transport: TransportMode::from_key(&raw.transport),
            weekly_distance: coerce_quantity(&raw.weekly_distance),
            monthly_electricity: coerce_quantity(&raw.monthly_electricity),
            monthly_gas: coerce_quantity(&raw.monthly_gas),
            shopping: ShoppingTier::from_key(&raw.shopping),
            meat: MeatTier::from_key(&raw.meat),
            daily_hvac_hours: coerce_quantity(&raw.daily_hvac_hours),
        }
    }
}

/// Reads a non-negative quantity from user text.
///
/// Parses the longest leading decimal number (so "12km" reads as 12).
/// Empty, non-numeric, negative or non-finite text reads as 0.
pub fn coerce_quantity(text: &str) -> f64 {
    let text = text.trim_start();
    let prefix = &text[..numeric_prefix_len(text)];

    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Length in bytes of the leading `[+-]digits[.digits][e[+-]digits]` run.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0;
    }

    // Exponent only counts when it has at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    end
}
