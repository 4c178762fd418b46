//! Input validation helpers
//!
//! Centralized text length limits and the checks the menu store runs on
//! form input before anything is stored.

use crate::menu::MenuError;
use rust_decimal::prelude::*;
use shared::models::Course;

// ── Text length limits ──────────────────────────────────────────────

/// Dish names
pub const MAX_NAME_LEN: usize = 200;

/// Dish descriptions
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// Money is kept at 2 decimal places
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Highest accepted price (1,000,000.00). Keeps per-course sums far from
/// `Decimal::MAX` and every stored price representable at 2 places.
pub const MAX_PRICE: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, PRICE_DECIMAL_PLACES);

const MISSING_FIELDS: &str = "Please fill in all fields.";
const INVALID_PRICE: &str = "Please enter a valid price.";

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty after trimming and within
/// the length limit. Returns the trimmed text.
pub fn validate_required_text<'a>(
    value: &'a str,
    field: &'static str,
    max_len: usize,
) -> Result<&'a str, MenuError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(MenuError::validation(field, MISSING_FIELDS));
    }
    let len = trimmed.chars().count();
    if len > max_len {
        return Err(MenuError::validation(
            field,
            format!("{field} is too long ({len} chars, max {max_len})"),
        ));
    }
    Ok(trimmed)
}

/// True for `[+-]digits[.digits][(e|E)[+-]digits]` with at least one digit
/// in the mantissa. Rejects separators such as `_` or `,`.
fn is_numeric_literal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) || int_part.len() + frac_part.len() == 0 {
        return false;
    }

    match exponent {
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            !digits.is_empty() && all_digits(digits)
        }
        None => true,
    }
}

/// Parse a price typed into a form.
///
/// Accepts plain (`8.50`) and scientific (`1.2e1`) notation. The value is
/// rounded half away from zero to cents, must stay strictly positive and
/// may not exceed [`MAX_PRICE`].
pub fn parse_price(raw: &str) -> Result<Decimal, MenuError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MenuError::validation("price", MISSING_FIELDS));
    }
    if !is_numeric_literal(trimmed) {
        return Err(MenuError::validation("price", INVALID_PRICE));
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| MenuError::validation("price", INVALID_PRICE))?;

    let mut value =
        value.round_dp_with_strategy(PRICE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    if value <= Decimal::ZERO {
        return Err(MenuError::validation("price", INVALID_PRICE));
    }
    if value > MAX_PRICE {
        return Err(MenuError::validation(
            "price",
            format!("Price must not exceed {MAX_PRICE}."),
        ));
    }
    value.rescale(PRICE_DECIMAL_PLACES);
    Ok(value)
}

/// Parse a course label; anything outside the fixed set is rejected.
pub fn parse_course(raw: &str) -> Result<Course, MenuError> {
    if raw.trim().is_empty() {
        return Err(MenuError::validation("course", MISSING_FIELDS));
    }
    raw.parse::<Course>()
        .map_err(|e| MenuError::validation("course", format!("Please choose a course ({e})")))
}
