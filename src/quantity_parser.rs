//! # Quantity Parser
//!
//! Turns the quantities users type into recipes into plain `f64` amounts.
//!
//! ## Supported formats
//!
//! - Integers and decimals: "2", "1.25"
//! - Vulgar fractions and mixed numbers: "1/2", "1 1/2"
//! - Unicode fraction glyphs, alone or after a whole number: "½", "2 ½", "1¾"
//!
//! Parsing never fails: anything unreadable or negative counts as zero, so one sloppy
//! line cannot block a whole shopping list from rendering.

use crate::ingredient_model::QuantityInput;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Unicode fraction glyphs and the amount each one stands for
pub const UNICODE_FRACTIONS: [(char, f64); 6] = [
    ('⅛', 0.125),
    ('¼', 0.25),
    ('⅓', 0.333),
    ('½', 0.5),
    ('⅔', 0.667),
    ('¾', 0.75),
];

lazy_static! {
    // Leading unsigned decimal, read the way a lenient float parser reads a prefix
    static ref LEADING_NUMBER: Regex =
        Regex::new(r"^(?:\d+(?:\.\d*)?|\.\d+)").expect("Leading number pattern should be valid");
}

/// Parse a quantity into a finite, non-negative amount
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::quantity_parser::parse_quantity;
///
/// assert_eq!(parse_quantity(&"1 1/2".into()), 1.5);
/// assert_eq!(parse_quantity(&"2 ½".into()), 2.5);
/// assert_eq!(parse_quantity(&0.75.into()), 0.75);
/// assert_eq!(parse_quantity(&"a pinch".into()), 0.0);
/// ```
pub fn parse_quantity(input: &QuantityInput) -> f64 {
    match input {
        QuantityInput::Number(value) => clamp_amount(*value),
        QuantityInput::Text(text) => parse_quantity_str(text),
        QuantityInput::Missing => 0.0,
    }
}

/// Parse a textual quantity
pub fn parse_quantity_str(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let amount = if text.contains('/') {
        parse_slash_fractions(text)
    } else {
        parse_unicode_fractions(text)
    };

    trace!("Parsed quantity '{}' -> {}", text, amount);
    clamp_amount(amount)
}

/// Sum space-separated whole numbers and `numerator/denominator` tokens
fn parse_slash_fractions(text: &str) -> f64 {
    text.split_whitespace()
        .map(|token| {
            if token.contains('/') {
                parse_fraction_token(token)
            } else {
                leading_number(token).unwrap_or(0.0)
            }
        })
        .sum()
}

/// A single `n/d` token; a zero denominator or non-numeric part counts as zero
fn parse_fraction_token(token: &str) -> f64 {
    let mut parts = token.split('/');
    let (Some(numerator), Some(denominator), None) = (parts.next(), parts.next(), parts.next())
    else {
        return 0.0;
    };

    match (leading_number(numerator), leading_number(denominator)) {
        (Some(n), Some(d)) if d != 0.0 => n / d,
        _ => 0.0,
    }
}

/// Sum every unicode fraction glyph, then whatever number remains
fn parse_unicode_fractions(text: &str) -> f64 {
    let mut total = 0.0;
    let mut remaining = String::with_capacity(text.len());

    for c in text.chars() {
        match UNICODE_FRACTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, value)) => total += value,
            None => remaining.push(c),
        }
    }

    total + leading_number(remaining.trim()).unwrap_or(0.0)
}

fn leading_number(text: &str) -> Option<f64> {
    LEADING_NUMBER
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Non-finite and negative amounts count as zero
fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
