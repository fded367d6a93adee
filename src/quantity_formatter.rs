//! # Quantity Formatter
//!
//! Renders amounts the way recipes print them, preferring the common cooking
//! fractions over decimals ("1 ½" rather than "1.5").

use crate::ingredient_model::QuantityInput;
use crate::quantity_parser::parse_quantity;

/// Maximum distance between a decimal part and a fraction for the glyph to be used
pub const FRACTION_TOLERANCE: f64 = 0.02;

/// Decimal parts rendered as glyphs, checked in order
const DISPLAY_FRACTIONS: [(f64, &str); 8] = [
    (0.125, "⅛"),
    (0.25, "¼"),
    (0.33, "⅓"),
    (0.333, "⅓"),
    (0.5, "½"),
    (0.67, "⅔"),
    (0.667, "⅔"),
    (0.75, "¾"),
];

/// Round to two decimal places
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    // too large to carry hundredths
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / 100.0;
    // avoid rendering "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a quantity for display
///
/// # Examples
///
/// ```rust
/// use ingredient_consolidation::quantity_formatter::format_quantity;
///
/// assert_eq!(format_quantity(&0.5.into()), "½");
/// assert_eq!(format_quantity(&"1 1/2".into()), "1 ½");
/// assert_eq!(format_quantity(&2.0.into()), "2");
/// assert_eq!(format_quantity(&1.9.into()), "1.9");
/// ```
pub fn format_quantity(quantity: &QuantityInput) -> String {
    format_amount(parse_quantity(quantity))
}

/// [`format_quantity`] for an already-parsed amount
pub fn format_amount(amount: f64) -> String {
    let rounded = round_to_hundredths(amount);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let whole = rounded.abs().floor();
    let decimal = rounded.abs() - whole;

    let glyph = DISPLAY_FRACTIONS
        .iter()
        .find(|(value, _)| (decimal - value).abs() < FRACTION_TOLERANCE)
        .map(|(_, glyph)| *glyph);

    match glyph {
        Some(glyph) if whole == 0.0 => format!("{}{}", sign, glyph),
        Some(glyph) => format!("{}{} {}", sign, whole, glyph),
        None => format!("{}", rounded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(12.0), "12");
    }

    #[test]
    fn test_fraction_glyphs() {
        assert_eq!(format_amount(0.5), "½");
        assert_eq!(format_amount(1.5), "1 ½");
        assert_eq!(format_amount(0.25), "¼");
        assert_eq!(format_amount(2.75), "2 ¾");
        assert_eq!(format_amount(0.125), "⅛");
        assert_eq!(format_amount(1.0 / 3.0), "⅓");
        assert_eq!(format_amount(2.0 / 3.0), "⅔");
        assert_eq!(format_amount(3.0 + 2.0 / 3.0), "3 ⅔");
    }

    #[test]
    fn test_near_fractions_snap() {
        assert_eq!(format_amount(0.51), "½");
        assert_eq!(format_amount(1.26), "1 ¼");
    }

    #[test]
    fn test_plain_decimals() {
        assert_eq!(format_amount(1.9), "1.9");
        assert_eq!(format_amount(0.4), "0.4");
        assert_eq!(format_amount(2.437), "2.44");
        assert_eq!(format_amount(2.123), "2 ⅛");
        assert_eq!(format_amount(0.05), "0.05");
    }

    #[test]
    fn test_text_input_is_parsed_first() {
        assert_eq!(format_quantity(&"3/4".into()), "¾");
        assert_eq!(format_quantity(&"2 ½".into()), "2 ½");
        assert_eq!(format_quantity(&"nonsense".into()), "0");
        assert_eq!(format_quantity(&QuantityInput::Missing), "0");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_hundredths(1.005_1), 1.01);
        assert_eq!(round_to_hundredths(2.0), 2.0);
        assert_eq!(round_to_hundredths(-0.001), 0.0);
        assert_eq!(round_to_hundredths(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_negative_amounts_keep_their_magnitude() {
        assert_eq!(format_amount(-1.5), "-1 ½");
        assert_eq!(format_amount(-0.25), "-¼");
        assert_eq!(format_amount(-2.4), "-2.4");
    }

    #[test]
    fn test_huge_amounts_stay_finite() {
        let text = format_amount(f64::MAX);
        assert!(!text.contains("inf"));
        assert!(!text.contains('.'));
    }
}
