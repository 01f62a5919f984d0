//! FILENAME: value/src/number.rs
//! PURPOSE: Number <-> string conversion with template-language rules.
//! CONTEXT: Grouping keys and interpolated values must stringify numbers
//! exactly the way the view layer does (`1`, not `1.0`; `1e+21`, not
//! `1e21`), and text must parse back with the same leniency.

/// Formats a number the way `String(n)` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let abs_value = value.abs();

    // Exponent form outside [1e-6, 1e21), with an explicit sign on the exponent
    if abs_value >= 1e21 || abs_value < 1e-6 {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    // f64's Display is already shortest round-trip without a trailing ".0"
    format!("{}", value)
}

/// Parses text the way `Number(text)` does.
///
/// Surrounding whitespace is ignored, empty text is 0, `Infinity` and the
/// `0x`/`0o`/`0b` prefixes are understood, anything else unparsable is NaN.
pub fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            return parse_radix_digits(digits, radix);
        }
    }

    // Rust's float parser also accepts "inf"/"nan" spellings; reject them here
    let is_decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !is_decimal {
        return f64::NAN;
    }

    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Reads already validated digits in `radix`. Up to 128 bits the value is
/// rounded once; wider literals are folded digit by digit.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if let Ok(n) = u128::from_str_radix(digits, radix) {
        return n as f64;
    }
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_integers_without_fraction() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_exponent_forms() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2e30), "-2e+30");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  -3.5 "), -3.5);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_parse_prefixed_and_infinity() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_prefixed_wider_than_64_bits() {
        assert_eq!(parse_number("0x10000000000000000"), 18446744073709551616.0);
        let wide = format!("0x1{}", "0".repeat(40));
        assert_eq!(parse_number(&wide), 2f64.powi(160));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("0x").is_nan());
        assert!(parse_number("0x+1").is_nan());
        assert!(parse_number("1e").is_nan());
    }
}
