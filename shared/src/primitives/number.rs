/// Renders a number the way the scene host reads it back.
///
/// Follows the usual JSON/JS conventions: integral values print without a
/// fractional part, `-0` prints as `0`, non-finite values print as
/// `Infinity`, `-Infinity` and `NaN`, and very large or very small
/// magnitudes switch to exponent form (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        };
    }

    format!("{}", value)
}

/// Inverse of [`format_number`]
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        "NaN" => Some(f64::NAN),
        _ => text.trim().parse::<f64>().ok(),
    }
}
