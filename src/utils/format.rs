//! Number formatting helpers

/// Format a number the way it reads in a label: integral values print
/// without a fractional part, very large and very small magnitudes use
/// exponent notation (`1e+21`, `1e-7`).
pub fn format_number(value: f64) -> String {
    // -0.0 prints as "0"
    let value = value + 0.0;
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        exponent_form(value)
    } else {
        value.to_string()
    }
}

fn exponent_form(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}
