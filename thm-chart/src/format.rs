//! Number formatting for path data, axis ticks and tooltips.

/// Minus sign used on axis ticks (U+2212).
pub const MINUS: char = '\u{2212}';

/// Compact coordinate for SVG path and attribute values.
///
/// Rounded to three decimals, trailing zeros dropped, never `-0`.
pub fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Axis tick label with as many decimals as the tick step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    let s = format!("{:.*}", decimals, value.abs());
    if value < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("{}{}", MINUS, s)
    } else {
        s
    }
}

/// Temperature as shown in tooltips: shortest decimal form, `NaN` kept.
pub fn format_temperature(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_are_compact() {
        assert_eq!(fmt_coord(12.0), "12");
        assert_eq!(fmt_coord(12.5), "12.5");
        assert_eq!(fmt_coord(1.0 / 3.0), "0.333");
        assert_eq!(fmt_coord(-0.0001), "0");
        assert_eq!(fmt_coord(-4.25), "-4.25");
    }

    #[test]
    fn ticks_use_step_precision() {
        assert_eq!(format_tick(5.0, 5.0), "5");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(-10.0, 5.0), "\u{2212}10");
        assert_eq!(format_tick(-0.0, 5.0), "0");
    }

    #[test]
    fn temperatures_print_shortest_form() {
        assert_eq!(format_temperature(15.0), "15");
        assert_eq!(format_temperature(-1.0), "-1");
        assert_eq!(format_temperature(21.7), "21.7");
        assert_eq!(format_temperature(f64::NAN), "NaN");
    }
}
