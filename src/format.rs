use std::sync::Arc;

use crate::ticks::GRAVITY;

/// A function which formats a tick value into a label string.
pub type TickFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Displacement formatter: scales into m / mm / µm, five significant digits.
pub fn displacement_formatter() -> TickFormatter {
    Arc::new(displacement_label)
}

/// Acceleration formatter: four significant digits with a " m/s²" suffix.
pub fn acceleration_formatter() -> TickFormatter {
    Arc::new(acceleration_label)
}

/// Gravity formatter: acceleration rescaled into multiples of g (9.81 m/s²).
pub fn gravity_formatter() -> TickFormatter {
    Arc::new(gravity_label)
}

/// Fallback formatter for axes without a unit policy: two significant digits.
pub fn default_formatter() -> TickFormatter {
    Arc::new(|v| format_sig(v, 2))
}

/// Format a displacement in meters, auto-scaled to a readable unit.
///
/// Zero maps to a bare `"0"`; magnitudes below 1e-3 are shown in µm, below
/// 1.0 in mm, otherwise in m. The sign is preserved.
pub fn displacement_label(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    let (scaled, unit) = if abs < 1e-3 {
        (value * 1e6, "µm")
    } else if abs < 1.0 {
        (value * 1e3, "mm")
    } else {
        (value, "m")
    };
    format!("{} {}", format_sig(scaled, 5), unit)
}

/// Format an acceleration in m/s².
///
/// Magnitudes under 1e-15 render `"0"`; values within 1e-9 of an integer are
/// rounded to it before formatting with four significant digits.
pub fn acceleration_label(value: f64) -> String {
    match unit_value(value) {
        None => "0".to_string(),
        Some(v) => format!("{} m/s²", format_sig(v, 4)),
    }
}

/// Format an acceleration as a multiple of standard gravity.
pub fn gravity_label(value: f64) -> String {
    match unit_value(value / GRAVITY) {
        None => "0".to_string(),
        Some(v) => format!("{} g", format_sig(v, 4)),
    }
}

/// Snap near-integers; `None` signals the value renders as a bare zero.
fn unit_value(value: f64) -> Option<f64> {
    if value.abs() < 1e-15 {
        return None;
    }
    if (value - value.round()).abs() < 1e-9 {
        Some(value.round())
    } else {
        Some(value)
    }
}

/// Render with `sig` significant digits, trailing zeros trimmed.
///
/// Mirrors C's `%g`: fixed notation while the decimal exponent lies in
/// `[-4, sig)`, scientific (`1.234e+04` style) outside it.
pub fn format_sig(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sig = sig.max(1);
    let sci = format!("{:.*e}", sig - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    if exp < -4 || exp >= sig as i32 {
        format!(
            "{}e{}{:02}",
            trim_trailing_zeros(mantissa),
            if exp < 0 { '-' } else { '+' },
            exp.abs()
        )
    } else {
        let decimals = (sig as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, value))
    }
}

fn trim_trailing_zeros(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displacement_zero() {
        assert_eq!(displacement_label(0.0), "0");
    }

    #[test]
    fn displacement_micrometers() {
        assert_eq!(displacement_label(1e-6), "1 µm");
        assert_eq!(displacement_label(5.5e-5), "55 µm");
        assert_eq!(displacement_label(9.99e-4), "999 µm");
    }

    #[test]
    fn displacement_millimeters() {
        assert_eq!(displacement_label(1e-3), "1 mm");
        assert_eq!(displacement_label(0.5), "500 mm");
        assert_eq!(displacement_label(0.999), "999 mm");
    }

    #[test]
    fn displacement_meters() {
        assert_eq!(displacement_label(1.0), "1 m");
        assert_eq!(displacement_label(100.0), "100 m");
    }

    #[test]
    fn displacement_preserves_sign() {
        assert_eq!(displacement_label(-1e-6), "-1 µm");
        assert_eq!(displacement_label(-0.5), "-500 mm");
        assert_eq!(displacement_label(-2.0), "-2 m");
    }

    #[test]
    fn acceleration_zero_and_near_zero() {
        assert_eq!(acceleration_label(0.0), "0");
        assert_eq!(acceleration_label(1e-16), "0");
    }

    #[test]
    fn acceleration_snaps_near_integers() {
        assert_eq!(acceleration_label(10.0), "10 m/s²");
        assert_eq!(acceleration_label(10.0000000001), "10 m/s²");
    }

    #[test]
    fn acceleration_general_values() {
        assert_eq!(acceleration_label(9.81), "9.81 m/s²");
        assert_eq!(acceleration_label(12345.0), "1.234e+04 m/s²");
    }

    #[test]
    fn gravity_multiples() {
        assert_eq!(gravity_label(9.81), "1 g");
        assert_eq!(gravity_label(19.62), "2 g");
        assert_eq!(gravity_label(4.905), "0.5 g");
        assert_eq!(gravity_label(98.1), "10 g");
        assert_eq!(gravity_label(0.0), "0");
        assert_eq!(gravity_label(9.81 + 1e-10), "1 g");
    }

    #[test]
    fn significant_digit_rendering() {
        assert_eq!(format_sig(0.0, 4), "0");
        assert_eq!(format_sig(9999.0, 4), "9999");
        assert_eq!(format_sig(99999.0, 4), "1e+05");
        assert_eq!(format_sig(0.0009999, 2), "0.001");
        assert_eq!(format_sig(1.5e-7, 3), "1.5e-07");
        assert_eq!(format_sig(-2.5, 3), "-2.5");
    }
}
