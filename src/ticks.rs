use std::sync::Arc;

/// A function which generates candidate tick values over an axis value range.
///
/// Takes a range (min, max) and returns the values at which grid lines are
/// placed. Candidates slightly outside the range are acceptable; viewport
/// clipping discards lines that never enter the view.
pub type TickProducer = Arc<dyn Fn(f64, f64) -> Vec<f64> + Send + Sync>;

/// Upper bound on candidate ticks from the stock locators.
pub const DEFAULT_NUMTICKS: usize = 15;

/// Standard gravity in m/s², the unit of the gravity locator/formatter pair.
pub const GRAVITY: f64 = 9.81;

/// Log-scale "nice number" locator: powers of ten covering the range.
pub fn log_ticks(numticks: usize) -> TickProducer {
    Arc::new(move |vmin, vmax| decade_tick_values(vmin, vmax, numticks))
}

/// Minor companion to [`log_ticks`]: mantissas 2..=9 within each decade.
pub fn log_subdecade_ticks() -> TickProducer {
    Arc::new(|vmin, vmax| subdecade_tick_values(vmin, vmax))
}

/// Locator for ticks at powers of ten of `g` (9.81 m/s²).
///
/// Rejects non-positive ranges with an empty set; otherwise rescales the
/// range into gravity units, delegates to the decade locator and scales the
/// results back.
pub fn gravity_ticks(numticks: usize) -> TickProducer {
    Arc::new(move |vmin, vmax| {
        if vmin <= 0.0 || vmax <= 0.0 {
            return Vec::new();
        }
        decade_tick_values(vmin / GRAVITY, vmax / GRAVITY, numticks)
            .into_iter()
            .map(|v| v * GRAVITY)
            .collect()
    })
}

/// Powers of ten spanning `[vmin, vmax]`, endpoints rounded outward to whole
/// decades so boundary-touching lines are always produced. Thinned by an
/// integer decade stride when the count would exceed `numticks`.
pub fn decade_tick_values(vmin: f64, vmax: f64, numticks: usize) -> Vec<f64> {
    let Some((lo, hi)) = decade_span(vmin, vmax) else {
        return Vec::new();
    };
    let count = hi - lo + 1;
    let stride = ((count - 1) / numticks.max(1) as i64 + 1).max(1) as usize;
    (lo..=hi)
        .step_by(stride)
        .map(|d| 10f64.powi(d as i32))
        .collect()
}

/// Sub-decade mantissas (2..=9 per decade) spanning `[vmin, vmax]`.
///
/// Empty when the range covers more decades than [`DEFAULT_NUMTICKS`]; at
/// that zoom level the major lines alone saturate the view.
pub fn subdecade_tick_values(vmin: f64, vmax: f64) -> Vec<f64> {
    let Some((lo, hi)) = decade_span(vmin, vmax) else {
        return Vec::new();
    };
    if hi - lo + 1 > DEFAULT_NUMTICKS as i64 {
        return Vec::new();
    }
    let mut ticks = Vec::with_capacity(((hi - lo + 2) * 8) as usize);
    for d in (lo - 1)..=hi {
        let decade = 10f64.powi(d as i32);
        for m in 2..=9 {
            ticks.push(m as f64 * decade);
        }
    }
    ticks
}

/// Whole-decade exponent span covering a strictly positive range, or `None`
/// when the range cannot carry log ticks.
fn decade_span(vmin: f64, vmax: f64) -> Option<(i64, i64)> {
    if !vmin.is_finite() || !vmax.is_finite() {
        return None;
    }
    let (vmin, vmax) = if vmin <= vmax { (vmin, vmax) } else { (vmax, vmin) };
    if vmin <= 0.0 {
        return None;
    }
    let lo = vmin.log10().floor() as i64;
    let hi = vmax.log10().ceil() as i64;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(ticks: &[f64], v: f64) -> bool {
        ticks.iter().any(|&t| (t - v).abs() <= 1e-9 * v.abs().max(1.0))
    }

    #[test]
    fn decades_cover_the_range() {
        let ticks = decade_tick_values(0.5, 200.0, DEFAULT_NUMTICKS);
        assert!(contains(&ticks, 1.0));
        assert!(contains(&ticks, 10.0));
        assert!(contains(&ticks, 100.0));
        // Rounded outward to whole decades.
        assert!(contains(&ticks, 0.1));
        assert!(contains(&ticks, 1000.0));
    }

    #[test]
    fn decades_thin_over_wide_ranges() {
        let ticks = decade_tick_values(1e-20, 1e20, 15);
        assert!(ticks.len() <= 15);
        assert!(ticks.len() > 1);
    }

    #[test]
    fn non_positive_or_nan_ranges_are_empty() {
        assert!(decade_tick_values(-1.0, 10.0, 15).is_empty());
        assert!(decade_tick_values(0.0, 10.0, 15).is_empty());
        assert!(decade_tick_values(f64::NAN, 10.0, 15).is_empty());
        assert!(subdecade_tick_values(0.0, 10.0).is_empty());
    }

    #[test]
    fn subdecades_fill_between_decades() {
        let ticks = subdecade_tick_values(1.0, 100.0);
        for m in 2..=9 {
            assert!(contains(&ticks, m as f64));
            assert!(contains(&ticks, m as f64 * 10.0));
        }
        assert!(!contains(&ticks, 1.0));
        assert!(!contains(&ticks, 10.0));
    }

    #[test]
    fn gravity_ticks_land_on_gravity_multiples() {
        let locator = gravity_ticks(DEFAULT_NUMTICKS);
        let ticks = locator(0.9 * GRAVITY, 10.1 * GRAVITY);
        assert!(contains(&ticks, 1.0 * GRAVITY));
        assert!(contains(&ticks, 10.0 * GRAVITY));
    }

    #[test]
    fn gravity_ticks_reject_non_positive_ranges() {
        let locator = gravity_ticks(DEFAULT_NUMTICKS);
        assert!(locator(-10.0, 10.0).is_empty());
        assert!(locator(0.0, 0.0).is_empty());
    }
}
