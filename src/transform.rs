use std::f64::consts::TAU;

/// Floor applied to frequency and magnitude inputs before any log/pow step.
///
/// Clamping non-positive inputs is intentional: the plotted quantities are
/// physically non-negative, so a zero or negative sample maps to the
/// epsilon-derived result instead of failing.
pub const EPS: f64 = 1e-9;

#[inline]
pub(crate) fn log10_tau() -> f64 {
    TAU.log10()
}

/// Coordinate mapping between physical quantities related by integration or
/// differentiation in the frequency domain.
///
/// A point `(f, y)` maps to `(f, y / (2π·f)^order)`; the frequency component
/// always passes through unchanged. Order `+1` is one integration (velocity
/// to displacement), `-1` one differentiation (velocity to acceleration),
/// `0` the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpectralTransform {
    order: i32,
    inverse: bool,
}

impl SpectralTransform {
    /// Create a forward transform of the given order.
    pub fn new(order: i32) -> Self {
        Self {
            order,
            inverse: false,
        }
    }

    /// The order of integration (positive) or differentiation (negative).
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Whether this transform applies the inverse rule.
    pub fn is_inverse(&self) -> bool {
        self.inverse
    }

    /// Same order, opposite direction. Toggling twice restores the original.
    pub fn inverted(self) -> Self {
        Self {
            order: self.order,
            inverse: !self.inverse,
        }
    }

    /// Map one `(frequency, magnitude)` point.
    ///
    /// Both components are floored at [`EPS`] first, so any finite input
    /// yields a finite, strictly positive result.
    pub fn apply(&self, point: [f64; 2]) -> [f64; 2] {
        let f = point[0].max(EPS);
        let y = point[1].max(EPS);
        let w = TAU * f;
        let mag = if self.inverse {
            y * w.powi(self.order)
        } else {
            y / w.powi(self.order)
        };
        [f, mag]
    }

    /// Map a slice of `(frequency, magnitude)` points.
    pub fn apply_slice(&self, points: &[[f64; 2]]) -> Vec<[f64; 2]> {
        points.iter().map(|&p| self.apply(p)).collect()
    }

    /// Log-domain forward rule: `log10(y) - order·(log10 2π + log10 f)`.
    ///
    /// Used for line-geometry derivation without pow/log round trips.
    pub fn log_forward(f: f64, y: f64, order: i32) -> f64 {
        let log_w = log10_tau() + f.max(EPS).log10();
        y.max(EPS).log10() - order as f64 * log_w
    }

    /// Log-domain inverse rule: `log10(y) + order·(log10 2π + log10 f)`.
    pub fn log_inverse(f: f64, y: f64, order: i32) -> f64 {
        let log_w = log10_tau() + f.max(EPS).log10();
        y.max(EPS).log10() + order as f64 * log_w
    }
}
