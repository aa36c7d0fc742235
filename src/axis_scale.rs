/// Axis scaling mode for the primary coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisScale {
    /// Linear axis: plot-space value is the raw data value.
    #[default]
    Linear,

    /// Logarithmic axis: plot-space value is `log_{base}(raw)`.
    ///
    /// Only strictly positive values are representable on this axis.
    Log {
        /// The base of the logarithm.
        base: f64,
    },
}

impl AxisScale {
    /// A base-10 logarithmic scale, the default for nomogram plots.
    pub fn log10() -> Self {
        Self::Log { base: 10.0 }
    }

    /// Whether this is a logarithmic scale.
    ///
    /// When both primary scales are logarithmic, diagonal iso-value lines
    /// render as straight segments; otherwise they are sampled as polylines.
    pub fn is_log(self) -> bool {
        matches!(self, Self::Log { .. })
    }

    /// Transform a raw data value into plot space.
    ///
    /// Returns `None` for values the scale cannot represent (non-finite, or
    /// non-positive under a log scale).
    pub fn data_to_plot(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log { base } => (value.is_finite() && value > 0.0)
                .then(|| value.log(base))
                .filter(|v| v.is_finite()),
        }
    }

    /// Transform a plot-space value back into a raw data value.
    pub fn plot_to_data(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log { base } => {
                if !value.is_finite() {
                    return None;
                }
                let out = base.powf(value);
                (out.is_finite() && out > 0.0).then_some(out)
            }
        }
    }
}
