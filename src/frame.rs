use glam::DVec2;
use log::warn;

use crate::axis_scale::AxisScale;
use crate::error::Error;

/// The shared (frequency, base-quantity) view rectangle owned by the plot.
///
/// Both auxiliary axes derive their own value ranges from these limits on
/// every draw; the limits never change mid-draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    /// Frequency range (min, max).
    pub x: (f64, f64),
    /// Base-quantity range (min, max).
    pub y: (f64, f64),
}

impl ViewLimits {
    /// Validated constructor: both ranges must be finite with min < max.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Self, Error> {
        check_range(x)?;
        check_range(y)?;
        Ok(Self { x, y })
    }
}

fn check_range((min, max): (f64, f64)) -> Result<(), Error> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(Error::InvalidLimits { min, max })
    }
}

/// Sorted range with a strictly positive lower boundary.
///
/// A non-positive minimum is substituted four orders of magnitude below the
/// positive maximum, or with an absolute floor when no boundary is positive.
/// Lossy by design: it keeps logarithms defined for programmatically-set
/// non-positive limits instead of failing.
pub(crate) fn positive_span((a, b): (f64, f64)) -> (f64, f64) {
    let (mut vmin, vmax) = if a <= b { (a, b) } else { (b, a) };
    if vmin <= 0.0 {
        let floor = if vmax > 0.0 { vmax * 1e-4 } else { 1e-30 };
        warn!("non-positive view boundary {vmin} substituted with {floor:e} for log rendering");
        vmin = floor;
    }
    (vmin, vmax)
}

/// Mapping from data space to pixel space for one render pass.
///
/// The minimal stand-in for the host framework's display pipeline: the label
/// machinery needs pixel coordinates to compute on-screen rotation angles,
/// and the renderer consumes pixel-space geometry. Pixel y grows downward.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    size_px: DVec2,
    x_scale: AxisScale,
    y_scale: AxisScale,
    limits: ViewLimits,
    plot_min: DVec2,
    plot_max: DVec2,
}

impl Frame {
    pub fn new(size_px: DVec2, x_scale: AxisScale, y_scale: AxisScale, limits: ViewLimits) -> Self {
        let (x0, x1) = plot_span(x_scale, limits.x);
        let (y0, y1) = plot_span(y_scale, limits.y);
        Self {
            size_px,
            x_scale,
            y_scale,
            limits,
            plot_min: DVec2::new(x0, y0),
            plot_max: DVec2::new(x1, y1),
        }
    }

    pub fn size_px(&self) -> DVec2 {
        self.size_px
    }

    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    /// Map a data-space point to pixel coordinates.
    ///
    /// Returns `None` when the point is not representable under the current
    /// scales (e.g. non-positive under log) or the view is degenerate.
    pub fn data_to_pixel(&self, point: [f64; 2]) -> Option<DVec2> {
        let px = self.x_scale.data_to_plot(point[0])?;
        let py = self.y_scale.data_to_plot(point[1])?;
        let span = self.plot_max - self.plot_min;
        if !(span.x > 0.0 && span.y > 0.0) {
            return None;
        }
        let x = (px - self.plot_min.x) / span.x * self.size_px.x;
        let y = (1.0 - (py - self.plot_min.y) / span.y) * self.size_px.y;
        (x.is_finite() && y.is_finite()).then(|| DVec2::new(x, y))
    }
}

fn plot_span(scale: AxisScale, lim: (f64, f64)) -> (f64, f64) {
    match scale {
        AxisScale::Linear => {
            let (a, b) = lim;
            if a <= b { (a, b) } else { (b, a) }
        }
        AxisScale::Log { .. } => {
            let (vmin, vmax) = positive_span(lim);
            (
                scale.data_to_plot(vmin).unwrap_or(f64::NAN),
                scale.data_to_plot(vmax).unwrap_or(f64::NAN),
            )
        }
    }
}
