use glam::DVec2;
use indexmap::IndexMap;
use log::debug;

use crate::axis_scale::AxisScale;
use crate::error::Error;
use crate::format::{acceleration_formatter, displacement_formatter, gravity_formatter};
use crate::frame::{Frame, ViewLimits};
use crate::order_axis::OrderAxis;
use crate::render::Renderer;
use crate::series::{Series, ShapeId};
use crate::style::{GridLevel, StyleUpdate};
use crate::ticks::{DEFAULT_NUMTICKS, gravity_ticks};

/// Configuration consumed by the plot constructor (and by the projection
/// registry on behalf of name-based callers).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Label the differentiation axis in multiples of g (9.81 m/s²) instead
    /// of m/s².
    pub use_gravity_formatter: bool,
    /// Frequency axis scale.
    pub x_scale: AxisScale,
    /// Base-quantity axis scale.
    pub y_scale: AxisScale,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            use_gravity_formatter: false,
            x_scale: AxisScale::log10(),
            y_scale: AxisScale::log10(),
        }
    }
}

/// The composite nomogram chart: a log-log frequency/velocity coordinate
/// system plus two auxiliary order axes sharing its viewport.
///
/// The integration axis (order +1) shows displacement with automatic unit
/// scaling; the differentiation axis (order −1) shows acceleration in m/s²
/// or in gravity units per [`PlotConfig::use_gravity_formatter`]. Both
/// auxiliary axes always reflect the plot's own view limits; zooming or
/// toggling the grid here propagates to them.
#[derive(Debug)]
pub struct FrequencySpacePlot {
    x_label: String,
    y_label: String,
    x_scale: AxisScale,
    y_scale: AxisScale,
    limits: ViewLimits,
    series: IndexMap<ShapeId, Series>,
    iaxis: OrderAxis,
    daxis: OrderAxis,
    grid_enabled: bool,
}

impl FrequencySpacePlot {
    pub fn new(config: &PlotConfig) -> Self {
        let mut iaxis = OrderAxis::new(1);
        iaxis.set_major_formatter(displacement_formatter());

        let mut daxis = OrderAxis::new(-1);
        if config.use_gravity_formatter {
            daxis.set_major_locator(gravity_ticks(DEFAULT_NUMTICKS));
            daxis.set_major_formatter(gravity_formatter());
        } else {
            daxis.set_major_formatter(acceleration_formatter());
        }

        Self {
            x_label: "Frequency (Hz)".to_string(),
            y_label: "Velocity (m/s)".to_string(),
            x_scale: config.x_scale,
            y_scale: config.y_scale,
            limits: ViewLimits {
                x: (1.0, 1000.0),
                y: (1e-4, 10.0),
            },
            series: IndexMap::new(),
            iaxis,
            daxis,
            grid_enabled: false,
        }
    }

    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    pub fn x_scale(&self) -> AxisScale {
        self.x_scale
    }

    pub fn y_scale(&self) -> AxisScale {
        self.y_scale
    }

    /// The integration (displacement) axis.
    pub fn iaxis(&self) -> &OrderAxis {
        &self.iaxis
    }

    pub fn iaxis_mut(&mut self) -> &mut OrderAxis {
        &mut self.iaxis
    }

    /// The differentiation (acceleration) axis.
    pub fn daxis(&self) -> &OrderAxis {
        &self.daxis
    }

    pub fn daxis_mut(&mut self) -> &mut OrderAxis {
        &mut self.daxis
    }

    /// The shared view limits both auxiliary axes reflect.
    pub fn limits(&self) -> &ViewLimits {
        &self.limits
    }

    /// Set the view limits (zoom/pan). Validated; the auxiliary axes pick up
    /// the change on the next draw.
    pub fn set_limits(&mut self, x: (f64, f64), y: (f64, f64)) -> Result<(), Error> {
        self.limits = ViewLimits::new(x, y)?;
        Ok(())
    }

    /// Whether the primary rectangular grid is enabled.
    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    /// Configure the grid across the whole composite.
    ///
    /// `which` selects the tick level (`"major"`, `"minor"` or `"both"`);
    /// anything else fails fast. Visibility and style overrides propagate
    /// identically to the primary grid flag and to both auxiliary axes —
    /// this is the only supported way to keep all three in sync.
    pub fn grid(&mut self, visible: bool, which: &str, update: &StyleUpdate) -> Result<(), Error> {
        let level: GridLevel = which.parse()?;
        self.grid_enabled = visible;
        self.iaxis.grid(visible, level, update);
        self.daxis.grid(visible, level, update);
        Ok(())
    }

    /// Add a series given in the base quantity. For displacement or
    /// acceleration data, build the series through [`OrderAxis::plot`] on
    /// the matching axis first.
    pub fn add_series(&mut self, series: Series) -> Result<ShapeId, Error> {
        series.validate()?;
        let id = series.id;
        self.series.insert(id, series);
        Ok(id)
    }

    pub fn remove_series(&mut self, id: &ShapeId) -> Option<Series> {
        self.series.shift_remove(id)
    }

    pub fn series(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    /// Render one pass: primary series first, then the integration axis,
    /// then the differentiation axis, so overlapping labels stack
    /// deterministically.
    pub fn draw(&self, renderer: &mut dyn Renderer, size_px: DVec2) {
        let frame = Frame::new(size_px, self.x_scale, self.y_scale, self.limits);
        debug!(
            "drawing {} series over x {:?}, y {:?}",
            self.series.len(),
            self.limits.x,
            self.limits.y,
        );

        for series in self.series.values() {
            let stroke = series.stroke();
            let mut run: Vec<DVec2> = Vec::with_capacity(series.positions.len());
            for &p in &series.positions {
                match frame.data_to_pixel(p) {
                    Some(px) => run.push(px),
                    // Unrepresentable point (e.g. non-positive under log):
                    // break the polyline rather than bridging the gap.
                    None => {
                        if run.len() >= 2 {
                            renderer.draw_polyline(&run, &stroke);
                        }
                        run.clear();
                    }
                }
            }
            if run.len() >= 2 {
                renderer.draw_polyline(&run, &stroke);
            }
        }

        self.iaxis.draw(renderer, &frame);
        self.daxis.draw(renderer, &frame);
    }
}

impl Default for FrequencySpacePlot {
    fn default() -> Self {
        Self::new(&PlotConfig::default())
    }
}
