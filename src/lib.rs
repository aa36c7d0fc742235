//! Frequency-domain vibration nomograms.
//!
//! - Log-log velocity vs. frequency plots with diagonal iso-value grids for
//!   displacement (one integration) and acceleration (one differentiation)
//! - Pure coordinate transforms between order-related quantities
//! - Viewport clipping and boundary label placement for diagonal grid lines
//! - Unit-aware formatters (m/mm/µm, m/s², gravity multiples)
//!
//! Quick start:
//!
//! ```
//! use freq_nomogram::{
//!     FrequencySpacePlot, PlotConfig, StyleUpdate, VectorRenderer,
//! };
//! use glam::DVec2;
//!
//! let mut plot = FrequencySpacePlot::new(&PlotConfig::default());
//! plot.grid(true, "major", &StyleUpdate::new()).unwrap();
//!
//! // A constant 1 mm displacement line, drawn through the integration axis.
//! let points: Vec<[f64; 2]> = (0..50).map(|i| [10f64.powf(i as f64 / 16.0), 1e-3]).collect();
//! let series = plot.iaxis().plot(&points);
//! plot.add_series(series).unwrap();
//!
//! let mut renderer = VectorRenderer::new();
//! plot.draw(&mut renderer, DVec2::new(800.0, 600.0));
//! assert!(!renderer.labels.is_empty());
//! ```
//!
//! See `demos/` for complete examples.
pub mod axis_scale;
pub mod error;
pub mod format;
pub mod frame;
pub mod frequency_space;
pub mod order_axis;
pub mod registry;
pub mod render;
pub mod series;
pub mod style;
pub mod ticks;
pub mod transform;

// Re-exports of the public surface.
pub use axis_scale::AxisScale;
pub use error::Error;
pub use format::{
    TickFormatter, acceleration_formatter, displacement_formatter, gravity_formatter,
};
pub use frame::{Frame, ViewLimits};
pub use frequency_space::{FrequencySpacePlot, PlotConfig};
pub use order_axis::OrderAxis;
pub use registry::{FREQUENCY_SPACE, ProjectionCtor, ProjectionRegistry};
pub use render::{HAlign, Renderer, TickLabel, TickMark, VectorRenderer};
pub use series::{Series, ShapeId};
pub use style::{Color, GridLevel, GridStyle, LineStyle, Stroke, StyleUpdate};
pub use ticks::{DEFAULT_NUMTICKS, GRAVITY, TickProducer, gravity_ticks, log_ticks};
pub use transform::SpectralTransform;
