use core::fmt;

use crate::error::Error;
use crate::style::{Color, LineStyle, Stroke};

/// Unique identifier for a series in a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub(crate) u64);

impl ShapeId {
    /// Create a new unique shape ID (0, 1, 2, ...).
    pub(crate) fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({})", self.0)
    }
}

/// A line of data points overlaid on the primary coordinate system.
///
/// Positions are always stored in the base quantity (e.g. velocity), whatever
/// axis the data was supplied through: [`OrderAxis::plot`] converts its own
/// quantity into the base quantity before constructing the series.
///
/// [`OrderAxis::plot`]: crate::OrderAxis::plot
#[derive(Debug, Clone)]
pub struct Series {
    /// Unique identifier for the series.
    pub id: ShapeId,

    /// Point positions as (frequency, base-quantity) pairs.
    pub positions: Vec<[f64; 2]>,

    /// Optional label (for the host's legend).
    pub label: Option<String>,

    /// Color of the series line.
    pub color: Color,

    /// Line width in pixels.
    pub width: f32,

    /// Line style connecting the points.
    pub line_style: LineStyle,
}

impl Series {
    /// Create a solid line series from (frequency, base-quantity) pairs.
    pub fn line(positions: Vec<[f64; 2]>) -> Self {
        Self {
            id: ShapeId::new(),
            positions,
            label: None,
            color: Color::from_rgb(0.3, 0.3, 0.9),
            width: 1.5,
            line_style: LineStyle::Solid,
        }
    }

    /// Set a label for the series.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let l = label.into();
        if !l.is_empty() {
            self.label = Some(l);
        }
        self
    }

    /// Set the color of the series.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the line width in pixels.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width.max(0.5);
        self
    }

    /// Set the line style.
    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.positions.is_empty() {
            return Err(Error::EmptySeries);
        }
        Ok(())
    }

    pub(crate) fn stroke(&self) -> Stroke {
        Stroke {
            color: self.color,
            line_style: self.line_style,
            width: self.width,
            alpha: self.color.a,
        }
    }
}
