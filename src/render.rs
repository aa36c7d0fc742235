use glam::DVec2;

use crate::style::Stroke;

/// Horizontal alignment of a tick label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// A tick label with placement and rotation, ready for typesetting.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub text: String,
    /// Anchor in pixel coordinates (y grows downward).
    pub position_px: DVec2,
    /// Offset from the anchor to the text origin, in pixels.
    pub offset_px: DVec2,
    /// Counterclockwise on-screen rotation, folded into [-90°, 90°] so text
    /// never renders upside-down.
    pub rotation_deg: f64,
    pub h_align: HAlign,
}

/// A short stroke marking a label anchor, oriented along the grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    pub position_px: DVec2,
    pub rotation_deg: f64,
    pub length_px: f64,
}

/// The drawing operations the nomogram pipeline needs from a host backend.
///
/// Deliberately narrow: the host framework's canvas, typesetting and theming
/// stay behind this seam. All geometry arrives in pixel coordinates.
pub trait Renderer {
    /// Stroke a polyline. Straight grid segments arrive as two points;
    /// curved segments (non-log scaling) as sampled polylines.
    fn draw_polyline(&mut self, points_px: &[DVec2], stroke: &Stroke);

    /// Typeset one tick label.
    fn draw_label(&mut self, label: TickLabel);

    /// Stroke one tick mark.
    fn draw_tick_mark(&mut self, mark: TickMark);
}

/// A recording renderer collecting primitives instead of rasterizing.
///
/// Backs the tests and the demo binaries; also usable as a staging buffer
/// for hosts that consume retained geometry.
#[derive(Debug, Default)]
pub struct VectorRenderer {
    pub polylines: Vec<(Vec<DVec2>, Stroke)>,
    pub labels: Vec<TickLabel>,
    pub tick_marks: Vec<TickMark>,
}

impl VectorRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.polylines.clear();
        self.labels.clear();
        self.tick_marks.clear();
    }
}

impl Renderer for VectorRenderer {
    fn draw_polyline(&mut self, points_px: &[DVec2], stroke: &Stroke) {
        self.polylines.push((points_px.to_vec(), *stroke));
    }

    fn draw_label(&mut self, label: TickLabel) {
        self.labels.push(label);
    }

    fn draw_tick_mark(&mut self, mark: TickMark) {
        self.tick_marks.push(mark);
    }
}
