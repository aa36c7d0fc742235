use glam::DVec2;
use log::debug;

use crate::format::{TickFormatter, default_formatter};
use crate::frame::{Frame, ViewLimits, positive_span};
use crate::render::{HAlign, Renderer, TickLabel, TickMark};
use crate::series::Series;
use crate::style::{GridLevel, GridStyle, StyleUpdate};
use crate::ticks::{DEFAULT_NUMTICKS, TickProducer, log_subdecade_ticks, log_ticks};
use crate::transform::{SpectralTransform, log10_tau};

/// Clipped intervals at or below this width collapse to a corner touch and
/// are dropped to avoid degenerate strokes and ambiguous label anchors.
const CLIP_EPS: f64 = 1e-9;

/// Samples per grid line when the host scaling is not log-log.
const CURVE_SAMPLES: usize = 100;

/// Distance from the label anchor to the text origin, in pixels.
const LABEL_OFFSET_PX: f64 = 10.0;

/// An auxiliary axis overlay drawing diagonal iso-value grid lines for a
/// quantity related to the base quantity by a power of angular frequency.
///
/// The axis shares the host plot's viewport: its value range is derived from
/// the host's view limits through its [`SpectralTransform`] on every draw,
/// never stored. Each tick value becomes a line
/// `log10(value) = order·log10(f) + c` in log-log space, clipped to the
/// visible viewport and labeled at the boundary.
pub struct OrderAxis {
    order: i32,
    transform: SpectralTransform,
    major_locator: TickProducer,
    minor_locator: TickProducer,
    major_formatter: TickFormatter,
    major_grid: GridStyle,
    minor_grid: GridStyle,
    visible: bool,
}

impl std::fmt::Debug for OrderAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderAxis")
            .field("order", &self.order)
            .field("transform", &self.transform)
            .field("major_grid", &self.major_grid)
            .field("minor_grid", &self.minor_grid)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

/// One grid line clipped to the log-space viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ClippedLine {
    /// First endpoint in log-log coordinates (lower x).
    pub start: DVec2,
    /// Second endpoint in log-log coordinates (higher x).
    pub end: DVec2,
    /// The line's intercept `c` at `log10(f) = 0`.
    pub intercept: f64,
}

impl OrderAxis {
    /// Create an axis of the given order with stock log locators and the
    /// two-significant-digit fallback formatter.
    pub fn new(order: i32) -> Self {
        Self {
            order,
            transform: SpectralTransform::new(order),
            major_locator: log_ticks(DEFAULT_NUMTICKS),
            minor_locator: log_subdecade_ticks(),
            major_formatter: default_formatter(),
            major_grid: GridStyle::default(),
            minor_grid: GridStyle::default(),
            visible: true,
        }
    }

    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn transform(&self) -> SpectralTransform {
        self.transform
    }

    pub fn set_major_locator(&mut self, locator: TickProducer) {
        self.major_locator = locator;
    }

    pub fn major_locator(&self) -> &TickProducer {
        &self.major_locator
    }

    pub fn set_minor_locator(&mut self, locator: TickProducer) {
        self.minor_locator = locator;
    }

    pub fn minor_locator(&self) -> &TickProducer {
        &self.minor_locator
    }

    pub fn set_major_formatter(&mut self, formatter: TickFormatter) {
        self.major_formatter = formatter;
    }

    pub fn major_formatter(&self) -> &TickFormatter {
        &self.major_formatter
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn major_grid_style(&self) -> &GridStyle {
        &self.major_grid
    }

    pub fn minor_grid_style(&self) -> &GridStyle {
        &self.minor_grid
    }

    /// The value range this axis spans under the given view limits.
    ///
    /// The extrema come from different corners of the view rectangle
    /// depending on the order's sign: the transform is monotonic in the base
    /// quantity but its direction along frequency flips with the exponent,
    /// so a positive order pairs max-frequency with min-quantity for the
    /// minimum (and vice versa), while a negative order pairs like with like.
    pub fn value_range(&self, limits: &ViewLimits) -> (f64, f64) {
        let (lo_corner, hi_corner) = if self.order < 0 {
            ([limits.x.0, limits.y.0], [limits.x.1, limits.y.1])
        } else {
            ([limits.x.1, limits.y.0], [limits.x.0, limits.y.1])
        };
        (
            self.transform.apply(lo_corner)[1],
            self.transform.apply(hi_corner)[1],
        )
    }

    /// Set visibility and merge style overrides for the selected tick level.
    pub fn grid(&mut self, visible: bool, which: GridLevel, update: &StyleUpdate) {
        if which.includes_major() {
            self.major_grid.visible = visible;
            self.major_grid.merge(update);
        }
        if which.includes_minor() {
            self.minor_grid.visible = visible;
            self.minor_grid.merge(update);
        }
    }

    /// Convert data given in this axis's quantity into a base-quantity
    /// series that overlays correctly on the shared coordinate system.
    pub fn plot(&self, positions: &[[f64; 2]]) -> Series {
        Series::line(self.transform.inverted().apply_slice(positions))
    }

    /// Draw this axis's diagonal grid lines and labels.
    ///
    /// No-op when the axis is hidden or both tick levels are hidden. Order
    /// zero is the identity and has no diagonal grid of its own.
    pub fn draw(&self, renderer: &mut dyn Renderer, frame: &Frame) {
        if !self.visible || self.order == 0 {
            return;
        }
        if self.major_grid.visible {
            self.draw_level(renderer, frame, true);
        }
        if self.minor_grid.visible {
            self.draw_level(renderer, frame, false);
        }
    }

    fn draw_level(&self, renderer: &mut dyn Renderer, frame: &Frame, major: bool) {
        let limits = frame.limits();
        let log_x = log_span(limits.x);
        let log_y = log_span(limits.y);

        let (vmin, vmax) = self.value_range(limits);
        let locator = if major {
            &self.major_locator
        } else {
            &self.minor_locator
        };
        let ticks = locator(vmin, vmax);

        // Each tick value v pins the line's intercept at log10(f) = 0.
        let intercepts: Vec<f64> = ticks
            .iter()
            .map(|&v| SpectralTransform::log_inverse(1.0, v, self.order))
            .collect();

        let lines = clip_lines_to_box(self.order as f64, &intercepts, log_x, log_y);
        debug!(
            "order {} {} grid: {}/{} candidate lines visible",
            self.order,
            if major { "major" } else { "minor" },
            lines.len(),
            intercepts.len(),
        );

        let style = if major {
            &self.major_grid
        } else {
            &self.minor_grid
        };
        let stroke = style.stroke();
        let straight = frame.x_scale().is_log() && frame.y_scale().is_log();

        for line in &lines {
            if straight {
                let px: Vec<DVec2> = [line.start, line.end]
                    .iter()
                    .filter_map(|p| frame.data_to_pixel(unlog(*p)))
                    .collect();
                if px.len() == 2 {
                    renderer.draw_polyline(&px, &stroke);
                }
            } else {
                // Straight only in log-log space; sample into a polyline.
                let mut px = Vec::with_capacity(CURVE_SAMPLES);
                for i in 0..CURVE_SAMPLES {
                    let t = i as f64 / (CURVE_SAMPLES - 1) as f64;
                    let p = line.start + (line.end - line.start) * t;
                    if let Some(pixel) = frame.data_to_pixel(unlog(p)) {
                        px.push(pixel);
                    }
                }
                if px.len() >= 2 {
                    renderer.draw_polyline(&px, &stroke);
                }
            }
        }

        if major {
            self.draw_labels(renderer, frame, &lines, log_x, log_y);
        }
    }

    fn draw_labels(
        &self,
        renderer: &mut dyn Renderer,
        frame: &Frame,
        lines: &[ClippedLine],
        log_x: (f64, f64),
        log_y: (f64, f64),
    ) {
        for line in lines {
            // Anchor at the endpoint the slope points away from: the first
            // clip endpoint for negative order, the second for positive.
            let (anchor, other) = if self.order < 0 {
                (line.start, line.end)
            } else {
                (line.end, line.start)
            };

            let tangent = anchor + (other - anchor) * 0.01;
            let Some(anchor_px) = frame.data_to_pixel(unlog(anchor)) else {
                continue;
            };
            let Some(tangent_px) = frame.data_to_pixel(unlog(tangent)) else {
                continue;
            };
            let d = tangent_px - anchor_px;

            // Pixel y grows downward; negate dy for a counterclockwise angle,
            // then fold so text never renders upside-down.
            let mut angle = (-d.y).atan2(d.x).to_degrees();
            if angle > 90.0 {
                angle -= 180.0;
            } else if angle < -90.0 {
                angle += 180.0;
            }

            let direction = if d.length_squared() > 0.0 {
                d.normalize()
            } else {
                DVec2::ZERO
            };
            let mut offset_px = direction * LABEL_OFFSET_PX;

            let on_left = (anchor.x - log_x.0).abs() < CLIP_EPS;
            let on_right = (anchor.x - log_x.1).abs() < CLIP_EPS;
            let on_top = (anchor.y - log_y.1).abs() < CLIP_EPS && !on_left && !on_right;
            let h_align = if on_left {
                HAlign::Left
            } else if on_right {
                HAlign::Right
            } else if on_top {
                // Asymmetric tie-break by order sign, kept from the original
                // rule to dodge label collisions along the top edge.
                if self.order < 0 {
                    HAlign::Left
                } else {
                    HAlign::Right
                }
            } else {
                HAlign::Center
            };
            if on_top {
                offset_px *= 2.0;
            }

            // Recover the tick value from the intercept (exact inverse of
            // the derivation in draw_level).
            let value = 10f64.powf(line.intercept - self.order as f64 * log10_tau());
            let text = (self.major_formatter)(value);

            renderer.draw_label(TickLabel {
                text,
                position_px: anchor_px,
                offset_px,
                rotation_deg: angle,
                h_align,
            });
            renderer.draw_tick_mark(TickMark {
                position_px: anchor_px,
                rotation_deg: angle,
                length_px: LABEL_OFFSET_PX / 1.2,
            });
        }
    }
}

fn unlog(p: DVec2) -> [f64; 2] {
    [10f64.powf(p.x), 10f64.powf(p.y)]
}

fn log_span(lim: (f64, f64)) -> (f64, f64) {
    let (vmin, vmax) = positive_span(lim);
    // A still-non-positive max logs to NaN; every clip test then fails and
    // the level draws nothing, which is the accepted degenerate behavior.
    (vmin.log10(), vmax.log10())
}

/// Clip lines `y = m·x + c` to the rectangle `x_lim × y_lim`.
///
/// For each intercept, the x-interval where the line's y stays inside the
/// box is intersected with the box's own x-range; intervals no wider than
/// [`CLIP_EPS`] are dropped. `m` is never zero here: order zero draws no
/// diagonal grid, so it never reaches this division.
pub(crate) fn clip_lines_to_box(
    m: f64,
    intercepts: &[f64],
    x_lim: (f64, f64),
    y_lim: (f64, f64),
) -> Vec<ClippedLine> {
    intercepts
        .iter()
        .filter_map(|&c| {
            let x_at_y_min = (y_lim.0 - c) / m;
            let x_at_y_max = (y_lim.1 - c) / m;
            let x_start = x_lim.0.max(x_at_y_min.min(x_at_y_max));
            let x_end = x_lim.1.min(x_at_y_min.max(x_at_y_max));
            // NaN-safe: a NaN interval fails this comparison and is dropped.
            if !(x_end - x_start > CLIP_EPS) {
                return None;
            }
            Some(ClippedLine {
                start: DVec2::new(x_start, m * x_start + c),
                end: DVec2::new(x_end, m * x_end + c),
                intercept: c,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis_scale::AxisScale;
    use crate::render::VectorRenderer;
    use crate::style::{Color, GridLevel, LineStyle};
    use std::f64::consts::TAU;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn unit_limits() -> ViewLimits {
        ViewLimits::new((1.0, 10.0), (1.0, 10.0)).unwrap()
    }

    fn log_log_frame(limits: ViewLimits) -> Frame {
        Frame::new(
            DVec2::new(800.0, 600.0),
            AxisScale::log10(),
            AxisScale::log10(),
            limits,
        )
    }

    #[test]
    fn value_range_integration_order() {
        let axis = OrderAxis::new(1);
        let (vmin, vmax) = axis.value_range(&unit_limits());
        // Minimum from the (f_max, y_min) corner, maximum from (f_min, y_max).
        assert!(close(vmin, 1.0 / (TAU * 10.0)));
        assert!(close(vmax, 10.0 / TAU));
    }

    #[test]
    fn value_range_differentiation_order() {
        let axis = OrderAxis::new(-1);
        let (vmin, vmax) = axis.value_range(&unit_limits());
        assert!(close(vmin, TAU));
        assert!(close(vmax, 10.0 * TAU * 10.0));
    }

    #[test]
    fn clipping_against_unit_box() {
        let lines = clip_lines_to_box(1.0, &[0.0, 5.0, 20.0], (0.0, 10.0), (0.0, 10.0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].start, DVec2::new(0.0, 0.0));
        assert_eq!(lines[0].end, DVec2::new(10.0, 10.0));
        assert_eq!(lines[1].start, DVec2::new(0.0, 5.0));
        assert_eq!(lines[1].end, DVec2::new(5.0, 10.0));
    }

    #[test]
    fn corner_touches_are_dropped() {
        // Passes exactly through the (10, 0) corner: zero-width interval.
        let lines = clip_lines_to_box(1.0, &[-10.0], (0.0, 10.0), (0.0, 10.0));
        assert!(lines.is_empty());
    }

    #[test]
    fn grid_configuration_merges_styles() {
        let mut axis = OrderAxis::new(1);
        assert!(!axis.major_grid_style().visible);

        axis.grid(
            true,
            GridLevel::Major,
            &StyleUpdate::new().with_color(Color::BLACK),
        );
        assert!(axis.major_grid_style().visible);
        assert_eq!(axis.major_grid_style().color, Color::BLACK);
        assert!(!axis.minor_grid_style().visible);

        axis.grid(
            true,
            GridLevel::Minor,
            &StyleUpdate::new().with_line_style(LineStyle::Solid),
        );
        assert!(axis.minor_grid_style().visible);
        assert_eq!(axis.minor_grid_style().line_style, LineStyle::Solid);

        axis.grid(false, GridLevel::Both, &StyleUpdate::new());
        assert!(!axis.major_grid_style().visible);
        assert!(!axis.minor_grid_style().visible);
    }

    #[test]
    fn draw_emits_straight_segments_and_major_labels() {
        let mut axis = OrderAxis::new(1);
        axis.grid(true, GridLevel::Major, &StyleUpdate::new());

        let limits = ViewLimits::new((1.0, 1000.0), (1e-4, 10.0)).unwrap();
        let frame = log_log_frame(limits);
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);

        assert!(!renderer.polylines.is_empty());
        for (points, _) in &renderer.polylines {
            assert_eq!(points.len(), 2);
        }
        assert_eq!(renderer.labels.len(), renderer.polylines.len());
        assert_eq!(renderer.tick_marks.len(), renderer.labels.len());
        for label in &renderer.labels {
            assert!(label.rotation_deg >= -90.0 && label.rotation_deg <= 90.0);
        }
    }

    #[test]
    fn labels_anchor_by_order_sign() {
        let limits = ViewLimits::new((1.0, 1000.0), (1e-4, 10.0)).unwrap();
        let frame = log_log_frame(limits);

        // Positive order: anchor at the second clip endpoint, which lies on
        // the right or top boundary, so alignment is always Right.
        let mut axis = OrderAxis::new(1);
        axis.grid(true, GridLevel::Major, &StyleUpdate::new());
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);
        assert!(!renderer.labels.is_empty());
        assert!(
            renderer
                .labels
                .iter()
                .all(|l| l.h_align == HAlign::Right)
        );

        // Negative order: anchor at the first endpoint (left or top), Left.
        let mut axis = OrderAxis::new(-1);
        axis.grid(true, GridLevel::Major, &StyleUpdate::new());
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);
        assert!(!renderer.labels.is_empty());
        assert!(renderer.labels.iter().all(|l| l.h_align == HAlign::Left));
    }

    #[test]
    fn minor_level_draws_without_labels() {
        let mut axis = OrderAxis::new(-1);
        axis.grid(true, GridLevel::Minor, &StyleUpdate::new());

        let limits = ViewLimits::new((1.0, 100.0), (0.01, 10.0)).unwrap();
        let frame = log_log_frame(limits);
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);

        assert!(!renderer.polylines.is_empty());
        assert!(renderer.labels.is_empty());
        assert!(renderer.tick_marks.is_empty());
    }

    #[test]
    fn non_log_scaling_samples_polylines() {
        let mut axis = OrderAxis::new(1);
        axis.grid(true, GridLevel::Major, &StyleUpdate::new());

        let limits = ViewLimits::new((1.0, 1000.0), (0.001, 10.0)).unwrap();
        let frame = Frame::new(
            DVec2::new(800.0, 600.0),
            AxisScale::log10(),
            AxisScale::Linear,
            limits,
        );
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);

        assert!(!renderer.polylines.is_empty());
        for (points, _) in &renderer.polylines {
            assert_eq!(points.len(), CURVE_SAMPLES);
        }
    }

    #[test]
    fn hidden_axis_and_identity_order_draw_nothing() {
        let frame = log_log_frame(unit_limits());

        let mut axis = OrderAxis::new(1);
        axis.grid(true, GridLevel::Both, &StyleUpdate::new());
        axis.set_visible(false);
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);
        assert!(renderer.polylines.is_empty());

        let mut axis = OrderAxis::new(0);
        axis.grid(true, GridLevel::Both, &StyleUpdate::new());
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);
        assert!(renderer.polylines.is_empty() && renderer.labels.is_empty());
    }

    #[test]
    fn non_positive_limits_do_not_panic() {
        let mut axis = OrderAxis::new(-1);
        axis.grid(true, GridLevel::Both, &StyleUpdate::new());

        // Zero lower boundary: log clipping substitutes a floor.
        let limits = ViewLimits::new((1.0, 100.0), (0.0, 10.0)).unwrap();
        let frame = log_log_frame(limits);
        let mut renderer = VectorRenderer::new();
        axis.draw(&mut renderer, &frame);
        assert!(!renderer.polylines.is_empty());
    }

    #[test]
    fn plot_converts_into_base_quantity() {
        let axis = OrderAxis::new(1);
        // A constant 1 mm displacement line corresponds to v = 1e-3·2πf.
        let series = axis.plot(&[[1.0, 1e-3], [10.0, 1e-3], [100.0, 1e-3]]);
        for (i, f) in [1.0, 10.0, 100.0].into_iter().enumerate() {
            assert!(close(series.positions[i][0], f));
            assert!(close(series.positions[i][1], 1e-3 * TAU * f));
        }
    }
}
