//! Shock response spectrum (SRS) profile on a gravity-unit nomogram.
//!
//! Profile breakpoints: 10 Hz at 10 g ramping to 100 Hz at 100 g (constant
//! velocity), then a 100 g plateau out to 2 kHz (constant acceleration).
//! The differentiation axis is labeled in multiples of g.

use freq_nomogram::{
    Color, FrequencySpacePlot, GRAVITY, LineStyle, PlotConfig, StyleUpdate, VectorRenderer,
};
use glam::DVec2;

fn srs_breakpoints() -> Vec<[f64; 2]> {
    vec![
        [10.0, 10.0 * GRAVITY],
        [100.0, 100.0 * GRAVITY],
        [2000.0, 100.0 * GRAVITY],
    ]
}

fn main() {
    env_logger::init();

    let mut plot = FrequencySpacePlot::new(&PlotConfig {
        use_gravity_formatter: true,
        ..PlotConfig::default()
    });
    plot.set_limits((1.0, 10000.0), (0.01, 10.0))
        .expect("limits are finite and ordered");

    // Acceleration data converted to velocity by the differentiation axis.
    let profile = plot
        .daxis()
        .plot(&srs_breakpoints())
        .with_label("SRS profile")
        .with_color(Color::from_rgb(0.8, 0.1, 0.1))
        .with_width(2.0);
    plot.add_series(profile).expect("series is non-empty");

    plot.grid(
        true,
        "major",
        &StyleUpdate::new()
            .with_color(Color::BLACK)
            .with_line_style(LineStyle::Solid)
            .with_width(0.8)
            .with_alpha(0.4),
    )
    .expect("selector is valid");
    plot.grid(
        true,
        "minor",
        &StyleUpdate::new()
            .with_color(Color::BLACK)
            .with_line_style(LineStyle::Solid)
            .with_width(0.5)
            .with_alpha(0.2),
    )
    .expect("selector is valid");

    let (amin, amax) = plot.daxis().value_range(plot.limits());
    println!("visible acceleration range: {amin:.3} .. {amax:.3} m/s²");
    let (smin, smax) = plot.iaxis().value_range(plot.limits());
    println!("visible displacement range: {smin:.3e} .. {smax:.3e} m");

    let mut renderer = VectorRenderer::new();
    plot.draw(&mut renderer, DVec2::new(1000.0, 800.0));

    println!(
        "recorded {} polylines and {} labels",
        renderer.polylines.len(),
        renderer.labels.len(),
    );
    for label in renderer.labels.iter().filter(|l| l.text.ends_with(" g")) {
        println!(
            "gravity label {:>8} at ({:6.1}, {:6.1})",
            label.text, label.position_px.x, label.position_px.y,
        );
    }
}
