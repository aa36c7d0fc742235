//! Constant-displacement line drawn two ways on a nomogram plot.
//!
//! The same 1 mm displacement profile is plotted once as precomputed
//! velocity data on the primary axis and once through the integration
//! axis, which converts displacement into velocity internally. Both series
//! land on identical pixels; the recorded geometry proves it.

use std::f64::consts::TAU;

use freq_nomogram::{
    Color, FrequencySpacePlot, PlotConfig, Series, StyleUpdate, VectorRenderer,
};
use glam::DVec2;

fn main() {
    env_logger::init();

    let mut plot = FrequencySpacePlot::new(&PlotConfig::default());
    plot.set_limits((1.0, 1000.0), (1e-4, 10.0))
        .expect("limits are finite and ordered");

    let freqs: Vec<f64> = (0..100).map(|i| 10f64.powf(3.0 * i as f64 / 99.0)).collect();

    // Velocity equivalent of a constant 1 mm displacement: v = s·2πf.
    let velocity: Vec<[f64; 2]> = freqs.iter().map(|&f| [f, 1e-3 * TAU * f]).collect();
    plot.add_series(
        Series::line(velocity)
            .with_label("velocity of s = 1 mm")
            .with_color(Color::BLACK),
    )
    .expect("series is non-empty");

    // The same line supplied as displacement data on the integration axis.
    let displacement: Vec<[f64; 2]> = freqs.iter().map(|&f| [f, 1e-3]).collect();
    plot.add_series(
        plot.iaxis()
            .plot(&displacement)
            .with_label("displacement s = 1 mm")
            .with_color(Color::from_rgb(0.8, 0.2, 0.2)),
    )
    .expect("series is non-empty");

    plot.grid(true, "both", &StyleUpdate::new())
        .expect("selector is valid");

    let mut renderer = VectorRenderer::new();
    plot.draw(&mut renderer, DVec2::new(800.0, 600.0));

    println!(
        "recorded {} polylines, {} labels, {} tick marks",
        renderer.polylines.len(),
        renderer.labels.len(),
        renderer.tick_marks.len(),
    );
    let (a, _) = &renderer.polylines[0];
    let (b, _) = &renderer.polylines[1];
    let max_gap = a
        .iter()
        .zip(b.iter())
        .map(|(p, q)| (*p - *q).length())
        .fold(0.0f64, f64::max);
    println!("max pixel gap between the two renditions: {max_gap:.3e}");

    for label in renderer.labels.iter().take(8) {
        println!(
            "label {:>12} at ({:6.1}, {:6.1}) rotated {:6.1}°",
            label.text, label.position_px.x, label.position_px.y, label.rotation_deg,
        );
    }
}
