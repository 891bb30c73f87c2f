// File: crates/chartplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use chartplot_core::{Axis, Chart, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::new("diag", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);
    assert_eq!((w, h), (opts.width as u32, opts.height as u32));

    // Top-left pixel is the opaque white light-theme background
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn theme_background_fills_margins() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.theme = Theme::dark();
    opts.draw_labels = false;
    let (px, ..) = chart.render_to_rgba8(&opts).expect("rgba render");
    let bg = opts.theme.background;
    assert_eq!(&px[0..4], &[bg.r(), bg.g(), bg.b(), 255]);
}

#[test]
fn custom_size_is_honored() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.width = 1000;
    opts.height = 600;
    opts.draw_labels = false;
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (1000, 600));
    assert_eq!(px.len(), 1000 * 600 * 4);
}
