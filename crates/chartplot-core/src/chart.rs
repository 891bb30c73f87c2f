// File: crates/chartplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::color::cycle_color;
use crate::document::{ChartDocument, DEFAULT_TITLE};
use crate::error::{ChartError, ChartResult};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_step, precision_from_step};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, AUTOSCALE_MARGIN, HEIGHT, LINE_WIDTH, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 6;
const TICK_LEN: f32 = 5.0;
const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;
const TITLE_FONT: f32 = 18.0;
const LEGEND_FONT: f32 = 13.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    pub draw_grid: bool,
    pub draw_legend: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_grid: true,
            draw_legend: true,
        }
    }
}

impl RenderOptions {
    /// Pixel rectangle of the data area inside the insets.
    pub fn plot_rect(&self) -> RectI32 {
        let left = self.insets.left as i32;
        let top = self.insets.top as i32;
        let right = (self.width - self.insets.right as i32).max(left + 1);
        let bottom = (self.height - self.insets.bottom as i32).max(top + 1);
        RectI32::from_ltrb(left, top, right, bottom)
    }
}

/// One legend row: a plotted series and the color it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub name: String,
    pub color: skia::Color,
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Build an autoscaled chart from a loaded document. Fails only on an
    /// unsupported series color.
    pub fn from_document(doc: &ChartDocument) -> ChartResult<Self> {
        let mut chart = Self::new();
        chart.title = doc.title().to_string();
        chart.x_axis.label = doc.x_axis_label().to_string();
        chart.y_axis.label = doc.y_axis_label().to_string();
        for spec in &doc.series {
            chart.add_series(Series::from_spec(spec)?);
        }
        chart.autoscale_axes(AUTOSCALE_MARGIN);
        Ok(chart)
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the plotted data with `margin` (fraction of span) padding.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Series that will be drawn, in draw order, with their resolved colors.
    /// Series without an explicit color take the next default-cycle color.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        let mut cycle = 0usize;
        self.series
            .iter()
            .filter(|s| s.is_plottable())
            .map(|s| {
                let color = s.color.unwrap_or_else(|| {
                    let c = cycle_color(cycle);
                    cycle += 1;
                    c
                });
                LegendEntry { name: s.name.clone(), color }
            })
            .collect()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// Missing parent directories are created; an existing file is overwritten.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> ChartResult<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;

        let write_err = |source| ChartError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(path, &bytes).map_err(write_err)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote chart PNG");
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart into an unpremultiplied RGBA8 buffer.
    /// Returns `(pixels, width, height, row_stride_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Encode);
        }
        Ok((pixels, w as u32, h as u32, stride))
    }

    /// Draw into a fresh raster surface owned by the caller; it is released
    /// when the returned value drops.
    fn render_surface(&self, opts: &RenderOptions) -> ChartResult<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = opts.plot_rect();
        let sx = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);
        let x_ticks = self.x_axis.ticks(X_TICK_TARGET);
        let y_ticks = self.y_axis.ticks(Y_TICK_TARGET);

        if opts.draw_grid {
            draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme);
        }

        let legend = self.legend_entries();
        if legend.is_empty() {
            tracing::warn!(title = %self.title, "no series with plottable points");
        }

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        let plotted = self.series.iter().filter(|s| s.is_plottable());
        for (s, entry) in plotted.zip(&legend) {
            draw_line_series(canvas, &sx, &sy, s, entry.color);
        }
        for s in self.series.iter().filter(|s| !s.is_plottable()) {
            tracing::debug!(series = %s.name, "skipping series with no plottable points");
        }
        canvas.restore();

        draw_axes(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, theme);

        let shaper = opts.draw_labels.then(TextShaper::new);
        if let Some(shaper) = &shaper {
            draw_tick_labels(canvas, shaper, plot, &sx, &sy, &x_ticks, &y_ticks, &self.x_axis, &self.y_axis, theme);
            draw_titles(canvas, shaper, plot, opts, &self.title, &self.x_axis.label, &self.y_axis.label);
        }
        if opts.draw_legend && !legend.is_empty() {
            let occupied: Vec<(f32, f32)> = self
                .series
                .iter()
                .flat_map(|s| s.data_xy.iter().map(move |&(x, y)| (sx.to_px(x), sy.to_px(y))))
                .collect();
            draw_legend(canvas, shaper.as_ref(), plot, &legend, &occupied, theme);
        }
    }
}

/// Build a chart from `doc` and write it to `output` as PNG.
pub fn render(doc: &ChartDocument, output: impl AsRef<Path>, opts: &RenderOptions) -> ChartResult<()> {
    Chart::from_document(doc)?.render_to_png(opts, output)
}

// ---- helpers ----------------------------------------------------------------

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let paint = stroke(theme.grid, 1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    // Frame around the plot area
    canvas.draw_rect(plot.to_skia(), &stroke(theme.axis_line, 1.0));

    let tick = stroke(theme.tick, 1.0);
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, b), (px, b + TICK_LEN), &tick);
    }
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l - TICK_LEN, py), (l, py), &tick);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let x_prec = precision_from_step(nice_step((x_axis.max - x_axis.min) / X_TICK_TARGET as f64));
    let y_prec = precision_from_step(nice_step((y_axis.max - y_axis.min) / Y_TICK_TARGET as f64));
    let (l, b) = (plot.left as f32, plot.bottom as f32);

    for &x in x_ticks {
        let label = format_tick(x, x_prec);
        shaper.draw(canvas, &label, sx.to_px(x), b + TICK_LEN + TICK_FONT + 4.0, Anchor::Center, TICK_FONT, theme.tick, true);
    }
    for &y in y_ticks {
        let label = format_tick(y, y_prec);
        shaper.draw(canvas, &label, l - TICK_LEN - 4.0, sy.to_px(y) + TICK_FONT * 0.35, Anchor::Right, TICK_FONT, theme.tick, true);
    }
}

fn draw_titles(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    opts: &RenderOptions,
    title: &str,
    x_label: &str,
    y_label: &str,
) {
    let theme = &opts.theme;
    let title_y = (plot.top as f32 * 0.5 + TITLE_FONT * 0.4).max(TITLE_FONT);
    shaper.draw(canvas, title, plot.center_x(), title_y, Anchor::Center, TITLE_FONT, theme.title, false);

    let x_label_y = (plot.bottom as f32 + TICK_LEN + TICK_FONT + 16.0 + LABEL_FONT).min(opts.height as f32 - 6.0);
    shaper.draw(canvas, x_label, plot.center_x(), x_label_y, Anchor::Center, LABEL_FONT, theme.axis_label, false);

    let y_label_x = (plot.left as f32 * 0.25).max(LABEL_FONT * 0.6);
    shaper.draw_vertical(canvas, y_label, y_label_x, plot.center_y(), LABEL_FONT, theme.axis_label);
}

fn draw_line_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series, color: skia::Color) {
    let data = &series.data_xy;
    let Some(&(x0, y0)) = data.first() else { return };

    if data.len() == 1 {
        // A lone sample has no segment to stroke; mark it so it stays visible.
        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(color);
        canvas.draw_circle((sx.to_px(x0), sy.to_px(y0)), LINE_WIDTH * 1.5, &dot);
        return;
    }

    let mut builder = skia::PathBuilder::new();
    builder.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        builder.line_to((sx.to_px(x), sy.to_px(y)));
    }
    let path = builder.detach();

    let mut paint = stroke(color, LINE_WIDTH);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    canvas.draw_path(&path, &paint);
}

fn draw_legend(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: RectI32,
    entries: &[LegendEntry],
    occupied: &[(f32, f32)],
    theme: &Theme,
) {
    const PAD: f32 = 8.0;
    const SWATCH: f32 = 28.0;
    const GAP: f32 = 8.0;
    let row_h = LEGEND_FONT + 8.0;

    let text_w = match shaper {
        Some(shaper) => entries
            .iter()
            .map(|e| shaper.measure_width(&e.name, LEGEND_FONT, false))
            .fold(0.0f32, f32::max),
        None => 0.0,
    };
    let box_w = PAD * 2.0 + SWATCH + if shaper.is_some() { GAP + text_w } else { 0.0 };
    let box_h = PAD * 2.0 + row_h * entries.len() as f32;

    let frame = legend_frame(plot, box_w, box_h, occupied);
    let top = frame.top;

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.legend_fill);
    canvas.draw_round_rect(frame, 4.0, 4.0, &fill);
    canvas.draw_round_rect(frame, 4.0, 4.0, &stroke(theme.legend_border, 1.0));

    for (i, entry) in entries.iter().enumerate() {
        let cy = top + PAD + row_h * (i as f32 + 0.5);
        let x0 = frame.left + PAD;
        canvas.draw_line((x0, cy), (x0 + SWATCH, cy), &stroke(entry.color, LINE_WIDTH));
        if let Some(shaper) = shaper {
            shaper.draw_left(canvas, &entry.name, x0 + SWATCH + GAP, cy + LEGEND_FONT * 0.35, LEGEND_FONT, theme.axis_label, false);
        }
    }
}

/// Pick the plot corner whose legend box covers the fewest data points.
/// Ties go to the earlier corner: upper-right, upper-left, lower-left, lower-right.
fn legend_frame(plot: RectI32, box_w: f32, box_h: f32, occupied: &[(f32, f32)]) -> skia::Rect {
    const INSET: f32 = 10.0;
    let (l, t, r, b) = (plot.left as f32 + INSET, plot.top as f32 + INSET, plot.right as f32 - INSET, plot.bottom as f32 - INSET);
    let candidates = [
        skia::Rect::from_ltrb(r - box_w, t, r, t + box_h),
        skia::Rect::from_ltrb(l, t, l + box_w, t + box_h),
        skia::Rect::from_ltrb(l, b - box_h, l + box_w, b),
        skia::Rect::from_ltrb(r - box_w, b - box_h, r, b),
    ];
    let covered = |rect: &skia::Rect| {
        occupied
            .iter()
            .filter(|&&(x, y)| x >= rect.left && x <= rect.right && y >= rect.top && y <= rect.bottom)
            .count()
    };
    candidates
        .iter()
        .copied()
        .min_by_key(|rect| covered(rect))
        .unwrap_or(candidates[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_skips_empty_series_and_cycles_defaults() {
        let mut chart = Chart::new();
        chart.add_series(Series::new("first", vec![(0.0, 0.0), (1.0, 1.0)]));
        chart.add_series(Series::new("empty", vec![]));
        chart.add_series(Series::new("red", vec![(0.0, 1.0)]).with_color(skia::Color::from_rgb(255, 0, 0)));
        chart.add_series(Series::new("second", vec![(0.0, 2.0), (1.0, 0.5)]));

        let legend = chart.legend_entries();
        let names: Vec<_> = legend.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["first", "red", "second"]);
        assert_eq!(legend[0].color, cycle_color(0));
        assert_eq!(legend[1].color, skia::Color::from_rgb(255, 0, 0));
        // explicit colors do not consume a cycle slot
        assert_eq!(legend[2].color, cycle_color(1));
    }

    #[test]
    fn from_document_applies_labels_and_autoscale() {
        let doc = ChartDocument::from_json_str(
            r#"{"title": "T", "xAxisLabel": "time", "series": [
                {"name": "A", "points": [{"real": {"x": 0, "y": 0}}, {"real": {"x": 10, "y": 100}}]}
            ]}"#,
        )
        .unwrap();
        let chart = Chart::from_document(&doc).unwrap();
        assert_eq!(chart.title, "T");
        assert_eq!(chart.x_axis.label, "time");
        assert_eq!(chart.y_axis.label, crate::document::DEFAULT_Y_LABEL);
        assert!((chart.x_axis.min + 0.5).abs() < 1e-9);
        assert!((chart.y_axis.max - 105.0).abs() < 1e-9);
    }

    #[test]
    fn legend_avoids_crowded_corner() {
        let plot = RectI32::from_ltrb(0, 0, 400, 300);
        // points packed into the upper-right corner
        let occupied = [(380.0, 20.0), (370.0, 30.0), (360.0, 25.0)];
        let frame = legend_frame(plot, 80.0, 40.0, &occupied);
        assert_eq!((frame.left, frame.top), (10.0, 10.0));

        let frame = legend_frame(plot, 80.0, 40.0, &[]);
        assert_eq!((frame.right, frame.top), (390.0, 10.0));
    }

    #[test]
    fn plot_rect_respects_insets() {
        let opts = RenderOptions::default();
        assert_eq!(opts.plot_rect(), RectI32::from_ltrb(96, 64, 1168, 720));

        // a canvas smaller than its insets still yields a 1px plot area
        let tiny = RenderOptions { width: 100, height: 100, ..RenderOptions::default() };
        assert_eq!(tiny.plot_rect(), RectI32::from_ltrb(96, 64, 97, 65));
    }
}
