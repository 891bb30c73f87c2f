// File: crates/chartplot-core/src/series.rs
// Summary: Plottable line series built from document series specs.
// Notes:
// - `data_xy` only ever holds fully-present points; the null filter runs in
//   `from_spec`, so renderers never see half-missing samples.
// - `color` stays `None` when the document gave none; the chart assigns a
//   default-cycle color at legend/render time.

use skia_safe as skia;

use crate::color::parse_color;
use crate::document::SeriesSpec;
use crate::error::{ChartError, ChartResult};

#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub color: Option<skia::Color>,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), color: None, data_xy: data }
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Build a series from its document form, resolving the color string and
    /// dropping points that lack either real coordinate.
    pub fn from_spec(spec: &SeriesSpec) -> ChartResult<Self> {
        let name = spec.name().to_string();
        let color = match spec.color.as_deref() {
            Some(raw) => Some(parse_color(raw).ok_or_else(|| ChartError::UnsupportedColor {
                series: name.clone(),
                value: raw.to_string(),
            })?),
            None => None,
        };

        let data = spec.plotted_points();
        let dropped = spec.points.len() - data.len();
        if dropped > 0 {
            tracing::debug!(series = %name, dropped, kept = data.len(), "dropped points with null real coordinates");
        }
        Ok(Self { name, color, data_xy: data })
    }

    /// A series is drawn (and listed in the legend) only when it has at least one point.
    pub fn is_plottable(&self) -> bool {
        !self.data_xy.is_empty()
    }
}
