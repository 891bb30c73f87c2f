// File: crates/chartplot-core/src/document.rs
// Summary: Input document model for digitized charts and the JSON loader.
// Notes:
// - Two input shapes are accepted: the full object form
//   `{title, xAxisLabel, yAxisLabel, series}` and the digitizer's bare export,
//   which is just the `series` array.
// - Fields other than `real` on a point (e.g. `pixel`) are ignored.

use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TITLE: &str = "Digitized Chart";
pub const DEFAULT_X_LABEL: &str = "X Axis (Real World Units)";
pub const DEFAULT_Y_LABEL: &str = "Y Axis (Real World Units)";
pub const DEFAULT_SERIES_NAME: &str = "Unnamed";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_axis_label: Option<String>,
    #[serde(default)]
    pub y_axis_label: Option<String>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SeriesSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub points: Vec<Point>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub real: Option<RealCoord>,
}

/// A sample in data units. Either axis may be null when the digitizer had no
/// calibration for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct RealCoord {
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl ChartDocument {
    /// Parse a document from JSON text, accepting either input shape.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        if value.is_array() {
            let series: Vec<SeriesSpec> = serde_json::from_value(value)?;
            return Ok(Self { series, ..Self::default() });
        }
        serde_json::from_value(value)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    pub fn x_axis_label(&self) -> &str {
        self.x_axis_label.as_deref().unwrap_or(DEFAULT_X_LABEL)
    }

    pub fn y_axis_label(&self) -> &str {
        self.y_axis_label.as_deref().unwrap_or(DEFAULT_Y_LABEL)
    }
}

impl SeriesSpec {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_SERIES_NAME)
    }

    /// Points with both real coordinates present, in input order.
    /// A point missing either axis is dropped as a whole so x and y stay paired.
    pub fn plotted_points(&self) -> Vec<(f64, f64)> {
        self.points.iter().filter_map(Point::real_xy).collect()
    }
}

impl Point {
    #[inline]
    pub fn real_xy(&self) -> Option<(f64, f64)> {
        let real = self.real?;
        Some((real.x?, real.y?))
    }
}

/// Read and parse the chart document at `path`.
///
/// The caller is expected to have checked that `path` exists; a file that
/// vanished in between still surfaces as [`ChartError::MissingFile`].
pub fn load(path: impl AsRef<Path>) -> ChartResult<ChartDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ChartError::MissingFile { path: path.to_path_buf() },
        _ => ChartError::Read { path: path.to_path_buf(), source },
    })?;

    let doc = ChartDocument::from_json_str(&text)
        .map_err(|source| ChartError::Parse { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), series = doc.series.len(), "loaded chart document");
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let doc = ChartDocument::from_json_str(r#"{"series": []}"#).unwrap();
        assert_eq!(doc.title(), DEFAULT_TITLE);
        assert_eq!(doc.x_axis_label(), DEFAULT_X_LABEL);
        assert_eq!(doc.y_axis_label(), DEFAULT_Y_LABEL);

        let empty = ChartDocument::from_json_str("{}").unwrap();
        assert!(empty.series.is_empty());
    }

    #[test]
    fn bare_series_array_is_accepted() {
        let text = r##"[
            {"name": "A", "color": "#ff0000",
             "points": [{"pixel": {"x": 10, "y": 20}, "real": {"x": 1.0, "y": 2.0}}]}
        ]"##;
        let doc = ChartDocument::from_json_str(text).unwrap();
        assert_eq!(doc.title(), DEFAULT_TITLE);
        assert_eq!(doc.series.len(), 1);
        assert_eq!(doc.series[0].color.as_deref(), Some("#ff0000"));
        assert_eq!(doc.series[0].plotted_points(), vec![(1.0, 2.0)]);
    }

    #[test]
    fn null_axes_drop_whole_points() {
        let text = r#"{"series": [{"name": "s", "points": [
            {"real": {"x": 1, "y": 1}},
            {"real": {"x": null, "y": 5}},
            {"real": {"x": 3, "y": null}},
            {"real": null},
            {},
            {"real": {"x": 4, "y": 8}}
        ]}]}"#;
        let doc = ChartDocument::from_json_str(text).unwrap();
        assert_eq!(doc.series[0].plotted_points(), vec![(1.0, 1.0), (4.0, 8.0)]);
    }

    #[test]
    fn unnamed_series_gets_placeholder() {
        let doc = ChartDocument::from_json_str(r#"{"series": [{"points": []}]}"#).unwrap();
        assert_eq!(doc.series[0].name(), DEFAULT_SERIES_NAME);
    }

    #[test]
    fn wrong_shapes_are_parse_errors() {
        assert!(ChartDocument::from_json_str("not json").is_err());
        assert!(ChartDocument::from_json_str(r#"{"series": "nope"}"#).is_err());
        assert!(ChartDocument::from_json_str(r#"{"series": [{"points": [{"real": {"x": "1"}}]}]}"#).is_err());
    }

    #[test]
    fn load_reports_parse_and_missing_errors() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.json");
        std::fs::write(&bad, "not json").unwrap();
        let err = load(&bad).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Parse);

        let err = load(dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MissingFile);
    }
}
