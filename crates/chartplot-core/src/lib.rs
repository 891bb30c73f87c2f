// File: crates/chartplot-core/src/lib.rs
// Summary: Core library entry point; exports the document loader and the PNG chart renderer.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod color;
pub mod document;
pub mod error;

pub use chart::{render, Chart, LegendEntry, RenderOptions};
pub use series::Series;
pub use axis::Axis;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use color::parse_color;
pub use document::{load, ChartDocument, Point, RealCoord, SeriesSpec};
pub use error::{ChartError, ChartResult, ErrorKind};
