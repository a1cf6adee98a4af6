//! gpui_scatterplot renders labelled point samples as an interactive scatter
//! chart: pan by dragging, zoom with the wheel, hover and click to select.
//!
//! The core is backend-agnostic. A [`Chart`] consumes [`InputEvent`]s through
//! a pure gesture reducer and produces a [`RenderList`] for a drawing backend.
//! The GPUI backend lives behind the `gpui` feature.

#![forbid(unsafe_code)]

pub mod axis;
pub mod chart;
pub mod config;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod interaction;
pub mod math;
pub mod render;
pub mod sample;
pub mod style;
pub mod transform;
pub mod view;

pub use axis::{AxisExtents, ExtentLabels};
pub use chart::{Chart, ChartBuilder};
pub use config::{ChartConfig, ConfigError};
pub use geom::Point;
#[cfg(feature = "gpui")]
pub use gpui_backend::{ChartHandle, ScatterView};
pub use interaction::{
    DragState, Gesture, InputEvent, InteractionSettings, Transition, ViewState, handle_event,
};
pub use render::{
    LineSegment, LineStyle, RenderCommand, RenderList, TextAlign, TextRotation, TextStyle,
    VerticalAlign,
};
pub use sample::Sample;
pub use style::{Color, IconKind, SampleStyle, StyleTable, Theme};
pub use transform::ViewTransform;
pub use view::Bounds;
