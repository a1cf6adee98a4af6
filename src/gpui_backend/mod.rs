//! GPUI integration for gpui_scatterplot.
//!
//! This module provides a GPUI view that paints a [`Chart`](crate::chart::Chart)
//! and forwards mouse and scroll-wheel input to its gesture state machine.

mod paint;
mod view;

pub use view::{ChartHandle, ScatterView};
