//! Chart configuration and its defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::IconKind;

/// Errors reported when validating a [`ChartConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The surface size is not a positive, finite number of pixels.
    #[error("surface size must be positive and finite, got {0}")]
    InvalidSize(f64),
    /// Transparency lies outside `(0, 1]`.
    #[error("transparency must lie in (0, 1], got {0}")]
    InvalidTransparency(f64),
    /// The margin ratio leaves no drawable area.
    #[error("margin ratio must lie in [0, 0.5), got {0}")]
    InvalidMargin(f64),
    /// The wheel zoom step is not positive.
    #[error("zoom step must be positive and finite, got {0}")]
    InvalidZoomStep(f64),
    /// The scale clamp range is empty or non-positive.
    #[error("scale range must satisfy 0 < min <= max, got {min}..={max}")]
    InvalidScaleRange {
        /// Lower clamp.
        min: f64,
        /// Upper clamp.
        max: f64,
    },
}

/// Configuration for one chart.
///
/// Field names deserialize in camelCase, so an options object such as
/// `{"size": 220, "axesLabels": ["x", "y"], "icon": "text"}` parses directly.
/// Every missing field takes the value listed in [`Default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Edge length of the square drawing surface in pixels.
    pub size: f64,
    /// Titles of the x and y axes.
    pub axes_labels: [String; 2],
    /// Which style field samples are drawn from.
    pub icon: IconKind,
    /// Global alpha for samples that are not emphasised.
    pub transparency: f64,
    /// Margin as a fraction of `size`.
    pub margin_ratio: f64,
    /// Scale change per wheel notch.
    pub zoom_step: f64,
    /// Lower scale clamp.
    pub min_scale: f64,
    /// Upper scale clamp.
    pub max_scale: f64,
    /// Marker diameter for [`IconKind::Point`].
    pub point_size: f64,
    /// Glyph size for [`IconKind::Text`].
    pub text_size: f64,
    /// Edge length of images drawn for [`IconKind::Image`].
    pub image_size: f64,
    /// Decimals shown on axis extent labels.
    pub label_decimals: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size: 500.0,
            axes_labels: [String::new(), String::new()],
            icon: IconKind::Point,
            transparency: 1.0,
            margin_ratio: 0.11,
            zoom_step: 0.02,
            min_scale: 0.02,
            max_scale: 2.0,
            point_size: 8.0,
            text_size: 20.0,
            image_size: 32.0,
            label_decimals: 2,
        }
    }
}

impl ChartConfig {
    /// Create a configuration for a surface of `size` pixels.
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the axis titles.
    pub fn with_axes_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.axes_labels = [x.into(), y.into()];
        self
    }

    /// Set the icon kind.
    pub fn with_icon(mut self, icon: IconKind) -> Self {
        self.icon = icon;
        self
    }

    /// Set the transparency of non-emphasised samples.
    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency;
        self
    }

    /// Margin around the plotting region in pixels.
    pub fn margin(&self) -> f64 {
        self.size * self.margin_ratio
    }

    /// Pixel radius within which a sample counts as hovered.
    pub fn hit_radius(&self) -> f64 {
        self.margin() / 2.0
    }

    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !(self.transparency > 0.0 && self.transparency <= 1.0) {
            return Err(ConfigError::InvalidTransparency(self.transparency));
        }
        if !(0.0..0.5).contains(&self.margin_ratio) {
            return Err(ConfigError::InvalidMargin(self.margin_ratio));
        }
        if !self.zoom_step.is_finite() || self.zoom_step <= 0.0 {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) || !self.max_scale.is_finite()
        {
            return Err(ConfigError::InvalidScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        Ok(())
    }
}
