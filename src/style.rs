//! Colors, per-label sample styles and the chart theme.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    /// Light gray used for axis lines.
    pub const LIGHT_GRAY: Self = Self::new(0.827, 0.827, 0.827, 1.0);
    /// Fully transparent white.
    pub const TRANSPARENT: Self = Self::new(1.0, 1.0, 1.0, 0.0);

    /// Same color with its alpha multiplied by `alpha`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: self.a * alpha,
            ..self
        }
    }
}

/// Which style field a sample is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// A filled circle in the style's color.
    #[default]
    Point,
    /// The style's image, centred on the sample.
    Image,
    /// The style's text, centred on the sample.
    Text,
}

/// Rendering hints for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleStyle {
    /// Marker color.
    pub color: Color,
    /// Image source (path or URI) for [`IconKind::Image`].
    #[serde(default)]
    pub image: Option<String>,
    /// Glyph or short text for [`IconKind::Text`].
    #[serde(default)]
    pub text: Option<String>,
}

impl SampleStyle {
    /// Style with only a marker color.
    pub fn color(color: Color) -> Self {
        Self {
            color,
            image: None,
            text: None,
        }
    }

    /// Attach an image source.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Styles keyed by sample label.
#[derive(Debug, Clone)]
pub struct StyleTable<L> {
    styles: HashMap<L, SampleStyle>,
}

impl<L: Eq + Hash> StyleTable<L> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Add or replace the style for `label`.
    pub fn insert(&mut self, label: L, style: SampleStyle) {
        self.styles.insert(label, style);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, label: L, style: SampleStyle) -> Self {
        self.insert(label, style);
        self
    }

    /// Look up the style for `label`.
    pub fn get(&self, label: &L) -> Option<&SampleStyle> {
        self.styles.get(label)
    }

    /// Number of styled labels.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl<L: Eq + Hash> Default for StyleTable<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Eq + Hash> FromIterator<(L, SampleStyle)> for StyleTable<L> {
    fn from_iter<I: IntoIterator<Item = (L, SampleStyle)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().collect(),
        }
    }
}

/// Visual theme for charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Surface background.
    pub background: Color,
    /// Halo color of the hovered sample.
    pub hover: Color,
    /// Halo color of the selected sample.
    pub selected: Color,
    /// Dashed axis line color.
    pub axis: Color,
    /// Axis titles, extent labels and text icons.
    pub text: Color,
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            hover: Color::WHITE,
            selected: Color::YELLOW,
            axis: Color::LIGHT_GRAY,
            text: Color::BLACK,
        }
    }
}
