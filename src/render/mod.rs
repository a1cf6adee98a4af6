//! Rendering primitives.
//!
//! These types are backend-agnostic and are used by render backends (such as
//! the GPUI backend) to describe how a chart should be drawn. All positions
//! are in pixel space of the chart surface.

pub mod frame;

use crate::geom::Point;
use crate::style::Color;
use crate::view::Bounds;

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Horizontal text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor.
    Left,
    /// Text is centred on the anchor.
    #[default]
    Center,
    /// Text ends at the anchor.
    Right,
}

/// Vertical text alignment relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    /// Anchor at the top of the text.
    Top,
    /// Anchor at the middle of the text.
    #[default]
    Middle,
    /// Anchor at the bottom of the text.
    Bottom,
}

/// Text orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRotation {
    /// Left to right.
    #[default]
    None,
    /// Rotated a quarter turn counter-clockwise; reads bottom to top.
    ///
    /// Alignment is interpreted in the rotated frame: `Left` extends the
    /// text upwards from the anchor and `Top` places it right of the anchor.
    Ccw90,
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f64,
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Vertical alignment.
    pub v_align: VerticalAlign,
    /// Orientation.
    pub rotation: TextRotation,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            size: 12.0,
            align: TextAlign::default(),
            v_align: VerticalAlign::default(),
            rotation: TextRotation::default(),
        }
    }
}

impl TextStyle {
    /// Top-left corner of a text block of `extent` (width, height) on screen.
    ///
    /// For rotated text `extent` is the on-screen box of the rotated block.
    pub fn aligned_origin(&self, anchor: Point, extent: (f64, f64)) -> Point {
        let (width, height) = extent;
        let along = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => 0.5,
            TextAlign::Right => 1.0,
        };
        let across = match self.v_align {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Middle => 0.5,
            VerticalAlign::Bottom => 1.0,
        };
        match self.rotation {
            TextRotation::None => Point::new(anchor.x - width * along, anchor.y - height * across),
            TextRotation::Ccw90 => Point::new(
                anchor.x - width * across,
                anchor.y - height * (1.0 - along),
            ),
        }
    }
}

/// A line segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill the whole surface.
    Clear {
        /// Fill color.
        color: Color,
    },
    /// Fill a rectangle, hiding anything drawn under it.
    ClearRect {
        /// Rectangle in pixels.
        rect: Bounds,
        /// Fill color.
        color: Color,
    },
    /// Draw a filled circle.
    Marker {
        /// Circle centre.
        center: Point,
        /// Fill color.
        color: Color,
        /// Diameter in pixels.
        size: f64,
    },
    /// Draw a radial glow fading from `color` at the centre to transparent.
    Halo {
        /// Glow centre.
        center: Point,
        /// Outer radius in pixels.
        radius: f64,
        /// Color at the centre.
        color: Color,
    },
    /// Draw an image centred on a point.
    Image {
        /// Image centre.
        center: Point,
        /// Path or URI of the image.
        source: String,
        /// Opacity in `0.0..=1.0`.
        opacity: f32,
    },
    /// Draw text.
    Text {
        /// Anchor position, interpreted through the style's alignment.
        position: Point,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
    /// Draw line segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Split a polyline into dash segments of length `dash` separated by `gap`.
///
/// The dash pattern continues across vertices.
pub fn dashed_segments(points: &[Point], dash: f64, gap: f64) -> Vec<LineSegment> {
    let mut out = Vec::new();
    if dash.is_nan() || dash <= 0.0 {
        return out;
    }
    let period = dash + gap.max(0.0);
    let mut phase = 0.0;
    for window in points.windows(2) {
        let (start, end) = (window[0], window[1]);
        let length = start.distance(end);
        if !(length > 0.0 && length.is_finite()) {
            continue;
        }
        let at = |t: f64| start + (end - start) * (t / length);
        let mut travelled = 0.0;
        while travelled < length {
            let in_dash = phase < dash;
            let limit = if in_dash { dash } else { period };
            let run = (limit - phase).min(length - travelled);
            if in_dash {
                out.push(LineSegment::new(at(travelled), at(travelled + run)));
            }
            travelled += run;
            phase += run;
            if phase >= period {
                phase -= period;
            }
        }
    }
    out
}
