use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, ShapedLine, TextRun, Window,
    font, point, px, quad,
};

use crate::geom::Point;
use crate::render::{LineSegment, LineStyle, RenderCommand, RenderList, TextRotation, TextStyle};
use crate::style::Color;
use crate::view::Bounds as PixelBounds;

const HALO_RINGS: usize = 12;

/// Paint a render list into the canvas occupying `surface`.
///
/// Image commands are skipped here; the view overlays them as `img`
/// elements.
pub(crate) fn paint_frame(
    render: &RenderList,
    surface: Bounds<Pixels>,
    window: &mut Window,
    cx: &mut App,
) {
    let origin = surface.origin;
    let to_px = |p: Point| point(origin.x + px(p.x as f32), origin.y + px(p.y as f32));

    for command in render.commands() {
        match command {
            RenderCommand::Clear { color } => fill(window, surface, *color),
            RenderCommand::ClearRect { rect, color } => {
                fill(window, to_bounds(*rect, &to_px), *color);
            }
            RenderCommand::Marker {
                center,
                color,
                size,
            } => {
                paint_circle(window, to_px(*center), (*size as f32 * 0.5).max(1.0), *color);
            }
            RenderCommand::Halo {
                center,
                radius,
                color,
            } => paint_halo(window, to_px(*center), *radius as f32, *color),
            RenderCommand::Image { .. } => {}
            RenderCommand::Text {
                position,
                text,
                style,
            } => paint_text(window, cx, *position, text, style, &to_px),
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, segments, *style, &to_px);
            }
        }
    }
}

fn fill(window: &mut Window, bounds: Bounds<Pixels>, color: Color) {
    window.paint_quad(quad(
        bounds,
        Corners::all(px(0.0)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_circle(window: &mut Window, center: gpui::Point<Pixels>, radius: f32, color: Color) {
    let bounds = Bounds::from_corners(
        point(center.x - px(radius), center.y - px(radius)),
        point(center.x + px(radius), center.y + px(radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

// Stacked translucent discs; their alpha accumulates towards the centre.
fn paint_halo(window: &mut Window, center: gpui::Point<Pixels>, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let ring_alpha = 1.0 / HALO_RINGS as f32;
    for ring in 0..HALO_RINGS {
        let r = radius * (1.0 - ring as f32 / HALO_RINGS as f32);
        paint_circle(window, center, r, color.with_alpha(ring_alpha));
    }
}

fn paint_lines(
    window: &mut Window,
    segments: &[LineSegment],
    style: LineStyle,
    to_px: &impl Fn(Point) -> gpui::Point<Pixels>,
) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px((style.width as f32).max(0.5)));
    for segment in segments {
        builder.move_to(to_px(segment.start));
        builder.line_to(to_px(segment.end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    anchor: Point,
    text: &str,
    style: &TextStyle,
    to_px: &impl Fn(Point) -> gpui::Point<Pixels>,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size as f32);
    match style.rotation {
        TextRotation::None => {
            let line = shape(window, text, font_size, style.color);
            let width = f32::from(line.width) as f64;
            let height = f32::from(line.ascent + line.descent) as f64;
            let origin = style.aligned_origin(anchor, (width, height));
            let _ = line.paint(to_px(origin), line.ascent + line.descent, window, cx);
        }
        TextRotation::Ccw90 => {
            // GPUI cannot rotate shaped text; stack the glyphs in a column.
            let glyphs: Vec<ShapedLine> = text
                .chars()
                .map(|c| shape(window, &c.to_string(), font_size, style.color))
                .collect();
            let column_width = glyphs
                .iter()
                .map(|line| f32::from(line.width))
                .fold(0.0_f32, f32::max) as f64;
            let line_height = glyphs
                .iter()
                .map(|line| f32::from(line.ascent + line.descent))
                .fold(0.0_f32, f32::max) as f64;
            let extent = (column_width, line_height * glyphs.len() as f64);
            let origin = style.aligned_origin(anchor, extent);
            for (row, line) in glyphs.iter().enumerate() {
                let inset = (column_width - f32::from(line.width) as f64) / 2.0;
                let at = Point::new(origin.x + inset, origin.y + line_height * row as f64);
                let _ = line.paint(to_px(at), px(line_height as f32), window, cx);
            }
        }
    }
}

fn shape(window: &Window, text: &str, size: Pixels, color: Color) -> ShapedLine {
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    window
        .text_system()
        .shape_line(text.to_string().into(), size, &[run], None)
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}

fn to_bounds(rect: PixelBounds, to_px: &impl Fn(Point) -> gpui::Point<Pixels>) -> Bounds<Pixels> {
    Bounds::from_corners(
        to_px(Point::new(rect.left.min(rect.right), rect.top.min(rect.bottom))),
        to_px(Point::new(rect.left.max(rect.right), rect.top.max(rect.bottom))),
    )
}
