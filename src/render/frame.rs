//! Frame building: turns a chart's current state into render commands.

use std::hash::Hash;

use tracing::warn;

use crate::axis::AxisExtents;
use crate::chart::Chart;
use crate::geom::Point;
use crate::sample::Sample;
use crate::style::{Color, IconKind};
use crate::view::Bounds;

use super::{
    LineStyle, RenderCommand, RenderList, TextAlign, TextRotation, TextStyle, VerticalAlign,
    dashed_segments,
};

const AXIS_DASH: f64 = 5.0;
const AXIS_GAP: f64 = 4.0;
const AXIS_WIDTH: f64 = 2.0;
const TITLE_SIZE_RATIO: f64 = 0.6;
const EXTENT_SIZE_RATIO: f64 = 0.3;

/// Build the full frame for `chart`.
///
/// Samples are drawn first with the configured transparency, then the
/// hovered and selected samples with their halos, then the axes. The margin
/// strips are cleared before the axes so panned samples never spill outside
/// the plotting region.
pub fn build_frame<L: Eq + Hash>(chart: &Chart<L>) -> RenderList {
    let mut render = RenderList::new();
    render.push(RenderCommand::Clear {
        color: chart.theme().background,
    });

    let alpha = chart.config().transparency as f32;
    let mut unstyled = 0usize;
    for sample in chart.samples() {
        if !push_sample(&mut render, chart, sample, alpha) {
            unstyled += 1;
        }
    }
    if unstyled > 0 {
        warn!(unstyled, "samples without a usable style were skipped");
    }

    if let Some(sample) = chart.hovered_sample() {
        emphasize(&mut render, chart, sample, chart.theme().hover);
    }
    if let Some(sample) = chart.selected_sample() {
        emphasize(&mut render, chart, sample, chart.theme().selected);
    }

    build_axes(&mut render, chart);
    render
}

/// Push one sample. Returns `false` when its style is missing or lacks the
/// field the configured icon reads.
fn push_sample<L: Eq + Hash>(
    render: &mut RenderList,
    chart: &Chart<L>,
    sample: &Sample<L>,
    alpha: f32,
) -> bool {
    let Some(style) = chart.styles().get(&sample.label) else {
        return false;
    };
    let center = chart.transform().to_pixel(sample.point);
    if !center.is_finite() {
        return true;
    }
    let config = chart.config();
    match config.icon {
        IconKind::Point => render.push(RenderCommand::Marker {
            center,
            color: style.color.with_alpha(alpha),
            size: config.point_size,
        }),
        IconKind::Image => {
            let Some(source) = style.image.as_ref() else {
                return false;
            };
            render.push(RenderCommand::Image {
                center,
                source: source.clone(),
                opacity: alpha,
            });
        }
        IconKind::Text => {
            let Some(text) = style.text.as_ref() else {
                return false;
            };
            render.push(RenderCommand::Text {
                position: center,
                text: text.clone(),
                style: TextStyle {
                    color: chart.theme().text.with_alpha(alpha),
                    size: config.text_size,
                    ..TextStyle::default()
                },
            });
        }
    }
    true
}

fn emphasize<L: Eq + Hash>(
    render: &mut RenderList,
    chart: &Chart<L>,
    sample: &Sample<L>,
    color: Color,
) {
    let center = chart.transform().to_pixel(sample.point);
    if !center.is_finite() {
        return;
    }
    render.push(RenderCommand::Halo {
        center,
        radius: chart.margin(),
        color,
    });
    push_sample(render, chart, sample, 1.0);
}

fn build_axes<L: Eq + Hash>(render: &mut RenderList, chart: &Chart<L>) {
    let config = chart.config();
    let theme = chart.theme();
    let size = config.size;
    let margin = chart.margin();
    let pixels = chart.transform().pixel_bounds();

    for rect in [
        Bounds::new(0.0, size, 0.0, margin),
        Bounds::new(0.0, margin, 0.0, size),
        Bounds::new(size - margin, size, 0.0, size),
        Bounds::new(0.0, size, size - margin, size),
    ] {
        render.push(RenderCommand::ClearRect {
            rect,
            color: theme.background,
        });
    }

    let title = TextStyle {
        color: theme.text,
        size: margin * TITLE_SIZE_RATIO,
        ..TextStyle::default()
    };
    let [x_title, y_title] = &config.axes_labels;
    push_text(
        render,
        Point::new(size / 2.0, pixels.bottom + margin / 2.0),
        x_title,
        title,
    );
    push_text(
        render,
        Point::new(pixels.left - margin / 2.0, size / 2.0),
        y_title,
        TextStyle {
            rotation: TextRotation::Ccw90,
            ..title
        },
    );

    render.push(RenderCommand::LineSegments {
        segments: dashed_segments(
            &[
                Point::new(pixels.left, pixels.top),
                Point::new(pixels.left, pixels.bottom),
                Point::new(pixels.right, pixels.bottom),
            ],
            AXIS_DASH,
            AXIS_GAP,
        ),
        style: LineStyle {
            color: theme.axis,
            width: AXIS_WIDTH,
        },
    });

    let labels = AxisExtents::from_transform(chart.transform()).labels(config.label_decimals);
    let extent = TextStyle {
        color: theme.text,
        size: margin * EXTENT_SIZE_RATIO,
        ..TextStyle::default()
    };
    let bottom_left = Point::new(pixels.left, pixels.bottom);
    push_text(
        render,
        bottom_left,
        &labels.min_x,
        TextStyle {
            align: TextAlign::Left,
            v_align: VerticalAlign::Top,
            ..extent
        },
    );
    push_text(
        render,
        bottom_left,
        &labels.min_y,
        TextStyle {
            align: TextAlign::Left,
            v_align: VerticalAlign::Bottom,
            rotation: TextRotation::Ccw90,
            ..extent
        },
    );
    push_text(
        render,
        Point::new(pixels.right, pixels.bottom),
        &labels.max_x,
        TextStyle {
            align: TextAlign::Right,
            v_align: VerticalAlign::Top,
            ..extent
        },
    );
    push_text(
        render,
        Point::new(pixels.left, pixels.top),
        &labels.max_y,
        TextStyle {
            align: TextAlign::Right,
            v_align: VerticalAlign::Bottom,
            rotation: TextRotation::Ccw90,
            ..extent
        },
    );
}

fn push_text(render: &mut RenderList, position: Point, text: &str, style: TextStyle) {
    if text.is_empty() {
        return;
    }
    render.push(RenderCommand::Text {
        position,
        text: text.to_string(),
        style,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChartConfig;
    use crate::interaction::InputEvent;
    use crate::style::{SampleStyle, StyleTable};

    fn styles() -> StyleTable<&'static str> {
        [
            (
                "a",
                SampleStyle::color(Color::BLACK)
                    .with_text("A")
                    .with_image("icons/a.png"),
            ),
            ("b", SampleStyle::color(Color::new(0.0, 0.0, 1.0, 1.0))),
        ]
        .into_iter()
        .collect()
    }

    fn chart(config: ChartConfig) -> Chart<&'static str> {
        Chart::builder(vec![
            Sample::new((0.0, 0.0), "a"),
            Sample::new((10.0, 10.0), "b"),
        ])
        .config(config)
        .styles(styles())
        .build()
        .expect("valid chart")
    }

    fn markers(render: &RenderList) -> Vec<(Point, Color)> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Marker { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect()
    }

    fn texts(render: &RenderList) -> Vec<&str> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn frame_starts_with_clear_and_draws_every_sample() {
        let render = chart(ChartConfig::with_size(220.0).with_transparency(0.5)).render();
        assert!(matches!(
            render.commands().first(),
            Some(RenderCommand::Clear { .. })
        ));
        let markers = markers(&render);
        assert_eq!(markers.len(), 2);
        assert!(markers.iter().all(|(_, color)| color.a == 0.5));
        assert!((markers[0].0.x - 24.2).abs() < 1e-9);
        assert!((markers[0].0.y - 195.8).abs() < 1e-9);
    }

    #[test]
    fn axes_show_titles_and_extents() {
        let render = chart(ChartConfig::with_size(220.0).with_axes_labels("width", "height")).render();
        let texts = texts(&render);
        assert_eq!(texts, vec!["width", "height", "0.00", "0.00", "10.00", "10.00"]);
        let clears = render
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::ClearRect { .. }))
            .count();
        assert_eq!(clears, 4);
        assert!(render.commands().iter().any(|command| matches!(
            command,
            RenderCommand::LineSegments { segments, .. } if !segments.is_empty()
        )));
    }

    #[test]
    fn hovered_and_selected_samples_get_halos() {
        let mut chart = chart(ChartConfig::with_size(220.0).with_transparency(0.4));
        let origin = chart.transform().to_pixel(Point::ZERO);
        chart.handle_event(InputEvent::PointerMove(origin));
        chart.select_sample(Some(1));

        let render = chart.render();
        let halos: Vec<Color> = render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Halo { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(halos, vec![chart.theme().hover, chart.theme().selected]);

        let markers = markers(&render);
        assert_eq!(markers.len(), 4);
        assert_eq!(markers[2].1.a, 1.0);
        assert_eq!(markers[3].1.a, 1.0);
    }

    #[test]
    fn icon_kind_selects_style_field() {
        let text = chart(ChartConfig::with_size(220.0).with_icon(IconKind::Text)).render();
        assert_eq!(texts(&text).first(), Some(&"A"));
        assert!(markers(&text).is_empty());

        let image = chart(ChartConfig::with_size(220.0).with_icon(IconKind::Image)).render();
        let sources: Vec<&str> = image
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Image { source, .. } => Some(source.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(sources, vec!["icons/a.png"]);
    }

    #[test]
    fn missing_styles_are_skipped() {
        let chart = Chart::builder(vec![
            Sample::new((0.0, 0.0), "a"),
            Sample::new((1.0, 1.0), "unknown"),
        ])
        .config(ChartConfig::with_size(220.0))
        .styles(styles())
        .build()
        .expect("valid chart");
        assert_eq!(markers(&chart.render()).len(), 1);
    }

    #[test]
    fn degenerate_dataset_draws_no_samples() {
        let chart = Chart::builder(vec![Sample::new((2.0, 2.0), "a")])
            .config(ChartConfig::with_size(220.0))
            .styles(styles())
            .build()
            .expect("valid chart");
        let render = chart.render();
        assert!(markers(&render).is_empty());
        // The window collapses to a point, so every extent reads the same value.
        assert_eq!(texts(&render), vec!["2.00"; 4]);
    }
}
