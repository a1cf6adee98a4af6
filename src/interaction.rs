//! Gesture state machine for panning, zooming, hovering and selecting.
//!
//! The machine is a pure reducer: [`handle_event`] takes the current
//! [`ViewState`] and one [`InputEvent`] and returns the next state together
//! with the side effects the host should perform. Render backends translate
//! their native pointer events into [`InputEvent`]s and feed them through in
//! arrival order.

use crate::config::ChartConfig;
use crate::geom::{Point, distance};
use crate::math::nearest_index;
use crate::transform::ViewTransform;

/// Raw input delivered by the host, in pixel coordinates of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Point),
    /// Pointer moved, with or without a button held.
    PointerMove(Point),
    /// Primary button released.
    PointerUp(Point),
    /// Wheel scrolled; positive `delta_y` scrolls down and zooms out.
    Wheel {
        /// Vertical wheel delta. Only its sign is used.
        delta_y: f64,
    },
    /// Click delivered after a pointer-up on the surface.
    Click(Point),
}

/// Coarse gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// No button held.
    Idle,
    /// A drag is in progress.
    Dragging,
}

/// Per-gesture drag bookkeeping, in data-space coordinates.
///
/// `offset` survives pointer-up so the following click can tell a drag from
/// a plain click; it is cleared at the next pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Pointer location at pointer-down.
    pub start: Point,
    /// Latest pointer location during the drag.
    pub end: Point,
    /// Pan delta of the gesture, already scaled by `scale²`.
    pub offset: Point,
    /// Whether a button is currently held.
    pub dragging: bool,
}

impl DragState {
    fn begin(start: Point) -> Self {
        Self {
            start,
            end: Point::ZERO,
            offset: Point::ZERO,
            dragging: true,
        }
    }

    /// Whether the last gesture moved the view.
    pub fn moved(&self) -> bool {
        self.offset != Point::ZERO
    }
}

/// Complete interaction state of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Pan/zoom transform.
    pub transform: ViewTransform,
    /// Drag bookkeeping.
    pub drag: DragState,
    /// Index of the hovered sample.
    pub hovered: Option<usize>,
    /// Index of the selected sample.
    pub selected: Option<usize>,
}

impl ViewState {
    /// Fresh state at the default view with nothing hovered or selected.
    pub fn new(transform: ViewTransform) -> Self {
        Self {
            transform,
            drag: DragState::default(),
            hovered: None,
            selected: None,
        }
    }

    /// Current gesture.
    pub fn gesture(&self) -> Gesture {
        if self.drag.dragging {
            Gesture::Dragging
        } else {
            Gesture::Idle
        }
    }
}

/// Tunables consumed by the reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    /// Scale change per wheel notch.
    pub zoom_step: f64,
    /// Lower scale clamp.
    pub min_scale: f64,
    /// Upper scale clamp.
    pub max_scale: f64,
    /// Pixel distance below which a sample is hovered.
    pub hit_radius: f64,
}

impl InteractionSettings {
    /// Settings derived from a chart configuration.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            zoom_step: config.zoom_step,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            hit_radius: config.hit_radius(),
        }
    }
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

/// Result of feeding one event through the reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// The next state.
    pub state: ViewState,
    /// Whether the surface should be redrawn.
    pub repaint: bool,
    /// Set when a click produced a selection decision; carries the new
    /// selection, which may equal the previous one.
    pub selection: Option<Option<usize>>,
}

impl Transition {
    fn repaint(state: ViewState) -> Self {
        Self {
            state,
            repaint: true,
            selection: None,
        }
    }
}

/// Advance the state machine by one event.
///
/// `points` are the sample locations in data space, in dataset order.
pub fn handle_event(
    state: &ViewState,
    event: InputEvent,
    points: &[Point],
    settings: &InteractionSettings,
) -> Transition {
    let mut next = *state;
    match event {
        InputEvent::PointerDown(position) => {
            next.drag = DragState::begin(next.transform.to_data(position));
            Transition {
                state: next,
                repaint: false,
                selection: None,
            }
        }
        InputEvent::PointerMove(position) => {
            if next.drag.dragging {
                let scale = next.transform.scale();
                next.drag.end = next.transform.to_data(position);
                next.drag.offset = (next.drag.start - next.drag.end) * (scale * scale);
                next.transform = next.transform.apply_pan(next.drag.offset);
            }
            next.hovered = hit_test(&next.transform, position, points, settings.hit_radius);
            Transition::repaint(next)
        }
        InputEvent::PointerUp(_) => {
            if next.drag.dragging {
                next.transform = next.transform.commit_pan(next.drag.offset);
                next.drag.dragging = false;
            }
            Transition {
                state: next,
                repaint: false,
                selection: None,
            }
        }
        InputEvent::Wheel { delta_y } => {
            next.transform = next.transform.apply_zoom(
                wheel_direction(delta_y),
                settings.zoom_step,
                settings.min_scale,
                settings.max_scale,
            );
            Transition::repaint(next)
        }
        InputEvent::Click(_) => {
            if next.drag.moved() {
                return Transition {
                    state: next,
                    repaint: false,
                    selection: None,
                };
            }
            next.selected = toggle_selection(next.selected, next.hovered);
            Transition {
                state: next,
                repaint: true,
                selection: Some(next.selected),
            }
        }
    }
}

/// Sample under the pointer, if any lies within `radius` pixels.
///
/// Every sample is mapped through the live transform and the nearest one is
/// accepted only when strictly closer than `radius`.
pub fn hit_test(
    transform: &ViewTransform,
    position: Point,
    points: &[Point],
    radius: f64,
) -> Option<usize> {
    let pixels: Vec<Point> = points.iter().map(|p| transform.to_pixel(*p)).collect();
    let index = nearest_index(position, &pixels)?;
    (distance(pixels[index], position) < radius).then_some(index)
}

/// Selection after clicking with `hovered` under the pointer.
pub fn toggle_selection(selected: Option<usize>, hovered: Option<usize>) -> Option<usize> {
    match hovered {
        Some(index) if selected == Some(index) => None,
        Some(index) => Some(index),
        None => None,
    }
}

fn wheel_direction(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Bounds;

    const POINTS: [Point; 2] = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];

    fn setup() -> (ViewState, InteractionSettings) {
        let config = ChartConfig::with_size(220.0);
        let transform = ViewTransform::new(
            Bounds::inset_square(config.size, config.margin()),
            Bounds::data_extent(POINTS),
        );
        (
            ViewState::new(transform),
            InteractionSettings::from_config(&config),
        )
    }

    fn feed(state: ViewState, events: &[InputEvent], settings: &InteractionSettings) -> ViewState {
        events.iter().fold(state, |state, event| {
            handle_event(&state, *event, &POINTS, settings).state
        })
    }

    #[test]
    fn pointer_down_starts_drag() {
        let (state, settings) = setup();
        let next = handle_event(
            &state,
            InputEvent::PointerDown(Point::new(24.2, 195.8)),
            &POINTS,
            &settings,
        );
        assert_eq!(next.state.gesture(), Gesture::Dragging);
        assert!(next.state.drag.start.distance(Point::ZERO) < 1e-9);
        assert_eq!(next.state.drag.offset, Point::ZERO);
        assert!(!next.repaint);
    }

    #[test]
    fn hover_respects_hit_radius() {
        let (state, settings) = setup();
        let origin = state.transform.to_pixel(POINTS[0]);

        let inside = Point::new(origin.x + settings.hit_radius - 0.5, origin.y);
        let hovered = handle_event(&state, InputEvent::PointerMove(inside), &POINTS, &settings);
        assert_eq!(hovered.state.hovered, Some(0));
        assert!(hovered.repaint);

        let outside = Point::new(origin.x + settings.hit_radius + 0.5, origin.y);
        let cleared = handle_event(
            &hovered.state,
            InputEvent::PointerMove(outside),
            &POINTS,
            &settings,
        );
        assert_eq!(cleared.state.hovered, None);
    }

    #[test]
    fn hover_radius_is_exclusive() {
        let config = ChartConfig {
            size: 200.0,
            margin_ratio: 0.125,
            ..ChartConfig::default()
        };
        let settings = InteractionSettings::from_config(&config);
        let state = ViewState::new(ViewTransform::new(
            Bounds::inset_square(config.size, config.margin()),
            Bounds::data_extent(POINTS),
        ));
        let origin = state.transform.to_pixel(POINTS[0]);
        assert_eq!(origin, Point::new(25.0, 175.0));
        assert_eq!(settings.hit_radius, 12.5);

        let edge = Point::new(origin.x + settings.hit_radius, origin.y);
        let at_edge = handle_event(&state, InputEvent::PointerMove(edge), &POINTS, &settings);
        assert_eq!(at_edge.state.hovered, None);

        let just_inside = Point::new(origin.x + 12.4, origin.y);
        let inside = handle_event(&state, InputEvent::PointerMove(just_inside), &POINTS, &settings);
        assert_eq!(inside.state.hovered, Some(0));
    }

    #[test]
    fn drag_previews_then_commits() {
        let (state, settings) = setup();
        let start = Point::new(110.0, 110.0);
        let end = Point::new(130.0, 110.0);
        let dragging = feed(
            state,
            &[InputEvent::PointerDown(start), InputEvent::PointerMove(end)],
            &settings,
        );
        assert_eq!(dragging.transform.offset(), Point::ZERO);
        assert!(dragging.drag.offset.x < 0.0);
        assert_ne!(dragging.transform.data_window(), state.transform.data_window());

        let released = feed(dragging, &[InputEvent::PointerUp(end)], &settings);
        assert_eq!(released.gesture(), Gesture::Idle);
        assert_eq!(released.transform.offset(), dragging.drag.offset);
        assert_eq!(released.drag.offset, dragging.drag.offset);
        assert_eq!(released.transform.data_window(), dragging.transform.data_window());
    }

    #[test]
    fn drag_offset_scales_with_square_of_scale() {
        let (state, settings) = setup();
        let zoomed = feed(
            state,
            &[InputEvent::Wheel { delta_y: 1.0 }; 50],
            &settings,
        );
        assert!((zoomed.transform.scale() - 2.0).abs() < 1e-9);
        let moved = feed(
            zoomed,
            &[
                InputEvent::PointerDown(Point::new(100.0, 100.0)),
                InputEvent::PointerMove(Point::new(100.0 + 171.6 / 10.0, 100.0)),
            ],
            &settings,
        );
        assert!((moved.drag.offset.x + 4.0).abs() < 1e-6);
        assert!(moved.drag.offset.y.abs() < 1e-9);
    }

    #[test]
    fn pointer_up_without_drag_keeps_offset() {
        let (state, settings) = setup();
        let first = feed(
            state,
            &[
                InputEvent::PointerDown(Point::new(100.0, 100.0)),
                InputEvent::PointerMove(Point::new(120.0, 100.0)),
                InputEvent::PointerUp(Point::new(120.0, 100.0)),
            ],
            &settings,
        );
        let stray = feed(first, &[InputEvent::PointerUp(Point::new(0.0, 0.0))], &settings);
        assert_eq!(stray.transform.offset(), first.transform.offset());
    }

    #[test]
    fn wheel_zooms_in_both_directions() {
        let (state, settings) = setup();
        let out = handle_event(&state, InputEvent::Wheel { delta_y: 3.0 }, &POINTS, &settings);
        assert!((out.state.transform.scale() - 1.02).abs() < 1e-12);
        assert!(out.repaint);
        let back = handle_event(
            &out.state,
            InputEvent::Wheel { delta_y: -120.0 },
            &POINTS,
            &settings,
        );
        assert!((back.state.transform.scale() - 1.0).abs() < 1e-12);
        let none = handle_event(&state, InputEvent::Wheel { delta_y: 0.0 }, &POINTS, &settings);
        assert_eq!(none.state.transform.scale(), 1.0);
    }

    #[test]
    fn click_toggles_selection() {
        let (state, settings) = setup();
        let origin = state.transform.to_pixel(POINTS[0]);
        let far = state.transform.to_pixel(POINTS[1]);

        let hovered = feed(state, &[InputEvent::PointerMove(origin)], &settings);
        let clicked = handle_event(&hovered, InputEvent::Click(origin), &POINTS, &settings);
        assert_eq!(clicked.state.selected, Some(0));
        assert_eq!(clicked.selection, Some(Some(0)));

        let again = handle_event(&clicked.state, InputEvent::Click(origin), &POINTS, &settings);
        assert_eq!(again.state.selected, None);
        assert_eq!(again.selection, Some(None));

        let other = feed(
            clicked.state,
            &[InputEvent::PointerMove(far), InputEvent::Click(far)],
            &settings,
        );
        assert_eq!(other.selected, Some(1));
    }

    #[test]
    fn click_on_empty_space_clears_selection() {
        let (state, settings) = setup();
        let origin = state.transform.to_pixel(POINTS[0]);
        let empty = Point::new(110.0, 110.0);
        let selected = feed(
            state,
            &[
                InputEvent::PointerMove(origin),
                InputEvent::Click(origin),
                InputEvent::PointerMove(empty),
            ],
            &settings,
        );
        assert_eq!(selected.selected, Some(0));
        let cleared = handle_event(&selected, InputEvent::Click(empty), &POINTS, &settings);
        assert_eq!(cleared.state.selected, None);
        assert_eq!(cleared.selection, Some(None));
    }

    #[test]
    fn drag_suppresses_click() {
        let (state, settings) = setup();
        let origin = state.transform.to_pixel(POINTS[0]);
        let end = Point::new(origin.x + 30.0, origin.y - 30.0);
        // Grabbing the sample drags it along, so it ends under the pointer.
        let after = feed(
            state,
            &[
                InputEvent::PointerDown(origin),
                InputEvent::PointerMove(end),
                InputEvent::PointerUp(end),
            ],
            &settings,
        );
        assert_eq!(after.hovered, Some(0));
        let click = handle_event(&after, InputEvent::Click(end), &POINTS, &settings);
        assert_eq!(click.state.selected, None);
        assert_eq!(click.selection, None);
        assert!(!click.repaint);
    }

    #[test]
    fn degenerate_dataset_never_hovers() {
        let single = [Point::new(3.0, 3.0)];
        let transform = ViewTransform::new(
            Bounds::inset_square(220.0, 24.2),
            Bounds::data_extent(single),
        );
        let hovered = hit_test(&transform, Point::new(110.0, 110.0), &single, 12.1);
        assert_eq!(hovered, None);
        assert_eq!(hit_test(&transform, Point::ZERO, &[], 12.1), None);
    }

    #[test]
    fn toggle_selection_table() {
        assert_eq!(toggle_selection(None, Some(2)), Some(2));
        assert_eq!(toggle_selection(Some(2), Some(2)), None);
        assert_eq!(toggle_selection(Some(1), Some(2)), Some(2));
        assert_eq!(toggle_selection(Some(1), None), None);
    }
}
