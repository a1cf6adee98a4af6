use std::hash::Hash;
use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels, ScrollWheelEvent,
    SharedString, Window, canvas, div, img, px,
};

use crate::chart::Chart;
use crate::geom::Point;
use crate::interaction::InputEvent;
use crate::render::{RenderCommand, RenderList};

use super::paint::{paint_frame, to_hsla};

/// A GPUI view that renders a [`Chart`] and drives its gestures.
///
/// Left-button drags pan, the scroll wheel zooms, and releasing the button
/// without having panned toggles the selection of the hovered sample.
pub struct ScatterView<L> {
    chart: Arc<RwLock<Chart<L>>>,
    origin: Arc<RwLock<Point>>,
}

impl<L> Clone for ScatterView<L> {
    fn clone(&self) -> Self {
        Self {
            chart: Arc::clone(&self.chart),
            origin: Arc::clone(&self.origin),
        }
    }
}

impl<L: Eq + Hash + Send + Sync + 'static> ScatterView<L> {
    /// Create a new view for the given chart.
    pub fn new(chart: Chart<L>) -> Self {
        tracing::info!(
            samples = chart.samples().len(),
            size = chart.config().size,
            "scatter view created"
        );
        Self {
            chart: Arc::new(RwLock::new(chart)),
            origin: Arc::new(RwLock::new(Point::ZERO)),
        }
    }

    /// Get a handle for reading or mutating the underlying chart.
    ///
    /// Call `cx.notify()` on the view after writing through the handle.
    pub fn chart_handle(&self) -> ChartHandle<L> {
        ChartHandle {
            chart: Arc::clone(&self.chart),
        }
    }

    fn dispatch(&mut self, event: InputEvent, cx: &mut Context<Self>) {
        let repaint = self
            .chart
            .write()
            .expect("chart lock")
            .handle_event(event);
        if repaint {
            cx.notify();
        }
    }

    fn local(&self, position: gpui::Point<Pixels>) -> Point {
        let origin = *self.origin.read().expect("origin lock");
        Point::new(
            f32::from(position.x) as f64 - origin.x,
            f32::from(position.y) as f64 - origin.y,
        )
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let pos = self.local(ev.position);
        self.dispatch(InputEvent::PointerDown(pos), cx);
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let pos = self.local(ev.position);
        self.dispatch(InputEvent::PointerMove(pos), cx);
    }

    /// Select a sample by index, or clear the selection, and repaint.
    pub fn select_sample(&mut self, index: Option<usize>, cx: &mut Context<Self>) {
        let repaint = self
            .chart
            .write()
            .expect("chart lock")
            .select_sample(index);
        if repaint {
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, ev: &MouseUpEvent, cx: &mut Context<Self>) {
        let pos = self.local(ev.position);
        let repaint = self.chart.write().expect("chart lock").release(pos);
        if repaint {
            cx.notify();
        }
    }

    fn on_scroll(&mut self, ev: &ScrollWheelEvent, cx: &mut Context<Self>) {
        let delta = ev.delta.pixel_delta(px(16.0));
        // GPUI reports wheel-down as a negative delta.
        let delta_y = -f32::from(delta.y) as f64;
        if delta_y == 0.0 {
            return;
        }
        cx.stop_propagation();
        self.dispatch(InputEvent::Wheel { delta_y }, cx);
    }
}

impl<L: Eq + Hash + Send + Sync + 'static> Render for ScatterView<L> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chart = Arc::clone(&self.chart);
        let origin = Arc::clone(&self.origin);
        let (size, image_size, background, images) = {
            let chart = chart.read().expect("chart lock");
            let size = chart.config().size;
            let image_size = chart.config().image_size;
            (
                size as f32,
                image_size as f32,
                chart.theme().background,
                image_overlays(&chart.render(), size, image_size),
            )
        };

        div()
            .relative()
            .overflow_hidden()
            .size(px(size))
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, _, _| {
                        *origin.write().expect("origin lock") = Point::new(
                            f32::from(bounds.origin.x) as f64,
                            f32::from(bounds.origin.y) as f64,
                        );
                        chart.read().expect("chart lock").render()
                    },
                    move |bounds, render, window, cx| {
                        paint_frame(&render, bounds, window, cx);
                    },
                )
                .size_full(),
            )
            .children(images.into_iter().map(move |overlay| {
                img(SharedString::from(overlay.source))
                    .absolute()
                    .left(px(overlay.left as f32))
                    .top(px(overlay.top as f32))
                    .size(px(image_size))
                    .opacity(overlay.opacity)
            }))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_scroll_wheel(cx.listener(|this, ev, _, cx| {
                this.on_scroll(ev, cx);
            }))
    }
}

/// An image sample placed over the canvas.
#[derive(Debug, Clone, PartialEq)]
struct ImageOverlay {
    left: f64,
    top: f64,
    source: String,
    opacity: f32,
}

/// Image commands of a frame as overlays, dropping those entirely outside
/// the `size × size` surface.
fn image_overlays(render: &RenderList, size: f64, image_size: f64) -> Vec<ImageOverlay> {
    let half = image_size / 2.0;
    render
        .commands()
        .iter()
        .filter_map(|command| match command {
            RenderCommand::Image {
                center,
                source,
                opacity,
            } => Some(ImageOverlay {
                left: center.x - half,
                top: center.y - half,
                source: source.clone(),
                opacity: *opacity,
            }),
            _ => None,
        })
        .filter(|overlay| {
            overlay.left < size
                && overlay.top < size
                && overlay.left + image_size > 0.0
                && overlay.top + image_size > 0.0
        })
        .collect()
}

/// A handle for reading or mutating a [`Chart`] held inside a [`ScatterView`].
///
/// The handle clones cheaply and can be moved into async tasks.
pub struct ChartHandle<L> {
    chart: Arc<RwLock<Chart<L>>>,
}

impl<L> Clone for ChartHandle<L> {
    fn clone(&self) -> Self {
        Self {
            chart: Arc::clone(&self.chart),
        }
    }
}

impl<L> ChartHandle<L> {
    /// Read the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&Chart<L>) -> R) -> R {
        let chart = self.chart.read().expect("chart lock");
        f(&chart)
    }

    /// Mutate the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut Chart<L>) -> R) -> R {
        let mut chart = self.chart.write().expect("chart lock");
        f(&mut chart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(x: f64, y: f64) -> RenderCommand {
        RenderCommand::Image {
            center: Point::new(x, y),
            source: "icons/a.png".to_string(),
            opacity: 0.5,
        }
    }

    #[test]
    fn overlays_are_centred_on_samples() {
        let mut render = RenderList::new();
        render.push(image(100.0, 60.0));
        let overlays = image_overlays(&render, 220.0, 32.0);
        assert_eq!(
            overlays,
            vec![ImageOverlay {
                left: 84.0,
                top: 44.0,
                source: "icons/a.png".to_string(),
                opacity: 0.5,
            }]
        );
    }

    #[test]
    fn overlays_outside_the_surface_are_dropped() {
        let mut render = RenderList::new();
        render.push(image(-20.0, 100.0));
        render.push(image(100.0, 240.0));
        render.push(image(-10.0, 100.0));
        let overlays = image_overlays(&render, 220.0, 32.0);
        assert_eq!(overlays.len(), 1);
        assert_eq!(overlays[0].left, -26.0);
    }
}
