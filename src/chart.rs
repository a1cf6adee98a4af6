//! Chart entry points and builders.

use std::fmt;
use std::hash::Hash;

use tracing::{debug, trace, warn};

use crate::config::{ChartConfig, ConfigError};
use crate::geom::Point;
use crate::interaction::{Gesture, InputEvent, InteractionSettings, ViewState, handle_event};
use crate::render::RenderList;
use crate::render::frame::build_frame;
use crate::sample::{Sample, sample_extent};
use crate::style::{StyleTable, Theme};
use crate::transform::ViewTransform;
use crate::view::Bounds;

type SelectCallback<L> = Box<dyn FnMut(Option<&Sample<L>>) + Send + Sync>;

/// An interactive scatter chart bound to one square drawing surface.
///
/// The chart owns its samples and the current [`ViewState`]. Input events are
/// fed through [`handle_event`](Self::handle_event) in arrival order; each one
/// replaces the state with the reducer's output.
pub struct Chart<L> {
    samples: Vec<Sample<L>>,
    points: Vec<Point>,
    config: ChartConfig,
    styles: StyleTable<L>,
    theme: Theme,
    settings: InteractionSettings,
    state: ViewState,
    on_select: Option<SelectCallback<L>>,
}

impl<L: Eq + Hash> Chart<L> {
    /// Start building a chart over `samples`.
    pub fn builder(samples: Vec<Sample<L>>) -> ChartBuilder<L> {
        ChartBuilder::new(samples)
    }

    /// Access all samples.
    pub fn samples(&self) -> &[Sample<L>] {
        &self.samples
    }

    /// Access the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Access the style table.
    pub fn styles(&self) -> &StyleTable<L> {
        &self.styles
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Current interaction state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Current pan/zoom transform.
    pub fn transform(&self) -> &ViewTransform {
        &self.state.transform
    }

    /// Margin around the plotting region in pixels.
    pub fn margin(&self) -> f64 {
        self.config.margin()
    }

    /// Pixel radius used for hover hit-testing.
    pub fn hit_radius(&self) -> f64 {
        self.settings.hit_radius
    }

    /// Index of the hovered sample.
    pub fn hovered(&self) -> Option<usize> {
        self.state.hovered
    }

    /// Index of the selected sample.
    pub fn selected(&self) -> Option<usize> {
        self.state.selected
    }

    /// The hovered sample.
    pub fn hovered_sample(&self) -> Option<&Sample<L>> {
        self.state.hovered.and_then(|index| self.samples.get(index))
    }

    /// The selected sample.
    pub fn selected_sample(&self) -> Option<&Sample<L>> {
        self.state.selected.and_then(|index| self.samples.get(index))
    }

    /// Feed one input event through the gesture state machine.
    ///
    /// Returns whether the surface needs to be redrawn. Click decisions are
    /// reported to the selection callback, if one is set.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        trace!(?event, "chart input");
        let previous = self.state;
        let transition = handle_event(&previous, event, &self.points, &self.settings);
        self.state = transition.state;

        match (previous.gesture(), self.state.gesture()) {
            (Gesture::Idle, Gesture::Dragging) => {
                debug!(start = ?self.state.drag.start, "drag started");
            }
            (Gesture::Dragging, Gesture::Idle) => {
                debug!(
                    offset = ?self.state.transform.offset(),
                    moved = self.state.drag.moved(),
                    "drag committed"
                );
            }
            _ => {}
        }
        if previous.transform.scale() != self.state.transform.scale() {
            debug!(scale = self.state.transform.scale(), "zoom changed");
        }

        if let Some(selected) = transition.selection {
            debug!(?selected, "selection decided");
            if let Some(callback) = self.on_select.as_mut() {
                callback(selected.and_then(|index| self.samples.get(index)));
            }
        }
        transition.repaint
    }

    /// Feed a primary-button release.
    ///
    /// Sends `PointerUp` followed by `Click`, but only when the chart saw the
    /// matching press; a release of a press that started elsewhere is
    /// dropped. Returns whether the surface needs to be redrawn.
    pub fn release(&mut self, position: Point) -> bool {
        if self.state.gesture() != Gesture::Dragging {
            trace!(?position, "release without press ignored");
            return false;
        }
        let up = self.handle_event(InputEvent::PointerUp(position));
        let click = self.handle_event(InputEvent::Click(position));
        up || click
    }

    /// Select a sample programmatically, or clear the selection with `None`.
    ///
    /// The selection callback is not invoked. An out-of-range index leaves
    /// the selection unchanged. Returns whether the surface needs to be
    /// redrawn.
    pub fn select_sample(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) if index >= self.samples.len() => {
                warn!(index, len = self.samples.len(), "ignoring selection out of range");
                false
            }
            _ => {
                debug!(?index, "selection set");
                self.state.selected = index;
                true
            }
        }
    }

    /// Return to the default view and drop any drag in progress.
    pub fn reset_view(&mut self) {
        self.state = ViewState {
            transform: self.state.transform.reset(),
            drag: Default::default(),
            ..self.state
        };
    }

    /// Build the render commands for the current state.
    pub fn render(&self) -> RenderList {
        build_frame(self)
    }
}

impl<L: fmt::Debug> fmt::Debug for Chart<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("samples", &self.samples.len())
            .field("config", &self.config)
            .field("state", &self.state)
            .field("on_select", &self.on_select.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a chart before construction.
pub struct ChartBuilder<L> {
    samples: Vec<Sample<L>>,
    config: ChartConfig,
    styles: StyleTable<L>,
    theme: Theme,
    on_select: Option<SelectCallback<L>>,
}

impl<L: Eq + Hash> ChartBuilder<L> {
    fn new(samples: Vec<Sample<L>>) -> Self {
        Self {
            samples,
            config: ChartConfig::default(),
            styles: StyleTable::new(),
            theme: Theme::default(),
            on_select: None,
        }
    }

    /// Set the chart configuration.
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the per-label styles.
    pub fn styles(mut self, styles: StyleTable<L>) -> Self {
        self.styles = styles;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Call `callback` with the new selection after every click decision.
    pub fn on_select(
        mut self,
        callback: impl FnMut(Option<&Sample<L>>) + Send + Sync + 'static,
    ) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Validate the configuration and build the chart.
    ///
    /// The default window is fixed here as the tight extent of the samples.
    pub fn build(self) -> Result<Chart<L>, ConfigError> {
        self.config.validate()?;
        let pixel_bounds = Bounds::inset_square(self.config.size, self.config.margin());
        let default_window = sample_extent(&self.samples);
        let transform = ViewTransform::new(pixel_bounds, default_window);
        debug!(
            samples = self.samples.len(),
            ?pixel_bounds,
            ?default_window,
            "chart built"
        );
        Ok(Chart {
            points: self.samples.iter().map(|sample| sample.point).collect(),
            settings: InteractionSettings::from_config(&self.config),
            samples: self.samples,
            config: self.config,
            styles: self.styles,
            theme: self.theme,
            state: ViewState::new(transform),
            on_select: self.on_select,
        })
    }
}

impl<L: fmt::Debug> fmt::Debug for ChartBuilder<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartBuilder")
            .field("samples", &self.samples.len())
            .field("config", &self.config)
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}
