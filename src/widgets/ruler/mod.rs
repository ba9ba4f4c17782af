//! The ruler selector widget.
//!
//! [`RulerView`] is the interactive component: it owns the geometry, the
//! scroll controller, the selection and the gesture detector, and wires them
//! together:
//!
//! ```text
//! GestureEvent -> GestureDetector -> Gesture -> ScrollController
//!                                                   |
//!                       listener <- SelectionState <-+-> HostRequests
//! ```
//!
//! The view never schedules anything itself. Every mutating entry point
//! returns [`HostRequests`] telling the host whether to redraw, whether to
//! keep ancestor scrolling suppressed and whether to play a click. While
//! [`RulerView::is_animating`] is true the host calls [`RulerView::tick`]
//! once per frame.

pub mod render;
pub mod style;

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::domain::{
    offset_for_index, RulerConfig, ScrollController, SelectionChange, SelectionState, StepOutcome,
};
use crate::error::ArgumentError;
use crate::input::{Gesture, GestureConfig, GestureDetector, GestureEvent};

pub use render::{
    compute_visible_range, viewport_tick_radius, RulerWidget, TickLength, Viewport, VisibleRange,
};
pub use style::RulerStyle;

/// Preferred height is this many times the text size.
const PREFERRED_HEIGHT_TEXT_LINES: f32 = 5.0;

/// Interaction phase of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// Pointer down, following drags.
    Dragging,
    /// Inertial scroll after release.
    Flinging,
    /// Animating onto the selected tick.
    Settling,
}

/// Work the host should do after a call into the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostRequests {
    /// The view changed and must be drawn again.
    pub redraw: bool,
    /// A gesture is in progress; ancestors must not take over scrolling.
    pub disallow_intercept: bool,
    /// A tap selected a tick; play a click.
    pub click_feedback: bool,
}

impl HostRequests {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl BitOr for HostRequests {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            redraw: self.redraw || rhs.redraw,
            disallow_intercept: self.disallow_intercept || rhs.disallow_intercept,
            click_feedback: self.click_feedback || rhs.click_feedback,
        }
    }
}

impl BitOrAssign for HostRequests {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Receiver of selection changes.
///
/// A view holds at most one listener; registering another replaces it. The
/// listener only gets a shared reference to the view, so it cannot mutate
/// the view from inside the notification.
pub trait ValueChangeListener {
    fn on_change(&mut self, ruler: &RulerView, index: usize, value: f64);
}

impl<F> ValueChangeListener for F
where
    F: FnMut(&RulerView, usize, f64),
{
    fn on_change(&mut self, ruler: &RulerView, index: usize, value: f64) {
        self(ruler, index, value)
    }
}

/// Interactive ruler selector.
pub struct RulerView {
    config: RulerConfig,
    style: RulerStyle,
    scroll: ScrollController,
    selection: SelectionState,
    detector: GestureDetector,
    phase: Phase,
    listener: Option<Box<dyn ValueChangeListener>>,
    text_labels: Vec<String>,
    viewport: Viewport,
    tick_radius: i64,
}

impl fmt::Debug for RulerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RulerView")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("scroll", &self.scroll)
            .field("selection", &self.selection)
            .field("phase", &self.phase)
            .field("has_listener", &self.listener.is_some())
            .field("text_labels", &self.text_labels.len())
            .field("viewport", &self.viewport)
            .finish()
    }
}

impl Default for RulerView {
    fn default() -> Self {
        Self::new(RulerConfig::default())
    }
}

impl RulerView {
    /// Create a view with tick 0 selected. The viewport is empty until
    /// [`RulerView::set_viewport`] is called (rendering does this).
    pub fn new(config: RulerConfig) -> Self {
        let viewport = Viewport::default();
        Self {
            scroll: ScrollController::new(config.content_extent(), viewport.half_extent()),
            tick_radius: viewport_tick_radius(viewport.half_extent(), config.tick_spacing()),
            config,
            style: RulerStyle::default(),
            selection: SelectionState::new(),
            detector: GestureDetector::default(),
            phase: Phase::Idle,
            listener: None,
            text_labels: Vec::new(),
            viewport,
        }
    }

    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.detector = GestureDetector::new(config);
        self
    }

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn style(&self) -> &RulerStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: RulerStyle) -> HostRequests {
        self.style = style;
        HostRequests::redraw()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current continuous scroll offset.
    pub fn offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn half_extent(&self) -> f32 {
        self.scroll.half_extent()
    }

    /// Ticks from the viewport centre to its edge.
    pub fn tick_radius(&self) -> i64 {
        self.tick_radius
    }

    /// Offset that centres the selected tick.
    pub fn snap_offset(&self) -> f32 {
        offset_for_index(&self.config, self.selection.index(), self.half_extent())
    }

    /// Indices the renderer should draw.
    pub fn visible_range(&self) -> VisibleRange {
        compute_visible_range(
            self.selection.index(),
            self.config.tick_count(),
            self.tick_radius,
        )
    }

    /// Height the widget would like: five lines of label text.
    pub fn preferred_height(&self) -> f32 {
        self.style.text_size * PREFERRED_HEIGHT_TEXT_LINES
    }

    pub fn is_animating(&self) -> bool {
        self.scroll.is_animating()
    }

    // ------------------------------------------------------------------------
    // Listener
    // ------------------------------------------------------------------------

    /// Register the selection listener, replacing any previous one.
    pub fn set_listener<L>(&mut self, listener: L)
    where
        L: ValueChangeListener + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    fn notify(&mut self, change: Option<SelectionChange>) {
        let Some(change) = change else {
            return;
        };
        debug!(index = change.index, value = change.value, "selection changed");
        if let Some(mut listener) = self.listener.take() {
            listener.on_change(self, change.index, change.value);
            self.listener = Some(listener);
        }
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn selected_value(&self) -> f64 {
        self.selection.value(&self.config)
    }

    /// Select `index` (clamped) and centre it immediately.
    pub fn set_selected_index(&mut self, index: usize) -> HostRequests {
        let change = self.selection.select(&self.config, index);
        self.notify(change);
        self.recentre();
        HostRequests::redraw()
    }

    /// Select the tick nearest `value`.
    ///
    /// Fails, leaving the selection untouched, when `value` lies outside
    /// `[min_value, max_value]`.
    pub fn set_selected_value(&mut self, value: f64) -> Result<HostRequests, ArgumentError> {
        if !self.config.contains_value(value) {
            return Err(ArgumentError::SelectedValueOutOfRange {
                value,
                min: self.config.min_value(),
                max: self.config.max_value(),
            });
        }
        let index = self.config.index_for_value(value);
        Ok(self.set_selected_index(index))
    }

    /// Move the selection by `delta` ticks and animate onto it.
    pub fn step_by(&mut self, delta: i64) -> HostRequests {
        let target = self.config.clamp_index(self.selection.index() as i64 + delta);
        self.animate_to_index(target)
    }

    /// Select `index` (clamped) and animate onto it.
    pub fn animate_to_index(&mut self, index: usize) -> HostRequests {
        self.scroll.start_drag();
        let change = self.selection.select(&self.config, index);
        self.notify(change);
        self.settle();
        HostRequests::redraw()
    }

    // ------------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------------

    pub fn min_value(&self) -> f64 {
        self.config.min_value()
    }

    pub fn max_value(&self) -> f64 {
        self.config.max_value()
    }

    pub fn interval_value(&self) -> f64 {
        self.config.interval_value()
    }

    pub fn set_min_value(&mut self, min: f64) -> Result<HostRequests, ArgumentError> {
        self.config.set_min_value(min)?;
        Ok(self.geometry_changed())
    }

    pub fn set_max_value(&mut self, max: f64) -> Result<HostRequests, ArgumentError> {
        self.config.set_max_value(max)?;
        Ok(self.geometry_changed())
    }

    pub fn set_interval_value(&mut self, interval: f64) -> Result<HostRequests, ArgumentError> {
        self.config.set_interval_value(interval)?;
        Ok(self.geometry_changed())
    }

    pub fn set_tick_spacing(&mut self, spacing: f32) -> Result<HostRequests, ArgumentError> {
        self.config.set_tick_spacing(spacing)?;
        Ok(self.geometry_changed())
    }

    /// Replace the whole config.
    pub fn set_config(&mut self, config: RulerConfig) -> Result<HostRequests, ArgumentError> {
        config.validate()?;
        self.config = config;
        Ok(self.geometry_changed())
    }

    pub fn set_decimal_places(&mut self, places: u32) -> Result<HostRequests, ArgumentError> {
        self.config.set_decimal_places(places)?;
        info!(places, "decimal places changed");
        Ok(HostRequests::redraw())
    }

    /// Highest index painted visible; `None` means the last tick.
    pub fn set_display_cap(&mut self, cap: Option<usize>) -> HostRequests {
        self.config.set_display_cap(cap);
        HostRequests::redraw()
    }

    /// Use `labels` instead of formatted values. Primary labels read entry
    /// `index / 2`, secondary labels entry `index / 10`.
    pub fn set_text_labels(&mut self, labels: Vec<String>) -> HostRequests {
        self.text_labels = labels;
        HostRequests::redraw()
    }

    pub fn text_labels(&self) -> &[String] {
        &self.text_labels
    }

    /// Resize. Re-centres the selection when the viewport actually changed.
    pub fn set_viewport(&mut self, viewport: Viewport) -> HostRequests {
        if viewport == self.viewport {
            return HostRequests::none();
        }
        self.viewport = viewport;
        self.scroll.set_half_extent(viewport.half_extent());
        self.tick_radius = viewport_tick_radius(viewport.half_extent(), self.config.tick_spacing());
        debug!(
            width = viewport.width,
            height = viewport.height,
            radius = self.tick_radius,
            "viewport changed"
        );
        self.recentre();
        HostRequests::redraw()
    }

    fn geometry_changed(&mut self) -> HostRequests {
        self.scroll.set_content_extent(self.config.content_extent());
        self.tick_radius =
            viewport_tick_radius(self.viewport.half_extent(), self.config.tick_spacing());
        info!(
            min = self.config.min_value(),
            max = self.config.max_value(),
            interval = self.config.interval_value(),
            ticks = self.config.tick_count(),
            "ruler geometry changed"
        );
        let change = self.selection.select(&self.config, self.selection.index());
        self.notify(change);
        self.recentre();
        HostRequests::redraw()
    }

    fn recentre(&mut self) {
        let offset = self.snap_offset();
        self.scroll.jump_to(offset);
        self.phase = Phase::Idle;
    }

    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    /// Feed one raw pointer event.
    pub fn handle_gesture_event(&mut self, event: GestureEvent) -> HostRequests {
        let gestures = self.detector.on_event(event);
        self.apply_gestures(gestures)
    }

    /// Fire pending show-press / long-press timers.
    pub fn poll_gestures(&mut self, now: Duration) -> HostRequests {
        let gestures = self.detector.poll(now);
        self.apply_gestures(gestures)
    }

    fn apply_gestures(&mut self, gestures: Vec<Gesture>) -> HostRequests {
        let mut requests = HostRequests::none();
        for gesture in gestures {
            requests |= self.handle_gesture(gesture);
        }
        requests
    }

    /// React to one classified gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> HostRequests {
        match gesture {
            Gesture::Down => {
                self.scroll.start_drag();
                self.phase = Phase::Dragging;
                HostRequests {
                    redraw: true,
                    disallow_intercept: true,
                    click_feedback: false,
                }
            }
            Gesture::ShowPress | Gesture::LongPress => {
                trace!(?gesture, "press gesture ignored");
                HostRequests {
                    disallow_intercept: self.detector.is_tracking(),
                    ..HostRequests::none()
                }
            }
            Gesture::Scroll { distance } => {
                self.phase = Phase::Dragging;
                self.scroll.apply_drag_delta(distance);
                self.refresh_selection();
                HostRequests {
                    redraw: true,
                    disallow_intercept: true,
                    click_feedback: false,
                }
            }
            Gesture::SingleTapUp { y } => {
                let implied = self.scroll.offset() + (y - self.half_extent());
                let change = self
                    .selection
                    .refresh(&self.config, implied, self.half_extent());
                debug!(y, implied, index = self.selection.index(), "tap");
                self.notify(change);
                self.settle();
                HostRequests {
                    redraw: true,
                    disallow_intercept: false,
                    click_feedback: true,
                }
            }
            Gesture::Fling { velocity_y } => {
                if self.scroll.start_fling(velocity_y) {
                    self.phase = Phase::Flinging;
                } else {
                    debug!(velocity_y, "fling rejected");
                }
                HostRequests::redraw()
            }
            Gesture::Up | Gesture::Cancel => {
                if self.phase == Phase::Dragging {
                    self.settle();
                }
                HostRequests::redraw()
            }
        }
    }

    /// Scroll by `distance` px as a drag would, then settle. Used for wheel
    /// input.
    pub fn scroll_by(&mut self, distance: f32) -> HostRequests {
        self.scroll.start_drag();
        self.scroll.apply_drag_delta(distance);
        self.refresh_selection();
        self.settle();
        HostRequests::redraw()
    }

    // ------------------------------------------------------------------------
    // Animation
    // ------------------------------------------------------------------------

    /// Advance fling/settle animation by `dt`.
    pub fn tick(&mut self, dt: Duration) -> HostRequests {
        match self.scroll.step(dt) {
            StepOutcome::Idle => {
                if matches!(self.phase, Phase::Flinging | Phase::Settling) {
                    self.phase = Phase::Idle;
                }
                HostRequests::none()
            }
            StepOutcome::Moved { offset, aborted } => {
                trace!(offset, aborted, "animation frame");
                self.refresh_selection();
                if !self.scroll.is_animating() && self.phase == Phase::Settling {
                    self.phase = Phase::Idle;
                }
                HostRequests::redraw()
            }
            StepOutcome::FlingFinished => {
                self.settle();
                HostRequests::redraw()
            }
        }
    }

    /// Animate so the selected tick sits exactly at the viewport centre.
    pub fn settle(&mut self) {
        let target = self.snap_offset();
        self.scroll.settle(target);
        self.phase = Phase::Settling;
    }

    fn refresh_selection(&mut self) {
        let change = self
            .selection
            .refresh(&self.config, self.scroll.offset(), self.half_extent());
        self.notify(change);
    }
}
