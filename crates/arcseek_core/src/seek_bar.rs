//! Circular range seek bar state machine
//!
//! [`CircularRangeSeekBar`] owns two progress values on a circular domain and
//! turns raw contact events into validated updates:
//!
//! - **Contact down**: an annulus hit-test around the track, then the nearest
//!   thumb becomes active (thumb 1 on ties, and always in single-thumb mode)
//! - **Contact move**: the touch angle is mapped to a candidate progress,
//!   which is rejected if it lands in the gap of a partial arc or would push
//!   the active thumb past the other one
//! - **Contact end**: the active thumb is released
//!
//! Programmatic [`set_progress`](CircularRangeSeekBar::set_progress) writes
//! values directly: they are wrapped onto the domain but not checked against
//! thumb ordering.
//!
//! # Example
//!
//! ```
//! use arcseek_core::{seek_bar, Metrics, Size};
//!
//! let mut bar = seek_bar()
//!     .end_angle(55.0)
//!     .min_thumb_difference(5)
//!     .metrics(Metrics::new(200.0, Size::new(20.0, 20.0)))
//!     .build()
//!     .unwrap();
//!
//! bar.set_progress(0, 50);
//! assert_eq!(bar.angle1(), 125.0);
//! assert_eq!(bar.angle2(), 270.0);
//!
//! // Grab the second thumb and drag it
//! let grab = bar.on_contact_down(100.0, 10.0);
//! assert!(grab.consumed);
//! ```

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::config::{
    validate_angle, validate_max_progress, validate_min_thumb_difference, RangeConfig,
};
use crate::error::Result;
use crate::events::{ContactEvent, DragEvent, DragState, Response};
use crate::geometry::{normalize_360, point_to_angle, wrap_progress, ArcGeometry, Point, Size};
use crate::listener::{ProgressChange, ProgressListener};
use crate::render::RenderSnapshot;
use crate::thumb::{Metrics, Thumb, ThumbLayout};

/// Dual-thumb circular range selector engine
pub struct CircularRangeSeekBar {
    config: RangeConfig,
    geometry: ArcGeometry,
    metrics: Metrics,
    progress1: i32,
    progress2: i32,
    angle1: f64,
    angle2: f64,
    drag: DragState,
    pressed: bool,
    /// Set on every visible change, cleared by `take_dirty`
    dirty: bool,
    listener: Option<Box<dyn ProgressListener>>,
    listener_replaced: bool,
    pending: VecDeque<ProgressChange>,
    dispatching: bool,
}

impl Default for CircularRangeSeekBar {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CircularRangeSeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularRangeSeekBar")
            .field("config", &self.config)
            .field("metrics", &self.metrics)
            .field("progress1", &self.progress1)
            .field("progress2", &self.progress2)
            .field("angle1", &self.angle1)
            .field("angle2", &self.angle2)
            .field("drag", &self.drag)
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

impl CircularRangeSeekBar {
    /// Create a seek bar with the default configuration
    pub fn new() -> Self {
        Self::from_valid_config(RangeConfig::default())
    }

    /// Create a seek bar with a custom configuration
    pub fn with_config(config: RangeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(mut config: RangeConfig) -> Self {
        config.start_angle = normalize_360(config.start_angle);
        config.end_angle = normalize_360(config.end_angle);
        if config.use_one_thumb {
            config.min_thumb_difference = 0;
        }
        let geometry = config.geometry();
        let progress2 = config.max_progress - 1;

        Self {
            angle1: geometry.progress_to_angle(0),
            angle2: geometry.progress_to_angle(progress2),
            config,
            geometry,
            metrics: Metrics::default(),
            progress1: 0,
            progress2,
            drag: DragState::Idle,
            pressed: false,
            dirty: true,
            listener: None,
            listener_replaced: false,
            pending: VecDeque::new(),
            dispatching: false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    pub fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn progress1(&self) -> i32 {
        self.progress1
    }

    pub fn progress2(&self) -> i32 {
        self.progress2
    }

    /// Both progress values as `(progress1, progress2)`
    pub fn progress(&self) -> (i32, i32) {
        (self.progress1, self.progress2)
    }

    pub fn angle1(&self) -> f64 {
        self.angle1
    }

    pub fn angle2(&self) -> f64 {
        self.angle2
    }

    pub fn arc_span(&self) -> f64 {
        self.geometry.arc_span()
    }

    /// Thumb owning the current gesture, if any
    pub fn active_thumb(&self) -> Option<Thumb> {
        self.drag.active_thumb()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether a repaint has been requested since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Drain the coalesced repaint request
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Angle of a thumb on the track
    pub fn thumb_angle(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::First => self.angle1,
            Thumb::Second => self.angle2,
        }
    }

    /// Current placement of a thumb
    pub fn thumb_layout(&self, thumb: Thumb) -> ThumbLayout {
        self.metrics
            .thumb_layout(self.thumb_angle(thumb), self.config.thumb_rotation_offset)
    }

    /// Data for an external painter
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    // =========================================================================
    // Listener
    // =========================================================================

    /// Install the change listener, replacing any previous one
    pub fn set_listener<L: ProgressListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
        self.listener_replaced = true;
    }

    /// Install a closure as the change listener
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&mut CircularRangeSeekBar, ProgressChange) + Send + 'static,
    {
        self.set_listener(callback);
    }

    /// Remove the change listener
    pub fn clear_listener(&mut self) {
        self.listener = None;
        self.listener_replaced = true;
    }

    // =========================================================================
    // Programmatic Updates
    // =========================================================================

    /// Set both progress values.
    ///
    /// Values outside `[0, max_progress)` wrap around. Thumb ordering and the
    /// minimum difference are not enforced. Listeners are notified with
    /// `from_user = false` if either value changed. Returns whether a repaint
    /// is needed.
    pub fn set_progress(&mut self, progress1: i32, progress2: i32) -> bool {
        self.commit(progress1, progress2, false, false)
    }

    /// Set the first progress value; the second moves to `max_progress - 1`
    pub fn set_progress1(&mut self, progress1: i32) -> bool {
        self.set_progress(progress1, self.config.max_progress - 1)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the whole configuration. Progress values are kept and wrapped
    /// onto the new domain.
    pub fn set_config(&mut self, config: RangeConfig) -> Result<bool> {
        config.validate()?;
        let mut config = config;
        config.start_angle = normalize_360(config.start_angle);
        config.end_angle = normalize_360(config.end_angle);
        if config.use_one_thumb {
            config.min_thumb_difference = 0;
            self.release_second_thumb();
        }
        self.config = config;
        Ok(self.reconfigure())
    }

    /// Set the number of progress steps
    pub fn set_max_progress(&mut self, max_progress: i32) -> Result<bool> {
        validate_max_progress(max_progress)?;
        if max_progress == self.config.max_progress {
            return Ok(false);
        }
        self.config.max_progress = max_progress;
        Ok(self.reconfigure())
    }

    /// Set the angle of progress 0
    pub fn set_start_angle(&mut self, degrees: f64) -> Result<bool> {
        validate_angle("start_angle", degrees)?;
        let degrees = normalize_360(degrees);
        if degrees == self.config.start_angle {
            return Ok(false);
        }
        self.config.start_angle = degrees;
        Ok(self.reconfigure())
    }

    /// Set the angle at which the track ends
    pub fn set_end_angle(&mut self, degrees: f64) -> Result<bool> {
        validate_angle("end_angle", degrees)?;
        let degrees = normalize_360(degrees);
        if degrees == self.config.end_angle {
            return Ok(false);
        }
        self.config.end_angle = degrees;
        Ok(self.reconfigure())
    }

    /// Set the minimum progress gap enforced between thumbs during drags
    pub fn set_min_thumb_difference(&mut self, difference: i32) -> Result<bool> {
        validate_min_thumb_difference(difference)?;
        self.config.min_thumb_difference = difference;
        Ok(false)
    }

    /// Enable or disable single-thumb mode.
    ///
    /// Enabling it resets the minimum thumb difference to 0 and releases the
    /// second thumb if it is being dragged.
    pub fn set_use_one_thumb(&mut self, one_thumb: bool) -> bool {
        if one_thumb {
            self.config.min_thumb_difference = 0;
            self.release_second_thumb();
        }
        if one_thumb == self.config.use_one_thumb {
            return false;
        }
        self.config.use_one_thumb = one_thumb;
        self.dirty = true;
        true
    }

    /// Set the offset between a thumb's angle and its image rotation
    pub fn set_thumb_rotation_offset(&mut self, degrees: f64) -> Result<bool> {
        validate_angle("thumb_rotation_offset", degrees)?;
        if degrees == self.config.thumb_rotation_offset {
            return Ok(false);
        }
        self.config.thumb_rotation_offset = degrees;
        self.dirty = true;
        Ok(true)
    }

    /// Report the measured control and thumb dimensions
    pub fn set_metrics(&mut self, metrics: Metrics) -> Result<bool> {
        metrics.validate()?;
        if metrics == self.metrics {
            return Ok(false);
        }
        self.metrics = metrics;
        self.dirty = true;
        Ok(true)
    }

    /// Report the measured control size
    pub fn set_size(&mut self, size: f32) -> Result<bool> {
        self.set_metrics(Metrics::new(size, self.metrics.thumb))
    }

    /// Report the thumb image size
    pub fn set_thumb_size(&mut self, thumb: Size) -> Result<bool> {
        self.set_metrics(Metrics::new(self.metrics.size, thumb))
    }

    fn release_second_thumb(&mut self) {
        if self.drag.active_thumb() == Some(Thumb::Second) {
            self.drag = DragState::Idle;
            self.pressed = false;
        }
    }

    /// Rebuild the geometry and force the angles to follow it
    fn reconfigure(&mut self) -> bool {
        self.geometry = self.config.geometry();
        self.commit(self.progress1, self.progress2, false, true)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feed one contact event
    pub fn handle_event(&mut self, event: &ContactEvent) -> Response {
        match *event {
            ContactEvent::Down { x, y } => self.on_contact_down(x, y),
            ContactEvent::Move { x, y } => self.on_contact_move(x, y),
            ContactEvent::Up | ContactEvent::Cancel => self.on_contact_end(),
        }
    }

    /// Initial contact: hit-test the track and pick the thumb to drag
    pub fn on_contact_down(&mut self, x: f32, y: f32) -> Response {
        if !x.is_finite() || !y.is_finite() {
            return Response::IGNORED;
        }

        let touch = Point::new(x, y);
        let outer = self.metrics.outer_radius();
        let inner = self.metrics.inner_radius();
        let dist_sq = touch.distance_sq(self.metrics.center());
        debug!(
            "contact down: r = {}, outer = {}, inner = {}",
            dist_sq.sqrt(),
            outer,
            inner
        );

        if !(dist_sq < outer * outer && dist_sq > inner * inner) {
            return Response::IGNORED;
        }

        let thumb = self.pick_thumb(touch);
        if let Some(next) = self.drag.on_event(DragEvent::Grab(thumb)) {
            self.drag = next;
        }
        self.pressed = true;
        self.dirty = true;
        debug!("thumb {:?} active", thumb);

        Response::REPAINT
    }

    /// Nearest thumb to `touch`; ties and single-thumb mode pick thumb 1
    fn pick_thumb(&self, touch: Point) -> Thumb {
        let dist1 = touch.distance_sq(self.thumb_layout(Thumb::First).center);
        let dist2 = touch.distance_sq(self.thumb_layout(Thumb::Second).center);

        if dist1 <= dist2 || self.config.use_one_thumb {
            Thumb::First
        } else {
            Thumb::Second
        }
    }

    /// Contact moved: drag the active thumb if the new position is valid
    pub fn on_contact_move(&mut self, x: f32, y: f32) -> Response {
        let Some(thumb) = self.drag.active_thumb() else {
            return Response::IGNORED;
        };
        if !x.is_finite() || !y.is_finite() {
            return Response::CONSUMED;
        }

        let center = self.metrics.center();
        let raw = point_to_angle((x - center.x) as f64, (y - center.y) as f64);
        let relative = self.geometry.relative_angle(raw);

        // Touches in the gap of a partial arc are ignored, not clamped
        if !self.geometry.contains(relative) {
            trace!(
                "drag rejected: angle {} outside arc span {}",
                relative,
                self.geometry.arc_span()
            );
            return Response::CONSUMED;
        }

        // Guards see the unwrapped value, which is `max_progress` at the track end
        let candidate = self.geometry.angle_to_progress(relative);
        let min_difference = self.config.effective_min_thumb_difference();

        let committed = match thumb {
            Thumb::First => {
                if candidate > self.progress2 - min_difference {
                    trace!(
                        "drag rejected: {} would pass thumb 2 at {}",
                        candidate,
                        self.progress2
                    );
                    return Response::CONSUMED;
                }
                self.commit(candidate, self.progress2, true, false)
            }
            Thumb::Second => {
                // Thumb 2 never folds past the end back onto 0
                if self.config.use_one_thumb
                    || candidate < self.progress1 + min_difference
                    || candidate >= self.config.max_progress
                {
                    trace!(
                        "drag rejected: {} would pass thumb 1 at {}",
                        candidate,
                        self.progress1
                    );
                    return Response::CONSUMED;
                }
                self.commit(self.progress1, candidate, true, false)
            }
        };

        Response {
            consumed: true,
            repaint: committed,
        }
    }

    /// Contact lifted or cancelled: release the active thumb
    pub fn on_contact_end(&mut self) -> Response {
        self.pressed = false;
        match self.drag.on_event(DragEvent::Release) {
            Some(next) => {
                self.drag = next;
                self.dirty = true;
                Response::REPAINT
            }
            None => Response::IGNORED,
        }
    }

    // =========================================================================
    // Commit & Notify
    // =========================================================================

    /// Wrap, store and announce new progress values.
    ///
    /// Angles are always recomputed; listeners only hear about actual changes
    /// unless `force` is set.
    fn commit(&mut self, progress1: i32, progress2: i32, from_user: bool, force: bool) -> bool {
        let max_progress = self.config.max_progress;
        let progress1 = wrap_progress(progress1, max_progress);
        let progress2 = wrap_progress(progress2, max_progress);
        let changed = force || progress1 != self.progress1 || progress2 != self.progress2;

        self.progress1 = progress1;
        self.progress2 = progress2;
        self.angle1 = self.geometry.progress_to_angle(progress1);
        self.angle2 = self.geometry.progress_to_angle(progress2);

        if !changed {
            return false;
        }

        trace!(
            "progress committed: {} - {} (from user: {})",
            progress1,
            progress2,
            from_user
        );
        self.dirty = true;
        self.notify(ProgressChange {
            progress1,
            progress2,
            from_user,
        });
        true
    }

    /// Deliver a change, queueing it if a listener is already running
    fn notify(&mut self, change: ProgressChange) {
        self.pending.push_back(change);
        if self.dispatching {
            return;
        }

        self.dispatching = true;
        while let Some(change) = self.pending.pop_front() {
            let Some(mut listener) = self.listener.take() else {
                continue;
            };
            self.listener_replaced = false;
            listener.on_progress_change(self, change);
            if !self.listener_replaced {
                self.listener = Some(listener);
            }
        }
        self.dispatching = false;
    }
}

/// Create a seek bar builder
pub fn seek_bar() -> SeekBarBuilder {
    SeekBarBuilder {
        config: RangeConfig::default(),
        metrics: Metrics::default(),
        progress: None,
        listener: None,
    }
}

/// Builder for creating seek bars
pub struct SeekBarBuilder {
    config: RangeConfig,
    metrics: Metrics,
    progress: Option<(i32, i32)>,
    listener: Option<Box<dyn ProgressListener>>,
}

impl SeekBarBuilder {
    /// Use a complete configuration
    pub fn config(mut self, config: RangeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of progress steps
    pub fn max_progress(mut self, max_progress: i32) -> Self {
        self.config.max_progress = max_progress;
        self
    }

    /// Set the start angle
    pub fn start_angle(mut self, degrees: f64) -> Self {
        self.config.start_angle = degrees;
        self
    }

    /// Set the end angle
    pub fn end_angle(mut self, degrees: f64) -> Self {
        self.config.end_angle = degrees;
        self
    }

    /// Set the minimum thumb gap
    pub fn min_thumb_difference(mut self, difference: i32) -> Self {
        self.config.min_thumb_difference = difference;
        self
    }

    /// Enable single-thumb mode
    pub fn use_one_thumb(mut self, one_thumb: bool) -> Self {
        self.config.use_one_thumb = one_thumb;
        self
    }

    /// Set the control and thumb dimensions
    pub fn metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the initial progress values (wrapped, without notification)
    pub fn progress(mut self, progress1: i32, progress2: i32) -> Self {
        self.progress = Some((progress1, progress2));
        self
    }

    /// Set the change listener
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut CircularRangeSeekBar, ProgressChange) + Send + 'static,
    {
        self.listener = Some(Box::new(callback));
        self
    }

    /// Build the seek bar
    pub fn build(self) -> Result<CircularRangeSeekBar> {
        self.metrics.validate()?;
        let mut bar = CircularRangeSeekBar::with_config(self.config)?;
        bar.metrics = self.metrics;

        if let Some((progress1, progress2)) = self.progress {
            let max_progress = bar.config.max_progress;
            bar.progress1 = wrap_progress(progress1, max_progress);
            bar.progress2 = wrap_progress(progress2, max_progress);
            bar.angle1 = bar.geometry.progress_to_angle(bar.progress1);
            bar.angle2 = bar.geometry.progress_to_angle(bar.progress2);
        }
        bar.listener = self.listener;
        Ok(bar)
    }
}
