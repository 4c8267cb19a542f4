//! Slide carousel state machine
//!
//! The carousel owns the active index, the transition lock, the autoplay flag
//! and any in-progress gesture. It never reads a clock and never owns a timer:
//! the host passes the current [`Instant`] with every input and calls
//! [`Carousel::tick`] once [`Carousel::next_deadline`] has passed.
//!
//! Two orthogonal machines compose here:
//!
//! - **Transition lock**: `idle -> transitioning -> idle`, released by a
//!   deadline. Navigation arriving while locked is dropped, never queued.
//! - **Autoplay**: `playing <-> paused`. The countdown is only armed while
//!   playing and idle, and restarts every time it becomes armed again.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Default delay between automatic advances
pub const DEFAULT_AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);
/// Default length of the transition lock
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);
/// Default minimum swipe distance; shorter drags count as accidental
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// One item of the carousel's fixed display sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    /// Business id the slide links to
    pub id: u64,
    /// Key used to look up the caption text
    #[serde(alias = "key")]
    pub display_key: String,
    /// Image URI
    #[serde(alias = "image")]
    pub image_ref: String,
}

impl Slide {
    pub fn new(id: u64, display_key: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            display_key: display_key.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// Timing and gesture configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub auto_advance_interval: Duration,
    pub transition_duration: Duration,
    pub swipe_threshold: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_interval: DEFAULT_AUTO_ADVANCE_INTERVAL,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
        }
    }
}

/// Direction of travel of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// +1 for forward, -1 for backward
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// What caused a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Keyboard, button, indicator or swipe
    User,
    /// The autoplay countdown
    Autoplay,
}

/// A transition that has just started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub trigger: Trigger,
}

/// Host events translated into carousel terms
///
/// Keyboard, pointer and visibility sources all reduce to this type, so the
/// carousel never depends on a window system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    Next,
    Previous,
    JumpTo(usize),
    ToggleAutoAdvance,
    GestureStart(f32),
    GestureMove(f32),
    GestureEnd,
    /// Drop the gesture without evaluating it (pointer left the slide area)
    GestureCancel,
    VisibilityChanged(bool),
}

/// Result of feeding an input or a tick to the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A transition started
    Moved(Transition),
    /// State changed without moving
    Updated,
    /// Nothing changed
    Ignored,
}

impl Outcome {
    pub fn transition(&self) -> Option<Transition> {
        match self {
            Outcome::Moved(transition) => Some(*transition),
            _ => None,
        }
    }
}

/// Errors raised when constructing a carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The slide sequence was empty
    NoSlides,
    /// The autoplay interval was zero
    ZeroInterval,
}

impl std::fmt::Display for CarouselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselError::NoSlides => write!(f, "carousel requires at least one slide"),
            CarouselError::ZeroInterval => {
                write!(f, "carousel auto-advance interval must be greater than zero")
            }
        }
    }
}

impl std::error::Error for CarouselError {}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Gesture {
    origin: f32,
    current: f32,
}

/// Auto-advancing, gesture and keyboard navigable slide rotator
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slides: Vec<Slide>,
    config: CarouselConfig,
    active_index: usize,
    previous_index: usize,
    direction: Direction,
    auto_advancing: bool,
    gesture: Option<Gesture>,
    /// `Some` while the transition lock is held
    transition_ends_at: Option<Instant>,
    /// `Some` while autoplay is armed
    autoplay_due_at: Option<Instant>,
    started: bool,
}

impl Carousel {
    /// Create a carousel over a non-empty slide sequence
    ///
    /// The carousel starts at index 0 with autoplay on, but does nothing until
    /// [`start`](Self::start) is called.
    pub fn new(slides: Vec<Slide>, config: CarouselConfig) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if config.auto_advance_interval.is_zero() {
            return Err(CarouselError::ZeroInterval);
        }

        Ok(Self {
            slides,
            config,
            active_index: 0,
            previous_index: 0,
            direction: Direction::Forward,
            auto_advancing: true,
            gesture: None,
            transition_ends_at: None,
            autoplay_due_at: None,
            started: false,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.active_index]
    }

    /// Index shown before the most recent transition
    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    /// Direction of the most recent transition
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_ends_at.is_some()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advancing
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn gesture_origin(&self) -> Option<f32> {
        self.gesture.map(|g| g.origin)
    }

    /// Earliest pending deadline, if any
    ///
    /// Hosts must call [`tick`](Self::tick) at or after this instant.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.transition_ends_at, self.autoplay_due_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Mount the carousel and arm autoplay
    pub fn start(&mut self, now: Instant) {
        if self.started {
            return;
        }
        self.started = true;
        self.sync_autoplay(now);
        debug!(slides = self.slides.len(), "carousel started");
    }

    /// Unmount the carousel, dropping every pending deadline
    ///
    /// After this call no input and no tick changes state.
    pub fn stop(&mut self) {
        if !self.started {
            return;
        }
        self.started = false;
        self.transition_ends_at = None;
        self.autoplay_due_at = None;
        self.gesture = None;
        debug!("carousel stopped");
    }

    /// Apply a host input
    pub fn dispatch(&mut self, input: CarouselInput, now: Instant) -> Outcome {
        match input {
            CarouselInput::Next => self.advance(now),
            CarouselInput::Previous => self.retreat(now),
            CarouselInput::JumpTo(index) => self.jump_to(index, now),
            CarouselInput::ToggleAutoAdvance => self.toggle_auto_advance(now),
            CarouselInput::GestureStart(x) => self.gesture_start(x),
            CarouselInput::GestureMove(x) => self.gesture_move(x),
            CarouselInput::GestureEnd => self.gesture_end(now),
            CarouselInput::GestureCancel => self.gesture_cancel(),
            CarouselInput::VisibilityChanged(visible) => self.set_visible(visible, now),
        }
    }

    /// User-triggered move to the next slide
    pub fn advance(&mut self, now: Instant) -> Outcome {
        self.step(Direction::Forward, Trigger::User, now)
    }

    /// User-triggered move to the previous slide
    pub fn retreat(&mut self, now: Instant) -> Outcome {
        self.step(Direction::Backward, Trigger::User, now)
    }

    /// User-triggered move to a specific slide; out-of-range indices are rejected
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Outcome {
        if index >= self.slides.len() {
            debug!(index, count = self.slides.len(), "rejected out-of-range jump");
            return Outcome::Ignored;
        }
        let direction = if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.begin_transition(index, direction, Trigger::User, now)
    }

    /// Flip autoplay; allowed while a transition is in flight
    pub fn toggle_auto_advance(&mut self, now: Instant) -> Outcome {
        if !self.started {
            return Outcome::Ignored;
        }
        self.auto_advancing = !self.auto_advancing;
        self.sync_autoplay(now);
        debug!(auto_advancing = self.auto_advancing, "autoplay toggled");
        Outcome::Updated
    }

    /// Hidden pauses autoplay, visible resumes it
    pub fn set_visible(&mut self, visible: bool, now: Instant) -> Outcome {
        if !self.started || self.auto_advancing == visible {
            return Outcome::Ignored;
        }
        self.auto_advancing = visible;
        self.sync_autoplay(now);
        debug!(visible, "autoplay follows visibility");
        Outcome::Updated
    }

    pub fn gesture_start(&mut self, x: f32) -> Outcome {
        if !self.started {
            return Outcome::Ignored;
        }
        self.gesture = Some(Gesture {
            origin: x,
            current: x,
        });
        Outcome::Updated
    }

    pub fn gesture_move(&mut self, x: f32) -> Outcome {
        match self.gesture.as_mut() {
            Some(gesture) if self.started => {
                gesture.current = x;
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    /// Finish a gesture, swiping if it travelled past the threshold
    ///
    /// The gesture is cleared whatever the outcome.
    pub fn gesture_end(&mut self, now: Instant) -> Outcome {
        let Some(gesture) = self.gesture.take() else {
            return Outcome::Ignored;
        };
        if !self.started {
            return Outcome::Ignored;
        }

        let delta = gesture.origin - gesture.current;
        let threshold = self.config.swipe_threshold;
        if delta > threshold {
            self.step(Direction::Forward, Trigger::User, now)
        } else if delta < -threshold {
            self.step(Direction::Backward, Trigger::User, now)
        } else {
            trace!(delta, "gesture below swipe threshold");
            Outcome::Updated
        }
    }

    /// Forget an in-progress gesture; never moves
    pub fn gesture_cancel(&mut self) -> Outcome {
        match self.gesture.take() {
            Some(_) => {
                trace!("gesture cancelled");
                Outcome::Updated
            }
            None => Outcome::Ignored,
        }
    }

    /// Process due deadlines: release the transition lock, fire autoplay
    pub fn tick(&mut self, now: Instant) -> Outcome {
        if !self.started {
            return Outcome::Ignored;
        }

        let mut outcome = Outcome::Ignored;

        if let Some(ends_at) = self.transition_ends_at {
            if now >= ends_at {
                self.transition_ends_at = None;
                trace!("transition lock released");
                outcome = Outcome::Updated;
            }
        }

        // Re-arms with a fresh countdown if the lock was just released
        self.sync_autoplay(now);

        if let Some(due_at) = self.autoplay_due_at {
            if now >= due_at {
                self.autoplay_due_at = None;
                let stepped = self.step(Direction::Forward, Trigger::Autoplay, now);
                if stepped != Outcome::Ignored {
                    outcome = stepped;
                }
                self.sync_autoplay(now);
            }
        }

        outcome
    }

    fn step(&mut self, direction: Direction, trigger: Trigger, now: Instant) -> Outcome {
        let count = self.slides.len();
        let to = match direction {
            Direction::Forward => (self.active_index + 1) % count,
            Direction::Backward => (self.active_index + count - 1) % count,
        };
        self.begin_transition(to, direction, trigger, now)
    }

    fn begin_transition(
        &mut self,
        to: usize,
        direction: Direction,
        trigger: Trigger,
        now: Instant,
    ) -> Outcome {
        if !self.started {
            trace!("carousel not started, input dropped");
            return Outcome::Ignored;
        }
        if self.is_transitioning() {
            trace!("transition in flight, input dropped");
            return Outcome::Ignored;
        }
        if to == self.active_index {
            return Outcome::Ignored;
        }

        let from = self.active_index;
        self.previous_index = from;
        self.active_index = to;
        self.direction = direction;
        self.transition_ends_at = Some(now + self.config.transition_duration);
        if trigger == Trigger::User {
            self.auto_advancing = false;
        }
        self.sync_autoplay(now);

        debug!(from, to, ?direction, ?trigger, "carousel transition");
        Outcome::Moved(Transition {
            from,
            to,
            direction,
            trigger,
        })
    }

    fn sync_autoplay(&mut self, now: Instant) {
        let armed = self.started && self.auto_advancing && self.transition_ends_at.is_none();
        if !armed {
            self.autoplay_due_at = None;
        } else if self.autoplay_due_at.is_none() {
            self.autoplay_due_at = Some(now + self.config.auto_advance_interval);
        }
    }
}
