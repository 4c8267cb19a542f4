// src/app/state.rs
//! Application state definitions

use iced::animation::Animation;
use iced::task;
use iced::time::Instant;
use std::collections::HashMap;

use crate::features::{Carousel, Listing, Settings, Slide};
use crate::i18n::Locale;
use crate::ui::components::NavItem;
use crate::utils::CachedImage;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, slide catalogue, HTTP client)
    pub core: CoreState,
    /// UI state (navigation, page states, animations)
    pub ui: UiState,
}

/// Core infrastructure & services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Slide catalogue, loaded once at boot
    pub slides: Vec<Slide>,
    /// Shared client for slide image downloads
    pub http: reqwest::Client,
    /// False while the main window is minimised
    pub window_visible: bool,
}

impl CoreState {
    pub fn new(settings: Settings, locale: Locale, slides: Vec<Slide>) -> Self {
        Self {
            settings,
            locale,
            slides,
            http: reqwest::Client::new(),
            window_visible: true,
        }
    }
}

/// UI view state
pub struct UiState {
    pub active_nav: NavItem,
    pub home: HomePageState,
    /// Shop filter, paging and search; kept across page switches
    pub listing: Listing,
}

impl UiState {
    pub fn new(listing: Listing) -> Self {
        Self {
            active_nav: NavItem::Home,
            home: HomePageState::default(),
            listing,
        }
    }

    /// Check if any animation is currently running
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.home.slide_animation.is_animating(now)
    }
}

/// Home page state
pub struct HomePageState {
    /// The mounted carousel; `None` while another page is shown
    pub slider: Option<Carousel>,
    /// Downloaded slide images keyed by slide id, kept across mounts
    pub slide_images: HashMap<u64, CachedImage>,
    /// Slide-in animation, restarted on every transition
    pub slide_animation: Animation<bool>,
    /// Last cursor x over the slide area
    pub pointer_x: f32,
    /// Pending wake-up for the carousel's next deadline
    pub deadline: Option<DeadlineTimer>,
}

impl Default for HomePageState {
    fn default() -> Self {
        Self {
            slider: None,
            slide_images: HashMap::new(),
            // Settled: draws the active slide without motion
            slide_animation: Animation::new(true),
            pointer_x: 0.0,
            deadline: None,
        }
    }
}

/// A scheduled wake-up; dropping it aborts the underlying task
pub struct DeadlineTimer {
    pub at: Instant,
    _handle: task::Handle,
}

impl DeadlineTimer {
    /// Take ownership of an abortable task handle
    pub fn new(at: Instant, handle: task::Handle) -> Self {
        Self {
            at,
            _handle: handle.abort_on_drop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Task;

    #[test]
    fn dropping_the_timer_aborts_its_task() {
        let (_task, handle) = Task::<()>::none().abortable();
        let observer = handle.clone();

        let timer = DeadlineTimer::new(Instant::now(), handle);
        assert!(!observer.is_aborted());
        drop(timer);
        assert!(observer.is_aborted());
    }

    #[test]
    fn replacing_the_timer_aborts_the_old_one() {
        let mut home = HomePageState::default();

        let (_first, handle) = Task::<()>::none().abortable();
        let first = handle.clone();
        home.deadline = Some(DeadlineTimer::new(Instant::now(), handle));

        let (_second, handle) = Task::<()>::none().abortable();
        let second = handle.clone();
        home.deadline = Some(DeadlineTimer::new(Instant::now(), handle));

        assert!(first.is_aborted());
        assert!(!second.is_aborted());
    }
}
