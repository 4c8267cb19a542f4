//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Listing, ListingInput, Settings, listing, slides};
use crate::i18n::{Language, Locale};
use crate::ui::components::NavItem;
pub use message::Message;
pub use state::{App, CoreState, DeadlineTimer, HomePageState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first to initialize locale correctly
        let settings = Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        let slides = slides::load();
        let listing = Listing::new(
            listing::catalogue(),
            settings.listing.shops_per_page,
            settings.listing.rotation_interval().is_some(),
        );

        // 2. Initialize sub-states
        let core = CoreState::new(settings, locale, slides);
        let ui = UiState::new(listing);
        let mut app = Self { core, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1200.0, 820.0),
            min_size: Some(iced::Size::new(640.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "bazaar".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Home is the landing page: mount the slider right away
        let mount = app.mount_slider();

        let init_task = Task::batch([open_window.discard(), mount, app.load_slide_images()]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title follows the active page
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let locale = &self.core.locale;
        format!(
            "{} - {}",
            locale.get(crate::i18n::Key::AppName),
            locale.get(self.ui.active_nav.i18n_key())
        )
    }

    /// Subscriptions for animations, keyboard events, and window lifecycle
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();
        let visible = self.core.window_visible;
        let has_animations = self.ui.has_active_animations(now);

        // 1. Keyboard events
        let keyboard_sub = if subscription_logic::needs_keyboard_subscription(visible) {
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, modifiers, .. } => {
                    Some(Message::KeyPressed(key, modifiers))
                }
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 2. Animation subscription (vsync rate while sliding)
        let animation_sub =
            if subscription_logic::needs_animation_subscription(has_animations, visible) {
                iced::window::frames().map(|_| Message::AnimationTick)
            } else {
                iced::Subscription::none()
            };

        // 3. Category rotation on the home page
        let rotation_sub = match self.core.settings.listing.rotation_interval() {
            Some(interval)
                if subscription_logic::needs_rotation_subscription(
                    self.ui.active_nav == NavItem::Home,
                    self.ui.listing.is_rotating(),
                    visible,
                ) =>
            {
                iced::time::every(interval)
                    .map(|_| Message::Listing(ListingInput::RotateCategory))
            }
            _ => iced::Subscription::none(),
        };

        // 4. Window events
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));
        let close_event_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([
            keyboard_sub,
            animation_sub,
            rotation_sub,
            resize_sub,
            close_event_sub,
        ])
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are only needed while something moves on a visible window
    pub fn needs_animation_subscription(has_animations: bool, window_visible: bool) -> bool {
        has_animations && window_visible
    }

    pub fn needs_keyboard_subscription(window_visible: bool) -> bool {
        window_visible
    }

    /// Categories rotate only where the listing is on screen
    pub fn needs_rotation_subscription(on_home: bool, rotating: bool, window_visible: bool) -> bool {
        on_home && rotating && window_visible
    }
}

/// Slider timer and visibility decisions, kept apart from the handlers
pub mod slider_logic {
    use iced::time::Instant;

    /// Minimising reports a zero-sized window
    pub fn window_visible(size: iced::Size) -> bool {
        size.width > 0.0 && size.height > 0.0
    }

    /// What to do with the single pending wake-up
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TimerPlan {
        /// The scheduled wake-up already matches
        Keep,
        /// Replace whatever is scheduled with a wake-up at this instant
        Schedule(Instant),
        /// Nothing is due; drop the scheduled wake-up
        Cancel,
    }

    pub fn plan_timer(next_deadline: Option<Instant>, scheduled: Option<Instant>) -> TimerPlan {
        match (next_deadline, scheduled) {
            (Some(at), Some(current)) if at == current => TimerPlan::Keep,
            (Some(at), _) => TimerPlan::Schedule(at),
            (None, Some(_)) => TimerPlan::Cancel,
            (None, None) => TimerPlan::Keep,
        }
    }

    /// Only the wake-up that is currently scheduled may tick the carousel
    ///
    /// One that was already queued when its timer got replaced or the slider
    /// got unmounted is stale.
    pub fn is_current_wakeup(fired_for: Instant, scheduled: Option<Instant>) -> bool {
        scheduled == Some(fired_for)
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    mod property_frame_budget {
        use super::*;

        #[test]
        fn frames_only_while_animating() {
            assert!(needs_animation_subscription(true, true));
            assert!(!needs_animation_subscription(false, true));
        }

        #[test]
        fn no_frames_when_minimised() {
            // A slide that started animating right before minimise must not keep the frame loop alive
            assert!(!needs_animation_subscription(true, false));
            assert!(!needs_animation_subscription(false, false));
        }
    }

    mod property_keyboard {
        use super::*;

        #[test]
        fn keyboard_follows_visibility() {
            assert!(needs_keyboard_subscription(true));
            assert!(!needs_keyboard_subscription(false));
        }
    }

    mod property_rotation {
        use super::*;

        #[test]
        fn rotation_needs_home_and_visible_window() {
            assert!(needs_rotation_subscription(true, true, true));
            assert!(!needs_rotation_subscription(false, true, true));
            assert!(!needs_rotation_subscription(true, true, false));
        }

        #[test]
        fn no_rotation_once_user_picked() {
            assert!(!needs_rotation_subscription(true, false, true));
        }
    }

    mod property_slider_timer {
        use super::super::slider_logic::*;
        use iced::time::{Duration, Instant};

        #[test]
        fn matching_wakeup_is_kept() {
            let at = Instant::now();
            assert_eq!(plan_timer(Some(at), Some(at)), TimerPlan::Keep);
        }

        #[test]
        fn new_deadline_replaces_the_old_wakeup() {
            let old = Instant::now();
            let new = old + Duration::from_millis(500);
            assert_eq!(plan_timer(Some(new), Some(old)), TimerPlan::Schedule(new));
            assert_eq!(plan_timer(Some(new), None), TimerPlan::Schedule(new));
        }

        #[test]
        fn no_deadline_cancels_the_wakeup() {
            assert_eq!(plan_timer(None, Some(Instant::now())), TimerPlan::Cancel);
            assert_eq!(plan_timer(None, None), TimerPlan::Keep);
        }

        #[test]
        fn stale_wakeup_is_not_current() {
            let old = Instant::now();
            let new = old + Duration::from_millis(5);
            assert!(is_current_wakeup(new, Some(new)));
            assert!(!is_current_wakeup(old, Some(new)));
            // Nothing scheduled after unmount
            assert!(!is_current_wakeup(old, None));
        }
    }

    mod property_visibility {
        use super::super::slider_logic::window_visible;
        use iced::Size;

        #[test]
        fn zero_size_means_hidden() {
            assert!(!window_visible(Size::ZERO));
            assert!(!window_visible(Size::new(0.0, 600.0)));
            assert!(!window_visible(Size::new(800.0, 0.0)));
        }

        #[test]
        fn any_area_means_visible() {
            assert!(window_visible(Size::new(800.0, 600.0)));
            assert!(window_visible(Size::new(1.0, 1.0)));
        }
    }
}
