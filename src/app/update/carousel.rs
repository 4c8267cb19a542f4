// src/app/update/carousel.rs
//! Hero slider message handlers
//!
//! The carousel never owns a timer. After every input the handler asks it for
//! its next deadline and keeps exactly one abortable sleep scheduled for it.

use iced::Task;
use iced::animation::Animation;
use iced::time::Instant;
use tracing::{debug, info, trace, warn};

use crate::app::message::Message;
use crate::app::slider_logic::{self, TimerPlan};
use crate::app::state::{App, DeadlineTimer};
use crate::features::carousel::CarouselConfig;
use crate::features::{Carousel, CarouselInput, Outcome};

impl App {
    /// Handle slider-related messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Slider(input) => Some(self.apply_slider_input(*input)),

            Message::SliderDeadline(fired_for) => {
                let scheduled = self.ui.home.deadline.as_ref().map(|timer| timer.at);
                if !slider_logic::is_current_wakeup(*fired_for, scheduled) {
                    trace!("stale slider wake-up ignored");
                    return Some(Task::none());
                }

                // The timer that sent this has completed
                self.ui.home.deadline = None;
                let now = Instant::now();
                if let Some(slider) = self.ui.home.slider.as_mut() {
                    let outcome = slider.tick(now);
                    self.on_slider_outcome(outcome, now);
                }
                Some(self.reschedule_slider())
            }

            Message::SliderPointerMoved(position) => {
                self.ui.home.pointer_x = position.x;
                let dragging = self
                    .ui
                    .home
                    .slider
                    .as_ref()
                    .is_some_and(|s| s.gesture_origin().is_some());
                if dragging {
                    return Some(self.apply_slider_input(CarouselInput::GestureMove(position.x)));
                }
                Some(Task::none())
            }

            Message::SliderPointerPressed => {
                let x = self.ui.home.pointer_x;
                Some(self.apply_slider_input(CarouselInput::GestureStart(x)))
            }

            Message::SliderPointerReleased => {
                let dragging = self
                    .ui
                    .home
                    .slider
                    .as_ref()
                    .is_some_and(|s| s.gesture_origin().is_some());
                if dragging {
                    return Some(self.apply_slider_input(CarouselInput::GestureEnd));
                }
                Some(Task::none())
            }

            Message::SliderPointerLeft => {
                let dragging = self
                    .ui
                    .home
                    .slider
                    .as_ref()
                    .is_some_and(|s| s.gesture_origin().is_some());
                if dragging {
                    return Some(self.apply_slider_input(CarouselInput::GestureCancel));
                }
                Some(Task::none())
            }

            Message::SlideImageLoaded(id, result) => {
                match result {
                    Ok(image) => {
                        debug!(
                            "Slide {} image ready: {}x{} at {:?}",
                            id, image.width, image.height, image.path
                        );
                        self.ui.home.slide_images.insert(*id, image.clone());
                    }
                    Err(e) => warn!("Failed to load image for slide {}: {}", id, e),
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                // Redraw only; the carousel state changes on its own deadlines
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Feed one input to the mounted carousel and reschedule its deadline
    pub(super) fn apply_slider_input(&mut self, input: CarouselInput) -> Task<Message> {
        let now = Instant::now();
        let Some(slider) = self.ui.home.slider.as_mut() else {
            return Task::none();
        };

        let outcome = slider.dispatch(input, now);
        self.on_slider_outcome(outcome, now);
        self.reschedule_slider()
    }

    /// Create and start a fresh carousel for the Home page
    pub(crate) fn mount_slider(&mut self) -> Task<Message> {
        let slides = self.core.slides.clone();
        let config = self.core.settings.carousel.to_config();

        let slider = Carousel::new(slides.clone(), config).or_else(|e| {
            warn!("Invalid slider settings ({}), using defaults", e);
            Carousel::new(slides, CarouselConfig::default())
        });

        match slider {
            Ok(mut slider) => {
                let now = Instant::now();
                slider.start(now);
                if !self.core.window_visible {
                    slider.set_visible(false, now);
                }
                info!("Slider mounted with {} slides", slider.slide_count());
                self.ui.home.slider = Some(slider);
                self.ui.home.slide_animation = Animation::new(true);
            }
            Err(e) => {
                warn!("Slider unavailable: {}", e);
                self.ui.home.slider = None;
            }
        }

        self.reschedule_slider()
    }

    /// Stop and drop the carousel; its pending deadline is aborted
    pub(crate) fn unmount_slider(&mut self) {
        if let Some(mut slider) = self.ui.home.slider.take() {
            slider.stop();
            info!("Slider unmounted at slide {}", slider.active_index());
        }
        self.ui.home.deadline = None;
    }

    /// Download every slide image not already in memory
    pub(crate) fn load_slide_images(&self) -> Task<Message> {
        let tasks = self
            .core
            .slides
            .iter()
            .filter(|slide| !self.ui.home.slide_images.contains_key(&slide.id))
            .map(|slide| {
                let id = slide.id;
                Task::perform(
                    crate::utils::download_slide_image(
                        self.core.http.clone(),
                        id,
                        slide.image_ref.clone(),
                    ),
                    move |result| Message::SlideImageLoaded(id, result.map_err(|e| e.to_string())),
                )
            })
            .collect::<Vec<_>>();

        Task::batch(tasks)
    }

    fn on_slider_outcome(&mut self, outcome: Outcome, now: Instant) {
        let Some(transition) = outcome.transition() else {
            return;
        };

        debug!(
            "Slide {} -> {} ({:?}, {:?})",
            transition.from, transition.to, transition.direction, transition.trigger
        );

        let duration = self
            .ui
            .home
            .slider
            .as_ref()
            .map(|s| s.config().transition_duration)
            .unwrap_or_default();

        let mut animation = Animation::new(false).duration(duration);
        animation.go_mut(true, now);
        self.ui.home.slide_animation = animation;
    }

    /// Keep exactly one wake-up scheduled for the carousel's next deadline
    fn reschedule_slider(&mut self) -> Task<Message> {
        let next = self
            .ui
            .home
            .slider
            .as_ref()
            .and_then(Carousel::next_deadline);
        let scheduled = self.ui.home.deadline.as_ref().map(|timer| timer.at);

        match slider_logic::plan_timer(next, scheduled) {
            TimerPlan::Keep => Task::none(),
            TimerPlan::Schedule(at) => {
                let (task, handle) = Task::perform(
                    tokio::time::sleep_until(tokio::time::Instant::from_std(at)),
                    move |_| Message::SliderDeadline(at),
                )
                .abortable();
                // Replacing the old timer aborts it
                self.ui.home.deadline = Some(DeadlineTimer::new(at, handle));
                task
            }
            TimerPlan::Cancel => {
                self.ui.home.deadline = None;
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use iced::time::Instant;

    use crate::app::message::Message;
    use crate::app::state::{App, CoreState, UiState};
    use crate::features::{CarouselInput, Listing, Settings, listing, slides};
    use crate::i18n::Locale;

    fn app_with(settings: Settings) -> App {
        App {
            core: CoreState::new(settings, Locale::default(), slides::default_slides()),
            ui: UiState::new(Listing::new(listing::catalogue(), 9, false)),
        }
    }

    fn app() -> App {
        app_with(Settings::default())
    }

    fn scheduled(app: &App) -> Option<Instant> {
        app.ui.home.deadline.as_ref().map(|timer| timer.at)
    }

    fn next_deadline(app: &App) -> Option<Instant> {
        app.ui.home.slider.as_ref().and_then(|s| s.next_deadline())
    }

    mod property_single_wakeup {
        use super::*;

        #[tokio::test]
        async fn mount_schedules_the_next_deadline() {
            let mut app = app();
            let _task = app.mount_slider();
            assert!(scheduled(&app).is_some());
            assert_eq!(scheduled(&app), next_deadline(&app));
        }

        #[tokio::test]
        async fn input_replaces_the_wakeup() {
            let mut app = app();
            let _task = app.mount_slider();
            let autoplay_at = scheduled(&app);

            let _task = app.apply_slider_input(CarouselInput::Next);
            // Manual navigation pauses autoplay; only the lock release is pending
            assert_ne!(scheduled(&app), autoplay_at);
            assert_eq!(scheduled(&app), next_deadline(&app));
        }

        #[tokio::test]
        async fn matching_wakeup_is_not_rescheduled() {
            let mut app = app();
            let _task = app.mount_slider();
            let before = scheduled(&app);

            // Cursor motion without a drag leaves the deadline untouched
            let _task = app.update(Message::SliderPointerMoved(iced::Point::new(10.0, 10.0)));
            assert_eq!(scheduled(&app), before);
        }
    }

    mod property_teardown {
        use super::*;

        #[tokio::test]
        async fn unmount_clears_the_wakeup() {
            let mut app = app();
            let _task = app.mount_slider();
            let _task = app.apply_slider_input(CarouselInput::Next);
            assert!(scheduled(&app).is_some());

            app.unmount_slider();
            assert!(app.ui.home.slider.is_none());
            assert!(app.ui.home.deadline.is_none());
        }

        #[tokio::test]
        async fn wakeup_after_unmount_changes_nothing() {
            let mut app = app();
            let _task = app.mount_slider();
            let at = scheduled(&app).unwrap();
            app.unmount_slider();

            let _task = app.update(Message::SliderDeadline(at));
            assert!(app.ui.home.slider.is_none());
            assert!(app.ui.home.deadline.is_none());
        }

        #[tokio::test]
        async fn stale_wakeup_after_remount_is_harmless() {
            let mut app = app();
            let _task = app.mount_slider();
            let stale = scheduled(&app).unwrap();
            app.unmount_slider();

            std::thread::sleep(Duration::from_millis(2));
            let _task = app.mount_slider();
            let fresh = scheduled(&app).unwrap();
            assert_ne!(stale, fresh);

            let _task = app.update(Message::SliderDeadline(stale));
            assert_eq!(scheduled(&app), Some(fresh));
            let slider = app.ui.home.slider.as_ref().unwrap();
            assert_eq!(slider.active_index(), 0);
            assert!(slider.is_auto_advancing());
        }

        #[tokio::test]
        async fn current_wakeup_releases_the_lock() {
            let mut settings = Settings::default();
            settings.carousel.transition_duration_ms = 1;
            let mut app = app_with(settings);
            let _task = app.mount_slider();
            let _task = app.apply_slider_input(CarouselInput::Next);
            let at = scheduled(&app).unwrap();

            std::thread::sleep(Duration::from_millis(5));
            let _task = app.update(Message::SliderDeadline(at));

            let slider = app.ui.home.slider.as_ref().unwrap();
            assert!(!slider.is_transitioning());
            assert_eq!(slider.active_index(), 1);
            // Autoplay was paused by the manual move, so nothing is left to wait for
            assert!(app.ui.home.deadline.is_none());
        }
    }

    mod property_visibility {
        use super::*;

        #[tokio::test]
        async fn minimise_pauses_and_restore_resumes() {
            let mut app = app();
            let _task = app.mount_slider();

            let _task = app.update(Message::WindowResized(iced::Size::ZERO));
            assert!(!app.core.window_visible);
            assert!(!app.ui.home.slider.as_ref().unwrap().is_auto_advancing());
            assert!(app.ui.home.deadline.is_none());

            let _task = app.update(Message::WindowResized(iced::Size::new(1200.0, 820.0)));
            assert!(app.core.window_visible);
            assert!(app.ui.home.slider.as_ref().unwrap().is_auto_advancing());
            assert_eq!(scheduled(&app), next_deadline(&app));
        }

        #[tokio::test]
        async fn mount_while_minimised_stays_paused() {
            let mut app = app();
            app.core.window_visible = false;
            let _task = app.mount_slider();
            assert!(!app.ui.home.slider.as_ref().unwrap().is_auto_advancing());
            assert!(app.ui.home.deadline.is_none());
        }
    }

    mod property_pointer {
        use super::*;

        #[tokio::test]
        async fn leaving_the_banner_drops_the_drag() {
            let mut app = app();
            let _task = app.mount_slider();

            let _task = app.update(Message::SliderPointerMoved(iced::Point::new(400.0, 50.0)));
            let _task = app.update(Message::SliderPointerPressed);
            let _task = app.update(Message::SliderPointerMoved(iced::Point::new(100.0, 50.0)));
            let _task = app.update(Message::SliderPointerLeft);

            let slider = app.ui.home.slider.as_ref().unwrap();
            assert_eq!(slider.gesture_origin(), None);
            assert_eq!(slider.active_index(), 0);
            assert!(slider.is_auto_advancing());
        }

        #[tokio::test]
        async fn release_over_the_banner_swipes() {
            let mut app = app();
            let _task = app.mount_slider();

            let _task = app.update(Message::SliderPointerMoved(iced::Point::new(400.0, 50.0)));
            let _task = app.update(Message::SliderPointerPressed);
            let _task = app.update(Message::SliderPointerMoved(iced::Point::new(100.0, 50.0)));
            let _task = app.update(Message::SliderPointerReleased);

            assert_eq!(app.ui.home.slider.as_ref().unwrap().active_index(), 1);
        }
    }
}
