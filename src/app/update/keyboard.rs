// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Action, CarouselInput};

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    ///
    /// Slider actions are no-ops while the slider is not mounted.
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::PreviousSlide => self.apply_slider_input(CarouselInput::Previous),
            Action::NextSlide => self.apply_slider_input(CarouselInput::Next),
            Action::ToggleAutoplay => self.apply_slider_input(CarouselInput::ToggleAutoAdvance),
            Action::FirstSlide => self.apply_slider_input(CarouselInput::JumpTo(0)),
            Action::LastSlide => {
                let Some(count) = self.ui.home.slider.as_ref().map(|s| s.slide_count()) else {
                    return Task::none();
                };
                self.apply_slider_input(CarouselInput::JumpTo(count - 1))
            }
            Action::ToggleDarkMode => self.update(Message::ToggleDarkMode),
        }
    }
}
