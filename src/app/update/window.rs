// src/app/update/window.rs
//! Window lifecycle message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::slider_logic;
use crate::app::state::App;
use crate::features::CarouselInput;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                let visible = slider_logic::window_visible(*size);
                if visible == self.core.window_visible {
                    return Some(Task::none());
                }

                self.core.window_visible = visible;
                tracing::info!("Window visible: {}", visible);
                Some(self.apply_slider_input(CarouselInput::VisibilityChanged(visible)))
            }

            Message::WindowClosed => {
                self.unmount_slider();
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
