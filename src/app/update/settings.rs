//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                let dark = !self.core.settings.display.dark_mode;
                self.core.settings.display.dark_mode = dark;
                tracing::info!("Dark mode: {}", dark);
                Some(Task::done(Message::SaveSettings))
            }
            Message::LanguageChanged(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                tracing::info!("Language changed to: {}", language.code());
                Some(Task::done(Message::SaveSettings))
            }
            Message::SaveSettings => {
                if let Err(e) = self.core.settings.save() {
                    tracing::error!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
