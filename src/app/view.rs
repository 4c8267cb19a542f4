// src/app/view.rs
//! Application view rendering

use iced::widget::{column, container, text};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::components::{NavItem, header, search_bar};
use crate::ui::{pages, theme};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        let page: Element<'_, Message> = match self.ui.active_nav {
            NavItem::Home => pages::home::view(&self.ui.home, &self.ui.listing, locale),
            NavItem::About => pages::about::view(locale, &self.core.settings.keybindings),
            NavItem::Contact => pages::contact::view(locale),
        };

        let footer = container(
            text(format!(
                "© {} {}",
                locale.get(Key::AppName),
                locale.get(Key::FooterRights)
            ))
            .size(12)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
        )
        .padding(12)
        .center_x(Fill);

        let mut sections: Vec<Element<'_, Message>> = vec![header::view(
            self.ui.active_nav,
            locale,
            self.core.settings.display.dark_mode,
            self.ui.listing.query(),
        )];
        sections.extend(search_bar::results(&self.ui.listing, locale));
        sections.push(container(page).height(Fill).into());
        sections.push(footer.into());

        container(column(sections))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}
