//! About page with the keyboard shortcut reference

use iced::widget::{Space, column, container, row, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::{Action, KeyBindings};
use crate::i18n::{Key, Locale};
use crate::ui::components::NavItem;
use crate::ui::theme::{self, BOLD_WEIGHT};

pub fn view(locale: Locale, keybindings: &KeyBindings) -> Element<'static, Message> {
    let shortcuts = column(Action::all().iter().map(|action| {
        row![
            text(locale.get(action.i18n_key())).size(14),
            Space::new().width(Fill),
            container(text(keybindings.display_for_action(action)).size(13))
                .padding([4, 12])
                .style(theme::shortcut_key),
        ]
        .align_y(Alignment::Center)
        .into()
    }))
    .spacing(10);

    let content = column![
        text(locale.get(Key::AboutTitle)).size(36).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        text(locale.get(Key::AboutText))
            .size(17)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
        Space::new().height(16),
        container(
            column![
                text(locale.get(Key::ShortcutsTitle)).size(20).font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
                shortcuts,
            ]
            .spacing(16),
        )
        .padding(24)
        .max_width(560)
        .style(theme::card),
    ]
    .spacing(16)
    .padding(Padding::new(48.0))
    .width(Fill);

    scrollable(content)
        .id(iced::widget::Id::new(NavItem::About.scroll_id()))
        .style(theme::page_scrollable)
        .height(Fill)
        .into()
}
