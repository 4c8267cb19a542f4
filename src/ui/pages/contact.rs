//! Contact page

use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::components::NavItem;
use crate::ui::theme::{self, BOLD_WEIGHT};

const OFFICE_HOURS: [&str; 3] = [
    "Monday - Friday: 9:00 AM - 6:00 PM",
    "Saturday: 10:00 AM - 4:00 PM",
    "Sunday: Closed",
];

const ADDRESS: [&str; 3] = ["123 Market Street", "City, State 12345", "United States"];

fn info_card(title: &'static str, lines: &'static [&'static str]) -> Element<'static, Message> {
    let body = column(lines.iter().map(|line| {
        text(*line)
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
            .into()
    }))
    .spacing(4);

    container(
        column![
            text(title).size(17).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            body,
        ]
        .spacing(10),
    )
    .padding(20)
    .width(Fill)
    .style(theme::card)
    .into()
}

pub fn view(locale: Locale) -> Element<'static, Message> {
    let content = column![
        text(locale.get(Key::ContactTitle)).size(36).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        row![
            info_card(locale.get(Key::ContactHours), &OFFICE_HOURS),
            info_card(locale.get(Key::ContactLocation), &ADDRESS),
        ]
        .spacing(24),
    ]
    .spacing(24)
    .padding(Padding::new(48.0))
    .max_width(900);

    scrollable(content)
        .id(iced::widget::Id::new(NavItem::Contact.scroll_id()))
        .style(theme::page_scrollable)
        .height(Fill)
        .into()
}
