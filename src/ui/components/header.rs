//! Top navigation bar
//! Brand, page links, search, language picker and dark mode toggle

use iced::widget::{Space, button, container, pick_list, row, svg, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

pub const HEADER_HEIGHT: f32 = 64.0;

/// Navigation menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    About,
    Contact,
}

impl NavItem {
    pub fn all() -> &'static [NavItem] {
        &[NavItem::Home, NavItem::About, NavItem::Contact]
    }

    pub fn i18n_key(&self) -> Key {
        match self {
            NavItem::Home => Key::NavHome,
            NavItem::About => Key::NavAbout,
            NavItem::Contact => Key::NavContact,
        }
    }

    /// Id of the page's scrollable
    pub fn scroll_id(&self) -> &'static str {
        match self {
            NavItem::Home => "home_scroll",
            NavItem::About => "about_scroll",
            NavItem::Contact => "contact_scroll",
        }
    }
}

/// Build the header bar
pub fn view(
    active: NavItem,
    locale: Locale,
    dark_mode: bool,
    search_query: &str,
) -> Element<'_, Message> {
    let brand = row![
        svg(svg::Handle::from_memory(crate::ui::icons::STORE.as_bytes()))
            .width(26)
            .height(26)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::ACCENT)
            }),
        text(locale.get(Key::AppName)).size(22).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let nav = row(NavItem::all().iter().map(|&item| {
        button(text(locale.get(item.i18n_key())).size(15).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }))
        .padding([6, 14])
        .style(theme::nav_item(item == active))
        .on_press(Message::Navigate(item))
        .into()
    }))
    .spacing(4)
    .align_y(Alignment::Center);

    let language = pick_list(
        Language::all(),
        Some(locale.language),
        Message::LanguageChanged,
    )
    .text_size(14)
    .padding([6, 10])
    .style(theme::header_pick_list)
    .menu_style(theme::header_pick_list_menu);

    let theme_icon = if dark_mode {
        crate::ui::icons::SUN
    } else {
        crate::ui::icons::MOON
    };

    let theme_toggle = tooltip(
        button(
            svg(svg::Handle::from_memory(theme_icon.as_bytes()))
                .width(20)
                .height(20)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        )
        .padding(8)
        .style(theme::icon_button)
        .on_press(Message::ToggleDarkMode),
        text(locale.get(Key::ToggleTheme)).size(12),
        tooltip::Position::Bottom,
    );

    container(
        row![
            brand,
            Space::new().width(32),
            nav,
            Space::new().width(Fill),
            super::search_bar::view(search_query, locale),
            Space::new().width(8),
            text(locale.get(Key::LanguageLabel))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme))
                }),
            language,
            theme_toggle,
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .padding(Padding::new(0.0).left(32.0).right(24.0))
    .align_y(Alignment::Center)
    .style(theme::header)
    .into()
}
