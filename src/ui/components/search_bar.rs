//! Header search box and its result list

use iced::widget::{Space, button, column, container, row, scrollable, svg, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Listing;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

const RESULTS_MAX_HEIGHT: f32 = 260.0;

fn icon(svg_src: &'static str, size: f32) -> svg::Svg<'static> {
    svg(svg::Handle::from_memory(svg_src.as_bytes()))
        .width(size)
        .height(size)
        .style(|theme, _status| svg::Style {
            color: Some(theme::text_muted(theme)),
        })
}

/// Rounded search input; Enter submits
pub fn view(query: &str, locale: Locale) -> Element<'_, Message> {
    let input = text_input(locale.get(Key::SearchPlaceholder), query)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(Padding::new(8.0).left(0.0))
        .size(14)
        .style(theme::search_input);

    let clear: Element<'_, Message> = if query.is_empty() {
        Space::new().width(16).into()
    } else {
        button(icon(crate::ui::icons::CLOSE, 14.0))
            .padding(4)
            .style(theme::icon_button)
            .on_press(Message::SearchCleared)
            .into()
    };

    container(
        row![
            Space::new().width(14),
            icon(crate::ui::icons::SEARCH, 16.0),
            Space::new().width(8),
            input,
            clear,
            Space::new().width(6),
        ]
        .align_y(Alignment::Center),
    )
    .width(260)
    .style(theme::search_field)
    .into()
}

/// Matches for the current query, or `None` while the query is blank
pub fn results(listing: &Listing, locale: Locale) -> Option<Element<'_, Message>> {
    if listing.query().trim().is_empty() {
        return None;
    }

    let matches = listing.search_results();
    let body: Element<'_, Message> = if matches.is_empty() {
        text(locale.get(Key::SearchNoResults))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into()
    } else {
        scrollable(column(matches.into_iter().map(|shop| {
            button(text(&shop.name).size(14))
                .width(Fill)
                .padding([6, 10])
                .style(theme::search_result)
                .on_press(Message::VisitBusiness(shop.id))
                .into()
        })))
        .style(theme::page_scrollable)
        .height(iced::Length::Shrink)
        .into()
    };

    Some(
        container(container(body).max_height(RESULTS_MAX_HEIGHT))
            .width(Fill)
            .padding(Padding::new(8.0).left(32.0).right(24.0))
            .style(theme::card)
            .into(),
    )
}
