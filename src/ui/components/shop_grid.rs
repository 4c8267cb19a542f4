//! Paged shop cards with prev/next and page numbers

use iced::widget::{Space, button, column, container, row, svg, text};
use iced::{Alignment, Element, Fill};

use super::category_grid::category_key;
use crate::app::Message;
use crate::features::{Listing, ListingInput, Shop};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

const COLUMNS: usize = 3;
const HEARTS: usize = 5;

pub fn view(listing: &Listing, locale: Locale) -> Element<'_, Message> {
    let title = text(locale.get(Key::ShopsTitle)).size(24).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let shops = listing.current_page();
    if shops.is_empty() {
        return column![
            title,
            text(locale.get(Key::ShopsEmpty))
                .size(14)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme))
                }),
        ]
        .spacing(16)
        .into();
    }

    let rows = shops.chunks(COLUMNS).map(|chunk| {
        let mut cells: Vec<Element<'_, Message>> =
            chunk.iter().map(|&shop| shop_card(shop, locale)).collect();
        // Keep card widths equal on a short last row
        cells.resize_with(COLUMNS, || Space::new().width(Fill).into());
        row(cells).spacing(16).into()
    });

    column![
        title,
        column(rows).spacing(16),
        pagination(listing, locale)
    ]
    .spacing(20)
    .into()
}

fn shop_card<'a>(shop: &'a Shop, locale: Locale) -> Element<'a, Message> {
    let filled = shop.rating.floor() as usize;
    let hearts = row((0..HEARTS).map(|i| {
        let lit = i < filled;
        svg(svg::Handle::from_memory(crate::ui::icons::HEART.as_bytes()))
            .width(14)
            .height(14)
            .style(move |theme, _status| svg::Style {
                color: Some(if lit {
                    theme::ACCENT
                } else {
                    theme::border_color(theme)
                }),
            })
            .into()
    }))
    .spacing(2);

    let content = column![
        text(locale.get(category_key(shop.category)))
            .size(11)
            .style(|_theme| text::Style {
                color: Some(theme::ACCENT)
            }),
        text(&shop.name).size(17).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        text(&shop.description)
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
        row![
            hearts,
            text(format!("{:.1}", shop.rating))
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme))
                }),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    button(container(content).width(Fill))
        .padding(18)
        .width(Fill)
        .style(theme::shop_card)
        .on_press(Message::VisitBusiness(shop.id))
        .into()
}

fn pagination(listing: &Listing, locale: Locale) -> Element<'static, Message> {
    let previous = button(text(locale.get(Key::PagePrevious)).size(13))
        .padding([6, 14])
        .style(theme::page_button(false))
        .on_press_maybe(
            listing
                .has_previous_page()
                .then_some(Message::Listing(ListingInput::PreviousPage)),
        );

    let next = button(text(locale.get(Key::PageNext)).size(13))
        .padding([6, 14])
        .style(theme::page_button(false))
        .on_press_maybe(
            listing
                .has_next_page()
                .then_some(Message::Listing(ListingInput::NextPage)),
        );

    let current = listing.page();
    let numbers = row((0..listing.page_count()).map(|page| {
        button(text(format!("{}", page + 1)).size(13))
            .padding([6, 12])
            .style(theme::page_button(page == current))
            .on_press(Message::Listing(ListingInput::GoToPage(page)))
            .into()
    }))
    .spacing(6);

    container(
        row![previous, numbers, next]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .center_x(Fill)
    .into()
}
