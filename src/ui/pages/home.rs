//! Home page: hero slider, category filter and shop listing

use iced::widget::{column, scrollable};
use iced::{Element, Fill, Padding};

use crate::app::{HomePageState, Message};
use crate::features::Listing;
use crate::i18n::Locale;
use crate::ui::components::{NavItem, carousel_banner, category_grid, shop_grid};
use crate::ui::theme;

pub fn view<'a>(
    home: &'a HomePageState,
    listing: &'a Listing,
    locale: Locale,
) -> Element<'a, Message> {
    let content = column![
        carousel_banner::view(
            home.slider.as_ref(),
            &home.slide_images,
            &home.slide_animation,
            home.pointer_x,
            locale,
        ),
        category_grid::view(listing.category(), locale),
        shop_grid::view(listing, locale),
    ]
    .spacing(40)
    .padding(Padding::new(32.0))
    .width(Fill);

    scrollable(content)
        .id(iced::widget::Id::new(NavItem::Home.scroll_id()))
        .style(theme::page_scrollable)
        .height(Fill)
        .into()
}
