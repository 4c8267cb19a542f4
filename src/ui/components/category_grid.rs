//! Category filter tiles shown under the hero slider

use iced::widget::{button, column, row, text};
use iced::{Element, Fill};

use crate::app::Message;
use crate::features::{Category, ListingInput};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

const COLUMNS: usize = 4;

/// Translation key for a category name
pub fn category_key(category: Category) -> Key {
    match category {
        Category::Retail => Key::CategoryRetail,
        Category::Restaurants => Key::CategoryRestaurants,
        Category::Automotive => Key::CategoryAutomotive,
        Category::Fashion => Key::CategoryFashion,
        Category::HomeGoods => Key::CategoryHomeGoods,
        Category::Services => Key::CategoryServices,
    }
}

/// "All" followed by every category; `selected` is `None` for "All"
pub fn view(selected: Option<Category>, locale: Locale) -> Element<'static, Message> {
    let choices: Vec<Option<Category>> = std::iter::once(None)
        .chain(Category::ALL.into_iter().map(Some))
        .collect();

    let rows = choices.chunks(COLUMNS).map(|chunk| {
        row(chunk.iter().map(|&choice| {
            let label = match choice {
                Some(category) => locale.get(category_key(category)),
                None => locale.get(Key::CategoryAll),
            };
            button(text(label).size(15).font(iced::Font {
                weight: MEDIUM_WEIGHT,
                ..Default::default()
            }))
            .padding([18, 20])
            .width(Fill)
            .style(theme::category_tile(choice == selected))
            .on_press(Message::Listing(ListingInput::SelectCategory(choice)))
            .into()
        }))
        .spacing(16)
        .into()
    });

    column![
        text(locale.get(Key::CategoriesTitle))
            .size(24)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
        column(rows).spacing(16),
    ]
    .spacing(16)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_a_distinct_label() {
        let locale = Locale::default();
        let mut labels: Vec<_> = Category::ALL
            .iter()
            .map(|c| locale.get(category_key(*c)))
            .collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), Category::ALL.len());
    }
}
