// src/app/update/listing.rs
//! Shop listing and search message handlers

use iced::Task;
use tracing::{debug, info};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle listing and search messages
    pub fn handle_listing(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Listing(input) => {
                let changed = self.ui.listing.dispatch(*input);
                debug!(
                    "Listing {:?}: changed={}, page {}/{}",
                    input,
                    changed,
                    self.ui.listing.page() + 1,
                    self.ui.listing.page_count()
                );
                Some(Task::none())
            }

            Message::SearchChanged(query) => {
                self.ui.listing.set_query(query.clone());
                Some(Task::none())
            }

            Message::SearchSubmitted => {
                let results = self.ui.listing.search_results().len();
                info!(
                    "Search for {:?}: {} result(s)",
                    self.ui.listing.query(),
                    results
                );
                Some(Task::none())
            }

            Message::SearchCleared => {
                self.ui.listing.set_query(String::new());
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::message::Message;
    use crate::app::state::{App, CoreState, UiState};
    use crate::features::{Category, Listing, ListingInput, Settings, listing, slides};
    use crate::i18n::Locale;
    use crate::ui::components::NavItem;

    fn app(rotating: bool) -> App {
        App {
            core: CoreState::new(
                Settings::default(),
                Locale::default(),
                slides::default_slides(),
            ),
            ui: UiState::new(Listing::new(listing::catalogue(), 9, rotating)),
        }
    }

    #[test]
    fn category_tile_filters_and_resets_page() {
        let mut app = app(false);
        let _ = app.update(Message::Listing(ListingInput::GoToPage(2)));
        assert_eq!(app.ui.listing.page(), 2);

        let _ = app.update(Message::Listing(ListingInput::SelectCategory(Some(
            Category::Automotive,
        ))));
        assert_eq!(app.ui.listing.page(), 0);
        assert!(
            app.ui
                .listing
                .current_page()
                .iter()
                .all(|shop| shop.category == Category::Automotive)
        );
    }

    #[test]
    fn rotation_tick_stops_after_manual_choice() {
        let mut app = app(true);
        let _ = app.update(Message::Listing(ListingInput::RotateCategory));
        assert_eq!(app.ui.listing.category(), Some(Category::Retail));

        let _ = app.update(Message::Listing(ListingInput::SelectCategory(None)));
        let _ = app.update(Message::Listing(ListingInput::RotateCategory));
        assert_eq!(app.ui.listing.category(), None);
    }

    #[test]
    fn search_edits_and_clears() {
        let mut app = app(false);
        let _ = app.update(Message::SearchChanged("beauty".to_string()));
        assert_eq!(app.ui.listing.search_results().len(), 1);

        let _ = app.update(Message::SearchChanged("zzz".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        assert!(app.ui.listing.search_results().is_empty());

        let _ = app.update(Message::SearchCleared);
        assert_eq!(app.ui.listing.query(), "");
    }

    #[test]
    fn visiting_a_result_clears_the_search() {
        let mut app = app(false);
        app.ui.active_nav = NavItem::About;
        let _ = app.update(Message::SearchChanged("cafe".to_string()));
        let _ = app.update(Message::VisitBusiness(8));
        assert_eq!(app.ui.listing.query(), "");
    }
}
