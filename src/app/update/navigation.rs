// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::components::NavItem;

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Noop => Some(Task::none()),

            Message::Navigate(item) => Some(self.navigate_to(*item)),

            Message::VisitBusiness(id) => {
                // Business detail pages live outside this app
                tracing::info!("Visit requested for business {}", id);
                self.ui.listing.set_query(String::new());
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Switch pages; the slider is mounted only while Home is shown
    fn navigate_to(&mut self, item: NavItem) -> Task<Message> {
        if self.ui.active_nav == item {
            return Task::none();
        }

        let leaving_home = self.ui.active_nav == NavItem::Home;
        self.ui.active_nav = item;
        tracing::debug!("Navigated to {:?}", item);

        if leaving_home {
            self.unmount_slider();
        }

        let snap = iced::widget::operation::snap_to(
            iced::widget::Id::new(item.scroll_id()),
            iced::widget::scrollable::RelativeOffset { x: 0.0, y: 0.0 },
        );

        if item == NavItem::Home {
            Task::batch([self.mount_slider(), self.load_slide_images(), snap])
        } else {
            snap
        }
    }
}
