//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod carousel;
pub mod keybindings;
pub mod listing;
pub mod settings;
pub mod slides;

pub use carousel::{Carousel, CarouselInput, Outcome, Slide};
pub use keybindings::{Action, KeyBindings};
pub use listing::{Category, Listing, ListingInput, Shop};
pub use settings::Settings;
