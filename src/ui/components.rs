//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic.
//! They are the only layer that should import from `crate::app`.

pub mod carousel_banner;
pub mod category_grid;
pub mod header;
pub mod search_bar;
pub mod shop_grid;

pub use header::NavItem;
