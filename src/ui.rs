//! UI module for the marketplace front-end
//!
//! # Architecture
//!
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views composed from components
//! - **Theme** (`theme`): Colors and widget styles for dark and light modes

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
