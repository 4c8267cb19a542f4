//! Pages module
//! Full-page views for the marketplace

pub mod about;
pub mod contact;
pub mod home;
