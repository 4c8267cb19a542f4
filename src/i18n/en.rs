//! English translations

use super::{Key, SlideCaption};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Bazaar");

    // Navigation
    m.insert(Key::NavHome, "Home");
    m.insert(Key::NavAbout, "About");
    m.insert(Key::NavContact, "Contact");

    // Header
    m.insert(Key::ToggleTheme, "Toggle dark mode");
    m.insert(Key::LanguageLabel, "Language");

    // Slider
    m.insert(Key::SliderPrevious, "Previous slide");
    m.insert(Key::SliderNext, "Next slide");
    m.insert(Key::SliderGoTo, "Go to slide");
    m.insert(Key::SliderPause, "Pause slideshow");
    m.insert(Key::SliderPlay, "Play slideshow");
    m.insert(Key::SliderVisit, "Visit");
    m.insert(Key::SliderUnavailable, "No featured businesses right now");

    // Shortcut actions
    m.insert(Key::ActionToggleAutoplay, "Play / pause slideshow");
    m.insert(Key::ActionFirstSlide, "First slide");
    m.insert(Key::ActionLastSlide, "Last slide");

    // Categories
    m.insert(Key::CategoriesTitle, "Categories");
    m.insert(Key::CategoryRetail, "Retail");
    m.insert(Key::CategoryRestaurants, "Restaurants");
    m.insert(Key::CategoryAutomotive, "Automotive");
    m.insert(Key::CategoryFashion, "Fashion");
    m.insert(Key::CategoryHomeGoods, "Home Goods");
    m.insert(Key::CategoryServices, "Services");
    m.insert(Key::CategoryAll, "All");

    // Shop listing
    m.insert(Key::ShopsTitle, "Local businesses");
    m.insert(Key::ShopsEmpty, "No businesses in this category yet");
    m.insert(Key::PagePrevious, "Previous");
    m.insert(Key::PageNext, "Next");

    // Search
    m.insert(Key::SearchPlaceholder, "Search...");
    m.insert(Key::SearchNoResults, "No businesses match your search");

    // About page
    m.insert(Key::AboutTitle, "About Us");
    m.insert(
        Key::AboutText,
        "Your local marketplace connecting communities with trusted businesses.",
    );
    m.insert(Key::ShortcutsTitle, "Keyboard shortcuts");

    // Contact page
    m.insert(Key::ContactTitle, "Contact");
    m.insert(Key::ContactHours, "Office Hours");
    m.insert(Key::ContactLocation, "Location");

    // Footer
    m.insert(Key::FooterRights, "All rights reserved");

    m
});

static SLIDE_CAPTIONS: Lazy<HashMap<&'static str, SlideCaption>> = Lazy::new(|| {
    HashMap::from([
        (
            "discover",
            SlideCaption {
                title: "Discover Local Businesses",
                description: "Support your community by shopping local.",
            },
        ),
        (
            "special",
            SlideCaption {
                title: "Special Offers",
                description: "Exclusive deals from your favorite local shops.",
            },
        ),
        (
            "community",
            SlideCaption {
                title: "Building Community",
                description: "Connecting neighbors with trusted local businesses.",
            },
        ),
        (
            "explore",
            SlideCaption {
                title: "Explore New Fashions",
                description: "Redefining Trends, One Outfit at a Time.",
            },
        ),
        (
            "adventure",
            SlideCaption {
                title: "Feast Your Way Through Sunday",
                description: "Delicious Discounts Await!",
            },
        ),
    ])
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}

pub fn slide_captions() -> &'static HashMap<&'static str, SlideCaption> {
    &SLIDE_CAPTIONS
}
