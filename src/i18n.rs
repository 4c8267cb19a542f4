//! Internationalization (i18n) support for Bazaar
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs / es.rs / hi.rs: English, Spanish and Hindi translations
//!
//! Interface text is addressed by [`Key`]; slide captions are addressed by
//! the slide's display key string.

mod en;
mod es;
mod hi;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    Hindi,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::Hindi => "hi",
        }
    }

    /// Parse a language code, defaulting to English
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Spanish, Language::Hindi]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Navigation
    NavHome,
    NavAbout,
    NavContact,

    // Header
    ToggleTheme,
    LanguageLabel,

    // Slider
    SliderPrevious,
    SliderNext,
    SliderGoTo,
    SliderPause,
    SliderPlay,
    SliderVisit,
    SliderUnavailable,

    // Shortcut actions
    ActionToggleAutoplay,
    ActionFirstSlide,
    ActionLastSlide,

    // Categories
    CategoriesTitle,
    CategoryRetail,
    CategoryRestaurants,
    CategoryAutomotive,
    CategoryFashion,
    CategoryHomeGoods,
    CategoryServices,
    CategoryAll,

    // Shop listing
    ShopsTitle,
    ShopsEmpty,
    PagePrevious,
    PageNext,

    // Search
    SearchPlaceholder,
    SearchNoResults,

    // About page
    AboutTitle,
    AboutText,
    ShortcutsTitle,

    // Contact page
    ContactTitle,
    ContactHours,
    ContactLocation,

    // Footer
    FooterRights,
}

/// Caption for one slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCaption {
    pub title: &'static str,
    pub description: &'static str,
}

fn table(lang: Language) -> &'static HashMap<Key, &'static str> {
    match lang {
        Language::English => en::translations(),
        Language::Spanish => es::translations(),
        Language::Hindi => hi::translations(),
    }
}

fn captions(lang: Language) -> &'static HashMap<&'static str, SlideCaption> {
    match lang {
        Language::English => en::slide_captions(),
        Language::Spanish => es::slide_captions(),
        Language::Hindi => hi::slide_captions(),
    }
}

/// Get translation for a key in the specified language
///
/// Missing entries fall back to English.
pub fn t(lang: Language, key: Key) -> &'static str {
    table(lang)
        .get(&key)
        .or_else(|| en::translations().get(&key))
        .copied()
        .unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Caption for a slide display key, if one is known
    pub fn slide_caption(&self, display_key: &str) -> Option<SlideCaption> {
        captions(self.language)
            .get(display_key)
            .or_else(|| en::slide_captions().get(display_key))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::NavHome,
        Key::NavAbout,
        Key::NavContact,
        Key::ToggleTheme,
        Key::LanguageLabel,
        Key::SliderPrevious,
        Key::SliderNext,
        Key::SliderGoTo,
        Key::SliderPause,
        Key::SliderPlay,
        Key::SliderVisit,
        Key::SliderUnavailable,
        Key::ActionToggleAutoplay,
        Key::ActionFirstSlide,
        Key::ActionLastSlide,
        Key::CategoriesTitle,
        Key::CategoryRetail,
        Key::CategoryRestaurants,
        Key::CategoryAutomotive,
        Key::CategoryFashion,
        Key::CategoryHomeGoods,
        Key::CategoryServices,
        Key::CategoryAll,
        Key::ShopsTitle,
        Key::ShopsEmpty,
        Key::PagePrevious,
        Key::PageNext,
        Key::SearchPlaceholder,
        Key::SearchNoResults,
        Key::AboutTitle,
        Key::AboutText,
        Key::ShortcutsTitle,
        Key::ContactTitle,
        Key::ContactHours,
        Key::ContactLocation,
        Key::FooterRights,
    ];

    #[test]
    fn english_is_complete() {
        for key in ALL_KEYS {
            assert_ne!(t(Language::English, *key), "???", "{key:?}");
        }
    }

    #[test]
    fn every_language_translates_slider_controls() {
        for lang in Language::all() {
            for key in [
                Key::SliderPrevious,
                Key::SliderNext,
                Key::SliderPause,
                Key::PagePrevious,
                Key::PageNext,
            ] {
                assert!(table(*lang).contains_key(&key), "{lang:?} {key:?}");
            }
        }
    }

    #[test]
    fn default_slides_have_captions_in_every_language() {
        for lang in Language::all() {
            let locale = Locale::new(*lang);
            for slide in crate::features::slides::default_slides() {
                assert!(
                    captions(*lang).contains_key(slide.display_key.as_str()),
                    "{lang:?} {}",
                    slide.display_key
                );
                assert!(locale.slide_caption(&slide.display_key).is_some());
            }
        }
    }

    #[test]
    fn unknown_caption_is_none() {
        assert_eq!(Locale::default().slide_caption("nope"), None);
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), *lang);
        }
        assert_eq!(Language::from_code("zz"), Language::English);
    }
}
