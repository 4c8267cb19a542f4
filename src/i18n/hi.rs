//! Hindi translations
//!
//! Keys missing here fall back to English.

use super::{Key, SlideCaption};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Navigation
    m.insert(Key::NavHome, "घर");
    m.insert(Key::NavAbout, "के बारे में");
    m.insert(Key::NavContact, "संपर्क करें");

    // Header
    m.insert(Key::LanguageLabel, "भाषा");

    // Slider
    m.insert(Key::SliderPrevious, "पिछली स्लाइड");
    m.insert(Key::SliderNext, "अगली स्लाइड");
    m.insert(Key::SliderPause, "स्लाइडशो रोकें");
    m.insert(Key::SliderPlay, "स्लाइडशो चलाएँ");

    // Categories
    m.insert(Key::CategoriesTitle, "श्रेणियाँ");
    m.insert(Key::CategoryRetail, "खुदरा");
    m.insert(Key::CategoryRestaurants, "रेस्तरां");
    m.insert(Key::CategoryAutomotive, "ऑटोमोटिव");
    m.insert(Key::CategoryFashion, "फैशन");
    m.insert(Key::CategoryHomeGoods, "घर के सामान");
    m.insert(Key::CategoryServices, "सेवाएँ");
    m.insert(Key::CategoryAll, "सभी");

    // Shop listing
    m.insert(Key::ShopsTitle, "स्थानीय व्यवसाय");
    m.insert(Key::ShopsEmpty, "इस श्रेणी में अभी कोई व्यवसाय नहीं है");
    m.insert(Key::PagePrevious, "पिछला");
    m.insert(Key::PageNext, "अगला");

    // Search
    m.insert(Key::SearchPlaceholder, "खोजें...");
    m.insert(Key::SearchNoResults, "आपकी खोज से कोई व्यवसाय मेल नहीं खाता");

    // About page
    m.insert(Key::AboutTitle, "हमारे बारे में");
    m.insert(
        Key::AboutText,
        "आपका स्थानीय बाज़ार जो समुदायों को विश्वसनीय व्यवसायों से जोड़ता है।",
    );

    // Contact page
    m.insert(Key::ContactTitle, "संपर्क करें");

    // Footer
    m.insert(Key::FooterRights, "सभी अधिकार सुरक्षित हैं");

    m
});

static SLIDE_CAPTIONS: Lazy<HashMap<&'static str, SlideCaption>> = Lazy::new(|| {
    HashMap::from([
        (
            "discover",
            SlideCaption {
                title: "स्थानीय व्यवसायों की खोज करें",
                description: "स्थानीय खरीदारी करके अपने समुदाय का समर्थन करें।",
            },
        ),
        (
            "special",
            SlideCaption {
                title: "विशेष ऑफ़र",
                description: "आपकी पसंदीदा स्थानीय दुकानों से विशेष सौदे।",
            },
        ),
        (
            "community",
            SlideCaption {
                title: "समुदाय का निर्माण",
                description: "विश्वसनीय स्थानीय व्यवसायों के साथ पड़ोसियों को जोड़ना।",
            },
        ),
        (
            "explore",
            SlideCaption {
                title: "नई फैशनों की खोज करें",
                description: "एक समय में एक आउटफिट, ट्रेंड को फिर से परिभाषित करना।",
            },
        ),
        (
            "adventure",
            SlideCaption {
                title: "रविवार को अपने तरीके से भोजन करें",
                description: "स्वादिष्ट छूट का इंतजार है!",
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
