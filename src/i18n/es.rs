//! Spanish translations

use super::{Key, SlideCaption};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Bazaar");

    // Navigation
    m.insert(Key::NavHome, "Inicio");
    m.insert(Key::NavAbout, "Acerca de");
    m.insert(Key::NavContact, "Contacto");

    // Header
    m.insert(Key::ToggleTheme, "Cambiar modo oscuro");
    m.insert(Key::LanguageLabel, "Idioma");

    // Slider
    m.insert(Key::SliderPrevious, "Diapositiva anterior");
    m.insert(Key::SliderNext, "Diapositiva siguiente");
    m.insert(Key::SliderGoTo, "Ir a la diapositiva");
    m.insert(Key::SliderPause, "Pausar presentación");
    m.insert(Key::SliderPlay, "Reproducir presentación");
    m.insert(Key::SliderVisit, "Visitar");
    m.insert(
        Key::SliderUnavailable,
        "No hay negocios destacados por ahora",
    );

    // Shortcut actions
    m.insert(Key::ActionToggleAutoplay, "Reproducir / pausar presentación");
    m.insert(Key::ActionFirstSlide, "Primera diapositiva");
    m.insert(Key::ActionLastSlide, "Última diapositiva");

    // Categories
    m.insert(Key::CategoriesTitle, "Categorías");
    m.insert(Key::CategoryRetail, "Minorista");
    m.insert(Key::CategoryRestaurants, "Restaurantes");
    m.insert(Key::CategoryAutomotive, "Automotriz");
    m.insert(Key::CategoryFashion, "Moda");
    m.insert(Key::CategoryHomeGoods, "Artículos para el Hogar");
    m.insert(Key::CategoryServices, "Servicios");
    m.insert(Key::CategoryAll, "Todas");

    // Shop listing
    m.insert(Key::ShopsTitle, "Negocios locales");
    m.insert(Key::ShopsEmpty, "Aún no hay negocios en esta categoría");
    m.insert(Key::PagePrevious, "Anterior");
    m.insert(Key::PageNext, "Siguiente");

    // Search
    m.insert(Key::SearchPlaceholder, "Buscar...");
    m.insert(Key::SearchNoResults, "Ningún negocio coincide con tu búsqueda");

    // About page
    m.insert(Key::AboutTitle, "Sobre Nosotros");
    m.insert(
        Key::AboutText,
        "Tu mercado local que conecta comunidades con negocios de confianza.",
    );
    m.insert(Key::ShortcutsTitle, "Atajos de teclado");

    // Contact page
    m.insert(Key::ContactTitle, "Contacto");
    m.insert(Key::ContactHours, "Horario de oficina");
    m.insert(Key::ContactLocation, "Ubicación");

    // Footer
    m.insert(Key::FooterRights, "Todos los derechos reservados");

    m
});

static SLIDE_CAPTIONS: Lazy<HashMap<&'static str, SlideCaption>> = Lazy::new(|| {
    HashMap::from([
        (
            "discover",
            SlideCaption {
                title: "Descubre Negocios Locales",
                description: "Apoya a tu comunidad comprando local.",
            },
        ),
        (
            "special",
            SlideCaption {
                title: "Ofertas Especiales",
                description: "Ofertas exclusivas de tus tiendas locales favoritas.",
            },
        ),
        (
            "community",
            SlideCaption {
                title: "Construyendo Comunidad",
                description: "Conectando vecinos con negocios locales de confianza.",
            },
        ),
        (
            "explore",
            SlideCaption {
                title: "Explora Nuevas Modas",
                description: "Redefiniendo Tendencias, Un Atuendo a la Vez.",
            },
        ),
        (
            "adventure",
            SlideCaption {
                title: "Disfruta un banquete este domingo",
                description: "Descuentos Deliciosos Te Esperan!",
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
