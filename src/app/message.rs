//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{Action, CarouselInput, ListingInput};
use crate::i18n::Language;
use crate::ui::components::NavItem;
use crate::utils::CachedImage;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,

    // ============ Navigation ============
    /// Header navigation item selected
    Navigate(NavItem),
    /// "Visit" pressed on a slide; carries the business id
    VisitBusiness(u64),

    // ============ Slider ============
    /// Input forwarded to the mounted carousel
    Slider(CarouselInput),
    /// A scheduled carousel wake-up fired; carries the instant it was set for
    SliderDeadline(iced::time::Instant),
    /// Cursor moved over the slide area
    SliderPointerMoved(iced::Point),
    /// Left button pressed on the slide area
    SliderPointerPressed,
    /// Left button released over the slide area
    SliderPointerReleased,
    /// Cursor left the slide area; any drag is dropped, not evaluated
    SliderPointerLeft,
    /// A slide image finished downloading
    SlideImageLoaded(u64, Result<CachedImage, String>),
    /// Frame tick while the slide animation runs
    AnimationTick,

    // ============ Listing ============
    /// Category filter, paging or rotation tick
    Listing(ListingInput),
    /// Header search text edited
    SearchChanged(String),
    /// Enter pressed in the search box
    SearchSubmitted,
    SearchCleared,

    // ============ Settings ============
    ToggleDarkMode,
    LanguageChanged(Language),
    /// Persist settings to disk
    SaveSettings,

    // ============ Keyboard ============
    /// Key pressed (for keybindings)
    KeyPressed(Key, Modifiers),
    /// Execute a keybinding action
    ExecuteAction(Action),

    // ============ Window ============
    /// Main window resized; a zero size means minimised
    WindowResized(iced::Size),
    /// Main window closed
    WindowClosed,
}

// Manual Debug implementation keeps high-frequency messages short in traces
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal (no data)
            Self::AnimationTick => simple!("AnimationTick"),
            Self::SliderDeadline(_) => simple!("SliderDeadline"),
            Self::SliderPointerMoved(_) => simple!("SliderPointerMoved"),
            Self::Noop => simple!("Noop"),

            Self::Navigate(item) => simple!("Navigate", "{:?}", item),
            Self::VisitBusiness(id) => simple!("VisitBusiness", "{}", id),
            Self::Slider(input) => simple!("Slider", "{:?}", input),
            Self::SliderPointerPressed => simple!("SliderPointerPressed"),
            Self::SliderPointerReleased => simple!("SliderPointerReleased"),
            Self::SliderPointerLeft => simple!("SliderPointerLeft"),
            Self::SlideImageLoaded(id, result) => {
                simple!("SlideImageLoaded", "id={}, ok={}", id, result.is_ok())
            }
            Self::Listing(input) => simple!("Listing", "{:?}", input),
            Self::SearchChanged(query) => simple!("SearchChanged", "{:?}", query),
            Self::SearchSubmitted => simple!("SearchSubmitted"),
            Self::SearchCleared => simple!("SearchCleared"),
            Self::ToggleDarkMode => simple!("ToggleDarkMode"),
            Self::LanguageChanged(lang) => simple!("LanguageChanged", "{}", lang.code()),
            Self::SaveSettings => simple!("SaveSettings"),
            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::ExecuteAction(action) => simple!("ExecuteAction", "{:?}", action),
            Self::WindowResized(size) => {
                simple!("WindowResized", "{}x{}", size.width, size.height)
            }
            Self::WindowClosed => simple!("WindowClosed"),
        }
    }
}
