//! Theme system for the marketplace front-end
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Typography
// ============================================================================

/// Bold font weight; SF Pro reads better at Semibold
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;

#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Medium font weight
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;

#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x111315);
    pub const HEADER: Color = color!(0x181b1f);
    pub const SURFACE: Color = color!(0x1f2328);
    pub const BORDER: Color = color!(0x2d3239);
    pub const TEXT_MUTED: Color = color!(0x8b929a);
    pub const TEXT_SECONDARY: Color = color!(0xb8bec5);
    pub const TEXT_PRIMARY: Color = color!(0xf5f5f5);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafaf7);
    pub const HEADER: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf0efe9);
    pub const BORDER: Color = color!(0xdedcd4);
    pub const TEXT_MUTED: Color = color!(0x7a776f);
    pub const TEXT_SECONDARY: Color = color!(0x545149);
    pub const TEXT_PRIMARY: Color = color!(0x1c1b18);
}

/// Marketplace accent (same for both modes)
pub const ACCENT: Color = color!(0xe07a1f);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0xf0913a);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get header bar color based on theme
pub fn header_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::HEADER
    } else {
        light::HEADER
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Top navigation bar
pub fn header(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(header_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero slider container
pub fn hero_banner(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x1d1a16)
    } else {
        color!(0xefe8dc)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card used for categories and contact blocks
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: if is_dark(theme) {
                Color::from_rgba(0.0, 0.0, 0.0, 0.4)
            } else {
                Color::from_rgba(0.0, 0.0, 0.0, 0.08)
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Key cap for the shortcut list
pub fn shortcut_key(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            Color::from_rgb(0.2, 0.2, 0.2)
        } else {
            Color::from_rgb(0.9, 0.9, 0.9)
        })),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Icon button (circular)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Slider arrow button (semi-transparent); faded while a transition runs
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.15))),
            text_color: Color::from_rgba(1.0, 1.0, 1.0, 0.4),
            ..base
        },
        _ => base,
    }
}

/// Glass icon button for the slider (circular, semi-transparent dark)
pub fn glass_icon_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.6))),
            ..base
        },
        _ => base,
    }
}

/// Slider "Visit" button (white pill with dark text)
pub fn banner_visit_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Color::BLACK,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(color!(0xe0e0e0))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(color!(0xcccccc))),
            ..base
        },
        _ => base,
    }
}

/// Indicator dot; the active dot is solid white
pub fn indicator_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let color = if active {
            Color::WHITE
        } else if matches!(status, button::Status::Hovered) {
            Color::from_rgba(1.0, 1.0, 1.0, 0.7)
        } else {
            indicator_inactive(theme)
        };
        button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 50.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Navigation menu item
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: if active { ACCENT } else { text_muted(theme) },
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                text_color: if active { ACCENT_HOVER } else { text_primary(theme) },
                ..base
            },
            _ => base,
        }
    }
}

/// Category filter tile; the selected tile is filled with the accent
pub fn category_tile(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active { ACCENT } else { surface(theme) })),
            text_color: if active { Color::WHITE } else { text_primary(theme) },
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: if active { ACCENT } else { border_color(theme) },
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered if !active => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                border: Border {
                    color: ACCENT,
                    ..base.border
                },
                ..base
            },
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(ACCENT_HOVER)),
                ..base
            },
            _ => base,
        }
    }
}

/// Shop card; the whole card is the link
pub fn shop_card(theme: &Theme, status: button::Status) -> button::Style {
    let card = card(theme);
    let base = button::Style {
        background: card.background,
        text_color: text_primary(theme),
        border: card.border,
        shadow: card.shadow,
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            border: Border {
                color: ACCENT,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Pagination button: prev/next and page numbers
pub fn page_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let base = button::Style {
            background: Some(Background::Color(if active { ACCENT } else { surface(theme) })),
            text_color: if active { Color::WHITE } else { text_primary(theme) },
            border: Border {
                radius: 8.0.into(),
                width: 1.0,
                color: if active { ACCENT } else { border_color(theme) },
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered if !active => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                ..base
            },
            button::Status::Disabled => button::Style {
                text_color: text_muted(theme),
                background: Some(Background::Color(background(theme))),
                ..base
            },
            _ => base,
        }
    }
}

/// Search result row in the header dropdown
pub fn search_result(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            text_color: ACCENT,
            ..base
        },
        _ => base,
    }
}

// ============================================================================
// Search Styles
// ============================================================================

/// Rounded pill around the header search input
pub fn search_field(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 20.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Borderless input; the surrounding pill draws the frame
pub fn search_input(theme: &Theme, _status: text_input::Status) -> text_input::Style {
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: Color { a: 0.35, ..ACCENT },
    }
}

// ============================================================================
// Pick List (Dropdown) Styles
// ============================================================================

/// Dropdown style - semi-transparent background with rounded corners
pub fn header_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    } else {
        match status {
            pick_list::Status::Active => Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            pick_list::Status::Hovered => Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            pick_list::Status::Opened { .. } => Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        }
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_muted(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

/// Dropdown menu style
pub fn header_pick_list_menu(theme: &Theme) -> iced::overlay::menu::Style {
    let (bg, selected_bg) = if is_dark(theme) {
        (
            Color::from_rgb(0.15, 0.15, 0.15),
            Color::from_rgba(1.0, 1.0, 1.0, 0.1),
        )
    } else {
        (
            Color::from_rgb(0.98, 0.98, 0.98),
            Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        )
    };

    iced::overlay::menu::Style {
        text_color: text_primary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        selected_text_color: text_primary(theme),
        selected_background: Background::Color(selected_bg),
        shadow: Shadow::default(),
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for main content
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

// ============================================================================
// Slider colors
// ============================================================================

/// Fill behind slides whose image is missing or letterboxed
pub fn slide_fill() -> Color {
    Color::from_rgb(0.2, 0.14, 0.08)
}

/// Slider placeholder background
pub fn banner_placeholder(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.14, 0.1, 0.06)
    } else {
        Color::from_rgb(0.95, 0.9, 0.82)
    }
}

/// Slider gradient bottom
pub fn banner_gradient_bottom() -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, 0.75)
}

/// Indicator dot inactive color
pub fn indicator_inactive(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.4)
    } else {
        Color::from_rgba(1.0, 1.0, 1.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_and_light_palettes_differ() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
        assert_ne!(background(&Theme::Dark), background(&Theme::Light));
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn selected_tile_uses_accent() {
        let selected = category_tile(true)(&Theme::Light, button::Status::Active);
        let idle = category_tile(false)(&Theme::Light, button::Status::Active);
        assert_eq!(selected.background, Some(Background::Color(ACCENT)));
        assert_ne!(idle.background, selected.background);
    }

    #[test]
    fn disabled_page_button_is_muted() {
        let disabled = page_button(false)(&Theme::Dark, button::Status::Disabled);
        assert_eq!(disabled.text_color, text_muted(&Theme::Dark));
    }

    #[test]
    fn disabled_arrow_is_fainter() {
        let active = carousel_nav_button(&Theme::Dark, button::Status::Active);
        let disabled = carousel_nav_button(&Theme::Dark, button::Status::Disabled);
        assert!(disabled.text_color.a < active.text_color.a);
    }
}
