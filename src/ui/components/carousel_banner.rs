//! Hero slider component for the home page
//!
//! Draws the mounted carousel: the sliding slide images on a canvas, the
//! caption and controls on overlays, and pointer drags fed back as gestures.

use iced::animation::Animation;
use iced::widget::{
    Space, button, canvas, column, container, mouse_area, row, svg, text, tooltip,
};
use iced::{
    Alignment, Background, Color, Element, Fill, Padding, Point, Rectangle, Renderer, Size, Theme,
    mouse,
};
use std::collections::HashMap;

use crate::app::Message;
use crate::features::carousel::{Carousel, CarouselInput, Direction};
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};
use crate::utils::CachedImage;

const BANNER_HEIGHT: f32 = 360.0;
const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_ACTIVE_WIDTH: f32 = 24.0;
const INDICATOR_SPACING: f32 = 8.0;
/// Fraction of the pointer drag the slide follows
const DRAG_FOLLOW: f32 = 0.5;

struct BannerDrawer<'a> {
    current_image: Option<&'a CachedImage>,
    last_image: Option<&'a CachedImage>,
    progress: f32,
    direction: Direction,
    drag_offset: f32,
}

impl<'a, Message> canvas::Program<Message> for BannerDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.progress >= 1.0 {
            draw_slide(&mut frame, bounds, self.current_image, self.drag_offset);
        } else {
            let width = bounds.width;
            // Ease out cubic
            let eased = 1.0 - (1.0 - self.progress).powi(3);
            let sign = self.direction.sign() as f32;

            // Forward: last leaves to the left, current enters from the right
            let last_offset = -sign * width * eased;
            let current_offset = sign * width * (1.0 - eased);

            draw_slide(&mut frame, bounds, self.last_image, last_offset);
            draw_slide(&mut frame, bounds, self.current_image, current_offset);
        }

        vec![frame.into_geometry()]
    }
}

/// Draw one slide image scaled to cover the bounds, or a tinted fill
fn draw_slide(
    frame: &mut canvas::Frame,
    bounds: Rectangle,
    image: Option<&CachedImage>,
    offset_x: f32,
) {
    let target = Rectangle::new(Point::new(offset_x, 0.0), bounds.size());
    frame.fill_rectangle(target.position(), target.size(), theme::slide_fill());

    let Some(image) = image else {
        return;
    };
    let Some(dest) = cover_rect(image.width, image.height, target) else {
        return;
    };

    frame.with_clip(target, |frame| {
        // Clip origin becomes the local origin
        let local = Rectangle::new(
            Point::new(dest.x - target.x, dest.y - target.y),
            dest.size(),
        );
        frame.draw_image(local, canvas::Image::new(&image.path));
    });
}

/// Scale an image to cover `target`, centred; `None` for empty images
fn cover_rect(width: u32, height: u32, target: Rectangle) -> Option<Rectangle> {
    let (img_w, img_h) = (width as f32, height as f32);
    if img_w <= 0.0 || img_h <= 0.0 {
        return None;
    }

    let scale = (target.width / img_w).max(target.height / img_h);
    let (w, h) = (img_w * scale, img_h * scale);

    Some(Rectangle::new(
        Point::new(
            target.x + (target.width - w) / 2.0,
            target.y + (target.height - h) / 2.0,
        ),
        Size::new(w, h),
    ))
}

fn icon<'a>(source: &'static str, size: f32, color: Color) -> svg::Svg<'a> {
    svg(svg::Handle::from_memory(source.as_bytes()))
        .width(size)
        .height(size)
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Build the hero slider
pub fn view<'a>(
    slider: Option<&'a Carousel>,
    slide_images: &'a HashMap<u64, CachedImage>,
    animation: &'a Animation<bool>,
    pointer_x: f32,
    locale: Locale,
) -> Element<'a, Message> {
    let Some(slider) = slider else {
        return view_placeholder(locale);
    };

    let now = iced::time::Instant::now();
    let progress = animation.interpolate(0.0_f32, 1.0_f32, now);

    let active = slider.active_slide();
    let previous = &slider.slides()[slider.previous_index()];
    let drag_offset = slider
        .gesture_origin()
        .map(|origin| (pointer_x - origin) * DRAG_FOLLOW)
        .unwrap_or(0.0);

    let banner_content: Element<'_, Message> = canvas(BannerDrawer {
        current_image: slide_images.get(&active.id),
        last_image: slide_images.get(&previous.id),
        progress,
        direction: slider.direction(),
        drag_offset,
    })
    .width(Fill)
    .height(BANNER_HEIGHT)
    .into();

    // Arrows and dots are inert while the transition lock is held
    let idle = !slider.is_transitioning();

    let left_arrow = tooltip(
        button(icon(crate::ui::icons::CHEVRON_LEFT, 24.0, Color::WHITE))
            .padding(12)
            .style(theme::carousel_nav_button)
            .on_press_maybe(navigation_press(idle, CarouselInput::Previous)),
        text(locale.get(Key::SliderPrevious)).size(12),
        tooltip::Position::Right,
    );

    let right_arrow = tooltip(
        button(icon(crate::ui::icons::CHEVRON_RIGHT, 24.0, Color::WHITE))
            .padding(12)
            .style(theme::carousel_nav_button)
            .on_press_maybe(navigation_press(idle, CarouselInput::Next)),
        text(locale.get(Key::SliderNext)).size(12),
        tooltip::Position::Left,
    );

    // Caption
    let (title, description) = match locale.slide_caption(&active.display_key) {
        Some(caption) => (caption.title.to_string(), caption.description.to_string()),
        None => (active.display_key.clone(), String::new()),
    };

    let caption = column![
        text(title).size(34).color(Color::WHITE).font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        }),
        text(description)
            .size(16)
            .color(Color::from_rgba(1.0, 1.0, 1.0, 0.85)),
    ]
    .spacing(8);

    // Visit and play/pause
    let visit_button = button(
        row![
            text(locale.get(Key::SliderVisit))
                .size(14)
                .color(Color::BLACK)
                .font(iced::Font {
                    weight: BOLD_WEIGHT,
                    ..Default::default()
                }),
            icon(crate::ui::icons::ARROW_UP_RIGHT, 16.0, Color::BLACK),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(Padding::new(8.0).left(20).right(20))
    .height(40)
    .style(theme::banner_visit_button)
    .on_press(Message::VisitBusiness(active.id));

    let (autoplay_icon, autoplay_label) = if slider.is_auto_advancing() {
        (crate::ui::icons::PAUSE, locale.get(Key::SliderPause))
    } else {
        (crate::ui::icons::PLAY, locale.get(Key::SliderPlay))
    };

    let autoplay_button = tooltip(
        button(
            container(icon(autoplay_icon, 18.0, Color::WHITE))
                .center_x(40)
                .center_y(40),
        )
        .padding(0)
        .width(40)
        .height(40)
        .style(theme::glass_icon_button)
        .on_press(Message::Slider(CarouselInput::ToggleAutoAdvance)),
        text(autoplay_label).size(12),
        tooltip::Position::Top,
    );

    // Page indicators (dots)
    let active_index = slider.active_index();
    let indicators: Element<'_, Message> = row(slider
        .slides()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let is_active = i == active_index;
            let width = if is_active {
                INDICATOR_ACTIVE_WIDTH
            } else {
                INDICATOR_SIZE
            };
            tooltip(
                button(Space::new().width(width).height(INDICATOR_SIZE))
                    .padding(0)
                    .style(theme::indicator_dot(is_active))
                    .on_press_maybe(navigation_press(idle, CarouselInput::JumpTo(i))),
                text(format!("{} {}", locale.get(Key::SliderGoTo), i + 1)).size(12),
                tooltip::Position::Top,
            )
            .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center)
    .into();

    let buttons_row = row![visit_button, Space::new().width(12), autoplay_button]
        .align_y(Alignment::Center);

    let bottom_row = row![buttons_row, Space::new().width(Fill), indicators]
        .align_y(Alignment::Center);

    // Gradient overlay with caption and controls
    let gradient_overlay = container(
        column![Space::new().height(Fill), caption, Space::new().height(20), bottom_row]
            .padding(Padding::new(24.0).left(72.0).right(72.0).bottom(28.0)),
    )
    .width(Fill)
    .height(Fill)
    .style(|_theme| container::Style {
        background: Some(Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.4, Color::TRANSPARENT)
                .add_stop(1.0, theme::banner_gradient_bottom()),
        ))),
        ..Default::default()
    });

    // Navigation overlay (arrows)
    let nav_overlay = row![
        container(left_arrow)
            .height(BANNER_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(12.0)),
        Space::new().width(Fill),
        container(right_arrow)
            .height(BANNER_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(12.0)),
    ]
    .width(Fill)
    .height(BANNER_HEIGHT);

    let stacked = iced::widget::stack![banner_content, gradient_overlay, nav_overlay]
        .width(Fill)
        .height(BANNER_HEIGHT);

    // Presses captured by the buttons above never reach the drag handler
    let draggable = mouse_area(stacked)
        .on_move(Message::SliderPointerMoved)
        .on_press(Message::SliderPointerPressed)
        .on_release(Message::SliderPointerReleased)
        .on_exit(Message::SliderPointerLeft)
        .interaction(mouse::Interaction::Grab);

    container(draggable)
        .width(Fill)
        .height(BANNER_HEIGHT)
        .clip(true)
        .style(theme::hero_banner)
        .into()
}

/// Press message for a navigation control; `None` disables it
fn navigation_press(idle: bool, input: CarouselInput) -> Option<Message> {
    idle.then_some(Message::Slider(input))
}

/// Placeholder when no carousel is mounted
fn view_placeholder(locale: Locale) -> Element<'static, Message> {
    let illustration = container(Space::new().width(Fill).height(BANNER_HEIGHT))
        .width(Fill)
        .height(BANNER_HEIGHT)
        .style(move |theme| container::Style {
            background: Some(Background::Color(theme::banner_placeholder(theme))),
            ..Default::default()
        });

    let overlay_content = column![
        text(locale.get(Key::AppName))
            .size(36)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
        text(locale.get(Key::SliderUnavailable))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
    ]
    .spacing(8)
    .padding(Padding::new(32.0));

    container(iced::widget::stack![
        illustration,
        container(overlay_content)
            .width(Fill)
            .height(BANNER_HEIGHT)
            .align_y(iced::alignment::Vertical::Bottom)
            .align_x(iced::alignment::Horizontal::Left),
    ])
    .width(Fill)
    .height(BANNER_HEIGHT)
    .style(theme::hero_banner)
    .into()
}
