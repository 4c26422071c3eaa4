use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const TITLE_COLOR: Color = Color::from_rgb(0.122, 0.467, 0.706);
pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.55, 0.55, 0.55);
pub const SUCCESS_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);
pub const WARNING_COLOR: Color = Color::from_rgb(1.0, 0.7, 0.0);
pub const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.3, 0.3);
pub const BUSY_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.2);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.07, 0.09),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: Color::from_rgb(0.122, 0.467, 0.706),
                success: SUCCESS_COLOR,
                warning: WARNING_COLOR,
                danger: ERROR_COLOR,
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.976, 0.976, 0.976),
                text: Color::from_rgb(0.2, 0.2, 0.2),
                primary: Color::from_rgb(0.122, 0.467, 0.706),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
            },
        ),
    }
}

fn solid_button(base: Color, hovered: Color, pressed: Color, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Active => (base, Color::WHITE),
        button::Status::Hovered => (hovered, Color::WHITE),
        button::Status::Pressed => (pressed, Color::WHITE),
        button::Status::Disabled => (Color::from_rgb(0.3, 0.3, 0.3), Color::from_rgb(0.5, 0.5, 0.5)),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        ..button::Style::default()
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(
        Color::from_rgb(0.122, 0.467, 0.706),
        Color::from_rgb(0.173, 0.557, 0.816),
        Color::from_rgb(0.090, 0.365, 0.553),
        status,
    )
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button(
        Color::from_rgb(0.35, 0.35, 0.38),
        Color::from_rgb(0.45, 0.45, 0.48),
        Color::from_rgb(0.28, 0.28, 0.30),
        status,
    )
}

pub fn card_style(mode: ThemeMode) -> container::Style {
    let (background, border) = match mode {
        ThemeMode::Dark => (Color::from_rgb(0.13, 0.13, 0.16), Color::from_rgb(0.22, 0.22, 0.26)),
        ThemeMode::Light => (Color::from_rgb(1.0, 1.0, 1.0), Color::from_rgb(0.88, 0.88, 0.88)),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 6.0,
        },
        ..container::Style::default()
    }
}
