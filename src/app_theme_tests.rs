#[cfg(test)]
mod tests {
    use crate::core::models::ThemeMode;
    use crate::presentation::app_theme::*;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.07, 0.07, 0.09));
        assert_eq!(palette.danger, ERROR_COLOR);
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.976, 0.976, 0.976));
        assert_eq!(palette.text, Color::from_rgb(0.2, 0.2, 0.2));
    }

    #[test]
    fn test_primary_button_style_active_is_blue_with_white_text() {
        let style = primary_button_style(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.122, 0.467, 0.706));
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_hovered_differs_from_active() {
        let active = primary_button_style(&Theme::Dark, button::Status::Active);
        let hovered = primary_button_style(&Theme::Dark, button::Status::Hovered);

        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn test_disabled_buttons_share_grey_background() {
        let primary = primary_button_style(&Theme::Dark, button::Status::Disabled);
        let secondary = secondary_button_style(&Theme::Light, button::Status::Disabled);

        assert_eq!(primary.background, secondary.background);
        assert_eq!(primary.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_card_style_has_rounded_border() {
        let style = card_style(ThemeMode::Light);

        assert_eq!(style.border.width, 1.0);
        assert!(style.background.is_some());
    }
}
