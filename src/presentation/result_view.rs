use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Color, Element, Length};

use crate::core::models::RenderableResult;
use crate::global_constants;
use crate::presentation::app_theme;

fn colored_text<'a>(content: impl text::IntoFragment<'a>, color: Color) -> text::Text<'a> {
    text(content)
        .size(15)
        .style(move |_theme: &iced::Theme| text::Style { color: Some(color) })
}

pub fn render_result<'a, Message: Clone + 'a>(
    result: &'a RenderableResult,
    on_play: Message,
) -> Element<'a, Message> {
    let heading = text(result.heading()).size(22);

    let body: Element<'a, Message> = match result {
        RenderableResult::Description(description) => text(description.as_str()).size(16).into(),
        RenderableResult::ExtractedText(extracted) => {
            let content = if extracted.is_empty() {
                colored_text("(no text detected)", app_theme::MUTED_TEXT_COLOR)
            } else {
                text(extracted.as_str()).size(15)
            };
            container(scrollable(content).height(Length::Fixed(150.0)))
                .padding(10)
                .width(Length::Fill)
                .into()
        }
        RenderableResult::Audio(artifact) => {
            let play_btn = button(text("▶ Play"))
                .padding([8, 20])
                .style(app_theme::primary_button_style)
                .on_press(on_play);

            column![
                colored_text(
                    global_constants::USER_MESSAGE_AUDIO_READY,
                    app_theme::SUCCESS_COLOR
                ),
                row![
                    play_btn,
                    colored_text(
                        format!(
                            "{} ({})",
                            artifact.file_path().display(),
                            artifact.format()
                        ),
                        app_theme::MUTED_TEXT_COLOR
                    ),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            ]
            .spacing(10)
            .into()
        }
        RenderableResult::NoTextFound => colored_text(
            format!("⚠ {}", global_constants::USER_MESSAGE_NO_TEXT_FOUND),
            app_theme::WARNING_COLOR,
        )
        .into(),
    };

    column![heading, body].spacing(12).width(Length::Fill).into()
}

pub fn render_error<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    colored_text(format!("✖ {}", message), app_theme::ERROR_COLOR).into()
}
