use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{button, column, container, radio, row, text, text_input};
use iced::{Alignment, Background, Element, Length, Task};

use crate::core::models::{AssistError, FeatureChoice, RenderableResult, ThemeMode, UploadedImage};
use crate::core::orchestrators::feature_orchestrator::FeatureOrchestrator;
use crate::global_constants;
use crate::presentation::{app_theme, result_view};

const STATUS_READY: &str = "Ready - load an image to begin";
const STATUS_LOADING_IMAGE: &str = "Loading image...";

#[derive(Debug, Clone)]
pub enum OrchestratorMessage {
    ImagePathChanged(String),
    LoadImage,
    ImageLoaded(Result<Arc<UploadedImage>, AssistError>),
    FeatureSelected(FeatureChoice),
    RunSelectedFeature,
    RequestCompleted(FeatureChoice, Result<RenderableResult, AssistError>),
    PlayAudio,
    OcrEngineChecked(Result<String, AssistError>),
}

/// Window state for one interactive session. At most one request is in flight.
pub struct AppOrchestrator {
    feature_orchestrator: Arc<FeatureOrchestrator>,
    theme_mode: ThemeMode,
    status: String,
    ocr_engine_status: Option<Result<String, String>>,
    image_path_input: String,
    image: Option<Arc<UploadedImage>>,
    image_handle: Option<iced::widget::image::Handle>,
    selected_feature: FeatureChoice,
    busy_message: Option<&'static str>,
    last_result: Option<RenderableResult>,
    last_error: Option<String>,
}

impl AppOrchestrator {
    pub fn build(feature_orchestrator: Arc<FeatureOrchestrator>, theme_mode: ThemeMode) -> Self {
        Self {
            feature_orchestrator,
            theme_mode,
            status: STATUS_READY.to_string(),
            ocr_engine_status: None,
            image_path_input: String::new(),
            image: None,
            image_handle: None,
            selected_feature: FeatureChoice::default(),
            busy_message: None,
            last_result: None,
            last_error: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy_message.is_some()
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        log::debug!("[ORCHESTRATOR] Received message: {}", message_name(&message));

        match message {
            OrchestratorMessage::ImagePathChanged(path) => {
                self.image_path_input = path;
                Task::none()
            }
            OrchestratorMessage::LoadImage => self.handle_load_image(),
            OrchestratorMessage::ImageLoaded(result) => self.handle_image_loaded(result),
            OrchestratorMessage::FeatureSelected(feature) => self.handle_feature_selected(feature),
            OrchestratorMessage::RunSelectedFeature => self.start_request(),
            OrchestratorMessage::RequestCompleted(feature, result) => {
                self.handle_request_completed(feature, result);
                Task::none()
            }
            OrchestratorMessage::PlayAudio => {
                self.handle_play_audio();
                Task::none()
            }
            OrchestratorMessage::OcrEngineChecked(result) => {
                self.handle_ocr_engine_checked(result);
                Task::none()
            }
        }
    }

    fn handle_load_image(&mut self) -> Task<OrchestratorMessage> {
        if self.is_busy() {
            log::warn!("[ORCHESTRATOR] Ignoring image load while a request is running");
            return Task::none();
        }

        let trimmed = self.image_path_input.trim();
        if trimmed.is_empty() {
            self.status = "Enter the path of a JPG, JPEG or PNG image".to_string();
            return Task::none();
        }

        let path = PathBuf::from(trimmed);
        log::info!("[ORCHESTRATOR] Loading image from {:?}", path);
        self.busy_message = Some(STATUS_LOADING_IMAGE);
        self.status = STATUS_LOADING_IMAGE.to_string();

        Task::future(async move {
            let result = UploadedImage::ingest_file(&path).await.map(Arc::new);
            OrchestratorMessage::ImageLoaded(result)
        })
    }

    fn handle_image_loaded(
        &mut self,
        result: Result<Arc<UploadedImage>, AssistError>,
    ) -> Task<OrchestratorMessage> {
        self.busy_message = None;
        self.last_result = None;

        match result {
            Ok(image) => {
                log::info!("[ORCHESTRATOR] Image ready: {:?}", image);
                self.image_handle = Some(iced::widget::image::Handle::from_bytes(
                    image.raw_bytes.clone(),
                ));
                self.image = Some(image);
                self.last_error = None;
                self.start_request()
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] Image load failed: {}", e);
                self.image = None;
                self.image_handle = None;
                self.status = "Image could not be loaded".to_string();
                self.last_error = Some(e.to_string());
                Task::none()
            }
        }
    }

    fn handle_feature_selected(&mut self, feature: FeatureChoice) -> Task<OrchestratorMessage> {
        if self.is_busy() {
            log::warn!(
                "[ORCHESTRATOR] Ignoring switch to {:?} while a request is running",
                feature
            );
            return Task::none();
        }

        self.selected_feature = feature;
        if self.image.is_some() {
            return self.start_request();
        }
        Task::none()
    }

    fn start_request(&mut self) -> Task<OrchestratorMessage> {
        if self.is_busy() {
            log::warn!("[ORCHESTRATOR] Request already in flight, ignoring");
            return Task::none();
        }

        let Some(image) = self.image.clone() else {
            self.status = "Load an image first".to_string();
            return Task::none();
        };

        let feature = self.selected_feature;
        let busy_message = feature.busy_message();
        self.busy_message = Some(busy_message);
        self.status = busy_message.to_string();
        // Dropping the previous result releases its audio file.
        self.last_result = None;
        self.last_error = None;

        let feature_orchestrator = Arc::clone(&self.feature_orchestrator);

        Task::future(async move {
            let result = feature_orchestrator.handle_request(&image, feature).await;
            OrchestratorMessage::RequestCompleted(feature, result)
        })
    }

    fn handle_request_completed(
        &mut self,
        feature: FeatureChoice,
        result: Result<RenderableResult, AssistError>,
    ) {
        self.busy_message = None;

        match result {
            Ok(rendered) => {
                self.status = if rendered.is_warning() {
                    global_constants::USER_MESSAGE_NO_TEXT_FOUND.to_string()
                } else {
                    format!("Ready - {} complete", feature.display_label())
                };
                self.last_result = Some(rendered);
                self.last_error = None;
            }
            Err(e) => {
                self.status = format!("Failed - {}", feature.display_label());
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn handle_play_audio(&mut self) {
        let Some(RenderableResult::Audio(artifact)) = &self.last_result else {
            log::warn!("[ORCHESTRATOR] Play requested without audio");
            return;
        };

        log::info!("[ORCHESTRATOR] Opening audio {:?}", artifact.file_path());
        if let Err(e) = open::that(artifact.file_path()) {
            log::error!("[ORCHESTRATOR] Failed to open audio player: {}", e);
            self.status = format!("Could not open audio player: {}", e);
        }
    }

    fn handle_ocr_engine_checked(&mut self, result: Result<String, AssistError>) {
        match result {
            Ok(version) => {
                log::info!("[ORCHESTRATOR] OCR engine ready: {}", version);
                self.ocr_engine_status = Some(Ok(version));
            }
            Err(e) => {
                log::error!("[ORCHESTRATOR] OCR engine unavailable: {}", e);
                self.ocr_engine_status = Some(Err(e.to_string()));
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        let theme = app_theme::get_theme(&self.theme_mode);

        let title = text(global_constants::APPLICATION_TITLE)
            .size(36)
            .style(|_theme: &iced::Theme| text::Style {
                color: Some(app_theme::TITLE_COLOR),
            });
        let subtitle = text(global_constants::APPLICATION_SUBTITLE)
            .size(16)
            .style(|_theme: &iced::Theme| text::Style {
                color: Some(app_theme::MUTED_TEXT_COLOR),
            });
        let header_section = column![title, subtitle]
            .spacing(6)
            .align_x(Alignment::Center)
            .width(Length::Fill);

        let mut content = column![
            header_section,
            self.render_upload_section(),
            self.render_status_indicator(),
        ]
        .spacing(20)
        .padding(30)
        .width(Length::Fill);

        if self.image.is_some() {
            content = content.push(self.render_feature_section());
        }

        if let Some(error) = &self.last_error {
            content = content.push(self.card(result_view::render_error(error)));
        } else if let Some(result) = &self.last_result {
            content = content.push(
                self.card(result_view::render_result(result, OrchestratorMessage::PlayAudio)),
            );
        }

        container(iced::widget::scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }

    fn card<'a>(&self, body: Element<'a, OrchestratorMessage>) -> Element<'a, OrchestratorMessage> {
        let mode = self.theme_mode;
        container(body)
            .padding(20)
            .width(Length::Fill)
            .style(move |_theme| app_theme::card_style(mode))
            .into()
    }

    fn render_upload_section(&self) -> Element<'_, OrchestratorMessage> {
        let idle = !self.is_busy();

        let path_input = text_input(
            "Path to an image (JPG, JPEG, PNG)",
            &self.image_path_input,
        )
        .on_input(OrchestratorMessage::ImagePathChanged)
        .on_submit(OrchestratorMessage::LoadImage)
        .padding(10)
        .width(Length::Fill);

        let load_btn = button(text("Load image"))
            .padding([10, 24])
            .style(app_theme::primary_button_style)
            .on_press_maybe(idle.then_some(OrchestratorMessage::LoadImage));

        let mut section = column![
            text("1. Upload an Image").size(22),
            row![path_input, load_btn]
                .spacing(10)
                .align_y(Alignment::Center),
        ]
        .spacing(12);

        if let (Some(handle), Some(image)) = (&self.image_handle, &self.image) {
            section = section.push(
                iced::widget::image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fixed(260.0)),
            );
            section = section.push(
                text(format!(
                    "Uploaded Image: {} ({}x{}, {})",
                    image.file_name,
                    image.decoded_bitmap.width(),
                    image.decoded_bitmap.height(),
                    image.mime_type
                ))
                .size(13)
                .style(|_theme: &iced::Theme| text::Style {
                    color: Some(app_theme::MUTED_TEXT_COLOR),
                }),
            );
        }

        self.card(section.into())
    }

    fn render_feature_section(&self) -> Element<'_, OrchestratorMessage> {
        let idle = !self.is_busy();

        let options = FeatureChoice::ALL.iter().fold(
            column![text("Select one of the following features:").size(15)].spacing(10),
            |options, feature| {
                options.push(radio(
                    feature.display_label(),
                    *feature,
                    Some(self.selected_feature),
                    OrchestratorMessage::FeatureSelected,
                ))
            },
        );

        let description = text(self.selected_feature.description())
            .size(14)
            .style(|_theme: &iced::Theme| text::Style {
                color: Some(app_theme::MUTED_TEXT_COLOR),
            });

        let run_again_btn = button(text("Run again"))
            .padding([8, 20])
            .style(app_theme::secondary_button_style)
            .on_press_maybe(idle.then_some(OrchestratorMessage::RunSelectedFeature));

        let section = column![
            text("2. Choose a Feature").size(22),
            options,
            description,
            run_again_btn,
        ]
        .spacing(12);

        self.card(section.into())
    }

    fn render_status_indicator(&self) -> Element<'_, OrchestratorMessage> {
        let (status_color, status_icon) = if self.is_busy() {
            (app_theme::BUSY_COLOR, "○")
        } else if self.last_error.is_some() {
            (app_theme::ERROR_COLOR, "●")
        } else if matches!(self.last_result, Some(RenderableResult::NoTextFound)) {
            (app_theme::WARNING_COLOR, "●")
        } else {
            (app_theme::SUCCESS_COLOR, "●")
        };

        let status_row = row![
            text(status_icon)
                .size(12)
                .style(move |_theme: &iced::Theme| text::Style {
                    color: Some(status_color),
                }),
            text(&self.status).size(13),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let engine_line: Element<'_, OrchestratorMessage> = match &self.ocr_engine_status {
            Some(Ok(version)) => text(format!("OCR engine: {}", version))
                .size(12)
                .style(|_theme: &iced::Theme| text::Style {
                    color: Some(app_theme::MUTED_TEXT_COLOR),
                })
                .into(),
            Some(Err(message)) => text(format!("OCR engine unavailable: {}", message))
                .size(12)
                .style(|_theme: &iced::Theme| text::Style {
                    color: Some(app_theme::ERROR_COLOR),
                })
                .into(),
            None => text("Checking OCR engine...").size(12).into(),
        };

        column![status_row, engine_line].spacing(4).into()
    }
}

fn message_name(message: &OrchestratorMessage) -> &'static str {
    match message {
        OrchestratorMessage::ImagePathChanged(_) => "ImagePathChanged",
        OrchestratorMessage::LoadImage => "LoadImage",
        OrchestratorMessage::ImageLoaded(_) => "ImageLoaded",
        OrchestratorMessage::FeatureSelected(_) => "FeatureSelected",
        OrchestratorMessage::RunSelectedFeature => "RunSelectedFeature",
        OrchestratorMessage::RequestCompleted(_, _) => "RequestCompleted",
        OrchestratorMessage::PlayAudio => "PlayAudio",
        OrchestratorMessage::OcrEngineChecked(_) => "OcrEngineChecked",
    }
}
