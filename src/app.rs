use std::sync::Arc;

use iced::{Element, Task};

use crate::adapters::{
    GeminiSceneDescriptionService, GoogleTranslateSpeechSynthesizer, TesseractOcrService,
};
use crate::core::models::AppConfig;
use crate::core::orchestrators::app_orchestrator::{AppOrchestrator, OrchestratorMessage};
use crate::core::orchestrators::feature_orchestrator::FeatureOrchestrator;

/// Adapters wired once at startup and shared with every window boot.
#[derive(Clone)]
pub struct AppServices {
    config: AppConfig,
    feature_orchestrator: Arc<FeatureOrchestrator>,
    ocr_engine: Arc<TesseractOcrService>,
    initial_image_path: Option<String>,
}

impl AppServices {
    pub fn initialize(config: AppConfig, initial_image_path: Option<String>) -> anyhow::Result<Self> {
        log::info!("[APP] Wiring adapters");

        let ocr_engine = Arc::new(TesseractOcrService::build(&config));
        let scene_description_service = Arc::new(GeminiSceneDescriptionService::build(&config)?);
        let speech_synthesizer = Arc::new(GoogleTranslateSpeechSynthesizer::build(&config)?);

        let feature_orchestrator = Arc::new(FeatureOrchestrator::build(
            ocr_engine.clone(),
            scene_description_service,
            speech_synthesizer,
        ));

        Ok(Self {
            config,
            feature_orchestrator,
            ocr_engine,
            initial_image_path,
        })
    }
}

pub struct AssistApp {
    orchestrator: AppOrchestrator,
}

impl AssistApp {
    pub fn build(services: AppServices) -> (Self, Task<OrchestratorMessage>) {
        log::info!("[APP] Initializing application");

        let orchestrator = AppOrchestrator::build(
            Arc::clone(&services.feature_orchestrator),
            services.config.theme_mode,
        );

        let ocr_engine = Arc::clone(&services.ocr_engine);
        let mut tasks = vec![Task::future(async move {
            OrchestratorMessage::OcrEngineChecked(ocr_engine.verify_engine().await)
        })];

        if let Some(path) = services.initial_image_path {
            log::info!("[APP] Loading image passed on the command line: {}", path);
            tasks.push(Task::done(OrchestratorMessage::ImagePathChanged(path)));
            tasks.push(Task::done(OrchestratorMessage::LoadImage));
        }

        (Self { orchestrator }, Task::batch(tasks))
    }

    pub fn handle_update(&mut self, message: OrchestratorMessage) -> Task<OrchestratorMessage> {
        self.orchestrator.update(message)
    }

    pub fn render_view(&self) -> Element<'_, OrchestratorMessage> {
        self.orchestrator.render_view()
    }
}
