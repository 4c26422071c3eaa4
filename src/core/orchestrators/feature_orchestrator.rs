use std::sync::Arc;

use uuid::Uuid;

use crate::core::interfaces::adapters::{OcrService, SceneDescriptionService, SpeechSynthesizer};
use crate::core::models::{AssistResult, FeatureChoice, RenderableResult, UploadedImage};
use crate::global_constants;

/// Routes one request to exactly one adapter chain. Holds no per-request state.
pub struct FeatureOrchestrator {
    ocr_service: Arc<dyn OcrService>,
    scene_description_service: Arc<dyn SceneDescriptionService>,
    speech_synthesizer: Arc<dyn SpeechSynthesizer>,
}

impl FeatureOrchestrator {
    pub fn build(
        ocr_service: Arc<dyn OcrService>,
        scene_description_service: Arc<dyn SceneDescriptionService>,
        speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            ocr_service,
            scene_description_service,
            speech_synthesizer,
        }
    }

    pub async fn handle_request(
        &self,
        image: &UploadedImage,
        feature: FeatureChoice,
    ) -> AssistResult<RenderableResult> {
        let request_id = Uuid::new_v4();
        log::info!(
            "[ORCHESTRATOR] Request {} started: {:?} on {}",
            request_id,
            feature,
            image.file_name
        );

        let result = match feature {
            FeatureChoice::DescribeScene => self.describe_scene(image).await,
            FeatureChoice::ExtractText => self.extract_text(image).await,
            FeatureChoice::ConvertToSpeech => self.convert_to_speech(image).await,
        };

        match &result {
            Ok(rendered) => log::info!(
                "[ORCHESTRATOR] Request {} finished: {}",
                request_id,
                rendered.heading()
            ),
            Err(e) => log::error!(
                "[ORCHESTRATOR] Request {} failed ({}): {}",
                request_id,
                e.kind_name(),
                e
            ),
        }

        result
    }

    async fn describe_scene(&self, image: &UploadedImage) -> AssistResult<RenderableResult> {
        let description = self
            .scene_description_service
            .describe_scene(global_constants::SCENE_DESCRIPTION_PROMPT, image.payload())
            .await?;

        Ok(RenderableResult::Description(description))
    }

    async fn extract_text(&self, image: &UploadedImage) -> AssistResult<RenderableResult> {
        let text = self
            .ocr_service
            .extract_text_from_image(&image.decoded_bitmap)
            .await?;

        Ok(RenderableResult::ExtractedText(text))
    }

    async fn convert_to_speech(&self, image: &UploadedImage) -> AssistResult<RenderableResult> {
        let text = self
            .ocr_service
            .extract_text_from_image(&image.decoded_bitmap)
            .await?;

        if text.trim().is_empty() {
            log::warn!("[ORCHESTRATOR] OCR returned no text, skipping synthesis");
            return Ok(RenderableResult::NoTextFound);
        }

        let artifact = self.speech_synthesizer.synthesize(&text).await?;
        Ok(RenderableResult::Audio(artifact))
    }
}
