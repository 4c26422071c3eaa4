use async_trait::async_trait;
use image::DynamicImage;

use crate::core::models::AssistResult;

#[async_trait]
pub trait OcrService: Send + Sync {
    /// Returns the engine's text verbatim. An empty string means no text was found.
    async fn extract_text_from_image(&self, image: &DynamicImage) -> AssistResult<String>;
}
