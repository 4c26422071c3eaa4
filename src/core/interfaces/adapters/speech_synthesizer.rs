use async_trait::async_trait;

use crate::core::models::{AssistResult, AudioArtifact};

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// `text` must be non-blank; callers branch on blank OCR output first.
    async fn synthesize(&self, text: &str) -> AssistResult<AudioArtifact>;
}
