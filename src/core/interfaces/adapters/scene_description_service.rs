use async_trait::async_trait;

use crate::core::models::{AssistResult, ImagePayload};

#[async_trait]
pub trait SceneDescriptionService: Send + Sync {
    async fn describe_scene(
        &self,
        instruction_prompt: &str,
        payload: ImagePayload<'_>,
    ) -> AssistResult<String>;
}
