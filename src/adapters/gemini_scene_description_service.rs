use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::interfaces::adapters::SceneDescriptionService;
use crate::core::models::{AppConfig, AssistError, AssistResult, ImagePayload};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

pub struct GeminiSceneDescriptionService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiSceneDescriptionService {
    pub fn build(config: &AppConfig) -> Result<Self> {
        log::info!(
            "[GEMINI] Initializing scene description service with model {}",
            config.gemini_model
        );

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to create HTTP client for Gemini")?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request_body<'a>(
        instruction_prompt: &'a str,
        payload: ImagePayload<'a>,
    ) -> GenerateContentRequest<'a> {
        let encoded_image = base64::engine::general_purpose::STANDARD.encode(payload.raw_bytes);

        GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::Text {
                        text: instruction_prompt,
                    },
                    RequestPart::InlineData {
                        inline_data: InlineData {
                            mime_type: payload.mime_type,
                            data: encoded_image,
                        },
                    },
                ],
            }],
        }
    }

    fn extract_description(response: GenerateContentResponse) -> Result<String> {
        let block_reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason);

        let Some(candidate) = response.candidates.into_iter().next() else {
            match block_reason {
                Some(reason) => anyhow::bail!("Request was blocked: {}", reason),
                None => anyhow::bail!("Response contained no candidates"),
            }
        };

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.is_empty() {
            anyhow::bail!(
                "Response contained no text (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            );
        }

        Ok(text)
    }

    fn describe_error_status(status: reqwest::StatusCode, body: &str) -> String {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => format!(
                "HTTP {} {}: {}",
                status.as_u16(),
                envelope.error.status.unwrap_or_default(),
                envelope.error.message
            ),
            Err(_) => format!("HTTP {}: {}", status.as_u16(), body.trim()),
        }
    }

    async fn request_description(
        &self,
        instruction_prompt: &str,
        payload: ImagePayload<'_>,
    ) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("API key is not configured"))?;

        let body = Self::build_request_body(instruction_prompt, payload);
        let url = self.endpoint_url();
        log::debug!("[GEMINI] POST {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .context("Request to Gemini failed")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read Gemini response")?;

        if !status.is_success() {
            anyhow::bail!(Self::describe_error_status(status, &response_text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).context("Failed to parse Gemini response")?;

        Self::extract_description(parsed)
    }
}

#[async_trait]
impl SceneDescriptionService for GeminiSceneDescriptionService {
    async fn describe_scene(
        &self,
        instruction_prompt: &str,
        payload: ImagePayload<'_>,
    ) -> AssistResult<String> {
        log::info!(
            "[GEMINI] Requesting scene description ({} bytes, {})",
            payload.raw_bytes.len(),
            payload.mime_type
        );

        let description = self
            .request_description(instruction_prompt, payload)
            .await
            .map_err(|e| AssistError::RemoteService(format!("{:#}", e)))?;

        log::info!(
            "[GEMINI] Received description with {} characters",
            description.len()
        );
        Ok(description)
    }
}
