use std::io::Write;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::adapters::SpeechSynthesizer;
use crate::core::models::{AppConfig, AssistError, AssistResult, AudioArtifact};
use crate::global_constants;

const CHUNK_BOUNDARY_CHARS: [char; 7] = ['.', '!', '?', ';', ':', ',', '…'];
const REQUEST_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko)";

/// Speaks text through the public Google Translate TTS endpoint, which caps
/// each request at a short chunk of text and answers with mp3 frames.
pub struct GoogleTranslateSpeechSynthesizer {
    client: reqwest::Client,
    base_url: String,
    language: String,
    max_chunk_chars: usize,
}

impl GoogleTranslateSpeechSynthesizer {
    pub fn build(config: &AppConfig) -> Result<Self> {
        log::info!("[GOOGLE_TTS] Initializing speech synthesizer");

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(REQUEST_USER_AGENT)
            .build()
            .context("Failed to create HTTP client for speech synthesis")?;

        Ok(Self {
            client,
            base_url: config.tts_base_url.trim_end_matches('/').to_string(),
            language: global_constants::TTS_LANGUAGE.to_string(),
            max_chunk_chars: global_constants::TTS_MAX_CHUNK_CHARS,
        })
    }

    fn construct_chunk_url(&self, chunk: &str, index: usize, total: usize) -> String {
        format!(
            "{}/translate_tts?ie=UTF-8&q={}&tl={}&total={}&idx={}&textlen={}&client=tw-ob",
            self.base_url,
            urlencoding::encode(chunk),
            self.language,
            total,
            index,
            chunk.chars().count()
        )
    }

    async fn fetch_chunk(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::REFERER, format!("{}/", self.base_url))
            .send()
            .await
            .context("Request to TTS endpoint failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("TTS endpoint returned HTTP {}", status.as_u16());
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read audio from TTS endpoint")?;
        Ok(bytes.to_vec())
    }

    async fn render_audio(&self, text: &str) -> Result<AudioArtifact> {
        let chunks = split_into_chunks(text, self.max_chunk_chars);
        if chunks.is_empty() {
            anyhow::bail!("Nothing to synthesize");
        }

        log::debug!("[GOOGLE_TTS] Synthesizing {} chunk(s)", chunks.len());

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let url = self.construct_chunk_url(chunk, index, chunks.len());
            let bytes = self
                .fetch_chunk(&url)
                .await
                .with_context(|| format!("Chunk {} of {} failed", index + 1, chunks.len()))?;
            audio.extend_from_slice(&bytes);
        }

        if audio.is_empty() {
            anyhow::bail!("TTS endpoint returned no audio");
        }

        let mut audio_file = tempfile::Builder::new()
            .prefix(global_constants::TEMP_FILE_PREFIX)
            .suffix(".mp3")
            .tempfile()
            .context("Failed to create temporary audio file")?;
        audio_file
            .write_all(&audio)
            .context("Failed to write audio file")?;
        audio_file.flush().context("Failed to flush audio file")?;

        log::info!(
            "[GOOGLE_TTS] Wrote {} bytes of mp3 to {:?}",
            audio.len(),
            audio_file.path()
        );

        Ok(AudioArtifact::from_temp_path(audio_file.into_temp_path()))
    }
}

/// Breaks text into pieces of at most `max_chars` characters. Text that fits is
/// returned as one trimmed chunk. Longer text is cut after sentence punctuation
/// that is followed by whitespace, then at whitespace, then hard at the limit.
/// Characters inside a chunk are never rewritten.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        if remaining.chars().count() <= max_chars {
            chunks.push(remaining.to_string());
            break;
        }

        let limit_byte = remaining
            .char_indices()
            .nth(max_chars)
            .map(|(index, _)| index)
            .unwrap_or(remaining.len());

        let split_at = last_punctuation_boundary(remaining, limit_byte)
            .or_else(|| {
                remaining[..limit_byte]
                    .rfind(char::is_whitespace)
                    .filter(|&index| index > 0)
            })
            .unwrap_or(limit_byte);

        chunks.push(remaining[..split_at].trim_end().to_string());
        remaining = remaining[split_at..].trim_start();
    }

    chunks
}

/// Byte offset just past the last boundary inside `text[..limit_byte]`. Decimal
/// points, times and URLs are not boundaries because no whitespace follows them.
fn last_punctuation_boundary(text: &str, limit_byte: usize) -> Option<usize> {
    text[..limit_byte]
        .char_indices()
        .filter(|&(index, ch)| {
            let end = index + ch.len_utf8();
            ch == '\n'
                || (CHUNK_BOUNDARY_CHARS.contains(&ch)
                    && text[end..].chars().next().map_or(true, char::is_whitespace))
        })
        .map(|(index, ch)| index + ch.len_utf8())
        .last()
}

#[async_trait]
impl SpeechSynthesizer for GoogleTranslateSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> AssistResult<AudioArtifact> {
        log::info!(
            "[GOOGLE_TTS] Converting {} characters to speech",
            text.chars().count()
        );

        self.render_audio(text)
            .await
            .map_err(|e| AssistError::Synthesis(format!("{:#}", e)))
    }
}
