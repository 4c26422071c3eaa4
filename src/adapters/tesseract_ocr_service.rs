use std::ffi::OsStr;
use std::path::PathBuf;
use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use image::DynamicImage;
use tokio::process::Command;

use crate::core::interfaces::adapters::OcrService;
use crate::core::models::{AppConfig, AssistError, AssistResult};
use crate::global_constants;

pub struct TesseractOcrService {
    executable_path: PathBuf,
    language: String,
    timeout: Duration,
}

impl TesseractOcrService {
    pub fn build(config: &AppConfig) -> Self {
        log::info!(
            "[TESSERACT_OCR] Using Tesseract executable at {:?}",
            config.tesseract_path
        );
        Self {
            executable_path: config.tesseract_path.clone(),
            language: global_constants::OCR_LANGUAGE.to_string(),
            timeout: config.request_timeout(),
        }
    }

    /// Runs `--version` so a bad path shows up before the first request.
    pub async fn verify_engine(&self) -> AssistResult<String> {
        let output = self
            .run_engine(&[OsStr::new("--version")])
            .await
            .map_err(|e| AssistError::OcrEngine(format!("{:#}", e)))?;

        // Older builds print the version banner on stderr.
        let banner = if output.stdout.is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            String::from_utf8_lossy(&output.stdout).into_owned()
        };
        let version = banner.lines().next().unwrap_or("tesseract").trim().to_string();

        log::info!("[TESSERACT_OCR] Engine available: {}", version);
        Ok(version)
    }

    fn convert_to_tesseract_compatible_format(image: &DynamicImage) -> Result<Vec<u8>> {
        log::debug!("[TESSERACT_OCR] Converting image to compatible format");
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), image::ImageFormat::Png)
            .context("Failed to convert image to PNG format")?;
        Ok(buffer)
    }

    async fn recognize(&self, image: &DynamicImage) -> Result<String> {
        let png_bytes = Self::convert_to_tesseract_compatible_format(image)?;

        let input_file = tempfile::Builder::new()
            .prefix(global_constants::TEMP_FILE_PREFIX)
            .suffix(".png")
            .tempfile()
            .context("Failed to create temporary OCR input file")?;
        tokio::fs::write(input_file.path(), &png_bytes)
            .await
            .context("Failed to write temporary OCR input file")?;

        let output = self
            .run_engine(&[
                input_file.path().as_os_str(),
                OsStr::new("stdout"),
                OsStr::new("-l"),
                OsStr::new(&self.language),
            ])
            .await?;

        String::from_utf8(output.stdout).context("Tesseract output was not UTF-8")
    }

    async fn run_engine(&self, args: &[&OsStr]) -> Result<Output> {
        let mut command = Command::new(&self.executable_path);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "Tesseract did not finish within {} seconds",
                    self.timeout.as_secs()
                )
            })?
            .with_context(|| {
                format!(
                    "Failed to start Tesseract at {}",
                    self.executable_path.display()
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "Tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            );
        }

        Ok(output)
    }
}

#[async_trait]
impl OcrService for TesseractOcrService {
    async fn extract_text_from_image(&self, image: &DynamicImage) -> AssistResult<String> {
        log::info!("[TESSERACT_OCR] Starting text extraction");
        log::debug!(
            "[TESSERACT_OCR] Image dimensions: {}x{}",
            image.width(),
            image.height()
        );

        let extracted_text = self
            .recognize(image)
            .await
            .map_err(|e| AssistError::OcrEngine(format!("{:#}", e)))?;

        log::info!(
            "[TESSERACT_OCR] Text extraction complete. Extracted {} characters",
            extracted_text.len()
        );
        log::debug!("[TESSERACT_OCR] Extracted text: {}", extracted_text);

        Ok(extracted_text)
    }
}
