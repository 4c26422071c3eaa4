use std::path::Path;

use image::DynamicImage;

use crate::core::models::{AssistError, AssistResult};
use crate::global_constants;

/// The raw payload handed to adapters that want the original encoded bytes.
#[derive(Debug, Clone, Copy)]
pub struct ImagePayload<'a> {
    pub mime_type: &'a str,
    pub raw_bytes: &'a [u8],
}

#[derive(Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub raw_bytes: Vec<u8>,
    pub decoded_bitmap: DynamicImage,
}

impl std::fmt::Debug for UploadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedImage")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("byte_count", &self.raw_bytes.len())
            .field("width", &self.decoded_bitmap.width())
            .field("height", &self.decoded_bitmap.height())
            .finish()
    }
}

impl UploadedImage {
    pub fn ingest(file_name: &str, raw_bytes: Vec<u8>) -> AssistResult<Self> {
        let mime_type = Self::mime_type_for_file_name(file_name)?;

        log::debug!(
            "[INGEST] Decoding {} ({} bytes, {})",
            file_name,
            raw_bytes.len(),
            mime_type
        );

        let decoded_bitmap = image::load_from_memory(&raw_bytes)
            .map_err(|e| AssistError::ImageDecode(e.to_string()))?;

        log::info!(
            "[INGEST] Loaded {} as {}x{} bitmap",
            file_name,
            decoded_bitmap.width(),
            decoded_bitmap.height()
        );

        Ok(Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            raw_bytes,
            decoded_bitmap,
        })
    }

    pub async fn ingest_file(path: &Path) -> AssistResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();

        // Reject by extension before touching the disk.
        Self::mime_type_for_file_name(&file_name)?;

        let raw_bytes = tokio::fs::read(path).await.map_err(|e| {
            AssistError::ImageDecode(format!("failed to read {}: {}", path.display(), e))
        })?;

        Self::ingest(&file_name, raw_bytes)
    }

    pub fn payload(&self) -> ImagePayload<'_> {
        ImagePayload {
            mime_type: &self.mime_type,
            raw_bytes: &self.raw_bytes,
        }
    }

    fn mime_type_for_file_name(file_name: &str) -> AssistResult<&'static str> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if !global_constants::SUPPORTED_IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            log::warn!("[INGEST] Rejected {}: unsupported extension", file_name);
            return Err(AssistError::UnsupportedFormat { extension });
        }

        match extension.as_str() {
            "png" => Ok("image/png"),
            _ => Ok("image/jpeg"),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    pub(crate) fn encode_test_image(format: image::ImageFormat) -> Vec<u8> {
        let bitmap = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            8,
            6,
            image::Rgb([200, 120, 40]),
        ));
        let mut buffer = Vec::new();
        bitmap
            .write_to(&mut Cursor::new(&mut buffer), format)
            .unwrap();
        buffer
    }

    pub(crate) fn create_test_image() -> UploadedImage {
        UploadedImage::ingest("sign.png", encode_test_image(image::ImageFormat::Png)).unwrap()
    }

    #[test]
    fn test_ingest_png_preserves_mime_type_and_bytes() {
        let bytes = encode_test_image(image::ImageFormat::Png);

        let uploaded = UploadedImage::ingest("photo.png", bytes.clone()).unwrap();

        assert_eq!(uploaded.mime_type, "image/png");
        assert_eq!(uploaded.raw_bytes, bytes);
        assert_eq!(uploaded.decoded_bitmap.width(), 8);
        assert_eq!(uploaded.decoded_bitmap.height(), 6);
    }

    #[test]
    fn test_ingest_jpg_and_jpeg_map_to_image_jpeg() {
        let bytes = encode_test_image(image::ImageFormat::Jpeg);

        let jpg = UploadedImage::ingest("street.jpg", bytes.clone()).unwrap();
        let jpeg = UploadedImage::ingest("street.JPEG", bytes).unwrap();

        assert_eq!(jpg.mime_type, "image/jpeg");
        assert_eq!(jpeg.mime_type, "image/jpeg");
    }

    #[test]
    fn test_ingest_rejects_unsupported_extension() {
        let bytes = encode_test_image(image::ImageFormat::Png);

        let result = UploadedImage::ingest("animation.gif", bytes);

        assert_eq!(
            result.unwrap_err(),
            AssistError::UnsupportedFormat {
                extension: "gif".to_string()
            }
        );
    }

    #[test]
    fn test_ingest_rejects_missing_extension() {
        let result = UploadedImage::ingest("README", vec![1, 2, 3]);

        assert!(matches!(
            result,
            Err(AssistError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_ingest_reports_decode_failure_for_corrupt_bytes() {
        let result = UploadedImage::ingest("broken.png", vec![0u8; 16]);

        assert!(matches!(result, Err(AssistError::ImageDecode(_))));
    }

    #[test]
    fn test_payload_borrows_mime_type_and_bytes() {
        let uploaded = create_test_image();

        let payload = uploaded.payload();

        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.raw_bytes.len(), uploaded.raw_bytes.len());
    }

    #[tokio::test]
    async fn test_ingest_file_reads_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("menu.png");
        std::fs::write(&path, encode_test_image(image::ImageFormat::Png)).unwrap();

        let uploaded = UploadedImage::ingest_file(&path).await.unwrap();

        assert_eq!(uploaded.file_name, "menu.png");
        assert_eq!(uploaded.mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_ingest_file_rejects_extension_before_reading() {
        let path = Path::new("/definitely/missing/document.bmp");

        let result = UploadedImage::ingest_file(path).await;

        assert!(matches!(
            result,
            Err(AssistError::UnsupportedFormat { .. })
        ));
    }
}
