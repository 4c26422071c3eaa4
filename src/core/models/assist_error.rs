use thiserror::Error;

/// Failure kinds surfaced to the user, one message per request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("Unsupported image format '{extension}'. Use JPG, JPEG or PNG.")]
    UnsupportedFormat { extension: String },

    #[error("Could not decode image: {0}")]
    ImageDecode(String),

    #[error("OCR engine error: {0}")]
    OcrEngine(String),

    #[error("Vision service error: {0}")]
    RemoteService(String),

    #[error("Speech synthesis error: {0}")]
    Synthesis(String),
}

pub type AssistResult<T> = Result<T, AssistError>;

impl AssistError {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AssistError::UnsupportedFormat { .. } => "UnsupportedFormat",
            AssistError::ImageDecode(_) => "ImageDecode",
            AssistError::OcrEngine(_) => "OcrEngine",
            AssistError::RemoteService(_) => "RemoteService",
            AssistError::Synthesis(_) => "Synthesis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_message_names_the_extension() {
        let error = AssistError::UnsupportedFormat {
            extension: "gif".to_string(),
        };

        assert!(error.to_string().contains("'gif'"));
        assert_eq!(error.kind_name(), "UnsupportedFormat");
    }

    #[test]
    fn test_remote_service_message_keeps_detail() {
        let error = AssistError::RemoteService("quota exceeded".to_string());

        assert_eq!(error.to_string(), "Vision service error: quota exceeded");
    }
}
