use crate::core::models::AudioArtifact;

#[derive(Debug, Clone)]
pub enum RenderableResult {
    Description(String),
    ExtractedText(String),
    Audio(AudioArtifact),
    NoTextFound,
}

impl RenderableResult {
    pub fn is_warning(&self) -> bool {
        matches!(self, RenderableResult::NoTextFound)
    }

    pub fn heading(&self) -> &'static str {
        match self {
            RenderableResult::Description(_) => "Scene Description",
            RenderableResult::ExtractedText(_) => "Extracted Text",
            RenderableResult::Audio(_) => "Audio",
            RenderableResult::NoTextFound => "Text-to-Speech",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_no_text_found_is_a_warning() {
        assert!(RenderableResult::NoTextFound.is_warning());
        assert!(!RenderableResult::Description("a room".to_string()).is_warning());
        assert!(!RenderableResult::ExtractedText(String::new()).is_warning());
    }

    #[test]
    fn test_heading_matches_result_kind() {
        assert_eq!(
            RenderableResult::ExtractedText("x".to_string()).heading(),
            "Extracted Text"
        );
        assert_eq!(
            RenderableResult::Description("x".to_string()).heading(),
            "Scene Description"
        );
    }
}
