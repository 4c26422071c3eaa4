use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeatureChoice {
    #[default]
    DescribeScene,
    ExtractText,
    ConvertToSpeech,
}

impl FeatureChoice {
    pub const ALL: [FeatureChoice; 3] = [
        FeatureChoice::DescribeScene,
        FeatureChoice::ExtractText,
        FeatureChoice::ConvertToSpeech,
    ];

    pub fn display_label(&self) -> &'static str {
        match self {
            FeatureChoice::DescribeScene => "Describe Scene",
            FeatureChoice::ExtractText => "Extract Text",
            FeatureChoice::ConvertToSpeech => "Text-to-Speech",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeatureChoice::DescribeScene => {
                "Analyzes the image and provides a detailed scene description for better understanding."
            }
            FeatureChoice::ExtractText => {
                "Uses OCR to extract text from the image, enabling reading of signs, documents, or other text."
            }
            FeatureChoice::ConvertToSpeech => {
                "Converts the extracted text from the image into speech for an auditory experience."
            }
        }
    }

    pub fn busy_message(&self) -> &'static str {
        match self {
            FeatureChoice::DescribeScene => "Generating description...",
            FeatureChoice::ExtractText => "Extracting text...",
            FeatureChoice::ConvertToSpeech => "Converting text to speech...",
        }
    }
}

impl fmt::Display for FeatureChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feature_is_describe_scene() {
        assert_eq!(FeatureChoice::default(), FeatureChoice::DescribeScene);
    }

    #[test]
    fn test_all_lists_each_feature_once() {
        assert_eq!(FeatureChoice::ALL.len(), 3);
        assert!(FeatureChoice::ALL.contains(&FeatureChoice::ExtractText));
        assert!(FeatureChoice::ALL.contains(&FeatureChoice::ConvertToSpeech));
    }

    #[test]
    fn test_display_uses_label_without_formatting_markers() {
        assert_eq!(format!("{}", FeatureChoice::ConvertToSpeech), "Text-to-Speech");
        assert_eq!(format!("{}", FeatureChoice::ExtractText), "Extract Text");
    }
}
