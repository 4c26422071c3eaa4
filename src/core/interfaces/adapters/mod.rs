mod ocr_service;
mod scene_description_service;
mod speech_synthesizer;

pub use ocr_service::OcrService;
pub use scene_description_service::SceneDescriptionService;
pub use speech_synthesizer::SpeechSynthesizer;
