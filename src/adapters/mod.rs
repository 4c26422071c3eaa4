mod gemini_scene_description_service;
mod google_translate_speech_synthesizer;
mod tesseract_ocr_service;

pub use gemini_scene_description_service::GeminiSceneDescriptionService;
pub use google_translate_speech_synthesizer::GoogleTranslateSpeechSynthesizer;
pub use tesseract_ocr_service::TesseractOcrService;

#[cfg(test)]
mod canned_http_server;
