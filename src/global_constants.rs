pub const APPLICATION_NAME: &str = "Sight Assist";
pub const APPLICATION_TITLE: &str = "Visually Impaired Assistant";
pub const APPLICATION_SUBTITLE: &str = "AI-Powered Solutions for Accessibility";
pub const CONFIG_DIRECTORY_NAME: &str = "sight-assist";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

pub const SCENE_DESCRIPTION_PROMPT: &str = "Describe the scene in detail, listing key objects, their purpose, and helpful actions for the visually impaired.";

pub const OCR_LANGUAGE: &str = "eng";
pub const TTS_LANGUAGE: &str = "en";
pub const TTS_MAX_CHUNK_CHARS: usize = 100;
pub const AUDIO_FORMAT_MP3: &str = "mp3";
pub const TEMP_FILE_PREFIX: &str = "sight-assist-";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-pro";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[cfg(target_os = "windows")]
pub const DEFAULT_TESSERACT_PATH: &str = r"C:\Program Files\Tesseract-OCR\tesseract.exe";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_TESSERACT_PATH: &str = "tesseract";

pub const ENV_TESSERACT_CMD: &str = "TESSERACT_CMD";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";

pub const USER_MESSAGE_NO_TEXT_FOUND: &str = "No text found to convert.";
pub const USER_MESSAGE_AUDIO_READY: &str = "Audio generated successfully!";
