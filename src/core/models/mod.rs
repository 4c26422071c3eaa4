mod app_config;
mod assist_error;
mod audio_artifact;
mod feature_choice;
mod renderable_result;
mod uploaded_image;

pub use app_config::{AppConfig, ThemeMode};
pub use assist_error::{AssistError, AssistResult};
pub use audio_artifact::AudioArtifact;
pub use feature_choice::FeatureChoice;
pub use renderable_result::RenderableResult;
pub use uploaded_image::{ImagePayload, UploadedImage};

#[cfg(test)]
pub(crate) use uploaded_image::tests::{create_test_image, encode_test_image};
