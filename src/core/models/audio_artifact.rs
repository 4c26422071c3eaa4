use std::path::Path;
use std::sync::Arc;

use tempfile::TempPath;

use crate::global_constants;

/// A synthesized mp3 on disk. The file is removed once the last clone is dropped.
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    file: Arc<TempPath>,
}

impl AudioArtifact {
    pub fn from_temp_path(path: TempPath) -> Self {
        Self {
            file: Arc::new(path),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file
    }

    pub fn format(&self) -> &'static str {
        global_constants::AUDIO_FORMAT_MP3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_artifact() -> AudioArtifact {
        let file = tempfile::Builder::new()
            .suffix(".mp3")
            .tempfile()
            .unwrap();
        std::fs::write(file.path(), b"ID3").unwrap();
        AudioArtifact::from_temp_path(file.into_temp_path())
    }

    #[test]
    fn test_artifact_format_is_mp3() {
        let artifact = create_test_artifact();

        assert_eq!(artifact.format(), "mp3");
        assert_eq!(
            artifact.file_path().extension().and_then(|e| e.to_str()),
            Some("mp3")
        );
    }

    #[test]
    fn test_file_removed_when_last_handle_dropped() {
        let artifact = create_test_artifact();
        let path = artifact.file_path().to_path_buf();
        let shared = artifact.clone();

        drop(artifact);
        assert!(path.exists());

        drop(shared);
        assert!(!path.exists());
    }
}
