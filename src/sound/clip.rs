use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::SoundError;

/// A sound file loaded into memory.
///
/// Owned by exactly one board slot. Dropping it releases the buffer.
#[derive(Debug)]
pub struct SoundClip {
    name: String,
    path: PathBuf,
    bytes: Arc<[u8]>,
}

impl SoundClip {
    pub fn load(path: &Path) -> Result<Self, SoundError> {
        if !path.is_file() {
            return Err(SoundError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| SoundError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!(name = %name, bytes = bytes.len(), "sound clip loaded");
        Ok(Self {
            name,
            path: path.to_path_buf(),
            bytes: bytes.into(),
        })
    }

    /// File name shown in the settings panel.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Shared handle to the clip contents for a playback thread.
    pub fn bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.bytes)
    }
}

impl Drop for SoundClip {
    fn drop(&mut self) {
        tracing::debug!(name = %self.name, "sound clip released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_keeps_name_and_contents() {
        let mut file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        file.write_all(b"RIFF").unwrap();

        let clip = SoundClip::load(file.path()).unwrap();
        assert!(clip.name().ends_with(".wav"));
        assert_eq!(&*clip.bytes(), b"RIFF");
        assert_eq!(clip.path(), file.path());
    }

    #[test]
    fn load_missing_file_fails() {
        let err = SoundClip::load(Path::new("/nonexistent/bell.wav")).unwrap_err();
        assert!(matches!(err, SoundError::FileNotFound { .. }));
    }

    #[test]
    fn load_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SoundClip::load(dir.path()).is_err());
    }
}
