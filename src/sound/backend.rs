use std::process::{Command, Stdio};

use super::{ErrorQueue, SoundClip, SoundError};

/// Plays a loaded clip without blocking the caller.
///
/// Failures detected before returning come back as `Err`; failures noticed
/// later by a playback thread are pushed onto `errors`.
pub trait AudioBackend: Send + Sync {
    fn play(&self, clip: &SoundClip, errors: &ErrorQueue) -> Result<(), SoundError>;
}

/// Player program used when the config does not name one.
pub fn default_player() -> &'static str {
    if cfg!(target_os = "macos") {
        "afplay"
    } else {
        "paplay"
    }
}

/// Plays clips by spawning an external player with the clip path as the
/// last argument.
#[derive(Debug, Clone)]
pub struct CommandBackend {
    program: String,
    args: Vec<String>,
}

impl CommandBackend {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandBackend {
    fn default() -> Self {
        Self::new(default_player(), Vec::new())
    }
}

impl AudioBackend for CommandBackend {
    fn play(&self, clip: &SoundClip, errors: &ErrorQueue) -> Result<(), SoundError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(clip.path())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SoundError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Reap the player so it does not linger as a zombie.
        let program = self.program.clone();
        let name = clip.name().to_string();
        let errors = errors.clone();
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                tracing::warn!(%program, clip = %name, %status, "sound player exited with failure");
                errors.push(SoundError::Playback {
                    name,
                    message: format!("{program} exited with {status}"),
                });
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(%program, clip = %name, error = %e, "failed to wait for sound player");
            }
        });
        Ok(())
    }
}

/// Decodes and plays clips in-process with rodio.
#[cfg(feature = "rodio")]
#[derive(Debug, Default, Clone, Copy)]
pub struct RodioBackend;

#[cfg(feature = "rodio")]
impl AudioBackend for RodioBackend {
    fn play(&self, clip: &SoundClip, errors: &ErrorQueue) -> Result<(), SoundError> {
        use rodio::{Decoder, OutputStream, Sink};
        use std::io::Cursor;

        let bytes = clip.bytes();
        let name = clip.name().to_string();
        let errors = errors.clone();
        std::thread::spawn(move || {
            let fail = |message: String| {
                tracing::warn!(clip = %name, %message, "rodio playback failed");
                errors.push(SoundError::Playback {
                    name: name.clone(),
                    message,
                });
            };
            let (_stream, stream_handle) = match OutputStream::try_default() {
                Ok(output) => output,
                Err(e) => return fail(e.to_string()),
            };
            let source = match Decoder::new(Cursor::new(bytes)) {
                Ok(source) => source,
                Err(e) => return fail(e.to_string()),
            };
            let sink = match Sink::try_new(&stream_handle) {
                Ok(sink) => sink,
                Err(e) => return fail(e.to_string()),
            };
            sink.append(source);
            sink.sleep_until_end();
        });
        Ok(())
    }
}
