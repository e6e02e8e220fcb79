use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The tool could not be launched at all, typically because it is not
    /// installed or not on PATH.
    #[error("failed to run ffmpeg: {0}")]
    Spawn(#[from] io::Error),
    /// The tool ran but exited non-zero; carries its captured stderr.
    #[error("ffmpeg failed ({status}): {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}

/// Narrow seam over the external transcoding tool, so the batch driver can be
/// exercised with a fake when no media tool is installed.
pub trait Transcoder {
    fn convert(&self, input: &Path, output: &Path) -> Result<(), TranscodeError>;
}

/// Extracts the audio streams of a video file into an MP3 by shelling out to
/// ffmpeg, blocking until it exits and capturing its output.
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    pub fn new() -> Self {
        Self {
            program: "ffmpeg".to_string(),
        }
    }

    /// Use a different executable name (tests point this at a missing binary
    /// to hit the spawn-failure path).
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for FfmpegTranscoder {
    fn convert(&self, input: &Path, output: &Path) -> Result<(), TranscodeError> {
        let result = Command::new(&self.program)
            .arg("-i")
            .arg(input)
            .args(["-q:a", "0"]) // best VBR quality for the audio encoder
            .args(["-map", "a"]) // audio streams only
            .arg("-y") // overwrite any existing output file
            .arg(output)
            .output()?;

        if !result.status.success() {
            return Err(TranscodeError::Failed {
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }

        Ok(())
    }
}
