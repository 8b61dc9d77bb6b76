use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

const FFMPEG: &str = "ffmpeg";
const VORBIS_CODEC: &str = "libvorbis";

/// Fixed Vorbis encode parameters for one conversion run.
///
/// Output files are always overwritten (`-y` is unconditional).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VorbisSettings {
    /// Quality on ffmpeg's 0-10 Vorbis scale.
    pub quality: u32,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl Default for VorbisSettings {
    /// Maximum quality: q=10, 48 kHz
    fn default() -> Self {
        VorbisSettings {
            quality: 10,
            sample_rate: 48_000,
        }
    }
}

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("ffmpeg not found on PATH")]
    ToolMissing,
    #[error("failed to launch ffmpeg")]
    Launch(#[from] io::Error),
    #[error("ffmpeg exited with {0}")]
    Failed(ExitStatus),
}

/// Narrow seam over the external transcoding tool so the batch loop can be
/// tested without spawning a real subprocess.
pub trait Transcoder {
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        settings: &VorbisSettings,
    ) -> Result<(), TranscodeError>;
}

/// Transcoder that shells out to the ffmpeg binary on PATH.
pub struct FfmpegTranscoder;

impl FfmpegTranscoder {
    pub fn new() -> Self {
        FfmpegTranscoder
    }

    /// Build the ffmpeg argument list for one conversion
    fn build_args(input: &Path, output: &Path, settings: &VorbisSettings) -> Vec<OsString> {
        vec![
            OsString::from("-i"),
            input.as_os_str().to_owned(),
            OsString::from("-c:a"),
            OsString::from(VORBIS_CODEC),
            OsString::from("-q:a"),
            OsString::from(settings.quality.to_string()),
            OsString::from("-ar"),
            OsString::from(settings.sample_rate.to_string()),
            OsString::from("-y"),
            output.as_os_str().to_owned(),
        ]
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(
        &self,
        input: &Path,
        output: &Path,
        settings: &VorbisSettings,
    ) -> Result<(), TranscodeError> {
        let program = which::which(FFMPEG).map_err(|_| TranscodeError::ToolMissing)?;

        // Blocks until ffmpeg exits; its own chatter is not surfaced
        let status = Command::new(program)
            .args(Self::build_args(input, output, settings))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;

        if !status.success() {
            return Err(TranscodeError::Failed(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings_are_max_quality() {
        let settings = VorbisSettings::default();
        assert_eq!(settings.quality, 10);
        assert_eq!(settings.sample_rate, 48_000);
    }

    #[test]
    fn test_build_args() {
        let input = PathBuf::from("in/tone.m4r");
        let output = PathBuf::from("out/tone.ogg");
        let args = FfmpegTranscoder::build_args(&input, &output, &VorbisSettings::default());

        let expected: Vec<OsString> = [
            "-i",
            "in/tone.m4r",
            "-c:a",
            "libvorbis",
            "-q:a",
            "10",
            "-ar",
            "48000",
            "-y",
            "out/tone.ogg",
        ]
        .iter()
        .map(|s| OsString::from(*s))
        .collect();

        assert_eq!(args, expected);
    }
}
