//! Stream-selection presets: audio extraction vs. video merging.
//!
//! ```no_run
//! use vidl_dl::{dl::download, select::StreamSelection};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! download("https://youtube.com/watch?v=example", StreamSelection::audio("mp3").into())?;
//! # Ok(())
//! # }
//! ```
//!
//! Audio selections run `FFmpegExtractAudio`; video selections merge the best
//! (or worst) video and audio streams into the requested container.

use crate::dl::{DownloadOptions, PostProcessor};

/// Formats handled by audio extraction rather than video merging.
pub const AUDIO_FORMATS: &[&str] = &["mp3", "wav", "aac", "m4a", "opus", "flac"];

/// Bitrate hint handed to FFmpegExtractAudio.
const AUDIO_QUALITY: &str = "192";

/// Whether an extension names an audio-only container.
pub fn is_audio_format(ext: &str) -> bool {
    AUDIO_FORMATS.contains(&ext)
}

/// Stream quality preference for video selections.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum VideoQuality {
    /// Best available video and audio streams
    #[default]
    Best,
    /// Worst available streams (small test downloads)
    Worst,
}

impl VideoQuality {
    fn selector(self) -> &'static str {
        match self {
            VideoQuality::Best => "bestvideo+bestaudio/best",
            VideoQuality::Worst => "worstvideo+worstaudio/worst",
        }
    }
}

/// What to fetch from a URL: an extracted audio track or a merged video.
#[derive(Clone, Debug)]
pub enum StreamSelection {
    /// Best audio stream, transcoded to `codec` by FFmpeg
    Audio { codec: String },
    /// Video and audio streams merged into `container`
    Video {
        quality: VideoQuality,
        container: String,
    },
}

impl StreamSelection {
    pub fn audio(codec: &str) -> Self {
        Self::Audio {
            codec: codec.to_string(),
        }
    }

    pub fn video(quality: VideoQuality, container: &str) -> Self {
        Self::Video {
            quality,
            container: container.to_string(),
        }
    }
}

impl From<StreamSelection> for DownloadOptions {
    /// Single-item download options; playlists and mtime rewriting stay off.
    fn from(selection: StreamSelection) -> Self {
        let base = Self {
            noplaylist: Some(true),
            updatetime: Some(false),
            ..Default::default()
        };

        match selection {
            StreamSelection::Audio { codec } => Self {
                format: Some("bestaudio/best".to_string()),
                postprocessors: Some(vec![PostProcessor {
                    key: "FFmpegExtractAudio".to_string(),
                    preferredcodec: Some(codec.clone()),
                    preferredquality: Some(AUDIO_QUALITY.to_string()),
                }]),
                final_ext: Some(codec),
                ..base
            },
            StreamSelection::Video { quality, container } => Self {
                format: Some(quality.selector().to_string()),
                merge_output_format: Some(container),
                ..base
            },
        }
    }
}
