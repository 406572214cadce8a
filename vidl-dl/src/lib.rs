//! Type-safe Rust bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) Python library.
//!
//! ## Modules
//!
//! - [`dl`] - Core yt-dlp API wrappers
//! - [`select`] - Stream-selection presets for audio extraction and video merging
//!
//! ## Quick Start
//!
//! **Preset** (best audio, extracted to mp3):
//! ```no_run
//! use vidl_dl::{dl::download, select::StreamSelection};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = StreamSelection::audio("mp3").into();
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```
//!
//! **Custom configuration**:
//! ```no_run
//! use vidl_dl::dl::{download, DownloadOptions, OutputPaths, OutputTemplates, PostProcessor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = DownloadOptions {
//!     format: Some("bestaudio/best".to_string()),
//!     paths: Some(OutputPaths::default().with_home(std::path::Path::new("downloads"))),
//!     outtmpl: Some(OutputTemplates::simple("%(uploader)s/%(title)s.%(ext)s".to_string())),
//!     postprocessors: Some(vec![PostProcessor {
//!         key: "FFmpegExtractAudio".to_string(),
//!         preferredcodec: Some("mp3".to_string()),
//!         preferredquality: Some("192".to_string()),
//!     }]),
//!     noplaylist: Some(true),
//!     ..Default::default()
//! };
//!
//! download("https://youtube.com/watch?v=example", opts)?;
//! # Ok(())
//! # }
//! ```

pub mod dl;
pub mod select;
