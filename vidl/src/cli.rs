//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use eyre::Result;
use std::path::PathBuf;
use vidl_dl::select::VideoQuality;

/// Stream quality to request from the extractor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Quality {
    #[default]
    Best,
    Worst,
}

impl From<Quality> for VideoQuality {
    fn from(quality: Quality) -> Self {
        match quality {
            Quality::Best => VideoQuality::Best,
            Quality::Worst => VideoQuality::Worst,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vidl")]
#[command(about = "Lightweight media download tool")]
#[command(version)]
pub struct Cli {
    /// Media URL to download
    pub url: String,

    /// Output file name (optional)
    pub output: Option<PathBuf>,

    /// Download to the system's Downloads folder
    #[arg(short, long)]
    pub downloads: bool,

    /// Open the file browser at the download location afterwards
    #[arg(short, long)]
    pub open: bool,

    /// Play the downloaded media with the default handler afterwards
    #[arg(short, long)]
    pub play: bool,

    /// Select stream quality
    #[arg(short, long, value_enum, default_value = "best")]
    pub quality: Quality,

    /// Target format (e.g. mp4, mp3)
    #[arg(short, long)]
    pub format: Option<String>,

    /// List all available formats for the URL, then exit
    #[arg(long)]
    pub list_formats: bool,

    /// Download subtitles for the video
    #[arg(long)]
    pub subtitles: bool,

    /// Comma-separated subtitle languages (e.g. "en,es"). Default is "en"
    #[arg(long)]
    pub sub_lang: Option<String>,

    /// Path to a cookies file (e.g., cookies.txt)
    #[arg(long)]
    pub cookies: Option<PathBuf>,

    /// Maximum number of videos to download
    #[arg(long)]
    pub max_downloads: Option<i64>,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    crate::fetch::execute(cli.try_into()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_only() {
        let cli = Cli::parse_from(["vidl", "https://example.com/video"]);

        assert_eq!(cli.url, "https://example.com/video");
        assert!(cli.output.is_none());
        assert!(!cli.downloads);
        assert!(!cli.open);
        assert!(!cli.play);
        assert_eq!(cli.quality, Quality::Best);
        assert!(cli.format.is_none());
    }

    #[test]
    fn parses_output_positional() {
        let cli = Cli::parse_from(["vidl", "https://example.com/video", "clip.mp4"]);

        assert!(cli.output.as_deref().is_some_and(|p| p == "clip.mp4"));
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::parse_from([
            "vidl",
            "https://example.com/video",
            "-d",
            "-o",
            "-p",
            "-q",
            "worst",
            "-f",
            "mp3",
        ]);

        assert!(cli.downloads);
        assert!(cli.open);
        assert!(cli.play);
        assert_eq!(cli.quality, Quality::Worst);
        assert_eq!(cli.format.as_deref(), Some("mp3"));
    }

    #[test]
    fn parses_extended_flags() {
        let cli = Cli::parse_from([
            "vidl",
            "https://example.com/video",
            "--subtitles",
            "--sub-lang",
            "en,es",
            "--cookies",
            "cookies.txt",
            "--max-downloads",
            "3",
        ]);

        assert!(cli.subtitles);
        assert_eq!(cli.sub_lang.as_deref(), Some("en,es"));
        assert!(cli.cookies.as_deref().is_some_and(|p| p == "cookies.txt"));
        assert_eq!(cli.max_downloads, Some(3));
    }

    #[test]
    fn parses_list_formats() {
        let cli = Cli::parse_from(["vidl", "https://example.com/video", "--list-formats"]);

        assert!(cli.list_formats);
    }

    #[test]
    fn url_is_required() {
        assert!(Cli::try_parse_from(["vidl"]).is_err());
    }
}
