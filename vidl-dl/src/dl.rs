//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL` parameters.
//!
//! ```no_run
//! use vidl_dl::{dl::download, select::StreamSelection};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let (path, info) = download("https://youtube.com/watch?v=example", StreamSelection::audio("mp3").into())?;
//! println!("Downloaded: {}", info.title);
//! # Ok(())
//! # }
//! ```

use pyo3::ffi::c_str;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Create with home and temp directories.
    pub fn simple(home: &Path, temp: &Path) -> Self {
        Self::default().with_home(home).with_temp(temp)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp".to_string(), temp)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional codec and quality.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
    pub preferredquality: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are stripped before reaching Python so yt-dlp applies its own
/// defaults for anything left unset.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub merge_output_format: Option<String>,
    pub final_ext: Option<String>,
    pub noplaylist: Option<bool>,
    pub updatetime: Option<bool>,
    pub writesubtitles: Option<bool>,
    pub subtitleslangs: Option<Vec<String>>,
    pub cookiefile: Option<String>,
    pub max_downloads: Option<i64>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

/// Essential metadata from the yt-dlp info dict.
///
/// Extracted via `FromPyObject` from the sanitized info dict returned by `extract_info`.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct DownloadInfo {
    /// Video identifier (required by yt-dlp)
    pub id: String,
    /// Video title (required by yt-dlp)
    pub title: String,
    /// Native container extension of the downloaded stream
    pub ext: Option<String>,
}

/// One entry of the formats table returned by `extract_info`.
#[derive(Clone, Debug, FromPyObject)]
#[pyo3(from_item_all)]
pub struct FormatInfo {
    pub format_id: String,
    #[pyo3(default)]
    pub ext: Option<String>,
    #[pyo3(default)]
    pub format_note: Option<String>,
    #[pyo3(default)]
    pub resolution: Option<String>,
    #[pyo3(default)]
    pub filesize: Option<i64>,
}

fn shim(py: Python<'_>) -> Result<Bound<'_, PyModule>, PyErr> {
    PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")
}

/// Download a single URL and return the final file path plus the info dict.
///
/// Uses `extract_info(url, download=True)` with a post hook registered to capture
/// the on-disk path after all post-processing has run.
pub fn download(url: &str, opts: DownloadOptions) -> Result<(Option<PathBuf>, DownloadInfo), PyErr> {
    Python::attach(|py| {
        let py_params = opts.into_pyobject(py)?;

        let result = shim(py)?.getattr("download")?.call1((url, py_params))?;

        let (path, info): (Option<String>, DownloadInfo) = result.extract()?;

        Ok((path.map(PathBuf::from), info))
    })
}

/// Probe a single URL without downloading and return its formats table.
pub fn list_formats(url: &str, opts: DownloadOptions) -> Result<Vec<FormatInfo>, PyErr> {
    Python::attach(|py| {
        let py_params = opts.into_pyobject(py)?;

        let formats = shim(py)?.getattr("list_formats")?.call1((url, py_params))?;

        formats.extract()
    })
}
