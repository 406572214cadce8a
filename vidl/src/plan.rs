//! Output planning: target directory, filename template, effective format,
//! and reconciliation of mismatched extensions.
//!
//! The plan is derived once per invocation from the parsed CLI input and then
//! consumed to build the yt-dlp configuration. OS lookups go through
//! [`Platform`] and the mismatch prompt through [`Acknowledge`], so planning is
//! deterministic under test.

use crate::cli::Quality;
use crate::confirm::{Acknowledge, FormatMismatch, Response};
use crate::platform::Platform;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use vidl_dl::select::is_audio_format;

/// Format assumed when neither `-f` nor an output extension is given.
pub const DEFAULT_FORMAT: &str = "mp4";

/// Fatal planning outcomes. All map to a non-zero exit.
#[derive(Debug, Error)]
pub enum PlanError {
    /// `-d` combined with a path-qualified output file
    #[error("cannot combine a custom output path with the downloads flag")]
    ConflictingOutputLocation,

    /// Platform could not resolve the Downloads folder
    #[error("unable to determine the Downloads folder on this system")]
    DownloadsDirUnavailable,

    /// Operator refused the format mismatch prompt
    #[error("aborted at the format mismatch prompt")]
    UserAborted,

    /// Prompt I/O failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Planner input, straight from the CLI.
#[derive(Clone, Debug)]
pub struct PlanRequest {
    pub url: String,
    pub output: Option<PathBuf>,
    pub downloads: bool,
    pub format: Option<String>,
    pub quality: Quality,
}

/// Output filename shape sent to yt-dlp.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTemplate {
    /// Literal filename chosen by the user (possibly rewritten for audio)
    Named(String),
    /// `%(title)s.%(ext)s` - title and native extension resolved post-fetch
    TitleAndExt,
}

/// One invocation's resolved download intent.
#[derive(Clone, Debug)]
pub struct DownloadPlan {
    pub url: String,
    pub directory: PathBuf,
    pub template: OutputTemplate,
    /// Effective target format, lower-cased
    pub format: String,
    pub quality: Quality,
    pub is_audio: bool,
}

/// Resolve a [`DownloadPlan`] from CLI input.
///
/// The effective format is the explicit `-f` value when given, else the output
/// filename's extension when that names an audio format, else mp4. The
/// confirmation gate only runs when a user-supplied filename disagrees with the
/// effective format. After
/// acknowledgment, audio formats force-correct the extension; video containers
/// keep the user's name verbatim even though the real container will be the
/// effective format.
pub fn plan(
    request: PlanRequest,
    platform: &dyn Platform,
    gate: &mut dyn Acknowledge,
) -> Result<DownloadPlan, PlanError> {
    let format = match request.format.as_deref() {
        Some(f) => f.trim_start_matches('.').to_ascii_lowercase(),
        None => request
            .output
            .as_deref()
            .and_then(Path::extension)
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .filter(|e| is_audio_format(e))
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
    };

    let parent = request
        .output
        .as_deref()
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty());

    if request.downloads && parent.is_some() {
        return Err(PlanError::ConflictingOutputLocation);
    }

    let directory = if request.downloads {
        platform
            .downloads_dir()
            .ok_or(PlanError::DownloadsDirUnavailable)?
    } else if let Some(parent) = parent {
        parent.to_path_buf()
    } else {
        PathBuf::from(".")
    };

    let is_audio = is_audio_format(&format);

    let template = match request.output.as_deref() {
        Some(output) => named_template(output, &format, is_audio, gate)?,
        None => OutputTemplate::TitleAndExt,
    };

    tracing::debug!(
        directory = %directory.display(),
        ?template,
        format,
        is_audio,
        "resolved download plan"
    );

    Ok(DownloadPlan {
        url: request.url,
        directory,
        template,
        format,
        quality: request.quality,
        is_audio,
    })
}

/// Reconcile a user-supplied filename with the effective format.
fn named_template(
    output: &Path,
    format: &str,
    is_audio: bool,
    gate: &mut dyn Acknowledge,
) -> Result<OutputTemplate, PlanError> {
    let filename = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let extension = output
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    if extension == format {
        return Ok(OutputTemplate::Named(filename));
    }

    let mismatch = FormatMismatch {
        filename: filename.clone(),
        extension,
        expected: format.to_string(),
    };

    tracing::warn!(filename = mismatch.filename, expected = mismatch.expected, "format mismatch");

    match gate.confirm(&mismatch)? {
        Response::Aborted => return Err(PlanError::UserAborted),
        Response::Acknowledged => {}
    }

    if is_audio {
        let stem = output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(filename);

        Ok(OutputTemplate::Named(format!("{stem}.{format}")))
    } else {
        // Trust the user's container name even though yt-dlp will produce
        // `format`; the resulting file may carry a misleading extension.
        Ok(OutputTemplate::Named(filename))
    }
}

/// Create the resolved directory when missing. Safe to call repeatedly.
pub fn ensure_directory(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}
