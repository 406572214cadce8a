//! Download orchestration: plan, delegate to yt-dlp, post-actions.

use crate::cli::Cli;
use crate::confirm::StdinAcknowledge;
use crate::plan::{self, DownloadPlan, OutputTemplate, PlanRequest};
use crate::platform::{Desktop, Platform};
use color_eyre::Section;
use eyre::{Context, Result};
use std::path::{Path, PathBuf};
use vidl_dl::dl::{self, DownloadInfo, DownloadOptions, OutputPaths, OutputTemplates};
use vidl_dl::select::StreamSelection;

/// Resolved configuration for one invocation.
#[derive(Debug)]
pub struct Config {
    pub request: PlanRequest,
    pub open: bool,
    pub play: bool,
    pub list_formats: bool,
    /// Subtitle languages to fetch, when subtitles were requested
    pub subtitle_langs: Option<Vec<String>>,
    pub cookies: Option<PathBuf>,
    pub max_downloads: Option<i64>,
}

impl TryFrom<Cli> for Config {
    type Error = eyre::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        let subtitle_langs = cli.subtitles.then(|| match cli.sub_lang.as_deref() {
            Some(langs) => langs.split(',').map(|l| l.trim().to_string()).collect(),
            None => vec!["en".to_string()],
        });

        Ok(Self {
            request: PlanRequest {
                url: cli.url,
                output: cli.output,
                downloads: cli.downloads,
                format: cli.format,
                quality: cli.quality,
            },
            open: cli.open,
            play: cli.play,
            list_formats: cli.list_formats,
            subtitle_langs,
            cookies: cli.cookies,
            max_downloads: cli.max_downloads,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    if config.list_formats {
        return print_formats(&config);
    }

    let Config {
        request,
        open,
        play,
        subtitle_langs,
        cookies,
        max_downloads,
        ..
    } = config;

    let platform = Desktop;
    let mut gate = StdinAcknowledge;

    let plan = plan::plan(request, &platform, &mut gate)?;

    plan::ensure_directory(&plan.directory)
        .wrap_err_with(|| format!("failed to create {}", plan.directory.display()))?;

    let mut opts = build_options(&plan);

    if let Some(langs) = subtitle_langs {
        opts.writesubtitles = Some(true);
        opts.subtitleslangs = Some(langs);
    }
    if let Some(cookies) = cookies {
        opts.cookiefile = Some(cookies.to_string_lossy().into_owned());
    }
    opts.max_downloads = max_downloads;

    tracing::info!(url = plan.url, format = plan.format, "downloading");
    println!("Downloading from {} ...", plan.url);

    let (hook_path, info) = dl::download(&plan.url, opts)
        .wrap_err("download failed")
        .with_suggestion(|| format!("vidl '{}' --list-formats", plan.url))?;

    let final_path = resolve_final_path(&plan, hook_path, &info);
    println!("Download completed successfully: {}", final_path.display());

    if open {
        let dir = final_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        platform
            .reveal(dir)
            .wrap_err("failed to open the file browser")?;
    }

    if play {
        platform
            .open(&final_path)
            .wrap_err("failed to play the downloaded media")?;
    }

    Ok(())
}

/// Map a plan onto yt-dlp options: stream selection, target directory, template.
fn build_options(plan: &DownloadPlan) -> DownloadOptions {
    let selection = if plan.is_audio {
        StreamSelection::audio(&plan.format)
    } else {
        StreamSelection::video(plan.quality.into(), &plan.format)
    };

    let mut opts: DownloadOptions = selection.into();
    opts.paths = Some(OutputPaths::default().with_home(&plan.directory));
    opts.outtmpl = Some(OutputTemplates::simple(template_string(plan)));
    opts
}

/// Filename template handed to yt-dlp.
///
/// A named audio output keeps `%(ext)s` in the template so FFmpegExtractAudio
/// can swap the container after download; the plan already carries the final
/// name with the corrected extension.
fn template_string(plan: &DownloadPlan) -> String {
    match &plan.template {
        OutputTemplate::TitleAndExt => "%(title)s.%(ext)s".to_string(),
        OutputTemplate::Named(name) => {
            if plan.is_audio {
                let stem = Path::new(name)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| name.clone());
                format!("{stem}.%(ext)s")
            } else {
                name.clone()
            }
        }
    }
}

/// Final on-disk path: the post-hook result when yt-dlp reported one, else
/// derived from the plan and the info dict.
fn resolve_final_path(
    plan: &DownloadPlan,
    hook_path: Option<PathBuf>,
    info: &DownloadInfo,
) -> PathBuf {
    if let Some(path) = hook_path {
        return path;
    }

    let filename = match &plan.template {
        OutputTemplate::Named(name) => name.clone(),
        OutputTemplate::TitleAndExt => {
            let ext = info.ext.as_deref().unwrap_or(&plan.format);
            format!("{}.{}", info.title, ext)
        }
    };

    plan.directory.join(filename)
}

/// `--list-formats`: probe the URL and print its formats table, no download.
fn print_formats(config: &Config) -> Result<()> {
    let opts = DownloadOptions {
        noplaylist: Some(true),
        quiet: Some(true),
        no_warnings: Some(true),
        cookiefile: config
            .cookies
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned()),
        ..Default::default()
    };

    let formats = dl::list_formats(&config.request.url, opts)
        .wrap_err("failed to query available formats")?;

    println!("Listing all available formats for this URL:\n");
    for f in &formats {
        println!(
            "{}: {} - {} - {} - {} bytes",
            f.format_id,
            f.ext.as_deref().unwrap_or("?"),
            f.format_note.as_deref().unwrap_or("-"),
            f.resolution.as_deref().unwrap_or("-"),
            f.filesize.unwrap_or(0),
        );
    }

    Ok(())
}
