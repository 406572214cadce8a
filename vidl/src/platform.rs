//! Per-OS services: Downloads folder lookup, reveal in file browser, open
//! with the default handler.
//!
//! One small trait selected at startup instead of `cfg` chains sprinkled
//! through the planner and fetch logic.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// OS-level collaborators the planner and fetch step depend on.
pub trait Platform {
    /// System Downloads directory, when the OS exposes one.
    fn downloads_dir(&self) -> Option<PathBuf>;

    /// Show `path` in the system file browser.
    fn reveal(&self, path: &Path) -> io::Result<()>;

    /// Open `path` with its default handler (media player for audio/video).
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Real desktop implementation.
#[derive(Debug, Default)]
pub struct Desktop;

impl Platform for Desktop {
    fn downloads_dir(&self) -> Option<PathBuf> {
        dirs::download_dir()
    }

    fn reveal(&self, path: &Path) -> io::Result<()> {
        if cfg!(target_os = "windows") {
            run("explorer", &[], path)
        } else {
            self.open(path)
        }
    }

    fn open(&self, path: &Path) -> io::Result<()> {
        if cfg!(target_os = "windows") {
            run("cmd", &["/C", "start", ""], path)
        } else if cfg!(target_os = "macos") {
            run("open", &[], path)
        } else {
            run("xdg-open", &[], path)
        }
    }
}

fn run(program: &str, args: &[&str], path: &Path) -> io::Result<()> {
    tracing::debug!(program, path = %path.display(), "launching");

    // Exit status of the launcher is not meaningful; only spawn failures are.
    Command::new(program).args(args).arg(path).status()?;

    Ok(())
}
