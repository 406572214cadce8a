//! vidl - lightweight media download tool built on yt-dlp.
//!
//! ## Modules
//!
//! - [`cli`] - clap argument definitions
//! - [`plan`] - output planning: directory, filename template, format reconciliation
//! - [`confirm`] - operator confirmation gate for mismatched extensions
//! - [`platform`] - per-OS services: Downloads folder, reveal, open
//! - [`fetch`] - download orchestration around [`vidl_dl`]

pub mod cli;
pub mod confirm;
pub mod fetch;
pub mod plan;
pub mod platform;
