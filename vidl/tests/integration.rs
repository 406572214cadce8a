//! Integration tests for the vidl CLI.

use clap::Parser;
use vidl::cli::{Cli, run_cli};

const URL: &str = "https://youtu.be/jNQXAC9IVRw";

fn create_temp_dir(name: &str) -> std::path::PathBuf {
    let temp_dir = std::env::temp_dir().join(name);

    // Clean up previous test run
    if temp_dir.exists() {
        std::fs::remove_dir_all(&temp_dir).ok();
    }
    std::fs::create_dir_all(&temp_dir).expect("failed to create temp dir");

    temp_dir
}

#[test]
#[ignore = "network I/O"]
fn downloads_named_video() {
    let temp_dir = create_temp_dir("vidl-test-video");
    let output = temp_dir.join("zoo.mp4");

    let cli = Cli::parse_from([
        "vidl",
        URL,
        output.to_str().unwrap(),
        "-q",
        "worst",
    ]);

    run_cli(cli).expect("download failed");

    assert!(output.exists(), "file not found: {}", output.display());
}

#[test]
#[ignore = "network I/O"]
fn downloads_audio_with_forced_extension() {
    let temp_dir = create_temp_dir("vidl-test-audio");
    let output = temp_dir.join("zoo.mp3");

    let cli = Cli::parse_from(["vidl", URL, output.to_str().unwrap(), "-f", "mp3"]);

    run_cli(cli).expect("download failed");

    assert!(output.exists(), "file not found: {}", output.display());
}
