use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("convert_ringtones").unwrap()
}

#[test]
fn missing_input_dir_exits_with_failure() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("no-such-dir");
    let output = root.path().join("out");

    bin()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("input folder not found"));

    // Nothing was written
    assert!(!output.exists());
}

#[test]
fn empty_input_dir_exits_with_success() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    fs::write(input.path().join("notes.txt"), "not a ringtone").unwrap();

    bin()
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No .m4r files found in the input folder.",
        ));

    // The output directory stays empty
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}

#[test]
fn unconvertible_file_aborts_the_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    // Not real audio, so ffmpeg exits non-zero; if ffmpeg is not installed
    // at all the error path and message are the same
    fs::write(input.path().join("broken.m4r"), "not audio data").unwrap();

    bin()
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ffmpeg failed to convert broken.m4r"))
        .stderr(predicate::str::contains("Make sure FFmpeg is installed"));
}

#[test]
fn bad_arguments_print_usage() {
    bin()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: convert_ringtones"));
}
