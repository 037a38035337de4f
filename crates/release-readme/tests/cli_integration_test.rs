//! Integration tests for the `release-readme` binary.
//!
//! Builds release folder trees in temp directories and runs the compiled
//! binary against them: discovery → metadata → table → README on disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Get the path to the compiled release-readme binary.
fn release_readme_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_release-readme"))
}

/// Run release-readme with the given args from `work_dir`.
fn run_release_readme(work_dir: &Path, args: &[&str]) -> Output {
    Command::new(release_readme_bin())
        .args(args)
        .current_dir(work_dir)
        .env_remove("RELEASE_README_DIR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute release-readme")
}

/// Create a release folder with some source files and optional metadata.
fn create_release(releases: &Path, name: &str, metadata: Option<(&str, &str)>) {
    let dir = releases.join(name);
    fs::create_dir_all(dir.join("src")).unwrap();
    fs::write(dir.join("src").join("main.cpp"), "int main() {}\n").unwrap();
    if let Some((filename, yaml)) = metadata {
        fs::write(dir.join(filename), yaml).unwrap();
    }
}

/// The two-release tree used by most tests.
fn sample_workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let releases = temp.path().join("releases");
    create_release(
        &releases,
        "b",
        Some(("info.yaml", "Description: Tool B\nVersion: 2\nLanguage: Go\n")),
    );
    create_release(
        &releases,
        "a",
        Some((
            "info.yml",
            "Description: Tool A\nVersion: \"1.0\"\nCreator: X\nEditor: http://e\n",
        )),
    );
    temp
}

const SAMPLE_README: &str = "# Releases  \n\
| Folder Name | Description | Version | Language | Creator |\n\
| ----------- | ----------- | ------- | -------- | ------- |\n\
| a | Tool A<br>[Web editor](http://e) | 1.0 |  | X |\n\
| b | Tool B | 2 | Go |  |\n";

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "release-readme failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

// ==========================================================================
// Default invocation
// ==========================================================================

#[test]
fn test_no_arguments_writes_releases_readme() {
    let temp = sample_workspace();

    let output = run_release_readme(temp.path(), &[]);
    assert_success(&output);

    let readme = fs::read_to_string(temp.path().join("releases/README.md")).unwrap();
    assert_eq!(readme, SAMPLE_README);
    assert!(String::from_utf8_lossy(&output.stdout).contains("2 releases"));
}

#[test]
fn test_existing_readme_is_overwritten() {
    let temp = sample_workspace();
    let readme_path = temp.path().join("releases/README.md");
    fs::write(&readme_path, "# Old title\n| stale | table |\n".repeat(20)).unwrap();

    let output = run_release_readme(temp.path(), &[]);
    assert_success(&output);
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), SAMPLE_README);
}

#[test]
fn test_missing_releases_dir_fails() {
    let temp = TempDir::new().unwrap();

    let output = run_release_readme(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_malformed_metadata_aborts_without_writing() {
    let temp = sample_workspace();
    let releases = temp.path().join("releases");
    create_release(&releases, "c", Some(("info.yaml", "Description: [unclosed")));
    fs::write(releases.join("README.md"), "previous\n").unwrap();

    let output = run_release_readme(temp.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("info.yaml"));
    assert_eq!(
        fs::read_to_string(releases.join("README.md")).unwrap(),
        "previous\n"
    );
}

// ==========================================================================
// Flags and config
// ==========================================================================

#[test]
fn test_custom_paths() {
    let temp = TempDir::new().unwrap();
    let dist = temp.path().join("dist");
    create_release(&dist, "only", Some(("meta.yaml", "Language: Rust\n")));

    let output = run_release_readme(temp.path(), &["-d", "dist", "-o", "INDEX.md"]);
    assert_success(&output);

    assert_eq!(
        fs::read_to_string(temp.path().join("INDEX.md")).unwrap(),
        "# Releases  \n| Folder Name | Language |\n| ----------- | -------- |\n| only | Rust |\n"
    );
    assert!(!dist.join("README.md").exists());
}

#[test]
fn test_config_file_sets_defaults() {
    let temp = TempDir::new().unwrap();
    create_release(&temp.path().join("dist"), "x", Some(("x.yaml", "Creator: Me\n")));
    fs::write(
        temp.path().join(".release-readme.toml"),
        "releases-dir = \"dist\"\noutput = \"RELEASES.md\"\n",
    )
    .unwrap();

    let output = run_release_readme(temp.path(), &[]);
    assert_success(&output);
    assert!(fs::read_to_string(temp.path().join("RELEASES.md"))
        .unwrap()
        .ends_with("| x | Me |\n"));
}

#[test]
fn test_stdout_does_not_write() {
    let temp = sample_workspace();

    let output = run_release_readme(temp.path(), &["--stdout"]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), SAMPLE_README);
    assert!(!temp.path().join("releases/README.md").exists());
}

// ==========================================================================
// Check mode
// ==========================================================================

#[test]
fn test_check_reports_stale_readme() {
    let temp = sample_workspace();
    let readme_path = temp.path().join("releases/README.md");
    fs::write(&readme_path, "outdated\n").unwrap();

    let output = run_release_readme(temp.path(), &["--check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("out of date"));
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), "outdated\n");
}

#[test]
fn test_check_passes_after_generate() {
    let temp = sample_workspace();

    assert_success(&run_release_readme(temp.path(), &[]));

    let output = run_release_readme(temp.path(), &["--check"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("up to date"));
}

#[test]
fn test_check_and_stdout_conflict() {
    let temp = sample_workspace();
    let output = run_release_readme(temp.path(), &["--check", "--stdout"]);
    assert!(!output.status.success());
}
