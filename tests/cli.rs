//! End-to-end tests for the term_extractor binary.

use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

fn run_with(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_term_extractor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run term_extractor")
}

fn html_fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_argument_prints_usage() {
    let output = run_with(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage:"), "stdout: {}", stdout);
}

#[test]
fn test_nonexistent_file_prints_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.html");
    let output = run_with(&[missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("not found"), "stdout: {}", stdout);
    assert!(stdout.contains("nope.html"));
}

#[test]
fn test_document_without_terms() {
    let file = html_fixture("<html><body><p>Nothing to see.</p></body></html>");
    let output = run_with(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "=== Term Extraction ===\n\nFound 0 unique terms:\n\n");
}

#[test]
fn test_full_report() {
    let file = html_fixture(
        r#"<html><body>
        <section id="ch3-intro">
          <p><strong>Scene</strong>: A unit of play.</p>
          <p><b>Clock</b>: A progress tracker.</p>
        </section>
        </body></html>"#,
    );
    let output = run_with(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = "=== Term Extraction ===\n\n\
                    Found 2 unique terms:\n\n\
                    **Clock**\n  - Chapter: ch3-intro\n    Definition: A progress tracker....\n\n\
                    **Scene**\n  - Chapter: ch3-intro\n    Definition: A unit of play....\n\n";
    assert_eq!(stdout, expected);
}

#[test]
fn test_path_starting_with_hyphen_is_read() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("-x.html"), "<b>Dash</b>: Still a path.").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_term_extractor"))
        .arg("-x.html")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run term_extractor");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 1 unique terms:"), "stdout: {}", stdout);
    assert!(stdout.contains("**Dash**"));
}

#[test]
fn test_invalid_utf8_fails_without_report() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0x3c, 0x62, 0x3e, 0xff, 0xfe, 0x3c]).unwrap();
    let output = run_with(&[file.path().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
