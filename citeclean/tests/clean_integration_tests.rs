// citeclean/tests/clean_integration_tests.rs
//! End-to-end tests for the `clean` command: single-document cleaning from
//! stdin or a file, with the status line derived from the match check.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;

fn citeclean_cmd() -> Command {
    Command::new(assert_cmd::cargo_bin!("citeclean"))
}

#[test]
fn clean_strips_markers_from_stdin() -> Result<()> {
    citeclean_cmd()
        .arg("clean")
        .write_stdin("A[cite_start]B[cite: p.12]C")
        .assert()
        .success()
        .stdout("ABC")
        .stderr(predicate::str::contains("Cite markers removed."));
    Ok(())
}

#[test]
fn clean_passes_marker_free_input_through() -> Result<()> {
    let input = "plain text with [brackets] but no markers\n";
    citeclean_cmd()
        .arg("clean")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input)
        .stderr(predicate::str::contains("No cite markers found."));
    Ok(())
}

#[test]
fn clean_leaves_unterminated_marker_alone() -> Result<()> {
    let input = "[cite:unterminated no closing bracket";
    citeclean_cmd()
        .arg("clean")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(input)
        .stderr(predicate::str::contains("No cite markers found."));
    Ok(())
}

#[test]
fn clean_reads_file_and_writes_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input_path = dir.path().join("in.md");
    let output_path = dir.path().join("out.md");
    std::fs::write(&input_path, "x [cite: 4, pp. 1-2] y [cite_start]z")?;

    citeclean_cmd()
        .arg("clean")
        .arg("-i")
        .arg(&input_path)
        .arg("-o")
        .arg(&output_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Cite markers removed."));

    assert_eq!(std::fs::read_to_string(&output_path)?, "x  y z");
    // The single-document path never rewrites the input in place.
    assert_eq!(
        std::fs::read_to_string(&input_path)?,
        "x [cite: 4, pp. 1-2] y [cite_start]z"
    );
    assert!(!dir.path().join("in.md.bak").exists());
    Ok(())
}

#[test]
fn clean_fails_on_missing_input_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    citeclean_cmd()
        .arg("clean")
        .arg("-i")
        .arg(dir.path().join("does-not-exist.md"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
    Ok(())
}

#[test]
fn quiet_suppresses_status_lines() -> Result<()> {
    citeclean_cmd()
        .arg("-q")
        .arg("clean")
        .write_stdin("a [cite: 1] b")
        .assert()
        .success()
        .stdout("a  b")
        .stderr(predicate::str::is_empty());
    Ok(())
}
