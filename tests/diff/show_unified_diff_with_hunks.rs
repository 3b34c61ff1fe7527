use crate::common::command::{diff_hunks_output, run_udiff_command, workspace_dir_with_sources};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_unified_diff_with_hunks(
    workspace_dir_with_sources: TempDir,
    diff_hunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_udiff_command(workspace_dir_with_sources.path(), &["old.rs", "new.rs"])
        .assert()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let expected = format!("--- old.rs\n+++ new.rs\n{diff_hunks_output}");

    assert_eq!(stdout, expected);

    Ok(())
}

#[rstest]
fn wide_context_merges_hunks(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_udiff_command(
        workspace_dir_with_sources.path(),
        &["-U", "10", "old.rs", "new.rs"],
    )
    .assert()
    .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(stdout.matches("@@ -").count(), 1);
    assert!(stdout.contains("@@ -1,19 +1,18 @@\n"));

    Ok(())
}
