use crate::common::command::{run_udiff_command, workspace_dir_with_sources};
use assert_fs::TempDir;
use rstest::rstest;

const RESET: &str = "\x1b[0m";

#[rstest]
fn color_always_closes_every_group(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_udiff_command(
        workspace_dir_with_sources.path(),
        &["--color", "always", "old.rs", "new.rs"],
    )
    .assert()
    .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let opened = ["\x1b[1m", "\x1b[36m", "\x1b[31m", "\x1b[32m"]
        .iter()
        .map(|escape| stdout.matches(escape).count())
        .sum::<usize>();

    assert!(stdout.starts_with(
        "\x1b[1m--- old.rs\n+++ new.rs\n\x1b[0m\x1b[36m@@ -1,9 +1,6 @@\n\x1b[0m"
    ));
    assert!(stdout.contains("\x1b[31m-    for i in 0..1000000000 {\n"));
    assert!(stdout.contains("\x1b[32m+    if let Err(e) = tx.join() {\n"));
    assert_eq!(stdout.matches(RESET).count(), opened);
    assert!(stdout.ends_with("\n }\n"));

    Ok(())
}

#[rstest]
fn piped_output_is_plain_by_default(
    workspace_dir_with_sources: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = run_udiff_command(workspace_dir_with_sources.path(), &["old.rs", "new.rs"])
        .assert()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(!stdout.contains('\x1b'));

    Ok(())
}
