use crate::common::command::{run_udiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn labels_and_zero_context(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("before.txt"),
        "a\nb\nc\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("after.txt"),
        "a\nb\nx\ny\nc\n".to_string(),
    ));

    let output = run_udiff_command(
        workspace_dir.path(),
        &[
            "-U",
            "0",
            "--label-a",
            "left",
            "--label-b",
            "right",
            "before.txt",
            "after.txt",
        ],
    )
    .assert()
    .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(stdout, "--- left\n+++ right\n@@ -2,0 +3,2 @@\n+x\n+y\n");

    Ok(())
}

#[rstest]
fn single_label_keeps_the_other_path(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("before.txt"),
        "old\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("after.txt"),
        "new\n".to_string(),
    ));

    let output = run_udiff_command(
        workspace_dir.path(),
        &["--label-b", "proposed", "before.txt", "after.txt"],
    )
    .assert()
    .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(
        stdout,
        "--- before.txt\n+++ proposed\n@@ -1,1 +1,1 @@\n-old\n+new\n"
    );

    Ok(())
}
