use crate::common::command::{run_udiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn compare_against_standard_input(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("list.txt"),
        "1\n2\n3\n4\n5\n".to_string(),
    ));

    let output = run_udiff_command(workspace_dir.path(), &["-U", "1", "list.txt", "-"])
        .write_stdin("1\n2\n4\n5\n")
        .assert()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(stdout, "--- list.txt\n+++ -\n@@ -2,3 +2,2 @@\n 2\n-3\n 4\n");

    Ok(())
}
