use crate::common::command::{run_udiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file, write_generated_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn appended_lines_in_generated_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let original = write_generated_file(workspace_dir.path(), 12);
    let appended = "first added line\nsecond added line\n";
    write_file(FileSpec::new(
        workspace_dir.path().join("extended.txt"),
        format!("{}{appended}", original.content),
    ));
    let original_name = original
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or("generated file has no name")?;

    let output = run_udiff_command(workspace_dir.path(), &[original_name.as_str(), "extended.txt"])
        .assert()
        .code(1);

    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let context = original
        .content
        .lines()
        .skip(9)
        .map(|line| format!(" {line}\n"))
        .collect::<String>();
    let expected = format!(
        "--- {original_name}\n+++ extended.txt\n@@ -10,3 +10,5 @@\n{context}+first added line\n+second added line\n"
    );

    assert_eq!(stdout, expected);

    Ok(())
}
