use crate::common::command::{run_udiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_file_fails(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("present.txt"),
        "one\n".to_string(),
    ));

    run_udiff_command(workspace_dir.path(), &["present.txt", "absent.txt"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("absent.txt"));
}

#[rstest]
#[case(&["-U", "-1", "a.txt", "b.txt"])]
#[case(&["--color", "sometimes", "a.txt", "b.txt"])]
#[case(&["a.txt"])]
#[case(&["--label-a", "left\nside", "a.txt", "b.txt"])]
#[case(&["--label-b", "right\r", "a.txt", "b.txt"])]
fn usage_errors_are_rejected(workspace_dir: TempDir, #[case] args: &[&str]) {
    run_udiff_command(workspace_dir.path(), args)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn standard_input_on_both_sides_fails(workspace_dir: TempDir) {
    run_udiff_command(workspace_dir.path(), &["-", "-"])
        .write_stdin("one\n")
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Standard input"));
}
