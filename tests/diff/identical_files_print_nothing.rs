use crate::common::command::{file_a, run_udiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn identical_files_print_nothing(workspace_dir: TempDir, file_a: String) {
    write_file(FileSpec::new(workspace_dir.path().join("1.txt"), file_a.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("2.txt"), file_a));

    run_udiff_command(workspace_dir.path(), &["1.txt", "2.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn empty_files_are_identical(workspace_dir: TempDir) {
    write_file(FileSpec::new(workspace_dir.path().join("1.txt"), String::new()));
    write_file(FileSpec::new(workspace_dir.path().join("2.txt"), String::new()));

    run_udiff_command(workspace_dir.path(), &["1.txt", "2.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
