#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Helper to create a test git repository whose branch is `main`
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init"]);
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "commit.gpgsign", "false"]);

    (temp_dir, repo_path)
}

/// Helper to write a file relative to the repository root
pub fn write_file(repo_path: &Path, file: &str, content: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
}

/// Helper to stage a file
pub fn stage(repo_path: &Path, file: &str) {
    git(repo_path, &["add", file]);
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    write_file(repo_path, file, content);
    stage(repo_path, file);
    git(repo_path, &["commit", "-m", message]);
}

/// Helper to switch to a new branch
pub fn checkout_new_branch(repo_path: &Path, branch: &str) {
    git(repo_path, &["checkout", "-b", branch]);
}

/// Helper to detach HEAD at the current commit
pub fn detach_head(repo_path: &Path) {
    git(repo_path, &["checkout", "--detach"]);
}

/// Helper to remove a tracked file from the working tree only
pub fn delete_file(repo_path: &Path, file: &str) {
    fs::remove_file(repo_path.join(file)).expect("Failed to delete file");
}
