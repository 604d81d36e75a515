//! Repository initialization operations

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Branch name used when initializing a new repository.
pub const DEFAULT_BRANCH: &str = "main";

/// Commit message for the seeded initial commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Outcome of a commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created
    Committed,
    /// The index matched HEAD and no commit was created
    NothingToCommit,
}

/// Initialize a new git repository
///
/// # Arguments
/// * `path` - Existing directory to initialize
/// * `default_branch` - Name of the initial branch
///
/// # Errors
/// Returns error if git is not installed or `git init` fails.
pub async fn init_repository(path: &Utf8Path, default_branch: &str) -> Result<()> {
    info!("Initializing git repository at: {}", path);

    check_git_available().await?;

    let output = Command::new("git")
        .current_dir(path)
        .args(["init", "--initial-branch", default_branch])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git init failed: {}", stderr)));
    }

    info!("Repository initialized on branch '{}'", default_branch);
    Ok(())
}

/// Stage every file in the working tree
pub async fn stage_all(path: &Utf8Path) -> Result<()> {
    debug!("Staging all files");

    let output = Command::new("git")
        .current_dir(path)
        .args(["add", "--all"])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!("git add failed: {}", stderr)));
    }

    Ok(())
}

/// Commit staged changes
///
/// A clean index is reported as [`CommitOutcome::NothingToCommit`] so the
/// caller can decide to continue; every other failure is an error.
pub async fn commit(path: &Utf8Path, message: &str) -> Result<CommitOutcome> {
    debug!("Committing with message: {}", message);

    let output = Command::new("git")
        .current_dir(path)
        .args(["commit", "-m", message])
        .output()
        .await?;

    if output.status.success() {
        info!("Commit created");
        return Ok(CommitOutcome::Committed);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
        debug!("Index matches HEAD, nothing committed");
        return Ok(CommitOutcome::NothingToCommit);
    }

    Err(Error::git_operation(format!(
        "git commit failed: {} {}",
        stdout.trim(),
        stderr.trim()
    )))
}

/// Check if git is available in PATH
async fn check_git_available() -> Result<()> {
    let output = Command::new("git")
        .arg("--version")
        .output()
        .await
        .map_err(|_| Error::GitNotFound)?;

    if !output.status.success() {
        return Err(Error::GitNotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn configure_identity(path: &Utf8Path) {
        for (key, value) in [("user.name", "Test User"), ("user.email", "test@example.com")] {
            let status = Command::new("git")
                .current_dir(path)
                .args(["config", key, value])
                .status()
                .await
                .unwrap();
            assert!(status.success());
        }
    }

    #[tokio::test]
    async fn test_init_repository() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();

        let result = init_repository(path, DEFAULT_BRANCH).await;

        assert!(result.is_ok());
        assert!(path.join(".git").exists());
    }

    #[tokio::test]
    async fn test_commit_seeded_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();

        init_repository(path, DEFAULT_BRANCH).await.unwrap();
        configure_identity(path).await;
        std::fs::write(path.join("README.md"), "New Project").unwrap();
        stage_all(path).await.unwrap();

        let outcome = commit(path, INITIAL_COMMIT_MESSAGE).await.unwrap();

        assert_eq!(outcome, CommitOutcome::Committed);
    }

    #[tokio::test]
    async fn test_commit_clean_tree_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp_dir.path()).unwrap();

        init_repository(path, DEFAULT_BRANCH).await.unwrap();
        configure_identity(path).await;
        std::fs::write(path.join("README.md"), "New Project").unwrap();
        stage_all(path).await.unwrap();
        commit(path, INITIAL_COMMIT_MESSAGE).await.unwrap();

        // Nothing changed since the first commit
        stage_all(path).await.unwrap();
        let outcome = commit(path, "Second commit").await.unwrap();

        assert_eq!(outcome, CommitOutcome::NothingToCommit);
    }
}
