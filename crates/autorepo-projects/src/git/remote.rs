//! Git remote management and push operations

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Conventional name for the primary remote.
pub const ORIGIN_REMOTE: &str = "origin";

/// Add a remote to a repository
///
/// # Arguments
/// * `path` - Repository path
/// * `name` - Remote name (e.g., "origin")
/// * `url` - Remote URL
///
/// # Errors
/// Returns error if the remote already exists or the git command fails.
pub async fn add_remote(path: &Utf8Path, name: &str, url: &str) -> Result<()> {
    info!("Adding remote '{}': {}", name, url);

    if remote_exists(path, name).await? {
        return Err(Error::remote_exists(name));
    }

    let output = Command::new("git")
        .current_dir(path)
        .args(["remote", "add", name, url])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "Failed to add remote '{}': {}",
            name, stderr
        )));
    }

    Ok(())
}

/// Get the URL of a remote, or None if it is not configured
pub async fn get_remote_url(path: &Utf8Path, name: &str) -> Result<Option<String>> {
    debug!("Getting URL for remote: {}", name);

    let output = Command::new("git")
        .current_dir(path)
        .args(["remote", "get-url", name])
        .output()
        .await?;

    if !output.status.success() {
        // Remote doesn't exist
        return Ok(None);
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();

    Ok(Some(url))
}

/// Check if a remote exists
pub async fn remote_exists(path: &Utf8Path, name: &str) -> Result<bool> {
    let url = get_remote_url(path, name).await?;
    Ok(url.is_some())
}

/// Get the currently checked out branch
pub async fn get_current_branch(path: &Utf8Path) -> Result<String> {
    let output = Command::new("git")
        .current_dir(path)
        .args(["branch", "--show-current"])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "Failed to get current branch: {}",
            stderr
        )));
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();

    Ok(branch)
}

/// Push a branch to a remote, setting it as upstream
///
/// No retry is attempted; a failed push leaves the local commit and any
/// already-created remote repository in place.
pub async fn push(path: &Utf8Path, remote: &str, branch: &str) -> Result<()> {
    info!("Pushing '{}' to remote '{}'", branch, remote);

    let output = Command::new("git")
        .current_dir(path)
        .args(["push", "--set-upstream", remote, branch])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::git_operation(format!(
            "git push failed: {}",
            stderr
        )));
    }

    info!("Pushed '{}' to '{}'", branch, remote);
    Ok(())
}
