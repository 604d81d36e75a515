//! Virtual environment provisioning
//!
//! Creates an isolated Python environment inside the project directory and
//! writes the ignore rule that keeps it out of version control.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info};

/// Conventional name for the environment directory.
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Create a virtual environment inside the project directory
///
/// # Arguments
/// * `project` - Project directory the environment is created under
/// * `name` - Directory name override; defaults to `.venv`
///
/// # Returns
/// The path of the environment directory.
///
/// # Errors
/// Returns error if no Python interpreter is on PATH or the bootstrapper
/// fails. No partial-state cleanup is performed.
pub async fn create_venv(project: &Utf8Path, name: Option<&str>) -> Result<Utf8PathBuf> {
    let name = name.unwrap_or(DEFAULT_VENV_DIR);
    let venv_path = project.join(name);
    info!("Creating virtual environment at: {}", venv_path);

    let python = find_python()?;
    debug!("Using interpreter: {}", python.display());

    let output = Command::new(python)
        .args(["-m", "venv", venv_path.as_str()])
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::venv_creation(stderr.trim().to_string()));
    }

    info!("Virtual environment created");
    Ok(venv_path)
}

/// Write the ignore-rule file naming the environment directory
///
/// Overwrites any existing `.gitignore` in the project directory.
pub fn write_gitignore(project: &Utf8Path, venv_name: &str) -> Result<Utf8PathBuf> {
    let gitignore = project.join(".gitignore");
    std::fs::write(&gitignore, format!("{}\n", venv_name))?;
    debug!("Wrote ignore file: {}", gitignore);
    Ok(gitignore)
}

/// Locate a Python interpreter on PATH
fn find_python() -> Result<PathBuf> {
    which::which("python3")
        .or_else(|_| which::which("python"))
        .map_err(|_| Error::PythonNotFound)
}
