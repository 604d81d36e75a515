//! Runtime settings loaded from the process environment
//!
//! Values come from the shell environment, optionally seeded from a `.env`
//! file in the working directory. Settings are captured once at startup and
//! passed by parameter into each step; presence is only enforced when a step
//! actually needs the value.

use crate::error::{Error, Result};
use tracing::debug;

/// Environment variable holding the GitHub personal access token.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_PAT";

/// Environment variable holding the path to the editor executable.
pub const EDITOR_VAR: &str = "VSCODE_LOCATION";

/// Configuration values read from the environment
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Personal access token for the GitHub API
    pub github_token: Option<String>,

    /// Path to the editor executable
    pub editor_path: Option<String>,
}

impl Settings {
    /// Load settings, seeding the environment from `.env` if one exists
    pub fn load() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            debug!("Loaded environment from: {}", path.display());
        }
        Self::from_env()
    }

    /// Capture settings from the current process environment
    pub fn from_env() -> Self {
        Self {
            github_token: std::env::var(GITHUB_TOKEN_VAR).ok(),
            editor_path: std::env::var(EDITOR_VAR).ok(),
        }
    }

    /// GitHub token, required for repository creation
    pub fn require_github_token(&self) -> Result<&str> {
        self.github_token
            .as_deref()
            .ok_or_else(|| Error::missing_config(GITHUB_TOKEN_VAR))
    }

    /// Editor executable path, required for the launch step
    pub fn require_editor_path(&self) -> Result<&str> {
        self.editor_path
            .as_deref()
            .ok_or_else(|| Error::missing_config(EDITOR_VAR))
    }
}
