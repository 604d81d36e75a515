//! Error types for autorepo-projects

use thiserror::Error;

/// Result type alias using autorepo-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project bootstrap error types
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid project name
    #[error("Invalid project name: {name}. Must be a single path segment")]
    InvalidProjectName { name: String },

    /// Project directory creation failed
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: String,
        source: std::io::Error,
    },

    /// Git operation failed
    #[error("Git operation failed: {message}")]
    GitOperation { message: String },

    /// Git command not found
    #[error("Git command not found. Please ensure git is installed and in PATH")]
    GitNotFound,

    /// Remote already exists
    #[error("Remote '{remote}' already exists")]
    RemoteExists { remote: String },

    /// GitHub rejected the supplied credentials
    #[error("GitHub authentication failed: {message}")]
    GitHubAuth { message: String },

    /// GitHub API call failed
    #[error("GitHub API request failed ({status}): {message}")]
    GitHubApi { status: u16, message: String },

    /// Python interpreter not found
    #[error("Python interpreter not found. Please ensure python3 is installed and in PATH")]
    PythonNotFound,

    /// Virtual environment creation failed
    #[error("Failed to create virtual environment: {message}")]
    VenvCreation { message: String },

    /// Editor process could not be started
    #[error("Failed to launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },

    /// Required configuration value missing
    #[error("Required environment variable {variable} is not set")]
    MissingConfig { variable: String },

    /// HTTP error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid project name error
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName { name: name.into() }
    }

    /// Create a git operation error
    pub fn git_operation(message: impl Into<String>) -> Self {
        Self::GitOperation {
            message: message.into(),
        }
    }

    /// Create a remote exists error
    pub fn remote_exists(remote: impl Into<String>) -> Self {
        Self::RemoteExists {
            remote: remote.into(),
        }
    }

    /// Create a GitHub authentication error
    pub fn github_auth(message: impl Into<String>) -> Self {
        Self::GitHubAuth {
            message: message.into(),
        }
    }

    /// Create a venv creation error
    pub fn venv_creation(message: impl Into<String>) -> Self {
        Self::VenvCreation {
            message: message.into(),
        }
    }

    /// Create a missing configuration error
    pub fn missing_config(variable: impl Into<String>) -> Self {
        Self::MissingConfig {
            variable: variable.into(),
        }
    }
}
