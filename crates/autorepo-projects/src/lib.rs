//! # autorepo-projects
//!
//! Project bootstrap library for the auto-repo CLI providing:
//! - Project directory scaffolding and the seed README
//! - Git operations (init, staging, commit, remotes, push)
//! - GitHub repository creation over the REST API
//! - Python virtual environment provisioning
//! - Editor process launching
//!
//! Every operation is an ordinary `Result`-returning function; the CLI owns
//! the single top-level handler that logs failures and sets the exit code.
//!
//! # Examples
//!
//! ## Scaffold a project directory and virtual environment
//!
//! ```no_run
//! use autorepo_projects::{scaffold, venv};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let parent = Utf8Path::new("/tmp");
//! let project = scaffold::create_project_dir(parent, "my-project")?;
//! let venv_path = venv::create_venv(&project, None).await?;
//! venv::write_gitignore(&project, venv::DEFAULT_VENV_DIR)?;
//! # Ok(())
//! # }
//! ```

pub mod editor;
pub mod error;
pub mod git;
pub mod github;
pub mod scaffold;
pub mod settings;
pub mod venv;

pub use error::{Error, Result};
pub use settings::Settings;
