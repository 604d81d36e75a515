//! Git operations module
//!
//! Subprocess-backed operations against the `git` CLI:
//! - Repository initialization, staging, and committing
//! - Remote registration and pushing
//!
//! # Examples
//!
//! ## Initialize a repository and commit
//!
//! ```no_run
//! use autorepo_projects::git::{self, CommitOutcome, DEFAULT_BRANCH};
//! use camino::Utf8Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let path = Utf8Path::new("/tmp/my-project");
//! git::init_repository(path, DEFAULT_BRANCH).await?;
//! git::stage_all(path).await?;
//! match git::commit(path, "Initial commit").await? {
//!     CommitOutcome::Committed => {}
//!     CommitOutcome::NothingToCommit => println!("No changes to commit"),
//! }
//! # Ok(())
//! # }
//! ```

mod init;
mod remote;

// Re-export public API
pub use init::{
    commit, init_repository, stage_all, CommitOutcome, DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE,
};
pub use remote::{
    add_remote, get_current_branch, get_remote_url, push, remote_exists, ORIGIN_REMOTE,
};
