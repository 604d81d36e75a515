//! Project directory scaffolding
//!
//! Creates the project directory under its parent and seeds the placeholder
//! README that guarantees the initial commit has content.

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::io::ErrorKind;
use tracing::{info, warn};

/// Contents of the seed README committed into every new project.
pub const README_CONTENTS: &str = "New Project";

/// Create the project directory
///
/// # Arguments
/// * `parent` - Existing directory the project directory is created under
/// * `name` - Project name, used as the directory name
///
/// # Returns
/// The path of the project directory. A directory that already exists is
/// reused: a warning is logged and the existing path returned.
///
/// # Errors
/// Returns error if the name is not a valid path segment or the directory
/// cannot be created for any reason other than already existing.
pub fn create_project_dir(parent: &Utf8Path, name: &str) -> Result<Utf8PathBuf> {
    validate_project_name(name)?;

    let path = parent.join(name);

    match std::fs::create_dir(&path) {
        Ok(()) => {
            info!("Created project directory: {}", path);
            Ok(path)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!("Directory {} already exists, reusing it", path);
            Ok(path)
        }
        Err(source) => Err(Error::CreateDirectory {
            path: path.to_string(),
            source,
        }),
    }
}

/// Write the placeholder README, overwriting any existing file
pub fn write_seed_readme(project: &Utf8Path) -> Result<Utf8PathBuf> {
    let readme = project.join("README.md");
    std::fs::write(&readme, README_CONTENTS)?;
    info!("Seeded {}", readme);
    Ok(readme)
}

/// Reject names that would escape the parent directory
fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(Error::invalid_project_name(name));
    }
    Ok(())
}
