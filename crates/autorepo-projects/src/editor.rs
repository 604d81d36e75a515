//! Editor process launching

use crate::error::{Error, Result};
use camino::Utf8Path;
use tokio::process::Command;
use tracing::{debug, info};

/// Launch the editor with the project path as its sole argument
///
/// Waits for the launched process to exit; its output and exit status are
/// not interpreted. Only a failure to start the process is an error.
pub async fn launch(editor: &str, project: &Utf8Path) -> Result<()> {
    info!("Launching editor: {} {}", editor, project);

    let status = Command::new(editor)
        .arg(project.as_str())
        .status()
        .await
        .map_err(|source| Error::EditorLaunch {
            editor: editor.to_string(),
            source,
        })?;

    debug!("Editor exited with status: {}", status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_launch_waits_for_exit() {
        let temp_dir = TempDir::new().unwrap();
        let project = Utf8Path::from_path(temp_dir.path()).unwrap();

        // Exit status is deliberately not interpreted
        launch("true", project).await.unwrap();
        launch("false", project).await.unwrap();
    }

    #[tokio::test]
    async fn test_launch_missing_executable() {
        let temp_dir = TempDir::new().unwrap();
        let project = Utf8Path::from_path(temp_dir.path()).unwrap();

        let result = launch("/nonexistent/editor", project).await;

        assert!(matches!(result, Err(Error::EditorLaunch { .. })));
    }
}
