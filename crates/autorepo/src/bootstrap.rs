//! The bootstrap sequence
//!
//! Runs the four provisioning steps in order: project directory, version
//! control with a pushed initial commit, virtual environment, editor. The
//! first fatal error aborts the sequence; steps already completed are not
//! rolled back.

use anyhow::{Context, Result};
use autorepo_projects::git::{
    self, CommitOutcome, DEFAULT_BRANCH, INITIAL_COMMIT_MESSAGE, ORIGIN_REMOTE,
};
use autorepo_projects::github::GitHubClient;
use autorepo_projects::{editor, scaffold, venv, Settings};

use crate::cli::Cli;
use crate::output;

pub async fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    output::header("Bootstrap New Project");
    output::kv("Project name", &cli.repository_name);
    output::kv(
        "Parent directory",
        cli.repository_parent_directory.as_str(),
    );

    // Step 1: project directory
    let project =
        scaffold::create_project_dir(&cli.repository_parent_directory, &cli.repository_name)
            .context("Failed to create project directory")?;
    output::kv("Location", project.as_str());
    println!();

    // Step 2: local repository with a pushed initial commit
    output::info("Initializing git repository...");
    git::init_repository(&project, DEFAULT_BRANCH)
        .await
        .context("Failed to initialize git repository")?;

    scaffold::write_seed_readme(&project).context("Failed to write seed README")?;

    git::stage_all(&project)
        .await
        .context("Failed to stage files")?;
    match git::commit(&project, INITIAL_COMMIT_MESSAGE)
        .await
        .context("Failed to create initial commit")?
    {
        CommitOutcome::Committed => output::info("Initial commit created"),
        CommitOutcome::NothingToCommit => output::warning("No changes to commit"),
    }

    output::info("Creating GitHub repository...");
    let token = settings.require_github_token()?;
    let client = GitHubClient::new(token).context("Failed to build GitHub client")?;
    let user = client
        .authenticated_user()
        .await
        .context("GitHub authentication failed")?;
    output::kv("GitHub user", &user.login);

    let repo = client
        .create_repository(&cli.repository_name)
        .await
        .context("Failed to create GitHub repository")?;
    output::kv("Remote", &repo.html_url);

    git::add_remote(&project, ORIGIN_REMOTE, &repo.clone_url)
        .await
        .context("Failed to register origin remote")?;

    let branch = git::get_current_branch(&project)
        .await
        .context("Failed to resolve current branch")?;
    git::push(&project, ORIGIN_REMOTE, &branch)
        .await
        .context("Failed to push initial commit")?;

    // Step 3: isolated runtime environment
    output::info("Creating virtual environment...");
    let venv_path = venv::create_venv(&project, None)
        .await
        .context("Failed to create virtual environment")?;
    venv::write_gitignore(&project, venv::DEFAULT_VENV_DIR)
        .context("Failed to write .gitignore")?;
    output::kv("Virtual environment", venv_path.as_str());

    // Step 4: editor, awaited until it exits
    output::info("Opening editor...");
    let editor_path = settings.require_editor_path()?;
    editor::launch(editor_path, &project)
        .await
        .context("Failed to launch editor")?;

    output::success(&format!("Project ready at {}", project));
    Ok(())
}
