//! GitHub API client for repository creation
//!
//! Thin wrapper over the two REST endpoints the bootstrap flow needs:
//! fetching the authenticated user and creating a repository under that
//! user's account. Timeouts are left to the HTTP client's defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("auto-repo/", env!("CARGO_PKG_VERSION"));
const ACCEPT_HEADER: &str = "application/vnd.github+json";

/// The authenticated user
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Account login name
    pub login: String,
}

/// A repository as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name
    pub name: String,

    /// Web URL of the repository
    pub html_url: String,

    /// HTTPS clone URL
    pub clone_url: String,

    /// Default branch configured on the hosted side
    pub default_branch: Option<String>,
}

/// Error body returned by the GitHub API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
}

/// Authenticated GitHub API client
pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_api_url(token, DEFAULT_API_URL)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_url(token: impl Into<String>, api_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// Fetch the authenticated user
    pub async fn authenticated_user(&self) -> Result<User> {
        let url = format!("{}/user", self.api_url);
        debug!("Fetching authenticated user from: {}", url);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .send()
            .await?;

        let user: User = check_response(response).await?.json().await?;
        info!("Authenticated as: {}", user.login);
        Ok(user)
    }

    /// Create a repository under the authenticated user's account
    pub async fn create_repository(&self, name: &str) -> Result<Repository> {
        let url = format!("{}/user/repos", self.api_url);
        info!("Creating repository '{}'", name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", ACCEPT_HEADER)
            .json(&CreateRepoRequest { name })
            .send()
            .await?;

        let repo: Repository = check_response(response).await?.json().await?;
        info!("Repository created: {}", repo.html_url);
        Ok(repo)
    }
}

/// Map non-success responses to structured errors
async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.to_string(),
    };

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(Error::github_auth(message));
    }

    Err(Error::GitHubApi {
        status: status.as_u16(),
        message,
    })
}
