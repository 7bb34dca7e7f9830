// src/github/client.rs
// =============================================================================
// Talks to the GitHub REST API.
//
// Two pieces:
// - GithubClient: one per process, built from Config (token, base URL,
//   timeout). Opens repositories.
// - RepoHandle: one per repository, returned by GithubClient::open. It
//   implements RepoContents, the only thing the pipeline needs.
//
// RepoContents is a trait so the tree lister and aggregator can be tested
// against a mock instead of the network.
//
// Endpoints used:
//   GET /repos/{owner}/{repo}                   does the repo exist?
//   GET /repos/{owner}/{repo}/contents/{path}   one directory level, or one file
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::form_urlencoded::byte_serialize;

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::error::{ClientError, RepositoryAccessError};
use crate::github::RepositoryRef;

const USER_AGENT: &str = concat!("repo-scraper/", env!("CARGO_PKG_VERSION"));

/// What kind of thing a contents entry is.
///
/// Mirrors the "type" field of the Contents API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RawKind {
    File,
    Dir,
    Symlink,
    Submodule,
}

/// One entry as returned by the Contents API.
///
/// `content` and `encoding` are only present when a single file was
/// requested, never inside a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: RawKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Response of a contents request.
///
/// A directory answers with an array, a file with a single object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Directory(Vec<RawEntry>),
    Single(RawEntry),
}

/// The repository-handle seam used by the whole pipeline.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RepoContents: Send + Sync {
    /// Fetch the contents at `path` ("" is the repository root).
    async fn get_contents(&self, path: &str) -> Result<Contents, ClientError>;
}

/// Builds authenticated requests against one API host.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        match &config.github_token {
            Some(token) => {
                let bearer = format!("Bearer {}", token.expose_secret());
                let mut value = HeaderValue::from_str(&bearer)
                    .map_err(|e| ClientError::Build(format!("invalid token: {}", e)))?;
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            None => {
                warn!("GITHUB_TOKEN not set, using unauthenticated requests (low rate limit)");
            }
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check the repository is reachable and return a handle to it.
    ///
    /// `reference` is a branch, tag or commit; None means the default branch.
    pub async fn open(
        &self,
        repo: &RepositoryRef,
        reference: Option<String>,
    ) -> Result<RepoHandle, RepositoryAccessError> {
        let url = format!("{}/repos/{}/{}", self.api_url, repo.owner(), repo.name());
        debug!(%url, "opening repository");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryAccessError::Request(ClientError::Http(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(access_error(status, repo, url));
        }

        Ok(RepoHandle {
            http: self.http.clone(),
            api_url: self.api_url.clone(),
            repo: repo.clone(),
            reference,
        })
    }
}

// Maps a failed GET /repos/{owner}/{repo} to the error shown to the user
fn access_error(status: StatusCode, repo: &RepositoryRef, url: String) -> RepositoryAccessError {
    match status {
        StatusCode::NOT_FOUND => RepositoryAccessError::NotFound {
            owner: repo.owner().to_string(),
            name: repo.name().to_string(),
        },
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => RepositoryAccessError::Unauthorized {
            owner: repo.owner().to_string(),
            name: repo.name().to_string(),
            status: status.as_u16(),
        },
        status => RepositoryAccessError::Request(ClientError::Status {
            status: status.as_u16(),
            url,
        }),
    }
}

/// A reachable repository. Cheap to clone; shares the connection pool.
#[derive(Debug, Clone)]
pub struct RepoHandle {
    http: Client,
    api_url: String,
    repo: RepositoryRef,
    reference: Option<String>,
}

impl RepoHandle {
    fn contents_request(&self, path: &str) -> RequestBuilder {
        let request = self.http.get(contents_url(&self.api_url, &self.repo, path));
        match &self.reference {
            Some(reference) => request.query(&[("ref", reference.as_str())]),
            None => request,
        }
    }
}

#[async_trait]
impl RepoContents for RepoHandle {
    async fn get_contents(&self, path: &str) -> Result<Contents, ClientError> {
        let response = self.contents_request(path).send().await?;
        let url = response.url().to_string();
        debug!(%url, "fetched contents");

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// Builds /repos/{owner}/{repo}/contents/{path}
//
// Each path segment is percent-encoded on its own so '/' stays a separator.
fn contents_url(api_url: &str, repo: &RepositoryRef, path: &str) -> String {
    let mut url = format!("{}/repos/{}/{}/contents", api_url, repo.owner(), repo.name());
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let encoded: String = byte_serialize(segment.as_bytes()).collect();
        url.push('/');
        // form encoding turns spaces into '+', paths want %20
        url.push_str(&encoded.replace('+', "%20"));
    }
    url
}
