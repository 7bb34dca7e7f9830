// src/error.rs
// =============================================================================
// Every error the scraping pipeline can produce, in one place.
//
// Two families:
// - Fatal to the action: IdentifierError, RepositoryAccessError, ConfigError.
//   main.rs reports these and exits with code 2.
// - Contained to one path: ListingError, FetchError. These are logged as
//   warnings and the rest of the batch keeps going.
//
// Rust concepts:
// - thiserror: derive Display and Error for enums instead of writing them
// - #[from] / #[source]: chain the underlying cause
// =============================================================================

use thiserror::Error;

/// The user typed something we can't turn into owner/repo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Invalid GitHub URL: {reason}")]
    InvalidIdentifier { reason: String },
}

impl IdentifierError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        IdentifierError::InvalidIdentifier {
            reason: reason.into(),
        }
    }
}

/// Low-level failures from the GitHub REST client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network, TLS, timeout, or body-read failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The API answered 2xx but the body wasn't what we expected
    #[error("unexpected response body: {0}")]
    Body(#[from] serde_json::Error),

    /// Could not build the client (bad header value, TLS backend, ...)
    #[error("could not build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// HTTP status code, when the failure was a status failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// The repository itself could not be opened. Aborts the whole action.
#[derive(Debug, Error)]
pub enum RepositoryAccessError {
    #[error(
        "Repository not found: {owner}/{name}. Please check:\n\
         1. The repository exists\n\
         2. The repository is public\n\
         3. You have the correct permissions"
    )]
    NotFound { owner: String, name: String },

    #[error("Not authorized to access {owner}/{name} (HTTP {status}). Check GITHUB_TOKEN")]
    Unauthorized {
        owner: String,
        name: String,
        status: u16,
    },

    #[error("Error accessing repository: {0}")]
    Request(#[source] ClientError),
}

/// One directory failed to list. The rest of the traversal continues.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("Error accessing path '{path}': {source}")]
    Request {
        path: String,
        #[source]
        source: ClientError,
    },

    #[error("Error accessing path '{path}': it is a file, not a directory")]
    NotADirectory { path: String },
}

impl ListingError {
    pub fn path(&self) -> &str {
        match self {
            ListingError::Request { path, .. } | ListingError::NotADirectory { path } => path,
        }
    }

    /// HTTP status code of the failed listing call, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ListingError::Request { source, .. } => source.status(),
            ListingError::NotADirectory { .. } => None,
        }
    }
}

/// One file failed to fetch or decode. Aggregation skips it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not retrieve {path}: {source}")]
    Request {
        path: String,
        #[source]
        source: ClientError,
    },

    #[error("{path} is not a file with inline content")]
    NotAFile { path: String },

    #[error("could not decode transport encoding of {path}: {reason}")]
    Encoding { path: String, reason: String },

    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl FetchError {
    pub fn path(&self) -> &str {
        match self {
            FetchError::Request { path, .. }
            | FetchError::NotAFile { path }
            | FetchError::Encoding { path, .. }
            | FetchError::Decode { path, .. } => path,
        }
    }
}

/// Bad environment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
