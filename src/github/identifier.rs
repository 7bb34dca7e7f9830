// src/github/identifier.rs
// =============================================================================
// Turns whatever the user typed into a validated (owner, repository) pair.
//
// Supported formats:
//   - https://github.com/owner/repo   (any host, http or https)
//   - github.com/owner/repo           (bare host, recognised by the '.')
//   - owner/repo
//
// Only the first two path segments matter. Anything after them
// (e.g. /tree/main/src) is ignored, not rejected.
//
// No network access happens here.
// =============================================================================

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::IdentifierError;

/// A repository on the hosting service, e.g. `rust-lang/rust`.
///
/// Both parts are guaranteed non-empty and free of '/'.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RepositoryRef {
    owner: String,
    name: String,
}

impl RepositoryRef {
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl std::str::FromStr for RepositoryRef {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

// Parses a repository identifier
//
// Example:
//   "https://github.com/rust-lang/rust/tree/master" -> rust-lang/rust
pub fn parse(input: &str) -> Result<RepositoryRef, IdentifierError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(IdentifierError::invalid("Please enter a GitHub URL"));
    }

    let path = strip_host(input)?;

    // Split what's left by '/' to get owner and repo
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    if parts.len() < 2 {
        return Err(IdentifierError::invalid(
            "Expected format: username/repository",
        ));
    }

    let owner = parts[0];
    // Remove .git suffix if present
    let name = parts[1].strip_suffix(".git").unwrap_or(parts[1]);

    if owner.is_empty() || name.is_empty() {
        return Err(IdentifierError::invalid(
            "Both username and repository name are required",
        ));
    }

    Ok(RepositoryRef {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

// Returns the path part of the identifier, host removed
fn strip_host(input: &str) -> Result<String, IdentifierError> {
    if input.starts_with("https://") || input.starts_with("http://") {
        let url = Url::parse(input)
            .map_err(|e| IdentifierError::invalid(format!("'{}': {}", input, e)))?;
        if url.host_str().is_none() {
            return Err(IdentifierError::invalid(format!("'{}' has no host", input)));
        }
        return Ok(url.path().to_string());
    }

    // Bare "host/owner/repo": owners can't contain dots, hosts always do
    let trimmed = input.trim_start_matches('/');
    match trimmed.split_once('/') {
        Some((first, rest)) if first.contains('.') => Ok(rest.to_string()),
        _ => Ok(trimmed.to_string()),
    }
}
