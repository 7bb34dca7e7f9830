// src/github/mod.rs
// =============================================================================
// Everything that knows about GitHub.
//
// Submodules:
// - identifier: "https://github.com/owner/repo" -> RepositoryRef
// - client: REST client, repository handles, and the RepoContents trait
//
// The rest of the app only sees RepoContents, so it never depends on
// reqwest directly.
// =============================================================================

mod client;
mod identifier;

pub use client::{Contents, GithubClient, RawEntry, RawKind, RepoContents, RepoHandle};
pub use identifier::{parse, RepositoryRef};

#[cfg(test)]
pub use client::MockRepoContents;
