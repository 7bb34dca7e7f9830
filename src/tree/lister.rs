// src/tree/lister.rs
// =============================================================================
// Lists ONE level of a repository directory.
//
// Rules:
// - Directories are always kept
// - Files are kept only if the extension filter allows their name
// - Symlinks and submodules are dropped
// - Output order: directories first, then files, each group by full path
//
// A file path is not a directory and is reported as a failed listing.
// A failed listing is not fatal. The caller gets an empty Listing with the
// error attached, and can carry on with other directories.
// =============================================================================

use serde::Serialize;
use tracing::{debug, error};

use crate::error::ListingError;
use crate::github::{Contents, RawEntry, RawKind, RepoContents};
use crate::tree::ExtensionFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One visible entry in the repository tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEntry {
    /// Repository-relative, slash-separated (e.g. "src/main.py")
    pub path: String,
    /// Last path component (e.g. "main.py")
    pub name: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Result of listing one directory.
#[derive(Debug)]
pub struct Listing {
    /// The directory that was listed ("" for the root)
    pub path: String,
    pub entries: Vec<TreeEntry>,
    /// Set when the listing call failed; `entries` is then empty
    pub error: Option<ListingError>,
}

impl Listing {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// List the immediate children of `path`.
pub async fn list<R>(repo: &R, path: &str, filter: &ExtensionFilter) -> Listing
where
    R: RepoContents + ?Sized,
{
    let result = match repo.get_contents(path).await {
        Ok(Contents::Directory(raw)) => Ok(to_entries(raw, filter)),
        // The API answers a file path with the file itself
        Ok(Contents::Single(_)) => Err(ListingError::NotADirectory {
            path: path.to_string(),
        }),
        Err(source) => Err(ListingError::Request {
            path: path.to_string(),
            source,
        }),
    };

    match result {
        Ok(entries) => {
            debug!(path, count = entries.len(), "listed directory");
            Listing {
                path: path.to_string(),
                entries,
                error: None,
            }
        }
        Err(err) => {
            error!(path, status = ?err.status(), error = %err, "listing failed");
            Listing {
                path: path.to_string(),
                entries: Vec::new(),
                error: Some(err),
            }
        }
    }
}

/// Filter and order raw API entries.
fn to_entries(raw: Vec<RawEntry>, filter: &ExtensionFilter) -> Vec<TreeEntry> {
    let mut entries: Vec<TreeEntry> = raw
        .into_iter()
        .filter_map(|entry| {
            let kind = match entry.kind {
                RawKind::Dir => EntryKind::Directory,
                RawKind::File if filter.allows(&entry.name) => EntryKind::File,
                _ => return None,
            };
            Some(TreeEntry {
                path: entry.path,
                name: entry.name,
                kind,
            })
        })
        .collect();

    // EntryKind orders Directory before File; sort_by is stable
    entries.sort_by(|a, b| (a.kind, &a.path).cmp(&(b.kind, &b.path)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::github::MockRepoContents;

    fn raw(name: &str, path: &str, kind: RawKind) -> RawEntry {
        RawEntry {
            name: name.to_string(),
            path: path.to_string(),
            kind,
            content: None,
            encoding: None,
        }
    }

    #[test]
    fn test_png_dropped_and_dirs_first() {
        let entries = to_entries(
            vec![
                raw("README.md", "README.md", RawKind::File),
                raw("image.png", "image.png", RawKind::File),
                raw("src", "src", RawKind::Dir),
            ],
            &ExtensionFilter::default(),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].path, "src");
        assert!(entries[0].is_dir());
        assert_eq!(entries[1].path, "README.md");
        assert!(entries[1].is_file());
    }

    #[test]
    fn test_files_sorted_by_path() {
        let entries = to_entries(
            vec![
                raw("b.py", "b.py", RawKind::File),
                raw("a.py", "a.py", RawKind::File),
            ],
            &ExtensionFilter::default(),
        );
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["a.py", "b.py"]);
    }

    #[test]
    fn test_symlinks_and_submodules_dropped() {
        let entries = to_entries(
            vec![
                raw("link.md", "link.md", RawKind::Symlink),
                raw("vendor", "vendor", RawKind::Submodule),
                raw("docs", "docs", RawKind::Dir),
            ],
            &ExtensionFilter::default(),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "docs");
    }

    #[test]
    fn test_directories_kept_regardless_of_name() {
        let entries = to_entries(
            vec![
                raw("zeta", "zeta", RawKind::Dir),
                raw("assets.png", "assets.png", RawKind::Dir),
                raw("a.txt", "a.txt", RawKind::File),
            ],
            &ExtensionFilter::default(),
        );
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["assets.png", "zeta", "a.txt"]);
    }

    #[tokio::test]
    async fn test_list_calls_collaborator_with_path() {
        let mut repo = MockRepoContents::new();
        repo.expect_get_contents()
            .withf(|path| path.to_string() == "docs")
            .times(1)
            .returning(|_| {
                Ok(Contents::Directory(vec![
                    raw("intro.md", "docs/intro.md", RawKind::File),
                    raw("api", "docs/api", RawKind::Dir),
                ]))
            });

        let listing = list(&repo, "docs", &ExtensionFilter::default()).await;
        assert!(listing.is_ok());
        assert_eq!(listing.path, "docs");
        let paths: Vec<&str> = listing.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["docs/api", "docs/intro.md"]);
    }

    #[tokio::test]
    async fn test_failed_listing_is_empty_with_error() {
        let mut repo = MockRepoContents::new();
        repo.expect_get_contents().returning(|_| {
            Err(ClientError::Status {
                status: 404,
                url: "https://api.github.com/repos/a/b/contents/missing".to_string(),
            })
        });

        let listing = list(&repo, "missing", &ExtensionFilter::default()).await;
        assert!(listing.entries.is_empty());
        let err = listing.error.expect("listing error should be reported");
        assert_eq!(err.path(), "missing");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_listing_a_file_path_is_an_error() {
        let mut repo = MockRepoContents::new();
        repo.expect_get_contents().returning(|_| {
            Ok(Contents::Single(raw("README.md", "README.md", RawKind::File)))
        });

        let listing = list(&repo, "README.md", &ExtensionFilter::default()).await;
        assert!(listing.entries.is_empty());
        assert!(matches!(
            listing.error,
            Some(ListingError::NotADirectory { ref path }) if path == "README.md"
        ));
    }
}
