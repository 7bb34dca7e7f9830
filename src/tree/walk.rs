// src/tree/walk.rs
// =============================================================================
// Opt-in recursive traversal, breadth-first.
//
// How it works:
// 1. Start with the root directory in a queue
// 2. List it (one API call)
// 3. Queue every sub-directory found, if we're still under the depth limit
// 4. Repeat until the queue is empty
//
// A directory that fails to list contributes nothing; its error is kept on
// the Tree and the walk moves on.
//
// Rust concepts:
// - VecDeque: queue for breadth-first traversal
// - HashSet: directories already listed
// =============================================================================

use std::collections::{HashSet, VecDeque};

use tracing::info;

use crate::error::ListingError;
use crate::github::RepoContents;
use crate::tree::{list, ExtensionFilter, Listing, TreeEntry};

/// A directory waiting to be listed
#[derive(Debug, Clone)]
struct WalkItem {
    path: String,
    depth: usize, // the starting directory is depth 1
}

/// Every listing produced by a walk, in the order they were listed.
#[derive(Debug, Default)]
pub struct Tree {
    pub listings: Vec<Listing>,
}

impl Tree {
    /// All visible files, in listing order.
    pub fn files(&self) -> impl Iterator<Item = &TreeEntry> {
        self.listings
            .iter()
            .flat_map(|listing| listing.entries.iter())
            .filter(|entry| entry.is_file())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ListingError> {
        self.listings.iter().filter_map(|listing| listing.error.as_ref())
    }
}

/// Walk the tree below `root`.
///
/// `max_depth` of 1 lists only `root` (same as calling `list` once);
/// None means no limit.
pub async fn walk<R>(
    repo: &R,
    root: &str,
    filter: &ExtensionFilter,
    max_depth: Option<usize>,
) -> Tree
where
    R: RepoContents + ?Sized,
{
    let mut queue = VecDeque::new();
    queue.push_back(WalkItem {
        path: root.trim_matches('/').to_string(),
        depth: 1,
    });

    let mut visited = HashSet::new();
    let mut tree = Tree::default();

    while let Some(item) = queue.pop_front() {
        if !visited.insert(item.path.clone()) {
            continue;
        }

        info!(path = %item.path, depth = item.depth, "listing directory");
        let listing = list(repo, &item.path, filter).await;

        let may_descend = max_depth.map_or(true, |max| item.depth < max);
        if may_descend {
            for dir in listing.entries.iter().filter(|e| e.is_dir()) {
                if !visited.contains(&dir.path) {
                    queue.push_back(WalkItem {
                        path: dir.path.clone(),
                        depth: item.depth + 1,
                    });
                }
            }
        }

        tree.listings.push(listing);
    }

    tree
}
