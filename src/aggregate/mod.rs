// src/aggregate/mod.rs
// =============================================================================
// Turns a selection of file paths into one document.
//
// Policy: best effort. A file that fails to fetch or decode is skipped with
// a warning; the others still make it in.
//
// Files are fetched concurrently, but with `buffered` (not
// `buffer_unordered`) so results come back in selection order.
//
// Rust concepts:
// - Streams: stream::iter + buffered for bounded, ordered concurrency
// - Generic bounds: works with any RepoContents, real or mocked
// =============================================================================

mod document;
mod fetch;

pub use document::{AggregatedDocument, FileBlock, Warning};
pub use fetch::fetch;

use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use crate::github::RepoContents;
use crate::selection::SelectionSet;

/// Fetch every selected path and build the document.
///
/// `concurrency` is the number of requests in flight at once (0 is treated as 1).
pub async fn aggregate<R>(
    repo: &R,
    selection: &SelectionSet,
    concurrency: usize,
) -> AggregatedDocument
where
    R: RepoContents + ?Sized,
{
    info!(files = selection.len(), concurrency, "aggregating selection");

    let results: Vec<_> = stream::iter(selection.paths())
        .map(move |path| async move { (path, fetch(repo, path).await) })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let mut document = AggregatedDocument::default();
    for (path, result) in results {
        match result {
            Ok(content) => document.push_block(path.clone(), content),
            Err(e) => {
                warn!(path = %e.path(), error = %e, "Could not include file, skipping");
                document.push_warning(e.path().to_string(), e.to_string());
            }
        }
    }

    document
}
