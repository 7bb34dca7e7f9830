// src/tree/mod.rs
// =============================================================================
// Repository tree browsing.
//
// Submodules:
// - filter: which file names count as text
// - lister: one directory level, filtered and ordered
// - walk: optional breadth-first descent built on the lister
// =============================================================================

mod filter;
mod lister;
mod walk;

pub use filter::ExtensionFilter;
pub use lister::{list, EntryKind, Listing, TreeEntry};
pub use walk::{walk, Tree};
