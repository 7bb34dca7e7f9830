// src/output/json.rs
// JSON rendering: { repository, files: [{path, content}], warnings }

use serde::Serialize;

use crate::aggregate::{AggregatedDocument, FileBlock, Warning};
use crate::github::RepositoryRef;

#[derive(Serialize, Debug)]
struct JsonOutput<'a> {
    repository: String,
    files: &'a [FileBlock],
    warnings: &'a [Warning],
}

pub fn render(
    document: &AggregatedDocument,
    repo: &RepositoryRef,
) -> Result<String, serde_json::Error> {
    let output = JsonOutput {
        repository: repo.to_string(),
        files: document.blocks(),
        warnings: document.warnings(),
    };
    serde_json::to_string_pretty(&output)
}
