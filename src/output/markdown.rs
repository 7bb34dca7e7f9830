// src/output/markdown.rs
// Markdown rendering: a title, then "## path" and a fenced block per file.

use std::path::Path;

use crate::aggregate::AggregatedDocument;
use crate::github::RepositoryRef;

pub fn render(document: &AggregatedDocument, repo: &RepositoryRef) -> String {
    if document.is_empty() {
        return String::new();
    }

    let mut out = format!("# {}\n", repo);
    for block in document.blocks() {
        let fence = fence_for(&block.content);
        out.push_str(&format!("\n## {}\n\n", block.path));
        out.push_str(&fence);
        out.push_str(language_for(&block.path));
        out.push('\n');
        out.push_str(&block.content);
        if !block.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&fence);
        out.push('\n');
    }
    out
}

// A fence one backtick longer than the longest run inside the content
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

fn language_for(path: &str) -> &'static str {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("md") => "markdown",
        Some("py") => "python",
        Some("js") | Some("jsx") => "javascript",
        Some("ts") | Some("tsx") => "typescript",
        _ => "",
    }
}
