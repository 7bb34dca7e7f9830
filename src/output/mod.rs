// src/output/mod.rs
// =============================================================================
// Renders an AggregatedDocument in the format the user picked, and names
// the file it gets saved to.
//
// Submodules:
// - markdown: headings plus fenced code blocks
// - json: machine-readable dump
// Plain text lives on AggregatedDocument itself.
// =============================================================================

mod json;
mod markdown;

use std::fmt;

use clap::ValueEnum;

use crate::aggregate::AggregatedDocument;
use crate::github::RepositoryRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// "### File: path" headers followed by raw contents
    #[default]
    Text,
    /// One section per file with fenced code blocks
    Markdown,
    /// {"repository", "files", "warnings"}
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render `document` as a string.
pub fn render(
    document: &AggregatedDocument,
    repo: &RepositoryRef,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(document.to_plain_text()),
        OutputFormat::Markdown => Ok(markdown::render(document, repo)),
        OutputFormat::Json => json::render(document, repo),
    }
}

/// "{repo}_selected_contents.{ext}"
pub fn file_name(repo: &RepositoryRef, format: OutputFormat) -> String {
    format!("{}_selected_contents.{}", repo.name(), format.extension())
}
