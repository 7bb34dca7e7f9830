// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI stands in for the interactive file picker: instead of ticking
// checkboxes, the user passes --select PATH (repeatable) or --all, and
// --exclude to untick individual files again.
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs
// - #[command(flatten)]: share one group of arguments between subcommands
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputFormat;
use crate::tree::ExtensionFilter;

#[derive(Parser, Debug)]
#[command(
    name = "repo-scraper",
    version,
    about = "Browse a GitHub repository and concatenate selected text files into one document",
    long_about = "repo-scraper lists the text files of a GitHub repository (.md, .py, .js, .tsx, .ts, \
                  .jsx, .txt by default) and joins the ones you select into a single document, \
                  ready to paste into an LLM prompt or save for later.\n\n\
                  Accepted repository formats:\n  \
                  https://github.com/username/repository\n  \
                  github.com/username/repository\n  \
                  username/repository"
)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List directories and text files in a repository
    ///
    /// Example: repo-scraper tree https://github.com/rust-lang/rust --path src
    Tree {
        #[command(flatten)]
        source: SourceArgs,

        /// Print the listing as JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Fetch selected files and join them into one document
    ///
    /// Example: repo-scraper scrape acme/widgets --select README.md --select src/app.py
    Scrape(ScrapeArgs),
}

/// Where to look: repository, directory, and how deep.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// GitHub repository (URL, host/owner/repo, or owner/repo)
    pub repo_url: String,

    /// Directory inside the repository to list (default: the root)
    #[arg(long, default_value = "")]
    pub path: String,

    /// Also list sub-directories
    #[arg(long)]
    pub recursive: bool,

    /// Stop descending after this many levels (1 = only --path itself)
    #[arg(long, requires = "recursive")]
    pub max_depth: Option<usize>,

    /// Branch, tag, or commit to read from (default: the default branch)
    #[arg(long = "ref", value_name = "REF")]
    pub reference: Option<String>,

    /// Replace the extension allow-list (repeatable, e.g. --ext .rs --ext .toml)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// GitHub token (overrides GITHUB_TOKEN)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

impl SourceArgs {
    pub fn filter(&self) -> ExtensionFilter {
        if self.extensions.is_empty() {
            ExtensionFilter::default()
        } else {
            ExtensionFilter::new(&self.extensions)
        }
    }

    /// None = unlimited. Without --recursive only one level is listed.
    pub fn depth_limit(&self) -> Option<usize> {
        if self.recursive {
            self.max_depth
        } else {
            Some(1)
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ScrapeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// File to include, in order (repeatable)
    #[arg(short, long = "select", value_name = "PATH")]
    pub select: Vec<String>,

    /// Select every listed file
    #[arg(short, long)]
    pub all: bool,

    /// File to leave out after --all (repeatable)
    #[arg(long = "exclude", value_name = "PATH")]
    pub exclude: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory to save {repo}_selected_contents.* into
    #[arg(short, long, default_value = ".", conflicts_with = "stdout")]
    pub out_dir: PathBuf,

    /// Print the document to stdout instead of saving it
    #[arg(long)]
    pub stdout: bool,

    /// Files fetched at once (overrides REPO_SCRAPER_CONCURRENCY)
    #[arg(long)]
    pub concurrency: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrape_arguments() {
        let cli = Cli::parse_from([
            "repo-scraper",
            "scrape",
            "acme/widgets",
            "--select",
            "b.md",
            "-s",
            "a.md",
            "--format",
            "markdown",
            "--stdout",
        ]);
        match cli.command {
            Commands::Scrape(args) => {
                assert_eq!(args.source.repo_url, "acme/widgets");
                assert_eq!(args.select, vec!["b.md", "a.md"]);
                assert_eq!(args.format, OutputFormat::Markdown);
                assert!(args.stdout);
                assert!(!args.all);
            }
            other => panic!("expected scrape, got {:?}", other),
        }
    }

    #[test]
    fn test_tree_defaults_to_one_level() {
        let cli = Cli::parse_from(["repo-scraper", "tree", "acme/widgets"]);
        match cli.command {
            Commands::Tree { source, json } => {
                assert_eq!(source.path, "");
                assert_eq!(source.depth_limit(), Some(1));
                assert!(!json);
            }
            other => panic!("expected tree, got {:?}", other),
        }
    }

    #[test]
    fn test_recursive_depth() {
        let cli = Cli::parse_from(["repo-scraper", "tree", "acme/widgets", "--recursive"]);
        if let Commands::Tree { source, .. } = cli.command {
            assert_eq!(source.depth_limit(), None);
        }

        let cli = Cli::parse_from([
            "repo-scraper",
            "tree",
            "acme/widgets",
            "--recursive",
            "--max-depth",
            "2",
        ]);
        if let Commands::Tree { source, .. } = cli.command {
            assert_eq!(source.depth_limit(), Some(2));
        }
    }

    #[test]
    fn test_max_depth_requires_recursive() {
        let result = Cli::try_parse_from(["repo-scraper", "tree", "acme/widgets", "--max-depth", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_extensions() {
        let cli = Cli::parse_from(["repo-scraper", "tree", "acme/widgets", "--ext", "rs"]);
        if let Commands::Tree { source, .. } = cli.command {
            let filter = source.filter();
            assert!(filter.allows("main.rs"));
            assert!(!filter.allows("README.md"));
        }
    }

    #[test]
    fn test_default_extensions_without_ext() {
        let cli = Cli::parse_from(["repo-scraper", "tree", "acme/widgets"]);
        if let Commands::Tree { source, .. } = cli.command {
            let filter = source.filter();
            assert!(filter.allows("README.md"));
            assert!(!filter.allows("main.rs"));
        }
    }

    #[test]
    fn test_exclude_is_repeatable() {
        let cli = Cli::parse_from([
            "repo-scraper",
            "scrape",
            "acme/widgets",
            "--all",
            "--exclude",
            "a.md",
            "--exclude",
            "docs/b.md",
        ]);
        match cli.command {
            Commands::Scrape(args) => assert_eq!(args.exclude, vec!["a.md", "docs/b.md"]),
            other => panic!("expected scrape, got {:?}", other),
        }
    }

    #[test]
    fn test_stdout_conflicts_with_out_dir() {
        let result = Cli::try_parse_from([
            "repo-scraper",
            "scrape",
            "acme/widgets",
            "--all",
            "--stdout",
            "--out-dir",
            "/tmp",
        ]);
        assert!(result.is_err());
    }
}
