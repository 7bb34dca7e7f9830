// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn the repository argument into owner/repo (no network yet)
// 3. Load configuration and open the repository on GitHub
// 4. Dispatch to the subcommand: list the tree, or scrape selected files
// 5. Exit with proper code (0 = document produced, 1 = nothing usable, 2 = error)
//
// Pipeline:
//   identifier -> repository handle -> tree listing -> selection -> aggregate
// =============================================================================

mod aggregate; // src/aggregate/ - fetch, decode and join selected files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - environment configuration
mod error; // src/error.rs - error types
mod github; // src/github/ - identifier parsing and the REST client
mod output; // src/output/ - text, markdown and JSON rendering
mod selection; // src/selection.rs - the ordered set of picked files
mod tree; // src/tree/ - directory listing and extension filter

use anyhow::{anyhow, bail, Result};
use clap::Parser;
use secrecy::SecretString;
use serde::Serialize;
use tracing::{warn, Level};

use cli::{Cli, Commands, ScrapeArgs, SourceArgs};
use config::Config;
use github::{GithubClient, RepoHandle, RepositoryRef};
use selection::SelectionSet;
use tree::{EntryKind, ExtensionFilter, Tree, TreeEntry};

// The #[tokio::main] attribute transforms our async main into a real main function
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Our error messages already carry their cause
            eprintln!("❌ Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Diagnostics go to stderr so stdout stays clean for --stdout / --json
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Returns:
//   Ok(0) = success
//   Ok(1) = nothing usable (no files selected, or every file failed)
//   Err   = identifier, configuration or repository access error
async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Tree { source, json } => handle_tree(&source, json).await,
        Commands::Scrape(args) => handle_scrape(args).await,
    }
}

// Parses the identifier, builds the config and opens the repository.
// Any failure here aborts the whole action.
async fn open_repository(
    source: &SourceArgs,
    concurrency: Option<usize>,
) -> Result<(RepositoryRef, RepoHandle, Config)> {
    let repo = github::parse(&source.repo_url)?;
    eprintln!("✅ Valid repository format: {}", repo);

    // A missing .env file is fine; real environment variables still apply
    dotenvy::dotenv().ok();
    let mut config = Config::from_env()?;
    if let Some(token) = &source.token {
        config.github_token = Some(SecretString::from(token.clone()));
    }
    if let Some(n) = concurrency {
        if n == 0 {
            bail!("--concurrency must be at least 1");
        }
        config.concurrency = n;
    }

    let client = GithubClient::new(&config)?;
    let handle = client.open(&repo, source.reference.clone()).await?;

    Ok((repo, handle, config))
}

// Lists --path, one level or recursively.
// Failed directories are already logged by the lister.
async fn browse(handle: &RepoHandle, source: &SourceArgs, filter: &ExtensionFilter) -> Tree {
    eprintln!("📂 Loading repository structure...");
    let tree = tree::walk(handle, &source.path, filter, source.depth_limit()).await;

    let failed = tree.failures().count();
    if failed > 0 {
        eprintln!("⚠️  {} directory listing(s) failed", failed);
    }
    tree
}

// Handles the 'tree' subcommand
async fn handle_tree(source: &SourceArgs, json: bool) -> Result<i32> {
    let (_repo, handle, _config) = open_repository(source, None).await?;
    let filter = source.filter();
    let tree = browse(&handle, source, &filter).await;

    if json {
        print_tree_json(&tree)?;
    } else {
        print_tree(&tree, &filter);
    }

    // Only a failure if nothing at all could be listed
    let all_failed = tree.listings.iter().all(|listing| !listing.is_ok());
    Ok(if all_failed { 1 } else { 0 })
}

// Handles the 'scrape' subcommand
async fn handle_scrape(args: ScrapeArgs) -> Result<i32> {
    let (repo, handle, config) = open_repository(&args.source, args.concurrency).await?;
    let filter = args.source.filter();

    let selection = build_selection(&args, &handle, &filter).await;
    if selection.is_empty() {
        eprintln!("⚠️  Please select at least one file to scrape (--select PATH or --all).");
        return Ok(1);
    }

    eprintln!("📄 Scraping {} selected file(s)...", selection.len());
    let document = aggregate::aggregate(&handle, &selection, config.concurrency).await;

    // Distinct from "nothing selected": files were picked but none were usable
    if document.is_empty() {
        eprintln!("⚠️  No content was found in the selected files.");
        return Ok(1);
    }

    let rendered = output::render(&document, &repo, args.format)?;

    if args.stdout {
        print!("{}", rendered);
    } else {
        let path = args.out_dir.join(output::file_name(&repo, args.format));
        tokio::fs::write(&path, rendered)
            .await
            .map_err(|e| anyhow!("could not write {}: {}", path.display(), e))?;
        eprintln!("💾 Saved to {}", path.display());
    }

    eprintln!(
        "✅ Scraping completed! {} file(s) included, {} skipped",
        document.blocks().len(),
        document.warnings().len()
    );
    Ok(0)
}

// The CLI version of the checkbox list:
//   --all      tick every listed file (listing order)
//   --select   tick a file (command-line order, after --all)
//   --exclude  untick a file
async fn build_selection(
    args: &ScrapeArgs,
    handle: &RepoHandle,
    filter: &ExtensionFilter,
) -> SelectionSet {
    let mut selection = SelectionSet::new();
    if args.all {
        let tree = browse(handle, &args.source, filter).await;
        selection = SelectionSet::select_all(tree.files());
    }

    for path in &args.select {
        let path = path.trim_matches('/');
        let name = path.rsplit('/').next().unwrap_or(path);
        if !filter.allows(name) {
            warn!(path, "extension not in allow-list, skipping");
            eprintln!("⚠️  Skipping {}: not one of {}", path, filter.extensions().join(" "));
            continue;
        }
        selection.insert(path);
    }

    for path in &args.exclude {
        if !selection.remove(path.trim_matches('/')) {
            eprintln!("⚠️  --exclude {} did not match a selected file", path);
        }
    }

    selection
}

// Prints each listed directory followed by its entries
fn print_tree(tree: &Tree, filter: &ExtensionFilter) {
    println!("Showing directories and {} files\n", filter.extensions().join(" "));

    for listing in &tree.listings {
        let heading = if listing.path.is_empty() { "/" } else { listing.path.as_str() };
        println!("📂 {}", heading);

        if !listing.is_ok() {
            println!("   (could not be listed)");
            continue;
        }
        if listing.entries.is_empty() {
            println!("   (no matching entries)");
        }
        for entry in &listing.entries {
            println!("   {} {}", icon(entry), entry.path);
        }
        println!();
    }

    let files = tree.files().count();
    println!("📋 {} file(s) available to scrape", files);
}

fn icon(entry: &TreeEntry) -> &'static str {
    match entry.kind {
        EntryKind::Directory => "📁",
        EntryKind::File => "📄",
    }
}

#[derive(Serialize)]
struct ListingReport<'a> {
    path: &'a str,
    entries: &'a [TreeEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn print_tree_json(tree: &Tree) -> Result<()> {
    let reports: Vec<ListingReport<'_>> = tree
        .listings
        .iter()
        .map(|listing| ListingReport {
            path: &listing.path,
            entries: &listing.entries,
            error: listing.error.as_ref().map(|e| e.to_string()),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
