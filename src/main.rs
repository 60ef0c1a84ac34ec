//! mdoutline: print the section outline of markdown documents.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use mdoutline::error::Error;
use mdoutline::render::{self, OutlineEntry};
use mdoutline::{config, formats, input, outline};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mdoutline")]
#[command(about = "Section outlines for markdown documents", long_about = None)]
struct Args {
    /// Files or directories to outline
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Deepest heading level to show
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=6))]
    max_level: Option<u8>,

    /// Sort headings alphabetically at every level
    #[arg(long)]
    sort: bool,

    /// Only keep headings matching this keyword (and their ancestors)
    #[arg(long, value_name = "KEYWORD")]
    filter: Option<String>,

    /// Print JSON instead of an indented outline
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct DocumentOutline {
    path: String,
    outline: Vec<OutlineEntry>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(max_level) = args.max_level {
        cfg.max_level = max_level;
    }
    cfg.sort |= args.sort;

    let explicit_files: Vec<PathBuf> = args
        .paths
        .iter()
        .filter(|path| path.is_file())
        .cloned()
        .collect();
    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let format = formats::markdown::MarkdownFormat;
    let options = cfg.outline_options();
    let mut outlines = Vec::new();

    for doc in &documents {
        let tree = match input::load_document(doc, &format) {
            Ok(tree) => tree,
            Err(e) if !explicit_files.contains(doc) => {
                warn!(path = %doc.display(), "skipping document: {e}");
                continue;
            }
            Err(e) => return Err(e),
        };

        let items = outline::build_outline(tree.root(), &options);
        let mut entries = OutlineEntry::from_items(&items);
        if cfg.sort {
            render::sort_alphabetically(&mut entries);
        }
        if let Some(keyword) = &args.filter {
            entries = render::filter_entries(&entries, keyword);
        }

        outlines.push(DocumentOutline {
            path: doc.display().to_string(),
            outline: entries,
        });
    }

    if args.json {
        let json = serde_json::to_string_pretty(&outlines).map_err(std::io::Error::other)?;
        println!("{json}");
    } else {
        for doc in &outlines {
            println!("{}", doc.path);
            print!("{}", render::render_text(&doc.outline));
        }
    }

    Ok(())
}
