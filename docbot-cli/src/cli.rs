//! CLI parser and the offline search command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docbot_search::{DocStore, Library, Query};
use docbot_telegram::config::DEFAULT_DOCS_PATH;

#[derive(Parser)]
#[command(name = "docbot")]
#[command(about = "PyTgCalls / NTgCalls documentation bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Search the documentation corpus from the command line.
    Search {
        /// Free-text query.
        query: String,
        /// Restrict to one library: pytgcalls or ntgcalls.
        #[arg(long)]
        lib: Option<Library>,
        /// Maximum number of results.
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Corpus path; defaults to DOCS_PATH or the bundled location.
        #[arg(long)]
        docs: Option<String>,
    },
}

/// Runs the offline `search` subcommand and prints results to stdout.
pub fn run_search(
    query: &str,
    lib: Option<Library>,
    limit: usize,
    docs: Option<String>,
) -> Result<()> {
    let docs_path = docs
        .or_else(|| std::env::var("DOCS_PATH").ok())
        .unwrap_or_else(|| DEFAULT_DOCS_PATH.to_string());
    let store = DocStore::load(&docs_path)
        .with_context(|| format!("loading docs corpus from {docs_path}"))?;

    let mut q = Query::new(query);
    if let Some(lib) = lib {
        q = q.with_library(lib);
    }

    let hits = store.search(&q, limit);
    if hits.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    for hit in hits {
        let entry = hit.entry;
        println!("\n{} ({}, {})", entry.title, entry.kind, entry.lib);
        if let Some(signature) = &entry.details.signature {
            println!("  signature: {signature}");
        }
        if !entry.description.is_empty() {
            println!("  {}", entry.description);
        }
        for section in &entry.details.sections {
            println!("  {}", section.title);
            for item in &section.items {
                let mut line = format!("    {}", item.name);
                if let Some(t) = &item.item_type {
                    line.push_str(&format!(": {t}"));
                }
                if !item.description.is_empty() {
                    line.push_str(&format!("  # {}", item.description));
                }
                println!("{line}");
            }
        }
        for member in &entry.details.members {
            let mut line = format!("    {}", member.name);
            if let Some(value) = &member.value {
                line.push_str(&format!(" = {value}"));
            }
            if !member.description.is_empty() {
                line.push_str(&format!("  # {}", member.description));
            }
            println!("{line}");
        }
        println!("  url: {}", entry.doc_url);
    }
    Ok(())
}
