//! `docbot` binary: runs the Telegram documentation bot or searches the corpus offline.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use docbot_telegram::{run_bot, BotConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::from_env(token)?;
            run_bot(config).await
        }
        Commands::Search {
            query,
            lib,
            limit,
            docs,
        } => cli::run_search(&query, lib, limit, docs),
    }
}
