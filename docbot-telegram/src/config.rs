//! Bot configuration loaded from environment variables.
//!
//! BOT_TOKEN is required; startup fails fast without it. Everything else has a
//! default. Call after dotenvy::dotenv() so a local .env is honored.

use anyhow::Result;
use std::env;

pub const DEFAULT_DOCS_PATH: &str = "docsdata/docs.json";
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_LOG_FILE: &str = "logs/docbot.log";
pub const DEFAULT_RESULT_LIMIT: usize = 3;

/// Runtime configuration for the documentation bot.
pub struct BotConfig {
    pub bot_token: String,
    /// Path to the docs.json corpus.
    pub docs_path: String,
    /// Optional Telegram Bot API base URL override (used by tests against a mock server).
    pub telegram_api_url: Option<String>,
    /// GitHub API base URL; overridable for tests.
    pub github_api_url: String,
    pub log_file: String,
    /// Maximum number of entries in a chat search reply.
    pub result_limit: usize,
}

impl BotConfig {
    /// Loads configuration from the environment. BOT_TOKEN is required;
    /// `token` overrides it when provided (e.g. from the CLI).
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let docs_path = env::var("DOCS_PATH").unwrap_or_else(|_| DEFAULT_DOCS_PATH.to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let result_limit = env::var("RESULT_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_RESULT_LIMIT);

        Ok(Self {
            bot_token,
            docs_path,
            telegram_api_url,
            github_api_url,
            log_file,
            result_limit,
        })
    }

    /// Constructs a config with the given token and all defaults (used by tests).
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            docs_path: DEFAULT_DOCS_PATH.to_string(),
            telegram_api_url: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            log_file: DEFAULT_LOG_FILE.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}
