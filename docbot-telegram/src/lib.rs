//! # docbot-telegram
//!
//! Telegram layer for the documentation bot: teloxide dispatcher for messages and
//! inline queries, adapters to docbot-core types, HTML formatting of documentation
//! entries, and GitHub issue/PR reference lookup. Search itself lives in docbot-search.

pub mod adapters;
pub mod bot_adapter;
pub mod config;
pub mod format;
pub mod github;
pub mod handlers;
pub mod inline;
pub mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::BotConfig;
pub use github::{parse_ref, GithubClient, IssueKind, IssueRef, RefQuery};
pub use handlers::{DocSearchHandler, GithubRefHandler, StartHandler};
pub use runner::run_bot;
