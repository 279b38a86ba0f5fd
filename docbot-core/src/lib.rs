//! # docbot-core
//!
//! Core types and traits for the documentation bot: [`Message`], [`Reply`], the [`Handler`]
//! trait and [`HandlerChain`], the [`Bot`] send abstraction, and tracing initialization.
//! Transport-agnostic; used by docbot-telegram and docbot-cli.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{DocbotError, Result};
pub use logger::init_tracing;
pub use types::{Button, Chat, Handler, HandlerResponse, Message, Reply, User};
