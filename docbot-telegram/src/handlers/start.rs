//! /start handler: welcome text with documentation and search buttons.

use async_trait::async_trait;
use docbot_core::{Button, Handler, HandlerResponse, Message, Reply, Result};

pub const DOCS_SITE_URL: &str = "https://pytgcalls.github.io/";

const WELCOME_TEXT: &str = "\
👋 <b>Welcome to the PyTgCalls documentation bot!</b>\n\
\n\
I can help you find PyTgCalls and NTgCalls methods, types, and enums.\n\
\n\
• Use the 🔍 <b>Search</b> button to search the documentation\n\
• Or type your query directly in this chat\n\
• Send <code>#123</code> or <code>nt#123</code> to look up an issue or PR\n\
• Visit the <a href=\"https://pytgcalls.github.io/\">documentation site</a> for full guides";

/// Replies to `/start`; everything else passes through to the next handler.
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text != "/start" && !text.starts_with("/start ") {
            return Ok(HandlerResponse::Continue);
        }

        let reply = Reply::new(WELCOME_TEXT)
            .button_row(vec![Button::url("📚 Documentation", DOCS_SITE_URL)])
            .button_row(vec![Button::switch_inline("🔍 Search", "Quick start")]);
        Ok(HandlerResponse::Reply(reply))
    }
}
