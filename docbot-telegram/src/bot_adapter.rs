//! Wraps teloxide::Bot and implements [`docbot_core::Bot`]. Production code sends
//! replies via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use docbot_core::{Bot as CoreBot, Button, Chat, DocbotError, Reply, Result};
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, LinkPreviewOptions, ParseMode,
};

/// Thin wrapper around teloxide::Bot that implements docbot-core's Bot trait.
/// Replies are sent as HTML with link previews disabled.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Maps core button rows to a Telegram inline keyboard. Fails on invalid URLs.
pub fn keyboard_from_buttons(rows: &[Vec<Button>]) -> Result<InlineKeyboardMarkup> {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = Vec::with_capacity(rows.len());
    for row in rows {
        let mut out = Vec::with_capacity(row.len());
        for button in row {
            let mapped = match button {
                Button::Url { label, url } => {
                    let url = reqwest::Url::parse(url).map_err(|e| {
                        DocbotError::Bot(format!("Invalid button URL {url}: {e}"))
                    })?;
                    InlineKeyboardButton::url(label.clone(), url)
                }
                Button::SwitchInline { label, query } => {
                    InlineKeyboardButton::switch_inline_query_current_chat(
                        label.clone(),
                        query.clone(),
                    )
                }
            };
            out.push(mapped);
        }
        keyboard.push(out);
    }
    Ok(InlineKeyboardMarkup::new(keyboard))
}

/// Link previews off for documentation replies; they drown the text otherwise.
pub(crate) fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(chat.id), reply.text.clone())
            .parse_mode(ParseMode::Html)
            .link_preview_options(no_link_preview());
        if !reply.buttons.is_empty() {
            request = request.reply_markup(keyboard_from_buttons(&reply.buttons)?);
        }
        request
            .await
            .map_err(|e| DocbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
