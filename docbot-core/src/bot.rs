//! Bot abstraction for sending replies.
//!
//! The trait is transport-agnostic; docbot-telegram implements it via teloxide.
//! Tests can substitute another implementation to capture outgoing replies.

use crate::error::Result;
use crate::types::{Chat, Message, Reply};
use async_trait::async_trait;

/// Abstraction for sending replies. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (HTML text plus optional button rows) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;

    /// Sends a reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, reply: &Reply) -> Result<()> {
        self.send_reply(&message.chat, reply).await
    }
}
