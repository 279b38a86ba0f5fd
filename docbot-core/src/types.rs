//! Core types: user, chat, message, reply payload, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single incoming message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    /// Receive time; the runner logs handling latency against it.
    pub created_at: DateTime<Utc>,
}

/// A button attached to a reply. Kept transport-agnostic; the Telegram layer
/// maps these onto an inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Button {
    /// Opens a URL.
    Url { label: String, url: String },
    /// Starts an inline query in the current chat, pre-filled with `query`.
    SwitchInline { label: String, query: String },
}

impl Button {
    pub fn url(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Url {
            label: label.into(),
            url: url.into(),
        }
    }

    pub fn switch_inline(label: impl Into<String>, query: impl Into<String>) -> Self {
        Self::SwitchInline {
            label: label.into(),
            query: query.into(),
        }
    }
}

/// Reply body produced by a handler: HTML text plus optional button rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub buttons: Vec<Vec<Button>>,
}

impl Reply {
    /// Creates a reply with text only.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            buttons: Vec::new(),
        }
    }

    /// Appends a row of buttons.
    pub fn button_row(mut self, row: Vec<Button>) -> Self {
        self.buttons.push(row);
        self
    }
}

/// Handler result for the chain. `Reply` carries the response body so the
/// runner can send it and later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply.
    Reply(Reply),
}

/// Single handler concept: optional before / handle / after. The chain runs
/// all before → handle until Stop/Reply → all after (reverse order).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_builder_adds_rows_in_order() {
        let reply = Reply::new("hello")
            .button_row(vec![Button::url("Docs", "https://example.com")])
            .button_row(vec![Button::switch_inline("Search", "play")]);

        assert_eq!(reply.text, "hello");
        assert_eq!(reply.buttons.len(), 2);
        assert_eq!(
            reply.buttons[0][0],
            Button::Url {
                label: "Docs".to_string(),
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn test_reply_without_buttons() {
        let reply = Reply::new("plain");
        assert!(reply.buttons.is_empty());
    }
}
