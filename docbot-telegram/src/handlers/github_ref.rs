//! Chat handler for GitHub issue/PR references (`#123`, `nt#123`).

use crate::github::{parse_ref, GithubClient};
use async_trait::async_trait;
use docbot_core::{Button, Handler, HandlerResponse, Message, Reply, Result};
use std::sync::Arc;
use teloxide::utils::html::escape;

/// Resolves reference-shaped messages against GitHub; other text passes through.
pub struct GithubRefHandler {
    github: Arc<GithubClient>,
}

impl GithubRefHandler {
    pub fn new(github: Arc<GithubClient>) -> Self {
        Self { github }
    }
}

#[async_trait]
impl Handler for GithubRefHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(reference) = parse_ref(&message.content) else {
            return Ok(HandlerResponse::Continue);
        };

        let refs = self.github.resolve(reference).await;
        if refs.is_empty() {
            return Ok(HandlerResponse::Reply(Reply::new(format!(
                "❌ No issue or PR <code>#{}</code> found.",
                reference.number
            ))));
        }

        let mut lines = Vec::new();
        let mut reply_buttons = Vec::new();
        for issue in &refs {
            lines.push(format!(
                "<b>{}</b> pytgcalls/{}#{} ({}): {}",
                issue.kind,
                escape(&issue.repo),
                issue.number,
                escape(&issue.state),
                escape(&issue.title)
            ));
            reply_buttons.push(vec![Button::url(
                format!("{} {}#{}", issue.kind, issue.repo, issue.number),
                issue.url.clone(),
            )]);
        }

        let mut reply = Reply::new(lines.join("\n"));
        for row in reply_buttons {
            reply = reply.button_row(row);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
