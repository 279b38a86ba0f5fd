//! Chat search handler: free text is a documentation query.

use crate::format;
use async_trait::async_trait;
use docbot_core::{Button, Handler, HandlerResponse, Message, Reply, Result};
use docbot_search::{DocStore, Query};
use std::sync::Arc;
use teloxide::utils::html::escape;
use tracing::info;

/// Answers any non-command text with the top scored documentation entries,
/// or a friendly no-results message.
pub struct DocSearchHandler {
    store: Arc<DocStore>,
    limit: usize,
}

impl DocSearchHandler {
    pub fn new(store: Arc<DocStore>, limit: usize) -> Self {
        Self { store, limit }
    }
}

#[async_trait]
impl Handler for DocSearchHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.content.trim();
        if text.is_empty() || text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }

        let hits = self.store.search(&Query::new(text), self.limit);
        info!(
            user_id = message.user.id,
            query = %text,
            hits = hits.len(),
            "Documentation search"
        );

        if hits.is_empty() {
            // Echo a capped snippet, not the raw query: the message itself can
            // be 4096 chars and escaping expands it further.
            let reply = Reply::new(format!(
                "❌ No results found for <i>{}</i>.",
                escape(&format::snippet(text))
            ));
            return Ok(HandlerResponse::Reply(reply));
        }

        let body = format::render_hits(&hits, false);
        let mut reply = Reply::new(body);
        for hit in &hits {
            reply = reply.button_row(vec![Button::url(
                format!("📚 {}", hit.entry.title),
                hit.entry.doc_url.clone(),
            )]);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
