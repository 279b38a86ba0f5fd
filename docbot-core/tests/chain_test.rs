//! Integration tests for [`docbot_core::HandlerChain`].
//!
//! Covers: before/after ordering, before stopping the chain, Reply stopping the chain
//! and being passed to after, and multiple handlers executed in order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use docbot_core::{Chat, Handler, HandlerChain, HandlerResponse, Message, Reply, User};

fn create_test_message(content: &str) -> Message {
    Message {
        id: "test_message_id".to_string(),
        content: content.to_string(),
        user: User {
            id: 123,
            username: Some("test_user".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        created_at: Utc::now(),
    }
}

struct CountingHandler {
    before_count: Arc<AtomicUsize>,
    handle_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
    response: HandlerResponse,
}

impl CountingHandler {
    fn new(response: HandlerResponse) -> Self {
        Self {
            before_count: Arc::new(AtomicUsize::new(0)),
            handle_count: Arc::new(AtomicUsize::new(0)),
            after_count: Arc::new(AtomicUsize::new(0)),
            response,
        }
    }
}

#[async_trait]
impl Handler for CountingHandler {
    async fn before(&self, _message: &Message) -> docbot_core::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> docbot_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> docbot_core::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// **Test: before, handle and after all run once for a pass-through handler.**
#[tokio::test]
async fn test_handler_chain_runs_all_phases() {
    let handler = Arc::new(CountingHandler::new(HandlerResponse::Continue));
    let chain = HandlerChain::new().add_handler(handler.clone());

    let message = create_test_message("test");
    let result = chain.handle(&message).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(handler.before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handler.handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(handler.after_count.load(Ordering::SeqCst), 1);
}

/// **Test: before returning false stops the chain; no handle runs.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> docbot_core::Result<bool> {
            Ok(false)
        }
    }

    let handler = Arc::new(CountingHandler::new(HandlerResponse::Continue));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(handler.clone());

    let message = create_test_message("test");
    let result = chain.handle(&message).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handler.handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: Reply ends the handle phase; later handlers do not run; after sees the reply.**
#[tokio::test]
async fn test_reply_stops_chain_and_reaches_after() {
    struct AssertingAfter {
        seen: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Handler for AssertingAfter {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> docbot_core::Result<()> {
            if let HandlerResponse::Reply(reply) = response {
                assert_eq!(reply.text, "found it");
                self.seen.fetch_add(1, Ordering::SeqCst);
            }
            Ok(())
        }
    }

    let seen = Arc::new(AtomicUsize::new(0));
    let replying = Arc::new(CountingHandler::new(HandlerResponse::Reply(Reply::new(
        "found it",
    ))));
    let late = Arc::new(CountingHandler::new(HandlerResponse::Continue));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(AssertingAfter { seen: seen.clone() }))
        .add_handler(replying.clone())
        .add_handler(late.clone());

    let message = create_test_message("play");
    let result = chain.handle(&message).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply(Reply::new("found it")));
    assert_eq!(late.handle_count.load(Ordering::SeqCst), 0);
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

/// **Test: Ignore passes to the next handler like Continue.**
#[tokio::test]
async fn test_ignore_continues_to_next_handler() {
    let ignoring = Arc::new(CountingHandler::new(HandlerResponse::Ignore));
    let replying = Arc::new(CountingHandler::new(HandlerResponse::Reply(Reply::new(
        "second",
    ))));

    let chain = HandlerChain::new()
        .add_handler(ignoring.clone())
        .add_handler(replying.clone());

    let message = create_test_message("anything");
    let result = chain.handle(&message).await.unwrap();

    assert_eq!(ignoring.handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(replying.handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(result, HandlerResponse::Reply(Reply::new("second")));
}
