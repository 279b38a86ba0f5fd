//! End-to-end chain tests: /start, documentation search, and no-result replies,
//! driven with core messages and a mock Bot capturing outgoing replies.

use async_trait::async_trait;
use chrono::Utc;
use docbot_core::{Bot, Chat, HandlerChain, HandlerResponse, Message, Reply, User};
use docbot_search::{Details, DocEntry, DocStore, EntryKind, Example, Library};
use docbot_telegram::{DocSearchHandler, StartHandler};
use std::sync::{Arc, Mutex};

/// Captures replies instead of sending them to Telegram.
struct MockBot {
    sent: Mutex<Vec<(i64, Reply)>>,
}

impl MockBot {
    fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> docbot_core::Result<()> {
        self.sent.lock().unwrap().push((chat.id, reply.clone()));
        Ok(())
    }
}

fn sample_store() -> Arc<DocStore> {
    Arc::new(DocStore::from_entries(vec![
        DocEntry {
            title: "play".to_string(),
            lib: Library::PyTgCalls,
            kind: EntryKind::Method,
            description: "Starts audio playback".to_string(),
            example: Example::default(),
            details: Details::default(),
            doc_url: "https://pytgcalls.github.io/PyTgCalls/play".to_string(),
        },
        DocEntry {
            title: "pause".to_string(),
            lib: Library::PyTgCalls,
            kind: EntryKind::Method,
            description: "Pauses the current stream".to_string(),
            example: Example::default(),
            details: Details::default(),
            doc_url: "https://pytgcalls.github.io/PyTgCalls/pause".to_string(),
        },
    ]))
}

fn chain() -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler))
        .add_handler(Arc::new(DocSearchHandler::new(sample_store(), 3)))
}

fn message(content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 42,
            username: Some("alice".to_string()),
            first_name: Some("Alice".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 99,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}

/// Drives a message through the chain and delivers any Reply via the bot,
/// mirroring the runner's send step.
async fn drive(chain: &HandlerChain, bot: &MockBot, msg: &Message) {
    if let HandlerResponse::Reply(reply) = chain.handle(msg).await.unwrap() {
        bot.reply_to(msg, &reply).await.unwrap();
    }
}

#[tokio::test]
async fn test_start_message_sends_welcome() {
    let chain = chain();
    let bot = MockBot::new();

    drive(&chain, &bot, &message("/start")).await;

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, 99);
    assert!(sent[0].1.text.contains("Welcome"));
    assert_eq!(sent[0].1.buttons.len(), 2);
}

#[tokio::test]
async fn test_query_sends_formatted_entry() {
    let chain = chain();
    let bot = MockBot::new();

    drive(&chain, &bot, &message("play")).await;

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let reply = &sent[0].1;
    assert!(reply.text.contains("<b>play</b>"));
    assert!(reply.text.contains("Starts audio playback"));
    // One doc-link button row per hit; "play" also substring-matches nothing else here.
    assert!(!reply.buttons.is_empty());
}

#[tokio::test]
async fn test_unmatched_query_sends_no_results() {
    let chain = chain();
    let bot = MockBot::new();

    drive(&chain, &bot, &message("xyz")).await;

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.text.contains("No results found"));
}

#[tokio::test]
async fn test_no_results_reply_stays_within_telegram_limit() {
    let chain = chain();
    let bot = MockBot::new();

    // An unmatched query at the message size limit still gets the friendly
    // no-results reply, and that reply itself fits in one message.
    drive(&chain, &bot, &message(&"y".repeat(4096))).await;

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.text.contains("No results found"));
    assert!(sent[0].1.text.chars().count() <= 4096);
}

#[tokio::test]
async fn test_reply_never_exceeds_telegram_limit() {
    let big_description = "word ".repeat(2000);
    let store = Arc::new(DocStore::from_entries(vec![DocEntry {
        title: "giant".to_string(),
        lib: Library::NTgCalls,
        kind: EntryKind::Type,
        description: big_description,
        example: Example::default(),
        details: Details::default(),
        doc_url: "https://pytgcalls.github.io/NTgCalls/giant".to_string(),
    }]));
    let chain = HandlerChain::new().add_handler(Arc::new(DocSearchHandler::new(store, 3)));
    let bot = MockBot::new();

    drive(&chain, &bot, &message("giant")).await;

    let sent = bot.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.text.chars().count() <= 4096);
    assert!(sent[0].1.text.contains("truncated"));
}
