//! Dispatcher runner: wires messages and inline queries to the handler chain
//! and the inline module.
//!
//! Each text message is converted to a core Message and run through the chain
//! in a spawned task; a Reply response is sent back through the bot adapter.
//! Inline queries bypass the chain and are answered directly.

use crate::adapters::TelegramMessageWrapper;
use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;
use crate::github::GithubClient;
use crate::handlers::{DocSearchHandler, GithubRefHandler, StartHandler};
use crate::inline;
use anyhow::{Context, Result};
use docbot_core::{init_tracing, Bot as CoreBot, HandlerChain, HandlerResponse};
use docbot_search::DocStore;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineQuery, Message as TgMessage};
use tracing::{error, info, instrument, warn};

/// Shared read-only state for the inline branch.
pub struct AppContext {
    pub store: Arc<DocStore>,
    pub github: Arc<GithubClient>,
}

/// Builds the chat handler chain: /start, GitHub references, then search.
pub fn build_handler_chain(
    store: Arc<DocStore>,
    github: Arc<GithubClient>,
    result_limit: usize,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler))
        .add_handler(Arc::new(GithubRefHandler::new(github)))
        .add_handler(Arc::new(DocSearchHandler::new(store, result_limit)))
}

/// Main entry: init logging, load the corpus, then dispatch updates until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    let store = Arc::new(
        DocStore::load(&config.docs_path)
            .with_context(|| format!("loading docs corpus from {}", config.docs_path))?,
    );
    let github = Arc::new(GithubClient::new(&config.github_api_url)?);

    let mut bot = teloxide::Bot::new(&config.bot_token);
    if let Some(api_url) = &config.telegram_api_url {
        let url = reqwest::Url::parse(api_url)
            .with_context(|| format!("invalid TELEGRAM_API_URL: {api_url}"))?;
        bot = bot.set_api_url(url);
    }

    if let Ok(me) = bot.get_me().await {
        info!(username = ?me.user.username, "Bot identity confirmed");
    }

    let chain = build_handler_chain(store.clone(), github.clone(), config.result_limit);
    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let ctx = Arc::new(AppContext { store, github });

    info!("Bot started successfully");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_inline_query().endpoint(on_inline_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![chain, adapter, ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn on_message(
    msg: TgMessage,
    chain: HandlerChain,
    adapter: Arc<TelegramBotAdapter>,
) -> ResponseResult<()> {
    if msg.text().is_none() {
        return Ok(());
    }
    let core_msg = TelegramMessageWrapper(&msg).to_core();
    info!(
        user_id = core_msg.user.id,
        chat_id = core_msg.chat.id,
        chat_type = %core_msg.chat.chat_type,
        message_content = %core_msg.content,
        "Received message"
    );

    // Run the chain in a spawned task so the dispatcher keeps receiving.
    tokio::spawn(async move {
        let result = chain.handle(&core_msg).await;
        let elapsed_ms = (chrono::Utc::now() - core_msg.created_at).num_milliseconds();
        match result {
            Ok(HandlerResponse::Reply(reply)) => {
                info!(user_id = core_msg.user.id, elapsed_ms, "Sending reply");
                if let Err(e) = adapter.reply_to(&core_msg, &reply).await {
                    error!(error = %e, user_id = core_msg.user.id, "Failed to send reply");
                }
            }
            Ok(_) => {}
            Err(e) => {
                error!(error = %e, user_id = core_msg.user.id, elapsed_ms, "Handler chain failed");
            }
        }
    });

    Ok(())
}

async fn on_inline_query(
    bot: Bot,
    query: InlineQuery,
    ctx: Arc<AppContext>,
) -> ResponseResult<()> {
    if let Err(e) = inline::answer(&bot, &query, &ctx.store, &ctx.github).await {
        warn!(error = %e, query = %query.query, "Failed to answer inline query");
    }
    Ok(())
}
