//! Inline query answering.
//!
//! Empty queries are ignored. Reference-shaped queries (`#n`, `nt#n`) resolve
//! against GitHub; anything else runs a documentation search. No matches yield
//! a single "no results" article rather than silence, so the user gets feedback.

use crate::format;
use crate::github::{parse_ref, GithubClient, IssueRef};
use docbot_search::{DocEntry, DocStore, Query};
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, InlineQuery, InlineQueryResult,
    InlineQueryResultArticle, InputMessageContent, InputMessageContentText, ParseMode,
};
use tracing::{info, warn};
use uuid::Uuid;

/// Inline answers carry at most this many articles.
pub const INLINE_RESULT_LIMIT: usize = 20;

fn article(
    title: impl Into<String>,
    description: impl Into<String>,
    html_body: String,
) -> InlineQueryResultArticle {
    InlineQueryResultArticle::new(
        Uuid::new_v4().to_string(),
        title,
        InputMessageContent::Text(
            InputMessageContentText::new(html_body).parse_mode(ParseMode::Html),
        ),
    )
    .description(description)
}

fn no_results_article(query_text: &str) -> InlineQueryResult {
    InlineQueryResult::Article(article(
        "❌ No results found",
        "No documentation found for your query.",
        format!(
            "No documentation found for: {}",
            teloxide::utils::html::escape(query_text)
        ),
    ))
}

fn doc_article(entry: &DocEntry) -> InlineQueryResult {
    let body = format::truncate_message(format::render_entry(entry, false));
    let mut result = article(entry.title.clone(), format::preview(entry), body);

    match reqwest::Url::parse(&entry.doc_url) {
        Ok(url) => {
            result = result.reply_markup(InlineKeyboardMarkup::new([[
                InlineKeyboardButton::url("📚 View full documentation", url),
            ]]));
        }
        Err(e) => {
            warn!(title = %entry.title, url = %entry.doc_url, error = %e, "Invalid doc URL");
        }
    }
    InlineQueryResult::Article(result)
}

fn ref_article(issue: &IssueRef) -> InlineQueryResult {
    let escape = teloxide::utils::html::escape;
    let title = format!("{} pytgcalls/{}#{}", issue.kind, issue.repo, issue.number);
    let body = format!(
        "<b>{}</b> <a href=\"{}\">pytgcalls/{}#{}</a> ({}): {}",
        issue.kind,
        escape(&issue.url),
        escape(&issue.repo),
        issue.number,
        escape(&issue.state),
        escape(&issue.title)
    );
    let mut result = article(title, issue.title.clone(), body);
    if let Ok(url) = reqwest::Url::parse(&issue.url) {
        result = result.reply_markup(InlineKeyboardMarkup::new([[InlineKeyboardButton::url(
            format!("Open {}", issue.kind),
            url,
        )]]));
    }
    InlineQueryResult::Article(result)
}

/// Builds the articles for one inline query. Separated from the transport for tests.
pub async fn build_results(
    text: &str,
    store: &DocStore,
    github: &GithubClient,
) -> Vec<InlineQueryResult> {
    if let Some(reference) = parse_ref(text) {
        let refs = github.resolve(reference).await;
        if refs.is_empty() {
            return vec![no_results_article(text)];
        }
        return refs.iter().map(ref_article).collect();
    }

    let hits = store.search(&Query::new(text), INLINE_RESULT_LIMIT);
    if hits.is_empty() {
        return vec![no_results_article(text)];
    }
    hits.iter().map(|h| doc_article(h.entry)).collect()
}

/// Answers one inline query. Empty queries are ignored, matching the bot's
/// established behavior; transport errors are logged and dropped.
pub async fn answer(
    bot: &teloxide::Bot,
    query: &InlineQuery,
    store: &DocStore,
    github: &GithubClient,
) -> anyhow::Result<()> {
    let text = query.query.trim();
    if text.is_empty() {
        return Ok(());
    }

    let results = build_results(text, store, github).await;
    info!(
        user_id = query.from.id.0,
        query = %text,
        results = results.len(),
        "Answering inline query"
    );

    bot.answer_inline_query(query.id.clone(), results).await?;
    Ok(())
}
