//! Rendering documentation entries as Telegram HTML.
//!
//! Output layout: bold title with kind and library, signature as a pre block,
//! description, example code, then the structured lists (parameters, enum
//! members, type properties). RAISES sections are only included on request.
//! Replies are capped below Telegram's message size limit.

use docbot_search::{DocEntry, DocItem, SearchHit};
use teloxide::utils::html::escape;

/// Telegram's maximum message length in characters.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Cut point leaving room for the truncation note.
const TRUNCATE_AT: usize = 4000;

const TRUNCATION_NOTE: &str =
    "...\n\n<i>Documentation truncated. Open the full documentation for the rest.</i>";

/// Renders one entry as HTML. `include_raises` controls whether RAISES
/// sections appear; chat and inline replies leave them out.
pub fn render_entry(entry: &DocEntry, include_raises: bool) -> String {
    let mut parts = vec![format!(
        "<b>{}</b> <i>({}, {})</i>",
        escape(&entry.title),
        entry.kind,
        entry.lib
    )];

    if let Some(signature) = &entry.details.signature {
        parts.push(format!("<pre>{}</pre>", escape(signature)));
    }

    if !entry.description.is_empty() {
        parts.push(escape(&entry.description));
    }

    if let Some(code) = &entry.example.code {
        let lang = entry.example.language.as_deref().unwrap_or("python");
        parts.push(format!(
            "<b>Example ({}):</b>\n<pre>{}</pre>",
            escape(lang),
            escape(code.trim())
        ));
    }

    for section in &entry.details.sections {
        let is_raises = section.title.eq_ignore_ascii_case("RAISES");
        if is_raises && !include_raises {
            continue;
        }
        parts.push(format!("<b>{}</b>", escape(&section.title)));
        for item in &section.items {
            if is_raises {
                for line in item.description.lines() {
                    let line = line.trim();
                    if !line.is_empty() {
                        parts.push(format!("• {}", escape(line)));
                    }
                }
            } else {
                parts.push(format!("• {}", render_named_item(item, ":")));
            }
        }
    }

    if !entry.details.members.is_empty() {
        parts.push("<b>Members:</b>".to_string());
        for member in &entry.details.members {
            let mut line = format!("<code>{}</code>", escape(&member.name));
            if let Some(value) = &member.value {
                line.push_str(&format!(" = <code>{}</code>", escape(value)));
            }
            if !member.description.is_empty() {
                line.push_str(&format!(" — {}", escape(&member.description)));
            }
            parts.push(format!("• {line}"));
        }
    }

    if !entry.details.properties.is_empty() {
        parts.push("<b>Properties:</b>".to_string());
        for prop in &entry.details.properties {
            parts.push(format!("• {}", render_named_item(prop, " ->")));
        }
    }

    parts.join("\n")
}

/// `<code>name</code>{sep} <i>type</i> — description`, omitting missing pieces.
fn render_named_item(item: &DocItem, type_sep: &str) -> String {
    let mut line = format!("<code>{}</code>", escape(item.name.trim()));
    if let Some(t) = &item.item_type {
        if !t.trim().is_empty() {
            line.push_str(&format!("{type_sep} <i>{}</i>", escape(t.trim())));
        }
    }
    if !item.description.trim().is_empty() {
        line.push_str(&format!(" — {}", escape(item.description.trim())));
    }
    line
}

/// Renders several hits as one chat reply, blocks separated by a blank line,
/// capped to the message size limit.
pub fn render_hits(hits: &[SearchHit<'_>], include_raises: bool) -> String {
    let blocks: Vec<String> = hits
        .iter()
        .map(|h| render_entry(h.entry, include_raises))
        .collect();
    truncate_message(blocks.join("\n\n"))
}

/// Caps a rendered body below [`MAX_MESSAGE_LEN`] characters, appending a
/// visible note when content was dropped. Counts characters, not bytes, to
/// stay on UTF-8 boundaries.
pub fn truncate_message(text: String) -> String {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return text;
    }
    let mut out: String = text.chars().take(TRUNCATE_AT).collect();
    out.push_str(TRUNCATION_NOTE);
    out
}

/// Short plain-text preview of an entry for inline result descriptions.
pub fn preview(entry: &DocEntry) -> String {
    let source = if entry.description.is_empty() {
        &entry.title
    } else {
        &entry.description
    };
    snippet(source)
}

/// Caps arbitrary text at 100 characters with an ellipsis. Used for inline
/// previews and for echoing user queries back, where the surrounding
/// template must stay far below the message size limit.
pub fn snippet(source: &str) -> String {
    let mut out: String = source.chars().take(100).collect();
    if source.chars().count() > 100 {
        out.push_str("...");
    }
    out
}
