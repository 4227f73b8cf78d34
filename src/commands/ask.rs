use std::time::Duration;

use tracing::info;

use super::{is_admin, percent, send_chunked};
use crate::nlp;
use crate::state::Context;

/// Ask the support assistant a question
#[poise::command(slash_command, guild_only)]
pub async fn ask(
    ctx: Context<'_>,
    #[description = "Your question"] question: String,
    #[description = "Show top candidate scores (admin only)"] debug: Option<bool>,
) -> Result<(), anyhow::Error> {
    ctx.defer().await?;

    let show_debug = debug.unwrap_or(false) && is_admin(&ctx);
    let config = ctx.data().match_config.read().await.clone();

    // Snapshot so edits made while we wait on the fallback don't block or leak in.
    let entries = ctx.data().store.snapshot().await;

    info!(
        user = ctx.author().name,
        question,
        entries = entries.len(),
        "question received"
    );

    tokio::time::sleep(Duration::from_millis(config.response_delay_ms)).await;
    let reply = ctx.data().responder.respond(&question, &entries, &config).await;

    let source = if reply.is_fallback {
        "AI generated"
    } else {
        "Knowledge base"
    };
    let mut full = format!(
        "**Q:** {}\n\n{}\n\n-# {} | match {}",
        question,
        reply.content,
        source,
        percent(reply.match_score)
    );
    if let Some(entry) = &reply.matched {
        full.push_str(&format!(" | {} `{}`", entry.category, entry.id));
    }

    if show_debug {
        let top = nlp::top_candidates(&question, &entries, config.word_chars, 3);
        full.push_str(&format!(
            "\n\n---\n**[Debug]** tokens: `{:?}` | threshold {}\n",
            nlp::tokenize_with(&question, config.word_chars),
            percent(config.threshold)
        ));
        if top.is_empty() {
            full.push_str("No entries scored.\n");
        }
        for (rank, scored) in top.iter().enumerate() {
            full.push_str(&format!(
                "{}. {} - #{} {} `{}`\n",
                rank + 1,
                percent(scored.score),
                scored.index,
                scored.entry.question,
                scored.entry.id
            ));
        }
    }

    send_chunked(&ctx, &full).await
}
