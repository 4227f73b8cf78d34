use std::collections::BTreeMap;

use super::send_chunked;
use crate::kb::types::KnowledgeEntry;
use crate::state::Context;

/// Search questions, answers and categories
#[poise::command(slash_command, guild_only)]
pub async fn search(
    ctx: Context<'_>,
    #[description = "Text to look for"] term: String,
    #[description = "Max entries to show"] limit: Option<u32>,
) -> Result<(), anyhow::Error> {
    let limit = limit.unwrap_or(10) as usize;
    let found = ctx.data().store.search(&term).await;

    if found.is_empty() {
        ctx.say(format!("No entries found matching **{}**.", term)).await?;
        return Ok(());
    }

    let mut output = format!("**{} entries matching '{}'**\n\n", found.len(), term);
    for entry in found.iter().take(limit) {
        output.push_str(&render_entry(entry));
    }
    if found.len() > limit {
        output.push_str(&format!("_…and {} more_\n", found.len() - limit));
    }

    send_chunked(&ctx, &output).await
}

/// List knowledge base entries grouped by category
#[poise::command(slash_command, guild_only)]
pub async fn list(
    ctx: Context<'_>,
    #[description = "Max entries to show"] limit: Option<u32>,
) -> Result<(), anyhow::Error> {
    let limit = limit.unwrap_or(25) as usize;
    let entries = ctx.data().store.list(limit).await;

    if entries.is_empty() {
        ctx.say("The knowledge base is empty. Use `/faq add` to create entries.")
            .await?;
        return Ok(());
    }

    let mut by_category: BTreeMap<&str, Vec<&KnowledgeEntry>> = BTreeMap::new();
    for entry in &entries {
        by_category.entry(entry.category.as_str()).or_default().push(entry);
    }

    let total = ctx.data().store.len().await;
    let mut output = format!("**Knowledge Base** ({} of {} entries)\n\n", entries.len(), total);
    for (category, category_entries) in &by_category {
        output.push_str(&format!("**{}**\n", category));
        for entry in category_entries {
            output.push_str(&format!("  - {} `{}`\n", entry.question, entry.id));
        }
        output.push('\n');
    }

    send_chunked(&ctx, &output).await
}

/// Show one entry in full
#[poise::command(slash_command, guild_only)]
pub async fn show(
    ctx: Context<'_>,
    #[description = "Entry ID (shown by /faq list)"] id: String,
) -> Result<(), anyhow::Error> {
    match ctx.data().store.get(id.trim()).await {
        Some(entry) => send_chunked(&ctx, &render_entry(&entry)).await,
        None => {
            ctx.say(format!("No entry with ID `{}`.", id.trim())).await?;
            Ok(())
        }
    }
}

fn render_entry(entry: &KnowledgeEntry) -> String {
    format!(
        "**[{}]** {} `{}`\n> {}\n\n",
        entry.category, entry.question, entry.id, entry.answer
    )
}
