use tracing::info;

use super::is_admin;
use crate::state::Context;

/// Add a question and answer to the knowledge base (admin only)
#[poise::command(slash_command, guild_only)]
pub async fn add(
    ctx: Context<'_>,
    #[description = "Question, e.g. How do I reset my password?"] question: String,
    #[description = "Answer returned on a match"] answer: String,
    #[description = "Category, e.g. Account"]
    #[autocomplete = "autocomplete_category"]
    category: String,
) -> Result<(), anyhow::Error> {
    if !is_admin(&ctx) {
        ctx.say("This command is admin-only.").await?;
        return Ok(());
    }

    match ctx.data().store.add(&question, &answer, &category).await {
        Ok(entry) => {
            info!(user = ctx.author().name, entry_id = %entry.id, "entry added");
            ctx.say(format!(
                "Added **{}** under **{}**\nID: `{}`",
                entry.question, entry.category, entry.id
            ))
            .await?;
        }
        Err(e) => {
            ctx.say(format!("Could not add entry: {}", e)).await?;
        }
    }
    Ok(())
}

/// Delete a knowledge base entry by ID (admin only)
#[poise::command(slash_command, guild_only)]
pub async fn delete(
    ctx: Context<'_>,
    #[description = "Entry ID (shown by /faq list)"] id: String,
) -> Result<(), anyhow::Error> {
    if !is_admin(&ctx) {
        ctx.say("This command is admin-only.").await?;
        return Ok(());
    }

    match ctx.data().store.delete(id.trim()).await {
        Ok(entry) => {
            info!(user = ctx.author().name, entry_id = %entry.id, "entry deleted");
            ctx.say(format!("Deleted **{}** (`{}`)", entry.question, entry.id))
                .await?;
        }
        Err(e) => {
            ctx.say(format!("Could not delete: {}", e)).await?;
        }
    }
    Ok(())
}

/// Autocomplete for existing category names.
async fn autocomplete_category(ctx: Context<'_>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    ctx.data()
        .store
        .categories()
        .await
        .into_iter()
        .filter(|c| c.to_lowercase().contains(&partial))
        .take(25)
        .collect()
}
