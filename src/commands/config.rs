use tracing::info;

use super::{is_admin, percent};
use crate::chat::MatchConfig;
use crate::state::Context;

/// Configure match parameters (admin only)
#[poise::command(slash_command, guild_only)]
pub async fn config(
    ctx: Context<'_>,
    #[description = "threshold | response_delay_ms | enhance_answers | word_chars"] param: Option<String>,
    #[description = "New value"] value: Option<String>,
) -> Result<(), anyhow::Error> {
    if !is_admin(&ctx) {
        ctx.say("This command is admin-only.").await?;
        return Ok(());
    }

    match (param.as_deref(), value) {
        // Show current config
        (None, _) => {
            let config = ctx.data().match_config.read().await;
            ctx.say(format!(
                "**Match Configuration:**\n\
                 `threshold`: {} ({})\n\
                 `response_delay_ms`: {}\n\
                 `enhance_answers`: {}\n\
                 `word_chars`: {:?}\n\
                 Knowledge base: {} entries",
                config.threshold,
                percent(config.threshold),
                config.response_delay_ms,
                config.enhance_answers,
                config.word_chars,
                ctx.data().store.len().await
            ))
            .await?;
        }
        // Set a parameter
        (Some(key), Some(val)) => {
            let result = ctx.data().match_config.write().await.set(key, &val);
            match result {
                Ok(()) => {
                    info!(user = ctx.author().name, param = key, value = %val, "match config updated");
                    ctx.say(format!("`{}` set to {}", key, val)).await?;
                }
                Err(e) => {
                    ctx.say(format!("{}", e)).await?;
                }
            }
        }
        (Some(_), None) => {
            ctx.say(format!(
                "Provide both `param` and `value`. Valid params: `{}`. Example: `/faq config threshold 0.4`",
                MatchConfig::PARAMS.join("`, `")
            ))
            .await?;
        }
    }

    Ok(())
}
