use std::collections::HashSet;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkOptions};
use tokio::sync::RwLock;
use tracing::{error, info, Level};

use faq_desk::chat::{MatchConfig, Responder};
use faq_desk::kb::KnowledgeStore;
use faq_desk::state::AppState;
use faq_desk::{commands, llm};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    // Load env
    let _ = dotenv::dotenv();
    let token = dotenv::var("DISCORD_TOKEN")
        .map_err(|_| anyhow::anyhow!("DISCORD_TOKEN required"))?;
    let guild_id: Option<serenity::GuildId> = dotenv::var("DISCORD_GUILD_ID")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(serenity::GuildId::new);

    // Knowledge base lives in memory for the session
    let store = Arc::new(KnowledgeStore::seeded());
    info!(entries = store.len().await, "Knowledge base seeded");

    let generator = llm::generator_from_env()?;
    let responder = Arc::new(Responder::new(generator));

    // Parse admin user IDs from env
    let admin_ids: HashSet<u64> = dotenv::var("ADMIN_USER_IDS")
        .unwrap_or_default()
        .split(',')
        .filter_map(|s| s.trim().parse::<u64>().ok())
        .collect();
    if !admin_ids.is_empty() {
        info!(count = admin_ids.len(), "Admin users configured");
    }

    let match_config = Arc::new(RwLock::new(MatchConfig::default()));

    let app_state = AppState {
        store,
        responder,
        admin_ids,
        match_config,
    };

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MESSAGES;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![commands::faq()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);

                let commands = &framework.options().commands;
                for cmd in commands {
                    info!("  /{} ({} subcommands)", cmd.name, cmd.subcommands.len());
                }

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, gid)
                        .await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(ctx, &framework.options().commands)
                        .await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!("Starting FAQ Desk bot...");

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}
