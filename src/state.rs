use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::chat::{MatchConfig, Responder};
use crate::kb::KnowledgeStore;

pub struct AppState {
    pub store: Arc<KnowledgeStore>,
    pub responder: Arc<Responder>,
    pub admin_ids: HashSet<u64>,
    pub match_config: Arc<RwLock<MatchConfig>>,
}

impl AppState {
    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
