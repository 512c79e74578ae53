use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

use crate::api::auth::Role;
use crate::config::AuthConfig;
use crate::models::GameId;
use crate::store::ClubStore;

/// Signal emitted after a score mutation so schedule views refetch.
///
/// Carried on a broadcast channel in [`AppState`]; the mutation path does
/// not care whether anyone is currently listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleRefresh {
    ScoreSet { game_id: GameId },
    ScoreCleared { game_id: GameId },
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClubStore>,
    pub auth: Arc<AuthConfig>,
    pub sessions: Arc<RwLock<HashMap<String, Role>>>,
    pub schedule_events: broadcast::Sender<ScheduleRefresh>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClubStore>, auth: AuthConfig) -> Self {
        let (schedule_events, _) = broadcast::channel(16);
        Self {
            store,
            auth: Arc::new(auth),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            schedule_events,
        }
    }
}
