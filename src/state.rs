use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{
    config::Config,
    core::{FrameGame, GameStats},
};

/// Shared state of the clicker server
#[derive(Clone, FromRef)]
pub struct ClickerState {
    pub stats: Arc<RwLock<GameStats>>,
    pub config: Arc<Config>,
}

impl ClickerState {
    pub fn new(config: Config) -> Self {
        Self {
            stats: Arc::new(RwLock::new(GameStats::new())),
            config: Arc::new(config),
        }
    }
}

/// Shared state of the frame server
#[derive(Clone, FromRef)]
pub struct FrameState {
    pub game: Arc<RwLock<FrameGame>>,
    pub config: Arc<Config>,
}

impl FrameState {
    /// Build the state, seeding the game's random source from the config when set
    pub fn new(config: Config) -> Self {
        Self {
            game: Arc::new(RwLock::new(FrameGame::from_seed(config.frame_rng_seed))),
            config: Arc::new(config),
        }
    }
}
