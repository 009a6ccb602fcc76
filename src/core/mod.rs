pub mod constants;
pub mod frame_game;
pub mod game_stats;

pub use constants::*;
pub use frame_game::{FrameAction, FrameButton, FrameGame, FrameGameState, InteractionOutcome};
pub use game_stats::{GameStats, Leaderboard, ScoreSubmission};
