/// Highest score the clicker accepts from a single round
pub const MAX_SCORE: u32 = 1000;

/// Number of most recent scores kept for the leaderboard
pub const RECENT_SCORES_LIMIT: usize = 50;

/// Upper bound of the random gain awarded by a single "play" press
pub const MAX_PLAY_GAIN: u64 = 10;

/// Display name of the mini-app
pub const APP_NAME: &str = "Space Clicker";

/// Label of the launch button shown in casts and in the manifest
pub const LAUNCH_BUTTON_TITLE: &str = "🎮 Play Game";

/// Background behind the splash image while the mini-app loads
pub const SPLASH_BACKGROUND_COLOR: &str = "#1a1a2e";

/// Version of the embed descriptor and manifest formats
pub const EMBED_VERSION: &str = "1";

/// Length of a clicker round in seconds
pub const ROUND_SECONDS: u32 = 30;

/// Number of scores shown in the in-game top list
pub const TOP_SCORES_SHOWN: usize = 5;
