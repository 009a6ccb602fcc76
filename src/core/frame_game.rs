use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::MAX_PLAY_GAIN;

/// Last action processed by the frame game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameAction {
    #[default]
    Start,
    Play,
    Stats,
    Home,
}

impl FrameAction {
    /// Get the string representation of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameAction::Start => "start",
            FrameAction::Play => "play",
            FrameAction::Stats => "stats",
            FrameAction::Home => "home",
        }
    }
}

/// Frame buttons, numbered the way clients report `buttonIndex`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameButton {
    Play = 1,
    Stats = 2,
    Home = 3,
}

impl FrameButton {
    pub fn index(self) -> u8 {
        self as u8
    }

    /// The action a press of this button records
    pub fn action(self) -> FrameAction {
        match self {
            FrameButton::Play => FrameAction::Play,
            FrameButton::Stats => FrameAction::Stats,
            FrameButton::Home => FrameAction::Home,
        }
    }
}

impl TryFrom<i64> for FrameButton {
    type Error = i64;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            1 => Ok(FrameButton::Play),
            2 => Ok(FrameButton::Stats),
            3 => Ok(FrameButton::Home),
            other => Err(other),
        }
    }
}

/// Counters shown by the frame game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameGameState {
    /// Points earned by "play" presses
    pub score: u64,
    /// Interactions processed
    pub clicks: u64,
    pub last_action: FrameAction,
}

/// What a single button press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionOutcome {
    pub button: FrameButton,
    /// Points added to the score (zero unless the button was Play)
    pub gained: u64,
    /// State after the press
    pub state: FrameGameState,
}

/// Frame game state together with the random source used for score gains
#[derive(Debug)]
pub struct FrameGame {
    state: FrameGameState,
    rng: StdRng,
}

impl FrameGame {
    /// Create a game driven by the given random source
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: FrameGameState::default(),
            rng,
        }
    }

    /// Create a game with a reproducible random source when a seed is given,
    /// or an entropy-seeded one otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng)
    }

    /// Current state
    pub fn state(&self) -> FrameGameState {
        self.state
    }

    /// Process a button press
    ///
    /// Every press counts as one click. Play adds a random gain in
    /// `1..=MAX_PLAY_GAIN`; Stats and Home only change the last action.
    pub fn apply_interaction(&mut self, button: FrameButton) -> InteractionOutcome {
        self.state.clicks += 1;

        let gained = match button {
            FrameButton::Play => {
                let gain = self.rng.gen_range(1..=MAX_PLAY_GAIN);
                self.state.score += gain;
                gain
            }
            FrameButton::Stats | FrameButton::Home => 0,
        };
        self.state.last_action = button.action();

        tracing::debug!(
            "Frame button {} -> {} (+{}), score {}, clicks {}",
            button.index(),
            self.state.last_action.as_str(),
            gained,
            self.state.score,
            self.state.clicks
        );

        InteractionOutcome {
            button,
            gained,
            state: self.state,
        }
    }

    /// Drop all progress and return the fresh state
    pub fn reset(&mut self) -> FrameGameState {
        self.state = FrameGameState::default();
        self.state
    }
}

impl Default for FrameGame {
    fn default() -> Self {
        Self::from_seed(None)
    }
}
