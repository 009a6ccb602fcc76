use super::base_url::BaseUrl;
use crate::core::{FrameAction, FrameButton, FrameGameState};

pub const FRAME_POST_PATH: &str = "/frame";

/// A button rendered as `fc:frame:button:<index>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameButtonView {
    pub index: u8,
    pub label: &'static str,
}

/// Everything the frame page template needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub image_url: String,
    pub post_url: String,
    pub buttons: Vec<FrameButtonView>,
}

/// Image route shown after the given action
pub fn image_path(action: FrameAction) -> &'static str {
    match action {
        FrameAction::Start | FrameAction::Home => "/image/start",
        FrameAction::Play => "/image/result",
        FrameAction::Stats => "/image/stats",
    }
}

fn button(button: FrameButton, label: &'static str) -> FrameButtonView {
    FrameButtonView {
        index: button.index(),
        label,
    }
}

/// Buttons offered after the given action
///
/// Indices always keep their meaning: 1 plays, 2 shows stats, 3 goes home.
pub fn buttons_for(action: FrameAction) -> Vec<FrameButtonView> {
    match action {
        FrameAction::Start | FrameAction::Home => vec![
            button(FrameButton::Play, "🎮 Start Game"),
            button(FrameButton::Stats, "📊 View Stats"),
        ],
        FrameAction::Play => vec![
            button(FrameButton::Play, "🚀 Play Again"),
            button(FrameButton::Stats, "📊 Stats"),
            button(FrameButton::Home, "🏠 Home"),
        ],
        FrameAction::Stats => vec![
            button(FrameButton::Play, "🎮 Play"),
            button(FrameButton::Stats, "🔄 Refresh"),
            button(FrameButton::Home, "🏠 Home"),
        ],
    }
}

impl FrameView {
    /// View for the current state
    ///
    /// Image URLs carry the click count so clients refetch after every press.
    pub fn for_state(base: &BaseUrl, state: &FrameGameState) -> Self {
        Self {
            image_url: format!(
                "{}?v={}",
                base.join(image_path(state.last_action)),
                state.clicks
            ),
            post_url: base.join(FRAME_POST_PATH),
            buttons: buttons_for(state.last_action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseUrl {
        BaseUrl("https://frame.example".to_string())
    }

    #[test]
    fn test_start_view() {
        let view = FrameView::for_state(&base(), &FrameGameState::default());

        assert_eq!(view.image_url, "https://frame.example/image/start?v=0");
        assert_eq!(view.post_url, "https://frame.example/frame");
        assert_eq!(view.buttons.len(), 2);
        assert_eq!(view.buttons[0].index, 1);
        assert_eq!(view.buttons[1].index, 2);
    }

    #[test]
    fn test_play_view() {
        let state = FrameGameState {
            score: 7,
            clicks: 3,
            last_action: FrameAction::Play,
        };
        let view = FrameView::for_state(&base(), &state);

        assert_eq!(view.image_url, "https://frame.example/image/result?v=3");
        let indices: Vec<u8> = view.buttons.iter().map(|b| b.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_image_paths() {
        assert_eq!(image_path(FrameAction::Stats), "/image/stats");
        assert_eq!(image_path(FrameAction::Home), "/image/start");
    }
}
