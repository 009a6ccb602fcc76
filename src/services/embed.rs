use serde::{Deserialize, Serialize};

use super::base_url::BaseUrl;
use crate::core::{APP_NAME, EMBED_VERSION, LAUNCH_BUTTON_TITLE, SPLASH_BACKGROUND_COLOR};

pub const PREVIEW_IMAGE_PATH: &str = "/api/image/preview";
pub const SPLASH_IMAGE_PATH: &str = "/api/image/splash";
pub const APP_PATH: &str = "/app";

/// Embed descriptor placed in the `fc:miniapp` and `fc:frame` meta tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniAppEmbed {
    pub version: String,
    pub image_url: String,
    pub button: EmbedButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedButton {
    pub title: String,
    pub action: EmbedAction,
}

/// Action a client performs when the launch button is pressed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
}

impl MiniAppEmbed {
    /// Build the embed descriptor for the server at `base`
    pub fn for_base(base: &BaseUrl) -> Self {
        Self {
            version: EMBED_VERSION.to_string(),
            image_url: base.join(PREVIEW_IMAGE_PATH),
            button: EmbedButton {
                title: LAUNCH_BUTTON_TITLE.to_string(),
                action: EmbedAction {
                    kind: "launch_frame".to_string(),
                    name: APP_NAME.to_string(),
                    url: base.join(APP_PATH),
                    splash_image_url: base.join(SPLASH_IMAGE_PATH),
                    splash_background_color: SPLASH_BACKGROUND_COLOR.to_string(),
                },
            },
        }
    }

    /// Serialize for a meta tag `content` attribute
    pub fn to_json(&self) -> String {
        // Plain structs of strings always serialize
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Body of `/.well-known/farcaster.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub miniapp: ManifestApp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestApp {
    pub version: String,
    pub name: String,
    pub icon_url: String,
    pub home_url: String,
    pub image_url: String,
    pub button_title: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
    /// Always serialized, `null` when the app receives no notifications
    pub webhook_url: Option<String>,
}

impl Manifest {
    /// Build the manifest for the server at `base`
    pub fn for_base(base: &BaseUrl) -> Self {
        Self {
            miniapp: ManifestApp {
                version: EMBED_VERSION.to_string(),
                name: APP_NAME.to_string(),
                icon_url: base.join(SPLASH_IMAGE_PATH),
                home_url: base.as_str().to_string(),
                image_url: base.join(PREVIEW_IMAGE_PATH),
                button_title: LAUNCH_BUTTON_TITLE.to_string(),
                splash_image_url: base.join(SPLASH_IMAGE_PATH),
                splash_background_color: SPLASH_BACKGROUND_COLOR.to_string(),
                webhook_url: None,
            },
        }
    }
}
