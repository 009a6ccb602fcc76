pub mod base_url;
pub mod embed;
pub mod frame_view;

pub use base_url::BaseUrl;
pub use embed::{Manifest, MiniAppEmbed};
pub use frame_view::FrameView;
