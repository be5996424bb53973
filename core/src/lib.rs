pub mod config;
pub mod navigator;
pub mod notice;
pub mod pages;
pub mod playback;
pub mod share;
pub mod viewport;

pub use config::{AlbumConfig, ConfigError, SurfaceConfig};
pub use navigator::{command_for_key, FlipConfirmed, NavCommand, NavigatorState, PageIndex};
pub use notice::Notice;
pub use pages::{page_assets, PageAsset};
pub use playback::{PlaybackCommand, PlaybackState};
pub use share::clipboard_settled;
pub use viewport::{ViewportCommand, ViewportState};
