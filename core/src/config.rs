use std::fmt;

use serde::{Deserialize, Serialize};

pub const PAGE_PLACEHOLDER: &str = "{page}";

pub const DEFAULT_TOTAL_PAGES: usize = 16;
pub const DEFAULT_PAGE_IMAGE_TEMPLATE: &str = "photos/{page}.jpg";
pub const DEFAULT_MUSIC_SRC: &str = "music/music.mp3";
pub const DEFAULT_TURN_SOUND_SRC: &str = "music/turn.mp3";

/// Render-time configuration forwarded to the external flip-animation
/// surface. The surface owns flip physics and gestures; the widget only
/// hands it geometry bounds and behavior flags.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
    pub show_cover: bool,
    pub mobile_scroll: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 550,
            height: 450,
            min_width: 315,
            max_width: 1000,
            min_height: 400,
            max_height: 1533,
            show_cover: true,
            mobile_scroll: true,
        }
    }
}

/// Everything the widget needs at mount time. The host page may override the
/// defaults with a JSON blob; no module-level mutable state anywhere.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumConfig {
    pub title: String,
    pub total_pages: usize,
    pub page_image_template: String,
    pub music_src: String,
    pub turn_sound_src: String,
    pub surface: SurfaceConfig,
    /// Start the background loop muted at mount and unmute on the first
    /// confirmed page flip. Off by default; the explicit toggle always works.
    pub muted_autoplay: bool,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        Self {
            title: "Photo Album".to_string(),
            total_pages: DEFAULT_TOTAL_PAGES,
            page_image_template: DEFAULT_PAGE_IMAGE_TEMPLATE.to_string(),
            music_src: DEFAULT_MUSIC_SRC.to_string(),
            turn_sound_src: DEFAULT_TURN_SOUND_SRC.to_string(),
            surface: SurfaceConfig::default(),
            muted_autoplay: false,
        }
    }
}

impl AlbumConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_pages == 0 {
            return Err(ConfigError::NoPages);
        }
        if !self.page_image_template.contains(PAGE_PLACEHOLDER) {
            return Err(ConfigError::MissingPagePlaceholder {
                template: self.page_image_template.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoPages,
    MissingPagePlaceholder { template: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPages => write!(f, "total_pages must be at least 1"),
            ConfigError::MissingPagePlaceholder { template } => write!(
                f,
                "page_image_template {template:?} does not contain {PAGE_PLACEHOLDER:?}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(AlbumConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_pages_rejected() {
        let config = AlbumConfig {
            total_pages: 0,
            ..AlbumConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoPages));
    }

    #[test]
    fn template_without_placeholder_rejected() {
        let config = AlbumConfig {
            page_image_template: "photos/page.jpg".to_string(),
            ..AlbumConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingPagePlaceholder { .. })
        ));
    }
}
