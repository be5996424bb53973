use std::fmt;

/// User-visible, non-fatal outcome of an action against a host capability.
/// Every failed user-initiated action maps to exactly one notice; turn-sound
/// failures are swallowed before reaching this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    PlaybackBlocked,
    FullscreenDenied { reason: String },
    LinkCopied,
    CopyFailed,
}

impl Notice {
    /// CSS modifier for the notice banner.
    pub fn severity(&self) -> &'static str {
        match self {
            Notice::LinkCopied => "info",
            Notice::PlaybackBlocked | Notice::FullscreenDenied { .. } | Notice::CopyFailed => {
                "warning"
            }
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::PlaybackBlocked => {
                write!(f, "Playback was blocked by the browser. Tap the speaker to start the music.")
            }
            Notice::FullscreenDenied { reason } => {
                write!(f, "Fullscreen was denied: {reason}")
            }
            Notice::LinkCopied => write!(f, "Share link copied to clipboard."),
            Notice::CopyFailed => {
                write!(f, "Could not copy the link. Copy it from the address bar.")
            }
        }
    }
}
