//! Media classification for resolved assets

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Extensions rendered as video when no configuration overrides them
pub const DEFAULT_VIDEO_EXTENSIONS: &[&str] = &["gif", "mp4", "avi"];

/// How a resolved asset should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image (png, jpg, ...)
    #[default]
    Image,
    /// Animated clip (gif, mp4, avi, ...)
    Video,
}

impl MediaKind {
    /// Classify an asset path by its extension, case-insensitively
    #[must_use]
    pub fn classify<S: AsRef<str>>(path: &str, video_extensions: &[S]) -> Self {
        let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
            return Self::Image;
        };

        let is_video = video_extensions
            .iter()
            .any(|v| v.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext));

        if is_video { Self::Video } else { Self::Image }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
        }
    }
}
