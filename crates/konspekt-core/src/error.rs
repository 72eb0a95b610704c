use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug)]
pub enum KonspektError {
    #[error("Unrecognized video URL: {url}")]
    InvalidUrl { url: String },

    #[error("Metadata lookup failed for {video_id}: {reason}")]
    MetadataFailed { video_id: String, reason: String },

    #[error("Subtitles are disabled for video {video_id}")]
    SubtitlesDisabled { video_id: String },

    #[error("No {language} subtitles for video {video_id} (available: {})", .available.join(", "))]
    LanguageUnavailable {
        video_id: String,
        language: Locale,
        available: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Caption request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, KonspektError>;

/// Machine-readable failure taxonomy surfaced to callers alongside the
/// locale-appropriate [`KonspektError::user_message`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NoSubtitles,
    LanguageUnavailable,
    Other,
}

impl KonspektError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KonspektError::SubtitlesDisabled { .. } => ErrorKind::NoSubtitles,
            KonspektError::LanguageUnavailable { .. } => ErrorKind::LanguageUnavailable,
            _ => ErrorKind::Other,
        }
    }

    /// User-facing message in the requested output language. The technical
    /// detail stays on the `Display` impl; this is what end users see.
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            KonspektError::SubtitlesDisabled { .. } => match locale {
                Locale::En => "Subtitles are disabled for this video",
                Locale::Ru => "Субтитры отключены для этого видео",
            },
            KonspektError::LanguageUnavailable { language, .. } => match (*language, locale) {
                (Locale::En, Locale::En) => "English subtitles not available for this video",
                (Locale::En, Locale::Ru) => "Английские субтитры недоступны для этого видео",
                (Locale::Ru, Locale::En) => "Russian subtitles not available for this video",
                (Locale::Ru, Locale::Ru) => "Русские субтитры недоступны для этого видео",
            },
            _ => match locale {
                Locale::En => "An error occurred while processing the video",
                Locale::Ru => "Произошла ошибка при обработке видео",
            },
        }
    }
}
