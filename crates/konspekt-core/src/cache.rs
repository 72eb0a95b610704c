use std::path::{Path, PathBuf};

use crate::locale::Locale;

/// Root of the transcript cache
pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("konspekt")
}

/// Get the cache directory for a video. Video ids are filesystem-safe
/// (alphanumerics, `-` and `_`), so they key the directory directly.
pub fn get_cache_dir(video_id: &str) -> PathBuf {
    get_root_cache_dir().join(video_id)
}

/// Get the path for a cached transcript file (locale aware)
pub fn get_transcript_path(cache_dir: &Path, locale: Locale) -> PathBuf {
    cache_dir.join(format!("transcript_{}.json", locale.tag()))
}
