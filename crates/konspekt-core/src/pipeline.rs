use std::path::Path;

use tokio::fs;
use tracing::debug;

use crate::digest::render_digest;
use crate::error::Result;
use crate::locale::Locale;
use crate::segment::detect_chapters;
use crate::types::Transcript;

/// Condense a transcript into a rendered digest.
///
/// Pure and synchronous: detects chapters, then renders them. Safe to call
/// concurrently from independent request contexts; each call owns its own
/// chapter list.
pub fn summarize_transcript(transcript: &Transcript, locale: Locale) -> String {
    let chapters = detect_chapters(&transcript.segments, locale);
    debug!(chapters = chapters.len(), locale = %locale, "detected chapters");
    render_digest(&chapters, locale)
}

/// Load a transcript from a cached file
pub async fn load_transcript(path: &Path) -> Result<Transcript> {
    let json_content = fs::read_to_string(path).await?;
    let transcript: Transcript = serde_json::from_str(&json_content)?;
    Ok(transcript)
}

/// Save a fetched transcript to the cache
pub async fn save_transcript(transcript: &Transcript, path: &Path) -> Result<()> {
    let pretty_json = serde_json::to_string_pretty(transcript)?;
    fs::write(path, &pretty_json).await?;
    Ok(())
}
