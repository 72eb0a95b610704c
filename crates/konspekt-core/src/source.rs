use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tokio::process::Command;
use tracing::debug;

use crate::error::{KonspektError, Result};
use crate::locale::Locale;
use crate::types::{Transcript, TranscriptSegment};

/// URL shapes that carry an 11-character video id, tried in order.
static VIDEO_ID_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11}).*").unwrap(),
        Regex::new(r"youtu\.be/([0-9A-Za-z_-]{11})").unwrap(),
    ]
});

/// Caption format requested from the track list.
const CAPTION_FORMAT: &str = "json3";

/// Pull the 11-character video id out of a watch, share or embed URL.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(url))
        .map(|caps| caps[1].to_string())
}

/// Subset of `yt-dlp --dump-single-json` output: caption tracks per language tag.
#[derive(Debug, Deserialize)]
pub struct VideoMetadata {
    #[serde(default)]
    subtitles: BTreeMap<String, Vec<CaptionTrack>>,
    #[serde(default)]
    automatic_captions: BTreeMap<String, Vec<CaptionTrack>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CaptionTrack {
    pub url: String,
    pub ext: String,
}

impl VideoMetadata {
    fn has_any_tracks(&self) -> bool {
        !self.subtitles.is_empty() || !self.automatic_captions.is_empty()
    }

    fn available_languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self
            .subtitles
            .keys()
            .chain(self.automatic_captions.keys())
            .cloned()
            .collect();
        langs.sort();
        langs.dedup();
        langs
    }

    /// The json3 track for a language tag, manual subtitles before automatic captions.
    fn json3_track(&self, tag: &str) -> Option<&CaptionTrack> {
        self.subtitles
            .get(tag)
            .into_iter()
            .chain(self.automatic_captions.get(tag))
            .flat_map(|tracks| tracks.iter())
            .find(|track| track.ext == CAPTION_FORMAT)
    }
}

/// Caption lookup order per locale. English tries the en-US track before plain en.
fn candidate_tags(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &["en-US", "en"],
        Locale::Ru => &["ru"],
    }
}

/// Select the caption track for a locale, or classify why none exists.
fn select_track<'a>(
    metadata: &'a VideoMetadata,
    video_id: &str,
    locale: Locale,
) -> Result<(&'static str, &'a CaptionTrack)> {
    if !metadata.has_any_tracks() {
        return Err(KonspektError::SubtitlesDisabled {
            video_id: video_id.to_string(),
        });
    }
    for &tag in candidate_tags(locale) {
        if let Some(track) = metadata.json3_track(tag) {
            return Ok((tag, track));
        }
    }
    Err(KonspektError::LanguageUnavailable {
        video_id: video_id.to_string(),
        language: locale,
        available: metadata.available_languages(),
    })
}

/// Look up caption metadata for a video using yt-dlp
pub async fn fetch_video_metadata(video_id: &str) -> Result<VideoMetadata> {
    let url = format!("https://www.youtube.com/watch?v={video_id}");
    let output = Command::new("yt-dlp")
        .arg("--dump-single-json")
        .arg("--skip-download")
        .arg(&url)
        .output()
        .await?;

    if !output.status.success() {
        return Err(KonspektError::MetadataFailed {
            video_id: video_id.to_string(),
            reason: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }

    let metadata: VideoMetadata = serde_json::from_slice(&output.stdout)?;
    Ok(metadata)
}

/// YouTube json3 caption payload: timed events carrying UTF-8 runs.
#[derive(Debug, Deserialize)]
struct CaptionEvents {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: f64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: f64,
    #[serde(default)]
    segs: Vec<CaptionSeg>,
}

#[derive(Debug, Deserialize)]
struct CaptionSeg {
    #[serde(default)]
    utf8: String,
}

fn events_to_segments(events: CaptionEvents) -> Vec<TranscriptSegment> {
    events
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs.iter().map(|seg| seg.utf8.as_str()).collect();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(TranscriptSegment {
                text: text.to_string(),
                start: event.start_ms / 1000.0,
                duration: event.duration_ms / 1000.0,
            })
        })
        .collect()
}

/// Fetch and parse the caption track for a video in the requested locale.
pub async fn fetch_transcript(video_id: &str, locale: Locale) -> Result<Transcript> {
    let metadata = fetch_video_metadata(video_id).await?;
    let (tag, track) = select_track(&metadata, video_id, locale)?;
    debug!(video_id, tag, "selected caption track");

    let events = reqwest::Client::new()
        .get(&track.url)
        .send()
        .await?
        .json::<CaptionEvents>()
        .await?;

    let segments = events_to_segments(events);
    debug!(video_id, segments = segments.len(), "parsed caption events");

    Ok(Transcript {
        segments,
        language: tag.to_string(),
    })
}
