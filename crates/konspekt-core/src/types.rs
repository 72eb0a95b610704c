use serde::{Deserialize, Serialize};

/// One timestamped unit of spoken-text transcription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}

/// A full caption track, segments ordered by start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub segments: Vec<TranscriptSegment>,
    /// Language tag of the caption track the segments came from (e.g. "en-US").
    pub language: String,
}

/// A contiguous run of transcript segments grouped under one inferred title.
///
/// `title` is fixed at creation; `content` accumulates the normalized text of
/// every segment assigned to the chapter, in transcript order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub title: String,
    pub start_time: f64,
    pub content: Vec<String>,
}
