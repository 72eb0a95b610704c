//! Konspekt Core Library
//!
//! Core functionality for fetching YouTube caption tracks and condensing them
//! into chaptered, bullet-point digests.

pub mod cache;
pub mod digest;
pub mod error;
pub mod locale;
pub mod normalize;
pub mod pipeline;
pub mod segment;
pub mod source;
pub mod types;

// Re-export commonly used items at crate root
pub use cache::{get_cache_dir, get_root_cache_dir, get_transcript_path};
pub use digest::{MAX_CHAPTERS, format_timestamp, render_digest};
pub use error::{ErrorKind, KonspektError, Result};
pub use locale::{Locale, LocaleStrings};
pub use normalize::normalize;
pub use pipeline::{load_transcript, save_transcript, summarize_transcript};
pub use segment::{TIME_THRESHOLD_SECS, detect_chapters};
pub use source::{extract_video_id, fetch_transcript, fetch_video_metadata};
pub use types::{Chapter, Transcript, TranscriptSegment};
