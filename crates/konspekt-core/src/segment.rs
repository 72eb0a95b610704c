use crate::locale::Locale;
use crate::normalize::normalize;
use crate::types::{Chapter, TranscriptSegment};

/// Minimum gap between chapter starts. Title-cased words that appear closer
/// together than this continue the open chapter instead of starting a new one.
pub const TIME_THRESHOLD_SECS: f64 = 120.0;

/// Words taken from a boundary segment to form the chapter title.
const TITLE_WORDS: usize = 3;

/// Lead words of this many characters or fewer are too weak a topic signal.
const TITLE_MIN_CHARS: usize = 3;

enum State {
    NoChapter,
    InChapter(Chapter),
}

/// True when a token reads like the start of a title: leading uppercase, then
/// uppercase only after uncased characters and lowercase only after cased ones.
fn is_title_cased(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    let mut prev_cased = true;
    for ch in chars {
        if ch.is_uppercase() && prev_cased {
            return false;
        }
        if ch.is_lowercase() && !prev_cased {
            return false;
        }
        prev_cased = ch.is_uppercase() || ch.is_lowercase();
    }
    true
}

fn is_boundary_cue(words: &[&str]) -> bool {
    words
        .first()
        .is_some_and(|word| is_title_cased(word) && word.chars().count() > TITLE_MIN_CHARS)
}

/// Group transcript segments into chapters keyed by title-cased lead words and a
/// minimum time gap between boundaries.
///
/// Single forward pass with two states: either no chapter is open, or one is.
/// A boundary cue opens a chapter when none is open or the open one started more
/// than [`TIME_THRESHOLD_SECS`] ago; opening closes (pushes) the previous chapter.
/// Every segment seen while a chapter is open appends its normalized text to that
/// chapter, so chapters mirror transcript order and never overlap. When no segment
/// ever produces a boundary, the whole transcript is wrapped in one fallback
/// chapter under the locale's default title.
pub fn detect_chapters(segments: &[TranscriptSegment], locale: Locale) -> Vec<Chapter> {
    let mut chapters = Vec::new();
    let mut state = State::NoChapter;

    for segment in segments {
        let text = normalize(&segment.text, locale);
        let words: Vec<&str> = text.split_whitespace().collect();

        if is_boundary_cue(&words) {
            let open_new = match &state {
                State::NoChapter => true,
                State::InChapter(current) => {
                    segment.start - current.start_time > TIME_THRESHOLD_SECS
                }
            };
            if open_new {
                if let State::InChapter(finished) =
                    std::mem::replace(&mut state, State::NoChapter)
                {
                    chapters.push(finished);
                }
                state = State::InChapter(Chapter {
                    title: words[..words.len().min(TITLE_WORDS)].join(" "),
                    start_time: segment.start,
                    content: Vec::new(),
                });
            }
        }

        if let State::InChapter(current) = &mut state {
            current.content.push(text);
        }
    }

    if let State::InChapter(finished) = state {
        chapters.push(finished);
    }

    if chapters.is_empty() {
        return vec![Chapter {
            title: locale.strings().fallback_chapter_title.to_string(),
            // never read on the fallback path
            start_time: 0.0,
            content: segments
                .iter()
                .map(|segment| normalize(&segment.text, locale))
                .collect(),
        }];
    }

    chapters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, start: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start,
            duration: 5.0,
        }
    }

    #[test]
    fn title_case_detection() {
        assert!(is_title_cased("Introduction"));
        assert!(is_title_cased("Hello,"));
        assert!(is_title_cased("Сегодня"));
        assert!(!is_title_cased("hello"));
        assert!(!is_title_cased("USA"));
        assert!(!is_title_cased("McDonald"));
        assert!(!is_title_cased("iPhone"));
        assert!(!is_title_cased(""));
    }

    #[test]
    fn short_lead_words_are_not_boundaries() {
        // "Now" is title-cased but only 3 characters
        let chapters = detect_chapters(&[seg("Now we talk", 0.0)], Locale::En);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Main Content");
    }

    #[test]
    fn opens_chapter_on_title_cued_segment() {
        let transcript = [
            seg("Introduction first topic begins", 0.0),
            seg("more detail follows", 10.0),
        ];
        let chapters = detect_chapters(&transcript, Locale::En);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Introduction first topic");
        assert_eq!(chapters[0].start_time, 0.0);
        assert_eq!(
            chapters[0].content,
            vec!["Introduction first topic begins", "more detail follows"]
        );
    }

    #[test]
    fn close_cues_continue_the_open_chapter() {
        // second cue arrives 60s in, under the threshold
        let transcript = [
            seg("Overview comes first", 0.0),
            seg("Details come next", 60.0),
        ];
        let chapters = detect_chapters(&transcript, Locale::En);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Overview comes first");
        assert_eq!(chapters[0].content.len(), 2);
    }

    #[test]
    fn distant_cues_open_new_chapters() {
        let transcript = [
            seg("Overview comes first", 0.0),
            seg("filler talk here", 60.0),
            seg("Details come much later", 130.0),
        ];
        let chapters = detect_chapters(&transcript, Locale::En);
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Overview comes first");
        assert_eq!(chapters[0].content.len(), 2);
        assert_eq!(chapters[1].title, "Details come much");
        assert_eq!(chapters[1].start_time, 130.0);
        assert_eq!(chapters[1].content, vec!["Details come much later"]);
    }

    #[test]
    fn gap_is_measured_from_chapter_start() {
        // exactly at the threshold is not enough; strictly greater is required
        let transcript = [
            seg("Overview comes first", 0.0),
            seg("Details come next", 120.0),
        ];
        let chapters = detect_chapters(&transcript, Locale::En);
        assert_eq!(chapters.len(), 1);
    }

    #[test]
    fn fallback_wraps_entire_transcript() {
        let transcript = [
            seg("all lowercase talk", 0.0),
            seg("[music]", 10.0),
            seg("still nothing title cased", 20.0),
        ];
        let chapters = detect_chapters(&transcript, Locale::Ru);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Основное содержание");
        assert_eq!(chapters[0].content.len(), 3);
    }

    #[test]
    fn empty_transcript_yields_fallback_with_empty_content() {
        let chapters = detect_chapters(&[], Locale::En);
        assert_eq!(chapters.len(), 1);
        assert_eq!(chapters[0].title, "Main Content");
        assert!(chapters[0].content.is_empty());
    }

    #[test]
    fn title_uses_normalized_words() {
        // stop-words are removed before the title is taken
        let transcript = [seg("Testing the big rewrite today", 0.0)];
        let chapters = detect_chapters(&transcript, Locale::En);
        assert_eq!(chapters[0].title, "Testing big rewrite");
    }
}
