use crate::locale::Locale;
use crate::types::Chapter;

/// Digests never include more than this many chapters.
pub const MAX_CHAPTERS: usize = 10;

/// Sentences with this many whitespace tokens or fewer are dropped as noise.
const MIN_SENTENCE_WORDS: usize = 3;

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Render chapters as a markdown digest: a locale heading, then up to
/// [`MAX_CHAPTERS`] `##` sections of extracted bullet sentences.
///
/// Sentences are split on `.`, `!` and `?`. When a chapter yields more than
/// three qualifying sentences, the first, middle and last are kept; otherwise
/// all of them are. A chapter with no qualifying sentences still gets its
/// heading, just without bullets.
pub fn render_digest(chapters: &[Chapter], locale: Locale) -> String {
    let mut output = String::new();
    output.push_str(locale.strings().digest_heading);
    output.push_str("\n\n");

    for chapter in chapters.iter().take(MAX_CHAPTERS) {
        output.push_str(&format!("## {}\n", chapter.title));

        let full_text = chapter.content.join(" ");
        let sentences: Vec<&str> = full_text
            .split(['.', '!', '?'])
            .filter(|sentence| sentence.split_whitespace().count() > MIN_SENTENCE_WORDS)
            .collect();

        let selected: Vec<&str> = if sentences.len() > 3 {
            vec![
                sentences[0],
                sentences[sentences.len() / 2],
                sentences[sentences.len() - 1],
            ]
        } else {
            sentences
        };

        for sentence in selected {
            let sentence = sentence.trim();
            if !sentence.is_empty() {
                output.push_str(&format!("- {}\n", sentence));
            }
        }

        output.push('\n');
    }

    output.trim().to_string()
}
