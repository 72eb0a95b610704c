use once_cell::sync::Lazy;
use regex::Regex;

use crate::locale::Locale;

// Caption annotations like [музыка] or (laughter). No nesting support: a closing
// delimiter always pairs with the nearest preceding opening one.
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip bracketed and parenthetical annotations, collapse whitespace, and drop
/// the locale's stop-words. Surviving tokens keep their casing and order.
pub fn normalize(raw_text: &str, locale: Locale) -> String {
    let text = BRACKETED.replace_all(raw_text, "");
    let text = PARENTHESIZED.replace_all(&text, "");
    let text = WHITESPACE.replace_all(&text, " ");

    text.trim()
        .split_whitespace()
        .filter(|word| !locale.is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_bracketed_annotations() {
        assert_eq!(normalize("hello [music] world", Locale::En), "hello world");
        assert_eq!(normalize("[applause] start here", Locale::En), "start here");
        assert_eq!(normalize("привет [музыка] мир", Locale::Ru), "привет мир");
    }

    #[test]
    fn removes_parenthetical_annotations() {
        assert_eq!(normalize("hello (noise) world", Locale::En), "hello world");
        assert_eq!(
            normalize("mixed [tags] then (laughter) done", Locale::En),
            "mixed then done"
        );
    }

    #[test]
    fn nested_brackets_leave_residue() {
        // Non-nesting rule: "[b [c]" is removed as one pair, "d]" survives.
        assert_eq!(normalize("big [b [c] d] end", Locale::En), "big d] end");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            normalize("spread \t out\n\nover   lines", Locale::En),
            "spread out over lines"
        );
        assert_eq!(normalize("  padded  ", Locale::En), "padded");
    }

    #[test]
    fn drops_stopwords_by_whole_token_only() {
        assert_eq!(
            normalize("The theme of this talk", Locale::En),
            "theme this talk"
        );
        // tokens merely containing a stop-word survive
        assert_eq!(normalize("android candy", Locale::En), "android candy");
        assert_eq!(normalize("я вижу всего лишь код", Locale::Ru), "вижу всего лишь код");
    }

    #[test]
    fn surviving_tokens_keep_casing() {
        assert_eq!(normalize("The Big Picture", Locale::En), "Big Picture");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "hello [music] (noise)  world",
            "big [b [c] d] end",
            "The  theme\tof things.",
            "",
        ];
        for sample in samples {
            let once = normalize(sample, Locale::En);
            assert_eq!(normalize(&once, Locale::En), once);
        }
    }

    #[test]
    fn empty_and_annotation_only_input_yields_empty() {
        assert_eq!(normalize("", Locale::En), "");
        assert_eq!(normalize("[music] (applause)", Locale::En), "");
    }
}
