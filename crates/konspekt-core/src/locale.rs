use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;

/// Output language for digests. Any tag other than an exact `"ru"` is English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// Per-locale vocabulary and output strings, resolved through [`Locale::strings`].
#[derive(Debug)]
pub struct LocaleStrings {
    /// Closed stop-word vocabulary; exact whole-token matches only.
    pub stopwords: &'static [&'static str],
    pub digest_heading: &'static str,
    pub fallback_chapter_title: &'static str,
}

const ENGLISH: LocaleStrings = LocaleStrings {
    stopwords: &[
        "the", "and", "a", "an", "in", "on", "at", "for", "to", "of", "with", "is", "are",
        "was", "were",
    ],
    digest_heading: "# Video Summary",
    fallback_chapter_title: "Main Content",
};

const RUSSIAN: LocaleStrings = LocaleStrings {
    stopwords: &[
        "и", "в", "не", "что", "он", "на", "я", "с", "а", "то", "все", "она", "так", "его",
        "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее", "мне",
    ],
    digest_heading: "# Конспект видео",
    fallback_chapter_title: "Основное содержание",
};

static ENGLISH_STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH.stopwords.iter().copied().collect());
static RUSSIAN_STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RUSSIAN.stopwords.iter().copied().collect());

impl Locale {
    /// Resolve a caller-supplied language tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "ru" => Locale::Ru,
            _ => Locale::En,
        }
    }

    /// Short language tag, used for cache file names and caption lookup.
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn strings(self) -> &'static LocaleStrings {
        match self {
            Locale::En => &ENGLISH,
            Locale::Ru => &RUSSIAN,
        }
    }

    /// Case-insensitive stop-word test on a whole token.
    pub fn is_stopword(self, word: &str) -> bool {
        let set = match self {
            Locale::En => &*ENGLISH_STOPWORDS,
            Locale::Ru => &*RUSSIAN_STOPWORDS,
        };
        set.contains(word.to_lowercase().as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
