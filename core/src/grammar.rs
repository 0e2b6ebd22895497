use lazy_static::lazy_static;
use regex::{Matches, Regex};

/// Letter runs joined by single internal hyphens, ASCII only.
const LEGAL_WORD: &str = r"[A-Za-z]+(?:-[A-Za-z]+)*";

/// Stands in for `-` inside ordering keys; sorts below every letter.
pub const HYPHEN_SENTINEL: char = '\0';

lazy_static! {
    static ref SHARED: Grammar = Grammar::new();
}

/// The LEGAL WORD grammar and the ordering sentinel.
///
/// Built once and shared by reference with every stage that extracts,
/// validates or orders words.
#[derive(Debug, Clone)]
pub struct Grammar {
    word: Regex,
    exact: Regex,
    sentinel: char,
}

impl Grammar {
    pub fn new() -> Self {
        Self {
            word: Regex::new(LEGAL_WORD).expect("valid regex"),
            exact: Regex::new(&format!("^(?:{LEGAL_WORD})$")).expect("valid regex"),
            sentinel: HYPHEN_SENTINEL,
        }
    }

    /// Process-wide instance.
    pub fn shared() -> &'static Grammar {
        &SHARED
    }

    /// Legal words in `text`, left to right, original case. Anything that does
    /// not match (digits, punctuation, dangling hyphens) is skipped.
    pub fn find_words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.word.find_iter(text).map(|m| m.as_str())
    }

    /// Raw matches with byte offsets, for callers that need to know where a
    /// word starts.
    pub fn matches<'r, 't>(&'r self, text: &'t str) -> Matches<'r, 't> {
        self.word.find_iter(text)
    }

    /// True when the whole of `word` is one legal word.
    pub fn is_legal(&self, word: &str) -> bool {
        self.exact.is_match(word)
    }

    pub fn normalize(&self, word: &str) -> String {
        word.to_ascii_lowercase()
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
