use crate::grammar::Grammar;
use std::borrow::Cow;

/// A unit of text that words never cross: either one raw line, or a line that
/// ended in an attached hyphen fused with the line after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fragment<'a> {
    pub text: Cow<'a, str>,
    /// For a fused pair, the byte offset in `text` where the continuation line
    /// begins.
    pub split: Option<usize>,
}

/// Split content into lines without their terminators (`\n` or `\r\n`).
pub fn raw_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// A trailing `-` glued to the previous character marks a word broken across
/// the line break. A dash after a space is punctuation.
pub fn ends_with_attached_hyphen(line: &str) -> bool {
    let mut rev = line.chars().rev();
    matches!((rev.next(), rev.next()), (Some('-'), Some(prev)) if prev != ' ')
}

pub(crate) fn fragments<'a>(lines: &[&'a str]) -> Vec<Fragment<'a>> {
    let mut out = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if !ends_with_attached_hyphen(line) {
            out.push(Fragment { text: Cow::Borrowed(line), split: None });
            i += 1;
            continue;
        }
        let left = &line[..line.len() - 1];
        match lines.get(i + 1) {
            Some(next) => {
                let mut joined = String::with_capacity(left.len() + next.len());
                joined.push_str(left);
                joined.push_str(next.trim_start());
                out.push(Fragment { text: Cow::Owned(joined), split: Some(left.len()) });
                // the continuation line is consumed whole, never join-tested itself
                i += 2;
            }
            None => {
                out.push(Fragment { text: Cow::Borrowed(left), split: None });
                i += 1;
            }
        }
    }
    out
}

/// Resolve line-end hyphenation and join everything into one space-separated
/// blob.
pub fn join_broken_lines(lines: &[&str]) -> String {
    fragments(lines)
        .iter()
        .map(|f| f.text.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Tokenize a whole document into lowercase legal words in reading order,
/// duplicates kept.
pub fn tokenize_with(grammar: &Grammar, content: &str) -> Vec<String> {
    let blob = join_broken_lines(&raw_lines(content));
    grammar.find_words(&blob).map(|w| grammar.normalize(w)).collect()
}

/// [`tokenize_with`] using the shared grammar.
pub fn tokenize(content: &str) -> Vec<String> {
    tokenize_with(Grammar::shared(), content)
}
