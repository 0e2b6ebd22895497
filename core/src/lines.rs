//! Per-line word lists, the coordinate system of the concordance.
//!
//! A word broken across a line end with an attached hyphen is fused and
//! credited to the line where it starts; the continuation line loses that
//! leading piece. Summed over a document, the per-line counts always equal the
//! length of [`crate::tokenizer::tokenize_with`] for the same content.

use crate::grammar::Grammar;
use crate::tokenizer::{fragments, raw_lines};

/// One entry per raw line (empty lines included), each holding that line's
/// lowercase words in order.
pub fn index_lines_with(grammar: &Grammar, content: &str) -> Vec<Vec<String>> {
    let lines = raw_lines(content);
    let mut out = Vec::with_capacity(lines.len());
    for frag in fragments(&lines) {
        match frag.split {
            None => out.push(grammar.find_words(&frag.text).map(|w| grammar.normalize(w)).collect()),
            Some(split) => {
                let mut current = Vec::new();
                let mut next = Vec::new();
                for m in grammar.matches(&frag.text) {
                    let word = grammar.normalize(m.as_str());
                    if m.start() < split {
                        current.push(word);
                    } else {
                        next.push(word);
                    }
                }
                out.push(current);
                out.push(next);
            }
        }
    }
    out
}

pub fn index_lines(content: &str) -> Vec<Vec<String>> {
    index_lines_with(Grammar::shared(), content)
}
