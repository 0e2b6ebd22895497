use crate::grammar::Grammar;
use crate::lines::index_lines_with;
use crate::order::{sort_words, OrderingKey};
use crate::tokenizer::tokenize_with;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 1-based ordinal of a document in input order.
pub type DocId = u32;

#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocId,
    pub name: String,
    /// Every word of the document in reading order.
    pub words: Vec<String>,
    distinct: HashSet<String>,
}

impl Document {
    fn new(id: DocId, name: String, words: Vec<String>) -> Self {
        let distinct = words.iter().cloned().collect();
        Self { id, name, words, distinct }
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn distinct_words(&self) -> usize {
        self.distinct.len()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.distinct.contains(word)
    }
}

/// Where a word occurs: document ordinal, line number, word number within the
/// line. All 1-based; the derived order is (file, line, word).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Occurrence {
    pub file: DocId,
    pub line: u32,
    pub word: u32,
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.file, self.line, self.word)
    }
}

/// Word -> occurrences. Iteration order of the map is never user-visible; use
/// [`Concordance::sorted`] for anything that is reported.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Concordance {
    entries: HashMap<String, Vec<Occurrence>>,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold per-file, per-line word lists (files in input order) into a sorted
    /// concordance.
    pub fn from_line_words<F, L>(files: F) -> Self
    where
        F: IntoIterator<Item = L>,
        L: AsRef<[Vec<String>]>,
    {
        let mut concordance = Self::new();
        for (file_idx, lines) in files.into_iter().enumerate() {
            concordance.record_document(file_idx as DocId + 1, lines.as_ref());
        }
        concordance.finish();
        concordance
    }

    fn record_document(&mut self, file: DocId, lines: &[Vec<String>]) {
        for (line_idx, words) in lines.iter().enumerate() {
            for (word_idx, word) in words.iter().enumerate() {
                let occ = Occurrence { file, line: line_idx as u32 + 1, word: word_idx as u32 + 1 };
                match self.entries.get_mut(word.as_str()) {
                    Some(list) => list.push(occ),
                    None => {
                        self.entries.insert(word.clone(), vec![occ]);
                    }
                }
            }
        }
    }

    fn finish(&mut self) {
        for list in self.entries.values_mut() {
            list.sort_unstable();
        }
    }

    pub fn get(&self, word: &str) -> Option<&[Occurrence]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Unordered view over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.entries.iter().map(|(w, occ)| (w.as_str(), occ.as_slice()))
    }

    /// Entries in [`OrderingKey`] order.
    pub fn sorted(&self) -> Vec<(&str, &[Occurrence])> {
        let mut out: Vec<_> = self.iter().collect();
        sort_words(&mut out, |(w, _)| *w);
        out
    }
}

/// Distinct file ordinals in an occurrence list grouped by file.
pub(crate) fn distinct_files(occurrences: &[Occurrence]) -> usize {
    let mut count = 0;
    let mut last = None;
    for occ in occurrences {
        if last != Some(occ.file) {
            count += 1;
            last = Some(occ.file);
        }
    }
    count
}

/// Everything derived from one batch of documents. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    concordance: Concordance,
}

impl Corpus {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        (id as usize).checked_sub(1).and_then(|i| self.documents.get(i))
    }

    pub fn concordance(&self) -> &Concordance {
        &self.concordance
    }

    pub fn num_files(&self) -> usize {
        self.documents.len()
    }

    /// Every word of every document, duplicates kept, in [`OrderingKey`]
    /// order.
    pub fn all_words_sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .documents
            .iter()
            .flat_map(|d| d.words.iter().map(String::as_str))
            .collect();
        words.sort_by_cached_key(|w| OrderingKey::new(w));
        words
    }
}

/// Accumulates documents in input order and produces a [`Corpus`].
pub struct ConcordanceBuilder<'g> {
    grammar: &'g Grammar,
    documents: Vec<Document>,
    concordance: Concordance,
}

impl ConcordanceBuilder<'static> {
    pub fn new() -> Self {
        Self::with_grammar(Grammar::shared())
    }
}

impl Default for ConcordanceBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g> ConcordanceBuilder<'g> {
    pub fn with_grammar(grammar: &'g Grammar) -> Self {
        Self { grammar, documents: Vec::new(), concordance: Concordance::new() }
    }

    /// Index one document's full text. Returns its ordinal.
    pub fn add_document(&mut self, name: impl Into<String>, content: &str) -> DocId {
        let id = self.documents.len() as DocId + 1;
        let name = name.into();
        let words = tokenize_with(self.grammar, content);
        let lines = index_lines_with(self.grammar, content);
        debug_assert_eq!(
            lines.iter().map(Vec::len).sum::<usize>(),
            words.len(),
            "line index and tokenizer disagree for {name}"
        );
        self.concordance.record_document(id, &lines);
        let doc = Document::new(id, name, words);
        tracing::debug!(
            doc_id = id,
            name = %doc.name,
            lines = lines.len(),
            total = doc.total_words(),
            distinct = doc.distinct_words(),
            "indexed document"
        );
        self.documents.push(doc);
        id
    }

    pub fn document(&self, id: DocId) -> Option<&Document> {
        (id as usize).checked_sub(1).and_then(|i| self.documents.get(i))
    }

    pub fn build(mut self) -> Corpus {
        self.concordance.finish();
        tracing::info!(
            num_docs = self.documents.len(),
            num_words = self.concordance.len(),
            "concordance built"
        );
        Corpus { documents: self.documents, concordance: self.concordance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(words: &[&[&str]]) -> Vec<Vec<String>> {
        words.iter().map(|l| l.iter().map(|w| w.to_string()).collect()).collect()
    }

    #[test]
    fn positions_are_one_based() {
        let c = Concordance::from_line_words([lines(&[&["a", "b"], &[], &["b"]])]);
        assert_eq!(
            c.get("b").unwrap(),
            &[Occurrence { file: 1, line: 1, word: 2 }, Occurrence { file: 1, line: 3, word: 1 }]
        );
        assert_eq!(c.get("a").unwrap()[0].to_string(), "1.1.1");
    }

    #[test]
    fn empty_input_gives_empty_concordance() {
        let c = Concordance::from_line_words(Vec::<Vec<Vec<String>>>::new());
        assert!(c.is_empty());
        assert!(ConcordanceBuilder::new().build().concordance().is_empty());
    }

    #[test]
    fn counts_files_per_word() {
        let c = Concordance::from_line_words([
            lines(&[&["cat", "dog", "cat"]]),
            lines(&[&["dog"]]),
            lines(&[&["dog"]]),
        ]);
        assert_eq!(distinct_files(c.get("cat").unwrap()), 1);
        assert_eq!(distinct_files(c.get("dog").unwrap()), 3);
        assert!(c.get("emu").is_none());
    }

    #[test]
    fn builder_assigns_ordinals_in_order() {
        let mut b = ConcordanceBuilder::new();
        assert_eq!(b.add_document("a.txt", "Cat dog"), 1);
        assert_eq!(b.add_document("b.txt", "dog\nbird"), 2);
        let corpus = b.build();
        assert_eq!(corpus.document(2).unwrap().name, "b.txt");
        assert!(corpus.document(0).is_none());
        assert_eq!(corpus.concordance().get("bird").unwrap(), &[Occurrence { file: 2, line: 2, word: 1 }]);
        assert_eq!(corpus.all_words_sorted(), vec!["bird", "cat", "dog", "dog"]);
    }
}
