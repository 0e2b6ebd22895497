//! Reports derived from a built [`Corpus`].

use crate::grammar::Grammar;
use crate::index::{distinct_files, Corpus, DocId};
use crate::order::{sort_words, OrderingKey};
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub name: String,
    pub total: usize,
    pub distinct: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopWord {
    pub word: String,
    pub occurrences: usize,
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingletonWord {
    pub word: String,
    pub file: DocId,
}

/// Per-file match counts for one query, in input file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// As the user typed it.
    pub query: String,
    pub counts: Vec<usize>,
}

pub fn file_stats(corpus: &Corpus) -> Vec<FileStats> {
    corpus
        .documents()
        .iter()
        .map(|d| FileStats { name: d.name.clone(), total: d.total_words(), distinct: d.distinct_words() })
        .collect()
}

/// The `k` most frequent words, most frequent first; ties in ordering-key
/// order.
pub fn top_words(corpus: &Corpus, k: usize) -> Vec<TopWord> {
    let mut ranked: Vec<_> = corpus
        .concordance()
        .iter()
        .map(|(word, occ)| (Reverse(occ.len()), OrderingKey::new(word), word, occ))
        .collect();
    ranked.sort_unstable_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
    ranked
        .into_iter()
        .take(k)
        .map(|(_, _, word, occ)| TopWord {
            word: word.to_string(),
            occurrences: occ.len(),
            files: distinct_files(occ),
        })
        .collect()
}

/// Words present in every input document. Empty when there are no documents.
pub fn universal_words(corpus: &Corpus) -> Vec<String> {
    let n = corpus.num_files();
    if n == 0 {
        return Vec::new();
    }
    let mut words: Vec<String> = corpus
        .concordance()
        .iter()
        .filter(|(_, occ)| distinct_files(occ) == n)
        .map(|(w, _)| w.to_string())
        .collect();
    sort_words(&mut words, |w| w.as_str());
    words
}

/// Words present in exactly one document, with that document's ordinal.
pub fn singleton_words(corpus: &Corpus) -> Vec<SingletonWord> {
    let mut words: Vec<SingletonWord> = corpus
        .concordance()
        .iter()
        .filter(|(_, occ)| distinct_files(occ) == 1)
        .map(|(w, occ)| SingletonWord { word: w.to_string(), file: occ[0].file })
        .collect();
    sort_words(&mut words, |s| s.word.as_str());
    words
}

/// Count case-insensitive exact matches of `query` in each document's word
/// sequence.
pub fn search(corpus: &Corpus, query: &str) -> SearchResult {
    let needle = Grammar::shared().normalize(query);
    let counts = corpus
        .documents()
        .iter()
        .map(|d| d.words.iter().filter(|w| **w == needle).count())
        .collect();
    SearchResult { query: query.to_string(), counts }
}

/// Append-only record of queries, for the closing cross-tab.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchHistory {
    entries: Vec<SearchResult>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `query` against `corpus` and remember the result.
    pub fn record(&mut self, corpus: &Corpus, query: &str) -> &SearchResult {
        let result = search(corpus, query);
        tracing::debug!(query, hits = result.counts.iter().sum::<usize>(), "search");
        self.entries.push(result);
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[SearchResult] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
