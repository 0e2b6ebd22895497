//! Everything a run shows or saves, computed once from the finished corpus.

use anyhow::Result;
use concord_core::aggregate::{
    file_stats, singleton_words, top_words, universal_words, FileStats, SearchHistory, SearchResult,
    SingletonWord, TopWord,
};
use concord_core::persist::{save_concordance, save_extra_lists, save_word_list, ReportPaths};
use concord_core::{report, Corpus, Occurrence};
use serde::Serialize;
use std::io::Write;

pub struct Reports {
    pub stats: Vec<FileStats>,
    pub top: Vec<TopWord>,
    pub universal: Vec<String>,
    pub singletons: Vec<SingletonWord>,
    pub top_k: usize,
    pub words: Vec<String>,
    pub concordance: Vec<String>,
}

impl Reports {
    pub fn compute(corpus: &Corpus, top_k: usize) -> Self {
        Self {
            stats: file_stats(corpus),
            top: top_words(corpus, top_k),
            universal: universal_words(corpus),
            singletons: singleton_words(corpus),
            top_k,
            words: report::word_list(corpus),
            concordance: report::concordance_lines(corpus.concordance()),
        }
    }

    pub fn extra_lists(&self) -> Vec<String> {
        report::extra_lists(self.top_k, &self.top, &self.universal, &self.singletons)
    }

    /// Overwrite the three report files under `paths`.
    pub fn save(&self, paths: &ReportPaths) -> Result<()> {
        save_word_list(paths, &self.words)?;
        save_concordance(paths, &self.concordance)?;
        save_extra_lists(paths, &self.extra_lists())?;
        tracing::info!(output = %paths.root.display(), "reports written");
        Ok(())
    }
}

pub fn print_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    Ok(())
}

/// Concordance block followed by the aggregate lists, as shown on screen.
pub fn print_reports<W: Write>(out: &mut W, reports: &Reports) -> Result<()> {
    writeln!(out, "Concordance (also written to CONCORDANCE.txt):")?;
    print_lines(out, &reports.concordance)?;
    writeln!(out)?;
    print_lines(out, &reports.extra_lists())?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    word: &'a str,
    occurrences: &'a [Occurrence],
}

#[derive(Serialize)]
struct JsonReport<'a> {
    files: &'a [FileStats],
    top: &'a [TopWord],
    universal: &'a [String],
    singletons: &'a [SingletonWord],
    searches: &'a [SearchResult],
    concordance: Vec<JsonEntry<'a>>,
}

/// The whole run as one pretty-printed JSON document.
pub fn print_json<W: Write>(out: &mut W, corpus: &Corpus, reports: &Reports, history: &SearchHistory) -> Result<()> {
    let doc = JsonReport {
        files: &reports.stats,
        top: &reports.top,
        universal: &reports.universal,
        singletons: &reports.singletons,
        searches: history.entries(),
        concordance: corpus
            .concordance()
            .sorted()
            .into_iter()
            .map(|(word, occurrences)| JsonEntry { word, occurrences })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)?;
    Ok(())
}
