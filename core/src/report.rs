//! Text rendering of report rows. Every function returns lines without
//! terminators; callers decide whether they go to a terminal or a file.

use crate::aggregate::{FileStats, SearchHistory, SearchResult, SingletonWord, TopWord};
use crate::index::{Concordance, Corpus};

const NONE: &str = "(none)";

/// Right-justified columns separated by one space, with a dashed rule under
/// the header.
pub fn align_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }
    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(render_row(headers.iter().copied(), &widths));
    out.push("-".repeat(widths.iter().sum::<usize>() + widths.len().saturating_sub(1)));
    for row in rows {
        out.push(render_row(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `Filename  TotalWords  DistinctWords`, right-justified, two spaces apart.
pub fn file_summary(stats: &[FileStats]) -> Vec<String> {
    let (h_name, h_total, h_distinct) = ("Filename", "TotalWords", "DistinctWords");
    let wn = stats.iter().map(|s| s.name.len()).fold(h_name.len(), usize::max);
    let wt = stats.iter().map(|s| s.total.to_string().len()).fold(h_total.len(), usize::max);
    let wd = stats.iter().map(|s| s.distinct.to_string().len()).fold(h_distinct.len(), usize::max);
    let mut out = vec![
        format!("{h_name:>wn$}  {h_total:>wt$}  {h_distinct:>wd$}"),
        "-".repeat(wn + wt + wd + 4),
    ];
    for s in stats {
        out.push(format!("{:>wn$}  {:>wt$}  {:>wd$}", s.name, s.total, s.distinct));
    }
    out
}

/// `word f.l.w; f.l.w.` for every word, in ordering-key order.
pub fn concordance_lines(concordance: &Concordance) -> Vec<String> {
    concordance
        .sorted()
        .into_iter()
        .map(|(word, occ)| {
            let positions: Vec<String> = occ.iter().map(ToString::to_string).collect();
            format!("{word} {}.", positions.join("; "))
        })
        .collect()
}

/// The raw word list: every word of every file, sorted, one per line.
pub fn word_list(corpus: &Corpus) -> Vec<String> {
    corpus.all_words_sorted().into_iter().map(str::to_string).collect()
}

/// Top-K table, universal list and singleton table, separated by blank lines.
pub fn extra_lists(k: usize, top: &[TopWord], universal: &[String], singletons: &[SingletonWord]) -> Vec<String> {
    let mut out = vec![format!("Top {k} words by occurrence")];
    if top.is_empty() {
        out.push(NONE.to_string());
    } else {
        let rows: Vec<Vec<String>> = top
            .iter()
            .map(|t| vec![t.word.clone(), t.occurrences.to_string(), t.files.to_string()])
            .collect();
        out.extend(align_table(&["Word", "Occurrences", "Files"], &rows));
    }

    out.push(String::new());
    out.push("Words in all files".to_string());
    if universal.is_empty() {
        out.push(NONE.to_string());
    } else {
        out.extend(universal.iter().cloned());
    }

    out.push(String::new());
    out.push("Words in only one file".to_string());
    if singletons.is_empty() {
        out.push(NONE.to_string());
    } else {
        let rows: Vec<Vec<String>> =
            singletons.iter().map(|s| vec![s.word.clone(), s.file.to_string()]).collect();
        out.extend(align_table(&["Word", "File"], &rows));
    }
    out
}

pub fn search_result(result: &SearchResult, file_names: &[&str]) -> Vec<String> {
    let mut out = vec![format!("Results for word '{}':", result.query)];
    for (name, count) in file_names.iter().zip(&result.counts) {
        out.push(format!("  {name}: {count}"));
    }
    out
}

/// Rows are queries in the order asked, columns are files in input order.
pub fn search_history(history: &SearchHistory, file_names: &[&str]) -> Vec<String> {
    if history.is_empty() {
        return vec!["No searched words to summarize.".to_string()];
    }
    let ww = history.entries().iter().map(|r| r.query.len()).fold("Word".len(), usize::max);
    let widths: Vec<usize> = file_names.iter().map(|f| f.len().max(5)).collect();

    let mut header = vec![format!("{:<ww$}", "Word")];
    header.extend(file_names.iter().zip(&widths).map(|(f, &w)| format!("{f:>w$}")));
    let header = header.join("  ");

    let mut out = vec!["Summary of searched words across files:".to_string(), header.clone()];
    out.push("-".repeat(header.len()));
    for entry in history.entries() {
        let mut row = vec![format!("{:<ww$}", entry.query)];
        row.extend(
            widths
                .iter()
                .enumerate()
                .map(|(i, &w)| format!("{:>w$}", entry.counts.get(i).copied().unwrap_or(0))),
        );
        out.push(row.join("  "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ConcordanceBuilder;

    #[test]
    fn concordance_line_format() {
        let mut b = ConcordanceBuilder::new();
        b.add_document("a.txt", "to be or\nnot to be");
        b.add_document("b.txt", "Be-all");
        let corpus = b.build();
        assert_eq!(
            concordance_lines(corpus.concordance()),
            vec!["be 1.1.2; 1.2.3.", "be-all 2.1.1.", "not 1.2.1.", "or 1.1.3.", "to 1.1.1; 1.2.2."]
        );
    }

    #[test]
    fn aligned_table_is_right_justified() {
        let rows = vec![vec!["a".to_string(), "10".to_string()], vec!["abcdef".to_string(), "2".to_string()]];
        assert_eq!(
            align_table(&["Word", "File"], &rows),
            vec!["  Word File", "-----------", "     a   10", "abcdef    2"]
        );
    }

    #[test]
    fn summary_table_widths_cover_headers() {
        let stats = vec![FileStats { name: "a.txt".into(), total: 12, distinct: 3 }];
        assert_eq!(
            file_summary(&stats),
            vec![
                "Filename  TotalWords  DistinctWords",
                "-".repeat(35).as_str(),
                "   a.txt          12              3",
            ]
        );
    }

    #[test]
    fn empty_blocks_say_none() {
        let lines = extra_lists(10, &[], &[], &[]);
        assert_eq!(
            lines,
            vec![
                "Top 10 words by occurrence",
                "(none)",
                "",
                "Words in all files",
                "(none)",
                "",
                "Words in only one file",
                "(none)",
            ]
        );
    }

    #[test]
    fn history_cross_tab() {
        let mut b = ConcordanceBuilder::new();
        b.add_document("one.txt", "cat cat");
        b.add_document("b.txt", "cat dog");
        let corpus = b.build();
        let mut h = SearchHistory::new();
        assert_eq!(search_history(&h, &["one.txt", "b.txt"]), vec!["No searched words to summarize."]);
        h.record(&corpus, "cat");
        h.record(&corpus, "giraffe");
        assert_eq!(
            search_history(&h, &["one.txt", "b.txt"]),
            vec![
                "Summary of searched words across files:",
                "Word     one.txt  b.txt",
                "-----------------------",
                "cat            2      1",
                "giraffe        0      0",
            ]
        );
    }
}
