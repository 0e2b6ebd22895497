use crate::input::{read_document, validate_filename, validate_search_word};
use crate::output::{print_json, print_lines, print_reports, Reports};
use crate::{OutputFormat, Settings};
use anyhow::{bail, Result};
use concord_core::aggregate::SearchHistory;
use concord_core::persist::ReportPaths;
use concord_core::{report, ConcordanceBuilder};
use std::io::Write;

/// One non-interactive pass over `files`, answering `searches` in order.
///
/// Files or words that fail validation are logged and skipped; the run only
/// fails when nothing readable is left or a report cannot be written.
pub fn run_batch<W: Write>(files: &[String], searches: &[String], settings: &Settings, out: &mut W) -> Result<()> {
    let mut builder = ConcordanceBuilder::new();
    let mut names: Vec<String> = Vec::new();
    for raw in files {
        let name = raw.trim().to_string();
        let loaded = validate_filename(&name, &names, &settings.base_dir, settings.max_files)
            .and_then(|path| read_document(&name, &path));
        match loaded {
            Ok(content) => {
                builder.add_document(name.clone(), &content);
                names.push(name);
            }
            Err(e) => tracing::warn!(file = %name, "skipping: {e}"),
        }
    }
    if names.is_empty() {
        bail!("no readable .txt files were given");
    }
    let corpus = builder.build();

    let mut history = SearchHistory::new();
    for raw in searches {
        match validate_search_word(raw) {
            Ok(word) => {
                history.record(&corpus, &word);
            }
            Err(e) => tracing::warn!(query = %raw, "skipping: {e}"),
        }
    }

    let reports = Reports::compute(&corpus, settings.top_k);
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    match settings.format {
        OutputFormat::Json => print_json(out, &corpus, &reports, &history)?,
        OutputFormat::Text => {
            print_lines(out, &report::file_summary(&reports.stats))?;
            writeln!(out)?;
            for result in history.entries() {
                print_lines(out, &report::search_result(result, &name_refs))?;
                writeln!(out)?;
            }
            if !history.is_empty() {
                print_lines(out, &report::search_history(&history, &name_refs))?;
                writeln!(out)?;
            }
            print_reports(out, &reports)?;
        }
    }

    if settings.write_reports {
        reports.save(&ReportPaths::new(&settings.out_dir))?;
    }
    Ok(())
}
