use crate::input::{parse_yes_no, read_document, validate_filename, validate_search_word, InputError};
use crate::output::{print_lines, print_reports, Reports};
use crate::Settings;
use anyhow::Result;
use concord_core::aggregate::{file_stats, SearchHistory};
use concord_core::persist::ReportPaths;
use concord_core::{report, ConcordanceBuilder, Corpus};
use std::io::{BufRead, Write};

/// Interactive run: prompts on `input`, everything else on `output`.
///
/// Invalid answers are reported and asked again. End of input at any prompt
/// ends the session quietly.
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: Settings,
}

/// Input ran out before the session finished.
struct Closed;

type Step<T> = Result<std::result::Result<T, Closed>>;

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        Self { input, output, settings }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        match self.run_steps()? {
            Ok(()) => Ok(()),
            Err(Closed) => {
                writeln!(self.output, "\nInput closed. Exiting.")?;
                Ok(())
            }
        }
    }

    fn run_steps(&mut self) -> Step<()> {
        writeln!(self.output, "Concordance: word counts, search, concordance and extra lists")?;
        writeln!(
            self.output,
            "Reads up to {} text files (.TXT), parses words (letters and optional internal hyphens),",
            self.settings.max_files
        )?;
        writeln!(self.output, "reports per-file totals and distinct counts, and lets you search words across the files")?;
        writeln!(self.output, "(case-insensitive). Writes WORDS.txt, CONCORDANCE.txt and EXTRA_LISTS.txt.")?;

        let (corpus, names) = match self.collect_files()? {
            Ok(loaded) => loaded,
            Err(closed) => return Ok(Err(closed)),
        };
        if names.is_empty() {
            writeln!(self.output, "No files were entered. Program will exit.")?;
            return Ok(Ok(()));
        }

        writeln!(self.output)?;
        print_lines(&mut self.output, &report::file_summary(&file_stats(&corpus)))?;
        writeln!(self.output)?;

        let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut history = SearchHistory::new();
        loop {
            let word = match self.ask_search_word()? {
                Ok(word) => word,
                Err(closed) => return Ok(Err(closed)),
            };
            let result = history.record(&corpus, &word);
            writeln!(self.output)?;
            print_lines(&mut self.output, &report::search_result(result, &name_refs))?;
            writeln!(self.output)?;
            match self.ask_yes_no("Search another word? (Yes/No): ")? {
                Ok(true) => continue,
                Ok(false) => break,
                Err(closed) => return Ok(Err(closed)),
            }
        }

        writeln!(self.output)?;
        print_lines(&mut self.output, &report::search_history(&history, &name_refs))?;
        writeln!(self.output)?;

        let reports = Reports::compute(&corpus, self.settings.top_k);
        print_reports(&mut self.output, &reports)?;
        if self.settings.write_reports {
            let paths = ReportPaths::new(&self.settings.out_dir);
            reports.save(&paths)?;
            writeln!(self.output, "Reports written to {}.", paths.root.display())?;
        }

        if let Err(closed) = self.prompt("Program finished. Press ENTER to exit. ")? {
            return Ok(Err(closed));
        }
        writeln!(self.output, "Goodbye.")?;
        Ok(Ok(()))
    }

    fn collect_files(&mut self) -> Step<(Corpus, Vec<String>)> {
        let max_files = self.settings.max_files;
        let mut builder = ConcordanceBuilder::new();
        let mut names: Vec<String> = Vec::new();

        while names.len() < max_files {
            let raw = match self.prompt("Enter a .TXT filename: ")? {
                Ok(raw) => raw,
                Err(closed) => return Ok(Err(closed)),
            };
            let name = raw.trim().to_string();
            if name.is_empty() {
                writeln!(self.output, "No filename entered.")?;
                match self.ask_yes_no("Add another file? (Yes/No): ")? {
                    Ok(true) => continue,
                    Ok(false) => break,
                    Err(closed) => return Ok(Err(closed)),
                }
            }
            let path = match validate_filename(&name, &names, &self.settings.base_dir, max_files) {
                Ok(path) => path,
                Err(e @ InputError::Duplicate(_)) => {
                    writeln!(self.output, "{e} Enter a different filename or say No to add more files.")?;
                    match self.ask_yes_no("Add another file? (Yes/No): ")? {
                        Ok(true) => continue,
                        Ok(false) => break,
                        Err(closed) => return Ok(Err(closed)),
                    }
                }
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };
            let content = match read_document(&name, &path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(error = %e, "read failed");
                    writeln!(self.output, "{e}")?;
                    continue;
                }
            };

            let id = builder.add_document(name.clone(), &content);
            if let Some(doc) = builder.document(id) {
                writeln!(
                    self.output,
                    "Loaded '{}' as file {id} with {} words ({} distinct).",
                    doc.name,
                    doc.total_words(),
                    doc.distinct_words()
                )?;
            }
            names.push(name);

            if names.len() >= max_files {
                writeln!(self.output, "Reached maximum of {max_files} files.")?;
                break;
            }
            match self.ask_yes_no("Add another file? (Yes/No): ")? {
                Ok(true) => {}
                Ok(false) => break,
                Err(closed) => return Ok(Err(closed)),
            }
        }
        Ok(Ok((builder.build(), names)))
    }

    fn ask_search_word(&mut self) -> Step<String> {
        loop {
            let raw = match self.prompt("Enter a word to search (letters and hyphen allowed): ")? {
                Ok(raw) => raw,
                Err(closed) => return Ok(Err(closed)),
            };
            match validate_search_word(&raw) {
                Ok(word) => return Ok(Ok(word)),
                Err(e) => writeln!(self.output, "{e}\nPlease try again.")?,
            }
        }
    }

    fn ask_yes_no(&mut self, question: &str) -> Step<bool> {
        loop {
            let raw = match self.prompt(question)? {
                Ok(raw) => raw,
                Err(closed) => return Ok(Err(closed)),
            };
            match parse_yes_no(&raw) {
                Some(answer) => return Ok(Ok(answer)),
                None => writeln!(self.output, "Invalid response. Please answer 'Yes' or 'No' (y/n).")?,
            }
        }
    }

    fn prompt(&mut self, question: &str) -> Step<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        // a line that is not UTF-8 is re-asked like any other bad answer
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(Err(Closed));
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Ok(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
