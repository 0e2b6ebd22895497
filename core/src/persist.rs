use anyhow::{Context, Result};
use std::fs::{self, create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a run's report files live.
pub struct ReportPaths {
    pub root: PathBuf,
}

impl ReportPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    pub fn word_list(&self) -> PathBuf { self.root.join("WORDS.txt") }
    pub fn concordance(&self) -> PathBuf { self.root.join("CONCORDANCE.txt") }
    pub fn extra_lists(&self) -> PathBuf { self.root.join("EXTRA_LISTS.txt") }
}

/// Write `lines` to `path`, newline-terminated. The file is either fully
/// replaced or left untouched: content goes to a sibling temp file that is
/// renamed over the target.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }
    let mut tmp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    let written = (|| -> Result<()> {
        let mut f = BufWriter::new(File::create(&tmp)?);
        for line in lines {
            f.write_all(line.as_ref().as_bytes())?;
            f.write_all(b"\n")?;
        }
        f.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        Ok(())
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e.context(format!("writing {}", path.display())));
    }
    fs::rename(&tmp, path).with_context(|| format!("replacing {}", path.display()))?;
    tracing::debug!(path = %path.display(), lines = lines.len(), "report written");
    Ok(())
}

pub fn save_word_list<S: AsRef<str>>(paths: &ReportPaths, lines: &[S]) -> Result<()> {
    write_lines(&paths.word_list(), lines)
}

pub fn save_concordance<S: AsRef<str>>(paths: &ReportPaths, lines: &[S]) -> Result<()> {
    write_lines(&paths.concordance(), lines)
}

pub fn save_extra_lists<S: AsRef<str>>(paths: &ReportPaths, lines: &[S]) -> Result<()> {
    write_lines(&paths.extra_lists(), lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overwrites_whole_file() {
        let dir = tempdir().unwrap();
        let paths = ReportPaths::new(dir.path().join("out"));
        save_concordance(&paths, &["a 1.1.1.", "b 1.1.2."]).unwrap();
        save_concordance(&paths, &["c 1.1.1."]).unwrap();
        assert_eq!(fs::read_to_string(paths.concordance()).unwrap(), "c 1.1.1.\n");
        assert!(!dir.path().join("out/CONCORDANCE.txt.tmp").exists());
    }

    #[test]
    fn empty_report_is_empty_file() {
        let dir = tempdir().unwrap();
        let paths = ReportPaths::new(dir.path());
        save_word_list::<String>(&paths, &[]).unwrap();
        assert_eq!(fs::read_to_string(paths.word_list()).unwrap(), "");
    }
}
