use concord::{run_batch, OutputFormat, Settings};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_corpus(dir: &Path) {
    fs::write(dir.join("one.txt"), "It was a co-\noperative effort,\nwell-known to all.\n").unwrap();
    fs::write(dir.join("two.TXT"), "All of it was known.\n").unwrap();
    fs::write(dir.join("notes.md"), "ignored").unwrap();
}

fn settings(dir: &Path, format: OutputFormat) -> Settings {
    Settings { base_dir: dir.to_path_buf(), out_dir: dir.join("reports"), format, ..Settings::default() }
}

fn files() -> Vec<String> {
    ["one.txt", "notes.md", "two.TXT", "one.txt", "gone.txt"].iter().map(|s| s.to_string()).collect()
}

#[test]
fn batch_skips_bad_inputs_and_writes_reports() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let searches = vec!["IT".to_string(), "no good".to_string(), "known".to_string()];
    let mut out = Vec::new();
    run_batch(&files(), &searches, &settings(dir.path(), OutputFormat::Text), &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains(" one.txt           8              8\n"));
    assert!(out.contains(" two.TXT           5              5\n"));
    assert!(out.contains("Results for word 'IT':\n  one.txt: 1\n  two.TXT: 1\n"));
    assert!(!out.contains("no good"));
    assert!(out.contains("cooperative 1.1.4."));

    let concordance = fs::read_to_string(dir.path().join("reports/CONCORDANCE.txt")).unwrap();
    assert!(concordance.starts_with("a 1.1.3.\nall 1.3.3; 2.1.1.\n"));
    assert!(concordance.contains("well-known 1.3.1.\n"));
    let extra = fs::read_to_string(dir.path().join("reports/EXTRA_LISTS.txt")).unwrap();
    assert!(extra.contains("Words in all files\nall\nit\nwas\n"));
}

#[test]
fn json_output_is_one_document() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let mut out = Vec::new();
    let settings = Settings { write_reports: false, ..settings(dir.path(), OutputFormat::Json) };
    run_batch(&files(), &["was".to_string()], &settings, &mut out).unwrap();

    let json: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["files"].as_array().unwrap().len(), 2);
    assert_eq!(json["searches"][0]["counts"], serde_json::json!([1, 1]));
    assert_eq!(json["universal"], serde_json::json!(["all", "it", "was"]));
    let first = &json["concordance"][0];
    assert_eq!(first["word"], "a");
    assert_eq!(first["occurrences"][0], serde_json::json!({"file": 1, "line": 1, "word": 3}));
    assert!(!dir.path().join("reports").exists());
}

#[test]
fn identical_runs_give_identical_files() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    let s = settings(dir.path(), OutputFormat::Text);
    run_batch(&files(), &[], &s, &mut Vec::new()).unwrap();
    let first = fs::read(dir.path().join("reports/EXTRA_LISTS.txt")).unwrap();
    let first_conc = fs::read(dir.path().join("reports/CONCORDANCE.txt")).unwrap();
    run_batch(&files(), &[], &s, &mut Vec::new()).unwrap();
    assert_eq!(first, fs::read(dir.path().join("reports/EXTRA_LISTS.txt")).unwrap());
    assert_eq!(first_conc, fs::read(dir.path().join("reports/CONCORDANCE.txt")).unwrap());
}

#[test]
fn nothing_readable_is_an_error() {
    let dir = tempdir().unwrap();
    let err = run_batch(&["nope.txt".to_string()], &[], &settings(dir.path(), OutputFormat::Text), &mut Vec::new());
    assert!(err.is_err());
}
