//! Terminal and batch front end for `concord-core`: validates input files and
//! search words, runs the pipeline once, prints the tables and writes the
//! report files.

pub mod batch;
pub mod input;
pub mod output;
pub mod session;

use std::path::PathBuf;

pub const MAX_FILES: usize = 10;
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Run configuration, filled from command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Relative filenames are resolved against this directory.
    pub base_dir: PathBuf,
    /// Report files are written here.
    pub out_dir: PathBuf,
    pub top_k: usize,
    pub max_files: usize,
    pub write_reports: bool,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            out_dir: PathBuf::from("."),
            top_k: DEFAULT_TOP_K,
            max_files: MAX_FILES,
            write_reports: true,
            format: OutputFormat::Text,
        }
    }
}

pub use batch::run_batch;
pub use session::Session;
