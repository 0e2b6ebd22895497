use anyhow::Result;
use clap::Parser;
use concord::{run_batch, OutputFormat, Session, Settings, DEFAULT_TOP_K, MAX_FILES};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "concord")]
#[command(about = "Word counts, search and a line-level concordance over up to 10 text files", long_about = None)]
struct Cli {
    /// Input .txt files, in order. Without any, filenames are asked for interactively
    files: Vec<String>,
    /// Directory that relative filenames are resolved against
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,
    /// Directory for WORDS.txt, CONCORDANCE.txt and EXTRA_LISTS.txt
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
    /// How many words the top-occurring list shows
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top: usize,
    /// Word to count in every file (batch mode, repeatable)
    #[arg(long = "search", value_name = "WORD")]
    searches: Vec<String>,
    /// Stdout format in batch mode
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print reports without writing the report files
    #[arg(long, default_value_t = false)]
    no_write: bool,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();
    let settings = Settings {
        base_dir: cli.base_dir,
        out_dir: cli.out_dir,
        top_k: cli.top,
        max_files: MAX_FILES,
        write_reports: !cli.no_write,
        format: cli.format,
    };

    if cli.files.is_empty() {
        let stdin = io::stdin();
        let mut session = Session::new(stdin.lock(), io::stdout(), settings);
        session.run()
    } else {
        let stdout = io::stdout();
        run_batch(&cli.files, &cli.searches, &settings, &mut stdout.lock())
    }
}
