#![forbid(unsafe_code)]
//! # middlemen CLI
//!
//! Command-line interface for the `middlemen` crate. Computes middle ratios
//! for a corpus file (or every `.txt` file under a directory) and writes them to
//! `results/<corpus name>/`.
//!
//! ## Example
//! ```bash
//! cargo run --release -- path/to/corpus.txt --detailed-output
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use env_logger::Env;
use log::error;
use middlemen::{AnalysisOptions, DEFAULT_THRESHOLD, analyze_path};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Corpus file (or directory of .txt files) to use for computing the ratios
    corpus: PathBuf,

    /// Detailed output on each word
    #[arg(long, default_value_t = false)]
    detailed_output: bool,

    /// Minimum frequency for a word to be analyzed as a middle word
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Directory the per-corpus results are written to
    #[arg(long, default_value = "results")]
    output_dir: PathBuf,

    /// If set, analyze all files under a directory as one corpus
    #[arg(long, default_value_t = false)]
    combine: bool,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let options = AnalysisOptions {
        threshold: cli.threshold,
        detailed_output: cli.detailed_output,
        output_dir: cli.output_dir,
        combine: cli.combine,
    };

    match analyze_path(&cli.corpus, &options) {
        Ok(written) => {
            for dir in written {
                println!("{}", dir.display());
            }
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
