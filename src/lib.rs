#![forbid(unsafe_code)]
//! # middlemen
//!
//! Finds words that behave like interchangeable fillers between two other
//! words. For every frequent word `w` the crate collects the `(left, right)`
//! pairs it sits between, checks whether `left right` is also a real bigram of
//! the corpus, and derives a per-word *middle ratio* and a mutual-information
//! score.
//!
//! The pipeline is a chain of plain functions over owned tables:
//! [`tokenize`] → [`count_words`] / [`frequent_words`] → [`count_bigrams`] →
//! [`collect_trigrams`] → [`middle_ratios`]. [`analyze_path`] wires it to the
//! filesystem and [`write_results`] exports the results.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use log::{debug, info};

pub mod corpus;
pub mod counts;
pub mod error;
pub mod export;
pub mod ratios;
pub mod tokenize;
pub mod trigrams;

pub use corpus::{COMBINED_NAME, collect_files, corpus_name, read_corpus};
pub use counts::{Bigram, BigramTable, UnigramTable, count_bigrams, count_words, frequent_words};
pub use error::{Error, Result};
pub use export::{DETAIL_HEADER, write_results};
pub use ratios::{ContextDetail, MiddleRatios, middle_ratios, real_bigrams};
pub use tokenize::{casefold, tokenize};
pub use trigrams::{TrigramTable, collect_trigrams};

/// Minimum unigram count for a word to be analyzed as a middle word.
pub const DEFAULT_THRESHOLD: usize = 10;

/// Options shared by the library entry points and the CLI.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub threshold: usize,
    /// Collect and export one table of successful contexts per word.
    pub detailed_output: bool,
    /// Results are written to `<output_dir>/<corpus name>/`.
    pub output_dir: PathBuf,
    /// Analyze all corpora under a directory as one.
    pub combine: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            threshold: DEFAULT_THRESHOLD,
            detailed_output: false,
            output_dir: PathBuf::from("results"),
            combine: false,
        }
    }
}

/// All tables built for one corpus.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub threshold: usize,
    pub token_count: usize,
    pub unigrams: UnigramTable,
    pub frequent_words: IndexSet<String>,
    pub bigrams: BigramTable,
    pub trigrams: TrigramTable,
    pub ratios: MiddleRatios,
}

///Runs the whole pipeline over an already tokenized corpus.
/// # Example
/// ```
/// use middlemen::{AnalysisOptions, analyze_tokens, tokenize};
/// let options = AnalysisOptions { threshold: 1, ..Default::default() };
/// let analysis = analyze_tokens(&tokenize("a b a x b"), &options);
/// assert_eq!(analysis.token_count, 5);
/// assert_eq!(analysis.ratios.ratios["x"], 1.0);
/// ```
pub fn analyze_tokens(words: &[String], options: &AnalysisOptions) -> Analysis {
    let unigrams = count_words(words);

    info!("getting most frequent words...");
    let frequent = frequent_words(&unigrams, options.threshold);

    // needed to check whether (w1, w3) exists in the corpus on its own
    info!("getting all bigrams from the corpus...");
    let bigrams = count_bigrams(words);

    info!("finding trigrams...");
    let trigrams = collect_trigrams(&frequent, words);

    info!("finding the middle ratios...");
    let ratios = middle_ratios(
        &trigrams,
        &bigrams,
        &unigrams,
        words.len(),
        options.detailed_output,
    );

    debug!(
        "{} tokens, {} distinct, {} frequent, {} bigrams, {} middle words",
        words.len(),
        unigrams.len(),
        frequent.len(),
        bigrams.len(),
        trigrams.len()
    );

    Analysis {
        threshold: options.threshold,
        token_count: words.len(),
        unigrams,
        frequent_words: frequent,
        bigrams,
        trigrams,
        ratios,
    }
}

///Case-folds and tokenizes raw text, then runs [`analyze_tokens`].
/// # Example
/// ```
/// use middlemen::{AnalysisOptions, analyze_text};
/// let options = AnalysisOptions { threshold: 1, ..Default::default() };
/// let analysis = analyze_text("The cat sat on the mat the cat sat on the rug", &options);
/// let cat = &analysis.trigrams["cat"];
/// assert_eq!(cat[&("the".to_string(), "sat".to_string())], 2);
/// ```
pub fn analyze_text(text: &str, options: &AnalysisOptions) -> Analysis {
    analyze_tokens(&tokenize(&casefold(text)), options)
}

///Analyzes a corpus file, or every `.txt` file under a directory, and writes the results.
///Returns the results directory of every corpus written.
pub fn analyze_path(path: &Path, options: &AnalysisOptions) -> Result<Vec<PathBuf>> {
    let files = collect_files(path);
    if files.is_empty() {
        return Err(Error::NoCorpus(path.to_path_buf()));
    }

    if options.combine {
        let mut words = Vec::new();
        for file in &files {
            info!("reading {}", file.display());
            words.extend(tokenize(&read_corpus(file)?));
        }
        let analysis = analyze_tokens(&words, options);
        let written = write_results(&options.output_dir, COMBINED_NAME, &analysis)?;
        return Ok(vec![written]);
    }

    // read every corpus before writing any results
    let mut corpora = Vec::with_capacity(files.len());
    for file in &files {
        info!("reading {}", file.display());
        corpora.push((corpus_name(path, file), read_corpus(file)?));
    }

    let mut written = Vec::with_capacity(corpora.len());
    for (name, text) in &corpora {
        let analysis = analyze_tokens(&tokenize(text), options);
        written.push(write_results(&options.output_dir, name, &analysis)?);
    }
    Ok(written)
}
