use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use csv::WriterBuilder;
use log::info;
use serde::Serialize;

use crate::Analysis;
use crate::error::{Error, Result};
use crate::ratios::ContextDetail;

pub const RATIOS_FILE: &str = "ratios.csv";
pub const REAL_BIGRAMS_FILE: &str = "real_bigrams.txt";
pub const MUTUAL_INFORMATION_FILE: &str = "mutual_information.csv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const WORDS_DIR: &str = "words";

/// Column labels of the per-word files. Rows carry the mutual information as an extra trailing field.
pub const DETAIL_HEADER: [&str; 7] = [
    "trigram",
    "trigram count",
    "count * k",
    "bigram",
    "bigram count",
    "count * [word]",
    "ratio",
];

#[derive(Debug, Serialize)]
struct Summary<'a> {
    corpus: &'a str,
    generated_at: String,
    threshold: usize,
    token_count: usize,
    distinct_tokens: usize,
    frequent_words: usize,
    words_with_ratio: usize,
    real_bigrams: usize,
}

///Writes all result files for one corpus into `<output_dir>/<corpus_name>/` and returns that directory.
///The `words/` tables are written only when the analysis carries detailed rows.
pub fn write_results(output_dir: &Path, corpus_name: &str, analysis: &Analysis) -> Result<PathBuf> {
    let results_path = output_dir.join(corpus_name);
    info!("printing results to {}", results_path.display());
    fs::create_dir_all(&results_path).map_err(|e| Error::io(&results_path, e))?;

    write_ratios(&results_path.join(RATIOS_FILE), analysis)?;
    write_real_bigrams(&results_path.join(REAL_BIGRAMS_FILE), analysis)?;
    write_mutual_information(&results_path.join(MUTUAL_INFORMATION_FILE), analysis)?;
    write_summary(&results_path.join(SUMMARY_FILE), corpus_name, analysis)?;

    if !analysis.ratios.detailed.is_empty() {
        info!("printing detailed output");
        let words_path = results_path.join(WORDS_DIR);
        fs::create_dir_all(&words_path).map_err(|e| Error::io(&words_path, e))?;
        for (word, rows) in &analysis.ratios.detailed {
            write_word_details(&words_path.join(format!("{word}.csv")), rows)?;
        }
    }

    Ok(results_path)
}

/// Floats always keep a fractional part (`1.0`, not `1`).
fn format_float(value: f64) -> String {
    format!("{value:?}")
}

fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| Error::io(path, e))
}

fn write_ratios(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(create(path)?);
    for (word, ratio) in &analysis.ratios.ratios {
        wtr.write_record([word.as_str(), format_float(*ratio).as_str()])?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

fn write_mutual_information(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .from_writer(create(path)?);
    for (word, mi) in &analysis.ratios.mutual_information {
        wtr.write_record([word.as_str(), format_float(*mi).as_str()])?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

fn write_real_bigrams(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut pairs: Vec<[&str; 2]> = analysis
        .ratios
        .real_bigrams
        .iter()
        .map(|(left, right)| [left.as_str(), right.as_str()])
        .collect();
    pairs.sort_unstable();

    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, &pairs)?;
    file.write_all(b"\n").map_err(|e| Error::io(path, e))?;
    Ok(())
}

fn write_summary(path: &Path, corpus_name: &str, analysis: &Analysis) -> Result<()> {
    let summary = Summary {
        corpus: corpus_name,
        generated_at: Local::now().to_rfc3339(),
        threshold: analysis.threshold,
        token_count: analysis.token_count,
        distinct_tokens: analysis.unigrams.len(),
        frequent_words: analysis.frequent_words.len(),
        words_with_ratio: analysis.ratios.ratios.len(),
        real_bigrams: analysis.ratios.real_bigrams.len(),
    };
    let file = create(path)?;
    serde_json::to_writer_pretty(file, &summary)?;
    Ok(())
}

fn write_word_details(path: &Path, rows: &[ContextDetail]) -> Result<()> {
    // rows are one field wider than the header
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .from_writer(create(path)?);
    wtr.write_record(DETAIL_HEADER)?;
    for row in rows {
        let (left, middle, right) = &row.trigram;
        let (bigram_left, bigram_right) = &row.bigram;
        wtr.write_record([
            format!("{left} {middle} {right}"),
            row.trigram_count.to_string(),
            row.ratio_with_middle.to_string(),
            format!("{bigram_left} {bigram_right}"),
            row.bigram_count.to_string(),
            row.ratio_without_middle.to_string(),
            format_float(row.combined_ratio),
            format_float(row.mutual_information),
        ])?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}
