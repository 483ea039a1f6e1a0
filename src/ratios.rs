//! Middle ratios and mutual information for frequent words.
//!
//! A context `(left, right)` of a middle word `w` is *successful* when the
//! trigram `left w right` is more frequent, relative to the corpus size, than
//! the bigram `left right` is relative to the frequency of `w`:
//!
//! ```text
//! count(left w right) * N  >  count(left right) * count(w)
//! ```
//!
//! The middle ratio of `w` is the share of its distinct contexts that are
//! successful. Contexts whose `left right` pair never occurs as a bigram have a
//! zero denominator; they are skipped but still count towards the total.

use indexmap::{IndexMap, IndexSet};
use log::debug;

use crate::counts::{Bigram, BigramTable, UnigramTable};
use crate::trigrams::TrigramTable;

/// Inputs and intermediate values of one successful context.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextDetail {
    pub trigram: (String, String, String),
    pub trigram_count: usize,
    /// `trigram_count * N`
    pub ratio_with_middle: u128,
    pub bigram: Bigram,
    pub bigram_count: usize,
    /// `bigram_count * count(middle)`
    pub ratio_without_middle: u128,
    pub combined_ratio: f64,
    pub mutual_information: f64,
}

/// Everything derived from the trigram table. All maps keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiddleRatios {
    /// Only words with at least one successful context, in order of their first success.
    pub ratios: IndexMap<String, f64>,
    /// Mutual information of the most recently processed successful context of each word.
    pub mutual_information: IndexMap<String, f64>,
    /// Context pairs of any frequent word that also occur as adjacent bigrams.
    pub real_bigrams: IndexSet<Bigram>,
    /// Per-word rows for successful contexts; empty unless requested.
    pub detailed: IndexMap<String, Vec<ContextDetail>>,
}

///Computes middle ratios, mutual information and the real-bigram set.
/// # Example
/// ```
/// use middlemen::{collect_trigrams, count_bigrams, count_words, frequent_words, middle_ratios, tokenize};
/// let words = tokenize("a b a x b");
/// let unigrams = count_words(&words);
/// let bigrams = count_bigrams(&words);
/// let trigrams = collect_trigrams(&frequent_words(&unigrams, 1), &words);
/// let result = middle_ratios(&trigrams, &bigrams, &unigrams, words.len(), false);
/// assert_eq!(result.ratios["x"], 1.0);
/// assert_eq!(result.mutual_information["x"], -2.0);
/// assert!(!result.ratios.contains_key("a"));
/// ```
pub fn middle_ratios(
    trigrams: &TrigramTable,
    bigrams: &BigramTable,
    unigrams: &UnigramTable,
    token_count: usize,
    detailed_output: bool,
) -> MiddleRatios {
    let mut result = MiddleRatios {
        real_bigrams: real_bigrams(trigrams, bigrams),
        ..Default::default()
    };
    let mut successful_contexts: IndexMap<String, usize> = IndexMap::new();

    for (middle_word, contexts) in trigrams {
        let middle_count = count_of(unigrams, middle_word);

        for (context, &trigram_count) in contexts {
            let ratio_with_middle = trigram_count as u128 * token_count as u128;
            let bigram_count = bigrams.get(context).copied().unwrap_or(0);
            let ratio_without_middle = bigram_count as u128 * middle_count;

            // (left, right) never occurs without the middle word
            if ratio_without_middle == 0 {
                continue;
            }
            if ratio_with_middle <= ratio_without_middle {
                continue;
            }
            let combined_ratio = ratio_with_middle as f64 / ratio_without_middle as f64;

            let (left, right) = context;
            let word_frequencies =
                count_of(unigrams, left) * middle_count * count_of(unigrams, right);
            let mutual_information = (trigram_count as f64 / word_frequencies as f64).log2();

            *successful_contexts.entry(middle_word.clone()).or_insert(0) += 1;
            // last successful context wins
            result
                .mutual_information
                .insert(middle_word.clone(), mutual_information);

            if detailed_output {
                result
                    .detailed
                    .entry(middle_word.clone())
                    .or_default()
                    .push(ContextDetail {
                        trigram: (left.clone(), middle_word.clone(), right.clone()),
                        trigram_count,
                        ratio_with_middle,
                        bigram: context.clone(),
                        bigram_count,
                        ratio_without_middle,
                        combined_ratio,
                        mutual_information,
                    });
            }
        }
    }

    result.ratios = successful_contexts
        .into_iter()
        .map(|(word, successes)| {
            let total = trigrams.get(&word).map_or(0, |contexts| contexts.len());
            let ratio = successes as f64 / total as f64;
            (word, ratio)
        })
        .collect();

    debug!(
        "{} of {} middle words have successful contexts, {} real bigrams",
        result.ratios.len(),
        trigrams.len(),
        result.real_bigrams.len()
    );
    result
}

/// Context pairs, across all middle words, that exist as bigrams on their own.
pub fn real_bigrams(trigrams: &TrigramTable, bigrams: &BigramTable) -> IndexSet<Bigram> {
    trigrams
        .values()
        .flat_map(|contexts| contexts.keys())
        .filter(|context| bigrams.contains_key(*context))
        .cloned()
        .collect()
}

fn count_of(unigrams: &UnigramTable, word: &str) -> u128 {
    unigrams.get(word).copied().unwrap_or(0) as u128
}
