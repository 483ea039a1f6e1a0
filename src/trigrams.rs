use indexmap::{IndexMap, IndexSet};

use crate::counts::Bigram;

/// Middle word -> (left, right) context -> occurrences of that exact trigram.
pub type TrigramTable = IndexMap<String, IndexMap<Bigram, usize>>;

///Records the left/right neighbours of every occurrence of a frequent word.
///Occurrences at the first or last position have no full context and are skipped.
/// # Example
/// ```
/// use indexmap::IndexSet;
/// use middlemen::collect_trigrams;
/// let words: Vec<String> = "a x b a x b y x c".split(' ').map(String::from).collect();
/// let frequent: IndexSet<String> = IndexSet::from(["x".to_string()]);
/// let trigrams = collect_trigrams(&frequent, &words);
/// assert_eq!(trigrams["x"][&("a".to_string(), "b".to_string())], 2);
/// assert_eq!(trigrams["x"].len(), 2);
/// ```
pub fn collect_trigrams(frequent: &IndexSet<String>, words: &[String]) -> TrigramTable {
    let mut trigrams = TrigramTable::new();
    for (index, word) in words.iter().enumerate() {
        if !frequent.contains(word) {
            continue;
        }
        let Some(context) = surrounding_pair(words, index) else {
            continue;
        };
        *trigrams
            .entry(word.clone())
            .or_default()
            .entry(context)
            .or_insert(0) += 1;
    }
    trigrams
}

fn surrounding_pair(words: &[String], index: usize) -> Option<Bigram> {
    let left = words.get(index.checked_sub(1)?)?;
    let right = words.get(index + 1)?;
    Some((left.clone(), right.clone()))
}
