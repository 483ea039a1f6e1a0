use indexmap::{IndexMap, IndexSet};

/// An ordered pair of adjacent tokens, or the left/right context of a middle word.
pub type Bigram = (String, String);

/// Token -> occurrences over the whole token sequence, in order of first appearance.
pub type UnigramTable = IndexMap<String, usize>;

/// Adjacent pair -> occurrences over the whole token sequence.
pub type BigramTable = IndexMap<Bigram, usize>;

///Takes &[String] and counts the quantity of each token. Returns IndexMap<String, usize> ordered by first appearance.
/// # Example
/// ```
/// use middlemen::count_words;
/// let words = vec!["one".to_string(), "two".to_string(), "two".to_string()];
/// let counted = count_words(&words);
/// assert_eq!(counted["one"], 1);
/// assert_eq!(counted["two"], 2);
/// ```
pub fn count_words(words: &[String]) -> UnigramTable {
    let mut frequency = UnigramTable::new();
    for word in words {
        *frequency.entry(word.to_owned()).or_insert(0) += 1;
    }
    frequency
}

/// Every distinct token counted at least `threshold` times.
pub fn frequent_words(unigrams: &UnigramTable, threshold: usize) -> IndexSet<String> {
    unigrams
        .iter()
        .filter(|(_, count)| **count >= threshold)
        .map(|(word, _)| word.clone())
        .collect()
}

///Counts every pair of consecutive tokens. Sequences shorter than two tokens give an empty table.
/// # Example
/// ```
/// use middlemen::count_bigrams;
/// let words: Vec<String> = "a b a b".split(' ').map(String::from).collect();
/// let bigrams = count_bigrams(&words);
/// assert_eq!(bigrams[&("a".to_string(), "b".to_string())], 2);
/// assert_eq!(bigrams[&("b".to_string(), "a".to_string())], 1);
/// ```
pub fn count_bigrams(words: &[String]) -> BigramTable {
    let mut bigrams = BigramTable::new();
    for pair in words.windows(2) {
        *bigrams
            .entry((pair[0].clone(), pair[1].clone()))
            .or_insert(0) += 1;
    }
    bigrams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_count() {
        let counted = count_words(&words("one two two three three three"));
        assert_eq!(counted.len(), 3);
        assert_eq!(counted["one"], 1);
        assert_eq!(counted["two"], 2);
        assert_eq!(counted["three"], 3);
        // first-appearance order
        let order: Vec<&str> = counted.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_frequent_words_threshold() {
        let counted = count_words(&words("a a a b b c"));
        let freq = frequent_words(&counted, 2);
        assert!(freq.contains("a"));
        assert!(freq.contains("b"));
        assert!(!freq.contains("c"));
        assert_eq!(frequent_words(&counted, 1).len(), 3);
        assert!(frequent_words(&counted, 4).is_empty());
    }

    #[test]
    fn test_frequent_words_monotonic_in_threshold() {
        let counted = count_words(&words("x x x x y y y z z q"));
        let mut previous = usize::MAX;
        for threshold in 0..6 {
            let size = frequent_words(&counted, threshold).len();
            assert!(size <= previous);
            previous = size;
        }
    }

    #[test]
    fn test_bigram_totals() {
        let seq = words("the cat sat on the mat the cat sat");
        let bigrams = count_bigrams(&seq);
        assert!(bigrams.len() <= seq.len() - 1);
        assert_eq!(bigrams.values().sum::<usize>(), seq.len() - 1);
        assert_eq!(bigrams[&("the".to_string(), "cat".to_string())], 2);
    }

    #[test]
    fn test_bigrams_short_sequences() {
        assert!(count_bigrams(&[]).is_empty());
        assert!(count_bigrams(&words("word")).is_empty());
    }
}
