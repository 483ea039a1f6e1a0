use std::sync::LazyLock;

use regex::Regex;

// Contractions first, then plain words, then the three kept punctuation marks.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+'\w+|\w+|[.,;]").expect("token pattern is valid")
});

/// Case-folds a whole corpus before tokenizing.
///
/// This is Unicode lowercasing (`str::to_lowercase`), not full case folding:
/// `ß` stays `ß` rather than becoming `ss`.
pub fn casefold(content: &str) -> String {
    content.to_lowercase()
}

///Splits already case-folded text into word and punctuation tokens.
///Words may carry one internal apostrophe (`don't`); `.`, `,` and `;` are kept as tokens, everything else is dropped.
/// # Example
/// ```
/// use middlemen::tokenize;
/// let tokens = tokenize("don't stop; the (music) now.");
/// assert_eq!(tokens, vec!["don't", "stop", ";", "the", "music", "now", "."]);
/// ```
pub fn tokenize(content: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(content)
        .map(|m| m.as_str().to_owned())
        .collect()
}
