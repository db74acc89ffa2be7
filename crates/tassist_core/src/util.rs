//! Small text helpers shared by model predicates.

/// Returns whether `sentence` contains `word` as a whole word, ignoring case.
///
/// Words in `sentence` are separated by runs of whitespace. A blank `word`
/// never matches.
pub fn contains_word_ignore_case(sentence: &str, word: &str) -> bool {
    let word = word.trim();
    if word.is_empty() {
        return false;
    }
    let needle = word.to_lowercase();
    sentence
        .split_whitespace()
        .any(|candidate| candidate.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::contains_word_ignore_case;

    #[test]
    fn matches_whole_words_case_insensitively() {
        assert!(contains_word_ignore_case("Alice Pauline", "alice"));
        assert!(contains_word_ignore_case("  Alice   Pauline ", "PAULINE"));
        assert!(!contains_word_ignore_case("Alice Pauline", "Ali"));
        assert!(!contains_word_ignore_case("Alice Pauline", "   "));
        assert!(!contains_word_ignore_case("", "alice"));
    }
}
