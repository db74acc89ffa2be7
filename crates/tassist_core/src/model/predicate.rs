//! Person filters used by list views.

use crate::model::person::Person;
use crate::util::contains_word_ignore_case;

/// Matches persons whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywordsPredicate {
    keywords: Vec<String>,
}

impl NameContainsKeywordsPredicate {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    /// Keywords in the order they were given.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn test(&self, person: &Person) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_word_ignore_case(person.name.as_str(), keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::NameContainsKeywordsPredicate;
    use crate::model::person::Person;
    use crate::model::values::{MatNum, Name};

    fn named(name: &str) -> Person {
        Person::new(Name::new(name).unwrap(), MatNum::new("A0000001A").unwrap())
    }

    fn predicate(keywords: &[&str]) -> NameContainsKeywordsPredicate {
        NameContainsKeywordsPredicate::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    #[test]
    fn matches_any_keyword_ignoring_case() {
        assert!(predicate(&["Alice"]).test(&named("Alice Bob")));
        assert!(predicate(&["Carol", "bOB"]).test(&named("Alice Bob")));
        assert!(predicate(&["aLIce", "bOB"]).test(&named("Alice Bob")));
    }

    #[test]
    fn rejects_partial_words_and_empty_keywords() {
        assert!(!predicate(&[]).test(&named("Alice")));
        assert!(!predicate(&["Carol"]).test(&named("Alice Bob")));
        assert!(!predicate(&["Ali"]).test(&named("Alice Bob")));
    }
}
