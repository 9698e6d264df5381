use std::collections::HashSet;

use crate::document::WordPair;

/// Drop repeated word pairs, keeping the first occurrence of each
///
/// Matching is exact and case-sensitive; surviving pairs keep their relative
/// order.
pub fn dedup_pairs(pairs: Vec<WordPair>) -> Vec<WordPair> {
    let mut seen = HashSet::with_capacity(pairs.len());
    pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_occurrence_order() {
        let pairs = vec![
            WordPair::new("a", "x"),
            WordPair::new("b", "y"),
            WordPair::new("a", "x"),
        ];

        assert_eq!(
            dedup_pairs(pairs),
            vec![WordPair::new("a", "x"), WordPair::new("b", "y")]
        );
    }

    #[test]
    fn test_same_word_different_meaning_is_kept() {
        let pairs = vec![WordPair::new("bank", "银行"), WordPair::new("bank", "河岸")];
        assert_eq!(dedup_pairs(pairs.clone()), pairs);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let pairs = vec![WordPair::new("May", "五月"), WordPair::new("may", "五月")];
        assert_eq!(dedup_pairs(pairs).len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_pairs(Vec::new()).is_empty());
    }
}
