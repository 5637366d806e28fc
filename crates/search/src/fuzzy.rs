//! Edit distance over case-folded strings.

/// Levenshtein distance between two strings, ignoring case.
///
/// Insertions, deletions, and substitutions each cost 1. Either side being
/// empty short-circuits to the other side's length.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    if a == b {
        return 0;
    }

    // Two rows of the DP table are enough
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn identical_strings() {
        assert_eq!(levenshtein("chicken", "chicken"), 0);
    }

    #[test]
    fn case_is_folded() {
        assert_eq!(levenshtein("Chicken", "chicken"), 0);
        assert_eq!(levenshtein("RICE", "rice"), 0);
    }

    #[test]
    fn single_edits() {
        // substitution
        assert_eq!(levenshtein("chicken", "chacken"), 1);
        // deletion
        assert_eq!(levenshtein("chicken", "chiken"), 1);
        // insertion
        assert_eq!(levenshtein("rice", "rices"), 1);
    }

    #[test]
    fn empty_short_circuits() {
        assert_eq!(levenshtein("", "garlic"), 6);
        assert_eq!(levenshtein("garlic", ""), 6);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn unrelated_strings() {
        assert_eq!(levenshtein("beef", "rice"), 4);
    }

    proptest! {
        #[test]
        fn symmetric(a in "[a-zA-Z]{0,12}", b in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn zero_against_self(a in "[a-zA-Z]{0,12}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
        }

        #[test]
        fn bounded_by_longer_string(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = levenshtein(&a, &b);
            prop_assert!(d <= a.chars().count().max(b.chars().count()));
        }
    }
}
