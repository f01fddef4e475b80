//! Edit distance with a threshold bound, backing the candidate generators.

use std::cmp::min;

/// Calculate Levenshtein distance with a maximum threshold for early
/// termination. Returns None if the distance exceeds the threshold, which is
/// what makes the whole-vocabulary candidate scan affordable.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    // Early termination if length difference exceeds threshold
    if len1.abs_diff(len2) > threshold {
        return None;
    }

    if len1 == 0 {
        return if len2 <= threshold { Some(len2) } else { None };
    }
    if len2 == 0 {
        return if len1 <= threshold { Some(len1) } else { None };
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Use only two rows for space optimization
    let mut prev_row = vec![0; len2 + 1];
    let mut curr_row = vec![0; len2 + 1];

    for j in 0..=len2 {
        prev_row[j] = j;
    }

    for i in 1..=len1 {
        curr_row[0] = i;
        let mut min_in_row = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );

            min_in_row = min(min_in_row, curr_row[j]);
        }

        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[len2];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_distances_within_threshold() {
        assert_eq!(levenshtein_distance_threshold("", "", 0), Some(0));
        assert_eq!(levenshtein_distance_threshold("a", "a", 0), Some(0));
        assert_eq!(levenshtein_distance_threshold("ab", "ac", 2), Some(1));
        assert_eq!(
            levenshtein_distance_threshold("kitten", "sitting", 3),
            Some(3)
        );
        assert_eq!(
            levenshtein_distance_threshold("iphone", "ipone", 2),
            Some(1) // deletion
        );
        assert_eq!(
            levenshtein_distance_threshold("samsung", "samsnug", 2),
            Some(2) // transposition
        );
    }

    #[test]
    fn test_threshold_exceeded() {
        assert_eq!(levenshtein_distance_threshold("kitten", "sitting", 2), None);
        assert_eq!(levenshtein_distance_threshold("a", "abc", 1), None);
        assert_eq!(
            levenshtein_distance_threshold("bluetooth", "refrigerator", 2),
            None
        );
    }

    #[test]
    fn test_empty_string_edges() {
        assert_eq!(levenshtein_distance_threshold("", "a", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("a", "", 1), Some(1));
        assert_eq!(levenshtein_distance_threshold("", "abc", 2), None);
    }

    #[test]
    fn test_common_catalog_typos() {
        let common_typos = vec![
            ("iphone", "ipone", 1),
            ("headphones", "hedphones", 1),
            ("bluetooth", "blutooth", 1),
            ("wireless", "wireles", 1),
            ("camera", "camra", 1),
        ];

        for (correct, typo, distance) in common_typos {
            assert_eq!(
                levenshtein_distance_threshold(correct, typo, 2),
                Some(distance),
                "{correct} -> {typo}"
            );
        }
    }
}
