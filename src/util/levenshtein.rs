//! Levenshtein distance over sequences of `char`s.
//!
//! Two flavours are provided: [`levenshtein_distance`] fills the whole
//! `(|a|+1) x (|b|+1)` table, and [`first_row`]/[`next_row`] expose the same
//! recurrence one row at a time so that a trie walk can extend the table as
//! it descends and drop it as it backtracks.

use std::cmp::min;

/// Edit distance between `s1` and `s2`, counted in `char`s.
///
/// Fills the `(|s1|+1) x (|s2|+1)` table where cell `[i][j]` is the distance
/// between the first `i` chars of `s1` and the first `j` chars of `s2`, and
/// returns the bottom-right cell.
#[allow(clippy::needless_range_loop)]
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];

    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            matrix[i][j] = if s1_chars[i - 1] == s2_chars[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + min(
                    matrix[i - 1][j - 1], // substitution
                    min(
                        matrix[i - 1][j], // deletion
                        matrix[i][j - 1], // insertion
                    ),
                )
            };
        }
    }

    matrix[len1][len2]
}

/// Row 0 of the table: distance from the empty string to every prefix of `query`.
pub fn first_row(query: &[char]) -> Vec<usize> {
    (0..=query.len()).collect()
}

/// Compute the row for a word one symbol longer than the word `prev_row` belongs to.
///
/// `prev_row` must have `query.len() + 1` entries. The last entry of the
/// returned row is the distance between the extended word and `query`.
pub fn next_row(prev_row: &[usize], symbol: char, query: &[char]) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev_row.len());
    row.push(prev_row[0] + 1);

    for (j, &q) in query.iter().enumerate() {
        let value = if q == symbol {
            prev_row[j]
        } else {
            1 + min(prev_row[j], min(prev_row[j + 1], row[j]))
        };
        row.push(value);
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distance_by_rows(word: &str, query: &str) -> usize {
        let query: Vec<char> = query.chars().collect();
        let row = word
            .chars()
            .fold(first_row(&query), |row, c| next_row(&row, c, &query));
        row[query.len()]
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("", "a"), 1);
        assert_eq!(levenshtein_distance("a", ""), 1);
        assert_eq!(levenshtein_distance("a", "a"), 0);
        assert_eq!(levenshtein_distance("ab", "ac"), 1);
        assert_eq!(levenshtein_distance("abc", "def"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("search", "serach"), 2); // transposition costs two
        assert_eq!(levenshtein_distance("weather", "wether"), 1);
    }

    #[test]
    fn test_levenshtein_distance_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
        assert_eq!(levenshtein_distance("日本語", "日本"), 1);
    }

    #[test]
    fn test_rows_agree_with_full_table() {
        let pairs = [
            ("", ""),
            ("", "abc"),
            ("abc", ""),
            ("kitten", "sitting"),
            ("weather", "wether"),
            ("wealth", "wether"),
            ("weary", "wea"),
            ("flaw", "lawn"),
        ];

        for (word, query) in pairs {
            assert_eq!(
                distance_by_rows(word, query),
                levenshtein_distance(word, query),
                "{word} vs {query}"
            );
        }
    }

    #[test]
    fn test_first_row() {
        let query: Vec<char> = "abc".chars().collect();
        assert_eq!(first_row(&query), vec![0, 1, 2, 3]);
        assert_eq!(first_row(&[]), vec![0]);
    }
}
