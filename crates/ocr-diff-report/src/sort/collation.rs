//! Natural, case- and accent-insensitive string ordering
//!
//! Embedded digit runs compare by numeric value ("2" < "10"). Other
//! characters compare by their base letter, so "É", "e" and "E" are equal,
//! and compatibility variants fold too: long s "ſ" is "s", "ﬁ" is "fi".
//! Punctuation and whitespace sort before digits, digits before letters.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    /// Digit run with leading zeros stripped.
    Number(String),
    Char(char),
}

impl Chunk {
    fn rank(&self) -> u8 {
        match self {
            Chunk::Char(c) if !c.is_alphanumeric() => 0,
            Chunk::Number(_) => 1,
            Chunk::Char(_) => 2,
        }
    }

    fn cmp_within_rank(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Chunk::Number(a), Chunk::Number(b)) => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
            (Chunk::Char(a), Chunk::Char(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn chunks(text: &str) -> Vec<Chunk> {
    let folded: Vec<char> = text
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    let mut result = Vec::new();
    let mut i = 0;
    while i < folded.len() {
        if folded[i].is_ascii_digit() {
            let start = i;
            while i < folded.len() && folded[i].is_ascii_digit() {
                i += 1;
            }
            let digits: String = folded[start..i].iter().collect();
            result.push(Chunk::Number(digits.trim_start_matches('0').to_string()));
        } else {
            result.push(Chunk::Char(folded[i]));
            i += 1;
        }
    }
    result
}

/// Compare two strings in natural order, ignoring case and accents.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a = chunks(a);
    let b = chunks(b);
    for (x, y) in a.iter().zip(&b) {
        let ordering = x
            .rank()
            .cmp(&y.rank())
            .then_with(|| x.cmp_within_rank(y));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(items: &[&str]) -> Vec<String> {
        let mut items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        items.sort_by(|a, b| natural_cmp(a, b));
        items
    }

    #[test]
    fn test_numbers_compare_by_value() {
        assert_eq!(sorted(&["10", "2", "1"]), vec!["1", "2", "10"]);
        assert_eq!(
            sorted(&["page 10", "page 9", "page 100"]),
            vec!["page 9", "page 10", "page 100"]
        );
    }

    #[test]
    fn test_case_and_accents_are_ignored() {
        assert_eq!(natural_cmp("Banana", "banana"), Ordering::Equal);
        assert_eq!(natural_cmp("été", "ETE"), Ordering::Equal);
        assert_eq!(sorted(&["Banana", "apple"]), vec!["apple", "Banana"]);
    }

    #[test]
    fn test_historical_letter_forms_fold_to_base() {
        assert_eq!(natural_cmp("ſ", "s"), Ordering::Equal);
        assert_eq!(natural_cmp("ſ", "t"), Ordering::Less);
        assert_eq!(natural_cmp("ſ", "r"), Ordering::Greater);
        assert_eq!(natural_cmp("ﬁ", "fi"), Ordering::Equal);
        assert_eq!(sorted(&["z", "ſ", "a"]), vec!["a", "ſ", "z"]);
    }

    #[test]
    fn test_leading_zeros_are_equal() {
        assert_eq!(natural_cmp("007", "7"), Ordering::Equal);
        assert_eq!(natural_cmp("08", "9"), Ordering::Less);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(natural_cmp("-", "1"), Ordering::Less);
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
        assert_eq!(natural_cmp(" ", "a"), Ordering::Less);
    }

    #[test]
    fn test_prefix_and_empty() {
        assert_eq!(natural_cmp("", ""), Ordering::Equal);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
        assert_eq!(natural_cmp("abc", "ab"), Ordering::Greater);
    }

    #[test]
    fn test_percentages_from_report_tables() {
        assert_eq!(
            sorted(&["12.5%", "3.0%", "100.0%"]),
            vec!["3.0%", "12.5%", "100.0%"]
        );
    }
}
