//! Diff group token resolution
//!
//! The report renderer tags both sides of an aligned difference with a shared
//! class such as `cdiff12` (characters) or `wdiff3` (words). Any token that
//! contains `diff` with a digit somewhere after it counts.

use regex::Regex;
use std::sync::OnceLock;

fn group_token_regex() -> &'static Regex {
    static GROUP_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    GROUP_TOKEN_REGEX.get_or_init(|| Regex::new(r"diff.*[0-9]").unwrap())
}

/// Check whether a single class token names a diff group.
pub fn is_diff_group_token(token: &str) -> bool {
    group_token_regex().is_match(token)
}

/// Return the first diff group token of a whitespace-separated class list.
pub fn resolve_diff_group_token(class_list: &str) -> Option<&str> {
    class_list
        .split_whitespace()
        .find(|token| is_diff_group_token(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_renderer_tokens() {
        assert_eq!(resolve_diff_group_token("cdiff12 diff"), Some("cdiff12"));
        assert_eq!(resolve_diff_group_token("diff wdiff3"), Some("wdiff3"));
        assert_eq!(resolve_diff_group_token("diff1-a diff"), Some("diff1-a"));
    }

    #[test]
    fn test_digit_may_follow_later_in_token() {
        assert_eq!(resolve_diff_group_token("diff diffX7extra"), Some("diffX7extra"));
    }

    #[test]
    fn test_no_group_token() {
        assert_eq!(resolve_diff_group_token("diff nope"), None);
        assert_eq!(resolve_diff_group_token("diff diff-highlight"), None);
        assert_eq!(resolve_diff_group_token("Diff1"), None);
        assert_eq!(resolve_diff_group_token(""), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(resolve_diff_group_token("cdiff1 wdiff2 diff"), Some("cdiff1"));
    }
}
