//! Diff group highlighting.

mod diff_highlighter;
mod group_token;

pub use diff_highlighter::DiffHighlighter;
pub use group_token::{is_diff_group_token, resolve_diff_group_token};
