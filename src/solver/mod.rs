pub mod assignment;
pub mod backtracking;
pub mod best_first;
pub mod consistency;
pub mod domains;
pub mod heuristics;
pub mod stats;
pub mod strategy;
pub mod work_list;

/// The character at code-point position `index`, or `None` past the end.
///
/// Words are indexed by code point, not byte, so multi-byte vocabularies
/// behave the same as ASCII ones.
pub(crate) fn letter_at(word: &str, index: usize) -> Option<char> {
    word.chars().nth(index)
}
