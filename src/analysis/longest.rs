//! Longest-word-per-paragraph finder

use super::tokenize::tokenize;
use super::PARAGRAPH_SEPARATOR;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Longest words found in one paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphLongestWords {
    /// 1-based paragraph index, assigned in split order
    pub paragraph: usize,
    /// All distinct words of maximal length, first-occurrence order;
    /// empty when the paragraph tokenizes to zero words
    pub longest_words: Vec<String>,
}

/// Find the longest normalized words of every paragraph.
///
/// Unlike [`paragraph_count`](super::paragraph_count), blank segments are NOT
/// filtered out: every blank-line-separated segment gets an entry, so an
/// entirely blank document still yields one entry per segment, each with an
/// empty word list. Length is measured in `char`s; ties are all reported,
/// deduplicated with first occurrence winning.
pub fn longest_words(content: &str) -> Vec<ParagraphLongestWords> {
    content
        .split(PARAGRAPH_SEPARATOR)
        .enumerate()
        .map(|(idx, paragraph)| {
            let words = tokenize(paragraph);
            ParagraphLongestWords {
                paragraph: idx + 1,
                longest_words: longest_of(words),
            }
        })
        .collect()
}

/// All distinct words of maximal length, in first-occurrence order.
fn longest_of(words: Vec<String>) -> Vec<String> {
    let max_len = match words.iter().map(|w| w.chars().count()).max() {
        Some(len) => len,
        None => return Vec::new(),
    };

    let mut seen = HashSet::new();
    words
        .into_iter()
        .filter(|w| w.chars().count() == max_len)
        .filter(|w| seen.insert(w.clone()))
        .collect()
}
