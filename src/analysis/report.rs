//! Composite analysis report

use super::longest::ParagraphLongestWords;
use serde::{Deserialize, Serialize};

/// All metrics for one document, produced in a single pass by the service's
/// report aggregator. Immutable once built; cached as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextReport {
    pub word_count: usize,
    pub character_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
    pub longest_words: Vec<ParagraphLongestWords>,
}
