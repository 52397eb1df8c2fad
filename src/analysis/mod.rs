//! Pure text analysis engine
//!
//! Every function here is a total, deterministic computation over a content
//! string: no I/O, no shared state, safe to run concurrently from any number
//! of tasks. Fetching content and caching results belong to the service layer.

mod longest;
mod metrics;
mod report;
mod tokenize;

pub use longest::{longest_words, ParagraphLongestWords};
pub use metrics::{character_count, paragraph_count, sentence_count, word_count};
pub use report::TextReport;
pub use tokenize::tokenize;

/// Paragraph separator: a blank line (two consecutive line breaks)
pub(crate) const PARAGRAPH_SEPARATOR: &str = "\n\n";
