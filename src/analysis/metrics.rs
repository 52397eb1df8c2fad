//! Scalar metrics: word, character, sentence and paragraph counts

use super::tokenize::tokenize;
use super::PARAGRAPH_SEPARATOR;

/// Sentence terminators
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Number of normalized words in the content.
pub fn word_count(content: &str) -> usize {
    tokenize(content).len()
}

/// Number of non-whitespace characters in the content.
///
/// Whitespace runs contribute zero characters, not one.
pub fn character_count(content: &str) -> usize {
    content.chars().filter(|c| !c.is_whitespace()).count()
}

/// Number of sentences in the content.
///
/// A sentence is a maximal run of one or more non-terminator characters
/// followed by one or more terminators (`.`, `!`, `?`). A trailing fragment
/// with no terminator is not counted; terminator-only content yields 0.
pub fn sentence_count(content: &str) -> usize {
    let mut count = 0;
    let mut has_body = false;
    let mut in_terminators = false;

    for c in content.chars() {
        if TERMINATORS.contains(&c) {
            if has_body {
                in_terminators = true;
            }
        } else {
            if in_terminators {
                // Terminator run just ended a sentence
                count += 1;
                in_terminators = false;
                has_body = false;
            }
            has_body = true;
        }
    }
    if in_terminators {
        count += 1;
    }
    count
}

/// Number of non-blank paragraphs in the content.
///
/// Paragraphs are separated by blank lines; segments that trim to nothing
/// (leading, trailing or consecutive separators) are not counted.
pub fn paragraph_count(content: &str) -> usize {
    content
        .split(PARAGRAPH_SEPARATOR)
        .filter(|p| !p.trim().is_empty())
        .count()
}
