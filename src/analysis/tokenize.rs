//! Tokenizer/normalizer: raw content to a normalized word sequence

/// Split content into normalized words.
///
/// Normalization, in order: lower-case the whole string, drop every character
/// that is neither word-constituent (alphanumeric or `_`) nor whitespace,
/// split on whitespace runs, discard empty tokens.
///
/// Output preserves left-to-right order and retains duplicates. Word-constituent
/// characters are Unicode alphanumerics plus underscore, so accented and
/// non-Latin words survive normalization intact.
pub fn tokenize(content: &str) -> Vec<String> {
    let normalized: String = content
        .to_lowercase()
        .chars()
        .filter(|c| is_word_constituent(*c) || c.is_whitespace())
        .collect();

    normalized
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn is_word_constituent(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
