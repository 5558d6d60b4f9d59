//! Text normalization for documents and queries.
//!
//! Both sides of the ranking pipeline go through the same [`tokenize`]
//! function, so a query term matches a document term exactly when their
//! normalized forms are equal.

/// Normalize free text into lowercase search tokens.
///
/// Punctuation is treated as a separator rather than deleted, so
/// "spring-based" becomes `["spring", "based"]` instead of fusing the
/// halves into one token. Tokens of one or two characters are dropped;
/// they are almost always stopwords ("of", "a") or units ("px").
///
/// Pure and infallible: empty input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let separated: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    separated
        .split_whitespace()
        .filter(|word| word.chars().count() > 2)
        .map(str::to_string)
        .collect()
}
