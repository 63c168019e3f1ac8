//! Display formatting for names stored on entities.
//!
//! Stored names keep whatever casing the caller supplied; reports render them
//! title-cased.

/// Errors that can occur while formatting a name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Cannot format an empty or blank name")]
    EmptyInput,
}

/// Maximum number of leading words that take part in title-casing.
pub const TITLE_CASE_WORDS: usize = 2;

/// Title-cases the first two words of `input`.
///
/// # Rules
///
/// 1. Words are separated by single spaces; empty tokens from repeated
///    spaces are skipped
/// 2. Only the first [`TITLE_CASE_WORDS`] words are kept
/// 3. Each kept word gets an upper-case first character and a lower-case remainder
/// 4. Kept words are joined with a single space
///
/// # Errors
///
/// Returns [`FormatError::EmptyInput`] if `input` has no non-space characters.
///
/// # Examples
///
/// ```
/// use realty_agency::utils::formatting::title_case_leading_words;
///
/// assert_eq!(title_case_leading_words("56th AVENUE").unwrap(), "56th Avenue");
/// assert_eq!(title_case_leading_words("surrey").unwrap(), "Surrey");
/// ```
pub fn title_case_leading_words(input: &str) -> Result<String, FormatError> {
    let words: Vec<String> = input
        .split(' ')
        .filter(|token| !token.is_empty())
        .take(TITLE_CASE_WORDS)
        .map(capitalize)
        .collect();

    if words.is_empty() {
        return Err(FormatError::EmptyInput);
    }

    Ok(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
