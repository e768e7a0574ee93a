// src/normalize.rs

//! Handwriting name normalizer
//!
//! Turns free-form, hand-typed recipe names into a canonical display form:
//!
//! - `riche horse` -> `Riche Horse`
//! - `meatball_-_SUB` -> `Meatball Sub`
//! - `Mix 1 2 Greens` -> `Mix Greens`
//!
//! # Rules
//!
//! - Words are separated by runs of whitespace, `_` or `-`
//! - Only alphabetic characters survive; digits and punctuation are dropped
//!   without splitting the word they appear in
//! - The first letter of every word is upper-cased, the rest lower-cased
//! - Words are joined by a single space
//!
//! Input that yields no letters at all is rejected.

use thiserror::Error;

/// Errors that can occur when normalizing a name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameParseError {
    #[error("Input contains no letters: '{0}'")]
    Empty(String),
}

/// Characters that separate words
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Normalize a hand-written name into title-cased, single-spaced words
pub fn normalize(raw: &str) -> Result<String, NameParseError> {
    let mut normalized = String::with_capacity(raw.len());

    for word in raw.split(is_separator) {
        let mut letters = word.chars().filter(|c| c.is_alphabetic());

        // Words made only of dropped characters vanish entirely
        let Some(first) = letters.next() else {
            continue;
        };

        if !normalized.is_empty() {
            normalized.push(' ');
        }
        // Only the first character of a multi-character capital stays upper-case
        let mut capital = first.to_uppercase();
        normalized.extend(capital.next());
        for c in capital.chain(letters) {
            normalized.extend(c.to_lowercase());
        }
    }

    if normalized.is_empty() {
        return Err(NameParseError::Empty(raw.to_string()));
    }

    Ok(normalized)
}
