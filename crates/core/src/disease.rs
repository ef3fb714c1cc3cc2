//! Disease name handling.
//!
//! Free-text names arrive from the chat front end with arbitrary spacing and casing. They are
//! turned into identifiers (`gastric_ulcer`) for lookup and back into labels
//! (`Gastric Ulcer`) for printing.

use crate::constants::KEY_SEPARATOR;
use crate::{TherabotError, TherabotResult};

/// Normalise a free-text disease name into an identifier.
///
/// Leading and trailing whitespace is dropped, every internal whitespace run becomes a single
/// `_`, and the result is lowercased. Applying it to its own output is a no-op.
///
/// # Errors
/// Returns `InvalidInput` when nothing but whitespace was supplied.
pub fn normalise(raw: &str) -> TherabotResult<String> {
    let separator = KEY_SEPARATOR.to_string();
    let key = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(&separator)
        .to_lowercase();

    if key.is_empty() {
        return Err(TherabotError::InvalidInput(
            "disease name cannot be empty".into(),
        ));
    }

    Ok(key)
}

/// Human-readable form of an identifier: `acute_pancreatitis` becomes `Acute Pancreatitis`.
///
/// Words are split on single spaces after separator replacement, so consecutive separators
/// keep their spacing.
pub fn display_label(identifier: &str) -> String {
    identifier
        .replace(KEY_SEPARATOR, " ")
        .split(' ')
        .map(capitalise_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
