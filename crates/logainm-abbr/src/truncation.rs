//! Word-level truncation passes.

use crate::mutation::{char_len, MutationTables};

/// Truncate the last word to its first sound. Zero words is a no-op.
pub fn truncate_last_word(text: &str, mutations: &MutationTables) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    match words.last_mut() {
        Some(last) => *last = mutations.first_sound(*last),
        None => return text.to_string(),
    }
    words.join(" ")
}

/// One progressive pass: truncate the first word longer than three
/// characters, leaving every other word untouched.
///
/// Returns the input unchanged when no such word exists, or when the first
/// long word is already an irreducible 4-character cluster — the caller
/// uses that as its termination signal.
pub fn progressive_pass(text: &str, mutations: &MutationTables) -> String {
    let mut done = false;
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|word| {
            if !done && char_len(word) > 3 {
                done = true;
                mutations.first_sound(word)
            } else {
                word
            }
        })
        .collect();
    words.join(" ")
}
