//! Irish placename abbreviation for space-constrained signage.
//!
//! Shortens a placename to a display budget (19 characters by default)
//! through a cascade of progressively more aggressive passes:
//!
//! 1. Adjective substitution (Thuaidh > Thu)
//! 2. Classifier substitution (Baile > B)
//! 3. Definite-noun-phrase final-word truncation (Bóthar na gCloch > Bóthar na gCl)
//! 4. Last-word truncation to its first sound
//! 5. Progressive per-word truncation until the name fits
//!
//! Truncation never cuts inside an Irish initial mutation: the leading
//! consonant cluster or vowel-mutation prefix of a word survives as a unit.
//! The cascade is greedy rather than minimal, and a name with nothing left
//! to shorten is returned over budget instead of rejected.

pub mod error;
pub mod mutation;
pub mod noun_phrase;
pub mod pipeline;
pub mod substitution;
pub mod tables;
pub mod truncation;

pub use error::{Result, TableError};
pub use mutation::MutationTables;
pub use pipeline::{Abbreviation, Abbreviator, DEFAULT_MAX_LEN};
pub use tables::{default_tables, AbbrTables};

/// Abbreviate with the built-in Irish tables and the default budget.
pub fn abbreviate(name: &str) -> String {
    Abbreviator::default().abbreviate(name).output
}
